// Gateway module - controls public API for handlers
// Modules are private, only exported symbols are public

mod accounts;
mod health;
mod metrics;
mod root;
mod shared_types;

// Core handlers
pub use health::health_check;
pub use metrics::{metrics_handler, track_requests};
pub use root::root_handler;

// Account CRUD handlers
pub use accounts::{create_account, delete_account, get_account, list_accounts, update_account};
