mod account_models;
mod metrics;
mod repository;

// Publicly expose the Metrics abstraction
pub use metrics::{Metrics, MetricsPtr};

// Publicly expose the accounts model and persistence abstraction
pub use account_models::{Account, AccountUpdate, NewAccount, DEFAULT_STATUS};
pub use repository::{AccountRepository, RepositoryPtr};
