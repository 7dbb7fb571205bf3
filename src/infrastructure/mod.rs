// Concrete adapters behind the domain traits.
pub mod database;
pub mod metrics;

pub use database::create_postgres_repository;
pub use metrics::{create_noop_metrics, create_prom_metrics};
