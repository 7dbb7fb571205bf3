// Two interchangeable Metrics backends; lib.rs picks one from ServerConfig.
pub mod noop;
pub mod prometheus;

pub use noop::create as create_noop_metrics;
pub use prometheus::create as create_prom_metrics;
