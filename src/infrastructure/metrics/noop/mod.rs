// src/infrastructure/metrics/noop/mod.rs
mod noop_metrics;

pub use noop_metrics::NoopMetrics;
use std::sync::Arc;

/// Metrics backend that drops every event and renders an empty page.
///
/// The default when `ACCOUNTS_METRICS_TYPE` is unset, and what the database
/// layer falls back to when it is built straight from the environment.
pub fn create() -> anyhow::Result<crate::domain::MetricsPtr> {
    Ok(Arc::new(NoopMetrics::new()))
}
