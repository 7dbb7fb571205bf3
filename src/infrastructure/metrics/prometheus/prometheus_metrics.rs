//! Prometheus metrics implementation.
//!
//! This module provides a concrete implementation of the `Metrics` trait using
//! the Prometheus metrics format. It delegates to utility functions in sibling
//! modules (`counters.rs`, `recorder.rs`) which handle the actual metrics
//! collection via the global `metrics` crate registry.

use crate::domain::Metrics;
use std::time::Instant;

/// Prometheus-based metrics implementation.
///
/// Carries no state: metrics live in the global registry installed by
/// `recorder.rs`, and the macros in `counters.rs` register them on first use.
pub struct PrometheusMetrics {}

impl PrometheusMetrics {
    pub fn new() -> Self {
        tracing::info!("Creating Prometheus metrics");
        PrometheusMetrics {}
    }
}

impl Metrics for PrometheusMetrics {
    fn render(&self) -> String {
        super::render_metrics()
    }

    fn record_db_connect(&self, success: bool) {
        tracing::debug!(success, "Recording database connect attempt");
        super::increment_db_connect(success);
    }

    fn record_session_rollback(&self) {
        super::increment_session_rollback();
    }

    fn record_account_created(&self) {
        tracing::debug!("Recording account created event");
        super::increment_account_created();
    }

    fn record_http_request(&self, start: Instant, path: &str, method: &str, status: u16) {
        super::track_http_request(start, path, method, status);
    }
}
