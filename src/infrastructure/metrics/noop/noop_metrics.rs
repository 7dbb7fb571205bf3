use crate::domain::Metrics;
use std::time::Instant;

/// Metrics sink that records nothing.
#[derive(Default)]
pub struct NoopMetrics;

impl NoopMetrics {
    pub fn new() -> Self {
        NoopMetrics
    }
}

impl Metrics for NoopMetrics {
    // ---
    fn render(&self) -> String {
        String::new()
    }
    fn record_db_connect(&self, _success: bool) {}
    fn record_session_rollback(&self) {}
    fn record_account_created(&self) {}
    fn record_http_request(&self, _: Instant, _: &str, _: &str, _: u16) {}
}
