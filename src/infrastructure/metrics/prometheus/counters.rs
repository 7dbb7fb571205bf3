use metrics::{counter, histogram};
use std::time::Instant;

/// Count one connection attempt, labelled by outcome.
pub fn increment_db_connect(success: bool) {
    let outcome = if success { "success" } else { "failure" };
    counter!("db_connect_attempts_total", "outcome" => outcome).increment(1);
}

/// Count a scoped session that ended in rollback.
pub fn increment_session_rollback() {
    counter!("db_session_rollbacks_total").increment(1);
}

/// Increment a counter for created accounts.
pub fn increment_account_created() {
    counter!("accounts_created_total").increment(1);
}

/// Track HTTP request latency using a histogram.
pub fn track_http_request(start: Instant, path: &str, method: &str, status: u16) {
    let elapsed = start.elapsed();
    histogram!(
        "http_request_duration_seconds",
        "path" => path.to_string(),
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .record(elapsed);
}
