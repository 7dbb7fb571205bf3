use crate::infrastructure::database::PoolStats;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pool: Option<PoolStats>,
}

#[derive(Deserialize)]
pub struct HealthQuery {
    mode: Option<String>,
}

/// Responds with the health status of the server.
///
/// - By default (no query parameters), performs a light check to confirm the web server
///   is running.
///
/// - If `mode=full` is passed as a query parameter, also pings the database engine
///   and reports pool occupancy. The probe never opens a new engine.
///
/// # Responses
/// - `200 OK` with `{ "status": "ok" }` if server (and database, in full mode) are healthy.
/// - `500 INTERNAL SERVER ERROR` with `{ "status": "error" }` if the ping fails in full mode.
pub async fn health_check(
    State(state): State<AppState>,
    Query(params): Query<HealthQuery>,
) -> (StatusCode, Json<HealthResponse>) {
    match params.mode.as_deref() {
        Some("full") => match state.database().ping().await {
            Ok(stats) => (
                StatusCode::OK,
                Json(HealthResponse {
                    status: "ok",
                    pool: Some(stats),
                }),
            ),
            Err(err) => {
                tracing::warn!("Health check failed: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(HealthResponse {
                        status: "error",
                        pool: None,
                    }),
                )
            }
        },
        _ => {
            // Light health check
            (
                StatusCode::OK,
                Json(HealthResponse {
                    status: "ok",
                    pool: None,
                }),
            )
        }
    }
}
