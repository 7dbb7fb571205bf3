use crate::infrastructure::database::DatabaseError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Wrapper type for successful API responses.
///
/// Encapsulates the data payload and prepares it for JSON serialization.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> IntoResponse for ApiResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        axum::Json(self).into_response()
    }
}

/// Maps a repository failure to the status the client sees, logging it.
///
/// - duplicate primary key: `409 Conflict`
/// - database unreachable or closed: `503 Service Unavailable`
/// - anything else: `500 Internal Server Error`
pub fn error_status(err: &anyhow::Error) -> StatusCode {
    // ---
    if let Some(sqlx::Error::Database(db_err)) = err.downcast_ref::<sqlx::Error>() {
        if db_err.is_unique_violation() {
            return StatusCode::CONFLICT;
        }
    }

    if err.downcast_ref::<DatabaseError>().is_some()
        || matches!(
            err.downcast_ref::<sqlx::Error>(),
            Some(sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed)
        )
    {
        tracing::error!("Database unavailable: {err:#}");
        return StatusCode::SERVICE_UNAVAILABLE;
    }

    tracing::error!("Repository error: {err:#}");
    StatusCode::INTERNAL_SERVER_ERROR
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn lifecycle_errors_are_unavailable() {
        // ---
        let err = anyhow::Error::from(DatabaseError::NotInitialized);
        assert_eq!(error_status(&err), StatusCode::SERVICE_UNAVAILABLE);

        let err = anyhow::Error::from(sqlx::Error::PoolTimedOut);
        assert_eq!(error_status(&err), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn other_errors_are_internal() {
        // ---
        let err = anyhow::anyhow!("disk on fire");
        assert_eq!(error_status(&err), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
