use thiserror::Error;

/// Failures of the database lifecycle itself, as opposed to query errors.
///
/// These travel inside `anyhow::Error`; use `downcast_ref::<DatabaseError>()`
/// to branch on them.
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("could not connect to database after {attempts} attempt(s): {source}")]
    ConnectFailed {
        attempts: u32,
        #[source]
        source: sqlx::Error,
    },

    #[error("database has not been initialized")]
    NotInitialized,

    #[error("session is closed")]
    SessionClosed,
}
