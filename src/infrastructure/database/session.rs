//! Unit-of-work sessions.
//!
//! A [`Session`] lazily begins a transaction the first time a query needs a
//! connection and keeps it open until [`Session::commit`],
//! [`Session::rollback`] or [`Session::close`]. Anything not committed when the
//! session closes (or is dropped) is rolled back.

use super::engine::Engine;
use super::error::DatabaseError;
use anyhow::Result;
use sqlx::{PgConnection, Postgres, Transaction};

/// Hands out sessions bound to one engine.
#[derive(Clone, Debug)]
pub struct SessionFactory {
    // ---
    engine: Engine,
}

impl SessionFactory {
    // ---
    pub fn new(engine: Engine) -> Self {
        // ---
        Self { engine }
    }

    pub fn session(&self) -> Session {
        // ---
        Session::new(self.engine.clone())
    }

    pub fn engine(&self) -> &Engine {
        // ---
        &self.engine
    }
}

/// A unit of work scoped to one logical transaction at a time.
pub struct Session {
    // ---
    engine: Engine,
    tx: Option<Transaction<'static, Postgres>>,
    closed: bool,
}

impl Session {
    // ---
    fn new(engine: Engine) -> Self {
        // ---
        Self {
            engine,
            tx: None,
            closed: false,
        }
    }

    /// Connection inside the session's transaction, beginning one if needed.
    ///
    /// # Errors
    /// [`DatabaseError::SessionClosed`] after `close`, or the pool error if no
    /// connection could be acquired.
    pub async fn connection(&mut self) -> Result<&mut PgConnection> {
        // ---
        if self.closed {
            return Err(DatabaseError::SessionClosed.into());
        }

        let tx = match self.tx.take() {
            Some(tx) => tx,
            None => {
                tracing::trace!("session: begin");
                self.engine.begin().await?
            }
        };

        Ok(&mut **self.tx.insert(tx))
    }

    /// Commits pending work. A session with nothing pending commits nothing.
    pub async fn commit(&mut self) -> Result<()> {
        // ---
        if self.closed {
            return Err(DatabaseError::SessionClosed.into());
        }
        if let Some(tx) = self.tx.take() {
            tracing::trace!("session: commit");
            tx.commit().await?;
        }
        Ok(())
    }

    /// Discards pending work. The session stays usable.
    pub async fn rollback(&mut self) -> Result<()> {
        // ---
        if let Some(tx) = self.tx.take() {
            tracing::trace!("session: rollback");
            tx.rollback().await?;
        }
        Ok(())
    }

    /// Rolls back anything uncommitted and releases the connection.
    ///
    /// Closing twice is a no-op.
    pub async fn close(&mut self) -> Result<()> {
        // ---
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.rollback().await
    }

    pub fn in_transaction(&self) -> bool {
        // ---
        self.tx.is_some()
    }

    pub fn is_closed(&self) -> bool {
        // ---
        self.closed
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("target", &self.engine.target())
            .field("in_transaction", &self.in_transaction())
            .field("closed", &self.closed)
            .finish()
    }
}
