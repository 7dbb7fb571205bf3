//! Application state management.
//!
//! This module defines the shared state structure that gets passed to all
//! Axum handlers via the `State` extractor. Every field is an `Arc` or a
//! handle wrapping one, so cloning per request is cheap.

use crate::domain::{MetricsPtr, RepositoryPtr};
use crate::infrastructure::database::Database;

/// Shared application state passed to all Axum handlers.
///
/// Built once at startup and never mutated; handlers open their own
/// sessions through the repository.
#[derive(Clone)]
pub(crate) struct AppState {
    /// Metrics implementation for recording application events.
    ///
    /// Either Prometheus-backed (production) or no-op (testing/development).
    metrics: MetricsPtr,

    /// Account persistence, one scoped session per call.
    repository: RepositoryPtr,

    /// Lifecycle handle, used by the full health check to probe the engine.
    database: Database,
}

impl AppState {
    // ---

    pub fn new(metrics: MetricsPtr, repository: RepositoryPtr, database: Database) -> Self {
        // ---
        AppState {
            metrics,
            repository,
            database,
        }
    }

    /// Get a reference to the metrics implementation.
    pub(crate) fn metrics(&self) -> &MetricsPtr {
        // ---
        &self.metrics
    }

    /// Get a reference to the repository implementation.
    pub(crate) fn repository(&self) -> &RepositoryPtr {
        // ---
        &self.repository
    }

    pub(crate) fn database(&self) -> &Database {
        // ---
        &self.database
    }
}

#[cfg(test)]
mod tests {
    // ---

    use super::*;
    use crate::config::DatabaseConfig;
    use crate::domain::{Account, AccountRepository, AccountUpdate, NewAccount};
    use crate::infrastructure::create_noop_metrics;
    use anyhow::Result;
    use std::sync::Arc;

    // Mock repository for unit tests - not used, just satisfies AppState requirements
    struct MockRepository;

    #[async_trait::async_trait]
    impl AccountRepository for MockRepository {
        // ---

        async fn create(&self, _account: NewAccount) -> Result<Account> {
            unimplemented!("Mock repository - not used in AppState unit tests")
        }
        async fn get(&self, _email: &str) -> Result<Option<Account>> {
            unimplemented!()
        }
        async fn list(&self, _status: Option<&str>) -> Result<Vec<Account>> {
            unimplemented!()
        }
        async fn update(&self, _email: &str, _changes: AccountUpdate) -> Result<Option<Account>> {
            unimplemented!()
        }
        async fn delete(&self, _email: &str) -> Result<bool> {
            unimplemented!()
        }
        async fn count(&self) -> Result<i64> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_app_state_creation_and_clone() {
        // ---
        let metrics = create_noop_metrics().unwrap();
        let database = Database::new(
            DatabaseConfig::new("postgres://localhost/accounts"),
            metrics.clone(),
        );
        let app_state = AppState::new(metrics, Arc::new(MockRepository), database);
        let cloned = app_state.clone();

        // Verify accessors work
        let _metrics_ref = cloned.metrics();
        let _repo_ref = cloned.repository();
        assert!(!cloned.database().is_connected().await);
        assert_eq!(
            app_state.database().config().database_url,
            "postgres://localhost/accounts"
        );
    }
}
