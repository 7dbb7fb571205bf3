// src/lib.rs
use app_state::AppState;
use axum::{middleware, routing::get, Router};
use std::sync::Arc;

use handlers::*;

// Public exports (visible outside this module)
pub mod domain;

// Internal-only exports (sibling access within this module)
mod app_state;
mod config;
mod handlers;
mod infrastructure;

pub use config::*;

// Publicly expose the database layer, with the everyday symbols hoisted
pub use infrastructure::database;
pub use infrastructure::database::{
    accounts, connect_with_retry, init_database_with_retry_from_env, Database, DatabaseError,
    Engine, PoolStats, PostgresRepository, Session, SessionFactory,
};

// Publicly expose the infrastructure creation functions
pub use infrastructure::{
    create_noop_metrics, // ---
    create_postgres_repository,
    create_prom_metrics,
};

/// Pick the metrics backend named by the server configuration.
pub fn create_metrics(config: &ServerConfig) -> anyhow::Result<domain::MetricsPtr> {
    // ---
    if config.prometheus_enabled() {
        create_prom_metrics()
    } else {
        create_noop_metrics()
    }
}

/// Build the HTTP router over an existing database handle.
///
/// The router never connects by itself: requests that need the database go
/// through `database`, which connects lazily on first use.
pub fn create_router(database: Database, metrics: domain::MetricsPtr) -> Router {
    // ---
    let repository = Arc::new(PostgresRepository::new(database.clone()));
    let app_state = AppState::new(metrics, repository, database);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/accounts", get(list_accounts).post(create_account))
        .route(
            "/accounts/{email}",
            get(get_account).put(update_account).delete(delete_account),
        )
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            track_requests,
        ))
        .with_state(app_state)
}
