use accounts_db::{create_metrics, create_router, AppConfig, Database};
use anyhow::Result;
use tracing::info;

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    // ---
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {err}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => tracing::error!("Failed to listen for SIGTERM: {err}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    // ---
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber to log to stdout
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;
    let metrics = create_metrics(&config.server)?;

    info!("Starting accounts service v{}...", env!("CARGO_PKG_VERSION"));

    let database = Database::new(config.database.clone(), metrics.clone());
    if !accounts_db::database::install_database(database.clone()) {
        tracing::warn!("a process-wide database handle was already installed; keeping it");
    }
    database.init_db().await?;

    let app = create_router(database.clone(), metrics);

    info!("Starting at endpoint:{}", config.server.bind_addr);
    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr).await?;
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    database.close().await;
    served?;

    Ok(())
}
