// src/config.rs

//! Application configuration loaded from environment variables.
//!
//! This module defines all startup-time configuration for the service.
//! Configuration is validated eagerly and failures are treated as
//! deployment errors rather than recoverable runtime conditions.

use anyhow::Result;
use std::time::Duration;

// ============================================================
// Local macros (config-only, intentionally explicit)
// ============================================================

/// Reads a required environment variable.
///
/// # Behavior
/// - Fails fast if the variable is missing
/// - Produces a clear, human-readable error message
/// - Intended for startup-time configuration validation
macro_rules! required_env {
    // ---
    ($key:literal) => {
        std::env::var($key)
            .map_err(|_| anyhow::anyhow!(concat!("Missing required configuration: ", $key)))?
    };
}

/// Reads an optional environment variable and attempts to parse it.
///
/// If the variable is missing or cannot be parsed, the provided
/// default value is used. This macro is appropriate for non-critical
/// tuning parameters where fallback behavior is acceptable.
macro_rules! optional_env_parse {
    // ---
    ($key:literal, $ty:ty, $default:expr) => {
        std::env::var($key)
            .ok()
            .and_then(|v| v.trim().parse::<$ty>().ok())
            .unwrap_or($default)
    };
}

#[cfg(test)]
/// Asserts that a configuration constructor fails due to a missing
/// required environment variable.
macro_rules! assert_missing_config {
    // ---
    ($expr:expr, $key:literal) => {{
        let err = $expr.expect_err("expected configuration error");
        assert!(
            err.to_string()
                .contains(concat!("Missing required configuration: ", $key)),
            "unexpected error: {err}"
        );
    }};
}

// ============================================================
// Public configuration facade
// ============================================================

/// Aggregated application configuration.
///
/// This is the single source of truth for startup configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: database::DatabaseConfig,
    pub server: server::ServerConfig,
}

impl AppConfig {
    /// Loads and validates all application configuration from the environment.
    ///
    /// # Errors
    /// Returns an error if any required configuration is missing or invalid.
    pub fn from_env() -> Result<Self> {
        // ---
        Ok(Self {
            database: database::DatabaseConfig::from_env()?,
            server: server::ServerConfig::from_env()?,
        })
    }
}

// ============================================================
// Database configuration
// ============================================================

mod database {
    // ---
    use super::*;

    /// Connection pool and startup-retry settings for the accounts database.
    #[derive(Debug, Clone)]
    pub struct DatabaseConfig {
        /// PostgreSQL connection string.
        pub database_url: String,

        /// Connection attempts made before startup gives up. Defaults to 5, never below 1.
        pub retry_count: u32,

        /// Pause between failed connection attempts. Defaults to 5 seconds.
        pub retry_interval: Duration,

        /// Steady-state pool size. Defaults to 5.
        pub pool_size: u32,

        /// Connections allowed above `pool_size` under load. Defaults to 10.
        pub max_overflow: u32,

        /// Connections kept open even when idle. Defaults to 0.
        pub min_connections: u32,

        /// Maximum time to wait when acquiring a connection from the pool. Defaults to 30 seconds.
        pub acquire_timeout: Duration,

        /// Connections older than this are closed and replaced. Defaults to one hour.
        pub recycle: Duration,

        /// Check connection liveness before handing it out. Defaults to true.
        pub pre_ping: bool,

        /// Log every SQL statement. Defaults to false.
        pub echo: bool,
    }

    impl DatabaseConfig {
        /// Builds a [`DatabaseConfig`] from environment variables.
        ///
        /// # Errors
        /// Returns an error if `DATABASE_URL` is missing.
        pub fn from_env() -> Result<Self> {
            // ---
            let database_url = required_env!("DATABASE_URL");
            let retry_count = optional_env_parse!("ACCOUNTS_DB_RETRY_COUNT", u32, 5);
            let retry_interval_secs = optional_env_parse!("ACCOUNTS_DB_RETRY_INTERVAL_SEC", u64, 5);
            let pool_size = optional_env_parse!("ACCOUNTS_DB_POOL_SIZE", u32, 5);
            let max_overflow = optional_env_parse!("ACCOUNTS_DB_MAX_OVERFLOW", u32, 10);
            let min_connections = optional_env_parse!("ACCOUNTS_DB_MIN_CONNECTIONS", u32, 0);
            let acquire_timeout_secs =
                optional_env_parse!("ACCOUNTS_DB_ACQUIRE_TIMEOUT_SEC", u64, 30);
            let recycle_secs = optional_env_parse!("ACCOUNTS_DB_RECYCLE_SEC", u64, 3600);
            let pre_ping = optional_env_parse!("ACCOUNTS_DB_PRE_PING", bool, true);
            let echo = optional_env_parse!("ACCOUNTS_DB_ECHO", bool, false);

            Ok(Self {
                database_url,
                retry_count: retry_count.max(1),
                retry_interval: Duration::from_secs(retry_interval_secs),
                pool_size,
                max_overflow,
                min_connections,
                acquire_timeout: Duration::from_secs(acquire_timeout_secs),
                recycle: Duration::from_secs(recycle_secs),
                pre_ping,
                echo,
            })
        }

        /// Config with library defaults for the given URL, without reading the environment.
        pub fn new(database_url: impl Into<String>) -> Self {
            // ---
            Self {
                database_url: database_url.into(),
                retry_count: 5,
                retry_interval: Duration::from_secs(5),
                pool_size: 5,
                max_overflow: 10,
                min_connections: 0,
                acquire_timeout: Duration::from_secs(30),
                recycle: Duration::from_secs(3600),
                pre_ping: true,
                echo: false,
            }
        }

        /// Hard ceiling on open connections: `pool_size + max_overflow`.
        pub fn max_connections(&self) -> u32 {
            // ---
            self.pool_size.saturating_add(self.max_overflow).max(1)
        }
    }
}
pub use database::DatabaseConfig;

// ============================================================
// Server configuration
// ============================================================

mod server {
    // ---
    use super::*;

    /// HTTP surface settings.
    #[derive(Debug, Clone)]
    pub struct ServerConfig {
        /// Address the HTTP listener binds to.
        pub bind_addr: String,

        /// `prom` selects Prometheus metrics, anything else the no-op backend.
        pub metrics_type: String,
    }

    impl ServerConfig {
        pub fn from_env() -> Result<Self> {
            // ---
            let bind_addr = std::env::var("ACCOUNTS_BIND_ADDR")
                .unwrap_or_else(|_| "127.0.0.1:8080".to_string());
            let metrics_type =
                std::env::var("ACCOUNTS_METRICS_TYPE").unwrap_or_else(|_| "noop".to_string());

            Ok(Self {
                bind_addr,
                metrics_type,
            })
        }

        pub fn prometheus_enabled(&self) -> bool {
            // ---
            self.metrics_type == "prom"
        }
    }
}
pub use server::ServerConfig;

// ============================================================
// Tests
// ============================================================
