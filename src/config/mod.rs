//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading (with optional `.env` file)
//! - Configuration validation
//! - Default value handling
//!
//! # Example
//!
//! ```
//! use expense_tracker::config::{Config, DEFAULT_LOG_LEVEL, DEFAULT_MAX_CONNECTIONS};
//!
//! // Create a config directly (use Config::from_env() in production)
//! let config = Config {
//!     database_path: "/tmp/expenses.db".to_string(),
//!     log_level: DEFAULT_LOG_LEVEL.to_string(),
//!     max_connections: DEFAULT_MAX_CONNECTIONS,
//! };
//!
//! assert_eq!(config.max_connections, 5);
//! ```

mod validation;

pub use validation::{validate_config, MAX_CONNECTIONS, VALID_LOG_LEVELS};

use crate::error::ConfigError;

/// File name of the expense database inside the temp directory.
pub const DEFAULT_DATABASE_FILE: &str = "expenses.db";

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default connection pool size.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default database location: `<temp dir>/expenses.db`.
///
/// The file lives in the process temp directory but is reused across runs;
/// it is the store of record, not a cache.
#[must_use]
pub fn default_database_path() -> String {
    std::env::temp_dir()
        .join(DEFAULT_DATABASE_FILE)
        .display()
        .to_string()
}

/// Application configuration.
///
/// Use [`Config::from_env`] to load configuration from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Database path.
    pub database_path: String,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: String,
    /// Maximum pooled `SQLite` connections.
    pub max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables (with defaults):
    /// - `DATABASE_PATH`: Path to `SQLite` database (default: `<temp dir>/expenses.db`)
    /// - `LOG_LEVEL`: Logging level (default: `info`)
    /// - `DATABASE_MAX_CONNECTIONS`: Pool size (default: `5`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - `DATABASE_MAX_CONNECTIONS` is not a valid positive integer
    /// - Any value fails validation (see [`validate_config`])
    #[must_use = "configuration should be used"]
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let database_path =
            std::env::var("DATABASE_PATH").unwrap_or_else(|_| default_database_path());

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into());

        let max_connections = parse_env_u32("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;

        let config = Self {
            database_path,
            log_level,
            max_connections,
        };

        validate_config(&config)?;
        Ok(config)
    }
}

/// Parse an environment variable as u32, using a default if not set.
fn parse_env_u32(name: &str, default: u32) -> Result<u32, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a positive integer".into(),
        })
    })
}
