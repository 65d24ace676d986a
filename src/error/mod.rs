//! Error types for the Expense Tracker server.
//!
//! This module defines a hierarchical error system:
//! - [`AppError`]: Top-level application errors
//! - [`StorageError`]: Database operation errors
//! - [`McpError`]: MCP protocol errors
//! - [`ConfigError`]: Configuration errors
//!
//! All errors implement `Send + Sync` for async compatibility.
//!
//! Storage and protocol errors convert into [`rmcp::ErrorData`] so tool
//! handlers surface failures through the protocol's error channel rather than
//! as success-shaped payloads.

use rmcp::ErrorData;
use thiserror::Error;

/// Top-level application error.
///
/// This is the main error type returned by public API functions.
/// It wraps all subsystem errors for unified error handling.
#[derive(Debug, Error)]
pub enum AppError {
    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// MCP protocol error.
    #[error("MCP protocol error: {0}")]
    Mcp(#[from] McpError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Storage errors.
///
/// These errors represent failures in database operations. None of them are
/// retried; they propagate to the caller as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Failed to connect to the database.
    #[error("Database connection failed: {message}")]
    ConnectionFailed {
        /// Description of the connection failure.
        message: String,
    },

    /// A database query failed.
    #[error("Query failed: {query} - {message}")]
    QueryFailed {
        /// The query that failed (may be truncated).
        query: String,
        /// Description of the failure.
        message: String,
    },

    /// The database file or directory cannot be written.
    #[error("Database is in read-only mode, check file permissions: {message}")]
    ReadOnly {
        /// Driver message.
        message: String,
    },

    /// Schema initialization failed.
    #[error("Migration failed: {version} - {message}")]
    MigrationFailed {
        /// The migration version that failed.
        version: String,
        /// Description of the failure.
        message: String,
    },
}

impl StorageError {
    /// Returns true if the error indicates the medium is not writable.
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        matches!(self, Self::ReadOnly { .. })
    }
}

/// MCP protocol errors.
///
/// These errors represent failures in MCP JSON-RPC communication.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum McpError {
    /// Unknown resource requested.
    #[error("Unknown resource: {uri}")]
    UnknownResource {
        /// The requested URI.
        uri: String,
    },

    /// Internal server error.
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

/// Configuration errors.
///
/// These errors represent failures in configuration loading and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}

impl From<StorageError> for ErrorData {
    fn from(err: StorageError) -> Self {
        Self::internal_error(err.to_string(), None)
    }
}

impl From<McpError> for ErrorData {
    fn from(err: McpError) -> Self {
        match err {
            McpError::UnknownResource { .. } => Self::resource_not_found(err.to_string(), None),
            McpError::Internal { .. } => Self::internal_error(err.to_string(), None),
        }
    }
}
