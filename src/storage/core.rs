//! Core `SQLite` storage implementation.
//!
//! This module provides the main [`SqliteStorage`] struct, pool management,
//! schema initialization and error helpers.

#![allow(clippy::missing_errors_doc)]

use crate::config::DEFAULT_MAX_CONNECTIONS;
use crate::error::StorageError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// `SQLite` storage backend for the expense ledger.
///
/// Cloning is cheap; clones share the same connection pool. Each operation
/// checks a connection out of the pool for a single statement and returns it
/// on every exit path.
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    pub(crate) pool: SqlitePool,
}

impl SqliteStorage {
    /// Get a clone of the connection pool.
    #[must_use]
    pub fn get_pool(&self) -> SqlitePool {
        self.pool.clone()
    }

    /// Open (or create) the database file and initialize the schema.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ConnectionFailed`] if the connection fails, or
    /// [`StorageError::MigrationFailed`] if the schema cannot be created.
    pub async fn new(database_path: impl AsRef<Path>) -> Result<Self, StorageError> {
        Self::with_max_connections(database_path, DEFAULT_MAX_CONNECTIONS).await
    }

    /// Same as [`SqliteStorage::new`] with an explicit pool size.
    pub async fn with_max_connections(
        database_path: impl AsRef<Path>,
        max_connections: u32,
    ) -> Result<Self, StorageError> {
        let path = database_path.as_ref();

        // Create parent directories if they don't exist
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::ConnectionFailed {
                message: format!("Failed to create database directory: {e}"),
            })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .journal_mode(SqliteJournalMode::Wal)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| match Self::classify_error("CONNECT", &e) {
                read_only @ StorageError::ReadOnly { .. } => read_only,
                _ => StorageError::ConnectionFailed {
                    message: format!("Failed to connect to database: {e}"),
                },
            })?;

        let storage = Self { pool };
        storage.initialize().await?;

        tracing::info!(
            path = %path.display(),
            max_connections,
            "Expense database opened"
        );

        Ok(storage)
    }

    /// Create a new in-memory `SQLite` storage instance for testing.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ConnectionFailed`] if the connection fails.
    pub async fn new_in_memory() -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| StorageError::ConnectionFailed {
                message: format!("Invalid memory database options: {e}"),
            })?
            .journal_mode(SqliteJournalMode::Wal);

        // A second connection would see a different, empty database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| StorageError::ConnectionFailed {
                message: format!("Failed to create in-memory database: {e}"),
            })?;

        let storage = Self { pool };
        storage.initialize().await?;

        Ok(storage)
    }

    /// Ensure the `expenses` table exists.
    ///
    /// Idempotent: uses `CREATE TABLE IF NOT EXISTS` and never drops or
    /// truncates existing data, so it is safe on every process start.
    pub async fn initialize(&self) -> Result<(), StorageError> {
        let schema_001 = include_str!("../../migrations/001_expenses.sql");
        sqlx::query(schema_001)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::MigrationFailed {
                version: "001".to_string(),
                message: format!("Failed to run migration 001: {e}"),
            })?;

        Ok(())
    }

    /// Check that the database accepts writes.
    ///
    /// Inserts a probe row inside a transaction and rolls it back, so no row
    /// is left behind and the id sequence does not advance.
    pub async fn verify_writable(&self) -> Result<(), StorageError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| Self::classify_error("BEGIN probe", &e))?;

        sqlx::query("INSERT INTO expenses (date, amount, category) VALUES ('0000-00-00', 0, '')")
            .execute(&mut *tx)
            .await
            .map_err(|e| Self::classify_error("INSERT expenses probe", &e))?;

        tx.rollback()
            .await
            .map_err(|e| Self::classify_error("ROLLBACK probe", &e))?;

        tracing::debug!("Database write probe succeeded");
        Ok(())
    }

    /// Create a query error with the given query name and message.
    pub(crate) fn query_error(query: &str, message: String) -> StorageError {
        StorageError::QueryFailed {
            query: query.to_string(),
            message,
        }
    }

    /// Map a driver error, singling out read-only failures.
    pub(crate) fn classify_error(query: &str, err: &sqlx::Error) -> StorageError {
        let message = err.to_string();
        let lowered = message.to_ascii_lowercase();
        if lowered.contains("readonly") || lowered.contains("read-only") {
            StorageError::ReadOnly { message }
        } else {
            Self::query_error(query, message)
        }
    }
}
