//! Main MCP server orchestration.

use std::sync::Arc;

use crate::config::Config;
use crate::error::AppError;
use crate::storage::SqliteStorage;

use super::tools::ExpenseServer;
use super::transport::StdioTransport;
use super::types::AppState;

/// Main MCP server that orchestrates all components.
///
/// Owns the startup sequence: open the store, initialize the schema, probe
/// for write access, then serve over stdio.
#[derive(Debug)]
pub struct McpServer {
    config: Config,
}

impl McpServer {
    /// Creates a new MCP server with the given configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Open the configured store and build the tool server around it.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened, initialized, or
    /// written to.
    pub async fn build(&self) -> Result<ExpenseServer, AppError> {
        let storage = SqliteStorage::with_max_connections(
            &self.config.database_path,
            self.config.max_connections,
        )
        .await?;
        storage.verify_writable().await?;

        let existing = storage.count_expenses().await?;
        tracing::info!(expenses = existing, "Expense store ready");

        let state = AppState::new(storage);
        Ok(ExpenseServer::new(Arc::new(state)))
    }

    /// Runs the server using stdio transport.
    ///
    /// Blocks until the client disconnects or an error occurs.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Storage initialization fails
    /// - Server encounters a runtime error
    pub async fn run_stdio(&self) -> Result<(), AppError> {
        let server = self.build().await?;

        let running = StdioTransport::new().serve(server).await?;
        let reason = running.waiting().await;
        tracing::debug!(?reason, "MCP session ended");

        Ok(())
    }

    /// Returns the server configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }
}
