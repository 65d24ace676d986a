//! MCP server implementation.
//!
//! This module provides:
//! - Tool definitions with rmcp macros (`add_expense`, `list_expenses`, `summarize`)
//! - The static `expense:///categories` resource
//! - Stdio transport
//! - Startup orchestration via [`McpServer`]
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use expense_tracker::config::Config;
//! use expense_tracker::server::{AppState, ExpenseServer};
//! use expense_tracker::storage::SqliteStorage;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let storage = SqliteStorage::new(&config.database_path).await?;
//! let state = AppState::new(storage);
//! let server = ExpenseServer::new(Arc::new(state));
//! # Ok(())
//! # }
//! ```

mod mcp;
mod requests;
mod resources;
mod responses;
mod tools;
mod transport;
mod types;

pub use mcp::McpServer;
pub use requests::{AddExpenseRequest, ListExpensesRequest, SummarizeRequest};
pub use resources::{list_catalog_resources, read_catalog};
pub use responses::{json_result, AddExpenseResponse, STATUS_SUCCESS};
pub use tools::{ExpenseServer, SERVER_NAME};
pub use transport::StdioTransport;
pub use types::AppState;
