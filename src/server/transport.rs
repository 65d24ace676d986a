//! Transport layer for MCP server.
//!
//! The server speaks MCP over stdio only; stdout carries JSON-RPC frames.

use rmcp::service::{serve_server, RoleServer, RunningService};
use rmcp::transport::io::stdio;

use super::tools::ExpenseServer;
use crate::error::{AppError, McpError};

/// Stdio transport handler.
#[derive(Debug, Default)]
pub struct StdioTransport;

impl StdioTransport {
    /// Creates a new stdio transport.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Starts serving on stdin/stdout.
    ///
    /// Returns once the MCP handshake completes; await
    /// [`RunningService::waiting`] to block until the client disconnects.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to start.
    pub async fn serve(
        self,
        server: ExpenseServer,
    ) -> Result<RunningService<RoleServer, ExpenseServer>, AppError> {
        let (stdin, stdout) = stdio();

        serve_server(server, (stdin, stdout)).await.map_err(|e| {
            AppError::Mcp(McpError::Internal {
                message: e.to_string(),
            })
        })
    }
}
