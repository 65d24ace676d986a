//! Tool definitions with rmcp macros.
//!
//! `#[tool_router]` collects the three expense tools; `#[tool_handler]` wires
//! them into [`ServerHandler`]. Resource listing and reading are implemented
//! by hand since the catalog is a single static document.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, ListResourcesResult, PaginatedRequestParams, ReadResourceRequestParams,
    ReadResourceResult, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{tool, tool_handler, tool_router, ErrorData, RoleServer, ServerHandler};

use super::requests::{AddExpenseRequest, ListExpensesRequest, SummarizeRequest};
use super::resources::{list_catalog_resources, read_catalog};
use super::responses::{json_result, AddExpenseResponse};
use super::types::AppState;
use crate::catalog::is_known_category;
use crate::storage::NewExpense;

/// Name reported in the MCP handshake.
pub const SERVER_NAME: &str = "expense-tracker";

/// Expense tracker MCP server.
#[derive(Clone)]
pub struct ExpenseServer {
    /// Shared application state.
    pub state: Arc<AppState>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ExpenseServer {
    /// Creates a new expense server.
    #[must_use]
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            tool_router: Self::tool_router(),
        }
    }

    /// Insert one expense.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the store rejects the write.
    #[tool(description = "Add a new expense entry to the database.")]
    pub async fn add_expense(
        &self,
        Parameters(req): Parameters<AddExpenseRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        let expense = NewExpense::from(req);
        if !is_known_category(&expense.category) {
            tracing::debug!(category = %expense.category, "Category outside the catalog");
        }
        let id = self.state.storage.insert(&expense).await.map_err(|e| {
            tracing::error!(error = %e, "add_expense failed");
            e
        })?;

        json_result(&AddExpenseResponse::success(id))
    }

    /// List expenses within an inclusive date range, newest first.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the query fails.
    #[tool(description = "List expense entries within an inclusive date range.")]
    pub async fn list_expenses(
        &self,
        Parameters(req): Parameters<ListExpensesRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        let rows = self
            .state
            .storage
            .list_in_range(&req.start_date, &req.end_date)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "list_expenses failed");
                e
            })?;

        json_result(&rows)
    }

    /// Summarize expenses by category within an inclusive date range.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the query fails.
    #[tool(description = "Summarize expenses by category within an inclusive date range.")]
    pub async fn summarize(
        &self,
        Parameters(req): Parameters<SummarizeRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        let category = req.category_filter();
        let rows = self
            .state
            .storage
            .summarize(&req.start_date, &req.end_date, category)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "summarize failed");
                e
            })?;

        json_result(&rows)
    }
}

#[tool_handler]
impl ServerHandler for ExpenseServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder()
            .enable_tools()
            .enable_resources()
            .build();
        info.server_info.name = SERVER_NAME.to_string();
        info.server_info.version = env!("CARGO_PKG_VERSION").to_string();
        info.instructions = Some(
            "Personal expense tracker. Read expense:///categories for suggested category \
             labels, then use add_expense, list_expenses and summarize. Dates are YYYY-MM-DD."
                .to_string(),
        );
        info
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult::with_all_items(list_catalog_resources()))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        read_catalog(&request.uri).map_err(ErrorData::from)
    }
}
