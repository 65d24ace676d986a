//! Response types for expense tools.
//!
//! Tool results are returned as a single JSON text content block. Listing
//! and summary results reuse the storage row types directly, whose field
//! order fixes the key order of each record.

use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::McpError;

/// Status value reported by a successful insert.
pub const STATUS_SUCCESS: &str = "success";

/// Response from `add_expense`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AddExpenseResponse {
    /// Always `"success"`; failures use the protocol error channel.
    pub status: String,
    /// Id assigned to the new expense.
    pub id: i64,
}

impl AddExpenseResponse {
    /// Build a success response for the given id.
    #[must_use]
    pub fn success(id: i64) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            id,
        }
    }
}

/// Serialize `value` into a successful tool result with one JSON text block.
///
/// # Errors
///
/// Returns an internal [`ErrorData`] if serialization fails.
pub fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, ErrorData> {
    let json = serde_json::to_string(value).map_err(|e| McpError::Internal {
        message: format!("Failed to serialize tool result: {e}"),
    })?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}
