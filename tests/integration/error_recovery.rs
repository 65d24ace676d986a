//! Error recovery and edge case tests.
//!
//! Tests how the system reports failures through the MCP error channel.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use expense_tracker::config::Config;
use expense_tracker::error::{AppError, StorageError};
use expense_tracker::server::{
    read_catalog, AddExpenseRequest, AppState, ExpenseServer, McpServer,
};
use expense_tracker::storage::{NewExpense, SqliteStorage};
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::ErrorCode;
use serde_json::json;
use tempfile::TempDir;

/// In-memory store whose only connection refuses writes.
async fn create_read_only_storage() -> SqliteStorage {
    let storage = SqliteStorage::new_in_memory()
        .await
        .expect("Failed to create storage");
    sqlx::query("PRAGMA query_only = ON")
        .execute(&storage.get_pool())
        .await
        .expect("Failed to set query_only");
    storage
}

#[tokio::test]
async fn test_read_only_insert_is_classified() {
    let storage = create_read_only_storage().await;

    let err = storage
        .insert_expense(&NewExpense::new("2024-01-01", 1.0, "Other"))
        .await
        .expect_err("write should fail");

    assert!(err.is_read_only(), "unexpected error: {err}");
    assert!(err.to_string().contains("read-only mode"));
}

#[tokio::test]
async fn test_read_only_probe_fails() {
    let storage = create_read_only_storage().await;

    let result = storage.verify_writable().await;
    assert!(matches!(result, Err(StorageError::ReadOnly { .. })));
}

#[tokio::test]
async fn test_read_only_reads_still_work() {
    let storage = create_read_only_storage().await;

    let listed = storage
        .list_expenses("2024-01-01", "2024-12-31")
        .await
        .expect("reads should succeed");
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_add_expense_failure_uses_error_channel() {
    let storage = create_read_only_storage().await;
    let server = ExpenseServer::new(Arc::new(AppState::new(storage)));

    let err = server
        .add_expense(Parameters(AddExpenseRequest {
            date: "2024-01-01".to_string(),
            amount: 1.0,
            category: "Other".to_string(),
            subcategory: String::new(),
            note: String::new(),
        }))
        .await
        .expect_err("tool should fail");

    assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    assert!(err.message.contains("read-only"));
}

#[tokio::test]
async fn test_build_fails_when_path_is_directory() {
    let temp_dir = TempDir::new().expect("temp dir");
    let config = Config {
        database_path: temp_dir.path().to_string_lossy().into_owned(),
        ..Config::default()
    };

    let result = McpServer::new(config).build().await;
    assert!(matches!(result, Err(AppError::Storage(_))));
}

#[test]
fn test_unknown_resource_is_rejected() {
    let result = read_catalog("expense:///budgets");
    assert!(result.is_err());
}

#[test]
fn test_non_numeric_amount_is_rejected() {
    let result: Result<AddExpenseRequest, _> = serde_json::from_value(json!({
        "date": "2024-01-01",
        "amount": "twelve",
        "category": "Other"
    }));
    assert!(result.is_err());
}

#[test]
fn test_missing_required_field_is_rejected() {
    let result: Result<AddExpenseRequest, _> = serde_json::from_value(json!({
        "date": "2024-01-01",
        "category": "Other"
    }));
    assert!(result.is_err());
}
