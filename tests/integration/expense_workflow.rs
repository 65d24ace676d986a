//! End-to-end expense workflow tests.
//!
//! Tests the full startup path: config → build → tools → restart.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

use expense_tracker::config::Config;
use expense_tracker::server::{
    AddExpenseRequest, ExpenseServer, ListExpensesRequest, McpServer, SummarizeRequest,
};
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use serde_json::{json, Value};
use tempfile::TempDir;

fn config_for(temp_dir: &TempDir) -> Config {
    Config {
        database_path: temp_dir
            .path()
            .join("data")
            .join("expenses.db")
            .to_string_lossy()
            .into_owned(),
        log_level: "debug".to_string(),
        max_connections: 2,
    }
}

async fn build_server(temp_dir: &TempDir) -> ExpenseServer {
    McpServer::new(config_for(temp_dir))
        .build()
        .await
        .expect("Failed to build server")
}

fn json_of(result: &CallToolResult) -> Value {
    let text = &result.content[0].as_text().expect("text content").text;
    serde_json::from_str(text).expect("valid JSON")
}

async fn add(server: &ExpenseServer, date: &str, amount: f64, category: &str, note: &str) -> i64 {
    let result = server
        .add_expense(Parameters(AddExpenseRequest {
            date: date.to_string(),
            amount,
            category: category.to_string(),
            subcategory: String::new(),
            note: note.to_string(),
        }))
        .await
        .expect("add_expense");
    json_of(&result)["id"].as_i64().expect("id")
}

async fn list(server: &ExpenseServer, start: &str, end: &str) -> Value {
    let result = server
        .list_expenses(Parameters(ListExpensesRequest {
            start_date: start.to_string(),
            end_date: end.to_string(),
        }))
        .await
        .expect("list_expenses");
    json_of(&result)
}

async fn summarize(server: &ExpenseServer, start: &str, end: &str) -> Value {
    let result = server
        .summarize(Parameters(SummarizeRequest {
            start_date: start.to_string(),
            end_date: end.to_string(),
            category: None,
        }))
        .await
        .expect("summarize");
    json_of(&result)
}

#[tokio::test]
async fn test_month_of_expenses_workflow() {
    let temp_dir = TempDir::new().expect("temp dir");
    let server = build_server(&temp_dir).await;

    add(&server, "2024-01-03", 12.5, "Food & Dining", "lunch").await;
    add(&server, "2024-01-07", 60.0, "Transportation", "fuel").await;
    add(&server, "2024-01-12", 27.5, "Food & Dining", "dinner").await;
    add(&server, "2024-01-20", 150.0, "Bills & Utilities", "power").await;
    add(&server, "2024-02-02", 999.0, "Travel", "next month").await;

    let listed = list(&server, "2024-01-01", "2024-01-31").await;
    assert_eq!(listed.as_array().expect("array").len(), 4);
    assert_eq!(listed[0]["date"], "2024-01-20");

    let summary = summarize(&server, "2024-01-01", "2024-01-31").await;
    assert_eq!(
        summary,
        json!([
            {"category": "Bills & Utilities", "total_amount": 150.0, "count": 1},
            {"category": "Transportation", "total_amount": 60.0, "count": 1},
            {"category": "Food & Dining", "total_amount": 40.0, "count": 2}
        ])
    );
}

#[tokio::test]
async fn test_restart_preserves_ledger() {
    let temp_dir = TempDir::new().expect("temp dir");

    let first_id = {
        let server = build_server(&temp_dir).await;
        add(&server, "2024-05-01", 20.0, "Healthcare", "pharmacy").await
    };

    // A fresh build against the same file must neither truncate nor reuse ids
    let server = build_server(&temp_dir).await;
    let second_id = add(&server, "2024-05-02", 5.0, "Healthcare", "").await;
    assert!(second_id > first_id);

    let listed = list(&server, "2024-05-01", "2024-05-31").await;
    assert_eq!(
        listed,
        json!([
            {"id": second_id, "date": "2024-05-02", "amount": 5.0, "category": "Healthcare", "subcategory": "", "note": ""},
            {"id": first_id, "date": "2024-05-01", "amount": 20.0, "category": "Healthcare", "subcategory": "", "note": "pharmacy"}
        ])
    );
}

#[tokio::test]
async fn test_build_creates_missing_parent_directory() {
    let temp_dir = TempDir::new().expect("temp dir");
    let config = config_for(&temp_dir);

    let _server = McpServer::new(config.clone())
        .build()
        .await
        .expect("build");

    assert!(std::path::Path::new(&config.database_path).exists());
}
