//! Storage backend.
//!
//! This module provides the `SQLite` store of record for expenses:
//! - Pool management and idempotent schema initialization
//! - Append-only inserts
//! - Inclusive date-range listing
//! - Per-category aggregation
//!
//! # Architecture
//!
//! The storage layer uses `SQLite` with the `sqlx` crate for async operations.
//! Files are opened in WAL journal mode so readers proceed alongside the
//! single writer; write serialization is left to `SQLite`.
//!
//! The implementation is split across submodules:
//! - `core`: Pool management, schema initialization, error helpers
//! - `expense`: Insert, list and summarize queries
//! - `trait_impl`: [`ExpenseStorage`](crate::traits::ExpenseStorage) implementation
//!
//! # Example
//!
//! ```ignore
//! use expense_tracker::storage::{NewExpense, SqliteStorage};
//!
//! let storage = SqliteStorage::new("/tmp/expenses.db").await?;
//! let id = storage.insert_expense(&NewExpense::new("2024-01-05", 42.5, "Food & Dining")).await?;
//! ```

mod core;
mod expense;
mod trait_impl;
mod types;

pub use self::core::SqliteStorage;
pub use types::{CategorySummary, NewExpense, StoredExpense};
