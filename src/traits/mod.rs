//! Trait definitions for mockable dependencies.
//!
//! [`ExpenseStorage`] is the seam between the MCP tool facade and the store.
//! The facade only ever sees `Arc<dyn ExpenseStorage>`, so the store's
//! lifetime is owned by whoever builds the server rather than a global.
//!
//! # Mocking
//!
//! The trait is annotated with `#[cfg_attr(test, mockall::automock)]`
//! which generates `MockExpenseStorage` for unit tests.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::storage::{CategorySummary, NewExpense, StoredExpense};

/// Expense persistence operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExpenseStorage: Send + Sync {
    /// Append an expense and return its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write cannot complete.
    async fn insert(&self, expense: &NewExpense) -> Result<i64, StorageError>;

    /// List expenses in the inclusive `[start_date, end_date]` range, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the query fails.
    async fn list_in_range(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<StoredExpense>, StorageError>;

    /// Aggregate expenses by category over the range, optionally for one category.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the query fails.
    async fn summarize(
        &self,
        start_date: &str,
        end_date: &str,
        category: Option<String>,
    ) -> Result<Vec<CategorySummary>, StorageError>;
}
