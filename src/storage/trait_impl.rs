//! `ExpenseStorage` implementation for `SqliteStorage`.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::traits::ExpenseStorage;

use super::core::SqliteStorage;
use super::types::{CategorySummary, NewExpense, StoredExpense};

#[async_trait]
impl ExpenseStorage for SqliteStorage {
    async fn insert(&self, expense: &NewExpense) -> Result<i64, StorageError> {
        self.insert_expense(expense).await
    }

    async fn list_in_range(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<StoredExpense>, StorageError> {
        self.list_expenses(start_date, end_date).await
    }

    async fn summarize(
        &self,
        start_date: &str,
        end_date: &str,
        category: Option<String>,
    ) -> Result<Vec<CategorySummary>, StorageError> {
        Self::summarize(self, start_date, end_date, category.as_deref()).await
    }
}
