//! Expense storage operations.

#![allow(clippy::missing_errors_doc)]

use crate::error::StorageError;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::core::SqliteStorage;
use super::types::{CategorySummary, NewExpense, StoredExpense};

// `amount` is a REAL column, so SUM over a non-empty group is always REAL.
const SUMMARY_SQL: &str = "SELECT category, SUM(amount) AS total_amount, COUNT(*) AS count \
     FROM expenses WHERE date BETWEEN ? AND ?";

impl SqliteStorage {
    /// Append one expense and return its store-assigned id.
    ///
    /// Duplicate rows are allowed; nothing is deduplicated.
    pub async fn insert_expense(&self, expense: &NewExpense) -> Result<i64, StorageError> {
        let result = sqlx::query(
            "INSERT INTO expenses (date, amount, category, subcategory, note) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&expense.date)
        .bind(expense.amount)
        .bind(&expense.category)
        .bind(&expense.subcategory)
        .bind(&expense.note)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::classify_error("INSERT expenses", &e))?;

        let id = result.last_insert_rowid();
        tracing::debug!(id, date = %expense.date, category = %expense.category, "Expense inserted");
        Ok(id)
    }

    /// List expenses with `start_date <= date <= end_date`, newest date first.
    ///
    /// Dates compare as plain strings, so callers must pass zero-padded ISO
    /// dates. Rows sharing a date come back in no particular order.
    pub async fn list_expenses(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<StoredExpense>, StorageError> {
        let rows = sqlx::query(
            "SELECT id, date, amount, category, subcategory, note FROM expenses \
             WHERE date BETWEEN ? AND ? ORDER BY date DESC",
        )
        .bind(start_date)
        .bind(end_date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Self::classify_error("SELECT expenses", &e))?;

        let expenses: Vec<StoredExpense> = rows.iter().map(Self::row_to_expense).collect();
        tracing::debug!(start_date, end_date, rows = expenses.len(), "Expenses listed");
        Ok(expenses)
    }

    /// Per-category totals within the inclusive date range.
    ///
    /// A `Some` non-empty `category` restricts the aggregate to that exact
    /// category. Output is ordered by `total_amount` descending; categories
    /// without matching rows are not emitted.
    pub async fn summarize(
        &self,
        start_date: &str,
        end_date: &str,
        category: Option<&str>,
    ) -> Result<Vec<CategorySummary>, StorageError> {
        let category = category.filter(|c| !c.is_empty());

        let sql = match category {
            Some(_) => format!(
                "{SUMMARY_SQL} AND category = ? GROUP BY category ORDER BY total_amount DESC"
            ),
            None => format!("{SUMMARY_SQL} GROUP BY category ORDER BY total_amount DESC"),
        };

        let mut query = sqlx::query(&sql).bind(start_date).bind(end_date);
        if let Some(category) = category {
            query = query.bind(category);
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Self::classify_error("SELECT expenses summary", &e))?;

        let summaries: Vec<CategorySummary> = rows
            .iter()
            .map(|row| CategorySummary {
                category: row.get("category"),
                total_amount: row.get("total_amount"),
                count: row.get("count"),
            })
            .collect();

        tracing::debug!(
            start_date,
            end_date,
            category = category.unwrap_or(""),
            rows = summaries.len(),
            "Expenses summarized"
        );
        Ok(summaries)
    }

    /// Total number of stored expenses.
    pub async fn count_expenses(&self) -> Result<i64, StorageError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM expenses")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| Self::classify_error("COUNT expenses", &e))?;

        Ok(row.get("count"))
    }

    fn row_to_expense(row: &SqliteRow) -> StoredExpense {
        StoredExpense {
            id: row.get("id"),
            date: row.get("date"),
            amount: row.get("amount"),
            category: row.get("category"),
            subcategory: row
                .get::<Option<String>, _>("subcategory")
                .unwrap_or_default(),
            note: row.get::<Option<String>, _>("note").unwrap_or_default(),
        }
    }
}
