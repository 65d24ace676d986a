//! Storage types for database operations.
//!
//! - [`NewExpense`]: Input for an insert
//! - [`StoredExpense`]: A persisted expense row
//! - [`CategorySummary`]: One grouped aggregate row
//!
//! Field declaration order is the serialized key order.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An expense that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    /// Amount spent.
    pub amount: f64,
    /// Category label.
    pub category: String,
    /// Optional subcategory, empty when absent.
    pub subcategory: String,
    /// Free-form note, empty when absent.
    pub note: String,
}

impl NewExpense {
    /// Create a new expense with empty subcategory and note.
    #[must_use]
    pub fn new(date: impl Into<String>, amount: f64, category: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            amount,
            category: category.into(),
            subcategory: String::new(),
            note: String::new(),
        }
    }

    /// Set subcategory.
    #[must_use]
    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = subcategory.into();
        self
    }

    /// Set note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}

/// Expense stored in database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StoredExpense {
    /// Row identifier assigned by the store.
    pub id: i64,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    /// Amount spent.
    pub amount: f64,
    /// Category label.
    pub category: String,
    /// Subcategory (may be empty).
    pub subcategory: String,
    /// Note (may be empty).
    pub note: String,
}

impl StoredExpense {
    /// Attach a store-assigned id to a new expense.
    #[must_use]
    pub fn from_new(id: i64, expense: NewExpense) -> Self {
        Self {
            id,
            date: expense.date,
            amount: expense.amount,
            category: expense.category,
            subcategory: expense.subcategory,
            note: expense.note,
        }
    }
}

/// Per-category totals for a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CategorySummary {
    /// Category label.
    pub category: String,
    /// Sum of `amount` over the counted rows.
    pub total_amount: f64,
    /// Number of rows counted.
    pub count: i64,
}
