//! Request types for expense tools.
//!
//! This module contains all request types with `JsonSchema` support for tool parameters.

use schemars::JsonSchema;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::storage::NewExpense;

/// Request for `add_expense`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AddExpenseRequest {
    /// Expense date as `YYYY-MM-DD`.
    pub date: String,
    /// Amount spent. Numeric strings such as `"12.50"` are accepted.
    #[serde(deserialize_with = "coerce_amount")]
    #[schemars(with = "f64")]
    pub amount: f64,
    /// Category label, ideally one from `expense:///categories`.
    pub category: String,
    /// Optional subcategory.
    #[serde(default)]
    pub subcategory: String,
    /// Optional free-form note.
    #[serde(default)]
    pub note: String,
}

impl From<AddExpenseRequest> for NewExpense {
    fn from(req: AddExpenseRequest) -> Self {
        Self::new(req.date, req.amount, req.category)
            .with_subcategory(req.subcategory)
            .with_note(req.note)
    }
}

/// Request for `list_expenses`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ListExpensesRequest {
    /// Inclusive start date, `YYYY-MM-DD`.
    pub start_date: String,
    /// Inclusive end date, `YYYY-MM-DD`.
    pub end_date: String,
}

/// Request for `summarize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SummarizeRequest {
    /// Inclusive start date, `YYYY-MM-DD`.
    pub start_date: String,
    /// Inclusive end date, `YYYY-MM-DD`.
    pub end_date: String,
    /// Restrict the summary to this exact category.
    #[serde(default)]
    pub category: Option<String>,
}

impl SummarizeRequest {
    /// The category filter, with an empty string treated as no filter.
    #[must_use]
    pub fn category_filter(&self) -> Option<String> {
        self.category.clone().filter(|c| !c.is_empty())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Accept a JSON number or a numeric string for `amount`.
fn coerce_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => n,
        NumberOrText::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("amount must be a number, got {s:?}")))?,
    };

    if amount.is_finite() {
        Ok(amount)
    } else {
        Err(de::Error::custom("amount must be finite"))
    }
}
