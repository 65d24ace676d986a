//! Static category catalog.
//!
//! A fixed, ordered list of ten category labels offered to the calling agent
//! as the `expense:///categories` resource. The catalog is a hint only: the
//! store never checks `category` values against it.
//!
//! # Example
//!
//! ```
//! use expense_tracker::catalog::{CategoryCatalog, CATEGORIES};
//!
//! let catalog = CategoryCatalog::default();
//! assert_eq!(catalog.categories.len(), CATEGORIES.len());
//! assert_eq!(catalog.categories[0], "Food & Dining");
//! ```

use serde::{Deserialize, Serialize};

/// URI under which the catalog is published.
pub const CATEGORIES_URI: &str = "expense:///categories";

/// MIME type of the catalog document.
pub const CATEGORIES_MIME_TYPE: &str = "application/json";

/// Resource name shown to clients.
pub const CATEGORIES_NAME: &str = "categories";

/// The fixed category labels, in presentation order.
pub const CATEGORIES: [&str; 10] = [
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Travel",
    "Education",
    "Business",
    "Other",
];

/// The catalog document: `{"categories": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCatalog {
    /// Ordered category labels.
    pub categories: Vec<String>,
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self {
            categories: CATEGORIES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl CategoryCatalog {
    /// Render the catalog as pretty-printed JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        // Serializing a struct of strings cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Returns true if `category` exactly matches a catalog label.
///
/// Advisory only; inserts are never rejected on this basis.
#[must_use]
pub fn is_known_category(category: &str) -> bool {
    CATEGORIES.contains(&category)
}
