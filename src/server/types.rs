//! Server types and shared state.

use std::sync::Arc;

use crate::traits::ExpenseStorage;

/// Shared application state for all tool handlers.
///
/// The store is injected here at construction; tool handlers never open
/// their own connections.
#[derive(Clone)]
pub struct AppState {
    /// Expense store.
    pub storage: Arc<dyn ExpenseStorage>,
}

impl AppState {
    /// Creates a new application state around `storage`.
    #[must_use]
    pub fn new(storage: impl ExpenseStorage + 'static) -> Self {
        Self {
            storage: Arc::new(storage),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
