use std::sync::Arc;

use tally_store::{InMemoryReceiptStore, ReceiptStore};

/// Shared state handed to every request handler.
///
/// The store is the only shared mutable resource in the system; handlers
/// reach it through this clone-cheap handle.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReceiptStore>,
}

impl AppState {
    /// State backed by a store of the caller's choosing.
    pub fn new(store: Arc<dyn ReceiptStore>) -> Self {
        Self { store }
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryReceiptStore::new()))
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
