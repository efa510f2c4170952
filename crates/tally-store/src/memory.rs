use std::collections::HashMap;
use std::sync::RwLock;

use tally_types::{Receipt, ReceiptId};

use crate::error::StoreResult;
use crate::traits::ReceiptStore;

/// In-memory, HashMap-based receipt store.
///
/// The only backend: receipts live for the lifetime of the process and are
/// gone on restart. All entries are held behind a `RwLock` for safe
/// concurrent access; receipts are cloned on read.
pub struct InMemoryReceiptStore {
    receipts: RwLock<HashMap<ReceiptId, Receipt>>,
}

impl InMemoryReceiptStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            receipts: RwLock::new(HashMap::new()),
        }
    }

    /// Number of receipts currently stored.
    pub fn len(&self) -> usize {
        self.receipts.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.receipts.read().expect("lock poisoned").is_empty()
    }

    /// Remove all receipts from the store.
    pub fn clear(&self) {
        self.receipts.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryReceiptStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiptStore for InMemoryReceiptStore {
    fn put(&self, receipt: Receipt) -> StoreResult<ReceiptId> {
        let id = ReceiptId::generate();
        let mut map = self.receipts.write().expect("lock poisoned");
        // Freshly minted v4 identifiers do not collide in practice; if one
        // ever did, inserting would overwrite, so keep the first entry.
        map.entry(id).or_insert(receipt);
        Ok(id)
    }

    fn get(&self, id: &ReceiptId) -> StoreResult<Option<Receipt>> {
        let map = self.receipts.read().expect("lock poisoned");
        Ok(map.get(id).cloned())
    }

    fn exists(&self, id: &ReceiptId) -> StoreResult<bool> {
        let map = self.receipts.read().expect("lock poisoned");
        Ok(map.contains_key(id))
    }
}

impl std::fmt::Debug for InMemoryReceiptStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryReceiptStore")
            .field("receipt_count", &self.len())
            .finish()
    }
}
