use tally_types::{Receipt, ReceiptId};

use crate::error::StoreResult;

/// Identifier-keyed receipt store.
///
/// All implementations must satisfy these invariants:
/// - `put` mints a fresh, unique identifier per call; it never overwrites
///   an existing entry, so duplicate payloads get distinct identifiers.
/// - Receipts are immutable once stored and retained for the store's
///   lifetime.
/// - Concurrent `put` and `get` never lose or corrupt entries.
/// - A lookup miss is `Ok(None)`; `Err` is reserved for backend faults.
pub trait ReceiptStore: Send + Sync {
    /// Store a receipt under a freshly minted identifier and return it.
    fn put(&self, receipt: Receipt) -> StoreResult<ReceiptId>;

    /// Look up a receipt by identifier.
    ///
    /// Returns `Ok(None)` if no receipt was ever stored under `id`.
    fn get(&self, id: &ReceiptId) -> StoreResult<Option<Receipt>>;

    /// Check whether a receipt exists under `id`.
    fn exists(&self, id: &ReceiptId) -> StoreResult<bool> {
        Ok(self.get(id)?.is_some())
    }
}
