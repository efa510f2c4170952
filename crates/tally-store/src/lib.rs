//! Receipt storage for the Tally receipt processor.
//!
//! A store maps opaque [`ReceiptId`]s to immutable [`Receipt`]s. The store
//! mints the identifier on insert and never hands the same one out twice.
//!
//! # Design Rules
//!
//! 1. Receipts are immutable once stored; `put` never overwrites.
//! 2. Every `put` mints a fresh identifier — duplicate payloads get
//!    distinct entries (no deduplication, no idempotency keys).
//! 3. Concurrent `put` and `get` are safe and never lose entries.
//! 4. The store never interprets receipt contents — validation and scoring
//!    live elsewhere.
//! 5. A miss is `Ok(None)`, not an error; `Err` is reserved for backend
//!    faults.
//!
//! All backends implement the [`ReceiptStore`] trait;
//! [`InMemoryReceiptStore`] is the only one — retention is process-lifetime
//! by design.
//!
//! [`Receipt`]: tally_types::Receipt
//! [`ReceiptId`]: tally_types::ReceiptId

pub mod error;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryReceiptStore;
pub use traits::ReceiptStore;
