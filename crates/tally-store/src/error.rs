use tally_types::ReceiptId;

/// Errors from receipt store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested receipt was not found.
    ///
    /// `get` reports a miss as `Ok(None)`; this variant exists for callers
    /// that convert a miss into a terminal failure.
    #[error("no receipt found for id {0}")]
    NotFound(ReceiptId),

    /// The storage backend is unavailable or misbehaving.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
