use thiserror::Error;

/// Errors from the rule engine.
///
/// The engine assumes its input already passed [`crate::is_valid_receipt`];
/// these errors are only reachable when a caller hands it unvalidated data.
/// They exist so a misbehaving caller gets a descriptive fault instead of a
/// silently wrong score.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    /// An amount string is not in `digits.two-digits` form.
    #[error("malformed amount: {0:?}")]
    MalformedAmount(String),

    /// A purchase date is not in `YYYY-MM-DD` form.
    #[error("malformed purchase date: {0:?}")]
    MalformedDate(String),

    /// A purchase time is not in `HH:MM` form.
    #[error("malformed purchase time: {0:?}")]
    MalformedTime(String),
}

/// Result alias for rule engine operations.
pub type RuleResult<T> = Result<T, RuleError>;
