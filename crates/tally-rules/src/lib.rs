//! Core logic for the Tally receipt processor.
//!
//! Two pure functions carry all of the domain logic:
//!
//! - [`is_valid_receipt`] — decides whether an arbitrary JSON payload
//!   qualifies as a well-formed receipt. Total: never panics, never errors.
//! - [`score`] — maps a validated [`Receipt`] to its loyalty points by
//!   summing seven fixed rules.
//!
//! The HTTP layer gates every stored receipt through the validator, so the
//! engine can assume validity; fed unvalidated data it returns a descriptive
//! [`RuleError`] instead of a wrong score.
//!
//! # Quick Start
//!
//! ```rust
//! use tally_rules::{is_valid_receipt, score};
//!
//! let payload = serde_json::json!({
//!     "retailer": "Target",
//!     "purchaseDate": "2022-01-01",
//!     "purchaseTime": "13:01",
//!     "items": [{"shortDescription": "Mountain Dew 12PK", "price": "6.49"}],
//!     "total": "6.49"
//! });
//! assert!(is_valid_receipt(&payload));
//!
//! let receipt: tally_types::Receipt = serde_json::from_value(payload).unwrap();
//! assert_eq!(score(&receipt).unwrap(), 12);
//! ```
//!
//! [`Receipt`]: tally_types::Receipt

pub mod amount;
pub mod error;
pub mod points;
pub mod validate;

pub use amount::parse_cents;
pub use error::{RuleError, RuleResult};
pub use points::score;
pub use validate::is_valid_receipt;
