//! Foundation types for the Tally receipt processor.
//!
//! This crate provides the receipt data model and identifier types used
//! throughout the system. Every other Tally crate depends on `tally-types`.
//!
//! # Key Types
//!
//! - [`Receipt`] — A purchase receipt as submitted for scoring
//! - [`Item`] — One line entry on a receipt (description + price)
//! - [`ReceiptId`] — Opaque identifier minted when a receipt is stored

pub mod error;
pub mod id;
pub mod receipt;

pub use error::TypeError;
pub use id::ReceiptId;
pub use receipt::{Item, Receipt};
