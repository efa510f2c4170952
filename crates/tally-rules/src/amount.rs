//! Exact-decimal amount handling.
//!
//! Amounts travel as two-decimal strings (`"35.35"`). All arithmetic on them
//! happens in integer cents: binary floating point cannot represent most
//! cent values exactly, and `9.00 % 0.25` style tests can come out non-zero
//! at the quarter boundaries.

use crate::error::{RuleError, RuleResult};

/// Parse a two-decimal amount string into integer cents.
///
/// Accepts exactly the shape the validator admits: one or more ASCII digits,
/// a decimal point, exactly two ASCII digits. Anything else is a
/// [`RuleError::MalformedAmount`].
pub fn parse_cents(amount: &str) -> RuleResult<u64> {
    let malformed = || RuleError::MalformedAmount(amount.to_string());

    let (dollars, cents) = amount.split_once('.').ok_or_else(malformed)?;
    if dollars.is_empty()
        || cents.len() != 2
        || !dollars.bytes().all(|b| b.is_ascii_digit())
        || !cents.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(malformed());
    }

    let dollars: u64 = dollars.parse().map_err(|_| malformed())?;
    let cents: u64 = cents.parse().map_err(|_| malformed())?;
    dollars
        .checked_mul(100)
        .and_then(|d| d.checked_add(cents))
        .ok_or_else(malformed)
}
