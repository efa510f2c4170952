//! Receipt shape validation.
//!
//! [`is_valid_receipt`] is a total predicate over arbitrary JSON: it never
//! panics and never errors, it only answers whether the payload qualifies as
//! a well-formed receipt. The HTTP layer calls it before a [`Receipt`] is
//! ever constructed, so the rule engine downstream can assume validity.
//!
//! [`Receipt`]: tally_types::Receipt

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

// ASCII digit classes throughout: the wire format is ASCII, and the regex
// crate's `\d` matches Unicode decimal digits.
static RETAILER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_\s\-&]+$").unwrap());
static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());
static TIME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([01]?[0-9]|2[0-3]):[0-5][0-9]$").unwrap());
static DESCRIPTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_\s\-]+$").unwrap());
static AMOUNT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").unwrap());

/// Decide whether an arbitrary JSON payload is a well-formed receipt.
///
/// Checks short-circuit in a fixed order: field presence, `retailer`,
/// `purchaseDate`, `purchaseTime`, `items` non-empty, every item's
/// `shortDescription` and `price`, then `total`. Any failure yields `false`;
/// no input shape can make this panic.
pub fn is_valid_receipt(payload: &Value) -> bool {
    let Some(receipt) = payload.as_object() else {
        return false;
    };

    // All five top-level fields must be present and non-empty.
    let fields = ["retailer", "purchaseDate", "purchaseTime", "items", "total"];
    if fields.iter().any(|f| is_absent(receipt.get(*f))) {
        return false;
    }

    let Some(retailer) = receipt.get("retailer").and_then(Value::as_str) else {
        return false;
    };
    if !RETAILER_RE.is_match(retailer) {
        return false;
    }

    let Some(date) = receipt.get("purchaseDate").and_then(Value::as_str) else {
        return false;
    };
    if !DATE_RE.is_match(date) {
        return false;
    }

    let Some(time) = receipt.get("purchaseTime").and_then(Value::as_str) else {
        return false;
    };
    if !TIME_RE.is_match(time) {
        return false;
    }

    let Some(items) = receipt.get("items").and_then(Value::as_array) else {
        return false;
    };
    if items.is_empty() {
        return false;
    }
    if !items.iter().all(is_valid_item) {
        return false;
    }

    let Some(total) = receipt.get("total").and_then(Value::as_str) else {
        return false;
    };
    AMOUNT_RE.is_match(total)
}

fn is_valid_item(item: &Value) -> bool {
    let Some(item) = item.as_object() else {
        return false;
    };
    let (Some(description), Some(price)) = (
        item.get("shortDescription").and_then(Value::as_str),
        item.get("price").and_then(Value::as_str),
    ) else {
        return false;
    };
    !description.is_empty()
        && DESCRIPTION_RE.is_match(description)
        && AMOUNT_RE.is_match(price)
}

/// Missing, null, or an empty string all count as absent.
fn is_absent(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}
