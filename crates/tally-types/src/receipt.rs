use serde::{Deserialize, Serialize};

/// A purchase receipt as submitted for scoring.
///
/// Field values are kept in their wire form: dates, times, and amounts stay
/// strings exactly as received. The validator checks their shape before a
/// receipt is ever constructed through the HTTP path, and the rule engine
/// parses them on demand. A stored receipt is never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Name of the retailer or store.
    pub retailer: String,
    /// Date of purchase, `YYYY-MM-DD`.
    pub purchase_date: String,
    /// Time of purchase, 24-hour `HH:MM`.
    pub purchase_time: String,
    /// Line items, at least one.
    pub items: Vec<Item>,
    /// Total amount paid, as a two-decimal string.
    pub total: String,
}

/// One line entry on a receipt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Product description.
    pub short_description: String,
    /// Price paid for this item, as a two-decimal string.
    pub price: String,
}
