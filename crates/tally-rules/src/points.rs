//! The points rule engine.
//!
//! Seven independent rules, summed. Pure and deterministic: the same receipt
//! always scores the same value, and nothing here touches shared state.

use tally_types::{Item, Receipt};

use crate::amount::parse_cents;
use crate::error::{RuleError, RuleResult};

/// Points for every complete pair of items.
const PAIR_BONUS: u64 = 5;
/// Points when the total is a round dollar amount.
const ROUND_DOLLAR_BONUS: u64 = 50;
/// Points when the total is a multiple of a quarter.
const QUARTER_BONUS: u64 = 25;
/// Points when the purchase day of month is odd.
const ODD_DAY_BONUS: u64 = 6;
/// Points when the purchase falls in the afternoon window.
const AFTERNOON_BONUS: u64 = 10;

/// Compute the loyalty points for a validated receipt.
///
/// Assumes the receipt already passed [`crate::is_valid_receipt`]; malformed
/// field strings yield a [`RuleError`] rather than a silent miscomputation.
pub fn score(receipt: &Receipt) -> RuleResult<u64> {
    let mut points = 0;

    // Rule 1: one point per alphanumeric character in the retailer name.
    points += retailer_points(&receipt.retailer);

    // Rule 2: round dollar amounts, judged on the literal string form.
    if receipt.total.ends_with(".00") {
        points += ROUND_DOLLAR_BONUS;
    }

    // Rule 3: multiples of 0.25, tested in integer cents.
    if parse_cents(&receipt.total)? % 25 == 0 {
        points += QUARTER_BONUS;
    }

    // Rule 4: five points per complete pair of items.
    points += (receipt.items.len() as u64 / 2) * PAIR_BONUS;

    // Rule 5: per-item description-length bonus.
    for item in &receipt.items {
        points += description_bonus(item)?;
    }

    // Rule 6: odd purchase day.
    if day_of_month(&receipt.purchase_date)? % 2 == 1 {
        points += ODD_DAY_BONUS;
    }

    // Rule 7: purchased at or after 14:00 and strictly before 16:00.
    let minutes = minutes_since_midnight(&receipt.purchase_time)?;
    if (14 * 60..16 * 60).contains(&minutes) {
        points += AFTERNOON_BONUS;
    }

    Ok(points)
}

/// One point per ASCII alphanumeric character in the retailer name.
fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

/// If the trimmed description length is a non-zero multiple of 3, the item
/// earns `ceil(price * 0.2)` points. In cents that is `ceil(cents / 500)`.
fn description_bonus(item: &Item) -> RuleResult<u64> {
    let len = item.short_description.trim().len();
    if len == 0 || len % 3 != 0 {
        return Ok(0);
    }
    Ok(parse_cents(&item.price)?.div_ceil(500))
}

/// Day of month taken from the third `-`-delimited field of the date string.
///
/// Deliberately not calendar parsing: a date library applies timezone rules
/// and can shift the day by one near midnight boundaries. The rule is about
/// the digits the customer sees on the receipt.
fn day_of_month(date: &str) -> RuleResult<u32> {
    let malformed = || RuleError::MalformedDate(date.to_string());
    let day = date.split('-').nth(2).ok_or_else(malformed)?;
    if day.is_empty() || !day.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    day.parse().map_err(|_| malformed())
}

/// Parse `HH:MM` into minutes since midnight.
fn minutes_since_midnight(time: &str) -> RuleResult<u32> {
    let malformed = || RuleError::MalformedTime(time.to_string());
    let (hours, minutes) = time.split_once(':').ok_or_else(malformed)?;
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(hours) || !all_digits(minutes) {
        return Err(malformed());
    }
    let hours: u32 = hours.parse().map_err(|_| malformed())?;
    let minutes: u32 = minutes.parse().map_err(|_| malformed())?;
    if hours > 23 || minutes > 59 {
        return Err(malformed());
    }
    Ok(hours * 60 + minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(description: &str, price: &str) -> Item {
        Item {
            short_description: description.into(),
            price: price.into(),
        }
    }

    fn receipt(retailer: &str, date: &str, time: &str, items: Vec<Item>, total: &str) -> Receipt {
        Receipt {
            retailer: retailer.into(),
            purchase_date: date.into(),
            purchase_time: time.into(),
            items,
            total: total.into(),
        }
    }

    /// A baseline receipt that scores zero from every rule except rule 1.
    fn baseline(retailer: &str) -> Receipt {
        receipt(
            retailer,
            "2022-01-02",
            "13:01",
            vec![item("Gatorade", "2.23")],
            "2.23",
        )
    }

    // -----------------------------------------------------------------------
    // Individual rules
    // -----------------------------------------------------------------------

    #[test]
    fn rule1_counts_alphanumerics_only() {
        assert_eq!(score(&baseline("Target")).unwrap(), 6);
        assert_eq!(score(&baseline("M&M Corner Market")).unwrap(), 14);
        assert_eq!(score(&baseline("&- _")).unwrap(), 0);
    }

    #[test]
    fn rule2_round_dollar_total() {
        let mut r = baseline("a");
        r.total = "5.00".into();
        // .00 also makes the total a multiple of 0.25, so rule 3 fires too.
        assert_eq!(score(&r).unwrap(), 1 + 50 + 25);
    }

    #[test]
    fn rule3_quarter_multiples_without_round_dollar() {
        for total in ["0.25", "1.75", "9.50"] {
            let mut r = baseline("a");
            r.total = total.into();
            assert_eq!(score(&r).unwrap(), 1 + 25, "total {total}");
        }
    }

    #[test]
    fn rule3_is_exact_at_quarter_boundaries() {
        // 9.00 % 0.25 in f64 is non-zero; integer cents must not reproduce that.
        let mut r = baseline("a");
        r.total = "9.00".into();
        assert_eq!(score(&r).unwrap(), 1 + 50 + 25);
    }

    #[test]
    fn rule4_pays_per_complete_pair() {
        for (count, expected) in [(1, 0), (2, 5), (3, 5), (4, 10), (5, 10)] {
            let mut r = baseline("a");
            r.items = vec![item("Gatorade", "2.23"); count];
            assert_eq!(score(&r).unwrap(), 1 + expected, "{count} items");
        }
    }

    #[test]
    fn rule5_description_length_bonus() {
        let mut r = baseline("a");
        // Trimmed length 27, a multiple of 3; ceil(12.00 * 0.2) = 3 exactly.
        r.items = vec![item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00")];
        assert_eq!(score(&r).unwrap(), 1 + 3);
    }

    #[test]
    fn rule5_rounds_up() {
        let mut r = baseline("a");
        // Length 3; 1.26 * 0.2 = 0.252, rounds up to 1.
        r.items = vec![item("abc", "1.26")];
        assert_eq!(score(&r).unwrap(), 1 + 1);
    }

    #[test]
    fn rule5_skips_whitespace_only_descriptions() {
        let mut r = baseline("a");
        // Trimmed length 0 is not a non-zero multiple of 3.
        r.items = vec![item("   ", "10.00")];
        assert_eq!(score(&r).unwrap(), 1);
    }

    #[test]
    fn rule6_odd_day() {
        let mut r = baseline("a");
        r.purchase_date = "2022-01-01".into();
        assert_eq!(score(&r).unwrap(), 1 + 6);
        r.purchase_date = "2022-01-31".into();
        assert_eq!(score(&r).unwrap(), 1 + 6);
        r.purchase_date = "2022-01-02".into();
        assert_eq!(score(&r).unwrap(), 1);
    }

    #[test]
    fn rule7_afternoon_window_is_half_open() {
        let cases = [
            ("13:59", 0),
            ("14:00", 10),
            ("15:59", 10),
            ("16:00", 0),
        ];
        for (time, expected) in cases {
            let mut r = baseline("a");
            r.purchase_time = time.into();
            assert_eq!(score(&r).unwrap(), 1 + expected, "time {time}");
        }
    }

    // -----------------------------------------------------------------------
    // Reference scenarios
    // -----------------------------------------------------------------------

    #[test]
    fn target_receipt_scores_28() {
        let r = receipt(
            "Target",
            "2022-01-01",
            "13:01",
            vec![
                item("Mountain Dew 12PK", "6.49"),
                item("Emils Cheese Pizza", "12.25"),
                item("Knorr Creamy Chicken", "1.26"),
                item("Doritos Nacho Cheese", "3.35"),
                item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
            "35.35",
        );
        assert_eq!(score(&r).unwrap(), 28);
    }

    #[test]
    fn corner_market_receipt_scores_109() {
        // 14 retailer alphanumerics + 50 round dollar + 25 quarter multiple
        // + 10 for two pairs + 10 afternoon window.
        let r = receipt(
            "M&M Corner Market",
            "2022-03-20",
            "14:33",
            vec![item("Gatorade", "2.25"); 4],
            "9.00",
        );
        assert_eq!(score(&r).unwrap(), 109);
    }

    // -----------------------------------------------------------------------
    // Fault paths for unvalidated input
    // -----------------------------------------------------------------------

    #[test]
    fn malformed_total_is_a_descriptive_error() {
        let mut r = baseline("a");
        r.total = "9.0".into();
        assert_eq!(score(&r), Err(RuleError::MalformedAmount("9.0".into())));
    }

    #[test]
    fn malformed_item_price_is_a_descriptive_error() {
        let mut r = baseline("a");
        r.items = vec![item("abc", "oops")];
        assert_eq!(score(&r), Err(RuleError::MalformedAmount("oops".into())));
    }

    #[test]
    fn malformed_date_is_a_descriptive_error() {
        let mut r = baseline("a");
        r.purchase_date = "january first".into();
        assert!(matches!(score(&r), Err(RuleError::MalformedDate(_))));
    }

    #[test]
    fn malformed_time_is_a_descriptive_error() {
        for time in ["25:00", "2pm", "14", "14:xx"] {
            let mut r = baseline("a");
            r.purchase_time = time.into();
            assert!(
                matches!(score(&r), Err(RuleError::MalformedTime(_))),
                "time {time}"
            );
        }
    }

    // -----------------------------------------------------------------------
    // Purity
    // -----------------------------------------------------------------------

    mod properties {
        use super::*;
        use proptest::prelude::*;

        prop_compose! {
            fn arb_item()(
                description in "[A-Za-z0-9 -]{1,30}",
                dollars in 0u64..100,
                cents in 0u64..100,
            ) -> Item {
                item(&description, &format!("{dollars}.{cents:02}"))
            }
        }

        prop_compose! {
            fn arb_receipt()(
                retailer in "[A-Za-z0-9 &-]{1,30}",
                year in 1900u32..2100,
                month in 1u32..=12,
                day in 1u32..=31,
                hour in 0u32..24,
                minute in 0u32..60,
                items in prop::collection::vec(arb_item(), 1..8),
                dollars in 0u64..1000,
                cents in 0u64..100,
            ) -> Receipt {
                receipt(
                    &retailer,
                    &format!("{year:04}-{month:02}-{day:02}"),
                    &format!("{hour}:{minute:02}"),
                    items,
                    &format!("{dollars}.{cents:02}"),
                )
            }
        }

        proptest! {
            #[test]
            fn scoring_is_deterministic(r in arb_receipt()) {
                let first = score(&r).unwrap();
                let second = score(&r).unwrap();
                prop_assert_eq!(first, second);
            }

            #[test]
            fn valid_receipts_always_score(r in arb_receipt()) {
                // Everything the validator admits must score without error.
                let payload = serde_json::to_value(&r).unwrap();
                prop_assume!(crate::is_valid_receipt(&payload));
                prop_assert!(score(&r).is_ok());
            }
        }
    }
}
