//! Monetary rounding, parsing and display helpers.
//!
//! Every amount shown to a user goes through [`round_money`] and
//! [`format_inr`], so the admin preview, the product detail breakdown and the
//! cart all agree to the paisa.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency symbol prefixed to every displayed amount.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Round an amount to 2 decimal places, midpoints away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Render an optional amount for display.
///
/// `None` renders as an empty string: a price that could not be computed is
/// blank, never `₹0`. Amounts use Indian digit grouping (`₹1,23,456.78`).
pub fn format_inr(amount: Option<Decimal>) -> String {
    let Some(amount) = amount else {
        return String::new();
    };
    let fixed = format!("{:.2}", round_money(amount));
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));
    format!(
        "{}{}{}.{}",
        sign,
        CURRENCY_SYMBOL,
        group_indian(int_part),
        frac_part
    )
}

/// Insert separators after the last three digits, then every two digits.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Parse a free-text form field into an amount.
///
/// Blank or unparsable input yields `None`, which downstream code treats as
/// an empty field rather than zero. A leading currency symbol and grouping
/// commas are tolerated.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let cleaned: String = input
        .trim()
        .trim_start_matches(CURRENCY_SYMBOL)
        .chars()
        .filter(|c| *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(cleaned.trim()).ok()
}
