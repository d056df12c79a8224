//! Money and quantity formatting rules.
//!
//! Rounding happens only here, at the formatting boundary, and always
//! half-to-even. Intermediate arithmetic elsewhere stays exact.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a monetary amount with exactly two fraction digits.
/// No currency symbol, no thousands separator.
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    format!("{rounded:.2}")
}

/// Formats a quantity as its plain decimal value, trailing zeros stripped.
pub fn format_quantity(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Renders a decimal tax fraction as an integer percentage, e.g. 0.15 -> "15".
/// Midpoints round half-to-even, matching [`format_amount`].
pub fn format_percent(rate: Decimal) -> String {
    (rate * Decimal::ONE_HUNDRED).round().normalize().to_string()
}
