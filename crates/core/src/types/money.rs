//! Money formatting helpers using decimal arithmetic.
//!
//! Cart prices are [`Decimal`] amounts in the currency's standard unit
//! (dollars, not cents). Display totals are fixed to exactly two fraction
//! digits with midpoint values rounding away from zero.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fraction digits in displayed amounts.
pub const DISPLAY_SCALE: u32 = 2;

/// Format a decimal amount as a display string with exactly two fraction
/// digits (e.g., `19.99`, `20.00`).
///
/// Midpoints round away from zero: `2.005` formats as `"2.01"`.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}
