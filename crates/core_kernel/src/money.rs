//! Monetary amount rounding
//!
//! Bill amounts are carried as `f64`. Rounding goes through `rust_decimal`
//! so that a midpoint is decided on the exact binary value of the float
//! and ties go to the even digit (banker's rounding).

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places of a billed amount
pub const CENT_PLACES: u32 = 2;

/// Rounds `value` to `dp` decimal places using round-half-to-even
///
/// Non-finite values and magnitudes beyond the decimal range are returned
/// unchanged; the latter carry no fractional digits at cent precision.
pub fn round_dp(value: f64, dp: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let Some(exact) = Decimal::from_f64_retain(value) else {
        return value;
    };

    let rounded = exact.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven);

    // Parsing the decimal text yields the float nearest to the rounded value.
    rounded.to_string().parse().unwrap_or(value)
}

/// Rounds an amount to whole cents
pub fn round_to_cents(value: f64) -> f64 {
    round_dp(value, CENT_PLACES)
}
