//! Tests for amount rounding
//!
//! Rounding is half-to-even on the exact binary value of the float, so
//! values whose decimal text looks like a midpoint usually are not one.

use core_kernel::money::{round_dp, round_to_cents, CENT_PLACES};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod rounding {
    use super::*;

    #[test]
    fn test_cent_places_is_two() {
        assert_eq!(CENT_PLACES, 2);
    }

    #[test]
    fn test_whole_amounts_are_unchanged() {
        assert_eq!(round_to_cents(10800.0), 10800.0);
        assert_eq!(round_to_cents(0.0), 0.0);
    }

    #[test]
    fn test_one_third_of_a_month() {
        // 1000 * 1 * (10 / 30)
        assert_eq!(round_to_cents(1000.0 * (10.0 / 30.0)), 333.33);
    }

    #[test]
    fn test_binary_below_midpoint_rounds_down() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(round_to_cents(1.005), 1.0);
        assert_eq!(round_to_cents(2.675), 2.67);
    }

    #[test]
    fn test_exact_midpoints_round_to_even() {
        assert_eq!(round_to_cents(0.125), 0.12);
        assert_eq!(round_to_cents(0.625), 0.62);
        assert_eq!(round_to_cents(0.875), 0.88);
        assert_eq!(round_dp(2.5, 0), 2.0);
        assert_eq!(round_dp(3.5, 0), 4.0);
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(round_to_cents(-333.3333), -333.33);
        assert_eq!(round_to_cents(-0.125), -0.12);
    }

    #[test]
    fn test_large_amounts_keep_integral_part() {
        assert_eq!(round_to_cents(1.0e30), 1.0e30);
        assert_eq!(round_to_cents(123_456_789.987), 123_456_789.99);
    }

    #[test]
    fn test_non_finite_values_pass_through() {
        assert!(round_to_cents(f64::NAN).is_nan());
        assert_eq!(round_to_cents(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }
}

proptest! {
    #[test]
    fn rounded_cents_are_exact_decimal_text(minor in -1_000_000_000i64..1_000_000_000i64) {
        let expected = Decimal::new(minor, 2);
        let value: f64 = expected.to_string().parse().unwrap();

        prop_assert_eq!(round_to_cents(value), value);
        prop_assert_eq!(Decimal::from_f64_retain(value).map(|d| d.round_dp(2)), Some(expected.round_dp(2)));
    }

    #[test]
    fn rounding_is_idempotent(value in -1.0e9f64..1.0e9f64) {
        let once = round_to_cents(value);
        prop_assert_eq!(round_to_cents(once), once);
    }

    #[test]
    fn rounding_moves_at_most_half_a_cent(value in -1.0e6f64..1.0e6f64) {
        let rounded = round_to_cents(value);
        prop_assert!((rounded - value).abs() <= 0.005 + 1e-9);
    }
}

#[test]
fn test_dec_macro_matches_rounded_text() {
    let rounded = round_to_cents(1234.5678);
    assert_eq!(rounded.to_string(), dec!(1234.57).to_string());
}
