//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for bills that give more
//! meaningful error messages than standard assertions.

use core_kernel::round_to_cents;
use domain_billing::{BillResult, LineItem};

/// Asserts that two amounts are equal within a tolerance
///
/// # Panics
///
/// Panics if the amounts differ by more than `tolerance`
pub fn assert_amount_approx_eq(actual: f64, expected: f64, tolerance: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that an amount carries no digits below the cent
pub fn assert_rounded_to_cents(amount: f64) {
    assert_eq!(
        amount,
        round_to_cents(amount),
        "Expected amount rounded to cents, got {}",
        amount
    );
}

/// Asserts that the total is the rounded sum of the rounded line amounts
pub fn assert_revenue_consistent(bill: &BillResult) {
    for line in &bill.line_items {
        assert_rounded_to_cents(line.amount);
    }

    let sum = bill.line_items.iter().fold(0.0, |acc, line| acc + line.amount);
    assert_eq!(
        bill.total_revenue,
        round_to_cents(sum),
        "Total revenue {} does not match line sum {}",
        bill.total_revenue,
        sum
    );
}

/// Asserts that a bill has exactly one line and returns it
pub fn assert_single_line(bill: &BillResult) -> &LineItem {
    assert_eq!(
        bill.line_items.len(),
        1,
        "Expected a single line item, got {:?}",
        bill.line_items
    );
    &bill.line_items[0]
}

/// Asserts that a bill has no lines and zero revenue
pub fn assert_empty_bill(bill: &BillResult) {
    assert!(bill.is_empty(), "Expected no line items, got {:?}", bill.line_items);
    assert_eq!(bill.total_revenue, 0.0, "Expected zero revenue");
}
