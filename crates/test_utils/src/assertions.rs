//! Custom Test Assertions
//!
//! Assertion helpers for decimal amounts and rates that give more useful
//! failure messages than a bare `assert_eq!`.

use rust_decimal::Decimal;

use domain_product::InterestRate;

/// Asserts that two decimals are equal within a tolerance
///
/// # Panics
///
/// Panics if the values differ by more than `tolerance`
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Values differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that a rate equals `expected` percentage points exactly
pub fn assert_rate_eq(actual: InterestRate, expected: Decimal) {
    assert_eq!(
        actual.value(),
        expected,
        "Expected interest rate {}%, got {}",
        expected,
        actual
    );
}

/// Asserts that a rate lies within [0, 100]
pub fn assert_rate_in_bounds(rate: InterestRate) {
    assert!(
        rate.value() >= InterestRate::MIN && rate.value() <= InterestRate::MAX,
        "Interest rate out of bounds: {}",
        rate
    );
}
