//! Product value objects

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ProductError;

/// Annual interest rate in percentage points, bounded to [0, 100]
///
/// Adjustments never mutate a rate; they return a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct InterestRate(Decimal);

impl InterestRate {
    pub const MIN: Decimal = dec!(0);
    pub const MAX: Decimal = dec!(100);

    /// Creates an interest rate
    ///
    /// # Errors
    ///
    /// Returns `InterestRateOutOfRange` outside [0, 100]
    pub fn new(percent: Decimal) -> Result<Self, ProductError> {
        if percent < Self::MIN || percent > Self::MAX {
            return Err(ProductError::InterestRateOutOfRange(percent.to_string()));
        }
        Ok(Self(percent))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns a new rate raised by `points` percentage points
    ///
    /// # Errors
    ///
    /// Returns `InterestRateOutOfRange` if the result leaves [0, 100]
    pub fn increase_by(&self, points: Decimal) -> Result<Self, ProductError> {
        Self::new(self.0 + points)
    }

    /// Returns a new rate raised by `points`, clamped into [0, 100]
    pub fn saturating_increase_by(&self, points: Decimal) -> Self {
        Self((self.0 + points).clamp(Self::MIN, Self::MAX))
    }
}

impl TryFrom<Decimal> for InterestRate {
    type Error = ProductError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        InterestRate::new(value)
    }
}

impl From<InterestRate> for Decimal {
    fn from(rate: InterestRate) -> Decimal {
        rate.0
    }
}

impl fmt::Display for InterestRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Loan term in whole months, always positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Term(u32);

impl Term {
    /// Creates a term from a month count
    ///
    /// # Errors
    ///
    /// Returns `NonPositiveTerm` for zero or negative counts
    pub fn from_months(months: i64) -> Result<Self, ProductError> {
        if months <= 0 || months > i64::from(u32::MAX) {
            return Err(ProductError::NonPositiveTerm(months));
        }
        Ok(Self(months as u32))
    }

    pub fn months(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for Term {
    type Error = ProductError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Term::from_months(value)
    }
}

impl From<Term> for u32 {
    fn from(term: Term) -> u32 {
        term.0
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} months", self.0)
    }
}
