//! Client value objects
//!
//! Immutable wrappers that validate their bounds on construction. Any
//! "change" to one of these builds a new instance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ClientError;

/// First and last name of a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullName {
    first_name: String,
    last_name: String,
}

impl FullName {
    /// Creates a full name, trimming surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` if either part is blank
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Result<Self, ClientError> {
        let first_name = first_name.into().trim().to_string();
        let last_name = last_name.into().trim().to_string();

        if first_name.is_empty() {
            return Err(ClientError::missing_field("first_name"));
        }
        if last_name.is_empty() {
            return Err(ClientError::missing_field("last_name"));
        }

        Ok(Self { first_name, last_name })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// Age in whole years, bounded to [0, 150]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Age(u32);

impl Age {
    pub const MIN: u32 = 0;
    pub const MAX: u32 = 150;

    /// Creates an age
    ///
    /// # Errors
    ///
    /// Returns `AgeOutOfRange` outside [0, 150]
    pub fn new(years: i64) -> Result<Self, ClientError> {
        if years < Self::MIN as i64 || years > Self::MAX as i64 {
            return Err(ClientError::AgeOutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: years,
            });
        }
        Ok(Self(years as u32))
    }

    /// Creates an age clamped into the valid range
    pub fn saturating(years: i64) -> Self {
        Self(years.clamp(Self::MIN as i64, Self::MAX as i64) as u32)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Returns true at or above the given number of years
    pub fn is_at_least(&self, years: u32) -> bool {
        self.0 >= years
    }

    /// Returns true strictly above the given number of years
    pub fn is_greater_than(&self, years: u32) -> bool {
        self.0 > years
    }
}

impl TryFrom<i64> for Age {
    type Error = ClientError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Age::new(value)
    }
}

impl From<Age> for u32 {
    fn from(age: Age) -> u32 {
        age.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Credit score on the FICO scale [300, 850]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u16")]
pub struct CreditScore(u16);

impl CreditScore {
    pub const MIN: u16 = 300;
    pub const MAX: u16 = 850;

    /// Creates a credit score
    ///
    /// # Errors
    ///
    /// Returns `CreditScoreOutOfRange` outside [300, 850]
    pub fn new(score: i64) -> Result<Self, ClientError> {
        if score < Self::MIN as i64 || score > Self::MAX as i64 {
            return Err(ClientError::CreditScoreOutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: score,
            });
        }
        Ok(Self(score as u16))
    }

    pub fn value(&self) -> u16 {
        self.0
    }

    /// Returns true strictly above the given score
    pub fn is_greater_than(&self, score: u16) -> bool {
        self.0 > score
    }
}

impl TryFrom<i64> for CreditScore {
    type Error = ClientError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        CreditScore::new(value)
    }
}

impl From<CreditScore> for u16 {
    fn from(score: CreditScore) -> u16 {
        score.0
    }
}

/// Gross monthly income, never negative
///
/// The amount is kept exactly as given. Rounding would let an income just
/// under a threshold compare as equal to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct MonthlyIncome(Decimal);

impl MonthlyIncome {
    /// Creates a monthly income
    ///
    /// # Errors
    ///
    /// Returns `NegativeIncome` for amounts below zero
    pub fn new(amount: Decimal) -> Result<Self, ClientError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(ClientError::NegativeIncome(amount.to_string()));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true at or above the given amount
    pub fn is_at_least(&self, amount: Decimal) -> bool {
        self.0 >= amount
    }
}

impl TryFrom<Decimal> for MonthlyIncome {
    type Error = ClientError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        MonthlyIncome::new(value)
    }
}

impl From<MonthlyIncome> for Decimal {
    fn from(income: MonthlyIncome) -> Decimal {
        income.0
    }
}

/// US states in which clients can reside
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UsState {
    CA,
    NY,
    NV,
    TX,
    FL,
}

impl UsState {
    /// All supported states
    pub const ALL: [UsState; 5] = [UsState::CA, UsState::NY, UsState::NV, UsState::TX, UsState::FL];

    /// Returns the two-letter postal code
    pub fn code(&self) -> &'static str {
        match self {
            UsState::CA => "CA",
            UsState::NY => "NY",
            UsState::NV => "NV",
            UsState::TX => "TX",
            UsState::FL => "FL",
        }
    }

    /// Returns true if this state is one of the given states
    pub fn is_one_of(&self, states: &[UsState]) -> bool {
        states.contains(self)
    }
}

impl fmt::Display for UsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for UsState {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UsState::ALL
            .iter()
            .copied()
            .find(|state| state.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ClientError::UnsupportedState(s.to_string()))
    }
}
