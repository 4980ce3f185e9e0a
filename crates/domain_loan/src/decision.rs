//! Verdicts and rule identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Underwriting verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Initial verdict; no rule objected
    Approved,
    /// Approved, but at least one rule changed the loan terms
    ApprovedWithChanges,
    /// Terminal; no later rule runs
    Denied,
}

impl Decision {
    pub fn is_denied(&self) -> bool {
        matches!(self, Decision::Denied)
    }

    /// Returns true if moving from `self` to `next` is allowed
    ///
    /// ```text
    /// Approved            -> Approved | ApprovedWithChanges | Denied
    /// ApprovedWithChanges -> ApprovedWithChanges | Denied
    /// Denied              -> Denied
    /// ```
    pub fn can_transition_to(&self, next: Decision) -> bool {
        match self {
            Decision::Approved => true,
            Decision::ApprovedWithChanges => next != Decision::Approved,
            Decision::Denied => next == Decision::Denied,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Approved => "approved",
            Decision::ApprovedWithChanges => "approved_with_changes",
            Decision::Denied => "denied",
        }
    }
}

impl Default for Decision {
    fn default() -> Self {
        Decision::Approved
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable identifier of a rule type
///
/// Used as the registry key and in per-product rule lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCode {
    CreditRating,
    Income,
    Age,
    StateExclusive,
    StateNyRandom,
    StateCaInterestIncrease,
    /// Pass-through rule used by tests
    Dump,
}

impl RuleCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCode::CreditRating => "credit_rating",
            RuleCode::Income => "income",
            RuleCode::Age => "age",
            RuleCode::StateExclusive => "state_exclusive",
            RuleCode::StateNyRandom => "state_ny_random",
            RuleCode::StateCaInterestIncrease => "state_ca_interest_increase",
            RuleCode::Dump => "dump",
        }
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
