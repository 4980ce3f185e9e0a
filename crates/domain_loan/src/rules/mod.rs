//! Underwriting rules
//!
//! A rule is a stateless check over the client and product in a
//! `LoanDecision`. It may only call `set_decision` or
//! `increase_interest_rate` on the aggregate. Inputs are valid by
//! construction, so rules encode business thresholds and nothing else.
//!
//! | Rule | Condition | Effect |
//! |---|---|---|
//! | [`AgeRule`] | age < 18 or age > 60 | Denied |
//! | [`CreditScoreRule`] | score <= 500 | Denied |
//! | [`IncomeRule`] | income < 1000 | Denied |
//! | [`StateExclusiveRule`] | state not in CA, NY, NV | Denied |
//! | [`StateNyRandomRule`] | NY and draw < 0.5 | Denied |
//! | [`StateCaInterestIncreaseRule`] | CA with conditions | +11.49 points, ApprovedWithChanges |

mod age;
mod credit_score;
mod income;
mod state_ca_interest_increase;
mod state_exclusive;
mod state_ny_random;

pub use age::AgeRule;
pub use credit_score::CreditScoreRule;
pub use income::IncomeRule;
pub use state_ca_interest_increase::StateCaInterestIncreaseRule;
pub use state_exclusive::StateExclusiveRule;
pub use state_ny_random::StateNyRandomRule;

use crate::aggregate::LoanDecision;
use crate::context::EvaluationContext;
use crate::decision::RuleCode;

/// A single unit of underwriting logic
pub trait Rule: Send + Sync {
    /// Identifier used for registry lookup
    fn code(&self) -> RuleCode;

    /// Applies the rule to a decision in progress
    fn apply(&self, decision: &mut LoanDecision, context: &mut EvaluationContext<'_>);
}
