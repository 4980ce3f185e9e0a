use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_client::UsState;

use crate::aggregate::LoanDecision;
use crate::context::EvaluationContext;
use crate::decision::RuleCode;

use super::Rule;

/// Raises the interest rate for California clients
///
/// Skipped silently when the decision carries no conditions.
#[derive(Debug, Clone, Copy, Default)]
pub struct StateCaInterestIncreaseRule;

impl StateCaInterestIncreaseRule {
    pub const CA_INTEREST_INCREASE: Decimal = dec!(11.49);
}

impl Rule for StateCaInterestIncreaseRule {
    fn code(&self) -> RuleCode {
        RuleCode::StateCaInterestIncrease
    }

    fn apply(&self, decision: &mut LoanDecision, _context: &mut EvaluationContext<'_>) {
        if decision.client().state() == UsState::CA {
            decision.increase_interest_rate(Self::CA_INTEREST_INCREASE);
        }
    }
}
