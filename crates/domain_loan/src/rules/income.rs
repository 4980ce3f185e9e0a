use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::aggregate::LoanDecision;
use crate::context::EvaluationContext;
use crate::decision::{Decision, RuleCode};

use super::Rule;

/// Denies clients with monthly income below 1000
#[derive(Debug, Clone, Copy, Default)]
pub struct IncomeRule;

impl IncomeRule {
    pub const MIN_MONTHLY_INCOME: Decimal = dec!(1000);
}

impl Rule for IncomeRule {
    fn code(&self) -> RuleCode {
        RuleCode::Income
    }

    fn apply(&self, decision: &mut LoanDecision, _context: &mut EvaluationContext<'_>) {
        if !decision.client().monthly_income().is_at_least(Self::MIN_MONTHLY_INCOME) {
            decision.set_decision(Decision::Denied);
        }
    }
}
