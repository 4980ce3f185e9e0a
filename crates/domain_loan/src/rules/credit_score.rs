use crate::aggregate::LoanDecision;
use crate::context::EvaluationContext;
use crate::decision::{Decision, RuleCode};

use super::Rule;

/// Denies clients whose credit score is 500 or lower
#[derive(Debug, Clone, Copy, Default)]
pub struct CreditScoreRule;

impl CreditScoreRule {
    pub const MIN_CREDIT_SCORE: u16 = 500;
}

impl Rule for CreditScoreRule {
    fn code(&self) -> RuleCode {
        RuleCode::CreditRating
    }

    fn apply(&self, decision: &mut LoanDecision, _context: &mut EvaluationContext<'_>) {
        if !decision.client().has_sufficient_credit_score(Self::MIN_CREDIT_SCORE) {
            decision.set_decision(Decision::Denied);
        }
    }
}
