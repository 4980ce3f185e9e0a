use domain_client::UsState;

use crate::aggregate::LoanDecision;
use crate::context::EvaluationContext;
use crate::decision::{Decision, RuleCode};

use super::Rule;

/// Denies clients living outside the states we lend in
#[derive(Debug, Clone, Copy, Default)]
pub struct StateExclusiveRule;

impl StateExclusiveRule {
    pub const ALLOWED_STATES: [UsState; 3] = [UsState::CA, UsState::NY, UsState::NV];
}

impl Rule for StateExclusiveRule {
    fn code(&self) -> RuleCode {
        RuleCode::StateExclusive
    }

    fn apply(&self, decision: &mut LoanDecision, _context: &mut EvaluationContext<'_>) {
        if !decision.client().state().is_one_of(&Self::ALLOWED_STATES) {
            decision.set_decision(Decision::Denied);
        }
    }
}
