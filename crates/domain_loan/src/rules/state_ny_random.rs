use domain_client::UsState;

use crate::aggregate::LoanDecision;
use crate::context::EvaluationContext;
use crate::decision::{Decision, RuleCode};

use super::Rule;

/// Denies New York clients at random
///
/// Draws from the evaluation context only for NY clients; a draw strictly
/// below 0.5 denies, so 0.5 itself passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct StateNyRandomRule;

impl StateNyRandomRule {
    pub const DENIAL_THRESHOLD: f64 = 0.5;
}

impl Rule for StateNyRandomRule {
    fn code(&self) -> RuleCode {
        RuleCode::StateNyRandom
    }

    fn apply(&self, decision: &mut LoanDecision, context: &mut EvaluationContext<'_>) {
        if decision.client().state() != UsState::NY {
            return;
        }
        if context.draw() < Self::DENIAL_THRESHOLD {
            decision.set_decision(Decision::Denied);
        }
    }
}
