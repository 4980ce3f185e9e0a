use crate::aggregate::LoanDecision;
use crate::context::EvaluationContext;
use crate::decision::{Decision, RuleCode};

use super::Rule;

/// Denies clients younger than 18 or older than 60
///
/// Ages 18 and 60 pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct AgeRule;

impl AgeRule {
    pub const MIN_AGE: u32 = 18;
    pub const MAX_AGE: u32 = 60;
}

impl Rule for AgeRule {
    fn code(&self) -> RuleCode {
        RuleCode::Age
    }

    fn apply(&self, decision: &mut LoanDecision, context: &mut EvaluationContext<'_>) {
        let age = decision.client().age_on(context.as_of());
        if !age.is_at_least(Self::MIN_AGE) || age.is_greater_than(Self::MAX_AGE) {
            decision.set_decision(Decision::Denied);
        }
    }
}
