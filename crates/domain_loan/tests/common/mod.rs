//! Fake rules and helpers shared by the loan domain tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use core_kernel::{RandomSource, SequenceSource};
use domain_loan::{Decision, EvaluationContext, LoanDecision, Rule, RuleCode};
use test_utils::TemporalFixtures;

/// Sets a fixed verdict, or leaves the decision alone when `None`
pub struct DumpRule(pub Option<Decision>);

impl Rule for DumpRule {
    fn code(&self) -> RuleCode {
        RuleCode::Dump
    }

    fn apply(&self, decision: &mut LoanDecision, _context: &mut EvaluationContext<'_>) {
        if let Some(verdict) = self.0 {
            decision.set_decision(verdict);
        }
    }
}

/// Denies every request, registered under a chosen code
pub struct AlwaysDenyRule(pub RuleCode);

impl Rule for AlwaysDenyRule {
    fn code(&self) -> RuleCode {
        self.0
    }

    fn apply(&self, decision: &mut LoanDecision, _context: &mut EvaluationContext<'_>) {
        decision.set_decision(Decision::Denied);
    }
}

/// Counts how often it runs; never changes the decision
pub struct RecordingRule {
    code: RuleCode,
    calls: Arc<AtomicUsize>,
}

impl RecordingRule {
    pub fn new(code: RuleCode) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                code,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

impl Rule for RecordingRule {
    fn code(&self) -> RuleCode {
        self.code
    }

    fn apply(&self, _decision: &mut LoanDecision, _context: &mut EvaluationContext<'_>) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

/// Applies one rule to a decision on the standard evaluation date
pub fn apply_rule(rule: &dyn Rule, decision: &mut LoanDecision, draw: f64) {
    let mut random = SequenceSource::constant(draw);
    let mut context = EvaluationContext::new(TemporalFixtures::as_of(), &mut random);
    rule.apply(decision, &mut context);
}

/// Random source factory that always draws `draw`
pub fn constant_draws(draw: f64) -> impl Fn() -> Box<dyn RandomSource> + Send + Sync + 'static {
    move || Box::new(SequenceSource::constant(draw)) as Box<dyn RandomSource>
}
