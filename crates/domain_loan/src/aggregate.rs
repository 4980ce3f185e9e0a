//! Loan Decision Aggregate
//!
//! `LoanDecision` is the record a rule pass works on. It is built once per
//! evaluation, mutated in place by each rule, and handed back to the caller.
//! Nothing here is persisted.
//!
//! # Invariants
//!
//! - Rules change the aggregate only through `set_decision` and
//!   `increase_interest_rate`
//! - The verdict follows `Decision::can_transition_to`; `Denied` never
//!   changes once set
//! - Conditions are replaced, never mutated; an adjustment made before a
//!   later denial is kept

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use domain_client::Client;
use domain_product::{InterestRate, Product};

use crate::conditions::LoanConditions;
use crate::decision::{Decision, RuleCode};

/// The in-progress underwriting result for one evaluation
#[derive(Debug, Clone, Serialize)]
pub struct LoanDecision {
    client: Client,
    product: Product,
    conditions: Option<LoanConditions>,
    decision: Decision,
    applied_rules: Vec<RuleCode>,
    denied_by: Option<RuleCode>,
    rate_capped: bool,
}

impl LoanDecision {
    /// Creates an aggregate with verdict `Approved`
    pub fn new(client: Client, product: Product, conditions: Option<LoanConditions>) -> Self {
        Self {
            client,
            product,
            conditions,
            decision: Decision::Approved,
            applied_rules: Vec::new(),
            denied_by: None,
            rate_capped: false,
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn conditions(&self) -> Option<&LoanConditions> {
        self.conditions.as_ref()
    }

    pub fn decision(&self) -> Decision {
        self.decision
    }

    /// Rule codes applied so far, in order
    pub fn applied_rules(&self) -> &[RuleCode] {
        &self.applied_rules
    }

    /// The rule whose application produced `Denied`, if any
    pub fn denied_by(&self) -> Option<RuleCode> {
        self.denied_by
    }

    /// True if a rate increase was cut short by the 100% ceiling
    pub fn rate_capped(&self) -> bool {
        self.rate_capped
    }

    /// Sets the verdict
    ///
    /// Transitions not allowed by the verdict lifecycle are ignored.
    /// Returns true if the verdict was changed or confirmed.
    pub fn set_decision(&mut self, decision: Decision) -> bool {
        if !self.decision.can_transition_to(decision) {
            debug!(
                from = %self.decision,
                to = %decision,
                "Ignoring verdict transition"
            );
            return false;
        }
        self.decision = decision;
        true
    }

    /// Raises the interest rate by `points` percentage points
    ///
    /// No-op when there are no conditions. Otherwise replaces the conditions
    /// with a copy carrying the higher rate and moves the verdict to
    /// `ApprovedWithChanges`. The rate saturates at the 100% ceiling and the
    /// aggregate remembers that it did.
    pub fn increase_interest_rate(&mut self, points: Decimal) {
        let Some(current) = self.conditions else {
            return;
        };

        let rate = current.interest_rate();
        let raised = rate.saturating_increase_by(points);
        let requested = rate.value() + points;
        if requested > InterestRate::MAX {
            warn!(
                rate = %rate,
                points = %points,
                requested = %requested,
                applied = %raised,
                "Interest rate adjustment capped at ceiling"
            );
            self.rate_capped = true;
        }

        self.conditions = Some(current.with_interest_rate(raised));
        self.set_decision(Decision::ApprovedWithChanges);
    }

    /// Records that a rule ran; marks it as the denying rule if the verdict
    /// is now `Denied` and no rule was recorded as such before
    pub(crate) fn record_applied(&mut self, code: RuleCode) {
        self.applied_rules.push(code);
        if self.decision.is_denied() && self.denied_by.is_none() {
            self.denied_by = Some(code);
        }
    }
}
