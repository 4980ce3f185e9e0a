//! Decision engine
//!
//! Given a client, a product, and optional conditions, the engine selects the
//! rules mapped to the product code and applies them in order to a fresh
//! `LoanDecision`. The pass stops at the first rule that leaves the verdict
//! at `Denied`; later rules never run.
//!
//! The engine holds no per-request state. It can be shared behind an `Arc`
//! and called concurrently; each call builds its own random source.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use core_kernel::{Clock, RandomSource, RngSource, SystemClock};
use domain_client::Client;
use domain_product::Product;

use crate::aggregate::LoanDecision;
use crate::conditions::LoanConditions;
use crate::config::EngineConfig;
use crate::context::EvaluationContext;
use crate::error::LoanError;
use crate::registry::RuleRegistry;
use crate::selection::RuleSelectionPolicy;

/// Builds a fresh random source for each evaluation
pub type RandomSourceFactory = Arc<dyn Fn() -> Box<dyn RandomSource> + Send + Sync>;

fn entropy_source() -> Box<dyn RandomSource> {
    Box::new(RngSource::from_entropy())
}

/// Applies the rules selected for a product to a loan request
#[derive(Clone)]
pub struct DecisionMaker {
    policy: RuleSelectionPolicy,
    clock: Arc<dyn Clock>,
    random: RandomSourceFactory,
}

impl DecisionMaker {
    /// Creates an engine over a selection policy, using the system clock and
    /// an entropy-seeded generator
    pub fn new(policy: RuleSelectionPolicy) -> Self {
        Self {
            policy,
            clock: Arc::new(SystemClock),
            random: Arc::new(entropy_source),
        }
    }

    /// Creates the production engine: every built-in rule and the built-in
    /// product table
    pub fn from_config(config: &EngineConfig) -> Self {
        let policy = RuleSelectionPolicy::new(RuleRegistry::standard())
            .with_strictness(config.strictness);
        Self::new(policy)
    }

    /// Replaces the clock used for the evaluation date
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replaces the per-evaluation random source factory
    pub fn with_random_source_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Box<dyn RandomSource> + Send + Sync + 'static,
    {
        self.random = Arc::new(factory);
        self
    }

    pub fn policy(&self) -> &RuleSelectionPolicy {
        &self.policy
    }

    /// Decides a loan request as of today
    ///
    /// A denial is an `Ok` result with verdict `Denied`.
    ///
    /// # Errors
    ///
    /// Only configuration gaps in strict mode
    pub fn decide(
        &self,
        client: &Client,
        product: &Product,
        conditions: Option<LoanConditions>,
    ) -> Result<LoanDecision, LoanError> {
        let mut random = (self.random)();
        let mut context = EvaluationContext::new(self.clock.today(), random.as_mut());
        self.decide_with(client, product, conditions, &mut context)
    }

    /// Decides a loan request with a caller-supplied context
    pub fn decide_with(
        &self,
        client: &Client,
        product: &Product,
        conditions: Option<LoanConditions>,
        context: &mut EvaluationContext<'_>,
    ) -> Result<LoanDecision, LoanError> {
        let rules = self.policy.rules_for(product.code())?;
        let mut decision = LoanDecision::new(client.clone(), product.clone(), conditions);

        for rule in &rules {
            let code = rule.code();
            rule.apply(&mut decision, context);
            decision.record_applied(code);
            debug!(rule = %code, verdict = %decision.decision(), "Applied rule");

            if decision.decision().is_denied() {
                break;
            }
        }

        info!(
            client_id = %client.id(),
            product = %product.code(),
            verdict = %decision.decision(),
            denied_by = ?decision.denied_by(),
            rules_applied = decision.applied_rules().len(),
            "Loan decision made"
        );

        Ok(decision)
    }
}

impl Default for DecisionMaker {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl fmt::Debug for DecisionMaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecisionMaker")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
