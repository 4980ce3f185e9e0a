//! Rule Registry
//!
//! Lookup table from rule code to rule instance. The production registry is
//! assembled from a static list at process start and is read-only while
//! decisions are made.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_loan::registry::RuleRegistry;
//! use domain_loan::RuleCode;
//!
//! let registry = RuleRegistry::standard();
//! let rules = registry.find_by_codes(&[RuleCode::Age, RuleCode::Income]);
//! assert_eq!(rules.len(), 2);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::decision::RuleCode;
use crate::error::LoanError;
use crate::rules::{
    AgeRule, CreditScoreRule, IncomeRule, Rule, StateCaInterestIncreaseRule,
    StateExclusiveRule, StateNyRandomRule,
};

/// Rule code -> rule instance
#[derive(Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<RuleCode, Arc<dyn Rule>>,
}

impl RuleRegistry {
    /// Creates a registry from a collection of rules
    ///
    /// When two rules share a code, the one registered last wins.
    pub fn new(rules: impl IntoIterator<Item = Arc<dyn Rule>>) -> Self {
        let mut registry = Self::default();
        for rule in rules {
            registry.register(rule);
        }
        registry
    }

    /// Creates the registry holding every production rule
    pub fn standard() -> Self {
        Self::new([
            Arc::new(CreditScoreRule) as Arc<dyn Rule>,
            Arc::new(IncomeRule),
            Arc::new(AgeRule),
            Arc::new(StateExclusiveRule),
            Arc::new(StateNyRandomRule),
            Arc::new(StateCaInterestIncreaseRule),
        ])
    }

    /// Adds a rule, replacing any rule already registered under its code
    pub fn register(&mut self, rule: Arc<dyn Rule>) {
        let code = rule.code();
        if self.rules.insert(code, rule).is_some() {
            debug!(rule = %code, "Replaced previously registered rule");
        }
    }

    /// Returns the rule registered under `code`
    pub fn get(&self, code: RuleCode) -> Option<Arc<dyn Rule>> {
        self.rules.get(&code).cloned()
    }

    pub fn contains(&self, code: RuleCode) -> bool {
        self.rules.contains_key(&code)
    }

    /// Resolves codes to rules, keeping the input order
    ///
    /// Codes with no registered rule are skipped.
    pub fn find_by_codes(&self, codes: &[RuleCode]) -> Vec<Arc<dyn Rule>> {
        codes.iter().filter_map(|code| self.get(*code)).collect()
    }

    /// Resolves codes to rules, keeping the input order
    ///
    /// # Errors
    ///
    /// Returns `UnregisteredRule` for the first code with no registered rule
    pub fn require_by_codes(&self, codes: &[RuleCode]) -> Result<Vec<Arc<dyn Rule>>, LoanError> {
        codes
            .iter()
            .map(|code| self.get(*code).ok_or(LoanError::UnregisteredRule(*code)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut codes: Vec<&'static str> = self.rules.keys().map(RuleCode::as_str).collect();
        codes.sort_unstable();
        f.debug_struct("RuleRegistry").field("rules", &codes).finish()
    }
}
