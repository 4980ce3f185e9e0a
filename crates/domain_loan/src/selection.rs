//! Rule Selection Policy
//!
//! Maps a product code to the ordered list of rule codes that apply to it,
//! then resolves those codes through the registry. The order is the
//! evaluation order: gating rules run before cosmetic rate adjustments so a
//! denial stops the pass before terms are touched.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use domain_product::ProductCode;

use crate::config::Strictness;
use crate::decision::RuleCode;
use crate::error::LoanError;
use crate::registry::RuleRegistry;
use crate::rules::Rule;

/// Evaluation order for personal loans
pub const PERSONAL_LOAN_RULES: [RuleCode; 6] = [
    RuleCode::CreditRating,
    RuleCode::Income,
    RuleCode::Age,
    RuleCode::StateExclusive,
    RuleCode::StateNyRandom,
    RuleCode::StateCaInterestIncrease,
];

/// Returns the built-in rule list for a product code
///
/// Products without a built-in list get an empty slice.
pub fn standard_rule_codes(code: ProductCode) -> &'static [RuleCode] {
    match code {
        ProductCode::PersonalLoan => &PERSONAL_LOAN_RULES,
        _ => &[],
    }
}

/// Product code -> ordered rules
#[derive(Debug, Clone)]
pub struct RuleSelectionPolicy {
    registry: RuleRegistry,
    table: HashMap<ProductCode, Vec<RuleCode>>,
    strictness: Strictness,
}

impl RuleSelectionPolicy {
    /// Creates a policy using the built-in product table
    pub fn new(registry: RuleRegistry) -> Self {
        let table = ProductCode::ALL
            .iter()
            .filter(|code| !standard_rule_codes(**code).is_empty())
            .map(|code| (*code, standard_rule_codes(*code).to_vec()))
            .collect();

        Self {
            registry,
            table,
            strictness: Strictness::default(),
        }
    }

    /// Creates a policy with no product mappings
    pub fn empty(registry: RuleRegistry) -> Self {
        Self {
            registry,
            table: HashMap::new(),
            strictness: Strictness::default(),
        }
    }

    /// Sets how configuration gaps are handled
    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Maps a product code to an ordered rule list, replacing any existing entry
    pub fn with_product(mut self, code: ProductCode, rules: impl Into<Vec<RuleCode>>) -> Self {
        self.table.insert(code, rules.into());
        self
    }

    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Ordered rule codes for a product; empty when unmapped
    pub fn rule_codes(&self, code: ProductCode) -> &[RuleCode] {
        self.table.get(&code).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ordered rules for a product
    ///
    /// # Errors
    ///
    /// Only in strict mode: `UnmappedProduct` when the product has no entry,
    /// `UnregisteredRule` when an entry names a code the registry lacks
    pub fn rules_for(&self, code: ProductCode) -> Result<Vec<Arc<dyn Rule>>, LoanError> {
        let Some(codes) = self.table.get(&code) else {
            return match self.strictness {
                Strictness::Strict => Err(LoanError::UnmappedProduct(code)),
                Strictness::Permissive => {
                    warn!(product = %code, "No rule set mapped for product; approving without rules");
                    Ok(Vec::new())
                }
            };
        };

        match self.strictness {
            Strictness::Strict => self.registry.require_by_codes(codes),
            Strictness::Permissive => {
                let rules = self.registry.find_by_codes(codes);
                if rules.len() < codes.len() {
                    let missing: Vec<&'static str> = codes
                        .iter()
                        .filter(|c| !self.registry.contains(**c))
                        .map(RuleCode::as_str)
                        .collect();
                    warn!(product = %code, ?missing, "Skipping unregistered rules");
                }
                Ok(rules)
            }
        }
    }
}
