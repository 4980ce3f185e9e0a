//! Per-evaluation context handed to every rule
//!
//! Carries the evaluation date and the random source. The context is built
//! fresh for each evaluation and borrowed exclusively by the rule pass, so
//! two evaluations never share generator state.

use chrono::NaiveDate;

use core_kernel::RandomSource;

/// Inputs to a rule pass that are not part of the client or product
pub struct EvaluationContext<'a> {
    as_of: NaiveDate,
    random: &'a mut dyn RandomSource,
}

impl<'a> EvaluationContext<'a> {
    pub fn new(as_of: NaiveDate, random: &'a mut dyn RandomSource) -> Self {
        Self { as_of, random }
    }

    /// Date on which ages are computed
    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    /// Takes the next uniform draw in `[0, 1)`
    pub fn draw(&mut self) -> f64 {
        self.random.next_unit()
    }
}

impl std::fmt::Debug for EvaluationContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvaluationContext")
            .field("as_of", &self.as_of)
            .finish_non_exhaustive()
    }
}
