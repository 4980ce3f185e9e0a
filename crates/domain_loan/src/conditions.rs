//! Loan conditions value object

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_product::{InterestRate, Product, Term};

use crate::error::LoanError;

/// Principal, term, and interest rate of a proposed loan
///
/// Immutable. A rate adjustment builds a new `LoanConditions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanConditions {
    principal: Decimal,
    term: Term,
    interest_rate: InterestRate,
}

impl LoanConditions {
    /// Creates loan conditions
    ///
    /// # Errors
    ///
    /// Returns `InvalidConditions` if the principal is not positive
    pub fn new(principal: Decimal, term: Term, interest_rate: InterestRate) -> Result<Self, LoanError> {
        if principal <= Decimal::ZERO {
            return Err(LoanError::invalid_conditions(format!(
                "principal must be positive, got {}",
                principal
            )));
        }
        Ok(Self {
            principal: principal.round_dp(2),
            term,
            interest_rate,
        })
    }

    /// Default conditions offered by a product: its ceiling, term, and base rate
    pub fn from_product(product: &Product) -> Self {
        Self {
            principal: product.max_principal().round_dp(2),
            term: product.term(),
            interest_rate: product.interest_rate(),
        }
    }

    pub fn principal(&self) -> Decimal {
        self.principal
    }

    pub fn term(&self) -> Term {
        self.term
    }

    pub fn interest_rate(&self) -> InterestRate {
        self.interest_rate
    }

    /// Returns a copy carrying a different interest rate
    pub fn with_interest_rate(&self, interest_rate: InterestRate) -> Self {
        Self {
            interest_rate,
            ..*self
        }
    }
}
