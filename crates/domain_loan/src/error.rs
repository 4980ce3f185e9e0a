//! Loan domain errors
//!
//! A denial is never an error: it is `Decision::Denied`. The variants here
//! cover invalid loan conditions, configuration gaps in strict mode, and
//! failures of the loan repository.

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::{ClientId, LoanId, PortError, ProductId};
use domain_product::{ProductCode, ProductError};

use crate::decision::RuleCode;

/// Errors that can occur in the loan domain
#[derive(Debug, Error)]
pub enum LoanError {
    /// Principal must be positive
    #[error("Invalid loan conditions: {0}")]
    InvalidConditions(String),

    /// Requested principal is above the product ceiling
    #[error("Requested principal {requested} exceeds product ceiling {ceiling}")]
    PrincipalExceedsCeiling {
        requested: Decimal,
        ceiling: Decimal,
    },

    /// Strict mode: product code has no rule set
    #[error("No rule set is mapped for product {0}")]
    UnmappedProduct(ProductCode),

    /// Strict mode: a mapped rule code has no registered rule
    #[error("Rule {0} is referenced but not registered")]
    UnregisteredRule(RuleCode),

    /// Applicant not registered
    #[error("Client not found: {0}")]
    ClientNotFound(ClientId),

    /// Product not in the catalogue
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Loan not found in the repository
    #[error("Loan not found: {0}")]
    LoanNotFound(LoanId),

    /// Product value object error
    #[error(transparent)]
    Product(#[from] ProductError),

    /// Repository failure
    #[error("Repository error: {0}")]
    Repository(#[from] PortError),
}

impl LoanError {
    /// Creates an invalid conditions error
    pub fn invalid_conditions(message: impl Into<String>) -> Self {
        LoanError::InvalidConditions(message.into())
    }

    /// Returns true when a referenced record does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LoanError::ClientNotFound(_) | LoanError::ProductNotFound(_) | LoanError::LoanNotFound(_)
        )
    }

    /// Returns true for errors caused by engine configuration
    pub fn is_configuration(&self) -> bool {
        matches!(self, LoanError::UnmappedProduct(_) | LoanError::UnregisteredRule(_))
    }
}
