//! Product entity

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::ProductId;

use crate::error::ProductError;
use crate::value_objects::{InterestRate, Term};

/// Product family codes
///
/// The code, not the product instance, decides which underwriting rules
/// apply to an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductCode {
    PersonalLoan,
    AutoLoan,
    Mortgage,
}

impl ProductCode {
    pub const ALL: [ProductCode; 3] = [
        ProductCode::PersonalLoan,
        ProductCode::AutoLoan,
        ProductCode::Mortgage,
    ];

    /// Returns the wire representation of the code
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCode::PersonalLoan => "PERSONAL_LOAN",
            ProductCode::AutoLoan => "AUTO_LOAN",
            ProductCode::Mortgage => "MORTGAGE",
        }
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductCode {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ProductError::UnknownProductCode(s.to_string()))
    }
}

/// A loan product offered to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    code: ProductCode,
    term: Term,
    interest_rate: InterestRate,
    max_principal: Decimal,
}

impl Product {
    /// Creates a product with a fresh identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or the principal ceiling is not
    /// positive
    pub fn new(
        name: impl Into<String>,
        code: ProductCode,
        term: Term,
        interest_rate: InterestRate,
        max_principal: Decimal,
    ) -> Result<Self, ProductError> {
        Self::with_id(ProductId::new(), name, code, term, interest_rate, max_principal)
    }

    /// Creates a product with an existing identifier
    pub fn with_id(
        id: ProductId,
        name: impl Into<String>,
        code: ProductCode,
        term: Term,
        interest_rate: InterestRate,
        max_principal: Decimal,
    ) -> Result<Self, ProductError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ProductError::MissingRequiredField("name".to_string()));
        }
        if max_principal <= Decimal::ZERO {
            return Err(ProductError::NonPositiveCeiling(max_principal.to_string()));
        }

        Ok(Self {
            id,
            name,
            code,
            term,
            interest_rate,
            max_principal,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> ProductCode {
        self.code
    }

    pub fn term(&self) -> Term {
        self.term
    }

    pub fn interest_rate(&self) -> InterestRate {
        self.interest_rate
    }

    /// Largest principal a loan under this product may carry
    pub fn max_principal(&self) -> Decimal {
        self.max_principal
    }

    /// Returns true if `principal` does not exceed the ceiling
    pub fn allows_principal(&self, principal: Decimal) -> bool {
        principal <= self.max_principal
    }
}
