//! Product DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_product::{InterestRate, Product, ProductCode, Term};

use crate::error::ApiError;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub code: ProductCode,
    #[validate(range(min = 1, max = 600))]
    pub term_months: i64,
    pub interest_rate: Decimal,
    pub max_principal: Decimal,
}

impl CreateProductRequest {
    /// Validates the request and builds a product with a fresh id
    pub fn into_domain(self) -> Result<Product, ApiError> {
        self.validate()?;
        Ok(Product::new(
            self.name,
            self.code,
            Term::from_months(self.term_months)?,
            InterestRate::new(self.interest_rate)?,
            self.max_principal,
        )?)
    }
}

/// Partial update; absent fields keep their current value
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub code: Option<ProductCode>,
    #[validate(range(min = 1, max = 600))]
    pub term_months: Option<i64>,
    pub interest_rate: Option<Decimal>,
    pub max_principal: Option<Decimal>,
}

impl UpdateProductRequest {
    /// Validates the request and rebuilds `current` with the given fields
    pub fn apply_to(self, current: &Product) -> Result<Product, ApiError> {
        self.validate()?;
        let term = match self.term_months {
            Some(months) => Term::from_months(months)?,
            None => current.term(),
        };
        let interest_rate = match self.interest_rate {
            Some(percent) => InterestRate::new(percent)?,
            None => current.interest_rate(),
        };

        Ok(Product::with_id(
            current.id(),
            self.name.unwrap_or_else(|| current.name().to_string()),
            self.code.unwrap_or(current.code()),
            term,
            interest_rate,
            self.max_principal.unwrap_or(current.max_principal()),
        )?)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub code: ProductCode,
    pub term_months: u32,
    pub interest_rate: Decimal,
    pub max_principal: Decimal,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: *product.id().as_uuid(),
            name: product.name().to_string(),
            code: product.code(),
            term_months: product.term().months(),
            interest_rate: product.interest_rate().value(),
            max_principal: product.max_principal(),
        }
    }
}
