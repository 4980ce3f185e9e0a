//! Client DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_client::{Client, CreditScore, FullName, MonthlyIncome, UsState};

use crate::error::ApiError;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateClientRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    #[validate(range(min = 300, max = 850))]
    pub credit_score: i64,
    pub monthly_income: Decimal,
    #[validate(length(equal = 2))]
    pub state: String,
}

impl CreateClientRequest {
    /// Validates the request and builds a client with a fresh id
    pub fn into_domain(self) -> Result<Client, ApiError> {
        self.validate()?;
        Ok(Client::new(
            FullName::new(self.first_name, self.last_name)?,
            self.date_of_birth,
            CreditScore::new(self.credit_score)?,
            MonthlyIncome::new(self.monthly_income)?,
            self.state.parse::<UsState>()?,
        ))
    }
}

/// Partial update; absent fields keep their current value
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateClientRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    #[validate(range(min = 300, max = 850))]
    pub credit_score: Option<i64>,
    pub monthly_income: Option<Decimal>,
    #[validate(length(equal = 2))]
    pub state: Option<String>,
}

impl UpdateClientRequest {
    /// Validates the request and rebuilds `current` with the given fields
    pub fn apply_to(self, current: &Client) -> Result<Client, ApiError> {
        self.validate()?;
        let name = current.full_name();
        let full_name = FullName::new(
            self.first_name.unwrap_or_else(|| name.first_name().to_string()),
            self.last_name.unwrap_or_else(|| name.last_name().to_string()),
        )?;
        let credit_score = match self.credit_score {
            Some(score) => CreditScore::new(score)?,
            None => current.credit_score(),
        };
        let monthly_income = match self.monthly_income {
            Some(amount) => MonthlyIncome::new(amount)?,
            None => current.monthly_income(),
        };
        let state = match self.state {
            Some(code) => code.parse::<UsState>()?,
            None => current.state(),
        };

        Ok(Client::with_id(
            current.id(),
            full_name,
            self.date_of_birth.unwrap_or_else(|| current.date_of_birth()),
            credit_score,
            monthly_income,
            state,
        ))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClientResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub credit_score: u16,
    pub monthly_income: Decimal,
    pub state: UsState,
}

impl From<&Client> for ClientResponse {
    fn from(client: &Client) -> Self {
        Self {
            id: *client.id().as_uuid(),
            first_name: client.full_name().first_name().to_string(),
            last_name: client.full_name().last_name().to_string(),
            date_of_birth: client.date_of_birth(),
            credit_score: client.credit_score().value(),
            monthly_income: client.monthly_income().amount(),
            state: client.state(),
        }
    }
}
