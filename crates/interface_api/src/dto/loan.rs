//! Loan DTOs
//!
//! Requests are checked with `validator` first, then converted into domain
//! value objects, which apply their own invariants.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use core_kernel::{ClientId, ProductId};
use domain_loan::{Decision, Loan, LoanApplicationOutcome, LoanConditions, LoanDecision, RuleCode};
use domain_product::{InterestRate, Term};

use crate::error::ApiError;

#[derive(Debug, Deserialize, Validate)]
pub struct ConditionsRequest {
    pub principal: Decimal,
    #[validate(range(min = 1, max = 600))]
    pub term_months: i64,
    pub interest_rate: Decimal,
}

/// Body of both `POST /loan-decisions` and `POST /loans`
///
/// The client and product are referenced by id; their attributes always
/// come from the stores.
#[derive(Debug, Deserialize, Validate)]
pub struct LoanRequest {
    pub client_id: Uuid,
    pub product_id: Uuid,
    #[validate(nested)]
    pub conditions: Option<ConditionsRequest>,
}

impl TryFrom<ConditionsRequest> for LoanConditions {
    type Error = ApiError;

    fn try_from(request: ConditionsRequest) -> Result<Self, Self::Error> {
        Ok(LoanConditions::new(
            request.principal,
            Term::from_months(request.term_months)?,
            InterestRate::new(request.interest_rate)?,
        )?)
    }
}

impl LoanRequest {
    /// Validates the request and converts it into domain inputs
    pub fn into_domain(self) -> Result<(ClientId, ProductId, Option<LoanConditions>), ApiError> {
        self.validate()?;
        let conditions = self.conditions.map(LoanConditions::try_from).transpose()?;
        Ok((
            ClientId::from_uuid(self.client_id),
            ProductId::from_uuid(self.product_id),
            conditions,
        ))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConditionsResponse {
    pub principal: Decimal,
    pub term_months: u32,
    pub interest_rate: Decimal,
}

impl From<&LoanConditions> for ConditionsResponse {
    fn from(conditions: &LoanConditions) -> Self {
        Self {
            principal: conditions.principal(),
            term_months: conditions.term().months(),
            interest_rate: conditions.interest_rate().value(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoanDecisionResponse {
    pub decision: Decision,
    pub applied_rules: Vec<RuleCode>,
    pub denied_by: Option<RuleCode>,
    pub conditions: Option<ConditionsResponse>,
    /// True if a rate adjustment hit the 100% ceiling
    pub rate_capped: bool,
}

impl From<&LoanDecision> for LoanDecisionResponse {
    fn from(decision: &LoanDecision) -> Self {
        Self {
            decision: decision.decision(),
            applied_rules: decision.applied_rules().to_vec(),
            denied_by: decision.denied_by(),
            conditions: decision.conditions().map(ConditionsResponse::from),
            rate_capped: decision.rate_capped(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoanResponse {
    pub id: Uuid,
    pub client_id: Uuid,
    pub product_id: Uuid,
    pub decision: Decision,
    pub conditions: ConditionsResponse,
    pub created_at: DateTime<Utc>,
}

impl From<&Loan> for LoanResponse {
    fn from(loan: &Loan) -> Self {
        Self {
            id: *loan.id().as_uuid(),
            client_id: *loan.client_id().as_uuid(),
            product_id: *loan.product_id().as_uuid(),
            decision: loan.decision(),
            conditions: ConditionsResponse::from(loan.conditions()),
            created_at: loan.created_at(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoanApplicationResponse {
    pub decision: LoanDecisionResponse,
    pub loan: Option<LoanResponse>,
}

impl From<&LoanApplicationOutcome> for LoanApplicationResponse {
    fn from(outcome: &LoanApplicationOutcome) -> Self {
        Self {
            decision: LoanDecisionResponse::from(&outcome.decision),
            loan: outcome.loan.as_ref().map(LoanResponse::from),
        }
    }
}
