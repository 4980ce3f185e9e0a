//! Loan entity
//!
//! A `Loan` is what remains of an approved decision once it is booked: the
//! parties, the final conditions, and the verdict. Denied decisions never
//! become loans.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClientId, LoanId, ProductId};

use crate::aggregate::LoanDecision;
use crate::conditions::LoanConditions;
use crate::decision::Decision;

/// A booked loan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    id: LoanId,
    client_id: ClientId,
    product_id: ProductId,
    conditions: LoanConditions,
    decision: Decision,
    created_at: DateTime<Utc>,
}

impl Loan {
    /// Books a loan from a finished decision
    ///
    /// Returns `None` if the decision is denied or carries no conditions.
    pub fn from_decision(decision: &LoanDecision, created_at: DateTime<Utc>) -> Option<Self> {
        if decision.decision().is_denied() {
            return None;
        }
        let conditions = *decision.conditions()?;

        Some(Self {
            id: LoanId::new_v7(),
            client_id: decision.client().id(),
            product_id: decision.product().id(),
            conditions,
            decision: decision.decision(),
            created_at,
        })
    }

    pub fn id(&self) -> LoanId {
        self.id
    }

    pub fn client_id(&self) -> ClientId {
        self.client_id
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn conditions(&self) -> &LoanConditions {
        &self.conditions
    }

    /// `Approved` or `ApprovedWithChanges`
    pub fn decision(&self) -> Decision {
        self.decision
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
