//! Loan Domain Ports
//!
//! The application service stores booked loans through `LoanRepository`.
//! Adapters report failures as `PortError` so the service treats an
//! in-memory store and a remote one the same way.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_loan::ports::{InMemoryLoanRepository, LoanRepository};
//!
//! let repository: Arc<dyn LoanRepository> = Arc::new(InMemoryLoanRepository::new());
//! repository.save(&loan).await?;
//! let found = repository.find_by_id(loan.id()).await?;
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use core_kernel::{ClientId, DomainPort, LoanId, PortError};

use crate::loan::Loan;

/// Storage for booked loans
#[async_trait]
pub trait LoanRepository: DomainPort {
    /// Stores a loan
    ///
    /// # Errors
    ///
    /// `PortError::Conflict` if a loan with the same id already exists
    async fn save(&self, loan: &Loan) -> Result<(), PortError>;

    /// Retrieves a loan by id, or `PortError::NotFound`
    async fn find_by_id(&self, id: LoanId) -> Result<Loan, PortError>;

    /// Lists a client's loans, oldest first
    async fn find_by_client(&self, client_id: ClientId) -> Result<Vec<Loan>, PortError>;
}

/// In-memory loan repository
#[derive(Debug, Default, Clone)]
pub struct InMemoryLoanRepository {
    loans: Arc<RwLock<HashMap<LoanId, Loan>>>,
}

impl InMemoryLoanRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored loans
    pub async fn len(&self) -> usize {
        self.loans.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.loans.read().await.is_empty()
    }
}

impl DomainPort for InMemoryLoanRepository {}

#[async_trait]
impl LoanRepository for InMemoryLoanRepository {
    async fn save(&self, loan: &Loan) -> Result<(), PortError> {
        let mut loans = self.loans.write().await;
        if loans.contains_key(&loan.id()) {
            return Err(PortError::conflict(format!("loan {} already exists", loan.id())));
        }
        loans.insert(loan.id(), loan.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: LoanId) -> Result<Loan, PortError> {
        self.loans
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Loan", id))
    }

    async fn find_by_client(&self, client_id: ClientId) -> Result<Vec<Loan>, PortError> {
        let loans = self.loans.read().await;
        let mut results: Vec<Loan> = loans
            .values()
            .filter(|loan| loan.client_id() == client_id)
            .cloned()
            .collect();
        results.sort_by_key(|loan| (loan.created_at(), *loan.id().as_uuid()));
        Ok(results)
    }
}
