//! Loan application service
//!
//! Orchestrates one loan application: loads the client and product by id,
//! fills in default conditions, checks the requested principal against the
//! product ceiling, runs the decision engine, and books the loan when the
//! verdict is not `Denied`.

use std::sync::Arc;

use tracing::{info, instrument};

use core_kernel::{Clock, ClientId, LoanId, PortError, ProductId, SystemClock};
use domain_client::{Client, ClientRepository, InMemoryClientRepository};
use domain_product::{InMemoryProductRepository, Product, ProductRepository};

use crate::aggregate::LoanDecision;
use crate::conditions::LoanConditions;
use crate::decision_maker::DecisionMaker;
use crate::error::LoanError;
use crate::loan::Loan;
use crate::ports::LoanRepository;

/// Result of a loan application
#[derive(Debug, Clone)]
pub struct LoanApplicationOutcome {
    /// The finished decision, including applied rules
    pub decision: LoanDecision,
    /// The booked loan; `None` when denied
    pub loan: Option<Loan>,
}

impl LoanApplicationOutcome {
    pub fn is_approved(&self) -> bool {
        !self.decision.decision().is_denied()
    }
}

/// Service for applying for loans
pub struct LoanApplicationService {
    decision_maker: Arc<DecisionMaker>,
    repository: Arc<dyn LoanRepository>,
    clients: Arc<dyn ClientRepository>,
    products: Arc<dyn ProductRepository>,
    clock: Arc<dyn Clock>,
}

impl LoanApplicationService {
    /// Creates a service stamping loans with the system clock
    ///
    /// Client and product lookups start out backed by empty in-memory
    /// stores; see `with_clients` and `with_products`.
    pub fn new(decision_maker: Arc<DecisionMaker>, repository: Arc<dyn LoanRepository>) -> Self {
        Self {
            decision_maker,
            repository,
            clients: Arc::new(InMemoryClientRepository::new()),
            products: Arc::new(InMemoryProductRepository::new()),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replaces the store applicants are loaded from
    pub fn with_clients(mut self, clients: Arc<dyn ClientRepository>) -> Self {
        self.clients = clients;
        self
    }

    /// Replaces the product catalogue
    pub fn with_products(mut self, products: Arc<dyn ProductRepository>) -> Self {
        self.products = products;
        self
    }

    /// Replaces the clock used for `created_at`
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn decision_maker(&self) -> &DecisionMaker {
        &self.decision_maker
    }

    /// Decides for a registered client and catalogued product without booking
    ///
    /// # Errors
    ///
    /// `ClientNotFound` or `ProductNotFound` for unknown ids, plus the
    /// errors of `evaluate`
    pub async fn evaluate_for(
        &self,
        client_id: ClientId,
        product_id: ProductId,
        conditions: Option<LoanConditions>,
    ) -> Result<LoanDecision, LoanError> {
        let (client, product) = self.load(client_id, product_id).await?;
        self.evaluate(&client, &product, conditions)
    }

    /// Applies for a loan on behalf of a registered client
    ///
    /// # Errors
    ///
    /// `ClientNotFound` or `ProductNotFound` for unknown ids, plus the
    /// errors of `apply`
    #[instrument(skip(self, conditions))]
    pub async fn apply_for(
        &self,
        client_id: ClientId,
        product_id: ProductId,
        conditions: Option<LoanConditions>,
    ) -> Result<LoanApplicationOutcome, LoanError> {
        let (client, product) = self.load(client_id, product_id).await?;
        self.apply(&client, &product, conditions).await
    }

    async fn load(&self, client_id: ClientId, product_id: ProductId) -> Result<(Client, Product), LoanError> {
        let client = self
            .clients
            .find_by_id(client_id)
            .await
            .map_err(|error| missing_or(error, LoanError::ClientNotFound(client_id)))?;
        let product = self
            .products
            .find_by_id(product_id)
            .await
            .map_err(|error| missing_or(error, LoanError::ProductNotFound(product_id)))?;
        Ok((client, product))
    }

    /// Decides without booking
    pub fn evaluate(
        &self,
        client: &Client,
        product: &Product,
        conditions: Option<LoanConditions>,
    ) -> Result<LoanDecision, LoanError> {
        self.decision_maker.decide(client, product, conditions)
    }

    /// Applies for a loan
    ///
    /// Without requested conditions, the product's defaults are used.
    ///
    /// # Errors
    ///
    /// - `PrincipalExceedsCeiling` if the requested principal is above the
    ///   product ceiling
    /// - Engine configuration errors in strict mode
    /// - `Repository` if booking fails
    #[instrument(skip_all, fields(client_id = %client.id(), product = %product.code()))]
    pub async fn apply(
        &self,
        client: &Client,
        product: &Product,
        conditions: Option<LoanConditions>,
    ) -> Result<LoanApplicationOutcome, LoanError> {
        let conditions = conditions.unwrap_or_else(|| LoanConditions::from_product(product));
        if !product.allows_principal(conditions.principal()) {
            return Err(LoanError::PrincipalExceedsCeiling {
                requested: conditions.principal(),
                ceiling: product.max_principal(),
            });
        }

        let decision = self.decision_maker.decide(client, product, Some(conditions))?;

        let loan = match Loan::from_decision(&decision, self.clock.now()) {
            Some(loan) => {
                self.repository.save(&loan).await?;
                info!(loan_id = %loan.id(), "Loan booked");
                Some(loan)
            }
            None => None,
        };

        Ok(LoanApplicationOutcome { decision, loan })
    }

    /// Retrieves a booked loan
    ///
    /// # Errors
    ///
    /// `LoanNotFound` if no loan has the id
    pub async fn find_loan(&self, id: LoanId) -> Result<Loan, LoanError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|error| missing_or(error, LoanError::LoanNotFound(id)))
    }

    /// Lists a registered client's booked loans, oldest first
    ///
    /// # Errors
    ///
    /// `ClientNotFound` if the client is not registered
    pub async fn loans_for_client(&self, client_id: ClientId) -> Result<Vec<Loan>, LoanError> {
        self.clients
            .find_by_id(client_id)
            .await
            .map_err(|error| missing_or(error, LoanError::ClientNotFound(client_id)))?;
        Ok(self.repository.find_by_client(client_id).await?)
    }
}

/// Maps a repository not-found to `missing`, anything else to `Repository`
fn missing_or(error: PortError, missing: LoanError) -> LoanError {
    if error.is_not_found() {
        missing
    } else {
        LoanError::Repository(error)
    }
}
