//! Loan application service tests

mod common;

use std::sync::Arc;

use rust_decimal_macros::dec;

use core_kernel::{ClientId, LoanId, PortError, ProductId};
use domain_client::{ClientRepository, InMemoryClientRepository};
use domain_loan::{
    Decision, DecisionMaker, EngineConfig, InMemoryLoanRepository, LoanApplicationService,
    LoanConditions, LoanError, LoanRepository, RuleCode,
};
use domain_product::{InMemoryProductRepository, InterestRate, ProductRepository, Term};
use test_utils::{assert_rate_eq, ClientFixtures, ProductFixtures, TemporalFixtures};

use common::constant_draws;

struct Harness {
    service: LoanApplicationService,
    loans: Arc<InMemoryLoanRepository>,
    clients: Arc<InMemoryClientRepository>,
    products: Arc<InMemoryProductRepository>,
}

fn create_harness(config: EngineConfig) -> Harness {
    let clock = Arc::new(TemporalFixtures::clock());
    let engine = DecisionMaker::from_config(&config)
        .with_clock(clock.clone())
        .with_random_source_factory(constant_draws(0.9));
    let loans = Arc::new(InMemoryLoanRepository::new());
    let clients = Arc::new(InMemoryClientRepository::new());
    let products = Arc::new(InMemoryProductRepository::new());
    let service = LoanApplicationService::new(Arc::new(engine), loans.clone())
        .with_clients(clients.clone())
        .with_products(products.clone())
        .with_clock(clock);
    Harness {
        service,
        loans,
        clients,
        products,
    }
}

fn create_service(config: EngineConfig) -> (LoanApplicationService, Arc<InMemoryLoanRepository>) {
    let harness = create_harness(config);
    (harness.service, harness.loans)
}

#[tokio::test]
async fn test_approved_application_books_loan() {
    let (service, repository) = create_service(EngineConfig::default());
    let client = ClientFixtures::californian();

    let outcome = service
        .apply(&client, &ProductFixtures::personal_loan(), None)
        .await
        .unwrap();

    assert!(outcome.is_approved());
    assert_eq!(outcome.decision.decision(), Decision::ApprovedWithChanges);

    let loan = outcome.loan.expect("loan booked");
    assert_eq!(loan.client_id(), client.id());
    assert_eq!(loan.conditions().principal(), dec!(10000));
    assert_rate_eq(loan.conditions().interest_rate(), dec!(16.49));
    assert_eq!(loan.created_at(), TemporalFixtures::now());
    assert_eq!(repository.len().await, 1);
}

#[tokio::test]
async fn test_default_conditions_come_from_product() {
    let (service, _) = create_service(EngineConfig::default());
    let product = ProductFixtures::personal_loan();

    let outcome = service
        .apply(&ClientFixtures::eligible(), &product, None)
        .await
        .unwrap();

    let conditions = outcome.decision.conditions().unwrap();
    assert_eq!(*conditions, LoanConditions::from_product(&product));
}

#[tokio::test]
async fn test_requested_conditions_are_used() {
    let (service, _) = create_service(EngineConfig::default());
    let requested = LoanConditions::new(
        dec!(2500),
        Term::from_months(6).unwrap(),
        InterestRate::new(dec!(4.25)).unwrap(),
    )
    .unwrap();

    let outcome = service
        .apply(&ClientFixtures::eligible(), &ProductFixtures::personal_loan(), Some(requested))
        .await
        .unwrap();

    assert_eq!(outcome.loan.unwrap().conditions(), &requested);
}

#[tokio::test]
async fn test_denied_application_books_nothing() {
    let (service, repository) = create_service(EngineConfig::default());

    let outcome = service
        .apply(&ClientFixtures::low_income(), &ProductFixtures::personal_loan(), None)
        .await
        .unwrap();

    assert!(!outcome.is_approved());
    assert_eq!(outcome.decision.denied_by(), Some(RuleCode::Income));
    assert!(outcome.loan.is_none());
    assert!(repository.is_empty().await);
}

#[tokio::test]
async fn test_principal_above_ceiling_rejected() {
    let (service, repository) = create_service(EngineConfig::default());
    let requested = LoanConditions::new(
        dec!(10000.01),
        Term::from_months(12).unwrap(),
        InterestRate::new(dec!(5)).unwrap(),
    )
    .unwrap();

    let result = service
        .apply(&ClientFixtures::eligible(), &ProductFixtures::personal_loan(), Some(requested))
        .await;

    assert!(matches!(result, Err(LoanError::PrincipalExceedsCeiling { .. })));
    assert!(repository.is_empty().await);
}

#[tokio::test]
async fn test_strict_engine_error_propagates() {
    let (service, _) = create_service(EngineConfig::strict());

    let result = service
        .apply(&ClientFixtures::eligible(), &ProductFixtures::auto_loan(), None)
        .await;

    assert!(matches!(result, Err(LoanError::UnmappedProduct(_))));
}

#[tokio::test]
async fn test_find_loan_roundtrip() {
    let (service, _) = create_service(EngineConfig::default());
    let outcome = service
        .apply(&ClientFixtures::eligible(), &ProductFixtures::personal_loan(), None)
        .await
        .unwrap();
    let booked = outcome.loan.unwrap();

    let found = service.find_loan(booked.id()).await.unwrap();
    assert_eq!(found, booked);
}

#[tokio::test]
async fn test_find_unknown_loan() {
    let (service, _) = create_service(EngineConfig::default());
    let missing = LoanId::new();

    let result = service.find_loan(missing).await;
    assert!(matches!(result, Err(LoanError::LoanNotFound(id)) if id == missing));
}

#[tokio::test]
async fn test_loans_for_client_lists_only_theirs() {
    let harness = create_harness(EngineConfig::default());
    let client = ClientFixtures::eligible();
    let other = ClientFixtures::new_yorker();
    let product = ProductFixtures::personal_loan();
    harness.clients.save(&client).await.unwrap();
    harness.clients.save(&other).await.unwrap();

    harness.service.apply(&client, &product, None).await.unwrap();
    harness.service.apply(&client, &product, None).await.unwrap();
    harness.service.apply(&other, &product, None).await.unwrap();

    let loans = harness.service.loans_for_client(client.id()).await.unwrap();
    assert_eq!(loans.len(), 2);
    assert!(loans.iter().all(|loan| loan.client_id() == client.id()));
}

#[tokio::test]
async fn test_loans_for_unregistered_client() {
    let harness = create_harness(EngineConfig::default());
    let missing = ClientId::new();

    let result = harness.service.loans_for_client(missing).await;

    assert!(matches!(result, Err(LoanError::ClientNotFound(id)) if id == missing));
}

mod by_id_tests {
    use super::*;

    #[tokio::test]
    async fn test_apply_for_loads_client_and_product() {
        let harness = create_harness(EngineConfig::default());
        let client = ClientFixtures::californian();
        let product = ProductFixtures::personal_loan();
        harness.clients.save(&client).await.unwrap();
        harness.products.save(&product).await.unwrap();

        let outcome = harness
            .service
            .apply_for(client.id(), product.id(), None)
            .await
            .unwrap();

        let loan = outcome.loan.expect("loan booked");
        assert_eq!(loan.client_id(), client.id());
        assert_eq!(loan.product_id(), product.id());
        assert_rate_eq(loan.conditions().interest_rate(), dec!(16.49));
        assert_eq!(harness.loans.len().await, 1);
    }

    #[tokio::test]
    async fn test_catalogued_terms_apply() {
        let harness = create_harness(EngineConfig::default());
        let client = ClientFixtures::eligible();
        let product = ProductFixtures::personal_loan();
        harness.clients.save(&client).await.unwrap();
        harness.products.save(&product).await.unwrap();
        let above_ceiling = LoanConditions::new(
            product.max_principal() + dec!(1),
            product.term(),
            product.interest_rate(),
        )
        .unwrap();

        let result = harness
            .service
            .apply_for(client.id(), product.id(), Some(above_ceiling))
            .await;

        assert!(matches!(result, Err(LoanError::PrincipalExceedsCeiling { .. })));
        assert!(harness.loans.is_empty().await);
    }

    #[tokio::test]
    async fn test_evaluate_for_books_nothing() {
        let harness = create_harness(EngineConfig::default());
        let client = ClientFixtures::texan();
        let product = ProductFixtures::personal_loan();
        harness.clients.save(&client).await.unwrap();
        harness.products.save(&product).await.unwrap();

        let decision = harness
            .service
            .evaluate_for(client.id(), product.id(), None)
            .await
            .unwrap();

        assert_eq!(decision.denied_by(), Some(RuleCode::StateExclusive));
        assert!(harness.loans.is_empty().await);
    }

    #[tokio::test]
    async fn test_unknown_client_is_not_found() {
        let harness = create_harness(EngineConfig::default());
        let product = ProductFixtures::personal_loan();
        harness.products.save(&product).await.unwrap();
        let missing = ClientId::new();

        let result = harness.service.apply_for(missing, product.id(), None).await;

        assert!(matches!(result, Err(LoanError::ClientNotFound(id)) if id == missing));
        assert!(harness.loans.is_empty().await);
    }

    #[tokio::test]
    async fn test_unknown_product_is_not_found() {
        let harness = create_harness(EngineConfig::default());
        let client = ClientFixtures::eligible();
        harness.clients.save(&client).await.unwrap();
        let missing = ProductId::new();

        let result = harness.service.apply_for(client.id(), missing, None).await;

        let error = result.unwrap_err();
        assert!(error.is_not_found());
        assert!(matches!(error, LoanError::ProductNotFound(id) if id == missing));
    }
}

mod repository_tests {
    use super::*;
    use chrono::Utc;
    use domain_loan::{Loan, LoanDecision};

    fn booked_loan() -> Loan {
        let product = ProductFixtures::personal_loan();
        let conditions = LoanConditions::from_product(&product);
        let decision = LoanDecision::new(ClientFixtures::eligible(), product, Some(conditions));
        Loan::from_decision(&decision, Utc::now()).unwrap()
    }

    #[tokio::test]
    async fn test_duplicate_save_conflicts() {
        let repository = InMemoryLoanRepository::new();
        let loan = booked_loan();

        repository.save(&loan).await.unwrap();
        let result = repository.save(&loan).await;

        assert!(matches!(result, Err(PortError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_missing_loan_is_not_found() {
        let repository = InMemoryLoanRepository::new();
        let error = repository.find_by_id(LoanId::new()).await.unwrap_err();
        assert!(error.is_not_found());
    }
}
