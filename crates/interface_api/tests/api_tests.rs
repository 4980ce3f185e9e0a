//! HTTP API tests
//!
//! The engine behind the test server is pinned to a fixed date and a fixed
//! draw so responses are deterministic.

use axum::http::StatusCode;
use axum_test::TestServer;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use uuid::Uuid;

use core_kernel::{RandomSource, SequenceSource};
use domain_loan::{Decision, DecisionMaker, RuleCode};
use domain_product::ProductCode;
use interface_api::config::ApiConfig;
use interface_api::dto::client::ClientResponse;
use interface_api::dto::loan::{LoanApplicationResponse, LoanDecisionResponse, LoanResponse};
use interface_api::dto::product::ProductResponse;
use interface_api::handlers::health::HealthResponse;
use interface_api::{create_router, AppState};
use test_utils::TemporalFixtures;

fn create_test_server(draw: f64) -> TestServer {
    let config = ApiConfig::default();
    let engine = DecisionMaker::from_config(&config.engine_config())
        .with_clock(std::sync::Arc::new(TemporalFixtures::clock()))
        .with_random_source_factory(move || {
            Box::new(SequenceSource::constant(draw)) as Box<dyn RandomSource>
        });
    TestServer::new(create_router(AppState::with_engine(engine, config))).unwrap()
}

fn client_body(state: &str) -> Value {
    json!({
        "first_name": "Dana",
        "last_name": "Kim",
        "date_of_birth": "1990-03-15",
        "credit_score": 720,
        "monthly_income": "5000",
        "state": state
    })
}

fn product_body(code: &str) -> Value {
    json!({
        "name": "Personal Loan",
        "code": code,
        "term_months": 12,
        "interest_rate": "5",
        "max_principal": "10000"
    })
}

async fn register_client(server: &TestServer, body: Value) -> Uuid {
    let response = server.post("/api/v1/clients").json(&body).await;
    response.assert_status(StatusCode::CREATED);
    response.json::<ClientResponse>().id
}

async fn create_product(server: &TestServer, code: &str) -> Uuid {
    let response = server.post("/api/v1/products").json(&product_body(code)).await;
    response.assert_status(StatusCode::CREATED);
    response.json::<ProductResponse>().id
}

/// Registers a client in `state` and a personal loan product
async fn loan_request(server: &TestServer, state: &str) -> Value {
    let client_id = register_client(server, client_body(state)).await;
    let product_id = create_product(server, "PERSONAL_LOAN").await;
    json!({ "client_id": client_id, "product_id": product_id })
}

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_permissive_engine() {
        let server = create_test_server(0.9);
        let response = server.get("/health").await;

        response.assert_status_ok();
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.strictness, domain_loan::Strictness::Permissive);
    }
}

mod client_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get_client() {
        let server = create_test_server(0.9);
        let id = register_client(&server, client_body("ca")).await;

        let response = server.get(&format!("/api/v1/clients/{}", id)).await;

        response.assert_status_ok();
        let client: ClientResponse = response.json();
        assert_eq!(client.first_name, "Dana");
        assert_eq!(client.state, domain_client::UsState::CA);
        assert_eq!(client.monthly_income, dec!(5000));
    }

    #[tokio::test]
    async fn test_invalid_client_is_unprocessable() {
        let server = create_test_server(0.9);
        let mut body = client_body("NV");
        body["credit_score"] = json!(900);

        let response = server.post("/api/v1/clients").json(&body).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert_eq!(body["details"][0], "credit_score: range");
    }

    #[tokio::test]
    async fn test_unsupported_state_is_unprocessable() {
        let server = create_test_server(0.9);

        let response = server.post("/api/v1/clients").json(&client_body("ZZ")).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_list_clients() {
        let server = create_test_server(0.9);
        register_client(&server, client_body("NV")).await;
        register_client(&server, client_body("NY")).await;

        let clients: Vec<ClientResponse> = server.get("/api/v1/clients").await.json();

        assert_eq!(clients.len(), 2);
    }

    #[tokio::test]
    async fn test_update_changes_only_given_fields() {
        let server = create_test_server(0.9);
        let id = register_client(&server, client_body("NV")).await;

        let response = server
            .put(&format!("/api/v1/clients/{}", id))
            .json(&json!({ "credit_score": 650 }))
            .await;

        response.assert_status_ok();
        let client: ClientResponse = response.json();
        assert_eq!(client.id, id);
        assert_eq!(client.credit_score, 650);
        assert_eq!(client.last_name, "Kim");
    }

    #[tokio::test]
    async fn test_delete_client() {
        let server = create_test_server(0.9);
        let id = register_client(&server, client_body("NV")).await;

        server
            .delete(&format!("/api/v1/clients/{}", id))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        server
            .get(&format!("/api/v1/clients/{}", id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_client_id_is_bad_request() {
        let server = create_test_server(0.9);
        server
            .get("/api/v1/clients/not-a-uuid")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}

mod product_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get_product() {
        let server = create_test_server(0.9);
        let id = create_product(&server, "PERSONAL_LOAN").await;

        let product: ProductResponse = server.get(&format!("/api/v1/products/{}", id)).await.json();

        assert_eq!(product.code, ProductCode::PersonalLoan);
        assert_eq!(product.term_months, 12);
        assert_eq!(product.max_principal, dec!(10000));
    }

    #[tokio::test]
    async fn test_rate_above_hundred_is_unprocessable() {
        let server = create_test_server(0.9);
        let mut body = product_body("PERSONAL_LOAN");
        body["interest_rate"] = json!("101");

        server
            .post("/api/v1/products")
            .json(&body)
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_update_and_delete_product() {
        let server = create_test_server(0.9);
        let id = create_product(&server, "PERSONAL_LOAN").await;

        let updated: ProductResponse = server
            .put(&format!("/api/v1/products/{}", id))
            .json(&json!({ "interest_rate": "7.5" }))
            .await
            .json();
        assert_eq!(updated.interest_rate, dec!(7.5));
        assert_eq!(updated.name, "Personal Loan");

        server
            .delete(&format!("/api/v1/products/{}", id))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        server
            .delete(&format!("/api/v1/products/{}", id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}

mod decision_tests {
    use super::*;

    #[tokio::test]
    async fn test_california_decision_raises_rate() {
        let server = create_test_server(0.9);
        let mut body = loan_request(&server, "CA").await;
        body["conditions"] = json!({
            "principal": "10000",
            "term_months": 12,
            "interest_rate": "5"
        });

        let response = server.post("/api/v1/loan-decisions").json(&body).await;

        response.assert_status_ok();
        let decision: LoanDecisionResponse = response.json();
        assert_eq!(decision.decision, Decision::ApprovedWithChanges);
        assert_eq!(decision.conditions.unwrap().interest_rate, dec!(16.49));
        assert_eq!(decision.applied_rules.len(), 6);
        assert!(!decision.rate_capped);
    }

    #[tokio::test]
    async fn test_texas_decision_denied() {
        let server = create_test_server(0.9);
        let body = loan_request(&server, "TX").await;

        let response = server.post("/api/v1/loan-decisions").json(&body).await;

        response.assert_status_ok();
        let decision: LoanDecisionResponse = response.json();
        assert_eq!(decision.decision, Decision::Denied);
        assert_eq!(decision.denied_by, Some(RuleCode::StateExclusive));
        assert!(decision.conditions.is_none());
    }

    #[tokio::test]
    async fn test_decision_uses_catalogued_product() {
        let server = create_test_server(0.9);
        let client_id = register_client(&server, client_body("NV")).await;
        let product_id = create_product(&server, "PERSONAL_LOAN").await;
        server
            .put(&format!("/api/v1/products/{}", product_id))
            .json(&json!({ "interest_rate": "8" }))
            .await
            .assert_status_ok();

        let decision: LoanDecisionResponse = server
            .post("/api/v1/loan-decisions")
            .json(&json!({ "client_id": client_id, "product_id": product_id }))
            .await
            .json();

        assert_eq!(decision.conditions.unwrap().interest_rate, dec!(8));
    }

    #[tokio::test]
    async fn test_unknown_client_is_not_found() {
        let server = create_test_server(0.9);
        let product_id = create_product(&server, "PERSONAL_LOAN").await;

        let response = server
            .post("/api/v1/loan-decisions")
            .json(&json!({ "client_id": Uuid::new_v4(), "product_id": product_id }))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_product_is_not_found() {
        let server = create_test_server(0.9);
        let client_id = register_client(&server, client_body("NV")).await;

        let response = server
            .post("/api/v1/loans")
            .json(&json!({ "client_id": client_id, "product_id": Uuid::new_v4() }))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}

mod loan_tests {
    use super::*;

    #[tokio::test]
    async fn test_apply_books_and_fetches_loan() {
        let server = create_test_server(0.9);
        let body = loan_request(&server, "NV").await;

        let response = server.post("/api/v1/loans").json(&body).await;
        response.assert_status(StatusCode::CREATED);
        let outcome: LoanApplicationResponse = response.json();
        assert_eq!(outcome.decision.decision, Decision::Approved);
        let loan = outcome.loan.unwrap();
        assert_eq!(loan.conditions.principal, dec!(10000));

        let fetched = server.get(&format!("/api/v1/loans/{}", loan.id)).await;
        fetched.assert_status_ok();
        let fetched: LoanResponse = fetched.json();
        assert_eq!(fetched.id, loan.id);
        assert_eq!(fetched.decision, Decision::Approved);
    }

    #[tokio::test]
    async fn test_client_loans_are_listed() {
        let server = create_test_server(0.9);
        let client_id = register_client(&server, client_body("NV")).await;
        let product_id = create_product(&server, "PERSONAL_LOAN").await;
        let body = json!({ "client_id": client_id, "product_id": product_id });
        server.post("/api/v1/loans").json(&body).await.assert_status(StatusCode::CREATED);
        server.post("/api/v1/loans").json(&body).await.assert_status(StatusCode::CREATED);

        let loans: Vec<LoanResponse> = server
            .get(&format!("/api/v1/clients/{}/loans", client_id))
            .await
            .json();

        assert_eq!(loans.len(), 2);
        assert!(loans.iter().all(|loan| loan.client_id == client_id));
        assert!(loans[0].created_at <= loans[1].created_at);
    }

    #[tokio::test]
    async fn test_loans_of_unknown_client_is_not_found() {
        let server = create_test_server(0.9);
        server
            .get(&format!("/api/v1/clients/{}/loans", Uuid::new_v4()))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_denied_application_books_nothing() {
        let server = create_test_server(0.1);
        let body = loan_request(&server, "NY").await;

        let response = server.post("/api/v1/loans").json(&body).await;

        response.assert_status_ok();
        let outcome: LoanApplicationResponse = response.json();
        assert_eq!(outcome.decision.denied_by, Some(RuleCode::StateNyRandom));
        assert!(outcome.loan.is_none());
    }

    #[tokio::test]
    async fn test_principal_above_ceiling_is_unprocessable() {
        let server = create_test_server(0.9);
        let mut body = loan_request(&server, "NV").await;
        body["conditions"] = json!({
            "principal": "20000",
            "term_months": 12,
            "interest_rate": "5"
        });

        let response = server.post("/api/v1/loans").json(&body).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_unknown_loan_is_not_found() {
        let server = create_test_server(0.9);
        let response = server
            .get(&format!("/api/v1/loans/{}", Uuid::new_v4()))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_loan_id_is_bad_request() {
        let server = create_test_server(0.9);
        let response = server.get("/api/v1/loans/not-a-uuid").await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
