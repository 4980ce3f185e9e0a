//! HTTP API Layer
//!
//! This crate provides the REST API for the loan underwriting core using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for health, clients, products, and loans
//! - **Middleware**: Request IDs, tracing, request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Routes
//!
//! | Method | Path | Purpose |
//! |---|---|---|
//! | GET | `/health` | Liveness and engine mode |
//! | POST, GET | `/api/v1/clients` | Register or list clients |
//! | GET, PUT, DELETE | `/api/v1/clients/:id` | Read, update, or remove a client |
//! | GET | `/api/v1/clients/:id/loans` | A client's booked loans |
//! | POST, GET | `/api/v1/products` | Add or list products |
//! | GET, PUT, DELETE | `/api/v1/products/:id` | Read, update, or remove a product |
//! | POST | `/api/v1/loan-decisions` | Decide without booking |
//! | POST | `/api/v1/loans` | Apply for a loan |
//! | GET | `/api/v1/loans/:id` | Fetch a booked loan |
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(AppState::from_config(config));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_client::{ClientRepository, InMemoryClientRepository};
use domain_loan::{DecisionMaker, InMemoryLoanRepository, LoanApplicationService};
use domain_product::{InMemoryProductRepository, ProductRepository};

use crate::config::ApiConfig;
use crate::handlers::{clients, health, loans, products};
use crate::middleware::request_logging_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<LoanApplicationService>,
    pub clients: Arc<dyn ClientRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub config: ApiConfig,
}

impl AppState {
    /// Wires an engine to in-memory client, product, and loan stores
    ///
    /// The loan service reads clients and products from the same stores the
    /// CRUD handlers write to.
    pub fn with_engine(engine: DecisionMaker, config: ApiConfig) -> Self {
        let clients: Arc<dyn ClientRepository> = Arc::new(InMemoryClientRepository::new());
        let products: Arc<dyn ProductRepository> = Arc::new(InMemoryProductRepository::new());
        let service = LoanApplicationService::new(
            Arc::new(engine),
            Arc::new(InMemoryLoanRepository::new()),
        )
        .with_clients(clients.clone())
        .with_products(products.clone());
        Self {
            service: Arc::new(service),
            clients,
            products,
            config,
        }
    }

    /// Wires the production engine
    pub fn from_config(config: ApiConfig) -> Self {
        let engine = DecisionMaker::from_config(&config.engine_config());
        Self::with_engine(engine, config)
    }
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    let client_routes = Router::new()
        .route("/", post(clients::create_client).get(clients::list_clients))
        .route(
            "/:id",
            get(clients::get_client)
                .put(clients::update_client)
                .delete(clients::delete_client),
        )
        .route("/:id/loans", get(clients::list_client_loans));

    let product_routes = Router::new()
        .route("/", post(products::create_product).get(products::list_products))
        .route(
            "/:id",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        );

    let api_routes = Router::new()
        .nest("/clients", client_routes)
        .nest("/products", product_routes)
        .route("/loan-decisions", post(loans::evaluate))
        .route("/loans", post(loans::apply))
        .route("/loans/:id", get(loans::get_loan));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api_routes)
        .layer(axum_middleware::from_fn(request_logging_middleware))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
