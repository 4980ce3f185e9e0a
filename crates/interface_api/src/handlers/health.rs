//! Health check handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use domain_loan::Strictness;

use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub strictness: Strictness,
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        strictness: state.service.decision_maker().policy().strictness(),
    })
}
