//! Loan handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use core_kernel::LoanId;

use crate::dto::loan::{LoanApplicationResponse, LoanDecisionResponse, LoanRequest, LoanResponse};
use crate::handlers::parse_id;
use crate::{error::ApiError, AppState};

/// Decides a loan request without booking anything
pub async fn evaluate(
    State(state): State<AppState>,
    Json(request): Json<LoanRequest>,
) -> Result<Json<LoanDecisionResponse>, ApiError> {
    let (client_id, product_id, conditions) = request.into_domain()?;
    let decision = state.service.evaluate_for(client_id, product_id, conditions).await?;
    Ok(Json(LoanDecisionResponse::from(&decision)))
}

/// Applies for a loan; books it unless denied
///
/// Responds `201 Created` when a loan was booked, `200 OK` when denied.
pub async fn apply(
    State(state): State<AppState>,
    Json(request): Json<LoanRequest>,
) -> Result<(StatusCode, Json<LoanApplicationResponse>), ApiError> {
    let (client_id, product_id, conditions) = request.into_domain()?;
    let outcome = state.service.apply_for(client_id, product_id, conditions).await?;
    let status = if outcome.loan.is_some() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(LoanApplicationResponse::from(&outcome))))
}

/// Gets a booked loan by ID
///
/// Accepts a bare UUID or the prefixed `LOAN-<uuid>` form.
pub async fn get_loan(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LoanResponse>, ApiError> {
    let id: LoanId = parse_id(&id, "loan")?;
    let loan = state.service.find_loan(id).await?;
    Ok(Json(LoanResponse::from(&loan)))
}
