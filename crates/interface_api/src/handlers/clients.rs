//! Client handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use core_kernel::ClientId;

use crate::dto::client::{ClientResponse, CreateClientRequest, UpdateClientRequest};
use crate::dto::loan::LoanResponse;
use crate::handlers::parse_id;
use crate::{error::ApiError, AppState};

/// Registers a client
pub async fn create_client(
    State(state): State<AppState>,
    Json(request): Json<CreateClientRequest>,
) -> Result<(StatusCode, Json<ClientResponse>), ApiError> {
    let client = request.into_domain()?;
    state.clients.save(&client).await?;
    info!(client_id = %client.id(), "Client registered");
    Ok((StatusCode::CREATED, Json(ClientResponse::from(&client))))
}

/// Lists clients
pub async fn list_clients(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClientResponse>>, ApiError> {
    let clients = state.clients.find_all().await?;
    Ok(Json(clients.iter().map(ClientResponse::from).collect()))
}

/// Gets a client by ID
pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ClientResponse>, ApiError> {
    let id: ClientId = parse_id(&id, "client")?;
    let client = state.clients.find_by_id(id).await?;
    Ok(Json(ClientResponse::from(&client)))
}

/// Updates the given fields of a client
pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateClientRequest>,
) -> Result<Json<ClientResponse>, ApiError> {
    let id: ClientId = parse_id(&id, "client")?;
    let current = state.clients.find_by_id(id).await?;
    let updated = request.apply_to(&current)?;
    state.clients.save(&updated).await?;
    Ok(Json(ClientResponse::from(&updated)))
}

/// Removes a client
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: ClientId = parse_id(&id, "client")?;
    state.clients.delete(id).await?;
    info!(client_id = %id, "Client removed");
    Ok(StatusCode::NO_CONTENT)
}

/// Lists a client's booked loans, oldest first
pub async fn list_client_loans(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<LoanResponse>>, ApiError> {
    let id: ClientId = parse_id(&id, "client")?;
    let loans = state.service.loans_for_client(id).await?;
    Ok(Json(loans.iter().map(LoanResponse::from).collect()))
}
