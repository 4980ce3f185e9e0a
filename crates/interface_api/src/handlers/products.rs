//! Product handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use core_kernel::ProductId;

use crate::dto::product::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use crate::handlers::parse_id;
use crate::{error::ApiError, AppState};

/// Adds a product to the catalogue
pub async fn create_product(
    State(state): State<AppState>,
    Json(request): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    let product = request.into_domain()?;
    state.products.save(&product).await?;
    info!(product_id = %product.id(), code = %product.code(), "Product created");
    Ok((StatusCode::CREATED, Json(ProductResponse::from(&product))))
}

/// Lists the catalogue
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let products = state.products.find_all().await?;
    Ok(Json(products.iter().map(ProductResponse::from).collect()))
}

/// Gets a product by ID
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>, ApiError> {
    let id: ProductId = parse_id(&id, "product")?;
    let product = state.products.find_by_id(id).await?;
    Ok(Json(ProductResponse::from(&product)))
}

/// Updates the given fields of a product
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, ApiError> {
    let id: ProductId = parse_id(&id, "product")?;
    let current = state.products.find_by_id(id).await?;
    let updated = request.apply_to(&current)?;
    state.products.save(&updated).await?;
    Ok(Json(ProductResponse::from(&updated)))
}

/// Removes a product from the catalogue
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: ProductId = parse_id(&id, "product")?;
    state.products.delete(id).await?;
    info!(product_id = %id, "Product removed");
    Ok(StatusCode::NO_CONTENT)
}
