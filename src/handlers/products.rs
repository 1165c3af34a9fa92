use std::time::Instant;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    models::ProductFilters,
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(
    State(state): State<AppState>,
    filters: Result<Query<ProductFilters>, QueryRejection>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let Query(filters) = filters?;
    let start = Instant::now();
    let products = state.catalog.list_products(&filters);
    let elapsed = start.elapsed();

    info!(
        count = products.len(),
        elapsed_us = elapsed.as_micros() as u64,
        "Listed products"
    );

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "products": products,
            "total": products.len(),
            "filters": filters,
        })),
    ))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let Path(id) = id?;
    let product = state
        .catalog
        .find_product(&id)
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    info!(id = %id, "Fetched product");

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "product": product })),
    ))
}
