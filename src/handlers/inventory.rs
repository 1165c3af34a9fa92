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
    models::InventoryFilters,
    AppState,
};

pub async fn list_inventory(
    State(state): State<AppState>,
    filters: Result<Query<InventoryFilters>, QueryRejection>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let Query(filters) = filters?;
    let inventory = state.catalog.list_inventory(&filters);

    info!(
        count = inventory.len(),
        location_id = ?filters.location_id,
        product_id = ?filters.product_id,
        "Listed inventory"
    );

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "inventory": inventory,
            "total": inventory.len(),
        })),
    ))
}

/// Unlike the query form, a location with no rows is a 404 here.
pub async fn list_location_inventory(
    State(state): State<AppState>,
    location_id: Result<Path<String>, PathRejection>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let Path(location_id) = location_id?;
    let inventory = state
        .catalog
        .inventory_for_location(&location_id)
        .ok_or_else(|| AppError::NotFound("No inventory found for this location".to_string()))?;

    info!(location_id = %location_id, count = inventory.len(), "Listed location inventory");

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "locationId": location_id,
            "inventory": inventory,
            "total": inventory.len(),
        })),
    ))
}
