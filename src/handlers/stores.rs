use axum::{extract::State, http::StatusCode, Json};

use crate::{error::AppResult, AppState};

pub async fn list_stores(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let stores = state.catalog.stores();

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "stores": stores,
            "total": stores.len(),
        })),
    ))
}
