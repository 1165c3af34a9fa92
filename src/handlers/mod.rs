pub mod auth;
pub mod inventory;
pub mod products;
pub mod stores;

use std::any::Any;

use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde_json::json;

use crate::error::AppError;
use crate::models::to_iso_millis;

pub const SERVICE_NAME: &str = "ayr-api";

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "timestamp": to_iso_millis(&Utc::now()),
            "service": SERVICE_NAME,
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

/// JSON 404 for any route the router does not know.
pub async fn fallback(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "No route");
    AppError::NotFound("Route not found".to_string())
}

/// Turns a handler panic into the standard 500 body.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}
