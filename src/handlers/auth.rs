use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use chrono::Utc;
use tracing::info;

use crate::{
    auth,
    error::AppResult,
    models::{AuthResponse, LoginRequest, RegisterRequest},
};

// ── Register ──────────────────────────────────────────────────────────────────

pub async fn register(
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let Json(payload) = payload?;
    let credentials =
        auth::validate_credentials(payload.email.as_deref(), payload.password.as_deref())?;

    let session = auth::mock_session(
        "Registration successful",
        credentials.email,
        Utc::now().timestamp_millis(),
    );

    info!(
        user_id = %session.user.id,
        organization_name = payload.organization_name.as_deref().unwrap_or(""),
        "Registered mock user"
    );

    Ok((StatusCode::CREATED, Json(session)))
}

// ── Login ─────────────────────────────────────────────────────────────────────

pub async fn login(
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let Json(payload) = payload?;
    let credentials =
        auth::validate_credentials(payload.email.as_deref(), payload.password.as_deref())?;

    let session = auth::login(credentials, Utc::now().timestamp_millis());

    info!(
        user_id = %session.user.id,
        demo = session.is_demo.unwrap_or(false),
        "Logged in"
    );

    Ok((StatusCode::OK, Json(session)))
}
