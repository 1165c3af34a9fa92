use serde::{Deserialize, Serialize};

// ── Request payloads ─────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    /// Organization name from the signup form. Only logged; every mock user lands in `org_default`.
    pub organization_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

// ── Responses ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub organization_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,
}

/// Body returned by register and login. Token fields stay snake_case on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub message: &'static str,
    pub user: AuthUser,
    pub access_token: String,
    pub refresh_token: String,
    /// Token lifetime in seconds
    pub expires_in: u64,
    #[serde(rename = "isDemo", skip_serializing_if = "Option::is_none")]
    pub is_demo: Option<bool>,
}
