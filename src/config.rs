use anyhow::Context;
use axum::http::HeaderValue;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Origins allowed by the CORS layer (credentials are allowed for these).
    pub cors_origins: Vec<HeaderValue>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_origins: vec![HeaderValue::from_static("http://localhost:3000")],
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let cors_origins = match std::env::var("CORS_ORIGINS") {
            Ok(raw) => parse_origins(&raw)?,
            Err(_) => defaults.cors_origins,
        };

        Ok(Self {
            host: env_non_empty("HOST").unwrap_or(defaults.host),
            port: resolve_port(env_non_empty("PORT").as_deref(), defaults.port)?,
            cors_origins,
        })
    }
}

/// An empty variable counts as unset.
fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Blank or missing values fall back to `default`.
pub fn resolve_port(raw: Option<&str>, default: u16) -> anyhow::Result<u16> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => v.parse().context("PORT must be a valid number"),
        None => Ok(default),
    }
}

/// Split a comma-separated origin list. Blank entries are skipped and the
/// wildcard `*` is an error.
pub fn parse_origins(raw: &str) -> anyhow::Result<Vec<HeaderValue>> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            if origin == "*" {
                anyhow::bail!("CORS_ORIGINS must list explicit origins, `*` is not allowed");
            }
            HeaderValue::from_str(origin)
                .with_context(|| format!("CORS_ORIGINS entry {origin:?} is not a valid header value"))
        })
        .collect()
}
