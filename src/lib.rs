use std::sync::Arc;

use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowHeaders, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod seed;

use crate::catalog::Catalog;
use crate::config::Config;

/// Shared application state — cheap to clone. The catalog is immutable after
/// start-up so it needs no lock.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

pub fn build_router(state: AppState, config: &Config) -> Router {
    with_middleware(routes(), config).with_state(state)
}

/// Every API route plus the JSON 404 fallback, without middleware.
pub fn routes() -> Router<AppState> {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Auth (mock) ─────────────────────────────────────────────────────
        .route("/v1/auth/register", post(handlers::auth::register))
        .route("/v1/auth/login", post(handlers::auth::login))

        // ── Products ────────────────────────────────────────────────────────
        .route("/v1/products", get(handlers::products::list_products))
        .route("/v1/products/:id", get(handlers::products::get_product))

        // ── Inventory ───────────────────────────────────────────────────────
        .route("/v1/inventory", get(handlers::inventory::list_inventory))
        .route(
            "/v1/inventory/:location_id",
            get(handlers::inventory::list_location_inventory),
        )

        // ── Stores ──────────────────────────────────────────────────────────
        .route("/v1/stores", get(handlers::stores::list_stores))

        .fallback(handlers::fallback)
}

/// Panic catching, request tracing and CORS, outermost last.
pub fn with_middleware(router: Router<AppState>, config: &Config) -> Router<AppState> {
    router
        .layer(CatchPanicLayer::custom(handlers::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
}

fn cors_layer(config: &Config) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(
            // `AllowOrigin::list` panics on `*`; treat it as an origin that never matches.
            config.cors_origins.iter().filter(|o| o.as_bytes() != b"*").cloned(),
        ))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(AllowHeaders::mirror_request())
}
