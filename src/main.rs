use chrono::Utc;
use tracing::info;

use ayr_api::{build_router, config::Config, seed, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,ayr_api=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let state = AppState::new(seed::sample_catalog(Utc::now()));
    let app = build_router(state, &config);

    let addr = format!("{}:{}", config.host, config.port);
    info!(
        origins = ?config.cors_origins,
        "AYR API server listening on http://{}", addr
    );
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
