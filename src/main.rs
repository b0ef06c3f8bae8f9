use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use cafe_api::config;
use cafe_api::database::DatabaseManager;
use cafe_api::services::CafeService;
use cafe_api::types::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, CAFE_API_KEY, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // First access loads the config singleton; nothing mutates it afterwards
    let config = config::config();
    tracing::info!("Starting Cafe API in {:?} mode", config.environment);

    if config.uses_default_api_key() && cafe_api::is_production!() {
        tracing::warn!("CAFE_API_KEY is not set; the shipped default key is in use");
    }

    let pool = DatabaseManager::connect(&config.database)
        .await
        .context("failed to open cafe database")?;

    let cafes = Arc::new(CafeService::from_pool(pool.clone(), config.security.api_key.clone()));
    let app = cafe_api::app(AppState::new(cafes, pool.clone()), config);

    let bind_addr = format!("0.0.0.0:{}", config.api.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Cafe API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.context("server error")?;

    pool.close().await;
    Ok(())
}
