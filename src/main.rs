use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use studio_site::config::AppConfig;
use studio_site::routes;
use studio_site::services::http::HttpApi;
use studio_site::services::Services;
use studio_site::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let api = HttpApi::new(
        &config.backend_url,
        Duration::from_secs(config.request_timeout_secs),
    )?;
    tracing::info!("using backend API at {}", config.backend_url);

    let addr = format!("0.0.0.0:{}", config.port);
    let state = Arc::new(AppState::new(config, Services::from_http(api)));
    let app = routes::build_router(state);

    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
