use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use matchmaker_api::config::Config;
use matchmaker_api::routes::create_router;
use matchmaker_api::services::suggestions::HttpSuggestionProvider;
use matchmaker_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "matchmaker_api=info,tower_http=info".into()),
        )
        .init();

    let provider = Arc::new(HttpSuggestionProvider::new(
        config.suggestion_api_url.clone(),
        config.suggestion_api_key.clone(),
    ));
    let state = AppState::new(provider);

    let origin: HeaderValue = config
        .allowed_origin
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid allowed_origin: {}", e))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(tower_http::cors::Any);

    let app = create_router(state).layer(cors);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
