//! Energy Quest API server entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use energy_quest_api::error::AppError;
use energy_quest_api::routes;
use energy_quest_api::state::AppState;
use energy_quest_core::config::Configuration;
use energy_quest_gemini::{DEFAULT_BASE_URL, GeminiClient};
use energy_quest_turn::application::orchestrator::TurnOrchestrator;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Energy Quest API server");

    // Read configuration from environment. A missing API_KEY is not fatal:
    // the server still starts and reports the configuration error to clients.
    let config = Configuration::from_env();
    let base_url =
        std::env::var("GEMINI_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?;

    tracing::debug!(?config, %base_url, "loaded configuration");

    // One client serves both the narrative and the illustration models.
    let gemini = Arc::new(GeminiClient::from_config(&config, base_url));
    let orchestrator = TurnOrchestrator::new(&config, gemini.clone(), gemini);

    // Build application state.
    let app_state = AppState::new(Arc::new(orchestrator));

    // Build router.
    // TODO: Replace CorsLayer::permissive() with the front-end origin once it is deployed.
    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/turn", routes::turn::router())
        .nest("/api/v1/about", routes::about::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server.
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
