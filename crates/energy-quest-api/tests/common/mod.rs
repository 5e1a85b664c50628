//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use energy_quest_core::config::Configuration;
use energy_quest_test_support::{ScriptedImageGenerator, ScriptedTextGenerator};
use energy_quest_turn::application::orchestrator::TurnOrchestrator;
use energy_quest_turn::domain::state::TurnState;
use http_body_util::BodyExt;
use tower::ServiceExt;

use energy_quest_api::routes;
use energy_quest_api::state::AppState;

/// Configuration with a credential and the default models.
pub fn configured() -> Configuration {
    Configuration::new(Some("test-api-key".to_string()))
}

/// Build the full app router over scripted generators. Uses the same route
/// structure as `main.rs`. The orchestrator is returned so tests can wait for
/// background turns to settle.
pub fn build_test_app(
    config: &Configuration,
    text: ScriptedTextGenerator,
    images: ScriptedImageGenerator,
) -> (Router, Arc<TurnOrchestrator>) {
    let orchestrator = Arc::new(TurnOrchestrator::new(
        config,
        Arc::new(text),
        Arc::new(images),
    ));
    let app_state = AppState::new(orchestrator.clone());

    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/turn", routes::turn::router())
        .nest("/api/v1/about", routes::about::router())
        .with_state(app_state);

    (app, orchestrator)
}

/// Wait until no turn is in flight and return the settled state.
pub async fn settled(orchestrator: &TurnOrchestrator) -> TurnState {
    let mut receiver = orchestrator.subscribe();
    let state = receiver.wait_for(|s| !s.is_loading).await.unwrap();
    state.clone()
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    send(app, request).await
}

/// Send a POST request without a body and return the response.
pub async fn post_empty(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
