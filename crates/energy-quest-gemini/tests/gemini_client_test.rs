//! Tests for `GeminiClient` against a local stand-in for the provider.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use energy_quest_core::error::ProviderError;
use energy_quest_core::provider::{ImageGenerator, ImageRequest, TextGenerator, TextRequest};
use energy_quest_gemini::GeminiClient;
use serde_json::{Value, json};

#[derive(Clone, Default)]
struct Recorded {
    calls: Arc<Mutex<Vec<(String, Option<String>, Value)>>>,
}

impl Recorded {
    fn calls(&self) -> Vec<(String, Option<String>, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

/// Starts a fake provider that answers every call with `status` and `reply`
/// and records `(model:method, api key header, body)`.
async fn fake_provider(status: StatusCode, reply: Value) -> (String, Recorded) {
    let recorded = Recorded::default();
    let handler_recorded = recorded.clone();

    let app = Router::new().route(
        "/v1beta/models/{call}",
        post(
            move |Path(call): Path<String>, headers: HeaderMap, Json(body): Json<Value>| {
                let recorded = handler_recorded.clone();
                let reply = reply.clone();
                async move {
                    let key = headers
                        .get("x-goog-api-key")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_owned);
                    recorded.calls.lock().unwrap().push((call, key, body));
                    (status, Json(reply))
                }
            },
        ),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/v1beta"), recorded)
}

fn text_request() -> TextRequest {
    TextRequest {
        model: "gemini-test".into(),
        system_instruction: "You are a game master.".into(),
        prompt: "Begin.".into(),
        response_mime_type: "application/json".into(),
    }
}

fn image_request() -> ImageRequest {
    ImageRequest {
        model: "imagen-test".into(),
        prompt: "A solar village".into(),
        number_of_images: 1,
        output_mime_type: "image/jpeg".into(),
    }
}

#[tokio::test]
async fn test_generate_text_posts_prompt_and_returns_candidate_text() {
    // Arrange
    let (base_url, recorded) = fake_provider(
        StatusCode::OK,
        json!({
            "candidates": [{ "content": { "role": "model", "parts": [{ "text": "{\"story\":\"s\",\"choices\":[]}" }] } }]
        }),
    )
    .await;
    let client = GeminiClient::new(Some("secret-key".into()), base_url);

    // Act
    let text = client.generate_text(text_request()).await.unwrap();

    // Assert
    assert_eq!(text, "{\"story\":\"s\",\"choices\":[]}");

    let calls = recorded.calls();
    assert_eq!(calls.len(), 1);
    let (call, key, body) = &calls[0];
    assert_eq!(call, "gemini-test:generateContent");
    assert_eq!(key.as_deref(), Some("secret-key"));
    assert_eq!(body["contents"][0]["role"], "user");
    assert_eq!(body["contents"][0]["parts"][0]["text"], "Begin.");
    assert_eq!(
        body["systemInstruction"]["parts"][0]["text"],
        "You are a game master."
    );
    assert_eq!(
        body["generationConfig"]["responseMimeType"],
        "application/json"
    );
}

#[tokio::test]
async fn test_generate_images_requests_one_jpeg() {
    // Arrange
    let (base_url, recorded) = fake_provider(
        StatusCode::OK,
        json!({ "predictions": [{ "bytesBase64Encoded": "SlBFRw==", "mimeType": "image/jpeg" }] }),
    )
    .await;
    let client = GeminiClient::new(Some("secret-key".into()), base_url);

    // Act
    let images = client.generate_images(image_request()).await.unwrap();

    // Assert
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].image_bytes.as_deref(), Some("SlBFRw=="));

    let calls = recorded.calls();
    let (call, _, body) = &calls[0];
    assert_eq!(call, "imagen-test:predict");
    assert_eq!(body["instances"][0]["prompt"], "A solar village");
    assert_eq!(body["parameters"]["sampleCount"], 1);
    assert_eq!(body["parameters"]["outputOptions"]["mimeType"], "image/jpeg");
}

#[tokio::test]
async fn test_filtered_images_yield_empty_list() {
    // Arrange
    let (base_url, _) = fake_provider(StatusCode::OK, json!({})).await;
    let client = GeminiClient::new(Some("k".into()), base_url);

    // Act
    let images = client.generate_images(image_request()).await.unwrap();

    // Assert
    assert!(images.is_empty());
}

#[tokio::test]
async fn test_error_status_surfaces_upstream_message() {
    // Arrange
    let (base_url, _) = fake_provider(
        StatusCode::TOO_MANY_REQUESTS,
        json!({ "error": { "code": 429, "message": "Resource has been exhausted (e.g. check quota).", "status": "RESOURCE_EXHAUSTED" } }),
    )
    .await;
    let client = GeminiClient::new(Some("k".into()), base_url);

    // Act
    let result = client.generate_text(text_request()).await;

    // Assert
    assert_eq!(
        result,
        Err(ProviderError::Upstream(
            "Resource has been exhausted (e.g. check quota).".into()
        ))
    );
}

#[tokio::test]
async fn test_blocked_prompt_is_an_upstream_error() {
    // Arrange
    let (base_url, _) = fake_provider(
        StatusCode::OK,
        json!({ "promptFeedback": { "blockReason": "SAFETY" } }),
    )
    .await;
    let client = GeminiClient::new(Some("k".into()), base_url);

    // Act
    let result = client.generate_text(text_request()).await;

    // Assert
    match result {
        Err(ProviderError::Upstream(message)) => assert!(message.contains("SAFETY")),
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_provider_is_an_upstream_error() {
    // Arrange
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = GeminiClient::new(Some("k".into()), format!("http://{addr}/v1beta"));

    // Act
    let result = client.generate_images(image_request()).await;

    // Assert
    assert!(matches!(result, Err(ProviderError::Upstream(m)) if m.starts_with("request failed")));
}
