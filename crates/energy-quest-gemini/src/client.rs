//! Gemini HTTP client implementation.

use std::fmt;
use std::sync::OnceLock;

use async_trait::async_trait;
use energy_quest_core::config::Configuration;
use energy_quest_core::error::ProviderError;
use energy_quest_core::provider::{
    GeneratedImage, ImageGenerator, ImageRequest, TextGenerator, TextRequest,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::types::{
    Content, ErrorEnvelope, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    OutputOptions, PredictInstance, PredictParameters, PredictRequest, PredictResponse,
};

/// Public Generative Language API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for the Gemini text and Imagen image endpoints.
///
/// The underlying HTTP client is built on first use and shared by every
/// later call.
pub struct GeminiClient {
    /// Credential sent with every request.
    api_key: Option<String>,

    /// Endpoint prefix, without a trailing slash.
    base_url: String,

    /// HTTP client
    http_client: OnceLock<reqwest::Client>,
}

impl GeminiClient {
    /// Create a client for `base_url`.
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            http_client: OnceLock::new(),
        }
    }

    /// Create a client using the credential from `config`.
    pub fn from_config(config: &Configuration, base_url: impl Into<String>) -> Self {
        Self::new(config.api_key.clone(), base_url)
    }

    fn http(&self) -> &reqwest::Client {
        self.http_client.get_or_init(|| {
            tracing::debug!(base_url = %self.base_url, "creating HTTP client");
            reqwest::Client::new()
        })
    }

    fn model_url(&self, model: &str, method: &str) -> String {
        format!("{}/models/{model}:{method}", self.base_url)
    }

    async fn post<B, R>(&self, url: &str, body: &B) -> Result<R, ProviderError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredential)?;

        tracing::debug!(%url, "sending provider request");

        let response = self
            .http()
            .post(url)
            .header(API_KEY_HEADER, api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| ProviderError::Upstream(format!("request failed: {e}")))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::Upstream(format!("failed to read response: {e}")))?;

        if !status.is_success() {
            tracing::warn!(%status, "provider returned an error status");
            return Err(ProviderError::Upstream(error_message(status, &response_text)));
        }

        serde_json::from_str(&response_text)
            .map_err(|e| ProviderError::Upstream(format!("unreadable response: {e}")))
    }
}

/// Extracts the upstream error message from an error body, falling back to
/// the status and raw body.
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => format!("HTTP {status}: {body}"),
    }
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate_text(&self, request: TextRequest) -> Result<String, ProviderError> {
        let url = self.model_url(&request.model, "generateContent");
        let body = GenerateContentRequest {
            contents: vec![Content::text(Some("user"), &request.prompt)],
            system_instruction: Content::text(None, &request.system_instruction),
            generation_config: GenerationConfig {
                response_mime_type: request.response_mime_type,
            },
        };

        let response: GenerateContentResponse = self.post(&url, &body).await?;

        response.text().ok_or_else(|| {
            let reason = response
                .prompt_feedback
                .and_then(|feedback| feedback.block_reason)
                .map_or_else(|| "no candidates".to_owned(), |r| format!("blocked: {r}"));
            ProviderError::Upstream(format!("response contained no text ({reason})"))
        })
    }
}

#[async_trait]
impl ImageGenerator for GeminiClient {
    async fn generate_images(
        &self,
        request: ImageRequest,
    ) -> Result<Vec<GeneratedImage>, ProviderError> {
        let url = self.model_url(&request.model, "predict");
        let body = PredictRequest {
            instances: vec![PredictInstance {
                prompt: request.prompt,
            }],
            parameters: PredictParameters {
                sample_count: request.number_of_images,
                output_options: OutputOptions {
                    mime_type: request.output_mime_type,
                },
            },
        };

        let response: PredictResponse = self.post(&url, &body).await?;

        Ok(response
            .predictions
            .into_iter()
            .map(|prediction| GeneratedImage {
                image_bytes: prediction.bytes_base64_encoded,
            })
            .collect())
    }
}
