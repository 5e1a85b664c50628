//! Wire types for the Generative Language REST API.

use serde::{Deserialize, Serialize};

/// A text part of a message.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Part {
    /// Text content, absent for non-text parts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A role-tagged message.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Content {
    /// `user` or `model`; omitted for system instructions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Message parts.
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// A single-part message.
    #[must_use]
    pub fn text(role: Option<&str>, text: &str) -> Self {
        Self {
            role: role.map(str::to_owned),
            parts: vec![Part {
                text: Some(text.to_owned()),
            }],
        }
    }
}

/// Generation settings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Requested response MIME type.
    pub response_mime_type: String,
}

/// Body of `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns; always a single user message here.
    pub contents: Vec<Content>,
    /// Persona and output contract.
    pub system_instruction: Content,
    /// Generation settings.
    pub generation_config: GenerationConfig,
}

/// One generated candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// Generated message, absent when the candidate was blocked.
    #[serde(default)]
    pub content: Option<Content>,
}

/// Feedback about the prompt, present when it was blocked.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Reason the prompt was blocked.
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Response of `models/{model}:generateContent`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Generated candidates.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Prompt feedback.
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if it has any.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        (!text.is_empty()).then_some(text)
    }
}

/// One image prompt.
#[derive(Debug, Clone, Serialize)]
pub struct PredictInstance {
    /// Prompt text.
    pub prompt: String,
}

/// Image output options.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    /// Requested encoding.
    pub mime_type: String,
}

/// Image generation parameters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictParameters {
    /// Number of images.
    pub sample_count: u32,
    /// Output options.
    pub output_options: OutputOptions,
}

/// Body of `models/{model}:predict`.
#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest {
    /// Prompts; always one here.
    pub instances: Vec<PredictInstance>,
    /// Generation parameters.
    pub parameters: PredictParameters,
}

/// One generated image.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Base64-encoded image bytes.
    #[serde(default)]
    pub bytes_base64_encoded: Option<String>,
}

/// Response of `models/{model}:predict`.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictResponse {
    /// Generated images; absent when every image was filtered.
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

/// Error envelope returned with non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    /// Error details.
    pub error: ErrorDetail,
}

/// Error details.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    /// Human-readable message.
    pub message: String,
}
