//! Generative provider abstractions.
//!
//! The service clients build requests and interpret results; implementors of
//! these traits only move them over the wire.

use async_trait::async_trait;

use crate::error::ProviderError;

/// MIME type requested for structured narrative output.
pub const JSON_MIME_TYPE: &str = "application/json";

/// MIME type requested for illustrations.
pub const JPEG_MIME_TYPE: &str = "image/jpeg";

/// A single-turn text generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRequest {
    /// Model identifier.
    pub model: String,
    /// System instruction sent alongside the prompt.
    pub system_instruction: String,
    /// Prompt text, sent as one `user`-role message.
    pub prompt: String,
    /// Requested response MIME type.
    pub response_mime_type: String,
}

/// An image generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    /// Model identifier.
    pub model: String,
    /// Image prompt.
    pub prompt: String,
    /// Number of images to produce.
    pub number_of_images: u32,
    /// Requested output encoding.
    pub output_mime_type: String,
}

/// One image returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneratedImage {
    /// Base64-encoded image bytes, if the provider returned any.
    pub image_bytes: Option<String>,
}

/// Text generation backend.
#[async_trait]
pub trait TextGenerator: Send + Sync + std::fmt::Debug {
    /// Generates text for `request` and returns the raw response text.
    async fn generate_text(&self, request: TextRequest) -> Result<String, ProviderError>;
}

/// Image generation backend.
#[async_trait]
pub trait ImageGenerator: Send + Sync + std::fmt::Debug {
    /// Generates images for `request`.
    async fn generate_images(
        &self,
        request: ImageRequest,
    ) -> Result<Vec<GeneratedImage>, ProviderError>;
}
