//! The illustration service client.

use std::sync::Arc;

use energy_quest_core::config::Configuration;
use energy_quest_core::error::{GenerationError, Service};
use energy_quest_core::provider::{ImageGenerator, ImageRequest, JPEG_MIME_TYPE};
use tracing::{debug, instrument, warn};

use crate::domain::image_ref::ImageRef;
use crate::domain::prompt::build_image_prompt;

/// Generates one illustration per call.
#[derive(Debug, Clone)]
pub struct IllustrationClient {
    generator: Arc<dyn ImageGenerator>,
    model: String,
    prompt_template: String,
    has_credential: bool,
}

impl IllustrationClient {
    /// Creates a client backed by `generator`.
    #[must_use]
    pub fn new(config: &Configuration, generator: Arc<dyn ImageGenerator>) -> Self {
        Self {
            generator,
            model: config.image_model_id.clone(),
            prompt_template: config.image_prompt_template.clone(),
            has_credential: config.has_api_key(),
        }
    }

    /// Fetches an illustration for `story_excerpt`, truncated to its first
    /// 150 characters.
    ///
    /// # Errors
    ///
    /// Returns `MissingCredential` without calling the provider if no key is
    /// configured, a classified provider error if the call fails, or
    /// `NoImageProduced` if the reply carries no image bytes.
    #[instrument(skip(self, story_excerpt), fields(model = %self.model))]
    pub async fn fetch_illustration(&self, story_excerpt: &str) -> Result<ImageRef, GenerationError> {
        if !self.has_credential {
            return Err(GenerationError::MissingCredential);
        }

        let request = ImageRequest {
            model: self.model.clone(),
            prompt: build_image_prompt(&self.prompt_template, story_excerpt),
            number_of_images: 1,
            output_mime_type: JPEG_MIME_TYPE.to_owned(),
        };

        let images = self.generator.generate_images(request).await.map_err(|e| {
            warn!(error = %e, "illustration generation failed");
            GenerationError::from_provider(Service::Illustration, e)
        })?;

        let payload = images
            .into_iter()
            .next()
            .and_then(|image| image.image_bytes)
            .filter(|bytes| !bytes.is_empty())
            .ok_or_else(|| {
                warn!("illustration response contained no image");
                GenerationError::NoImageProduced
            })?;
        debug!(bytes = payload.len(), "illustration received");

        Ok(ImageRef::from_jpeg_base64(&payload))
    }
}
