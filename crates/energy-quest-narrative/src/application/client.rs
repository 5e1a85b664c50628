//! The narrative service client.

use std::sync::Arc;

use energy_quest_core::config::Configuration;
use energy_quest_core::error::{GenerationError, Service};
use energy_quest_core::provider::{JSON_MIME_TYPE, TextGenerator, TextRequest};
use tracing::{debug, instrument, warn};

use crate::domain::choice::PlayerChoice;
use crate::domain::prompt::compose_prompt;
use crate::domain::response::{NarrativeTurnResult, parse_narrative_response};

/// Generates one story scene and its choices per call.
#[derive(Debug, Clone)]
pub struct NarrativeClient {
    generator: Arc<dyn TextGenerator>,
    model: String,
    system_instruction: String,
    has_credential: bool,
}

impl NarrativeClient {
    /// Creates a client backed by `generator`.
    #[must_use]
    pub fn new(config: &Configuration, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            model: config.narrative_model_id.clone(),
            system_instruction: config.system_instruction.clone(),
            has_credential: config.has_api_key(),
        }
    }

    /// Fetches the next scene.
    ///
    /// `previous_story` is ignored on the opening turn.
    ///
    /// # Errors
    ///
    /// Returns `MissingCredential` without calling the provider if no key is
    /// configured, a classified provider error if the call fails, or
    /// `MalformedResponse` if the reply is not a story with choices.
    #[instrument(skip(self, previous_story, choice), fields(model = %self.model, choice = %choice))]
    pub async fn fetch_narrative_turn(
        &self,
        previous_story: &str,
        choice: &PlayerChoice,
    ) -> Result<NarrativeTurnResult, GenerationError> {
        if !self.has_credential {
            return Err(GenerationError::MissingCredential);
        }

        let request = TextRequest {
            model: self.model.clone(),
            system_instruction: self.system_instruction.clone(),
            prompt: compose_prompt(previous_story, choice),
            response_mime_type: JSON_MIME_TYPE.to_owned(),
        };

        let raw = self.generator.generate_text(request).await.map_err(|e| {
            warn!(error = %e, "narrative generation failed");
            GenerationError::from_provider(Service::Narrative, e)
        })?;
        debug!(bytes = raw.len(), "narrative response received");

        parse_narrative_response(&raw).inspect_err(|e| {
            warn!(error = %e, "narrative response rejected");
        })
    }
}
