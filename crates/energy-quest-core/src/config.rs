//! Process-wide configuration, read once at startup.

use std::fmt;

use crate::error::ConfigError;

/// Default model used for story text.
pub const DEFAULT_NARRATIVE_MODEL: &str = "gemini-2.5-flash-preview-04-17";

/// Default model used for scene illustrations.
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-3.0-generate-002";

/// Placeholder replaced by the story excerpt in [`IMAGE_PROMPT_TEMPLATE`].
pub const STORY_EXCERPT_PLACEHOLDER: &str = "{storyExcerpt}";

/// Fixed persona and output contract for the narrative model.
pub const SYSTEM_INSTRUCTION: &str = r#"You are a text adventure game master. Your stories revolve around the UN's Sustainable Development Goal 7: Affordable and Clean Energy. The player is an innovator or community member working to implement or benefit from clean energy solutions. Keep the tone engaging, educational, and hopeful, while also realistically portraying challenges. The story should naturally progress towards promoting affordable and clean energy.

The response MUST be a valid JSON object with the following structure:
{
  "story": "The narrative of the current scene, focusing on clean energy themes and challenges. Around 100-150 words.",
  "choices": ["Actionable choice 1 leading to a consequence (concise, max 15 words)", "Actionable choice 2 leading to a different consequence (concise, max 15 words)", "Actionable choice 3 (optional, concise, max 15 words)"]
}
Ensure choices are distinct and lead to meaningful progression in the SDG7 context. Focus on positive framing and solutions."#;

/// Template for the illustration prompt.
pub const IMAGE_PROMPT_TEMPLATE: &str = "A vibrant, hopeful digital illustration of a clean energy \
     adventure scene: {storyExcerpt}. Cinematic lighting, rich detail, optimistic atmosphere, no text.";

/// Configuration shared by both service clients.
#[derive(Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Provider credential. `None` puts the system into its terminal
    /// configuration-error state.
    pub api_key: Option<String>,
    /// Model id for story text.
    pub narrative_model_id: String,
    /// Model id for illustrations.
    pub image_model_id: String,
    /// Fixed system instruction sent with every narrative request.
    pub system_instruction: String,
    /// Illustration prompt template containing [`STORY_EXCERPT_PLACEHOLDER`].
    pub image_prompt_template: String,
}

impl Configuration {
    /// Builds a configuration with the given key and default models.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            narrative_model_id: DEFAULT_NARRATIVE_MODEL.to_owned(),
            image_model_id: DEFAULT_IMAGE_MODEL.to_owned(),
            system_instruction: SYSTEM_INSTRUCTION.to_owned(),
            image_prompt_template: IMAGE_PROMPT_TEMPLATE.to_owned(),
        }
    }

    /// Reads configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value. Blank values are treated as absent.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let mut config = Self::new(non_blank("API_KEY"));
        if let Some(model) = non_blank("NARRATIVE_MODEL") {
            config.narrative_model_id = model;
        }
        if let Some(model) = non_blank("IMAGE_MODEL") {
            config.image_model_id = model;
        }
        config
    }

    /// Returns the credential.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingApiKey` if no key is configured.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.api_key.as_deref().ok_or(ConfigError::MissingApiKey)
    }

    /// Whether a credential is present.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("narrative_model_id", &self.narrative_model_id)
            .field("image_model_id", &self.image_model_id)
            .finish_non_exhaustive()
    }
}
