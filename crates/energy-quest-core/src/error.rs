//! Error types.
//!
//! Every failure a turn can hit is a `GenerationError`; its `Display` output is
//! the user-presentable message shown by the presentation layer. The one fatal
//! condition, a missing credential at startup, is a `ConfigError`.

use std::fmt;

use thiserror::Error;

/// Substring the provider uses when rejecting a credential.
pub const INVALID_KEY_MARKER: &str = "API key not valid";

/// Substring the provider uses when a usage quota has been exhausted.
pub const QUOTA_MARKER: &str = "quota";

/// The generative service a failure originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// Text generation for the story and choices.
    Narrative,
    /// Image generation for the scene illustration.
    Illustration,
}

impl Service {
    fn invalid_key_message(self) -> &'static str {
        match self {
            Self::Narrative => "Invalid API Key. Please check your API_KEY environment variable.",
            Self::Illustration => {
                "Invalid API Key for Imagen. Please check your API_KEY environment variable."
            }
        }
    }

    fn quota_message(self) -> &'static str {
        match self {
            Self::Narrative => "API quota exceeded. Please check your Google AI Studio account.",
            Self::Illustration => {
                "Imagen API quota exceeded. Please check your Google AI Studio account."
            }
        }
    }

    fn failure_prefix(self) -> &'static str {
        match self {
            Self::Narrative => "Failed to generate story",
            Self::Illustration => "Failed to generate image",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Narrative => f.write_str("narrative"),
            Self::Illustration => f.write_str("illustration"),
        }
    }
}

/// Raw failure reported by a generative provider adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The adapter has no credential to call the provider with.
    #[error("no API key configured")]
    MissingCredential,

    /// The provider (or the transport) failed; carries the upstream message verbatim.
    #[error("{0}")]
    Upstream(String),
}

/// A non-fatal failure of one generative step within a turn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// No credential is configured.
    #[error("API key not available. Cannot proceed.")]
    MissingCredential,

    /// The provider rejected the credential.
    #[error("{}", .service.invalid_key_message())]
    AuthError {
        /// Service that rejected the key.
        service: Service,
    },

    /// The provider reported an exhausted quota.
    #[error("{}", .service.quota_message())]
    QuotaExceeded {
        /// Service whose quota is exhausted.
        service: Service,
    },

    /// Any other provider or transport failure.
    #[error("{}: {message}", .service.failure_prefix())]
    UpstreamError {
        /// Service that failed.
        service: Service,
        /// Upstream message.
        message: String,
    },

    /// The narrative response could not be parsed into a story and choices.
    #[error("Failed to generate story: invalid response structure: {0}")]
    MalformedResponse(String),

    /// The illustration response contained no image.
    #[error("No image generated or invalid image data from Imagen API.")]
    NoImageProduced,
}

impl GenerationError {
    /// Classifies a provider failure by matching known substrings in the
    /// upstream message.
    #[must_use]
    pub fn from_provider(service: Service, err: ProviderError) -> Self {
        match err {
            ProviderError::MissingCredential => Self::MissingCredential,
            ProviderError::Upstream(message) => {
                if message.contains(INVALID_KEY_MARKER) {
                    Self::AuthError { service }
                } else if message.contains(QUOTA_MARKER) {
                    Self::QuotaExceeded { service }
                } else {
                    Self::UpstreamError { service, message }
                }
            }
        }
    }
}

/// Fatal configuration errors detected once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The API credential is absent (`ConfigurationMissing`).
    #[error(
        "CRITICAL: API_KEY is not configured. Please set the API_KEY environment variable. \
         The application cannot function without it."
    )]
    MissingApiKey,
}
