//! Parsing of the narrative model's reply.

use energy_quest_core::error::GenerationError;
use serde::{Deserialize, Serialize};

/// Most choices a scene may offer.
pub const MAX_CHOICES: usize = 3;

const FENCE: &str = "```";

/// A parsed narrative turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeTurnResult {
    /// Scene text.
    pub story: String,
    /// Choices offered to the player, in order.
    pub choices: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawTurn {
    story: Option<String>,
    choices: Option<Vec<String>>,
}

/// Removes an optional markdown code fence (with optional language tag)
/// wrapping `raw`. Unfenced input is returned trimmed.
#[must_use]
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(inner) = trimmed
        .strip_prefix(FENCE)
        .and_then(|rest| rest.strip_suffix(FENCE))
    else {
        return trimmed;
    };

    let body = inner
        .trim_start_matches(|c: char| c.is_ascii_alphanumeric() || c == '_')
        .trim();
    if body.is_empty() { trimmed } else { body }
}

/// Parses a raw model reply into a [`NarrativeTurnResult`].
///
/// Both fields must be present. An empty `story` is accepted and left to the
/// orchestrator to resolve.
///
/// # Errors
///
/// Returns `GenerationError::MalformedResponse` if the text is not JSON of the
/// expected shape or either field is absent.
pub fn parse_narrative_response(raw: &str) -> Result<NarrativeTurnResult, GenerationError> {
    let json = strip_code_fence(raw);
    let parsed: RawTurn = serde_json::from_str(json)
        .map_err(|e| GenerationError::MalformedResponse(format!("invalid JSON: {e}")))?;

    let story = parsed
        .story
        .ok_or_else(|| GenerationError::MalformedResponse("missing `story`".to_owned()))?;
    let mut choices = parsed
        .choices
        .ok_or_else(|| GenerationError::MalformedResponse("missing `choices`".to_owned()))?;

    if choices.len() > MAX_CHOICES {
        tracing::warn!(
            received = choices.len(),
            "narrative response offered too many choices, keeping the first {MAX_CHOICES}"
        );
        choices.truncate(MAX_CHOICES);
    }

    Ok(NarrativeTurnResult { story, choices })
}
