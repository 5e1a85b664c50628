//! Turn state transitions.

use energy_quest_illustration::domain::image_ref::ImageRef;

/// One transition of the turn state machine, applied by
/// [`TurnState::apply`](super::state::TurnState::apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnEvent {
    /// The startup credential check finished.
    ConfigurationChecked {
        /// Whether a credential is present.
        ok: bool,
    },
    /// A new game was requested; prior scene content is cleared.
    GameStarted,
    /// A turn was admitted and the narrative call is about to start.
    TurnBegan {
        /// Whether this is the opening turn.
        opening: bool,
    },
    /// The narrative call succeeded.
    NarrativeReceived {
        /// Scene text.
        story: String,
        /// Offered choices.
        choices: Vec<String>,
    },
    /// The illustration call succeeded; the turn is complete.
    IllustrationReceived {
        /// The scene illustration.
        image: ImageRef,
    },
    /// The narrative produced no story, so the turn ends without an image.
    ResolvedWithoutImage,
    /// Either call failed; carries the user-facing message.
    TurnFailed {
        /// Failure description.
        message: String,
    },
}
