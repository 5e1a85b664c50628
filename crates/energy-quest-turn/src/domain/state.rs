//! The turn state value and its transition function.

use energy_quest_core::error::ConfigError;
use energy_quest_illustration::domain::image_ref::ImageRef;
use serde::Serialize;

use super::events::TurnEvent;

/// Progress message shown before any game has started.
pub const INITIALIZING_MESSAGE: &str = "Initializing Adventure...";

/// Progress message while the opening scene is generated.
pub const OPENING_MESSAGE: &str = "Crafting your initial adventure...";

/// Progress message while a continuation is generated.
pub const CONTINUATION_MESSAGE: &str = "The story unfolds...";

/// Progress message while the illustration is generated.
pub const ILLUSTRATING_MESSAGE: &str = "Visualizing the scene...";

/// Prefix attached to every turn failure shown to the player.
pub const INTERRUPTED_PREFIX: &str = "Adventure Interrupted: ";

/// Where the state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPhase {
    /// Configuration has not been checked yet.
    Uninitialized,
    /// No credential is configured. Terminal.
    ConfigurationError,
    /// Waiting for the player.
    Idle,
    /// The narrative call is in flight.
    Narrating,
    /// The illustration call is in flight.
    Illustrating,
}

/// Everything the presentation layer needs to render the current turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnState {
    /// Current state machine phase.
    pub phase: TurnPhase,
    /// Text of the latest scene.
    pub story_text: String,
    /// Illustration of the latest scene, once generated.
    pub image_ref: Option<ImageRef>,
    /// Choices offered by the latest scene (0–3).
    pub choices: Vec<String>,
    /// Whether a turn is in flight.
    pub is_loading: bool,
    /// Progress message for the in-flight step.
    pub loading_message: String,
    /// User-facing description of the most recent failure.
    pub last_error: Option<String>,
    /// Whether a credential was found at startup.
    pub config_ok: bool,
    /// Whether a scene has been produced for the current game.
    pub game_started: bool,
    /// Whether the first scene of the current game is still pending.
    pub is_initial_turn: bool,
}

impl TurnState {
    /// The state before configuration is checked.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            phase: TurnPhase::Uninitialized,
            story_text: String::new(),
            image_ref: None,
            choices: Vec::new(),
            is_loading: false,
            loading_message: INITIALIZING_MESSAGE.to_owned(),
            last_error: None,
            config_ok: false,
            game_started: false,
            is_initial_turn: true,
        }
    }

    /// Whether `startGame` would be admitted: idle, configured, and with no
    /// game in progress. A game whose last scene offered no choices has ended
    /// and counts as no game.
    #[must_use]
    pub fn can_start_game(&self) -> bool {
        self.is_idle() && (!self.game_started || self.choices.is_empty())
    }

    /// Whether `selectChoice` would be admitted.
    #[must_use]
    pub fn can_select_choice(&self) -> bool {
        self.is_idle() && !self.choices.is_empty()
    }

    fn is_idle(&self) -> bool {
        self.phase == TurnPhase::Idle && self.config_ok && !self.is_loading
    }

    /// Returns the state that follows `event`.
    ///
    /// The configuration-error state is terminal: every event leaves it
    /// unchanged.
    #[must_use]
    pub fn apply(self, event: &TurnEvent) -> Self {
        if self.phase == TurnPhase::ConfigurationError {
            return self;
        }

        match event {
            TurnEvent::ConfigurationChecked { ok: true } => Self {
                phase: TurnPhase::Idle,
                config_ok: true,
                is_initial_turn: false,
                ..self
            },
            TurnEvent::ConfigurationChecked { ok: false } => Self {
                phase: TurnPhase::ConfigurationError,
                config_ok: false,
                is_loading: false,
                is_initial_turn: false,
                last_error: Some(ConfigError::MissingApiKey.to_string()),
                ..self
            },
            TurnEvent::GameStarted => Self {
                story_text: String::new(),
                choices: Vec::new(),
                image_ref: None,
                game_started: false,
                is_initial_turn: true,
                ..self
            },
            TurnEvent::TurnBegan { opening } => Self {
                phase: TurnPhase::Narrating,
                is_loading: true,
                last_error: None,
                loading_message: if *opening {
                    OPENING_MESSAGE
                } else {
                    CONTINUATION_MESSAGE
                }
                .to_owned(),
                ..self
            },
            TurnEvent::NarrativeReceived { story, choices } => Self {
                phase: TurnPhase::Illustrating,
                story_text: story.clone(),
                choices: choices.clone(),
                image_ref: None,
                loading_message: ILLUSTRATING_MESSAGE.to_owned(),
                game_started: true,
                ..self
            },
            TurnEvent::IllustrationReceived { image } => Self {
                phase: TurnPhase::Idle,
                image_ref: Some(image.clone()),
                is_loading: false,
                game_started: true,
                is_initial_turn: false,
                ..self
            },
            TurnEvent::ResolvedWithoutImage => Self {
                phase: TurnPhase::Idle,
                is_loading: false,
                game_started: true,
                is_initial_turn: false,
                ..self
            },
            TurnEvent::TurnFailed { message } => Self {
                phase: TurnPhase::Idle,
                is_loading: false,
                is_initial_turn: false,
                last_error: Some(format!("{INTERRUPTED_PREFIX}{message}")),
                ..self
            },
        }
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::initial()
    }
}
