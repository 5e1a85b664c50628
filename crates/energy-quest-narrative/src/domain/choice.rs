//! The player's input to a turn.

use std::fmt;

/// What the player chose before the turn being generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerChoice {
    /// No prior choice: the turn is the opening scene.
    Opening,
    /// One of the choices offered by the previous scene.
    Action(String),
}

impl PlayerChoice {
    /// Text sent to the model in place of a choice on the opening turn.
    pub const SENTINEL: &'static str = "N/A";

    /// Whether this is the opening turn.
    #[must_use]
    pub fn is_opening(&self) -> bool {
        matches!(self, Self::Opening)
    }

    /// The choice as it appears in a prompt.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Opening => Self::SENTINEL,
            Self::Action(choice) => choice,
        }
    }
}

impl fmt::Display for PlayerChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
