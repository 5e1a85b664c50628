//! Player commands.

use energy_quest_core::command::Command;
use uuid::Uuid;

/// Command to begin a new game from the opening scene.
#[derive(Debug, Clone)]
pub struct StartGame {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl StartGame {
    /// Creates the command with a fresh correlation ID.
    #[must_use]
    pub fn new() -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
        }
    }
}

impl Default for StartGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for StartGame {
    fn command_type(&self) -> &'static str {
        "turn.start_game"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to continue the story with one of the offered choices.
#[derive(Debug, Clone)]
pub struct SelectChoice {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The chosen action.
    pub choice: String,
}

impl SelectChoice {
    /// Creates the command with a fresh correlation ID.
    #[must_use]
    pub fn new(choice: impl Into<String>) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            choice: choice.into(),
        }
    }
}

impl Command for SelectChoice {
    fn command_type(&self) -> &'static str {
        "turn.select_choice"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
