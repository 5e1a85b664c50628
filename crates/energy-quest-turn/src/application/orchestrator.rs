//! The turn orchestrator.
//!
//! A turn is admitted synchronously (`begin_*`), which flips the state to
//! loading under the channel lock so at most one turn is ever in flight, and
//! then driven to completion by [`TurnOrchestrator::run`]. Triggers that are
//! not admitted are no-ops.

use std::sync::Arc;

use energy_quest_core::command::Command;
use energy_quest_core::config::Configuration;
use energy_quest_core::error::GenerationError;
use energy_quest_core::provider::{ImageGenerator, TextGenerator};
use energy_quest_illustration::application::client::IllustrationClient;
use energy_quest_narrative::application::client::NarrativeClient;
use energy_quest_narrative::domain::choice::PlayerChoice;
use tokio::sync::watch;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use crate::domain::commands::{SelectChoice, StartGame};
use crate::domain::events::TurnEvent;
use crate::domain::state::TurnState;

/// How a player action ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The action was not admitted (a turn was in flight, the action was not
    /// available, or configuration is missing). Nothing changed.
    Ignored,
    /// The turn ran to completion.
    Completed,
    /// The turn stopped at a failed step; the error is in `last_error`.
    Failed(GenerationError),
}

/// An admitted turn waiting to be run.
#[derive(Debug)]
#[must_use = "the state stays loading until the pending turn is run"]
pub struct PendingTurn {
    correlation_id: Uuid,
    previous_story: String,
    choice: PlayerChoice,
}

impl PendingTurn {
    /// Correlation ID of the command that admitted this turn.
    #[must_use]
    pub fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    /// The player's choice driving this turn.
    #[must_use]
    pub fn choice(&self) -> &PlayerChoice {
        &self.choice
    }
}

/// Sequences the narrative and illustration calls and owns the turn state.
#[derive(Debug)]
pub struct TurnOrchestrator {
    narrative: NarrativeClient,
    illustration: IllustrationClient,
    state: watch::Sender<TurnState>,
}

impl TurnOrchestrator {
    /// Creates the orchestrator and performs the startup configuration check.
    ///
    /// Without a credential the orchestrator enters the terminal
    /// configuration-error state and never calls either generator.
    #[must_use]
    pub fn new(
        config: &Configuration,
        text: Arc<dyn TextGenerator>,
        images: Arc<dyn ImageGenerator>,
    ) -> Self {
        let ok = config.has_api_key();
        if ok {
            info!(
                narrative_model = %config.narrative_model_id,
                image_model = %config.image_model_id,
                "configuration checked"
            );
        } else {
            error!("API_KEY is not configured; turns are disabled");
        }

        let initial = TurnState::initial().apply(&TurnEvent::ConfigurationChecked { ok });
        let (state, _) = watch::channel(initial);

        Self {
            narrative: NarrativeClient::new(config, text),
            illustration: IllustrationClient::new(config, images),
            state,
        }
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> TurnState {
        self.state.borrow().clone()
    }

    /// Returns a receiver notified on every state transition.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<TurnState> {
        self.state.subscribe()
    }

    /// Admits a new game if none is in progress and nothing is loading.
    pub fn begin_start_game(&self, command: &StartGame) -> Option<PendingTurn> {
        let admitted = self.state.send_if_modified(|state| {
            if !state.can_start_game() {
                return false;
            }
            let next = std::mem::take(state)
                .apply(&TurnEvent::GameStarted)
                .apply(&TurnEvent::TurnBegan { opening: true });
            *state = next;
            true
        });

        self.admit(command, admitted, String::new(), PlayerChoice::Opening)
    }

    /// Admits a continuation if choices are on offer and nothing is loading.
    /// The current story becomes the context for the next scene.
    pub fn begin_select_choice(&self, command: &SelectChoice) -> Option<PendingTurn> {
        let mut previous_story = String::new();
        let admitted = self.state.send_if_modified(|state| {
            if !state.can_select_choice() {
                return false;
            }
            previous_story.clone_from(&state.story_text);
            let next = std::mem::take(state).apply(&TurnEvent::TurnBegan { opening: false });
            *state = next;
            true
        });

        self.admit(
            command,
            admitted,
            previous_story,
            PlayerChoice::Action(command.choice.clone()),
        )
    }

    fn admit(
        &self,
        command: &impl Command,
        admitted: bool,
        previous_story: String,
        choice: PlayerChoice,
    ) -> Option<PendingTurn> {
        if !admitted {
            debug!(
                command_type = command.command_type(),
                correlation_id = %command.correlation_id(),
                phase = ?self.state.borrow().phase,
                "command ignored"
            );
            return None;
        }

        info!(
            command_type = command.command_type(),
            correlation_id = %command.correlation_id(),
            "turn admitted"
        );
        Some(PendingTurn {
            correlation_id: command.correlation_id(),
            previous_story,
            choice,
        })
    }

    /// Runs an admitted turn: the narrative call, then (for a non-empty
    /// story) the illustration call. Failures are recorded in the state and
    /// never propagate further.
    #[instrument(skip(self, turn), fields(correlation_id = %turn.correlation_id, choice = %turn.choice))]
    pub async fn run(&self, turn: PendingTurn) -> TurnOutcome {
        let narrative = match self
            .narrative
            .fetch_narrative_turn(&turn.previous_story, &turn.choice)
            .await
        {
            Ok(narrative) => narrative,
            Err(err) => return self.fail(err),
        };

        let story = narrative.story;
        self.transition(&TurnEvent::NarrativeReceived {
            story: story.clone(),
            choices: narrative.choices,
        });

        if story.is_empty() {
            warn!("narrative produced an empty story; skipping illustration");
            self.transition(&TurnEvent::ResolvedWithoutImage);
            return TurnOutcome::Completed;
        }

        match self.illustration.fetch_illustration(&story).await {
            Ok(image) => {
                self.transition(&TurnEvent::IllustrationReceived { image });
                info!("turn completed");
                TurnOutcome::Completed
            }
            Err(err) => self.fail(err),
        }
    }

    /// Starts a new game and runs its opening turn.
    pub async fn start_game(&self) -> TurnOutcome {
        match self.begin_start_game(&StartGame::new()) {
            Some(turn) => self.run(turn).await,
            None => TurnOutcome::Ignored,
        }
    }

    /// Selects `choice` and runs the resulting turn.
    pub async fn select_choice(&self, choice: impl Into<String>) -> TurnOutcome {
        match self.begin_select_choice(&SelectChoice::new(choice)) {
            Some(turn) => self.run(turn).await,
            None => TurnOutcome::Ignored,
        }
    }

    fn fail(&self, err: GenerationError) -> TurnOutcome {
        error!(error = %err, "turn interrupted");
        self.transition(&TurnEvent::TurnFailed {
            message: err.to_string(),
        });
        TurnOutcome::Failed(err)
    }

    fn transition(&self, event: &TurnEvent) {
        self.state.send_modify(|state| {
            let next = std::mem::take(state).apply(event);
            *state = next;
        });
    }
}
