//! Shared application state.

use std::sync::Arc;

use energy_quest_turn::application::orchestrator::TurnOrchestrator;

/// Application state shared across all request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The single turn orchestrator for this process.
    pub orchestrator: Arc<TurnOrchestrator>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(orchestrator: Arc<TurnOrchestrator>) -> Self {
        Self { orchestrator }
    }
}
