//! Routes for the turn orchestrator.
//!
//! Player actions are admitted synchronously and the turn itself runs in a
//! background task, so the response can report the loading state while both
//! generative calls are still pending. Clients poll `GET /` to re-render.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use energy_quest_turn::application::orchestrator::PendingTurn;
use energy_quest_turn::domain::commands::{SelectChoice, StartGame};
use energy_quest_turn::domain::state::TurnState;
use serde::{Deserialize, Serialize};
use tracing::{Instrument, info, instrument};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /choice.
#[derive(Debug, Deserialize)]
pub struct SelectChoiceRequest {
    /// The chosen action, as offered by the current scene.
    pub choice: String,
}

/// Response body returned for a player action.
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    /// Whether the action started a turn. `false` means it was a no-op.
    pub accepted: bool,
    /// The state right after admission.
    pub state: TurnState,
}

/// GET /
async fn current_turn(State(state): State<AppState>) -> Json<TurnState> {
    Json(state.orchestrator.snapshot())
}

/// POST /start
#[instrument(skip(state))]
async fn start_game(State(state): State<AppState>) -> (StatusCode, Json<ActionResponse>) {
    let command = StartGame::new();

    info!(correlation_id = %command.correlation_id, "handling start_game command");

    let pending = state.orchestrator.begin_start_game(&command);
    dispatch(&state, pending)
}

/// POST /choice
#[instrument(skip(state, request))]
async fn select_choice(
    State(state): State<AppState>,
    Json(request): Json<SelectChoiceRequest>,
) -> Result<(StatusCode, Json<ActionResponse>), ApiError> {
    if request.choice.trim().is_empty() {
        return Err(ApiError::Validation("choice must not be blank".to_owned()));
    }

    let command = SelectChoice::new(request.choice);

    info!(correlation_id = %command.correlation_id, "handling select_choice command");

    let pending = state.orchestrator.begin_select_choice(&command);
    Ok(dispatch(&state, pending))
}

/// Spawns an admitted turn and reports the state observed at admission.
fn dispatch(state: &AppState, pending: Option<PendingTurn>) -> (StatusCode, Json<ActionResponse>) {
    let snapshot = state.orchestrator.snapshot();

    let Some(turn) = pending else {
        return (
            StatusCode::OK,
            Json(ActionResponse {
                accepted: false,
                state: snapshot,
            }),
        );
    };

    let orchestrator = state.orchestrator.clone();
    tokio::spawn(
        async move {
            orchestrator.run(turn).await;
        }
        .in_current_span(),
    );

    (
        StatusCode::ACCEPTED,
        Json(ActionResponse {
            accepted: true,
            state: snapshot,
        }),
    )
}

/// Returns the router for the turn orchestrator.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(current_turn))
        .route("/start", post(start_game))
        .route("/choice", post(select_choice))
}
