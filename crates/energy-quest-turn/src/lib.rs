//! Energy Quest: Turn Orchestrator.
//!
//! Owns the `TurnState` and sequences the narrative call and then the
//! illustration call for each turn. The state is an immutable value replaced
//! wholesale on every transition; the orchestrator is its only writer.

pub mod application;
pub mod domain;
