//! Energy Quest: Narrative Service Client.
//!
//! Composes the prompt for each turn, forwards the fixed system instruction,
//! and turns the model's (optionally fenced) JSON reply into a story and its
//! choices.

pub mod application;
pub mod domain;
