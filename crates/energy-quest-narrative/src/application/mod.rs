//! Narrative application services.

pub mod client;
