//! Turn application services.

pub mod orchestrator;
