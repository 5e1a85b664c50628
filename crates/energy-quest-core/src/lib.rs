//! Energy Quest Core: shared abstractions.
//!
//! This crate defines the error taxonomy, process-wide configuration, and the
//! generative provider traits that the service clients and the turn
//! orchestrator depend on. It contains no network code.

pub mod command;
pub mod config;
pub mod error;
pub mod provider;
