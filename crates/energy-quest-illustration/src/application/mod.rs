//! Illustration application services.

pub mod client;
