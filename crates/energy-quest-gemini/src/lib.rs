//! Gemini and Imagen REST adapter.
//!
//! Implements the core `TextGenerator` and `ImageGenerator` traits over the
//! Generative Language API. No retries and no timeouts are applied.

pub mod client;
pub mod types;

pub use client::{DEFAULT_BASE_URL, GeminiClient};
