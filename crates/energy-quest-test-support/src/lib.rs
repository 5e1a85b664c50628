//! Shared test mocks and utilities for Energy Quest.

mod image;
mod text;

pub use image::ScriptedImageGenerator;
pub use text::ScriptedTextGenerator;

/// A well-formed narrative reply with the given story and choices.
#[must_use]
pub fn narrative_json(story: &str, choices: &[&str]) -> String {
    serde_json::json!({ "story": story, "choices": choices }).to_string()
}
