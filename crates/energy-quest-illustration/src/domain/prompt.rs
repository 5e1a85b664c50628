//! Image prompt construction.

use energy_quest_core::config::STORY_EXCERPT_PLACEHOLDER;

/// Longest excerpt, in characters, embedded into an image prompt.
pub const MAX_EXCERPT_CHARS: usize = 150;

/// Returns at most the first [`MAX_EXCERPT_CHARS`] characters of `story`.
#[must_use]
pub fn truncate_excerpt(story: &str) -> &str {
    match story.char_indices().nth(MAX_EXCERPT_CHARS) {
        Some((byte_index, _)) => &story[..byte_index],
        None => story,
    }
}

/// Substitutes the truncated excerpt into `template`.
#[must_use]
pub fn build_image_prompt(template: &str, story: &str) -> String {
    template.replacen(STORY_EXCERPT_PLACEHOLDER, truncate_excerpt(story), 1)
}
