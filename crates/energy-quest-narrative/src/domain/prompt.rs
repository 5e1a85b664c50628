//! Prompt construction.

use super::choice::PlayerChoice;

/// Fixed prompt requesting the opening scene.
pub const OPENING_PROMPT: &str = "Current situation: This is the beginning of the adventure. \
     Player chose: N/A. Generate the initial story and choices.";

/// Builds the user prompt for a turn.
///
/// The opening turn ignores `previous_story` and uses [`OPENING_PROMPT`];
/// later turns embed the previous scene and the chosen action.
#[must_use]
pub fn compose_prompt(previous_story: &str, choice: &PlayerChoice) -> String {
    match choice {
        PlayerChoice::Opening => OPENING_PROMPT.to_owned(),
        PlayerChoice::Action(action) => format!(
            "Current situation: {previous_story}\nPlayer chose: {action}\n\
             Generate the next part of the story and choices."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_prompt_ignores_previous_story() {
        let prompt = compose_prompt("leftover text", &PlayerChoice::Opening);

        assert_eq!(prompt, OPENING_PROMPT);
        assert!(!prompt.contains("leftover"));
    }

    #[test]
    fn test_continuation_prompt_embeds_story_and_choice() {
        let prompt = compose_prompt(
            "The village grid flickers.",
            &PlayerChoice::Action("Install solar panels".into()),
        );

        assert_eq!(
            prompt,
            "Current situation: The village grid flickers.\n\
             Player chose: Install solar panels\n\
             Generate the next part of the story and choices."
        );
    }
}
