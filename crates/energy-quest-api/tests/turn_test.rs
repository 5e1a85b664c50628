//! Integration tests for the turn endpoints.

mod common;

use axum::http::StatusCode;
use energy_quest_core::config::Configuration;
use energy_quest_core::error::ProviderError;
use energy_quest_test_support::{ScriptedImageGenerator, ScriptedTextGenerator, narrative_json};

#[tokio::test]
async fn test_start_game_produces_illustrated_opening_scene() {
    let (app, orchestrator) = common::build_test_app(
        &common::configured(),
        ScriptedTextGenerator::new(vec![Ok(narrative_json(
            "You arrive at a village without power.",
            &["Inspect the solar panels", "Talk to the elder"],
        ))]),
        ScriptedImageGenerator::repeating("SlBFRw==", 1),
    );

    // POST /api/v1/turn/start
    let (status, json) = common::post_empty(app.clone(), "/api/v1/turn/start").await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(json["accepted"], true);
    assert_eq!(json["state"]["is_loading"], true);

    common::settled(&orchestrator).await;

    // GET /api/v1/turn: verify the rendered scene
    let (status, json) = common::get_json(app, "/api/v1/turn").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["phase"], "idle");
    assert_eq!(json["story_text"], "You arrive at a village without power.");
    assert_eq!(
        json["choices"],
        serde_json::json!(["Inspect the solar panels", "Talk to the elder"])
    );
    assert_eq!(json["image_ref"], "data:image/jpeg;base64,SlBFRw==");
    assert_eq!(json["game_started"], true);
    assert!(json["last_error"].is_null());
}

#[tokio::test]
async fn test_select_choice_continues_the_story() {
    let (app, orchestrator) = common::build_test_app(
        &common::configured(),
        ScriptedTextGenerator::new(vec![
            Ok(narrative_json("The turbines are still.", &["Repair them"])),
            Ok(narrative_json("The blades turn again.", &["Celebrate"])),
        ]),
        ScriptedImageGenerator::repeating("SlBFRw==", 2),
    );
    common::post_empty(app.clone(), "/api/v1/turn/start").await;
    common::settled(&orchestrator).await;

    // POST /api/v1/turn/choice
    let (status, json) = common::post_json(
        app.clone(),
        "/api/v1/turn/choice",
        &serde_json::json!({ "choice": "Repair them" }),
    )
    .await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(json["state"]["loading_message"], "The story unfolds...");

    let state = common::settled(&orchestrator).await;

    assert_eq!(state.story_text, "The blades turn again.");
    assert_eq!(state.choices, vec!["Celebrate".to_owned()]);
}

#[tokio::test]
async fn test_narrative_failure_is_reported_in_state() {
    let (app, orchestrator) = common::build_test_app(
        &common::configured(),
        ScriptedTextGenerator::new(vec![Err(ProviderError::Upstream(
            "Resource exhausted: quota".into(),
        ))]),
        ScriptedImageGenerator::new(vec![]),
    );

    common::post_empty(app.clone(), "/api/v1/turn/start").await;
    common::settled(&orchestrator).await;

    let (status, json) = common::get_json(app, "/api/v1/turn").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["last_error"],
        "Adventure Interrupted: API quota exceeded. Please check your Google AI Studio account."
    );
    assert_eq!(json["is_loading"], false);
    assert_eq!(json["game_started"], false);
}

#[tokio::test]
async fn test_missing_credential_reports_configuration_error() {
    let (app, _) = common::build_test_app(
        &Configuration::new(None),
        ScriptedTextGenerator::new(vec![]),
        ScriptedImageGenerator::new(vec![]),
    );

    let (status, json) = common::post_empty(app.clone(), "/api/v1/turn/start").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["accepted"], false);

    let (_, json) = common::get_json(app, "/api/v1/turn").await;

    assert_eq!(json["phase"], "configuration_error");
    assert_eq!(json["config_ok"], false);
    assert!(
        json["last_error"]
            .as_str()
            .unwrap()
            .starts_with("CRITICAL: API_KEY")
    );
}

#[tokio::test]
async fn test_second_start_while_game_in_progress_is_ignored() {
    let text = ScriptedTextGenerator::new(vec![Ok(narrative_json("A dim clinic.", &["Help"]))]);
    let (app, orchestrator) = common::build_test_app(
        &common::configured(),
        text,
        ScriptedImageGenerator::repeating("SlBFRw==", 1),
    );
    common::post_empty(app.clone(), "/api/v1/turn/start").await;
    common::settled(&orchestrator).await;

    let (status, json) = common::post_empty(app, "/api/v1/turn/start").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["accepted"], false);
    assert_eq!(json["state"]["story_text"], "A dim clinic.");
}

#[tokio::test]
async fn test_about_returns_title_and_portal_link() {
    let (app, _) = common::build_test_app(
        &common::configured(),
        ScriptedTextGenerator::new(vec![]),
        ScriptedImageGenerator::new(vec![]),
    );

    let (status, json) = common::get_json(app, "/api/v1/about").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "Energy Quest: An SDG7 Adventure");
    assert_eq!(
        json["learn_more"]["url"],
        "https://www.un.org/sustainabledevelopment/energy/"
    );
    assert_eq!(json["attribution"].as_array().unwrap().len(), 3);
}
