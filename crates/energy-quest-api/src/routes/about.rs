//! Static title, welcome, and attribution content.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Title of the adventure.
pub const APP_TITLE: &str = "Energy Quest: An SDG7 Adventure";

/// Where players can learn more about SDG7.
pub const SDG7_PORTAL_URL: &str = "https://www.un.org/sustainabledevelopment/energy/";

/// An outbound link.
#[derive(Debug, Serialize)]
pub struct Link {
    /// Link text.
    pub label: &'static str,
    /// Target URL.
    pub url: &'static str,
}

/// Content for the title, start screen, and footer.
#[derive(Debug, Serialize)]
pub struct AboutResponse {
    /// Adventure title.
    pub title: &'static str,
    /// Start screen heading.
    pub welcome_heading: &'static str,
    /// Start screen text.
    pub welcome: &'static str,
    /// Footer paragraphs.
    pub attribution: Vec<&'static str>,
    /// Footer link.
    pub learn_more: Link,
    /// Credit for the generated content.
    pub credits: &'static str,
}

/// GET /
async fn about() -> Json<AboutResponse> {
    Json(AboutResponse {
        title: APP_TITLE,
        welcome_heading: "Welcome, Innovator!",
        welcome: "Embark on a journey to explore challenges and triumphs in achieving UN \
                  Sustainable Development Goal 7: Affordable and Clean Energy for all. \
                  Your choices will shape the story.",
        attribution: vec![
            "This interactive adventure aims to raise awareness about the United Nation's \
             Sustainable Development Goal 7: Affordable and Clean Energy.",
            "The UN strives to improve quality of life for everyone. Ensuring access to \
             affordable, reliable, sustainable, and modern energy for all by 2030 is a key \
             part of this global mission.",
            "Learn more about how innovators, funders, and communities are working together \
             to achieve SDG7:",
        ],
        learn_more: Link {
            label: "Explore SDG7 & Clean Energy",
            url: SDG7_PORTAL_URL,
        },
        credits: "Game narrative & imagery powered by Google Gemini & Imagen AI.",
    })
}

/// Returns the router for static content.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(about))
}
