//! Energy Quest: HTTP presentation boundary.
//!
//! Exposes the turn state and the two player actions over JSON so any
//! front-end can render the story, illustration, choices, and banners.

pub mod error;
pub mod routes;
pub mod state;
