//! Energy Quest: Illustration Service Client.
//!
//! Turns a story excerpt into an image prompt, requests a single JPEG, and
//! exposes the result as a displayable data URI.

pub mod application;
pub mod domain;
