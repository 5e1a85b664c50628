//! Pure narrative types and functions.

pub mod choice;
pub mod prompt;
pub mod response;
