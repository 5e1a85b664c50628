//! Pure illustration types and functions.

pub mod image_ref;
pub mod prompt;
