//! Turn state, its transitions, and the player commands that drive them.

pub mod commands;
pub mod events;
pub mod state;
