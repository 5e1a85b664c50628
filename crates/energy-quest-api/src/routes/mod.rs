//! Route modules.

pub mod about;
pub mod health;
pub mod turn;
