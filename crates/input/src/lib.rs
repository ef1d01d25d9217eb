//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. The mapping
//! is independent of any UI framework and of game state, so the shell decides
//! what to do with each action.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
