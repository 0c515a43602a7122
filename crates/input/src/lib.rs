//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. It holds
//! no state and knows nothing about the game core; the runner decides what
//! to do with each action.

pub mod map;

pub use well_tetris_types as types;

pub use map::{handle_key_event, should_quit};
