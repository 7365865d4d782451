//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The engine
//! never sees a key code, only the action.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
