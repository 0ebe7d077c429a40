//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Every key press
//! is one command; there is no auto-repeat handling beyond what the terminal
//! itself delivers.

pub mod map;

pub use tui_blockfall_types as types;

pub use map::{handle_key_event, should_quit};
