//! Session layer between a front-end and the core game.
//!
//! The core `GameState` has no notion of time. This crate adds the frame
//! cadence (gravity every `FPS / (level + 1)` frames), restart gating, session
//! statistics, and environment-driven configuration.

pub mod config;
pub mod session;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use config::SessionConfig;
pub use session::{Session, SessionStats};
