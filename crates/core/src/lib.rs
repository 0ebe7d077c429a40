//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state management. It has no
//! dependency on rendering, input or timing, which makes it:
//!
//! - **Deterministic**: a seeded or scripted random source replays identical games
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: the terminal front-end is one consumer among others
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven piece kinds and their rotation states in a 4x4 box
//! - [`piece`]: a live piece (kind, position, color, rotation) and its collision test
//! - [`grid`]: the locked-cell matrix with row clearing
//! - [`scoring`]: points per row, level progression, gravity cadence
//! - [`rng`]: injectable random sources for piece kinds and colors
//! - [`game_state`]: the engine tying everything together
//! - [`snapshot`]: read-only copies of the state for renderers and observers
//!
//! # Game Rules
//!
//! - Pieces spawn with their 4x4 box at column 5, row 0
//! - Moves and rotations that would collide are rejected; there are no wall kicks
//! - A piece that cannot move down is locked, the next piece spawns, then full
//!   rows are cleared
//! - Every cleared row is worth 100 points and raises the level by one
//! - The game ends when a freshly spawned piece collides
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{GameState, ScriptedSource};
//! use tui_blockfall_types::{GameAction, PieceKind};
//!
//! let source = ScriptedSource::repeat(PieceKind::O);
//! let mut game = GameState::new(19, 15, source);
//!
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.score(), 0);
//! assert_eq!(game.level(), 1);
//! assert!(!game.ended());
//! ```

pub mod game_state;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameState;
pub use grid::Grid;
pub use piece::{Blocks, Piece};
pub use rng::{RandomSource, ScriptedSource, StdRandom};
pub use scoring::{award_row, frames_per_gravity_step, is_gravity_frame, RowAward};
pub use shapes::{rotation_count, rotations, RotationState};
pub use snapshot::{GameSnapshot, PieceSnapshot};
