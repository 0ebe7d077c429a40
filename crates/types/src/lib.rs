//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behavior beyond parsing and formatting,
//! making them usable from the engine, the terminal view and the binaries.
//!
//! # Board Geometry
//!
//! The playfield is described in "board pixels" and divided into square cells.
//! A strip at the bottom of the board is reserved for the HUD, so it does not
//! contribute grid rows:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_WIDTH_PX` | 300 | Board width |
//! | `BOARD_HEIGHT_PX` | 500 | Board height, HUD included |
//! | `HUD_HEIGHT_PX` | 120 | Reserved HUD strip |
//! | `CELL_PX` | 20 | Side of one cell |
//! | `GRID_ROWS` | 19 | `(500 - 120) / 20` |
//! | `GRID_COLS` | 15 | `300 / 20` |
//!
//! # Timing
//!
//! The presentation loop runs at a fixed `FPS` (30). Gravity moves the active
//! piece down once every `FPS / (level + 1)` frames.
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{GameAction, PieceKind, GRID_COLS, GRID_ROWS};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//!
//! let action = GameAction::from_str("hardDrop").unwrap();
//! assert_eq!(action, GameAction::HardDrop);
//!
//! assert_eq!(GRID_ROWS, 19);
//! assert_eq!(GRID_COLS, 15);
//! ```

use serde::Serialize;

/// Board width in board pixels
pub const BOARD_WIDTH_PX: u32 = 300;

/// Board height in board pixels, HUD strip included
pub const BOARD_HEIGHT_PX: u32 = 500;

/// Height of the HUD strip below the playfield
pub const HUD_HEIGHT_PX: u32 = 120;

/// Side length of a single cell
pub const CELL_PX: u32 = 20;

/// Default number of grid rows
pub const GRID_ROWS: usize = ((BOARD_HEIGHT_PX - HUD_HEIGHT_PX) / CELL_PX) as usize;

/// Default number of grid columns
pub const GRID_COLS: usize = (BOARD_WIDTH_PX / CELL_PX) as usize;

/// Frames per second of the presentation loop
pub const FPS: u32 = 30;

/// Spawn column of a new piece's 4x4 bounding box
pub const SPAWN_X: i32 = 5;

/// Spawn row of a new piece's 4x4 bounding box
pub const SPAWN_Y: i32 = 0;

/// Number of distinct piece colors (colors are `1..=COLOR_COUNT`)
pub const COLOR_COUNT: u8 = 4;

/// Points awarded for every cleared row
pub const ROW_CLEAR_POINTS: u32 = 100;

/// The level goes up whenever the score lands on a multiple of this value
pub const LEVEL_SCORE_MODULUS: u32 = 10;

/// Topmost row that the line-clear scan looks at.
///
/// Row 0 is never cleared, even when it is full.
pub const FIRST_CLEARABLE_ROW: usize = 1;

/// Side of the square bounding box every rotation state lives in
pub const SHAPE_BOX: usize = 4;

/// Cells in one piece
pub const PIECE_CELLS: usize = 4;


/// A grid cell: `0` is empty, `1..=COLOR_COUNT` is a locked block color.
pub type Cell = u8;

/// Empty cell value
pub const EMPTY: Cell = 0;

/// The seven piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PieceKind {
    I,
    Z,
    S,
    L,
    J,
    T,
    O,
}

impl PieceKind {
    /// All kinds, in catalog order. A uniform index into this array picks a kind.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::L,
        PieceKind::J,
        PieceKind::T,
        PieceKind::O,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "z" => Some(PieceKind::Z),
            "s" => Some(PieceKind::S),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "t" => Some(PieceKind::T),
            "o" => Some(PieceKind::O),
            _ => None,
        }
    }

    /// Uppercase letter, as shown in the HUD
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::Z => "Z",
            PieceKind::S => "S",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::T => "T",
            PieceKind::O => "O",
        }
    }
}

/// Lifecycle of a game.
///
/// `Ended` is terminal until the game is restarted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Running,
    Ended,
}

/// Commands the presentation layer can issue against the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Shift the piece one column left
    MoveLeft,
    /// Shift the piece one column right
    MoveRight,
    /// Drop the piece one row, locking it if it cannot fall
    MoveDown,
    /// Advance to the next rotation state
    Rotate,
    /// Drop the piece as far as it goes and lock it
    HardDrop,
    /// Start over with a fresh grid
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "movedown" => Some(GameAction::MoveDown),
            "rotate" => Some(GameAction::Rotate),
            "harddrop" => Some(GameAction::HardDrop),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
            GameAction::Rotate => "rotate",
            GameAction::HardDrop => "hardDrop",
            GameAction::Restart => "restart",
        }
    }
}

/// Summary of a single lock, recorded by the engine for observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockEvent {
    /// Rows removed by the line clear that followed the lock
    pub rows_cleared: u32,
    /// Score gained by those rows
    pub score_gained: u32,
    /// Whether the spawn that followed the lock ended the game
    pub ended: bool,
}
