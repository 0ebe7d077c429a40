use serde::Serialize;

use crate::piece::Piece;
use crate::types::{Cell, GameStatus, PieceKind, SPAWN_X, SPAWN_Y};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub color: Cell,
    pub rotation: usize,
    pub x: i32,
    pub y: i32,
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            color: value.color,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

impl PieceSnapshot {
    /// Rebuild the piece this snapshot was taken from
    pub fn to_piece(self) -> Piece {
        Piece {
            kind: self.kind,
            x: self.x,
            y: self.y,
            color: self.color,
            rotation: self.rotation,
        }
    }
}

impl Default for PieceSnapshot {
    fn default() -> Self {
        Self {
            kind: PieceKind::I,
            color: 1,
            rotation: 0,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }
}

/// Read-only view of a game, suitable for rendering and serialization
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major grid cells
    pub cells: Vec<Cell>,
    pub active: PieceSnapshot,
    pub next: PieceSnapshot,
    pub score: u32,
    pub level: u32,
    pub status: GameStatus,
}

impl GameSnapshot {
    /// Cell at `(row, col)`, `None` out of bounds
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col).copied()
    }

    pub fn ended(&self) -> bool {
        self.status == GameStatus::Ended
    }
}
