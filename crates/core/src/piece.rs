//! Piece module - a live instance of a shape on the grid

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::rng::RandomSource;
use crate::shapes::{self, RotationState};
use crate::types::{Cell, PieceKind, PIECE_CELLS, SPAWN_X, SPAWN_Y};

/// Absolute `(row, col)` positions of a piece's cells
pub type Blocks = ArrayVec<(i32, i32), PIECE_CELLS>;

/// The falling piece (or the queued one)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    /// Column of the 4x4 box's left edge
    pub x: i32,
    /// Row of the 4x4 box's top edge
    pub y: i32,
    pub color: Cell,
    /// Index into the kind's rotation states
    pub rotation: usize,
}

impl Piece {
    /// Create a piece at the spawn position in its first rotation state
    pub fn spawn(kind: PieceKind, color: Cell) -> Self {
        Self {
            kind,
            x: SPAWN_X,
            y: SPAWN_Y,
            color,
            rotation: 0,
        }
    }

    /// Draw a kind, then a color, from `source`
    pub fn random<R: RandomSource + ?Sized>(source: &mut R) -> Self {
        let kind = source.next_kind();
        let color = source.next_color();
        Self::spawn(kind, color)
    }

    /// Occupied box indices for the current rotation
    pub fn image(&self) -> &'static RotationState {
        shapes::state(self.kind, self.rotation)
    }

    /// Advance to the next rotation state, wrapping around
    pub fn rotate(&mut self) {
        self.rotation = (self.rotation + 1) % shapes::rotation_count(self.kind);
    }

    /// Absolute grid positions of the occupied cells
    pub fn blocks(&self) -> Blocks {
        self.image()
            .iter()
            .map(|&idx| {
                let (i, j) = shapes::cell_offset(idx);
                (self.y + i, self.x + j)
            })
            .collect()
    }

    /// Collision against the grid's floor, side walls and locked cells.
    ///
    /// Cells above row 0 only collide through the side walls.
    pub fn collides(&self, grid: &Grid) -> bool {
        let rows = grid.rows() as i32;
        let cols = grid.cols() as i32;
        self.blocks().iter().any(|&(row, col)| {
            row >= rows || col >= cols || col < 0 || (row >= 0 && grid.is_occupied(row, col))
        })
    }
}
