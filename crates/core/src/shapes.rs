//! Shape catalog - rotation states for the seven piece kinds
//!
//! Each rotation state is a set of four cell indices inside a 4x4 bounding box,
//! numbered row-major: `index = row * 4 + col`.
//!
//! ```text
//!  0  1  2  3
//!  4  5  6  7
//!  8  9 10 11
//! 12 13 14 15
//! ```
//!
//! Rotating a piece walks these states in order and wraps around.

use crate::types::{PieceKind, SHAPE_BOX};

/// A rotation state: four occupied cell indices in the 4x4 box
pub type RotationState = [u8; 4];

const I_STATES: [RotationState; 2] = [[1, 5, 9, 13], [4, 5, 6, 7]];

const Z_STATES: [RotationState; 2] = [[1, 2, 5, 6], [0, 4, 5, 9]];

const S_STATES: [RotationState; 2] = [[6, 7, 9, 10], [1, 5, 6, 10]];

const L_STATES: [RotationState; 4] = [[1, 2, 5, 9], [0, 4, 5, 6], [1, 5, 9, 8], [4, 5, 6, 10]];

const J_STATES: [RotationState; 4] = [[1, 2, 6, 10], [5, 6, 7, 9], [2, 6, 10, 11], [3, 5, 6, 7]];

const T_STATES: [RotationState; 4] = [[1, 4, 5, 6], [1, 4, 5, 9], [4, 5, 6, 9], [1, 5, 6, 9]];

const O_STATES: [RotationState; 1] = [[1, 2, 5, 6]];

/// Ordered rotation states for a piece kind
pub fn rotations(kind: PieceKind) -> &'static [RotationState] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::Z => &Z_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::L => &L_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::O => &O_STATES,
    }
}

/// Number of distinct rotation states for a piece kind
pub fn rotation_count(kind: PieceKind) -> usize {
    rotations(kind).len()
}

/// Rotation state `rotation` of `kind`, wrapping out-of-range indices
pub fn state(kind: PieceKind, rotation: usize) -> &'static RotationState {
    let states = rotations(kind);
    &states[rotation % states.len()]
}

/// Split a box index into its `(row, col)` offset
#[inline(always)]
pub fn cell_offset(index: u8) -> (i32, i32) {
    let index = index as usize;
    ((index / SHAPE_BOX) as i32, (index % SHAPE_BOX) as i32)
}
