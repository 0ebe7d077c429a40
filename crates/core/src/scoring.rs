//! Scoring module - points, level progression and gravity cadence
//!
//! Every cleared row is worth a flat `ROW_CLEAR_POINTS`. After each row the level
//! goes up by one if the score is a multiple of `LEVEL_SCORE_MODULUS`; with 100
//! points per row that is every row.

use crate::types::{LEVEL_SCORE_MODULUS, ROW_CLEAR_POINTS};

/// Score and level after a single cleared row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowAward {
    pub score: u32,
    pub level: u32,
}

/// Apply one cleared row to `(score, level)`
pub fn award_row(score: u32, level: u32) -> RowAward {
    let score = score.saturating_add(ROW_CLEAR_POINTS);
    let level = if score % LEVEL_SCORE_MODULUS == 0 {
        level.saturating_add(1)
    } else {
        level
    };
    RowAward { score, level }
}

/// Frames between two gravity steps at `level`.
///
/// `fps / (level + 1)` with integer division, never below one frame.
pub fn frames_per_gravity_step(fps: u32, level: u32) -> u32 {
    (fps / level.saturating_add(1)).max(1)
}

/// Whether gravity fires on `frame` at `level`
pub fn is_gravity_frame(frame: u64, fps: u32, level: u32) -> bool {
    frame % u64::from(frames_per_gravity_step(fps, level)) == 0
}
