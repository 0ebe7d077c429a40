//! Game state module - the engine behind a single game
//!
//! Owns the grid, the active piece, the queued next piece, score, level and
//! lifecycle status. Commands are best-effort: a move or rotation that would
//! collide is simply not applied, and nothing is reported besides the `bool`
//! return value. Every command except [`GameState::restart`] is ignored once the
//! game has ended.
//!
//! There are no timers in here. Gravity is the caller invoking
//! [`GameState::move_down`] on its own cadence (see `scoring::is_gravity_frame`).

use log::{debug, info};

use crate::grid::Grid;
use crate::piece::Piece;
use crate::rng::{RandomSource, StdRandom};
use crate::scoring::award_row;
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = StdRandom> {
    grid: Grid,
    active: Piece,
    /// Queued piece, generated one spawn ahead for the preview.
    next: Piece,
    score: u32,
    level: u32,
    status: GameStatus,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    source: R,
}

impl<R: RandomSource> GameState<R> {
    /// Start a game on an empty `rows x cols` grid
    pub fn new(rows: usize, cols: usize, source: R) -> Self {
        Self::from_grid(Grid::new(rows, cols), source)
    }

    /// Start a game on a prepared grid.
    ///
    /// The first piece is spawn-checked like any other, so a grid that blocks
    /// the spawn area yields a game that has already ended.
    pub fn from_grid(grid: Grid, mut source: R) -> Self {
        let active = Piece::random(&mut source);
        let next = Piece::random(&mut source);
        let mut state = Self {
            grid,
            active,
            next,
            score: 0,
            level: 1,
            status: GameStatus::Running,
            last_event: None,
            source,
        };
        state.check_spawn();
        state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn next(&self) -> Piece {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn ended(&self) -> bool {
        self.status == GameStatus::Ended
    }

    pub fn source(&self) -> &R {
        &self.source
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Does the active piece collide where it currently is
    pub fn collision(&self) -> bool {
        self.active.collides(&self.grid)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.grid.rows();
        out.cols = self.grid.cols();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
        out.active = PieceSnapshot::from(self.active);
        out.next = PieceSnapshot::from(self.next);
        out.score = self.score;
        out.level = self.level;
        out.status = self.status;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Shift the active piece, keeping the old position on collision
    fn try_shift(&mut self, dx: i32, dy: i32) -> bool {
        if self.ended() {
            return false;
        }

        let mut moved = self.active;
        moved.x += dx;
        moved.y += dy;
        if moved.collides(&self.grid) {
            return false;
        }

        self.active = moved;
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(1, 0)
    }

    /// Drop one row. If the piece cannot fall it is locked instead.
    ///
    /// Returns true only when the piece actually moved.
    pub fn move_down(&mut self) -> bool {
        if self.ended() {
            return false;
        }
        if self.try_shift(0, 1) {
            return true;
        }
        self.lock_piece();
        false
    }

    /// Advance the rotation state. No wall kicks: a blocked rotation is rejected.
    pub fn rotate(&mut self) -> bool {
        if self.ended() {
            return false;
        }

        let mut rotated = self.active;
        rotated.rotate();
        if rotated.collides(&self.grid) {
            return false;
        }

        self.active = rotated;
        true
    }

    /// Drop the active piece as far as it goes and lock it
    pub fn hard_drop(&mut self) -> bool {
        if self.ended() {
            return false;
        }

        let mut dropped = self.active;
        while !dropped.collides(&self.grid) {
            dropped.y += 1;
        }
        dropped.y -= 1;
        self.active = dropped;

        self.lock_piece();
        true
    }

    /// Throw everything away and start over on an empty grid of the same size.
    ///
    /// The random source keeps its sequence going.
    pub fn restart(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.level = 1;
        self.status = GameStatus::Running;
        self.last_event = None;
        self.active = Piece::random(&mut self.source);
        self.next = Piece::random(&mut self.source);
        self.check_spawn();
        info!(
            "game restarted on a {}x{} grid",
            self.grid.rows(),
            self.grid.cols()
        );
    }

    /// Write the active piece into the grid, spawn the next one, then clear rows.
    ///
    /// The spawn check runs against the grid before any row is removed.
    /// Does nothing once the game has ended.
    pub fn lock_piece(&mut self) {
        if self.ended() {
            return;
        }

        let piece = self.active;
        let written = self.grid.lock_cells(piece.blocks(), piece.color);
        debug!(
            "locked {:?} at ({}, {}) rotation {}, {} cells in bounds",
            piece.kind, piece.x, piece.y, piece.rotation, written
        );

        self.spawn_piece();

        let score_before = self.score;
        let rows_cleared = self.clear_full_rows();

        self.last_event = Some(LockEvent {
            rows_cleared,
            score_gained: self.score - score_before,
            ended: self.ended(),
        });
    }

    /// Promote the queued piece and queue a fresh one
    fn spawn_piece(&mut self) {
        let queued = Piece::random(&mut self.source);
        self.active = std::mem::replace(&mut self.next, queued);
        self.check_spawn();
    }

    fn check_spawn(&mut self) {
        if self.collision() {
            self.status = GameStatus::Ended;
            info!(
                "spawned {:?} collides, game over with score {} at level {}",
                self.active.kind, self.score, self.level
            );
        }
    }

    /// Clear full rows until none is left. Returns the number of rows removed.
    fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        while let Some(row) = self.grid.lowest_full_row() {
            self.grid.clear_row(row);
            let award = award_row(self.score, self.level);
            self.score = award.score;
            self.level = award.level;
            cleared += 1;
            debug!(
                "cleared row {}, score {} level {}",
                row, self.score, self.level
            );
        }
        cleared
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::MoveDown => self.move_down(),
            GameAction::Rotate => self.rotate(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }
}

impl Default for GameState<StdRandom> {
    fn default() -> Self {
        Self::new(GRID_ROWS, GRID_COLS, StdRandom::from_entropy())
    }
}
