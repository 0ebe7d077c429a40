//! Frame-driven session around a [`GameState`].
//!
//! The front-end calls [`Session::tick`] once per frame at `FPS`. Gravity moves
//! the active piece down on frames where `frame % frames_per_gravity_step == 0`;
//! the step is recomputed every frame because the level can change mid-game.
//! The frame counter starts at zero and keeps running across restarts.

use log::{debug, info};

use crate::core::{is_gravity_frame, GameSnapshot, GameState, RandomSource, StdRandom};
use crate::types::{GameAction, FPS};

/// Running totals across every game played in a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
    pub games: u32,
    pub pieces_locked: u64,
    pub rows_cleared: u64,
    pub best_score: u32,
}

#[derive(Debug, Clone)]
pub struct Session<R = StdRandom> {
    game: GameState<R>,
    frame: u64,
    stats: SessionStats,
}

impl<R: RandomSource> Session<R> {
    pub fn new(game: GameState<R>) -> Self {
        info!(
            "session started on a {}x{} grid at {} fps",
            game.rows(),
            game.cols(),
            FPS
        );
        Self {
            game,
            frame: 0,
            stats: SessionStats {
                games: 1,
                ..SessionStats::default()
            },
        }
    }

    pub fn game(&self) -> &GameState<R> {
        &self.game
    }

    /// Frames ticked so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn ended(&self) -> bool {
        self.game.ended()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.game.snapshot_into(out);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    /// Forward a player command.
    ///
    /// Restart is only honored once the game has ended.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        let applied = match action {
            GameAction::Restart if !self.game.ended() => false,
            GameAction::Restart => {
                self.game.restart();
                self.stats.games += 1;
                true
            }
            _ => self.game.apply_action(action),
        };
        self.observe();
        applied
    }

    /// Advance one frame. Returns true when gravity fired on this frame.
    pub fn tick(&mut self) -> bool {
        let fired = !self.game.ended() && is_gravity_frame(self.frame, FPS, self.game.level());
        if fired {
            self.game.move_down();
            self.observe();
        }
        self.frame = self.frame.wrapping_add(1);
        fired
    }

    fn observe(&mut self) {
        let Some(ev) = self.game.take_last_event() else {
            return;
        };

        self.stats.pieces_locked += 1;
        self.stats.rows_cleared += u64::from(ev.rows_cleared);
        self.stats.best_score = self.stats.best_score.max(self.game.score());

        if ev.rows_cleared > 0 {
            debug!(
                "frame {}: {} rows cleared (+{}), level {}",
                self.frame,
                ev.rows_cleared,
                ev.score_gained,
                self.game.level()
            );
        }
        if ev.ended {
            info!(
                "frame {}: game {} over, score {} level {}",
                self.frame,
                self.stats.games,
                self.game.score(),
                self.game.level()
            );
        }
    }
}
