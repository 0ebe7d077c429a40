//! Headless runs: a seeded session driven by a fixed command script.
//!
//! Used by the `headless` binary to produce a reproducible final snapshot
//! without a terminal.

use anyhow::{anyhow, Result};

use crate::core::GameSnapshot;
use crate::engine::{Session, SessionConfig, SessionStats};
use crate::types::GameAction;

/// Frames between two scripted commands
pub const ACTION_INTERVAL: u64 = 4;

const SCRIPT: [GameAction; 12] = [
    GameAction::Rotate,
    GameAction::MoveLeft,
    GameAction::MoveLeft,
    GameAction::MoveRight,
    GameAction::HardDrop,
    GameAction::MoveRight,
    GameAction::MoveRight,
    GameAction::MoveRight,
    GameAction::HardDrop,
    GameAction::MoveLeft,
    GameAction::MoveDown,
    GameAction::HardDrop,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessConfig {
    pub seed: u64,
    pub frames: u64,
    pub rows: usize,
    pub cols: usize,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        let session = SessionConfig::default();
        Self {
            seed: 0,
            frames: 3000,
            rows: session.rows,
            cols: session.cols,
        }
    }
}

impl HeadlessConfig {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            rows: self.rows,
            cols: self.cols,
            seed: Some(self.seed),
            log_path: None,
        }
    }
}

/// Parse `--seed N --frames N --rows N --cols N`, all optional.
pub fn parse_headless_args(args: &[String]) -> Result<HeadlessConfig> {
    let mut cfg = HeadlessConfig::default();
    let mut it = args.iter();
    while let Some(flag) = it.next() {
        let mut value = || {
            it.next()
                .ok_or_else(|| anyhow!("headless: missing value for {}", flag))
        };
        match flag.as_str() {
            "--seed" => cfg.seed = parse_number(flag, value()?)?,
            "--frames" => cfg.frames = parse_number(flag, value()?)?,
            "--rows" => cfg.rows = parse_number(flag, value()?)?,
            "--cols" => cfg.cols = parse_number(flag, value()?)?,
            other => return Err(anyhow!("headless: unknown argument: {}", other)),
        }
    }
    Ok(cfg)
}

fn parse_number<T: std::str::FromStr>(flag: &str, v: &str) -> Result<T> {
    v.parse::<T>()
        .map_err(|_| anyhow!("headless: invalid {} value: {}", flag, v))
}

/// Command issued on `frame`, if any
pub fn scripted_action(frame: u64) -> Option<GameAction> {
    if frame % ACTION_INTERVAL != 0 {
        return None;
    }
    let step = (frame / ACTION_INTERVAL) as usize % SCRIPT.len();
    Some(SCRIPT[step])
}

/// Play until `frames` have elapsed or the game ends.
pub fn run_headless(cfg: &HeadlessConfig) -> Result<(GameSnapshot, SessionStats)> {
    let game = cfg.session_config().new_game()?;
    let mut session = Session::new(game);

    while session.frame() < cfg.frames && !session.ended() {
        if let Some(action) = scripted_action(session.frame()) {
            session.apply_action(action);
        }
        session.tick();
    }

    Ok((session.snapshot(), session.stats()))
}
