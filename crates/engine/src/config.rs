//! Session configuration from environment variables.

use anyhow::{bail, Result};

use crate::core::{GameState, StdRandom};
use crate::types::{GRID_COLS, GRID_ROWS, SHAPE_BOX, SPAWN_X};

/// Smallest grid that still fits a piece at the spawn position
pub const MIN_ROWS: usize = SHAPE_BOX;
pub const MIN_COLS: usize = SPAWN_X as usize + SHAPE_BOX;

/// Upper bound for either grid dimension
pub const MAX_DIMENSION: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub rows: usize,
    pub cols: usize,
    /// Fixed seed for a reproducible piece sequence; entropy when unset
    pub seed: Option<u64>,
    /// Log file; logging stays off when unset
    pub log_path: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: GRID_ROWS,
            cols: GRID_COLS,
            seed: None,
            log_path: None,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables
    ///
    /// - `BLOCKFALL_ROWS` / `BLOCKFALL_COLS`: grid size
    /// - `BLOCKFALL_SEED`: piece sequence seed
    /// - `BLOCKFALL_LOG_PATH`: log file
    ///
    /// Unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SessionConfig::from_env`] with a custom variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let rows = lookup("BLOCKFALL_ROWS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.rows);
        let cols = lookup("BLOCKFALL_COLS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.cols);
        let seed = lookup("BLOCKFALL_SEED").and_then(|s| s.trim().parse().ok());
        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            rows,
            cols,
            seed,
            log_path,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows < MIN_ROWS || self.cols < MIN_COLS {
            bail!(
                "grid {}x{} is too small, need at least {}x{}",
                self.rows,
                self.cols,
                MIN_ROWS,
                MIN_COLS
            );
        }
        if self.rows > MAX_DIMENSION || self.cols > MAX_DIMENSION {
            bail!(
                "grid {}x{} is too large, at most {} per side",
                self.rows,
                self.cols,
                MAX_DIMENSION
            );
        }
        Ok(())
    }

    pub fn random_source(&self) -> StdRandom {
        match self.seed {
            Some(seed) => StdRandom::seeded(seed),
            None => StdRandom::from_entropy(),
        }
    }

    /// Validate and build a fresh game
    pub fn new_game(&self) -> Result<GameState<StdRandom>> {
        self.validate()?;
        Ok(GameState::new(self.rows, self.cols, self.random_source()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let cfg = SessionConfig::from_lookup(|_| None);
        assert_eq!(cfg, SessionConfig::default());
        assert_eq!(cfg.rows, 19);
        assert_eq!(cfg.cols, 15);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_reads_variables() {
        let cfg = SessionConfig::from_lookup(lookup_from(&[
            ("BLOCKFALL_ROWS", "22"),
            ("BLOCKFALL_COLS", " 10 "),
            ("BLOCKFALL_SEED", "42"),
            ("BLOCKFALL_LOG_PATH", "/tmp/blockfall.log"),
        ]));
        assert_eq!(cfg.rows, 22);
        assert_eq!(cfg.cols, 10);
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/blockfall.log"));
    }

    #[test]
    fn test_unparsable_values_fall_back() {
        let cfg = SessionConfig::from_lookup(lookup_from(&[
            ("BLOCKFALL_ROWS", "lots"),
            ("BLOCKFALL_SEED", "-"),
            ("BLOCKFALL_LOG_PATH", "   "),
        ]));
        assert_eq!(cfg.rows, 19);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.log_path, None);
    }

    #[test]
    fn test_validate_rejects_small_and_huge_grids() {
        let small = SessionConfig {
            cols: 8,
            ..SessionConfig::default()
        };
        assert!(small.validate().is_err());
        assert!(small.new_game().is_err());

        let short = SessionConfig {
            rows: 3,
            ..SessionConfig::default()
        };
        assert!(short.validate().is_err());

        let huge = SessionConfig {
            rows: 1000,
            ..SessionConfig::default()
        };
        let err = huge.validate().unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_minimum_grid_is_playable() {
        let cfg = SessionConfig {
            rows: MIN_ROWS,
            cols: MIN_COLS,
            seed: Some(3),
            log_path: None,
        };
        let game = cfg.new_game().unwrap();
        assert!(!game.ended());
    }

    #[test]
    fn test_seeded_games_match() {
        let cfg = SessionConfig {
            seed: Some(99),
            ..SessionConfig::default()
        };
        let a = cfg.new_game().unwrap();
        let b = cfg.new_game().unwrap();
        assert_eq!(a.snapshot(), b.snapshot());
    }
}
