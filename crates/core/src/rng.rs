//! RNG module - random sources for piece generation
//!
//! Every new piece draws a kind (uniform over the seven kinds) and then a color
//! (uniform over `1..=COLOR_COUNT`). The game never touches a global RNG;
//! it is handed a [`RandomSource`] instead, so tests and replays can feed
//! fixed sequences.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{Cell, PieceKind, COLOR_COUNT};

/// Source of piece kinds and colors
pub trait RandomSource {
    /// Next piece kind
    fn next_kind(&mut self) -> PieceKind;

    /// Next piece color, in `1..=COLOR_COUNT`
    fn next_color(&mut self) -> Cell;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }

    fn next_color(&mut self) -> Cell {
        (**self).next_color()
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }

    fn next_color(&mut self) -> Cell {
        (**self).next_color()
    }
}

/// Uniform random source backed by `rand`'s `StdRng`
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Seed from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic source: same seed, same pieces
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for StdRandom {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())]
    }

    fn next_color(&mut self) -> Cell {
        self.rng.gen_range(1..=COLOR_COUNT)
    }
}

/// Replays fixed kind and color sequences, cycling when exhausted.
///
/// An empty kind list yields `I` and an empty color list yields `1`.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    kinds: Vec<PieceKind>,
    colors: Vec<Cell>,
    kind_index: usize,
    color_index: usize,
}

impl ScriptedSource {
    pub fn new(kinds: Vec<PieceKind>, colors: Vec<Cell>) -> Self {
        Self {
            kinds,
            colors,
            kind_index: 0,
            color_index: 0,
        }
    }

    /// Always the same kind, always color 1
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind], vec![1])
    }

    /// Number of kinds handed out so far
    pub fn kinds_drawn(&self) -> usize {
        self.kind_index
    }
}

impl RandomSource for ScriptedSource {
    fn next_kind(&mut self) -> PieceKind {
        if self.kinds.is_empty() {
            return PieceKind::I;
        }
        let kind = self.kinds[self.kind_index % self.kinds.len()];
        self.kind_index += 1;
        kind
    }

    fn next_color(&mut self) -> Cell {
        if self.colors.is_empty() {
            return 1;
        }
        let color = self.colors[self.color_index % self.colors.len()];
        self.color_index += 1;
        color.clamp(1, COLOR_COUNT)
    }
}
