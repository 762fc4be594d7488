//! Deterministic randomness for piece draws and garbage holes
//!
//! A small LCG (Numerical Recipes constants) keeps every game replayable
//! from its seed, which the scenario tests rely on. The randomizer draws
//! uniformly from the 7 playable kinds; garbage is never drawn here.

use crate::types::{PieceKind, STAGE_WIDTH};

/// Simple LCG (Linear Congruential Generator).
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed. A zero seed is remapped to 1
    /// to avoid the degenerate all-zero sequence.
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }

    /// Generate a random value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Uniformly random playable piece kind.
    pub fn draw_kind(&mut self) -> PieceKind {
        let idx = self.next_range(PieceKind::PLAYABLE.len() as u32) as usize;
        PieceKind::PLAYABLE[idx]
    }

    /// Uniformly random hole column for a garbage row.
    pub fn draw_hole(&mut self) -> usize {
        self.next_range(STAGE_WIDTH as u32) as usize
    }

    /// Current internal state, usable as a seed for a follow-up game.
    pub fn state(&self) -> u32 {
        self.state
    }
}
