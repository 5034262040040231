//! RNG module - piece supply
//!
//! New pieces come from a [`PieceSource`]. The default source,
//! [`RandomSupplier`], draws kinds uniformly from [`PieceKind::ALL`] with a
//! seeded LCG and stamps each piece with the next value of its own id counter.
//! Both the RNG and the counter are instance state, so two suppliers built
//! from the same seed yield identical sequences.

use crate::types::{Piece, PieceKind};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero seed is promoted to 1
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // (a * state + c) mod 2^32, a=1664525, c=1013904223
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low LCG bits have short periods; use the high half.
        (self.next_u32() >> 16) % max.max(1)
    }
}

/// Anything that can hand out fresh pieces.
pub trait PieceSource {
    /// Produce a new piece with an id never returned before by this source.
    fn next_piece(&mut self) -> Piece;
}

/// Uniform random piece supplier with its own sequential id counter
#[derive(Debug, Clone)]
pub struct RandomSupplier {
    rng: SimpleRng,
    next_id: u32,
}

impl RandomSupplier {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            next_id: 0,
        }
    }

    /// Restart both the RNG and the id counter.
    pub fn reset(&mut self, seed: u32) {
        *self = Self::new(seed);
    }

    /// Id the next piece will receive.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }
}

impl PieceSource for RandomSupplier {
    fn next_piece(&mut self) -> Piece {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        let kind = PieceKind::ALL[idx];
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        Piece::new(kind, id)
    }
}

impl Default for RandomSupplier {
    fn default() -> Self {
        Self::new(1)
    }
}
