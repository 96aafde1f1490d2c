//! Piece randomness as an injected capability.
//!
//! The engine never reaches for ambient randomness: whoever constructs it
//! supplies a [`PiecePicker`]. The binary passes a seeded [`SimpleRng`];
//! tests pass a [`SequencePicker`] to script the exact piece order.

use crate::types::PieceKind;

/// Source of the next piece kind to spawn.
pub trait PiecePicker {
    fn next_kind(&mut self) -> PieceKind;
}

/// Simple LCG (Linear Congruential Generator) RNG.
///
/// Uses the Numerical Recipes constants. Picks kinds uniformly from the
/// fixed set of seven.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // A zero seed would produce a degenerate sequence start.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Next raw u32 of the sequence.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Next value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

impl PiecePicker for SimpleRng {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PieceKind::ALL.len() as u32) as usize]
    }
}

/// Deterministic picker that replays a fixed sequence, cycling at the end.
#[derive(Debug, Clone)]
pub struct SequencePicker {
    kinds: Vec<PieceKind>,
    next: usize,
}

impl SequencePicker {
    /// Create a picker over a non-empty sequence of kinds.
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        let kinds = kinds.into();
        assert!(!kinds.is_empty(), "SequencePicker needs at least one kind");
        Self { kinds, next: 0 }
    }
}

impl PiecePicker for SequencePicker {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.next];
        self.next = (self.next + 1) % self.kinds.len();
        kind
    }
}
