//! RNG module - seeded colour generation for the tile table
//!
//! A small LCG keeps tile tables reproducible: the same seed always paints the same
//! background, which is what the tests and benches rely on.

use crate::types::{Color, COLOR_MASK};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a colour uniformly in `[0, 0xFFFFFF]`.
    ///
    /// The low bits of an LCG have short periods, so the colour is taken from the
    /// high 24 bits of the state.
    pub fn next_color(&mut self) -> Color {
        (self.next_u32() >> 8) & COLOR_MASK
    }
}
