//! Mulberry32 pseudo-random number generation
//!
//! A single 32-bit word of state advanced with wrapping arithmetic, chosen so
//! that identical seeds reproduce identical value sequences on every platform.
//! This is the terrain identity of a generated pattern: the whole field shape
//! follows from the first three draws.

/// Normalization divisor mapping a mixed 32-bit word into [0, 1)
const NORMALIZER: f64 = 4_294_967_296.0;

/// Deterministic pseudo-random stream seeded from a 32-bit word
///
/// Each generation owns its own stream; state is never shared between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Create a stream whose output sequence is fully determined by `seed`
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Draw the next value in [0, 1), advancing the stream state
    ///
    /// One wrapping increment by a fixed odd constant followed by two rounds
    /// of xor-shift-multiply mixing. All multiplications keep only the low
    /// 32 bits of the product.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^= t >> 14;
        f64::from(t) / NORMALIZER
    }
}
