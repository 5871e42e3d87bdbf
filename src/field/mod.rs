//! Scalar field construction from seeded sine wave superposition

/// Sine wave superposition over a rectangular grid
pub mod generator;
/// Deterministic 32-bit pseudo-random stream
pub mod rng;
/// Iso value planning across the field's range
pub mod thresholds;
