//! Deterministic organic line pattern generation
//!
//! The pipeline builds a 2D scalar field from seeded sine wave superposition,
//! extracts iso value contours with a marching squares capability, and renders
//! the contours as styled vector paths inside a clipped SVG viewport. Every
//! document is a pure function of its configuration: an explicit seed
//! reproduces the exact same markup byte for byte.

#![forbid(unsafe_code)]

/// Contour extraction capability and the built-in marching squares implementation
pub mod contour;
/// Scalar field generation, seeded randomness, and threshold planning
pub mod field;
/// Configuration, CLI, and error handling
pub mod io;
/// Path construction, stroke styling, and SVG document assembly
pub mod render;

pub use io::configuration::RenderConfig;
pub use io::error::{RenderError, Result};
pub use render::composer::{Composer, generate_document};

// Unit tests live under tests/unit, mirroring the src module tree
#[cfg(test)]
#[path = "../tests/unit/mod.rs"]
mod unit;
