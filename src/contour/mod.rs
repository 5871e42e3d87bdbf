//! Iso contour extraction from scalar fields

/// Extraction capability trait and contour geometry types
pub mod extractor;
/// Built-in marching squares implementation
pub mod marching;
