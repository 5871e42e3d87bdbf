//! Contour rendering into a styled SVG document

/// Pipeline orchestration from configuration to finished markup
pub mod composer;
/// SVG document assembly and serialization
pub mod document;
/// Grid-space to canvas-space path construction
pub mod path;
/// Per-contour stroke width and opacity interpolation
pub mod style;
