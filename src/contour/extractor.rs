//! Contour extraction capability
//!
//! Extraction is modeled as an injected capability so the composer can run
//! against any marching squares implementation. The built-in one lives in
//! [`crate::contour::marching`]; callers with their own routine implement
//! [`ContourExtractor`] and hand it to the composer.

use crate::field::generator::ScalarField;
use crate::io::error::Result;

/// A point in grid-cell units
pub type Point = [f64; 2];

/// A closed polygon ring in grid-cell units
///
/// The closing edge back to the first point is implicit; renderers emit it as
/// an explicit close instruction.
pub type Ring = Vec<Point>;

/// All rings belonging to one iso value
///
/// A single threshold may produce several disjoint rings, including rings
/// describing holes inside filled regions. Ring winding is consistent but this
/// crate only strokes outlines and never applies a fill rule.
#[derive(Debug, Clone, PartialEq)]
pub struct IsoContour {
    /// Iso value this contour traces
    pub threshold: f64,
    /// Closed rings, each with at least two points
    pub rings: Vec<Ring>,
}

/// Capability producing contour geometry from a field and planned iso values
///
/// Implementations must be deterministic (same field and thresholds produce
/// the same rings) and must return one contour per threshold, in the order
/// the thresholds were given.
pub trait ContourExtractor: Send + Sync {
    /// Extract contour rings for every threshold
    ///
    /// `smooth` requests linear interpolation of crossing positions along
    /// cell edges; without it crossings sit on edge midpoints.
    ///
    /// # Errors
    ///
    /// Returns an error when the extraction cannot produce closed geometry
    /// for the given field.
    fn extract(
        &self,
        field: &ScalarField,
        thresholds: &[f64],
        smooth: bool,
    ) -> Result<Vec<IsoContour>>;
}
