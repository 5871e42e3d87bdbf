//! Stroke styling across the contour stack
//!
//! Width and opacity are interpolated against the contour's position in the
//! ascending-threshold order. Opacity runs opposite to width: the first
//! contours are thin and opaque, the last thick and faint, which reads as
//! depth.

use crate::io::configuration::RenderConfig;

/// Stroke presentation for a single contour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContourStyle {
    /// Stroke width in canvas units
    pub width: f64,
    /// Stroke opacity in [0, 1]
    pub opacity: f64,
}

/// Interpolate the style for the contour at `index` of `count`
///
/// `t` is `index / (count - 1)`, or 0 when only one contour exists. Width
/// moves from `stroke_min` to `stroke_max`, opacity from `opacity_max` down
/// to `opacity_min`.
pub fn style_for(index: usize, count: usize, config: &RenderConfig) -> ContourStyle {
    let t = if count > 1 {
        index as f64 / (count as f64 - 1.0)
    } else {
        0.0
    };
    ContourStyle {
        width: lerp(config.stroke_min, config.stroke_max, t),
        opacity: lerp(config.opacity_max, config.opacity_min, t),
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    (to - from).mul_add(t, from)
}
