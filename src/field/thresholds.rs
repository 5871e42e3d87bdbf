//! Iso value planning across a field's range
//!
//! Threshold positions are always strictly interior: `k / (density + 1)` never
//! touches 0 or 1, so every planned level has samples on both sides and yields
//! at least one contour ring.

use crate::field::generator::ScalarField;
use crate::io::error::{Result, computation_error, invalid_parameter};

/// Plan `density` strictly increasing iso values inside the field's range
///
/// The bias curve skews threshold spacing: positive bias compresses levels
/// toward the valley end (visually denser lines in valleys), negative bias
/// toward the peak end. Bias is clamped to [-1, 1]; both branches are
/// monotonic increasing on [0, 1], which preserves strict threshold ordering.
///
/// # Errors
///
/// Returns an invalid parameter error when `density` is zero, and a
/// computation error when the field has no value spread to place levels in.
pub fn plan(field: &ScalarField, density: usize, bias: f64) -> Result<Vec<f64>> {
    if density == 0 {
        return Err(invalid_parameter(
            "density",
            &density,
            &"at least one contour level is required",
        ));
    }

    let (min, max) = field.min_max();
    let span = max - min;
    if !span.is_finite() || span <= 0.0 {
        return Err(computation_error(
            "threshold planning",
            &"field has no value spread",
        ));
    }

    let bias = bias.clamp(-1.0, 1.0);
    Ok((1..=density)
        .map(|k| {
            let u = k as f64 / (density as f64 + 1.0);
            biased(u, bias).mul_add(span, min)
        })
        .collect())
}

// Monotonic remapping of [0, 1]; identity at bias 0
fn biased(u: f64, bias: f64) -> f64 {
    if bias > 0.0 {
        u.powf(1.0 + bias)
    } else if bias < 0.0 {
        1.0 - (1.0 - u).powf(1.0 - bias)
    } else {
        u
    }
}
