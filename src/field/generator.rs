//! Scalar field generation from superposed sine waves
//!
//! Four seeded waves are summed per cell: one along x, one along y, and two
//! diagonal components at reduced weight. Coordinates are normalized to
//! [-0.5, 0.5] so the wave layout is independent of grid resolution.

use std::f64::consts::TAU;

use ndarray::Array2;

use crate::field::rng::Mulberry32;
use crate::io::configuration::{FREQ_NORMALIZER, MAX_GRID_DIMENSION};
use crate::io::error::{Result, invalid_parameter};

/// Fully materialized grid of scalar samples, addressed row-major
///
/// Values are unbounded reals; consumers derive their own range via
/// [`ScalarField::min_max`]. A field is never mutated after generation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    values: Array2<f64>,
}

impl ScalarField {
    /// Generate a field from seeded sine wave superposition
    ///
    /// Exactly three phase values are drawn from the stream before the grid
    /// is iterated; the draw order decides which wave receives which phase
    /// for a given seed and is part of the determinism contract.
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if a grid dimension is below 2 or
    /// above the safety limit, or if `freq` or `amplitude` is not a positive
    /// finite number.
    pub fn generate(
        grid_width: usize,
        grid_height: usize,
        freq: f64,
        amplitude: f64,
        seed: u32,
    ) -> Result<Self> {
        validate_dimension("grid_width", grid_width)?;
        validate_dimension("grid_height", grid_height)?;
        if !freq.is_finite() || freq <= 0.0 {
            return Err(invalid_parameter(
                "freq",
                &freq,
                &"frequency must be a positive finite number",
            ));
        }
        if !amplitude.is_finite() || amplitude <= 0.0 {
            return Err(invalid_parameter(
                "amplitude",
                &amplitude,
                &"amplitude must be a positive finite number",
            ));
        }

        let mut rng = Mulberry32::new(seed);
        let phase_x = rng.next_f64() * TAU;
        let phase_y = rng.next_f64() * TAU;
        let phase_diagonal = rng.next_f64() * TAU;

        let f = freq / FREQ_NORMALIZER;
        let width = grid_width as f64;
        let height = grid_height as f64;

        let values = Array2::from_shape_fn((grid_height, grid_width), |(row, col)| {
            let x = col as f64 / width - 0.5;
            let y = row as f64 / height - 0.5;
            let value = (x * f + phase_x).sin()
                + (y * 0.9 * f + phase_y).sin()
                + 0.6 * ((x + y) * 0.7 * f + phase_diagonal).sin()
                + 0.4 * ((x - y) * 0.5 * f - phase_y).sin();
            value * amplitude
        });

        Ok(Self { values })
    }

    /// Build a field from raw row-major samples
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if a grid dimension is out of range
    /// or `values` does not hold exactly `grid_width * grid_height` samples.
    pub fn from_values(grid_width: usize, grid_height: usize, values: Vec<f64>) -> Result<Self> {
        validate_dimension("grid_width", grid_width)?;
        validate_dimension("grid_height", grid_height)?;
        let expected = grid_width * grid_height;
        let provided = values.len();
        let values = Array2::from_shape_vec((grid_height, grid_width), values).map_err(|_| {
            invalid_parameter(
                "values",
                &provided,
                &format!("expected {expected} row-major samples"),
            )
        })?;
        Ok(Self { values })
    }

    /// Number of columns in the grid
    pub fn grid_width(&self) -> usize {
        self.values.ncols()
    }

    /// Number of rows in the grid
    pub fn grid_height(&self) -> usize {
        self.values.nrows()
    }

    /// Sample at the given column and row, `None` when out of bounds
    pub fn get(&self, col: usize, row: usize) -> Option<f64> {
        self.values.get((row, col)).copied()
    }

    /// All samples in row-major order
    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Smallest and largest sample in the field
    pub fn min_max(&self) -> (f64, f64) {
        self.values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value < 2 {
        return Err(invalid_parameter(
            parameter,
            &value,
            &"grid dimensions must be at least 2",
        ));
    }
    if value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("grid dimensions must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}
