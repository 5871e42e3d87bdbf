//! Rendering defaults and runtime configuration

use crate::io::error::{Result, invalid_parameter};

/// Default viewport width in output units
pub const DEFAULT_WIDTH: f64 = 100.0;
/// Default viewport height in output units (16:9)
pub const DEFAULT_HEIGHT: f64 = 56.25;

/// Default field resolution along x
pub const DEFAULT_GRID_WIDTH: usize = 160;
/// Default field resolution along y
pub const DEFAULT_GRID_HEIGHT: usize = 90;

/// Default number of rendered contour levels
pub const DEFAULT_DENSITY: usize = 10;
/// Default wave frequency before normalization
pub const DEFAULT_FREQ: f64 = 5.0;
/// Default wave amplitude
pub const DEFAULT_AMPLITUDE: f64 = 1.0;

/// Default minimum stroke width
pub const DEFAULT_STROKE_MIN: f64 = 0.16;
/// Default maximum stroke width
pub const DEFAULT_STROKE_MAX: f64 = 0.26;
/// Default minimum stroke opacity
pub const DEFAULT_OPACITY_MIN: f64 = 0.5;
/// Default maximum stroke opacity
pub const DEFAULT_OPACITY_MAX: f64 = 1.0;

/// Default threshold distribution skew
pub const DEFAULT_BIAS: f64 = 0.0;
/// Default stroke color
pub const DEFAULT_STROKE_COLOR: &str = "#d4d4d4";

/// Input frequency is divided by this before entering the wave formula
pub const FREQ_NORMALIZER: f64 = 10.0;
/// Fraction of the viewport overflowing each side to hide edge artifacts
pub const BLEED: f64 = 0.1;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Fixed prime keeping seed-derived clip ids short and collision-free per seed
/// Modulus for deriving clip region identifiers from seeds
pub const CLIP_ID_MODULUS: u32 = 9973;

/// Validated configuration for one document generation
///
/// Owned by the caller and read-only to the pipeline. `seed` is the terrain
/// identity: omitting it draws a fresh random seed per composition, while an
/// explicit value makes the output byte-for-byte reproducible.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Viewport width in output units
    pub width: f64,
    /// Viewport height in output units
    pub height: f64,
    /// Field resolution along x, at least 2
    pub grid_width: usize,
    /// Field resolution along y, at least 2
    pub grid_height: usize,
    /// Number of rendered contour levels (recommended 5 to 20)
    pub density: usize,
    /// Wave frequency (recommended 2 to 12)
    pub freq: f64,
    /// Wave amplitude (recommended 0.4 to 2.0)
    pub amplitude: f64,
    /// Stroke width of the first contour
    pub stroke_min: f64,
    /// Stroke width of the last contour
    pub stroke_max: f64,
    /// Stroke opacity of the last contour
    pub opacity_min: f64,
    /// Stroke opacity of the first contour
    pub opacity_max: f64,
    /// Threshold distribution skew in [-1, 1]
    pub bias: f64,
    /// Terrain seed; a random one is drawn per composition when omitted
    pub seed: Option<u32>,
    /// Stroke color for every contour path
    pub stroke_color: String,
    /// Background fill; transparent when omitted
    pub background_color: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            density: DEFAULT_DENSITY,
            freq: DEFAULT_FREQ,
            amplitude: DEFAULT_AMPLITUDE,
            stroke_min: DEFAULT_STROKE_MIN,
            stroke_max: DEFAULT_STROKE_MAX,
            opacity_min: DEFAULT_OPACITY_MIN,
            opacity_max: DEFAULT_OPACITY_MAX,
            bias: DEFAULT_BIAS,
            seed: None,
            stroke_color: DEFAULT_STROKE_COLOR.to_string(),
            background_color: None,
        }
    }
}

impl RenderConfig {
    /// Check every field against its documented constraints
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error naming the first field that fails
    /// validation.
    pub fn validate(&self) -> Result<()> {
        check_positive("width", self.width)?;
        check_positive("height", self.height)?;
        check_dimension("grid_width", self.grid_width)?;
        check_dimension("grid_height", self.grid_height)?;
        if self.density == 0 {
            return Err(invalid_parameter(
                "density",
                &self.density,
                &"at least one contour level is required",
            ));
        }
        check_positive("freq", self.freq)?;
        check_positive("amplitude", self.amplitude)?;
        check_positive("stroke_min", self.stroke_min)?;
        check_positive("stroke_max", self.stroke_max)?;
        check_opacity("opacity_min", self.opacity_min)?;
        check_opacity("opacity_max", self.opacity_max)?;
        if !self.bias.is_finite() {
            return Err(invalid_parameter(
                "bias",
                &self.bias,
                &"bias must be a finite number",
            ));
        }
        if self.stroke_color.is_empty() {
            return Err(invalid_parameter(
                "stroke_color",
                &self.stroke_color,
                &"stroke color must not be empty",
            ));
        }
        Ok(())
    }
}

fn check_positive(parameter: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid_parameter(
            parameter,
            &value,
            &"value must be a positive finite number",
        ));
    }
    Ok(())
}

fn check_dimension(parameter: &'static str, value: usize) -> Result<()> {
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

fn check_opacity(parameter: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(invalid_parameter(
            parameter,
            &value,
            &"opacity must lie in [0, 1]",
        ));
    }
    Ok(())
}
