//! Command-line interface for generating SVG pattern files

use std::path::PathBuf;

use clap::Parser;
use rand::Rng;

use crate::io::configuration::{
    DEFAULT_AMPLITUDE, DEFAULT_BIAS, DEFAULT_DENSITY, DEFAULT_FREQ, DEFAULT_GRID_HEIGHT,
    DEFAULT_GRID_WIDTH, DEFAULT_HEIGHT, DEFAULT_OPACITY_MAX, DEFAULT_OPACITY_MIN,
    DEFAULT_STROKE_COLOR, DEFAULT_STROKE_MAX, DEFAULT_STROKE_MIN, DEFAULT_WIDTH, RenderConfig,
};
use crate::io::error::{RenderError, Result};
use crate::render::composer::Composer;

#[derive(Parser)]
#[command(name = "isolines")]
#[command(
    author,
    version,
    about = "Generate deterministic organic contour line patterns as SVG"
)]
/// Command-line arguments for the pattern generation tool
pub struct Cli {
    /// Output SVG file path
    #[arg(value_name = "OUTPUT", default_value = "isolines.svg")]
    pub output: PathBuf,

    /// Viewport width in output units
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: f64,

    /// Viewport height in output units
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: f64,

    /// Field resolution along x
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    pub grid_width: usize,

    /// Field resolution along y
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    pub grid_height: usize,

    /// Number of contour lines to render
    #[arg(short, long, default_value_t = DEFAULT_DENSITY)]
    pub density: usize,

    /// Wave frequency
    #[arg(short, long, default_value_t = DEFAULT_FREQ)]
    pub freq: f64,

    /// Wave amplitude
    #[arg(short, long, default_value_t = DEFAULT_AMPLITUDE)]
    pub amplitude: f64,

    /// Stroke width of the innermost contour
    #[arg(long, default_value_t = DEFAULT_STROKE_MIN)]
    pub stroke_min: f64,

    /// Stroke width of the outermost contour
    #[arg(long, default_value_t = DEFAULT_STROKE_MAX)]
    pub stroke_max: f64,

    /// Stroke opacity of the outermost contour
    #[arg(long, default_value_t = DEFAULT_OPACITY_MIN)]
    pub opacity_min: f64,

    /// Stroke opacity of the innermost contour
    #[arg(long, default_value_t = DEFAULT_OPACITY_MAX)]
    pub opacity_max: f64,

    /// Threshold distribution skew in [-1, 1]
    #[arg(short, long, default_value_t = DEFAULT_BIAS, allow_hyphen_values = true)]
    pub bias: f64,

    /// Terrain seed for reproducible output; random when omitted
    #[arg(short, long)]
    pub seed: Option<u32>,

    /// Stroke color for every contour
    #[arg(long, default_value = DEFAULT_STROKE_COLOR)]
    pub stroke_color: String,

    /// Background fill color; transparent when omitted
    #[arg(long)]
    pub background_color: Option<String>,

    /// Suppress status output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Resolve the arguments into a pipeline configuration and the seed used
    ///
    /// A missing seed is drawn here rather than inside the composer so the
    /// chosen value can be reported back for reproduction.
    pub fn to_config(&self) -> (RenderConfig, u32) {
        let seed = self.seed.unwrap_or_else(|| rand::rng().random::<u32>());
        let config = RenderConfig {
            width: self.width,
            height: self.height,
            grid_width: self.grid_width,
            grid_height: self.grid_height,
            density: self.density,
            freq: self.freq,
            amplitude: self.amplitude,
            stroke_min: self.stroke_min,
            stroke_max: self.stroke_max,
            opacity_min: self.opacity_min,
            opacity_max: self.opacity_max,
            bias: self.bias,
            seed: Some(seed),
            stroke_color: self.stroke_color.clone(),
            background_color: self.background_color.clone(),
        };
        (config, seed)
    }

    /// Check if status output should be displayed
    pub const fn should_report(&self) -> bool {
        !self.quiet
    }
}

/// Composes one document and writes it to the requested path
pub struct DocumentWriter {
    cli: Cli,
}

impl DocumentWriter {
    /// Create a writer for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate the document and write it to disk
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is rejected, composition fails,
    /// or the output file cannot be written.
    // Allow print for user feedback on the seed actually used
    #[allow(clippy::print_stderr)]
    pub fn write(&self) -> Result<()> {
        let (config, seed) = self.cli.to_config();
        let document = Composer::new().compose(&config)?;

        std::fs::write(&self.cli.output, &document).map_err(|source| {
            RenderError::FileSystem {
                path: self.cli.output.clone(),
                operation: "write",
                source,
            }
        })?;

        if self.cli.should_report() {
            eprintln!("{} (seed {seed})", self.cli.output.display());
        }

        Ok(())
    }
}
