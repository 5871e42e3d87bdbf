//! Pipeline orchestration from configuration to finished document
//!
//! One composition is fully synchronous and side effect free: it owns its RNG
//! stream and field, touches no shared state, and either returns the complete
//! markup or the first error. Compositions may run in parallel freely.

use rand::Rng;

use crate::contour::extractor::ContourExtractor;
use crate::contour::marching::MarchingSquares;
use crate::field::generator::ScalarField;
use crate::field::thresholds;
use crate::io::configuration::{BLEED, RenderConfig};
use crate::io::error::{RenderError, Result};
use crate::render::document::{StyledPath, SvgDocument};
use crate::render::path::{PathMapping, contour_path};
use crate::render::style::style_for;

/// Document generator holding the injected contour extraction capability
pub struct Composer {
    extractor: Option<Box<dyn ContourExtractor>>,
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

impl Composer {
    /// Composer backed by the built-in marching squares extractor
    pub fn new() -> Self {
        Self {
            extractor: Some(Box::new(MarchingSquares)),
        }
    }

    /// Composer backed by a caller-provided extraction capability
    pub fn with_extractor(extractor: Box<dyn ContourExtractor>) -> Self {
        Self {
            extractor: Some(extractor),
        }
    }

    /// Composer with no extraction capability; every composition fails fast
    pub const fn without_extractor() -> Self {
        Self { extractor: None }
    }

    /// Run the full pipeline and serialize the resulting document
    ///
    /// Field generation, threshold planning, extraction (smoothing enabled),
    /// styling, and assembly run in order; contours are rendered in ascending
    /// threshold order, one path per planned level.
    ///
    /// # Errors
    ///
    /// Fails with [`RenderError::MissingExtractor`] before any computation if
    /// no extraction capability is held, with an invalid parameter error for
    /// a rejected configuration, or with whatever error the extraction
    /// capability reports.
    pub fn compose(&self, config: &RenderConfig) -> Result<String> {
        let extractor = self
            .extractor
            .as_deref()
            .ok_or(RenderError::MissingExtractor)?;
        config.validate()?;

        let seed = config
            .seed
            .unwrap_or_else(|| rand::rng().random::<u32>());

        let field = ScalarField::generate(
            config.grid_width,
            config.grid_height,
            config.freq,
            config.amplitude,
            seed,
        )?;
        let levels = thresholds::plan(&field, config.density, config.bias)?;
        let contours = extractor.extract(&field, &levels, true)?;

        let mapping = PathMapping::for_viewport(
            config.width,
            config.height,
            config.grid_width,
            config.grid_height,
            BLEED,
        );

        let mut document = SvgDocument::new(
            config.width,
            config.height,
            seed,
            config.stroke_color.clone(),
            config.background_color.clone(),
        );
        let count = contours.len();
        for (index, contour) in contours.iter().enumerate() {
            document.push_path(StyledPath {
                data: contour_path(contour, &mapping),
                style: style_for(index, count, config),
            });
        }

        Ok(document.to_string())
    }
}

/// Generate a complete SVG document using the built-in extractor
///
/// # Errors
///
/// Returns an error for a rejected configuration or a failed extraction; see
/// [`Composer::compose`].
pub fn generate_document(config: &RenderConfig) -> Result<String> {
    Composer::new().compose(config)
}
