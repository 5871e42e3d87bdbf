//! SVG document assembly
//!
//! The document is a builder holding the viewport, clip region, background,
//! and one styled path per contour; serialization happens once at the end.
//! The clip region id is derived deterministically from the seed so multiple
//! documents on one page never collide.

use std::fmt;

use crate::io::configuration::CLIP_ID_MODULUS;
use crate::render::path::PathData;
use crate::render::style::ContourStyle;

/// One stroked contour path with its presentation attributes
#[derive(Debug, Clone, PartialEq)]
pub struct StyledPath {
    /// Serialized-on-demand path geometry
    pub data: PathData,
    /// Stroke width and opacity for this contour
    pub style: ContourStyle,
}

/// Complete vector document, regenerated in full on every composition
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    width: f64,
    height: f64,
    stroke_color: String,
    background_color: Option<String>,
    clip_id: u32,
    paths: Vec<StyledPath>,
}

impl SvgDocument {
    /// Create an empty document for the given viewport and seed
    pub fn new(
        width: f64,
        height: f64,
        seed: u32,
        stroke_color: String,
        background_color: Option<String>,
    ) -> Self {
        Self {
            width,
            height,
            stroke_color,
            background_color,
            clip_id: seed % CLIP_ID_MODULUS,
            paths: Vec::new(),
        }
    }

    /// Append a styled contour path
    pub fn push_path(&mut self, path: StyledPath) {
        self.paths.push(path);
    }

    /// Number of paths currently held
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Seed-derived clip region identifier
    pub fn clip_id(&self) -> String {
        format!("isolines-clip-{}", self.clip_id)
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.width;
        let height = self.height;
        let clip = self.clip_id();
        let background = self.background_color.as_deref().unwrap_or("none");

        writeln!(
            f,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {width} {height}\" width=\"{width}\" height=\"{height}\">"
        )?;
        writeln!(
            f,
            "<defs><clipPath id=\"{clip}\"><rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\"/></clipPath></defs>"
        )?;
        writeln!(f, "<g clip-path=\"url(#{clip})\">")?;
        writeln!(
            f,
            "<rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\" fill=\"{background}\"/>"
        )?;
        for path in &self.paths {
            writeln!(
                f,
                "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-opacity=\"{}\" stroke-linecap=\"round\" stroke-linejoin=\"round\"/>",
                path.data, self.stroke_color, path.style.width, path.style.opacity
            )?;
        }
        writeln!(f, "</g>")?;
        write!(f, "</svg>")
    }
}
