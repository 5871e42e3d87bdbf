//! Path construction from contour rings
//!
//! Ring geometry arrives in grid-cell units and is mapped into canvas units
//! with a bleed-enlarged affine transform. Paths are built as structured
//! command lists and serialized once, with a fixed 3 fractional digit
//! coordinate precision as a reproducibility contract.

use std::fmt;

use crate::contour::extractor::{IsoContour, Point};

/// Affine mapping from grid coordinates into canvas coordinates
///
/// `x' = x * scale_x - offset_x`, `y' = y * scale_y - offset_y`. The mapped
/// canvas is larger than the visible viewport by the bleed factor on every
/// side, pushing grid-edge closure artifacts outside the clip region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathMapping {
    /// Horizontal scale in canvas units per grid cell
    pub scale_x: f64,
    /// Vertical scale in canvas units per grid cell
    pub scale_y: f64,
    /// Horizontal shift moving the bleed margin off-canvas
    pub offset_x: f64,
    /// Vertical shift moving the bleed margin off-canvas
    pub offset_y: f64,
}

impl PathMapping {
    /// Derive the mapping for a viewport, grid resolution, and bleed factor
    ///
    /// The full mapped dimension is `viewport * (1 + 2 * bleed)` spread over
    /// `grid - 1` cell intervals; the offset recenters it so exactly `bleed`
    /// of the viewport overflows each side.
    pub fn for_viewport(
        width: f64,
        height: f64,
        grid_width: usize,
        grid_height: usize,
        bleed: f64,
    ) -> Self {
        let spread = 2.0f64.mul_add(bleed, 1.0);
        Self {
            scale_x: width * spread / (grid_width as f64 - 1.0),
            scale_y: height * spread / (grid_height as f64 - 1.0),
            offset_x: width * bleed,
            offset_y: height * bleed,
        }
    }

    /// Map a grid-space point into canvas space
    pub fn apply(&self, point: Point) -> Point {
        [
            point[0].mul_add(self.scale_x, -self.offset_x),
            point[1].mul_add(self.scale_y, -self.offset_y),
        ]
    }
}

/// Single drawing instruction in a vector path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath at the given canvas point
    MoveTo(f64, f64),
    /// Straight line to the given canvas point
    LineTo(f64, f64),
    /// Close the current subpath back to its move point
    Close,
}

/// Ordered command list serialized once into SVG path data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    /// Append a move instruction
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::MoveTo(x, y));
    }

    /// Append a line instruction
    pub fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::LineTo(x, y));
    }

    /// Append a close instruction
    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// All accumulated commands in order
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Whether no commands have been recorded
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for command in &self.commands {
            match command {
                PathCommand::MoveTo(x, y) => write!(f, "M{x:.3} {y:.3}")?,
                PathCommand::LineTo(x, y) => write!(f, "L{x:.3} {y:.3}")?,
                PathCommand::Close => write!(f, "Z")?,
            }
        }
        Ok(())
    }
}

/// Map one contour's rings into canvas space as a single path
///
/// Each ring opens with a move, continues with lines, and is explicitly
/// closed; rings stay independent subpaths so holes remain representable.
pub fn contour_path(contour: &IsoContour, mapping: &PathMapping) -> PathData {
    let mut data = PathData::default();
    for ring in &contour.rings {
        let mut points = ring.iter().map(|&p| mapping.apply(p));
        if let Some(first) = points.next() {
            data.move_to(first[0], first[1]);
            for point in points {
                data.line_to(point[0], point[1]);
            }
            data.close();
        }
    }
    data
}
