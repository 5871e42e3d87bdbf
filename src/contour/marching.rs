//! Marching squares contour extraction with ring stitching
//!
//! Cells are walked one row beyond the grid on every side, with out-of-grid
//! samples counting as below any threshold. That virtual border guarantees
//! every contour is a closed loop: regions touching the grid edge are closed
//! by segments just outside the sample rectangle, which the renderer's bleed
//! and viewport clip keep invisible.
//!
//! Segments are emitted directed (the above-threshold region on the left),
//! so stitching reduces to following each segment's end point to the unique
//! segment starting there.

use std::collections::HashMap;

use crate::contour::extractor::{ContourExtractor, IsoContour, Point, Ring};
use crate::field::generator::ScalarField;
use crate::io::error::{Result, computation_error};

/// Built-in marching squares implementation of [`ContourExtractor`]
#[derive(Debug, Clone, Copy, Default)]
pub struct MarchingSquares;

#[derive(Debug, Clone, Copy)]
struct Segment {
    start: Point,
    end: Point,
}

impl ContourExtractor for MarchingSquares {
    fn extract(
        &self,
        field: &ScalarField,
        thresholds: &[f64],
        smooth: bool,
    ) -> Result<Vec<IsoContour>> {
        thresholds
            .iter()
            .map(|&threshold| {
                let rings = extract_rings(field, threshold, smooth)?;
                Ok(IsoContour { threshold, rings })
            })
            .collect()
    }
}

fn extract_rings(field: &ScalarField, level: f64, smooth: bool) -> Result<Vec<Ring>> {
    let width = field.grid_width() as i64;
    let height = field.grid_height() as i64;

    let mut segments = Vec::new();
    for y in -1..height {
        for x in -1..width {
            cell_segments(field, x, y, level, smooth, &mut segments);
        }
    }

    stitch(&segments)
}

// Out-of-grid samples sit below every finite threshold
fn sample(field: &ScalarField, x: i64, y: i64) -> f64 {
    if x < 0 || y < 0 {
        return f64::NEG_INFINITY;
    }
    field
        .get(x as usize, y as usize)
        .unwrap_or(f64::NEG_INFINITY)
}

/// Emit the directed contour segments crossing one cell
///
/// Corner bits: 1 top-left, 2 top-right, 4 bottom-right, 8 bottom-left, set
/// when the corner sample reaches the level. Saddle cases (5 and 10) are
/// disambiguated with the cell-centre average.
fn cell_segments(
    field: &ScalarField,
    x: i64,
    y: i64,
    level: f64,
    smooth: bool,
    out: &mut Vec<Segment>,
) {
    let tl = sample(field, x, y);
    let tr = sample(field, x + 1, y);
    let br = sample(field, x + 1, y + 1);
    let bl = sample(field, x, y + 1);

    let case = usize::from(tl >= level)
        | (usize::from(tr >= level) << 1)
        | (usize::from(br >= level) << 2)
        | (usize::from(bl >= level) << 3);
    if case == 0 || case == 15 {
        return;
    }

    let xf = x as f64;
    let yf = y as f64;
    // Crossing positions on the four cell edges; corner order is canonical
    // (left before right, top before bottom) so neighboring cells compute
    // bit-identical points on shared edges.
    let top = crossing([xf, yf], tl, [xf + 1.0, yf], tr, level, smooth);
    let right = crossing([xf + 1.0, yf], tr, [xf + 1.0, yf + 1.0], br, level, smooth);
    let bottom = crossing([xf, yf + 1.0], bl, [xf + 1.0, yf + 1.0], br, level, smooth);
    let left = crossing([xf, yf], tl, [xf, yf + 1.0], bl, level, smooth);

    let segment = |start: Point, end: Point| Segment { start, end };

    match case {
        1 => out.push(segment(left, top)),
        2 => out.push(segment(top, right)),
        3 => out.push(segment(left, right)),
        4 => out.push(segment(right, bottom)),
        5 => {
            if centre_above(tl, tr, br, bl, level) {
                out.push(segment(right, top));
                out.push(segment(left, bottom));
            } else {
                out.push(segment(left, top));
                out.push(segment(right, bottom));
            }
        }
        6 => out.push(segment(top, bottom)),
        7 => out.push(segment(left, bottom)),
        8 => out.push(segment(bottom, left)),
        9 => out.push(segment(bottom, top)),
        10 => {
            if centre_above(tl, tr, br, bl, level) {
                out.push(segment(top, left));
                out.push(segment(bottom, right));
            } else {
                out.push(segment(top, right));
                out.push(segment(bottom, left));
            }
        }
        11 => out.push(segment(bottom, right)),
        12 => out.push(segment(right, left)),
        13 => out.push(segment(right, top)),
        14 => out.push(segment(top, left)),
        _ => {}
    }
}

fn centre_above(tl: f64, tr: f64, br: f64, bl: f64, level: f64) -> bool {
    (tl + tr + br + bl) / 4.0 >= level
}

/// Point where the contour crosses the edge between corners `a` and `b`
///
/// Interpolation through a virtual out-of-grid corner is meaningless: an
/// infinite corner value can still yield a finite ratio (zero, collapsing the
/// crossing onto the real corner and breaking stitching), so both corner
/// values must be finite before interpolating. Border crossings fall back to
/// the edge midpoint, which lies outside the visible grid rectangle anyway.
fn crossing(a: Point, a_value: f64, b: Point, b_value: f64, level: f64, smooth: bool) -> Point {
    let t = if smooth && a_value.is_finite() && b_value.is_finite() {
        let ratio = (level - a_value) / (b_value - a_value);
        if ratio.is_finite() {
            ratio.clamp(0.0, 1.0)
        } else {
            0.5
        }
    } else {
        0.5
    };
    [
        (b[0] - a[0]).mul_add(t, a[0]),
        (b[1] - a[1]).mul_add(t, a[1]),
    ]
}

fn point_key(point: Point) -> (u64, u64) {
    (point[0].to_bits(), point[1].to_bits())
}

/// Chain directed segments into closed rings
///
/// With the virtual border every start point is matched by exactly one end
/// point; a missing or repeated match means the case table was violated and
/// surfaces as a computation error rather than malformed geometry.
fn stitch(segments: &[Segment]) -> Result<Vec<Ring>> {
    let mut by_start: HashMap<(u64, u64), usize> = HashMap::with_capacity(segments.len());
    for (index, seg) in segments.iter().enumerate() {
        if by_start.insert(point_key(seg.start), index).is_some() {
            return Err(computation_error(
                "contour stitching",
                &"duplicate segment start point",
            ));
        }
    }

    let mut used = vec![false; segments.len()];
    let mut rings = Vec::new();

    for first in 0..segments.len() {
        if used.get(first).copied().unwrap_or(true) {
            continue;
        }

        let mut ring: Ring = Vec::new();
        let mut index = first;
        loop {
            let seg = *segments
                .get(index)
                .ok_or_else(|| computation_error("contour stitching", &"segment index out of range"))?;
            if let Some(flag) = used.get_mut(index) {
                *flag = true;
            }
            ring.push(seg.start);

            let next = by_start
                .get(&point_key(seg.end))
                .copied()
                .ok_or_else(|| computation_error("contour stitching", &"open contour chain"))?;
            if next == first {
                break;
            }
            if used.get(next).copied().unwrap_or(true) {
                return Err(computation_error(
                    "contour stitching",
                    &"segment chain revisited",
                ));
            }
            index = next;
        }
        rings.push(ring);
    }

    Ok(rings)
}
