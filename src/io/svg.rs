//! SVG drawings of slices, one document per slice.
//!
//! Points go through two stages before drawing:
//! 1. each slice is shifted so that none of its own coordinates is negative,
//! 2. coordinates are scaled by `size / mesh_max` on each axis and centred in
//!    the canvas using the slice's own extremes, then offset by the margin.
//!
//! Scaling against the whole mesh keeps every slice of a stack at the same scale.

use crate::config::SliceConfig;
use crate::float_types::Real;
use crate::io::IoError;
use crate::mesh::Extent;
use crate::slice::{Slice, SliceSink};
use log::info;
use nalgebra::{Point2, Vector2};
use std::path::PathBuf;
use svg::Document;
use svg::node::element::Line;

/// A segment projected onto the drawing plane.
pub type Line2 = [Point2<Real>; 2];

/// Drop the altitude of every segment end.
pub fn project(slice: &Slice) -> Vec<Line2> {
    slice
        .segments
        .iter()
        .map(|s| s.points().map(|p| p.xy()))
        .collect()
}

/// Shift `lines` so that no coordinate is negative.
///
/// Returns the centring reference handed to [`fit_to_canvas`]: the maxima plus
/// the shift when something was moved, otherwise the maxima plus the minima,
/// which puts a slice lying in positive coordinates at the middle of the canvas.
pub fn shift_negatives(lines: &mut [Line2]) -> Point2<Real> {
    let (mins, maxs) = lines.iter().flatten().fold(
        (
            Point2::new(Real::INFINITY, Real::INFINITY),
            Point2::new(Real::NEG_INFINITY, Real::NEG_INFINITY),
        ),
        |(lo, hi), p| {
            (
                Point2::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point2::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        },
    );

    if mins.x >= 0.0 && mins.y >= 0.0 {
        return maxs + mins.coords;
    }

    let shift = Vector2::new(mins.x.min(0.0).abs(), mins.y.min(0.0).abs());
    for p in lines.iter_mut().flatten() {
        *p += shift;
    }
    maxs + shift
}

/// Scale shifted `lines` into a `size` square and offset them by `margin`.
///
/// `mesh_max` is the extent of the whole mesh once shifted to non-negative
/// coordinates; `local_max` is what [`shift_negatives`] returned for this slice.
pub fn fit_to_canvas(
    lines: &mut [Line2],
    mesh_max: Point2<Real>,
    local_max: Point2<Real>,
    size: Real,
    margin: Real,
) {
    // A zero-width mesh axis keeps its coordinates unscaled.
    let reference = |max: Real| if max > 0.0 { max } else { size };
    let (ref_x, ref_y) = (reference(mesh_max.x), reference(mesh_max.y));

    let offset_x = (size - (local_max.x * size / ref_x)) / 2.0;
    let offset_y = (size - (local_max.y * size / ref_y)) / 2.0;

    for p in lines.iter_mut().flatten() {
        p.x = p.x * size / ref_x + margin + offset_x;
        p.y = p.y * size / ref_y + margin + offset_y;
    }
}

/// Writes every slice it receives as `<directory>/slice_<index>.svg`.
#[derive(Debug, Clone)]
pub struct SvgSink {
    config: SliceConfig,
}

impl SvgSink {
    pub const fn new(config: SliceConfig) -> Self {
        SvgSink { config }
    }

    pub const fn config(&self) -> &SliceConfig {
        &self.config
    }

    /// Build the drawing of `slice`, scaled against the mesh `extent`.
    ///
    /// The same slice, extent and configuration always give the same document.
    pub fn render(&self, slice: &Slice, extent: &Extent) -> Document {
        let size = self.config.canvas_size as Real;
        let margin = self.config.margin as Real;

        let mut lines = project(slice);
        let local_max = shift_negatives(&mut lines);
        fit_to_canvas(
            &mut lines,
            Point2::new(extent.canvas_max_x(), extent.canvas_max_y()),
            local_max,
            size,
            margin,
        );

        let page = self.config.page_size();
        let style = format!(
            "stroke: {}; stroke-width: {};",
            self.config.stroke, self.config.stroke_width
        );

        lines.iter().fold(
            Document::new().set("width", page).set("height", page),
            |document, [a, b]| {
                document.add(
                    Line::new()
                        .set("x1", a.x)
                        .set("y1", a.y)
                        .set("x2", b.x)
                        .set("y2", b.y)
                        .set("stroke-linecap", "round")
                        .set("style", style.clone()),
                )
            },
        )
    }

    /// Path the drawing of slice `index` is written to.
    pub fn path_for(&self, index: usize) -> PathBuf {
        self.config.directory.join(format!("slice_{index}.svg"))
    }

    /// Render `slice` and write it, creating the output directory if needed.
    pub fn write(&self, slice: &Slice, extent: &Extent) -> Result<PathBuf, IoError> {
        std::fs::create_dir_all(&self.config.directory)?;
        let path = self.path_for(slice.index);
        svg::save(&path, &self.render(slice, extent))?;
        info!("slice {} done ({} segments) -> {}", slice.index, slice.len(), path.display());
        Ok(path)
    }
}

impl SliceSink for SvgSink {
    type Error = IoError;

    fn accept(&mut self, slice: &Slice, extent: &Extent) -> Result<(), IoError> {
        self.write(slice, extent).map(|_| ())
    }
}
