//! Slicing and drawing parameters.

use crate::errors::ValidationError;
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Accepted number of slices.
pub const SLICE_COUNT: RangeInclusive<usize> = 3..=60;
/// Accepted side length of a drawing, in user units, margin excluded.
pub const CANVAS_SIZE: RangeInclusive<u32> = 300..=1200;
/// Accepted margin around a drawing.
pub const MARGIN: RangeInclusive<u32> = 0..=300;
/// Accepted stroke width of contour lines.
pub const STROKE_WIDTH: RangeInclusive<u32> = 1..=5;

/// Parameters of one slicing job.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceConfig {
    /// Number of slices to cut.
    pub slices: usize,

    /// Side of the square drawing area.
    pub canvas_size: u32,

    /// Blank border added on every side of the drawing area.
    pub margin: u32,

    /// Contour color, any value SVG accepts for `stroke`.
    pub stroke: String,

    pub stroke_width: u32,

    /// Directory receiving `slice_<index>.svg`.
    pub directory: PathBuf,
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self {
            slices: 5,
            canvas_size: 500,
            margin: 0,
            stroke: "black".to_string(),
            stroke_width: 1,
            directory: PathBuf::from("slices"),
        }
    }
}

impl SliceConfig {
    /// Check every bounded parameter, reporting the first one out of range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !SLICE_COUNT.contains(&self.slices) {
            return Err(ValidationError::SliceCount { value: self.slices, range: SLICE_COUNT });
        }
        if !CANVAS_SIZE.contains(&self.canvas_size) {
            return Err(ValidationError::CanvasSize { value: self.canvas_size, range: CANVAS_SIZE });
        }
        if !MARGIN.contains(&self.margin) {
            return Err(ValidationError::Margin { value: self.margin, range: MARGIN });
        }
        if !STROKE_WIDTH.contains(&self.stroke_width) {
            return Err(ValidationError::StrokeWidth { value: self.stroke_width, range: STROKE_WIDTH });
        }
        Ok(())
    }

    /// Full side of a drawing, margins included.
    pub const fn page_size(&self) -> u32 {
        self.canvas_size + 2 * self.margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SliceConfig::default().validate().is_ok());
    }

    #[test]
    fn bounds_are_inclusive() {
        let config = SliceConfig {
            slices: 60,
            canvas_size: 300,
            margin: 300,
            stroke_width: 5,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.page_size(), 900);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let base = SliceConfig::default();
        let cases = [
            SliceConfig { slices: 2, ..base.clone() },
            SliceConfig { slices: 61, ..base.clone() },
            SliceConfig { canvas_size: 1201, ..base.clone() },
            SliceConfig { margin: 301, ..base.clone() },
            SliceConfig { stroke_width: 0, ..base.clone() },
        ];
        for config in cases {
            assert!(config.validate().is_err(), "{config:?}");
        }
    }

    #[test]
    fn reports_the_offending_parameter() {
        let config = SliceConfig { stroke_width: 9, ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::StrokeWidth { value: 9, .. })
        ));
    }
}
