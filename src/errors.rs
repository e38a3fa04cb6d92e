//! Validation errors

use crate::float_types::Real;
use std::ops::RangeInclusive;

/// Everything that can be wrong with a slicing job before any geometry is computed.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// (SliceCount) The requested number of slices is outside the accepted range
    #[error("(SliceCount) {value} slices requested, expected {}..={}", .range.start(), .range.end())]
    SliceCount { value: usize, range: RangeInclusive<usize> },
    /// (CanvasSize) The drawing side length is outside the accepted range
    #[error("(CanvasSize) canvas size {value} is outside {}..={}", .range.start(), .range.end())]
    CanvasSize { value: u32, range: RangeInclusive<u32> },
    /// (Margin) The margin around a drawing is outside the accepted range
    #[error("(Margin) margin {value} is outside {}..={}", .range.start(), .range.end())]
    Margin { value: u32, range: RangeInclusive<u32> },
    /// (StrokeWidth) The contour stroke width is outside the accepted range
    #[error("(StrokeWidth) stroke width {value} is outside {}..={}", .range.start(), .range.end())]
    StrokeWidth { value: u32, range: RangeInclusive<u32> },
    /// (EmptyMesh) The mesh has no triangles, so its vertical extent is not finite
    #[error("(EmptyMesh) cannot plan slices over the altitude range [{min_z}, {max_z}]")]
    EmptyMesh { min_z: Real, max_z: Real },
}
