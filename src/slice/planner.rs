//! Evenly spaced slicing altitudes over a mesh's vertical range.

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::mesh::Extent;

/// Plans `count` slices between the lowest and highest altitude of a mesh.
///
/// Slice `k` sits at `min_z + k * (max_z - min_z) / count`, truncated toward zero.
/// The top of the range is never reached: `count` slices cover `count` equal
/// steps starting at `min_z`, so `max_z` itself is not a slice altitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlicePlanner {
    count: usize,
    min_z: Real,
    max_z: Real,
}

impl SlicePlanner {
    /// Plan over the vertical range of `extent`.
    ///
    /// Fails with [`ValidationError::EmptyMesh`] when the range is not finite,
    /// which is what a mesh without triangles leaves behind.
    pub fn new(count: usize, extent: &Extent) -> Result<Self, ValidationError> {
        Self::from_range(count, extent.min_z(), extent.max_z())
    }

    pub fn from_range(count: usize, min_z: Real, max_z: Real) -> Result<Self, ValidationError> {
        if !(min_z.is_finite() && max_z.is_finite()) || min_z > max_z {
            return Err(ValidationError::EmptyMesh { min_z, max_z });
        }
        Ok(SlicePlanner { count, min_z, max_z })
    }

    pub const fn count(&self) -> usize {
        self.count
    }

    /// A fresh pass over the planned altitudes. Each call starts from the bottom again.
    pub const fn altitudes(&self) -> Altitudes {
        Altitudes { planner: *self, next: 0 }
    }

    /// Altitude of the zero-based slice `k`.
    pub fn altitude(&self, k: usize) -> Real {
        (self.min_z + k as Real * (self.max_z - self.min_z) / self.count as Real).trunc()
    }
}

/// Lazy iterator over the altitudes of a [`SlicePlanner`], lowest first.
#[derive(Clone, Debug)]
pub struct Altitudes {
    planner: SlicePlanner,
    next: usize,
}

impl Iterator for Altitudes {
    type Item = Real;

    fn next(&mut self) -> Option<Real> {
        if self.next >= self.planner.count {
            return None;
        }
        let altitude = self.planner.altitude(self.next);
        self.next += 1;
        Some(altitude)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.planner.count - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Altitudes {}
