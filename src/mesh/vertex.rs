//! Struct and functions for working with the `Vertex`s from which `Triangle`s are composed.

use crate::float_types::Real;
use nalgebra::Point3;

/// A vertex of a mesh triangle. Only the position is kept; STL facet normals are discarded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub pos: Point3<Real>,
}

impl Vertex {
    /// Create a new [`Vertex`] at `pos`.
    ///
    /// Coordinates are stored verbatim; NaN or infinite values are not sanitised.
    #[inline]
    pub const fn new(pos: Point3<Real>) -> Self {
        Vertex { pos }
    }

    /// Shorthand for `Vertex::new(Point3::new(x, y, z))`.
    #[inline]
    pub fn from_coords(x: Real, y: Real, z: Real) -> Self {
        Vertex::new(Point3::new(x, y, z))
    }

    /// Coordinate on the slicing axis.
    #[inline]
    pub fn altitude(&self) -> Real {
        self.pos.z
    }

    /// Return the linear interpolation between `self` (`t = 0`) and `other` (`t = 1`).
    pub fn interpolate(&self, other: &Vertex, t: Real) -> Vertex {
        // p(t) = p0 + t * (p1 - p0)
        Vertex::new(self.pos + (other.pos - self.pos) * t)
    }
}

impl From<[Real; 3]> for Vertex {
    fn from([x, y, z]: [Real; 3]) -> Self {
        Vertex::from_coords(x, y, z)
    }
}
