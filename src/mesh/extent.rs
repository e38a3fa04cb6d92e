//! Axis-aligned extrema of a mesh, accumulated once at load time.

use crate::float_types::Real;
use crate::mesh::vertex::Vertex;
use nalgebra::Point3;

/// Minimum and maximum coordinates over every vertex of a mesh.
///
/// An extent over no vertices keeps its seed values: `mins` at `+inf` and `maxs` at `-inf`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub mins: Point3<Real>,
    pub maxs: Point3<Real>,
}

impl Default for Extent {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Extent {
    /// Seed of the fold, before any vertex has been seen.
    pub const EMPTY: Extent = Extent {
        mins: Point3::new(Real::INFINITY, Real::INFINITY, Real::INFINITY),
        maxs: Point3::new(Real::NEG_INFINITY, Real::NEG_INFINITY, Real::NEG_INFINITY),
    };

    /// Fold every vertex into an extent.
    pub fn from_vertices<'a, I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = &'a Vertex>,
    {
        vertices.into_iter().fold(Self::EMPTY, |acc, v| acc.include(v))
    }

    /// Return the extent grown to contain `vertex`.
    #[must_use]
    pub fn include(self, vertex: &Vertex) -> Self {
        let p = vertex.pos;
        Extent {
            mins: Point3::new(
                self.mins.x.min(p.x),
                self.mins.y.min(p.y),
                self.mins.z.min(p.z),
            ),
            maxs: Point3::new(
                self.maxs.x.max(p.x),
                self.maxs.y.max(p.y),
                self.maxs.z.max(p.z),
            ),
        }
    }

    /// Lowest altitude of the mesh.
    pub fn min_z(&self) -> Real {
        self.mins.z
    }

    /// Highest altitude of the mesh.
    pub fn max_z(&self) -> Real {
        self.maxs.z
    }

    /// Largest x once negative coordinates have been shifted to start at zero.
    pub fn canvas_max_x(&self) -> Real {
        self.maxs.x + self.mins.x.min(0.0).abs()
    }

    /// Largest y once negative coordinates have been shifted to start at zero.
    pub fn canvas_max_y(&self) -> Real {
        self.maxs.y + self.mins.y.min(0.0).abs()
    }

    /// True when the vertical range is not a finite interval, i.e. no vertex was folded in.
    pub fn is_empty(&self) -> bool {
        !(self.mins.z.is_finite() && self.maxs.z.is_finite()) || self.mins.z > self.maxs.z
    }
}
