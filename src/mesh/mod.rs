//! `Mesh` struct: a flat triangle soup plus its extrema, read-only once built.

use crate::float_types::Real;

pub mod extent;
pub mod vertex;

pub use extent::Extent;
pub use vertex::Vertex;

/// Three vertices in file order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub const fn new(vertices: [Vertex; 3]) -> Self {
        Triangle { vertices }
    }

    /// A triangle whose three vertices share one altitude can never cross a
    /// horizontal plane along a line.
    pub fn is_degenerate(&self) -> bool {
        let [a, b, c] = self.altitudes();
        a == b && b == c
    }

    /// Altitude of each vertex, in vertex order.
    pub fn altitudes(&self) -> [Real; 3] {
        self.vertices.map(|v| v.altitude())
    }
}

impl From<[[Real; 3]; 3]> for Triangle {
    fn from(points: [[Real; 3]; 3]) -> Self {
        Triangle::new(points.map(Vertex::from))
    }
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    /// Triangles in the order they were read.
    pub triangles: Vec<Triangle>,

    /// Extrema over every vertex of `triangles`.
    pub extent: Extent,
}

impl Mesh {
    /// Build a mesh from a triangle list, folding the extent over every vertex.
    pub fn from_triangles(triangles: Vec<Triangle>) -> Self {
        let extent = Extent::from_vertices(triangles.iter().flat_map(|t| t.vertices.iter()));
        Mesh { triangles, extent }
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}
