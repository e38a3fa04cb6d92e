//! Where a horizontal plane crosses a single triangle.

use crate::float_types::Real;
use crate::mesh::{Triangle, Vertex};
use nalgebra::Point3;

/// How a triangle sits relative to a horizontal plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Crossing {
    /// The plane misses the triangle, only touches its lowest or highest
    /// altitude, or the triangle is flat.
    NoIntersection,
    /// One vertex lies alone on one side of the plane, the two `opposite`
    /// vertices on the other. "Above" means strictly greater than the altitude.
    Intersects { isolated: Vertex, opposite: [Vertex; 2] },
}

impl Crossing {
    /// `(isolated, opposite)` vertex pairs whose edges the plane cuts, in vertex order.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + use<> {
        let pairs = match *self {
            Crossing::NoIntersection => None,
            Crossing::Intersects { isolated, opposite: [a, b] } => {
                Some([(isolated, a), (isolated, b)])
            },
        };
        pairs.into_iter().flatten()
    }

    pub const fn is_intersecting(&self) -> bool {
        matches!(self, Crossing::Intersects { .. })
    }
}

/// Partition the vertices of `triangle` around `altitude`.
///
/// Vertices strictly above the plane go on one side, vertices at or below it on
/// the other. The side holding a single vertex gives the isolated vertex.
///
/// Only a plane strictly between the lowest and highest vertex crosses the
/// triangle: a plane grazing its bottom or top, or a flat triangle, gives
/// [`Crossing::NoIntersection`].
pub fn classify(altitude: Real, triangle: &Triangle) -> Crossing {
    if triangle.is_degenerate() {
        return Crossing::NoIntersection;
    }

    let [z0, z1, z2] = triangle.altitudes();
    let (lowest, highest) = (z0.min(z1).min(z2), z0.max(z1).max(z2));
    if !(lowest < altitude && altitude < highest) {
        return Crossing::NoIntersection;
    }

    let [v0, v1, v2] = triangle.vertices;
    let above = [v0, v1, v2].map(|v| v.altitude() > altitude);

    let (isolated, opposite) = match above {
        [true, true, true] | [false, false, false] => return Crossing::NoIntersection,
        [true, false, false] | [false, true, true] => (v0, [v1, v2]),
        [false, true, false] | [true, false, true] => (v1, [v0, v2]),
        [false, false, true] | [true, true, false] => (v2, [v0, v1]),
    };

    Crossing::Intersects { isolated, opposite }
}

/// Point where the edge from `isolated` to `opposite` meets the plane at `altitude`.
///
/// The returned z is `altitude` exactly rather than the interpolated value.
pub fn edge_point(isolated: &Vertex, opposite: &Vertex, altitude: Real) -> Point3<Real> {
    let t = (altitude - isolated.altitude()) / (opposite.altitude() - isolated.altitude());
    let p = isolated.interpolate(opposite, t).pos;
    Point3::new(p.x, p.y, altitude)
}

/// Intersection points of the plane at `altitude` with `triangle`: two points
/// for a crossing triangle, none otherwise.
pub fn intersect(altitude: Real, triangle: &Triangle) -> impl Iterator<Item = Point3<Real>> + use<> {
    classify(altitude, triangle)
        .edges()
        .map(move |(isolated, opposite)| edge_point(&isolated, &opposite, altitude))
}
