//! Horizontal cross-sections of a [`Mesh`](crate::mesh::Mesh).

use crate::float_types::Real;
use crate::mesh::Triangle;
use nalgebra::Point3;

pub mod assembler;
pub mod intersect;
pub mod planner;

pub use assembler::{SliceSink, Slices, slice_at, slice_mesh};
pub use intersect::{Crossing, classify, intersect};
pub use planner::{Altitudes, SlicePlanner};

/// Where a slicing plane crosses one triangle. Both ends have `z` equal to the slice altitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point3<Real>,
    pub end: Point3<Real>,
}

impl Segment {
    pub const fn new(start: Point3<Real>, end: Point3<Real>) -> Self {
        Segment { start, end }
    }

    /// Cut `triangle` with the plane at `altitude`, if the plane crosses it.
    pub fn cut(altitude: Real, triangle: &Triangle) -> Option<Segment> {
        let mut points = intersect(altitude, triangle);
        match (points.next(), points.next()) {
            (Some(start), Some(end)) => Some(Segment::new(start, end)),
            _ => None,
        }
    }

    pub const fn points(&self) -> [Point3<Real>; 2] {
        [self.start, self.end]
    }
}

/// Every segment cut from a mesh at one altitude.
#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    /// 1-based position of the slice in planner order.
    pub index: usize,
    pub altitude: Real,
    pub segments: Vec<Segment>,
}

impl Slice {
    pub const fn new(index: usize, altitude: Real, segments: Vec<Segment>) -> Self {
        Slice { index, altitude, segments }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segment end points, two per segment.
    pub fn points(&self) -> impl Iterator<Item = Point3<Real>> + '_ {
        self.segments.iter().flat_map(|s| s.points())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cut_returns_none_when_plane_misses() {
        let tri = Triangle::from([[0.0, 0.0, 1.0], [1.0, 0.0, 2.0], [0.0, 1.0, 3.0]]);
        assert_eq!(Segment::cut(5.0, &tri), None);
    }

    #[test]
    fn cut_pairs_the_two_points() {
        let tri = Triangle::from([[0.0, 0.0, 0.0], [2.0, 0.0, 2.0], [0.0, 2.0, 2.0]]);
        let segment = Segment::cut(1.0, &tri).expect("plane crosses");
        assert_eq!(segment.start, Point3::new(1.0, 0.0, 1.0));
        assert_eq!(segment.end, Point3::new(0.0, 1.0, 1.0));
    }
}
