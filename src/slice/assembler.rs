//! Drives the intersection of every triangle with every planned altitude.

use crate::float_types::Real;
use crate::mesh::{Extent, Mesh};
use crate::slice::planner::{Altitudes, SlicePlanner};
use crate::slice::{Segment, Slice};
use log::{debug, info};
use std::convert::Infallible;
use std::iter::Enumerate;

/// Receives finished slices, one at a time, in ascending altitude order.
///
/// `extent` is the extent of the whole mesh, so that every slice can be scaled
/// against the same reference.
pub trait SliceSink {
    type Error;

    fn accept(&mut self, slice: &Slice, extent: &Extent) -> Result<(), Self::Error>;
}

/// Collects slices in memory.
impl SliceSink for Vec<Slice> {
    type Error = Infallible;

    fn accept(&mut self, slice: &Slice, _extent: &Extent) -> Result<(), Self::Error> {
        self.push(slice.clone());
        Ok(())
    }
}

impl<K: SliceSink + ?Sized> SliceSink for &mut K {
    type Error = K::Error;

    fn accept(&mut self, slice: &Slice, extent: &Extent) -> Result<(), Self::Error> {
        (**self).accept(slice, extent)
    }
}

/// Cut every triangle of `mesh` at `altitude`. Triangles the plane misses add nothing.
pub fn slice_at(mesh: &Mesh, index: usize, altitude: Real) -> Slice {
    let segments = mesh
        .triangles
        .iter()
        .filter_map(|tri| Segment::cut(altitude, tri))
        .collect();
    Slice::new(index, altitude, segments)
}

/// Lazy sequence of fully populated slices, lowest altitude first.
#[derive(Clone, Debug)]
pub struct Slices<'a> {
    mesh: &'a Mesh,
    altitudes: Enumerate<Altitudes>,
}

impl<'a> Slices<'a> {
    pub fn new(mesh: &'a Mesh, planner: &SlicePlanner) -> Self {
        Slices { mesh, altitudes: planner.altitudes().enumerate() }
    }
}

impl Iterator for Slices<'_> {
    type Item = Slice;

    fn next(&mut self) -> Option<Slice> {
        let (k, altitude) = self.altitudes.next()?;
        let slice = slice_at(self.mesh, k + 1, altitude);
        debug!(
            "slice {} at altitude {}: {} segments",
            slice.index,
            slice.altitude,
            slice.len()
        );
        Some(slice)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.altitudes.size_hint()
    }
}

impl ExactSizeIterator for Slices<'_> {}

/// Slice `mesh` at every altitude of `planner`, handing each slice to `sink`
/// before the next one is computed. Stops at the first sink error.
///
/// Returns the number of slices handed over.
pub fn slice_mesh<K: SliceSink>(
    mesh: &Mesh,
    planner: &SlicePlanner,
    mut sink: K,
) -> Result<usize, K::Error> {
    info!(
        "slicing {} triangles into {} slices over [{}, {}]",
        mesh.len(),
        planner.count(),
        mesh.extent.min_z(),
        mesh.extent.max_z()
    );

    let mut handed = 0;
    for slice in Slices::new(mesh, planner) {
        sink.accept(&slice, &mesh.extent)?;
        handed += 1;
    }

    info!("slicing complete, {handed} slices written");
    Ok(handed)
}
