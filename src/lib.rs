//! Slice a binary **STL** triangle mesh into a stack of horizontal cross-sections,
//! each drawn as its own SVG document: layered-manufacturing previews or
//! laser-cutting templates.
//!
//! The pipeline is strictly linear:
//! [`Mesh`] (loaded by [`io::stl`]) → [`slice::SlicePlanner`] (altitudes) →
//! [`slice::intersect`] (per triangle) → [`slice::Slices`] (per altitude) →
//! a [`slice::SliceSink`], such as the SVG writer in `io::svg`.
//!
//! ```no_run
//! # use stlslice::{Mesh, SliceConfig};
//! # use stlslice::slice::{SlicePlanner, slice_mesh};
//! # use stlslice::io::svg::SvgSink;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SliceConfig::default();
//! config.validate()?;
//! let mesh = Mesh::from_stl_file("model.stl")?;
//! let planner = SlicePlanner::new(config.slices, &mesh.extent)?;
//! slice_mesh(&mesh, &planner, SvgSink::new(config))?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **svg-io**: write slices as SVG documents
//! - **cli**: the `stlslice` binary (`clap`, `env_logger`, `anyhow`), implies `svg-io`
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::all)]

pub mod config;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod mesh;
pub mod slice;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use config::SliceConfig;
pub use mesh::{Mesh, Triangle, Vertex};
pub use slice::{Segment, Slice};
