//! Mesh import and slice drawing export.

use std::path::PathBuf;

pub mod stl;

#[cfg(feature = "svg-io")]
pub mod svg;

/// Generic I/O and format errors.
///
/// The drawing writer sits behind the `svg-io` feature; the loader is always available.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// The input path does not resolve to a readable file.
    #[error("cannot find the file {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The file declares itself as a text (ASCII) STL, which is not read.
    #[error("cannot read the ASCII STL {name}, only binary STL is supported")]
    UnsupportedFormat { name: String },

    #[error("Input is malformed: {0}")]
    MalformedInput(String),

    #[error("std::io::Error: {0}")]
    StdIo(#[from] std::io::Error),
}
