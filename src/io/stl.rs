//! Binary STL import.
//!
//! ```text
//! UINT8[80]    – header, free-form (only inspected for the ASCII marker)
//! UINT32       – number of triangles, little-endian
//! foreach triangle
//!     REAL32[3] – normal (discarded)
//!     REAL32[3] – vertex 1
//!     REAL32[3] – vertex 2
//!     REAL32[3] – vertex 3
//!     UINT16    – attribute byte count (discarded)
//! end
//! ```

use crate::float_types::from_stl;
use crate::io::IoError;
use crate::mesh::{Mesh, Triangle, Vertex};
use log::{info, warn};
use std::io::Cursor;
use std::path::Path;

/// Length of the free-form header.
pub const HEADER_LEN: usize = 80;

/// Length of the little-endian triangle count that follows the header.
pub const COUNT_LEN: usize = 4;

/// Length of one triangle record: normal, three vertices and the attribute field.
pub const RECORD_LEN: usize = 50;

/// ASCII STL files open with `solid <name>`.
pub const ASCII_MARKER: &[u8] = b"solid";

/// True if `header` starts with the text-STL marker.
pub fn is_ascii_stl(header: &[u8]) -> bool {
    header.starts_with(ASCII_MARKER)
}

/// Triangle count declared right after the header, if the data is long enough to hold it.
pub fn declared_triangle_count(stl_data: &[u8]) -> Option<u32> {
    let count = stl_data.get(HEADER_LEN..HEADER_LEN + COUNT_LEN)?;
    Some(u32::from_le_bytes([count[0], count[1], count[2], count[3]]))
}

/// Decode binary STL data held in memory.
///
/// `name` only appears in error messages.
pub fn read_stl(stl_data: &[u8], name: &str) -> Result<Mesh, IoError> {
    if is_ascii_stl(stl_data) {
        warn!("{name} starts with the ASCII STL marker, refusing to read it as binary");
        return Err(IoError::UnsupportedFormat { name: name.to_string() });
    }

    let Some(count) = declared_triangle_count(stl_data) else {
        return Err(IoError::MalformedInput(format!(
            "{name} is {} bytes long, a binary STL needs at least {}",
            stl_data.len(),
            HEADER_LEN + COUNT_LEN
        )));
    };

    let records = stl_data.len() - HEADER_LEN - COUNT_LEN;
    let expected = count as usize * RECORD_LEN;
    if records < expected {
        return Err(IoError::MalformedInput(format!(
            "{name} declares {count} triangles ({expected} bytes) but only {records} bytes follow the header"
        )));
    }

    let mut cursor = Cursor::new(stl_data);
    let stl_reader = stl_io::create_stl_reader(&mut cursor)?;

    let mut triangles = Vec::with_capacity(count as usize);
    for tri_result in stl_reader {
        let tri = tri_result?;
        triangles.push(Triangle::new(tri.vertices.map(|v| {
            Vertex::from_coords(from_stl(v[0]), from_stl(v[1]), from_stl(v[2]))
        })));
    }

    Ok(Mesh::from_triangles(triangles))
}

impl Mesh {
    /// Create a `Mesh` from binary STL data.
    pub fn from_stl(stl_data: &[u8]) -> Result<Mesh, IoError> {
        read_stl(stl_data, "STL data")
    }

    /// Read a binary STL file. The file is read in one call and closed before decoding.
    ///
    /// ```no_run
    /// # use stlslice::mesh::Mesh;
    /// let mesh = Mesh::from_stl_file("model.stl")?;
    /// println!("{} triangles", mesh.len());
    /// # Ok::<(), stlslice::io::IoError>(())
    /// ```
    pub fn from_stl_file<P: AsRef<Path>>(path: P) -> Result<Mesh, IoError> {
        let path = path.as_ref();
        let stl_data = std::fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                IoError::FileNotFound { path: path.to_path_buf() }
            } else {
                IoError::StdIo(e)
            }
        })?;

        let mesh = read_stl(&stl_data, &path.display().to_string())?;
        info!(
            "loaded {} triangles from {}, altitude range [{}, {}]",
            mesh.len(),
            path.display(),
            mesh.extent.min_z(),
            mesh.extent.max_z()
        );
        Ok(mesh)
    }
}
