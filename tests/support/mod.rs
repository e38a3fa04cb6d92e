//! Test support library
//! Provides mesh builders and STL fixtures for the integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use stlslice::{Triangle, float_types::Real};

/// Axis-aligned box `[0, sx] x [0, sy] x [0, sz]` as 12 outward-facing triangles.
pub fn cuboid(sx: Real, sy: Real, sz: Real) -> Vec<Triangle> {
    let p = |x: Real, y: Real, z: Real| [x * sx, y * sy, z * sz];
    // Each face as a quad, split along its first diagonal.
    let quads = [
        [p(0., 0., 0.), p(0., 1., 0.), p(1., 1., 0.), p(1., 0., 0.)], // bottom
        [p(0., 0., 1.), p(1., 0., 1.), p(1., 1., 1.), p(0., 1., 1.)], // top
        [p(0., 0., 0.), p(1., 0., 0.), p(1., 0., 1.), p(0., 0., 1.)], // front
        [p(0., 1., 0.), p(0., 1., 1.), p(1., 1., 1.), p(1., 1., 0.)], // back
        [p(0., 0., 0.), p(0., 0., 1.), p(0., 1., 1.), p(0., 1., 0.)], // left
        [p(1., 0., 0.), p(1., 1., 0.), p(1., 1., 1.), p(1., 0., 1.)], // right
    ];
    quads
        .iter()
        .flat_map(|[a, b, c, d]| [Triangle::from([*a, *b, *c]), Triangle::from([*a, *c, *d])])
        .collect()
}

/// Cube of side `size` with its lower corner at the origin.
pub fn cube(size: Real) -> Vec<Triangle> {
    cuboid(size, size, size)
}

/// Move every vertex by `(dx, dy, dz)`.
pub fn translated(triangles: &[Triangle], dx: Real, dy: Real, dz: Real) -> Vec<Triangle> {
    triangles
        .iter()
        .map(|t| Triangle::from(t.vertices.map(|v| [v.pos.x + dx, v.pos.y + dy, v.pos.z + dz])))
        .collect()
}

/// Encode triangles as binary STL with `stl_io`.
#[allow(clippy::unnecessary_cast)]
pub fn stl_bytes(triangles: &[Triangle]) -> Vec<u8> {
    use stl_io::{Normal, Vertex, write_stl};

    let stl_triangles: Vec<stl_io::Triangle> = triangles
        .iter()
        .map(|t| stl_io::Triangle {
            normal: Normal::new([0.0, 0.0, 0.0]),
            vertices: t
                .vertices
                .map(|v| Vertex::new([v.pos.x as f32, v.pos.y as f32, v.pos.z as f32])),
        })
        .collect();

    let mut out = Vec::new();
    write_stl(&mut out, stl_triangles.iter()).expect("writing to a Vec cannot fail");
    out
}

/// Write triangles as a binary STL file named `name` inside `dir`.
pub fn write_stl_file(dir: &Path, name: &str, triangles: &[Triangle]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, stl_bytes(triangles)).expect("temp dir is writable");
    path
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}
