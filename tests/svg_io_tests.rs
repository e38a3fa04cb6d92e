#![cfg(feature = "svg-io")]

mod support;

use stlslice::{
    Mesh, Slice, SliceConfig,
    float_types::Real,
    io::{IoError, svg::SvgSink},
    slice::{SlicePlanner, Slices, slice_mesh},
};
use support::{cube, cuboid, translated};

/// Every value of attribute `name` in an SVG document, in document order.
fn attribute_values(text: &str, name: &str) -> Vec<Real> {
    let marker = format!(" {name}=\"");
    text.split(marker.as_str())
        .skip(1)
        .map(|rest| {
            let end = rest.find('"').expect("closing quote");
            rest[..end].parse().expect("numeric attribute")
        })
        .collect()
}

#[test]
fn one_drawing_per_slice_in_a_fresh_directory() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let out = dir.path().join("nested").join("slices");
    let config = SliceConfig { directory: out.clone(), ..Default::default() };

    let mesh = Mesh::from_triangles(cube(10.0));
    let planner = SlicePlanner::new(config.slices, &mesh.extent)?;
    let written = slice_mesh(&mesh, &planner, SvgSink::new(config))?;
    assert_eq!(written, 5);

    for index in 1..=5 {
        let path = out.join(format!("slice_{index}.svg"));
        let text = std::fs::read_to_string(&path)?;
        assert!(text.contains(r#"width="500""#), "{}", path.display());
        let expected_lines = if index == 1 { 0 } else { 8 };
        assert_eq!(text.matches("<line").count(), expected_lines, "{}", path.display());
    }
    assert!(!out.join("slice_0.svg").exists());
    assert!(!out.join("slice_6.svg").exists());
    Ok(())
}

#[test]
fn rewriting_a_slice_gives_identical_bytes() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let sink = SvgSink::new(SliceConfig {
        directory: dir.path().to_path_buf(),
        margin: 25,
        stroke: "#336699".into(),
        stroke_width: 3,
        ..Default::default()
    });

    let mesh = Mesh::from_triangles(cuboid(12.0, 4.0, 9.0));
    let planner = SlicePlanner::new(3, &mesh.extent)?;
    let slice = Slices::new(&mesh, &planner).nth(1).expect("three slices");

    let path = sink.write(&slice, &mesh.extent)?;
    let first = std::fs::read(&path)?;
    sink.write(&slice, &mesh.extent)?;
    let second = std::fs::read(&path)?;

    assert_eq!(first, second);
    assert_eq!(sink.render(&slice, &mesh.extent).to_string(), sink.render(&slice, &mesh.extent).to_string());
    Ok(())
}

#[test]
fn negative_mesh_is_drawn_inside_the_page() -> Result<(), Box<dyn std::error::Error>> {
    let config = SliceConfig { canvas_size: 400, margin: 30, ..Default::default() };
    let (size, margin) = (config.canvas_size as Real, config.margin as Real);
    let sink = SvgSink::new(config);

    let mesh = Mesh::from_triangles(translated(&cube(10.0), -5.0, -5.0, -5.0));
    let planner = SlicePlanner::new(5, &mesh.extent)?;

    for slice in Slices::new(&mesh, &planner).filter(|s| !s.is_empty()) {
        let text = sink.render(&slice, &mesh.extent).to_string();
        assert!(text.contains(r#"width="460""#));

        let coords: Vec<Real> = ["x1", "y1", "x2", "y2"]
            .iter()
            .flat_map(|name| attribute_values(&text, name))
            .collect();
        assert_eq!(coords.len(), 4 * slice.len());
        for c in coords {
            assert!(c >= margin - 1e-3 && c <= margin + size + 1e-3, "{c} outside the canvas");
        }
    }
    Ok(())
}

#[test]
fn slices_off_the_origin_are_centred_on_the_page() -> Result<(), Box<dyn std::error::Error>> {
    let config = SliceConfig { canvas_size: 500, margin: 15, ..Default::default() };
    let centre = (config.margin + config.canvas_size / 2) as Real;
    let sink = SvgSink::new(config);

    let mesh = Mesh::from_triangles(translated(&cube(10.0), 20.0, 20.0, 0.0));
    let planner = SlicePlanner::new(5, &mesh.extent)?;

    for slice in Slices::new(&mesh, &planner).filter(|s| !s.is_empty()) {
        let text = sink.render(&slice, &mesh.extent).to_string();
        for axis in [["x1", "x2"], ["y1", "y2"]] {
            let coords: Vec<Real> = axis.iter().flat_map(|name| attribute_values(&text, name)).collect();
            let lo = coords.iter().cloned().fold(Real::INFINITY, Real::min);
            let hi = coords.iter().cloned().fold(Real::NEG_INFINITY, Real::max);
            assert!(((lo + hi) / 2.0 - centre).abs() < 1e-3, "{axis:?} spans [{lo}, {hi}]");
        }
    }
    Ok(())
}

#[test]
fn style_carries_stroke_settings() {
    let sink = SvgSink::new(SliceConfig { stroke: "green".into(), stroke_width: 4, ..Default::default() });
    let mesh = Mesh::from_triangles(cube(2.0));
    let slice: Slice = stlslice::slice::slice_at(&mesh, 1, 1.0);
    let text = sink.render(&slice, &mesh.extent).to_string();
    assert_eq!(text.matches("stroke: green; stroke-width: 4;").count(), slice.len());
}

#[test]
fn unwritable_directory_is_an_io_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let blocker = dir.path().join("taken");
    std::fs::write(&blocker, b"not a directory")?;

    let mesh = Mesh::from_triangles(cube(10.0));
    let planner = SlicePlanner::new(3, &mesh.extent)?;
    let sink = SvgSink::new(SliceConfig { directory: blocker, ..Default::default() });

    assert!(matches!(slice_mesh(&mesh, &planner, sink), Err(IoError::StdIo(_))));
    Ok(())
}
