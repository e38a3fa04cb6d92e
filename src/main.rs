// main.rs
//
// Command-line driver: read a binary STL, cut it into horizontal slices and
// write one SVG drawing per slice.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use stlslice::SliceConfig;
use stlslice::io::svg::SvgSink;
use stlslice::mesh::Mesh;
use stlslice::slice::{SlicePlanner, slice_mesh};

/// Cut a binary STL model into horizontal SVG cross-sections.
#[derive(Parser, Debug)]
#[command(name = "stlslice", version, about, long_about = None)]
struct Cli {
    /// Number of slices [3-60]
    #[arg(short, long, default_value_t = 5)]
    slices: usize,

    /// Side of a slice drawing [300-1200]
    #[arg(short, long, default_value_t = 500)]
    dimensions: u32,

    /// Minimal margin around a slice drawing [0-300]
    #[arg(short, long, default_value_t = 0)]
    margin: u32,

    /// Contour color, any value accepted by SVG
    #[arg(long, default_value = "black", value_name = "COLOR")]
    stroke: String,

    /// Contour line width [1-5]
    #[arg(long, default_value_t = 1)]
    stroke_width: u32,

    /// Directory receiving the slice drawings
    #[arg(short = 'r', long, default_value = "slices", value_name = "DIR")]
    directory: PathBuf,

    /// Binary STL file to slice
    #[arg(value_name = "STL_MODEL")]
    stl_model: PathBuf,
}

impl Cli {
    fn config(&self) -> SliceConfig {
        SliceConfig {
            slices: self.slices,
            canvas_size: self.dimensions,
            margin: self.margin,
            stroke: self.stroke.clone(),
            stroke_width: self.stroke_width,
            directory: self.directory.clone(),
        }
    }
}

fn run(cli: &Cli) -> Result<usize> {
    let config = cli.config();
    config.validate().context("invalid arguments")?;

    let mesh = Mesh::from_stl_file(&cli.stl_model)
        .with_context(|| format!("cannot load {}", cli.stl_model.display()))?;
    let planner = SlicePlanner::new(config.slices, &mesh.extent)
        .with_context(|| format!("nothing to slice in {}", cli.stl_model.display()))?;

    let written = slice_mesh(&mesh, &planner, SvgSink::new(config))
        .context("cannot write slice drawings")?;
    Ok(written)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(written) => {
            log::info!("{written} slices written to {}", cli.directory.display());
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!(">> {err:#}");
            ExitCode::FAILURE
        },
    }
}
