//! Terrain mesh converter.
//!
//! Moves qgis2threejs terrain between its JSON form and OBJ, so elevations
//! can be edited in a modeling tool without breaking geo-referencing.
//!
//! # Commands
//!
//! - `terrain-mesh to-obj <input.json> [output.obj]`
//! - `terrain-mesh to-json <input.obj> <original.json> [output.json]`
//! - `terrain-mesh trim <input.json> [output.json] [--percent 0.02]`
//! - `terrain-mesh smooth <input.json> [output.json] [--distance 0.05] [--strength 0.5]`
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

mod clean;
mod convert;
mod paths;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use terrain::prelude::ImportParams;
use tracing_subscriber::EnvFilter;

/// Convert qgis2threejs terrain between JSON and OBJ
#[derive(Parser)]
#[command(name = "terrain-mesh")]
#[command(about = "Convert qgis2threejs terrain between JSON and OBJ", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export terrain JSON to OBJ for editing
    ToObj {
        /// Terrain JSON file (e.g. a0.json)
        input: PathBuf,

        /// Output OBJ file [default: input with .obj extension]
        output: Option<PathBuf>,
    },

    /// Convert an edited OBJ back to terrain JSON
    ToJson {
        /// Edited OBJ file
        input: PathBuf,

        /// The JSON the OBJ was exported from
        original: PathBuf,

        /// Output JSON file [default: input with .json extension]
        output: Option<PathBuf>,

        /// Largest X/Y change accepted without --allow-xy-drift
        #[arg(long, default_value_t = 0.001)]
        xy_tolerance: f64,

        /// Accept an OBJ whose vertex and face counts both changed
        #[arg(long)]
        allow_topology_change: bool,

        /// Accept X/Y changes beyond the tolerance
        #[arg(long)]
        allow_xy_drift: bool,
    },

    /// Remove faces along the mesh boundary
    Trim {
        /// Terrain JSON file
        input: PathBuf,

        /// Output JSON file [default: <input>_trimmed.json]
        output: Option<PathBuf>,

        /// Fraction of width/depth trimmed from each side
        #[arg(long, default_value_t = 0.02)]
        percent: f64,
    },

    /// Blend edge elevations toward the interior
    Smooth {
        /// Terrain JSON file
        input: PathBuf,

        /// Output JSON file [default: <input>_smoothed.json]
        output: Option<PathBuf>,

        /// Width of the edge zone as a fraction of width/depth
        #[arg(long, default_value_t = 0.05)]
        distance: f64,

        /// Blend strength (0 = no change, 1 = full blend)
        #[arg(long, default_value_t = 0.5)]
        strength: f64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::ToObj { input, output } => {
            let output = paths::resolve(output, || paths::with_extension(&input, "obj"));
            convert::to_obj(&input, &output)
        }
        Commands::ToJson {
            input,
            original,
            output,
            xy_tolerance,
            allow_topology_change,
            allow_xy_drift,
        } => {
            let output = paths::resolve(output, || paths::with_extension(&input, "json"));
            let params = ImportParams::default()
                .with_xy_tolerance(xy_tolerance)
                .allow_topology_change(allow_topology_change)
                .allow_xy_drift(allow_xy_drift);
            convert::to_json(&input, &original, &output, &params)
        }
        Commands::Trim {
            input,
            output,
            percent,
        } => {
            let output = paths::resolve(output, || paths::with_stem_suffix(&input, "_trimmed"));
            clean::trim(&input, &output, percent)
        }
        Commands::Smooth {
            input,
            output,
            distance,
            strength,
        } => {
            let output = paths::resolve(output, || paths::with_stem_suffix(&input, "_smoothed"));
            clean::smooth(&input, &output, distance, strength)
        }
    }
}

fn report_written(path: &Path) {
    println!("{} Wrote {}", "✓".green(), path.display().bold());
}
