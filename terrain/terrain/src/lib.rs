//! Terrain mesh toolkit for qgis2threejs exports.
//!
//! This umbrella crate re-exports the terrain-* crates behind one API:
//! round-tripping terrain through OBJ so elevations can be edited in a
//! modeling tool, and cleaning up artifacts along the mesh boundary.
//!
//! # Quick Start
//!
//! ```no_run
//! use terrain::prelude::*;
//!
//! let mesh = terrain::io::load_json("a0.json").unwrap();
//! println!("bounds: {}", mesh.bounds(Axes::Xy).unwrap());
//!
//! // Edit in OBJ form
//! save_obj(&mesh, "a0.obj", &ExportOptions::default()).unwrap();
//! let imported = import_obj_file("a0.obj", "a0.json", &ImportParams::default()).unwrap();
//!
//! // Clean up the boundary and save
//! let trimmed = trim_edges(&imported.mesh, &TrimParams::default()).unwrap();
//! let smoothed = smooth_edges(&trimmed.mesh, &SmoothParams::default()).unwrap();
//! save_json(&smoothed.mesh, "a0_clean.json").unwrap();
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - `TerrainMesh`, `Bounds`, `Axes`
//! - [`io`] - JSON and OBJ files, OBJ reconciliation
//! - [`edges`] - Edge trimming and smoothing

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

// =============================================================================
// Re-exports
// =============================================================================

/// Core data structures: `TerrainMesh`, `Bounds`, `Axes`.
pub use terrain_types as types;

/// JSON and OBJ file I/O and reconciliation.
pub use terrain_io as io;

/// Edge trimming and smoothing.
pub use terrain_edges as edges;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for terrain processing.
pub mod prelude {
    pub use terrain_types::{Axes, Bounds, MeshError, Point3, TerrainMesh};

    pub use terrain_io::{
        ExportOptions, FaceSource, ImportParams, ImportResult, IoError, import_obj,
        import_obj_file, load_json, save_json, save_obj,
    };

    pub use terrain_edges::{
        EdgeError, SmoothParams, SmoothResult, TrimParams, TrimResult, smooth_edges, trim_edges,
    };
}

// =============================================================================
// Tests
// =============================================================================
