//! Terrain mesh file I/O.
//!
//! This crate converts terrain meshes between two text formats:
//!
//! - **JSON** - qgis2threejs terrain documents (`triangles.v` / `triangles.f`)
//! - **OBJ** (Wavefront) - ASCII, for editing elevations in external tools
//!
//! and reconciles an edited OBJ against the JSON it was exported from, so
//! the result can be loaded back by the web viewer without breaking its
//! geo-referencing.
//!
//! # Example
//!
//! ```no_run
//! use terrain_io::{import_obj_file, load_json, save_json, save_obj, ExportOptions, ImportParams};
//!
//! // Export for editing
//! let mesh = load_json("a0.json").unwrap();
//! save_obj(&mesh, "a0.obj", &ExportOptions::default().with_source_name("a0.json")).unwrap();
//!
//! // ...edit Z values in a modeling tool...
//!
//! // Bring the edits back
//! let result = import_obj_file("a0.obj", "a0.json", &ImportParams::default()).unwrap();
//! save_json(&result.mesh, "a0_edited.json").unwrap();
//! ```
//!
//! # Index Conventions
//!
//! JSON face indices are 0-based, OBJ face indices are 1-based. The
//! conversion happens only at the OBJ boundary; [`TerrainMesh`] is always
//! 0-based.
//!
//! [`TerrainMesh`]: terrain_types::TerrainMesh

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod file;
mod import;
mod json;
mod obj;

pub use error::{IoError, IoResult};
pub use import::{
    DriftReport, FaceSource, ImportParams, ImportResult, ImportWarning, import_obj,
    import_obj_file, reconcile,
};
pub use json::{load_json, parse_json, save_json, to_json_string};
pub use obj::{ExportOptions, ParsedObj, export_obj, load_obj, parse_obj, save_obj};
