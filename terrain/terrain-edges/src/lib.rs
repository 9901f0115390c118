//! Edge clean-up for terrain meshes.
//!
//! Terrain exported from a DEM tends to carry artifacts along its outer
//! X/Y boundary. This crate offers two fixes that never touch X or Y:
//!
//! - [`trim_edges`] - drop faces that reach into an outer band
//! - [`smooth_edges`] - pull edge elevations toward the interior mean
//!
//! Both keep every vertex at its index, so meshes stay comparable with the
//! JSON they came from.
//!
//! # Example
//!
//! ```
//! use terrain_edges::{smooth_edges, trim_edges, SmoothParams, TrimParams};
//! use terrain_types::{Point3, TerrainMesh};
//!
//! let mut mesh = TerrainMesh::new();
//! for j in 0..10 {
//!     for i in 0..10 {
//!         mesh.vertices.push(Point3::new(f64::from(i), f64::from(j), 25.0));
//!     }
//! }
//! for j in 0..9 {
//!     for i in 0..9 {
//!         let a = j * 10 + i;
//!         mesh.faces.push([a, a + 1, a + 10]);
//!         mesh.faces.push([a + 1, a + 11, a + 10]);
//!     }
//! }
//!
//! let trimmed = trim_edges(&mesh, &TrimParams::default()).unwrap();
//! println!("{trimmed}");
//!
//! let smoothed = smooth_edges(&trimmed.mesh, &SmoothParams::default()).unwrap();
//! println!("{smoothed}");
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod params;
mod result;
mod smooth;
mod trim;

pub use error::{EdgeError, EdgeResult};
pub use params::{SmoothParams, TrimParams};
pub use result::{InteriorStats, SmoothResult, TrimResult};
pub use smooth::smooth_edges;
pub use trim::trim_edges;
