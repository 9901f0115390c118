//! Core terrain mesh types.
//!
//! This crate provides the foundational types shared by the terrain tools:
//!
//! - [`TerrainMesh`] - An indexed triangle mesh of terrain samples
//! - [`Bounds`] - Axis-aligned extents over X/Y (and optionally Z)
//! - [`Axes`] - Which axes a bounds computation covers
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64` in whatever
//! projected units the source document uses. X and Y are the planar
//! (geo-referenced) axes, Z is elevation.
//!
//! # Layout
//!
//! Vertices are stored as `Point3<f64>` and faces as `[u32; 3]` index
//! triples. Both convert losslessly to and from the flat
//! `[x0, y0, z0, x1, ...]` / `[a0, b0, c0, ...]` arrays used on disk.
//! Vertex indices are stable: no operation in this workspace reorders or
//! removes vertices.
//!
//! # Example
//!
//! ```
//! use terrain_types::{Axes, TerrainMesh};
//!
//! let positions = [0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0];
//! let indices = [0, 1, 2, 1, 3, 2];
//!
//! let mesh = TerrainMesh::from_flat(&positions, &indices).unwrap();
//! assert_eq!(mesh.vertex_count(), 4);
//! assert_eq!(mesh.face_count(), 2);
//!
//! let bounds = mesh.bounds(Axes::Xy).unwrap();
//! assert_eq!(bounds.x.min, 0.0);
//! assert_eq!(bounds.y.max, 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod bounds;
mod error;
mod mesh;

pub use bounds::{Axes, AxisRange, Bounds};
pub use error::{MeshError, MeshResult};
pub use mesh::TerrainMesh;

// Re-export nalgebra types for convenience
pub use nalgebra::Point3;
