//! qgis2threejs terrain JSON documents.
//!
//! The document stores a single triangle mesh as two flat arrays:
//!
//! ```text
//! { "triangles": { "v": [x0,y0,z0, x1,y1,z1, ...], "f": [a0,b0,c0, ...] } }
//! ```
//!
//! Face indices are 0-based. Output is written with compact separators,
//! matching what the web viewer ships.

use std::path::Path;

use serde::{Deserialize, Serialize};
use terrain_types::TerrainMesh;
use tracing::{debug, info};

use crate::error::{IoError, IoResult};
use crate::file::{read_text, write_text};

#[derive(Debug, Serialize, Deserialize)]
struct TerrainDocument {
    triangles: Triangles,
}

#[derive(Debug, Serialize, Deserialize)]
struct Triangles {
    v: Vec<f64>,
    #[serde(default)]
    f: Vec<u32>,
}

/// Parse a terrain mesh from JSON text.
///
/// A missing `f` array is read as a mesh without faces.
///
/// # Errors
///
/// Returns [`IoError::InvalidJson`] if the text is not valid JSON or lacks
/// `triangles`/`v`, and [`IoError::Mesh`] if the arrays do not form a valid
/// mesh (partial triples, dangling indices).
///
/// # Example
///
/// ```
/// use terrain_io::parse_json;
///
/// let mesh = parse_json(r#"{"triangles":{"v":[0,0,1,1,0,1,0,1,1],"f":[0,1,2]}}"#).unwrap();
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
///
/// assert!(parse_json(r#"{"vertices":[]}"#).is_err());
/// ```
pub fn parse_json(text: &str) -> IoResult<TerrainMesh> {
    let document: TerrainDocument =
        serde_json::from_str(text).map_err(|e| IoError::InvalidJson {
            message: e.to_string(),
        })?;

    let Triangles { v, f } = document.triangles;
    debug!(values = v.len(), indices = f.len(), "parsed terrain JSON");

    Ok(TerrainMesh::from_flat(&v, &f)?)
}

/// Serialize a terrain mesh to compact JSON text.
///
/// # Errors
///
/// Returns [`IoError::Mesh`] if the mesh has dangling face indices, or
/// [`IoError::InvalidMesh`] if a coordinate is not finite.
pub fn to_json_string(mesh: &TerrainMesh) -> IoResult<String> {
    mesh.validate()?;

    for p in &mesh.vertices {
        if !p.coords.iter().all(|c| c.is_finite()) {
            return Err(IoError::invalid_mesh(format!(
                "non-finite coordinate ({}, {}, {}) cannot be written as JSON",
                p.x, p.y, p.z
            )));
        }
    }

    let document = TerrainDocument {
        triangles: Triangles {
            v: mesh.to_flat_vertices(),
            f: mesh.to_flat_faces(),
        },
    };
    Ok(serde_json::to_string(&document)?)
}

/// Load a terrain mesh from a JSON file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist, plus any
/// error from [`parse_json`].
pub fn load_json<P: AsRef<Path>>(path: P) -> IoResult<TerrainMesh> {
    let path = path.as_ref();
    let text = read_text(path)?;
    let mesh = parse_json(&text)?;

    info!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "loaded terrain JSON"
    );
    Ok(mesh)
}

/// Save a terrain mesh as a compact JSON file.
///
/// The document is fully encoded before the file is created.
///
/// # Errors
///
/// Returns any error from [`to_json_string`], or an I/O error if the file
/// cannot be written.
pub fn save_json<P: AsRef<Path>>(mesh: &TerrainMesh, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let text = to_json_string(mesh)?;
    write_text(path, &text)?;

    info!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        bytes = text.len(),
        "saved terrain JSON"
    );
    Ok(())
}
