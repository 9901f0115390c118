//! Wavefront OBJ export and parsing.
//!
//! Only the subset needed for elevation round-trips is handled:
//!
//! ```text
//! # comment
//! v <x> <y> <z>
//! f <i> <j> <k>          (1-based, each token may carry /t/n suffixes)
//! ```
//!
//! All other records (`vn`, `vt`, `o`, `g`, `s`, `usemtl`, `mtllib`) are
//! ignored on read. Exported coordinates use the shortest representation
//! that parses back to the identical `f64`, so an unedited export imports
//! bit-for-bit.

use std::fmt;
use std::path::Path;

use terrain_types::{Point3, TerrainMesh};
use tracing::{debug, info, warn};

use crate::error::{IoError, IoResult};
use crate::file::{read_text, write_text};

/// Options for OBJ export.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Name of the document the mesh came from, recorded in the header.
    pub source_name: Option<String>,
}

impl ExportOptions {
    /// Record the source document name in the OBJ header.
    #[must_use]
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }
}

/// Geometry read from an OBJ file, before reconciliation.
///
/// Face indices are already 0-based but have *not* been checked against
/// the vertex count: an edited OBJ may be inconsistent, and reconciliation
/// may discard these faces in favour of the reference mesh's.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedObj {
    /// Vertex positions in file order.
    pub vertices: Vec<Point3<f64>>,
    /// Triangles in file order, 0-based.
    pub faces: Vec<[u32; 3]>,
}

impl ParsedObj {
    /// Number of `v` records read.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of `f` records read.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

/// Render a terrain mesh as OBJ text.
///
/// Vertex `i` becomes vertex line `i + 1`; faces are written in their
/// original order and winding with 1-based indices.
///
/// # Errors
///
/// Returns [`IoError::InvalidMesh`] if the mesh has no vertices, or
/// [`IoError::Mesh`] if a face index is dangling.
///
/// # Example
///
/// ```
/// use terrain_io::{export_obj, ExportOptions};
/// use terrain_types::TerrainMesh;
///
/// let mesh = TerrainMesh::from_flat(&[0.0, 0.0, 5.0, 1.0, 0.0, 6.0, 0.0, 1.0, 7.5], &[0, 1, 2]).unwrap();
/// let text = export_obj(&mesh, &ExportOptions::default()).unwrap();
///
/// assert!(text.contains("v 0 1 7.5\n"));
/// assert!(text.contains("f 1 2 3\n"));
/// ```
pub fn export_obj(mesh: &TerrainMesh, options: &ExportOptions) -> IoResult<String> {
    if mesh.is_empty() {
        return Err(IoError::invalid_mesh("no vertices found"));
    }
    mesh.validate()?;

    // Rough per-line sizes keep reallocation down on large tiles
    let mut out = String::with_capacity(256 + mesh.vertex_count() * 40 + mesh.face_count() * 24);
    write_obj(&mut out, mesh, options)?;
    Ok(out)
}

/// Write the header, `v` records and 1-based `f` records.
fn write_obj<W: fmt::Write>(
    writer: &mut W,
    mesh: &TerrainMesh,
    options: &ExportOptions,
) -> fmt::Result {
    // Header
    writeln!(writer, "# Exported from qgis2threejs terrain JSON")?;
    if let Some(name) = &options.source_name {
        writeln!(writer, "# Original file: {name}")?;
    }
    writeln!(
        writer,
        "# Vertices: {}, Faces: {}",
        mesh.vertex_count(),
        mesh.face_count()
    )?;
    writeln!(writer, "#")?;
    writeln!(writer, "# IMPORTANT: Only edit Z values (elevation)!")?;
    writeln!(writer, "# Do not move, rotate, or scale the mesh.")?;
    writeln!(writer, "#")?;
    writeln!(writer)?;

    for p in &mesh.vertices {
        writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
    }

    writeln!(writer)?;

    for &[a, b, c] in &mesh.faces {
        writeln!(writer, "f {} {} {}", a + 1, b + 1, c + 1)?;
    }

    Ok(())
}

/// Export a terrain mesh to an OBJ file.
///
/// # Errors
///
/// Returns any error from [`export_obj`], or an I/O error if the file
/// cannot be written.
pub fn save_obj<P: AsRef<Path>>(
    mesh: &TerrainMesh,
    path: P,
    options: &ExportOptions,
) -> IoResult<()> {
    let path = path.as_ref();
    let text = export_obj(mesh, options)?;
    write_text(path, &text)?;

    info!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "saved OBJ"
    );
    Ok(())
}

/// Parse OBJ text into vertices and 0-based faces.
///
/// Lines with fewer than four tokens are skipped. Only the first three
/// corners of a polygon are read.
///
/// # Errors
///
/// Returns [`IoError::InvalidContent`] naming the line if a coordinate or
/// index does not parse, a coordinate is not finite, or an index is zero
/// or negative.
///
/// # Example
///
/// ```
/// use terrain_io::parse_obj;
///
/// let obj = parse_obj("v 0 0 1\nv 1 0 1\nv 0 1 1\nf 1/1/1 2/2/2 3/3/3\n").unwrap();
/// assert_eq!(obj.vertex_count(), 3);
/// assert_eq!(obj.faces, vec![[0, 1, 2]]);
/// ```
pub fn parse_obj(text: &str) -> IoResult<ParsedObj> {
    let mut obj = ParsedObj::default();
    let mut polygons = 0usize;

    for (n, line) in text.lines().enumerate() {
        let line_no = n + 1;
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 4 {
            continue;
        }

        match parts[0] {
            "v" => {
                let x = parse_coord(parts[1], line_no)?;
                let y = parse_coord(parts[2], line_no)?;
                let z = parse_coord(parts[3], line_no)?;
                obj.vertices.push(Point3::new(x, y, z));
            }
            "f" => {
                if parts.len() > 4 {
                    polygons += 1;
                }
                let a = parse_index(parts[1], line_no)?;
                let b = parse_index(parts[2], line_no)?;
                let c = parse_index(parts[3], line_no)?;
                obj.faces.push([a, b, c]);
            }
            _ => {
                // Normals, texture coordinates, groups, materials
            }
        }
    }

    if polygons > 0 {
        warn!(
            polygons,
            "OBJ contains faces with more than three corners; only the first three were read"
        );
    }
    debug!(
        vertices = obj.vertex_count(),
        faces = obj.face_count(),
        "parsed OBJ"
    );

    Ok(obj)
}

/// Read and parse an OBJ file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist, plus any
/// error from [`parse_obj`].
pub fn load_obj<P: AsRef<Path>>(path: P) -> IoResult<ParsedObj> {
    let path = path.as_ref();
    let text = read_text(path)?;
    let obj = parse_obj(&text)?;

    info!(
        path = %path.display(),
        vertices = obj.vertex_count(),
        faces = obj.face_count(),
        "loaded OBJ"
    );
    Ok(obj)
}

fn parse_coord(token: &str, line_no: usize) -> IoResult<f64> {
    let value: f64 = token.parse().map_err(|e| {
        IoError::invalid_content(format!("line {line_no}: bad coordinate {token:?}: {e}"))
    })?;
    if !value.is_finite() {
        return Err(IoError::invalid_content(format!(
            "line {line_no}: coordinate {token:?} is not finite"
        )));
    }
    Ok(value)
}

/// Parse the vertex field of a face token (`7`, `7/2`, `7//3`, `7/2/3`).
fn parse_index(token: &str, line_no: usize) -> IoResult<u32> {
    let field = token.split('/').next().unwrap_or(token);
    let index: i64 = field.parse().map_err(|e| {
        IoError::invalid_content(format!("line {line_no}: bad face index {token:?}: {e}"))
    })?;

    if index < 1 {
        return Err(IoError::invalid_content(format!(
            "line {line_no}: face index {index} is not a positive 1-based index"
        )));
    }

    u32::try_from(index - 1).map_err(|_| {
        IoError::invalid_content(format!("line {line_no}: face index {index} is too large"))
    })
}
