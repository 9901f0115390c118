//! Removal of faces along the outer X/Y boundary.

use terrain_types::{Axes, TerrainMesh};
use tracing::{debug, info};

use crate::error::EdgeResult;
use crate::params::TrimParams;
use crate::result::TrimResult;

/// Drop every face that reaches into the outer band of the mesh.
///
/// The X/Y bounds are inset by `trim_fraction × extent` on each side. A
/// face is kept only if all three of its vertices lie inside the inset box,
/// boundary included. Vertices are never removed or reindexed, so the
/// output can still be matched index for index with the input.
///
/// Removing every face is not an error.
///
/// # Errors
///
/// Returns [`EdgeError::InvalidParameter`](crate::EdgeError::InvalidParameter)
/// if `trim_fraction` is not in `[0, 0.5)`, or
/// [`EdgeError::Mesh`](crate::EdgeError::Mesh) if the mesh has no vertices
/// or has dangling face indices.
///
/// # Example
///
/// ```
/// use terrain_edges::{trim_edges, TrimParams};
/// use terrain_types::TerrainMesh;
///
/// // A 3x3 grid on [0, 2] x [0, 2]: every face touches the boundary
/// let mut positions = Vec::new();
/// for j in 0..3 {
///     for i in 0..3 {
///         positions.extend([f64::from(i), f64::from(j), 1.0]);
///     }
/// }
/// let indices = [0, 1, 3, 1, 4, 3, 4, 5, 7, 5, 8, 7];
/// let mesh = TerrainMesh::from_flat(&positions, &indices).unwrap();
///
/// let result = trim_edges(&mesh, &TrimParams::with_fraction(0.1)).unwrap();
/// assert_eq!(result.kept_faces, 0);
/// assert_eq!(result.mesh.vertices, mesh.vertices);
/// ```
pub fn trim_edges(mesh: &TerrainMesh, params: &TrimParams) -> EdgeResult<TrimResult> {
    params.validate()?;
    mesh.validate()?;

    let original_bounds = mesh.bounds(Axes::Xy)?;
    let trimmed_bounds = original_bounds.inset(
        original_bounds.width() * params.trim_fraction,
        original_bounds.depth() * params.trim_fraction,
    );

    debug!(
        original = %original_bounds,
        trimmed = %trimmed_bounds,
        "computed trim bounds"
    );

    let inside: Vec<bool> = mesh
        .vertices
        .iter()
        .map(|p| trimmed_bounds.contains_xy(p))
        .collect();

    let faces: Vec<[u32; 3]> = mesh
        .faces
        .iter()
        .copied()
        .filter(|face| face.iter().all(|&i| inside[i as usize]))
        .collect();

    let result = TrimResult {
        original_faces: mesh.face_count(),
        kept_faces: faces.len(),
        mesh: TerrainMesh {
            vertices: mesh.vertices.clone(),
            faces,
        },
        original_bounds,
        trimmed_bounds,
    };

    info!(
        original_faces = result.original_faces,
        kept_faces = result.kept_faces,
        removed = result.faces_removed(),
        "trimmed mesh edges"
    );

    Ok(result)
}
