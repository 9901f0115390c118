//! Blending of edge elevations toward the interior.
//!
//! Terrain exports often carry artifacts along the outer boundary: sample
//! points that fell outside the DEM come out at zero or at extreme values.
//! Smoothing pulls the Z of every vertex in the edge zone toward the mean
//! elevation of the interior. Vertices never move in X or Y.
//!
//! # Algorithm
//!
//! 1. The edge zone is `edge_distance_fraction × extent` wide on each side.
//! 2. Interior vertices lie strictly inside the box inset by the edge zone
//!    and have positive elevation. Their min, mean and max are collected.
//! 3. For each vertex, the distance to each of the four sides is divided
//!    by the zone width, giving 0 on the boundary and 1 at the inner edge
//!    of the zone. The smallest of the four decides membership.
//! 4. Zone vertices that are non-positive or outside
//!    `[outlier_low × min, outlier_high × max]` take the mean outright.
//!    The rest move toward it by `strength × (1 - distance)`.

use terrain_types::{Axes, Bounds, Point3, TerrainMesh};
use tracing::{debug, info};

use crate::error::{EdgeError, EdgeResult};
use crate::params::SmoothParams;
use crate::result::{InteriorStats, SmoothResult};

/// How an edge-zone vertex was adjusted.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Adjustment {
    Replaced,
    Blended,
}

/// Smooth the elevations of vertices near the X/Y boundary.
///
/// The input mesh is not modified; the result holds a copy with adjusted
/// Z values and the same faces.
///
/// # Errors
///
/// - [`EdgeError::InvalidParameter`] if a parameter is out of range
/// - [`EdgeError::Mesh`] if the mesh has no vertices or dangling faces
/// - [`EdgeError::NoInteriorData`] if no vertex qualifies as interior
///
/// # Example
///
/// ```
/// use terrain_edges::{smooth_edges, SmoothParams};
/// use terrain_types::{Point3, TerrainMesh};
///
/// // 5x5 grid at elevation 10 with one corner dropped to 0
/// let mut mesh = TerrainMesh::new();
/// for j in 0..5 {
///     for i in 0..5 {
///         mesh.vertices.push(Point3::new(f64::from(i), f64::from(j), 10.0));
///     }
/// }
/// mesh.vertices[0].z = 0.0;
///
/// let result = smooth_edges(&mesh, &SmoothParams::default().with_edge_distance(0.25)).unwrap();
/// assert_eq!(result.mesh.vertices[0].z, 10.0);
/// assert_eq!(result.replaced, 1);
/// ```
pub fn smooth_edges(mesh: &TerrainMesh, params: &SmoothParams) -> EdgeResult<SmoothResult> {
    params.validate()?;
    mesh.validate()?;

    let bounds = mesh.bounds(Axes::Xy)?;
    let edge_x = bounds.width() * params.edge_distance_fraction;
    let edge_y = bounds.depth() * params.edge_distance_fraction;
    let inner = bounds.inset(edge_x, edge_y);

    let interior = InteriorStats::from_elevations(
        mesh.vertices
            .iter()
            .filter(|p| inner.strictly_contains_xy(p) && p.z > 0.0)
            .map(|p| p.z),
    )
    .ok_or(EdgeError::NoInteriorData {
        vertex_count: mesh.vertex_count(),
    })?;

    debug!(
        edge_x,
        edge_y,
        interior_count = interior.count,
        interior = %interior,
        "computed interior elevation"
    );

    let mut vertices = mesh.vertices.clone();
    let mut replaced = 0usize;
    let mut blended = 0usize;

    for p in &mut vertices {
        let distance = edge_distance(p, &bounds, edge_x, edge_y);
        if distance >= 1.0 {
            continue;
        }
        let (z, adjustment) = adjust_elevation(p.z, distance, &interior, params);
        p.z = z;
        match adjustment {
            Adjustment::Replaced => replaced += 1,
            Adjustment::Blended => blended += 1,
        }
    }

    let result = SmoothResult {
        mesh: TerrainMesh {
            vertices,
            faces: mesh.faces.clone(),
        },
        interior,
        edge_vertices: replaced + blended,
        replaced,
        blended,
    };

    info!(
        edge_vertices = result.edge_vertices,
        replaced, blended, "smoothed mesh edges"
    );

    Ok(result)
}

/// Normalized distance from the nearest side: 0 on the boundary, 1 at the
/// inner edge of the zone. An axis with a zero-width zone counts as 1.
fn edge_distance(p: &Point3<f64>, bounds: &Bounds, edge_x: f64, edge_y: f64) -> f64 {
    let (left, right) = if edge_x > 0.0 {
        ((p.x - bounds.x.min) / edge_x, (bounds.x.max - p.x) / edge_x)
    } else {
        (1.0, 1.0)
    };
    let (bottom, top) = if edge_y > 0.0 {
        ((p.y - bounds.y.min) / edge_y, (bounds.y.max - p.y) / edge_y)
    } else {
        (1.0, 1.0)
    };
    left.min(right).min(bottom).min(top)
}

fn adjust_elevation(
    z: f64,
    distance: f64,
    interior: &InteriorStats,
    params: &SmoothParams,
) -> (f64, Adjustment) {
    let is_outlier =
        z <= 0.0 || z < interior.min * params.outlier_low || z > interior.max * params.outlier_high;

    if is_outlier {
        (interior.avg, Adjustment::Replaced)
    } else {
        let blended = z + (interior.avg - z) * params.smooth_strength * (1.0 - distance);
        (blended, Adjustment::Blended)
    }
}
