//! Re-import of an edited OBJ against the original terrain mesh.
//!
//! OBJ files carry no record of where their faces came from, and external
//! editors are free to reorder or re-triangulate on export. Reconciliation
//! therefore decides, from vertex and face counts alone, whether the
//! original face list can be reused, and checks that the edit only moved
//! vertices vertically.
//!
//! # Face resolution
//!
//! 1. Same vertex count as the reference: keep the reference faces. Index
//!    reordering is the usual round-trip failure, so the OBJ's faces are
//!    not trusted when they are not needed.
//! 2. Different vertex count, same face count: use the OBJ's faces.
//! 3. Both counts differ: refuse with [`IoError::TopologyMismatch`] unless
//!    [`ImportParams::allow_topology_change`] is set.
//!
//! # Drift check
//!
//! For every vertex index present in both meshes, |dx| and |dy| must stay
//! within [`ImportParams::xy_tolerance`]; otherwise the import is refused
//! with [`IoError::GeoAlignment`] unless [`ImportParams::allow_xy_drift`]
//! is set. |dz| is reported but never limited: elevation is what the edit
//! is for.

use std::fmt;
use std::path::Path;

use terrain_types::{Point3, TerrainMesh};
use tracing::{debug, info, warn};

use crate::error::{IoError, IoResult};
use crate::json::load_json;
use crate::obj::{ParsedObj, load_obj, parse_obj};

/// Parameters controlling OBJ reconciliation.
///
/// The defaults refuse every risky case; overrides are explicit opt-ins
/// made by the caller.
///
/// # Example
///
/// ```
/// use terrain_io::ImportParams;
///
/// let params = ImportParams::default()
///     .with_xy_tolerance(0.01)
///     .allow_xy_drift(true);
/// assert!(params.validate().is_ok());
/// assert!(!params.allow_topology_change);
/// ```
#[derive(Debug, Clone)]
pub struct ImportParams {
    /// Largest |dx| or |dy| accepted without complaint, in source units.
    /// Default: `0.001`
    pub xy_tolerance: f64,

    /// Accept an OBJ whose vertex and face counts both differ from the
    /// reference, using the OBJ's own faces.
    /// Default: `false`
    pub allow_topology_change: bool,

    /// Accept X/Y drift beyond `xy_tolerance`.
    /// Default: `false`
    pub allow_xy_drift: bool,
}

impl Default for ImportParams {
    fn default() -> Self {
        Self {
            xy_tolerance: 0.001,
            allow_topology_change: false,
            allow_xy_drift: false,
        }
    }
}

impl ImportParams {
    /// Set the X/Y drift tolerance.
    #[must_use]
    pub const fn with_xy_tolerance(mut self, tolerance: f64) -> Self {
        self.xy_tolerance = tolerance;
        self
    }

    /// Accept or refuse simultaneous vertex and face count changes.
    #[must_use]
    pub const fn allow_topology_change(mut self, allow: bool) -> Self {
        self.allow_topology_change = allow;
        self
    }

    /// Accept or refuse X/Y drift beyond the tolerance.
    #[must_use]
    pub const fn allow_xy_drift(mut self, allow: bool) -> Self {
        self.allow_xy_drift = allow;
        self
    }

    /// Check that the parameters are usable.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidTolerance`] if the tolerance is negative
    /// or not finite.
    pub fn validate(&self) -> IoResult<()> {
        if self.xy_tolerance.is_finite() && self.xy_tolerance >= 0.0 {
            Ok(())
        } else {
            Err(IoError::InvalidTolerance(self.xy_tolerance))
        }
    }
}

/// Where the faces of an imported mesh came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceSource {
    /// The reference mesh's face list was reused.
    Reference,
    /// The faces parsed from the OBJ were used.
    Obj,
}

impl fmt::Display for FaceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference => f.write_str("reference"),
            Self::Obj => f.write_str("OBJ"),
        }
    }
}

/// Per-axis position changes between an imported mesh and its reference.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DriftReport {
    /// Number of vertex indices present in both meshes.
    pub compared: usize,
    /// Largest |dx| or |dy|.
    pub max_xy: f64,
    /// Largest |dz|.
    pub max_z: f64,
}

impl DriftReport {
    /// Compare vertices index by index over the common prefix.
    #[must_use]
    pub fn measure(edited: &[Point3<f64>], reference: &[Point3<f64>]) -> Self {
        edited
            .iter()
            .zip(reference)
            .fold(Self::default(), |report, (e, r)| Self {
                compared: report.compared + 1,
                max_xy: report.max_xy.max((e.x - r.x).abs()).max((e.y - r.y).abs()),
                max_z: report.max_z.max((e.z - r.z).abs()),
            })
    }

    /// Check whether horizontal drift exceeds `tolerance`.
    #[inline]
    #[must_use]
    pub fn exceeds(&self, tolerance: f64) -> bool {
        self.max_xy > tolerance
    }
}

/// A risky condition the caller explicitly accepted.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportWarning {
    /// Vertex and face counts both differ from the reference.
    TopologyChanged {
        /// Vertices parsed from the OBJ.
        obj_vertices: usize,
        /// Vertices in the reference mesh.
        reference_vertices: usize,
        /// Faces parsed from the OBJ.
        obj_faces: usize,
        /// Faces in the reference mesh.
        reference_faces: usize,
    },
    /// X/Y positions moved beyond the tolerance.
    GeoAlignment {
        /// Largest |dx| or |dy|.
        max_xy_drift: f64,
        /// Tolerance that was exceeded.
        tolerance: f64,
    },
}

impl fmt::Display for ImportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TopologyChanged {
                obj_vertices,
                reference_vertices,
                obj_faces,
                reference_faces,
            } => write!(
                f,
                "mesh topology changed ({obj_vertices} vs {reference_vertices} vertices, \
                 {obj_faces} vs {reference_faces} faces); geo-mapping may be wrong"
            ),
            Self::GeoAlignment {
                max_xy_drift,
                tolerance,
            } => write!(
                f,
                "X/Y positions changed by up to {max_xy_drift:.6} (tolerance {tolerance}); \
                 geo-mapping may be wrong"
            ),
        }
    }
}

/// Outcome of reconciling an OBJ against its reference mesh.
#[derive(Debug, Clone)]
pub struct ImportResult {
    /// The reconciled mesh: OBJ vertices with the resolved faces.
    pub mesh: TerrainMesh,
    /// Which face list was used.
    pub face_source: FaceSource,
    /// Position changes relative to the reference.
    pub drift: DriftReport,
    /// Conditions accepted through [`ImportParams`] overrides.
    pub warnings: Vec<ImportWarning>,
}

impl ImportResult {
    /// Check whether the import needed no overrides.
    #[inline]
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

impl fmt::Display for ImportResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Import: {} vertices, {} faces ({} faces), max X/Y drift {:.6}, max Z change {:.2}",
            self.mesh.vertex_count(),
            self.mesh.face_count(),
            self.face_source,
            self.drift.max_xy,
            self.drift.max_z
        )
    }
}

/// Reconcile parsed OBJ geometry against a reference mesh.
///
/// # Errors
///
/// - [`IoError::InvalidMesh`] if the OBJ has no vertices
/// - [`IoError::InvalidTolerance`] if `params` is invalid
/// - [`IoError::TopologyMismatch`] if both counts differ and the override
///   is not set
/// - [`IoError::GeoAlignment`] if X/Y drift exceeds the tolerance and the
///   override is not set
/// - [`IoError::Mesh`] if the resolved faces reference missing vertices
pub fn reconcile(
    obj: ParsedObj,
    reference: &TerrainMesh,
    params: &ImportParams,
) -> IoResult<ImportResult> {
    params.validate()?;

    if obj.vertices.is_empty() {
        return Err(IoError::invalid_mesh("OBJ contains no vertices"));
    }

    let obj_vertices = obj.vertex_count();
    let obj_faces = obj.face_count();
    let reference_vertices = reference.vertex_count();
    let reference_faces = reference.face_count();

    debug!(
        obj_vertices,
        reference_vertices, obj_faces, reference_faces, "reconciling OBJ"
    );

    let mut warnings = Vec::new();

    let (faces, face_source) = if obj_vertices == reference_vertices {
        (reference.faces.clone(), FaceSource::Reference)
    } else if obj_faces == reference_faces {
        warn!(
            obj_vertices,
            reference_vertices, "vertex count changed; using faces from the OBJ"
        );
        (obj.faces, FaceSource::Obj)
    } else if params.allow_topology_change {
        let warning = ImportWarning::TopologyChanged {
            obj_vertices,
            reference_vertices,
            obj_faces,
            reference_faces,
        };
        warn!("{warning}");
        warnings.push(warning);
        (obj.faces, FaceSource::Obj)
    } else {
        return Err(IoError::TopologyMismatch {
            obj_vertices,
            reference_vertices,
            obj_faces,
            reference_faces,
        });
    };

    let drift = DriftReport::measure(&obj.vertices, &reference.vertices);
    if drift.exceeds(params.xy_tolerance) {
        if !params.allow_xy_drift {
            return Err(IoError::GeoAlignment {
                max_xy_drift: drift.max_xy,
                tolerance: params.xy_tolerance,
            });
        }
        let warning = ImportWarning::GeoAlignment {
            max_xy_drift: drift.max_xy,
            tolerance: params.xy_tolerance,
        };
        warn!("{warning}");
        warnings.push(warning);
    }

    let mesh = TerrainMesh::from_parts(obj.vertices, faces)?;

    info!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        face_source = %face_source,
        max_xy_drift = drift.max_xy,
        max_z_change = drift.max_z,
        "reconciled OBJ"
    );

    Ok(ImportResult {
        mesh,
        face_source,
        drift,
        warnings,
    })
}

/// Parse OBJ text and reconcile it against a reference mesh.
///
/// # Errors
///
/// Returns any error from [`parse_obj`] or [`reconcile`].
///
/// # Example
///
/// ```
/// use terrain_io::{export_obj, import_obj, ExportOptions, FaceSource, ImportParams};
/// use terrain_types::TerrainMesh;
///
/// let original = TerrainMesh::from_flat(
///     &[0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0],
///     &[0, 1, 2, 1, 3, 2],
/// ).unwrap();
///
/// // Raise one corner, as an elevation edit would
/// let text = export_obj(&original, &ExportOptions::default()).unwrap()
///     .replace("v 1 1 1\n", "v 1 1 3.5\n");
///
/// let result = import_obj(&text, &original, &ImportParams::default()).unwrap();
/// assert_eq!(result.face_source, FaceSource::Reference);
/// assert_eq!(result.mesh.vertices[3].z, 3.5);
/// assert_eq!(result.drift.max_z, 2.5);
/// ```
pub fn import_obj(
    obj_text: &str,
    reference: &TerrainMesh,
    params: &ImportParams,
) -> IoResult<ImportResult> {
    let obj = parse_obj(obj_text)?;
    reconcile(obj, reference, params)
}

/// Load an edited OBJ file and reconcile it against the original JSON file.
///
/// # Errors
///
/// Returns any error from [`load_obj`], [`load_json`] or [`reconcile`].
pub fn import_obj_file<P, Q>(
    obj_path: P,
    reference_path: Q,
    params: &ImportParams,
) -> IoResult<ImportResult>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let reference = load_json(reference_path)?;
    let obj = load_obj(obj_path)?;
    reconcile(obj, &reference, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obj::{ExportOptions, export_obj};
    use approx::assert_relative_eq;

    /// 3x3 grid of samples on a 2x2 square, eight triangles.
    fn grid() -> TerrainMesh {
        let mut positions = Vec::new();
        for j in 0..3 {
            for i in 0..3 {
                positions.extend([f64::from(i), f64::from(j), 10.0 + f64::from(i + j)]);
            }
        }
        let mut indices = Vec::new();
        for j in 0..2u32 {
            for i in 0..2u32 {
                let a = j * 3 + i;
                indices.extend([a, a + 1, a + 3, a + 1, a + 4, a + 3]);
            }
        }
        TerrainMesh::from_flat(&positions, &indices).unwrap()
    }

    fn obj_of(mesh: &TerrainMesh) -> ParsedObj {
        ParsedObj {
            vertices: mesh.vertices.clone(),
            faces: mesh.faces.clone(),
        }
    }

    #[test]
    fn unchanged_roundtrip_reuses_reference_faces() {
        let reference = grid();
        let text = export_obj(&reference, &ExportOptions::default()).unwrap();
        let result = import_obj(&text, &reference, &ImportParams::default()).unwrap();

        assert_eq!(result.face_source, FaceSource::Reference);
        assert_eq!(result.mesh, reference);
        assert_eq!(result.drift.compared, 9);
        assert_relative_eq!(result.drift.max_xy, 0.0);
        assert!(result.is_clean());
    }

    #[test]
    fn same_vertex_count_ignores_reordered_faces() {
        let reference = grid();
        let mut obj = obj_of(&reference);
        obj.faces.reverse();
        obj.faces[0] = [2, 0, 1];

        let result = reconcile(obj, &reference, &ImportParams::default()).unwrap();
        assert_eq!(result.mesh.faces, reference.faces);
    }

    #[test]
    fn changed_vertex_count_with_same_face_count_uses_obj_faces() {
        let reference = grid();
        let mut obj = obj_of(&reference);
        obj.vertices.push(Point3::new(5.0, 5.0, 10.0));
        obj.faces[0] = [0, 1, 9];

        let result = reconcile(obj, &reference, &ImportParams::default()).unwrap();
        assert_eq!(result.face_source, FaceSource::Obj);
        assert_eq!(result.mesh.vertex_count(), 10);
        assert_eq!(result.mesh.faces[0], [0, 1, 9]);
        assert_ne!(result.mesh.faces, reference.faces);
    }

    #[test]
    fn both_counts_changed_is_refused() {
        let reference = grid();
        let mut obj = obj_of(&reference);
        obj.vertices.pop();
        obj.faces.truncate(4);

        let err = reconcile(obj, &reference, &ImportParams::default()).unwrap_err();
        match err {
            IoError::TopologyMismatch {
                obj_vertices,
                reference_vertices,
                obj_faces,
                reference_faces,
            } => {
                assert_eq!(obj_vertices, 8);
                assert_eq!(reference_vertices, 9);
                assert_eq!(obj_faces, 4);
                assert_eq!(reference_faces, 8);
            }
            other => panic!("expected TopologyMismatch, got {other:?}"),
        }
    }

    #[test]
    fn topology_override_uses_obj_faces_and_warns() {
        let reference = grid();
        let mut obj = obj_of(&reference);
        obj.vertices.push(Point3::new(0.0, 0.0, 10.0));
        obj.faces.truncate(6);

        let params = ImportParams::default().allow_topology_change(true);
        let result = reconcile(obj, &reference, &params).unwrap();

        assert_eq!(result.face_source, FaceSource::Obj);
        assert_eq!(result.mesh.face_count(), 6);
        assert!(matches!(
            result.warnings.as_slice(),
            [ImportWarning::TopologyChanged {
                obj_vertices: 10,
                ..
            }]
        ));
    }

    #[test]
    fn overridden_topology_still_rejects_dangling_faces() {
        let reference = grid();
        let mut obj = obj_of(&reference);
        obj.vertices.truncate(4);
        obj.faces.truncate(3);

        let params = ImportParams::default().allow_topology_change(true);
        let err = reconcile(obj, &reference, &params).unwrap_err();
        assert!(matches!(err, IoError::Mesh(_)));
    }

    #[test]
    fn elevation_changes_are_reported_not_refused() {
        let reference = grid();
        let mut obj = obj_of(&reference);
        obj.vertices[4].z += 7.5;

        let result = reconcile(obj, &reference, &ImportParams::default()).unwrap();
        assert_relative_eq!(result.drift.max_z, 7.5);
        assert!(result.is_clean());
    }

    #[test]
    fn horizontal_drift_is_refused() {
        let reference = grid();
        let mut obj = obj_of(&reference);
        obj.vertices[2].y += 0.5;

        let err = reconcile(obj, &reference, &ImportParams::default()).unwrap_err();
        match err {
            IoError::GeoAlignment {
                max_xy_drift,
                tolerance,
            } => {
                assert_relative_eq!(max_xy_drift, 0.5);
                assert_relative_eq!(tolerance, 0.001);
            }
            other => panic!("expected GeoAlignment, got {other:?}"),
        }
    }

    #[test]
    fn drift_within_tolerance_is_accepted() {
        let reference = grid();
        let mut obj = obj_of(&reference);
        obj.vertices[0].x += 0.0005;

        let result = reconcile(obj, &reference, &ImportParams::default()).unwrap();
        assert!(result.is_clean());
        assert!(result.drift.max_xy > 0.0);
    }

    #[test]
    fn drift_override_surfaces_magnitude() {
        let reference = grid();
        let mut obj = obj_of(&reference);
        obj.vertices[8].x -= 0.25;

        let params = ImportParams::default().allow_xy_drift(true);
        let result = reconcile(obj, &reference, &params).unwrap();

        assert_eq!(result.warnings.len(), 1);
        match &result.warnings[0] {
            ImportWarning::GeoAlignment { max_xy_drift, .. } => {
                assert_relative_eq!(*max_xy_drift, 0.25);
            }
            other => panic!("expected GeoAlignment warning, got {other:?}"),
        }
        assert_relative_eq!(result.mesh.vertices[8].x, 1.75);
    }

    #[test]
    fn drift_compares_common_prefix_only() {
        let reference = grid();
        let mut obj = obj_of(&reference);
        obj.vertices.push(Point3::new(100.0, 100.0, 0.0));

        let result = reconcile(obj, &reference, &ImportParams::default()).unwrap();
        assert_eq!(result.drift.compared, 9);
        assert_relative_eq!(result.drift.max_xy, 0.0);
    }

    #[test]
    fn empty_obj_is_refused() {
        let err = reconcile(ParsedObj::default(), &grid(), &ImportParams::default()).unwrap_err();
        assert!(matches!(err, IoError::InvalidMesh { .. }));
    }

    #[test]
    fn invalid_tolerance_is_refused() {
        let params = ImportParams::default().with_xy_tolerance(-1.0);
        let err = reconcile(obj_of(&grid()), &grid(), &params).unwrap_err();
        assert!(matches!(err, IoError::InvalidTolerance(_)));
    }

    #[test]
    fn import_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("a0.json");
        let obj_path = dir.path().join("a0.obj");

        let reference = grid();
        crate::save_json(&reference, &json_path).unwrap();
        crate::save_obj(&reference, &obj_path, &ExportOptions::default()).unwrap();

        let result = import_obj_file(&obj_path, &json_path, &ImportParams::default()).unwrap();
        assert_eq!(result.mesh, reference);
    }

    #[test]
    fn display_summarizes() {
        let reference = grid();
        let result = reconcile(obj_of(&reference), &reference, &ImportParams::default()).unwrap();
        let text = format!("{result}");
        assert!(text.contains("9 vertices"));
        assert!(text.contains("reference faces"));
    }
}
