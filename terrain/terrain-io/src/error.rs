//! Error types for terrain mesh I/O.

use std::path::PathBuf;

use terrain_types::MeshError;
use thiserror::Error;

/// Result type for terrain I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while reading, writing or reconciling meshes.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// The JSON document is malformed or lacks `triangles`/`v`.
    #[error("invalid terrain JSON: {message}")]
    InvalidJson {
        /// Description of what was invalid.
        message: String,
    },

    /// The mesh cannot be exported (e.g. it has no vertices).
    #[error("invalid mesh: {message}")]
    InvalidMesh {
        /// Description of what was invalid.
        message: String,
    },

    /// Invalid OBJ content.
    #[error("invalid OBJ content: {message}")]
    InvalidContent {
        /// Description of what was invalid.
        message: String,
    },

    /// Vertex count and face count both differ from the reference mesh.
    #[error(
        "topology changed: OBJ has {obj_vertices} vertices / {obj_faces} faces, \
         reference has {reference_vertices} vertices / {reference_faces} faces"
    )]
    TopologyMismatch {
        /// Vertices parsed from the OBJ.
        obj_vertices: usize,
        /// Vertices in the reference mesh.
        reference_vertices: usize,
        /// Faces parsed from the OBJ.
        obj_faces: usize,
        /// Faces in the reference mesh.
        reference_faces: usize,
    },

    /// Horizontal positions moved further than the tolerance allows.
    #[error("X/Y positions changed by up to {max_xy_drift:.6} (tolerance {tolerance})")]
    GeoAlignment {
        /// Largest |dx| or |dy| over all compared vertices.
        max_xy_drift: f64,
        /// Tolerance that was exceeded.
        tolerance: f64,
    },

    /// Invalid X/Y drift tolerance.
    #[error("invalid X/Y tolerance: {0} (must be finite and non-negative)")]
    InvalidTolerance(f64),

    /// Mesh construction or validation failed.
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Text formatting failed while rendering OBJ.
    #[error("failed to format OBJ text: {0}")]
    Format(#[from] std::fmt::Error),
}

impl IoError {
    /// Create an `InvalidContent` error with the given message.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }

    /// Create an `InvalidMesh` error with the given message.
    #[must_use]
    pub fn invalid_mesh(message: impl Into<String>) -> Self {
        Self::InvalidMesh {
            message: message.into(),
        }
    }

    /// Check whether a caller override can downgrade this error to a warning.
    ///
    /// Only topology changes and X/Y drift are recoverable; see
    /// [`crate::ImportParams`].
    #[must_use]
    pub const fn is_overridable(&self) -> bool {
        matches!(
            self,
            Self::TopologyMismatch { .. } | Self::GeoAlignment { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topology_mismatch_display() {
        let err = IoError::TopologyMismatch {
            obj_vertices: 10,
            reference_vertices: 12,
            obj_faces: 7,
            reference_faces: 9,
        };
        let msg = format!("{err}");
        assert!(msg.contains("10 vertices / 7 faces"));
        assert!(msg.contains("12 vertices / 9 faces"));
        assert!(err.is_overridable());
    }

    #[test]
    fn geo_alignment_display() {
        let err = IoError::GeoAlignment {
            max_xy_drift: 0.25,
            tolerance: 0.001,
        };
        assert_eq!(
            format!("{err}"),
            "X/Y positions changed by up to 0.250000 (tolerance 0.001)"
        );
        assert!(err.is_overridable());
    }

    #[test]
    fn mesh_errors_pass_through() {
        let err: IoError = MeshError::EmptyMesh.into();
        assert_eq!(format!("{err}"), "mesh has no vertices");
        assert!(!err.is_overridable());
    }
}
