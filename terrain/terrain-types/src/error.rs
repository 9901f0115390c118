//! Error types for terrain mesh construction and queries.

use thiserror::Error;

/// Result type for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors that can occur when building or querying a mesh.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
    /// Mesh has no vertices.
    #[error("mesh has no vertices")]
    EmptyMesh,

    /// A flat coordinate or index buffer does not hold whole triples.
    #[error("{what} buffer length {len} is not a multiple of 3")]
    MisalignedBuffer {
        /// Which buffer was misaligned (`"vertex"` or `"face"`).
        what: &'static str,
        /// Length of the offending buffer.
        len: usize,
    },

    /// A face references a vertex that does not exist.
    #[error("face {face} references vertex {index} (mesh has {vertex_count} vertices)")]
    InvalidIndex {
        /// Index of the offending face.
        face: usize,
        /// The dangling vertex index.
        index: u32,
        /// Total number of vertices in the mesh.
        vertex_count: usize,
    },
}
