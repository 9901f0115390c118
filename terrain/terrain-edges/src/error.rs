//! Error types for edge operations.

use terrain_types::MeshError;
use thiserror::Error;

/// Errors that can occur while trimming or smoothing mesh edges.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EdgeError {
    /// The input mesh is empty or malformed.
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// A parameter is outside its accepted range.
    #[error("invalid {name}: {value} (expected {expected})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Value that was given.
        value: f64,
        /// Accepted range, for the message.
        expected: &'static str,
    },

    /// No vertex lies in the interior region, so there is nothing to
    /// smooth toward.
    #[error("no interior vertices with positive elevation among {vertex_count} vertices")]
    NoInteriorData {
        /// Number of vertices examined.
        vertex_count: usize,
    },
}

/// Result type for edge operations.
pub type EdgeResult<T> = std::result::Result<T, EdgeError>;
