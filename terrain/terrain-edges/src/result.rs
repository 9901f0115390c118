//! Result types for edge operations.

// Face and vertex counts don't overflow in practice
#![allow(clippy::cast_precision_loss)]

use std::fmt;

use terrain_types::{Bounds, TerrainMesh};

/// Result of edge trimming.
#[derive(Debug, Clone)]
pub struct TrimResult {
    /// The trimmed mesh. Vertices are identical to the input.
    pub mesh: TerrainMesh,

    /// X/Y bounds of the input mesh.
    pub original_bounds: Bounds,

    /// The inset box faces had to fit in.
    pub trimmed_bounds: Bounds,

    /// Number of faces in the input mesh.
    pub original_faces: usize,

    /// Number of faces kept.
    pub kept_faces: usize,
}

impl TrimResult {
    /// Number of faces removed.
    #[must_use]
    pub const fn faces_removed(&self) -> usize {
        self.original_faces - self.kept_faces
    }

    /// Percentage of faces removed. Zero for a mesh without faces.
    #[must_use]
    pub fn removed_percent(&self) -> f64 {
        if self.original_faces == 0 {
            0.0
        } else {
            self.faces_removed() as f64 / self.original_faces as f64 * 100.0
        }
    }
}

impl fmt::Display for TrimResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Faces: {} → {} ({} removed, {:.1}%)",
            self.original_faces,
            self.kept_faces,
            self.faces_removed(),
            self.removed_percent()
        )
    }
}

/// Elevation statistics over the interior vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteriorStats {
    /// Lowest interior elevation.
    pub min: f64,
    /// Mean interior elevation.
    pub avg: f64,
    /// Highest interior elevation.
    pub max: f64,
    /// Number of interior vertices.
    pub count: usize,
}

impl InteriorStats {
    /// Compute statistics over a sequence of elevations.
    ///
    /// Returns `None` if the sequence is empty.
    #[must_use]
    pub fn from_elevations<I: IntoIterator<Item = f64>>(elevations: I) -> Option<Self> {
        let mut iter = elevations.into_iter();
        let first = iter.next()?;

        let (mut min, mut max, mut sum, mut count) = (first, first, first, 1usize);
        for z in iter {
            min = min.min(z);
            max = max.max(z);
            sum += z;
            count += 1;
        }

        Some(Self {
            min,
            avg: sum / count as f64,
            max,
            count,
        })
    }
}

impl fmt::Display for InteriorStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min={:.2}, avg={:.2}, max={:.2}",
            self.min, self.avg, self.max
        )
    }
}

/// Result of edge smoothing.
#[derive(Debug, Clone)]
pub struct SmoothResult {
    /// The smoothed mesh. Only Z values differ from the input.
    pub mesh: TerrainMesh,

    /// Statistics of the interior the edge was smoothed toward.
    pub interior: InteriorStats,

    /// Number of vertices in the edge zone.
    pub edge_vertices: usize,

    /// Edge vertices whose elevation was replaced by the interior average.
    pub replaced: usize,

    /// Edge vertices whose elevation was blended toward the average.
    pub blended: usize,
}

impl fmt::Display for SmoothResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Smoothed {} edge vertices ({} outliers replaced, {} blended); interior {}",
            self.edge_vertices, self.replaced, self.blended, self.interior
        )
    }
}
