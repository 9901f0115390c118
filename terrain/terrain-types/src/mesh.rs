//! Indexed terrain triangle mesh.

use nalgebra::Point3;

use crate::bounds::{Axes, Bounds};
use crate::error::{MeshError, MeshResult};

/// An indexed triangle mesh of terrain samples.
///
/// Vertices carry planar position in X/Y and elevation in Z. Faces refer
/// to vertices by index, so vertex order is significant and must be kept
/// stable by every operation that hands a mesh back.
///
/// # Memory Layout
///
/// - `vertices`: `Vec<Point3<f64>>` - one entry per terrain sample
/// - `faces`: `Vec<[u32; 3]>` - triangles as vertex indices
///
/// The fields are public for cheap in-place edits. Constructors that take
/// untrusted data ([`TerrainMesh::from_flat`], [`TerrainMesh::from_parts`])
/// validate indices; code that edits `faces` directly should call
/// [`TerrainMesh::validate`] before handing the mesh on.
///
/// # Example
///
/// ```
/// use terrain_types::{Point3, TerrainMesh};
///
/// let mut mesh = TerrainMesh::new();
/// mesh.vertices.push(Point3::new(0.0, 0.0, 12.0));
/// mesh.vertices.push(Point3::new(1.0, 0.0, 14.0));
/// mesh.vertices.push(Point3::new(0.0, 1.0, 13.0));
/// mesh.faces.push([0, 1, 2]);
///
/// assert!(mesh.validate().is_ok());
/// assert_eq!(mesh.to_flat_faces(), vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TerrainMesh {
    /// Vertex positions. Z is elevation.
    pub vertices: Vec<Point3<f64>>,

    /// Triangle faces as indices into `vertices`.
    pub faces: Vec<[u32; 3]>,
}

impl TerrainMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertices and faces, checking every face index.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidIndex`] if any face refers past the end
    /// of `vertices`.
    pub fn from_parts(vertices: Vec<Point3<f64>>, faces: Vec<[u32; 3]>) -> MeshResult<Self> {
        let mesh = Self { vertices, faces };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Create a mesh from flat coordinate and index buffers.
    ///
    /// # Arguments
    ///
    /// * `positions` - `[x0, y0, z0, x1, y1, z1, ...]`
    /// * `indices` - `[a0, b0, c0, a1, b1, c1, ...]`, 0-based
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::MisalignedBuffer`] if either buffer does not
    /// hold whole triples, or [`MeshError::InvalidIndex`] if a face index is
    /// out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use terrain_types::{MeshError, TerrainMesh};
    ///
    /// let positions = [0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0];
    /// assert!(TerrainMesh::from_flat(&positions, &[0, 1, 2]).is_ok());
    ///
    /// let dangling = TerrainMesh::from_flat(&positions, &[0, 1, 3]);
    /// assert!(matches!(dangling, Err(MeshError::InvalidIndex { index: 3, .. })));
    /// ```
    pub fn from_flat(positions: &[f64], indices: &[u32]) -> MeshResult<Self> {
        if positions.len() % 3 != 0 {
            return Err(MeshError::MisalignedBuffer {
                what: "vertex",
                len: positions.len(),
            });
        }
        if indices.len() % 3 != 0 {
            return Err(MeshError::MisalignedBuffer {
                what: "face",
                len: indices.len(),
            });
        }

        let vertices = positions
            .chunks_exact(3)
            .map(|c| Point3::new(c[0], c[1], c[2]))
            .collect();

        let faces = indices
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();

        Self::from_parts(vertices, faces)
    }

    /// Flatten vertices into `[x0, y0, z0, x1, ...]`.
    #[must_use]
    pub fn to_flat_vertices(&self) -> Vec<f64> {
        self.vertices.iter().flat_map(|p| [p.x, p.y, p.z]).collect()
    }

    /// Flatten faces into `[a0, b0, c0, a1, ...]`.
    #[must_use]
    pub fn to_flat_faces(&self) -> Vec<u32> {
        self.faces.iter().flatten().copied().collect()
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh has no vertices.
    ///
    /// A mesh with vertices but no faces is not empty: trimming can
    /// legitimately remove every face while keeping all vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over vertex elevations in vertex order.
    pub fn elevations(&self) -> impl Iterator<Item = f64> + '_ {
        self.vertices.iter().map(|p| p.z)
    }

    /// Check that every face index refers to an existing vertex.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidIndex`] for the first dangling index.
    pub fn validate(&self) -> MeshResult<()> {
        let vertex_count = self.vertices.len();
        for (face, tri) in self.faces.iter().enumerate() {
            if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::InvalidIndex {
                    face,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }

    /// Compute the axis-aligned bounds of all vertices.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::EmptyMesh`] if the mesh has no vertices.
    pub fn bounds(&self, axes: Axes) -> MeshResult<Bounds> {
        Bounds::from_points(&self.vertices, axes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square() -> TerrainMesh {
        TerrainMesh::from_flat(
            &[0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0],
            &[0, 1, 2, 1, 3, 2],
        )
        .unwrap()
    }

    #[test]
    fn mesh_is_empty() {
        let mesh = TerrainMesh::new();
        assert!(mesh.is_empty());

        let mut mesh = TerrainMesh::new();
        mesh.vertices.push(Point3::new(0.0, 0.0, 0.0));
        assert!(!mesh.is_empty()); // vertices without faces still count
    }

    #[test]
    fn flat_roundtrip_preserves_order() {
        let positions = [5.0, 6.0, 7.0, 1.0, 2.0, 3.0, 9.0, 8.0, 7.5];
        let indices = [2, 0, 1];

        let mesh = TerrainMesh::from_flat(&positions, &indices).unwrap();
        assert_eq!(mesh.to_flat_vertices(), positions.to_vec());
        assert_eq!(mesh.to_flat_faces(), indices.to_vec());
    }

    #[test]
    fn from_flat_rejects_partial_triples() {
        let err = TerrainMesh::from_flat(&[0.0, 1.0], &[]).unwrap_err();
        assert_eq!(
            err,
            MeshError::MisalignedBuffer {
                what: "vertex",
                len: 2
            }
        );

        let err = TerrainMesh::from_flat(&[0.0, 1.0, 2.0], &[0, 0]).unwrap_err();
        assert_eq!(
            err,
            MeshError::MisalignedBuffer {
                what: "face",
                len: 2
            }
        );
    }

    #[test]
    fn from_flat_rejects_dangling_index() {
        let err = TerrainMesh::from_flat(
            &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            &[0, 1, 2, 2, 1, 4],
        )
        .unwrap_err();

        assert_eq!(
            err,
            MeshError::InvalidIndex {
                face: 1,
                index: 4,
                vertex_count: 3
            }
        );
    }

    #[test]
    fn mesh_without_faces_is_valid() {
        let mesh = TerrainMesh::from_flat(&[0.0, 0.0, 0.0], &[]).unwrap();
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn mesh_bounds() {
        let bounds = unit_square().bounds(Axes::Xy).unwrap();
        assert_relative_eq!(bounds.x.min, 0.0);
        assert_relative_eq!(bounds.x.max, 1.0);
        assert_relative_eq!(bounds.y.min, 0.0);
        assert_relative_eq!(bounds.y.max, 1.0);
    }

    #[test]
    fn empty_mesh_bounds() {
        assert_eq!(
            TerrainMesh::new().bounds(Axes::Xyz),
            Err(MeshError::EmptyMesh)
        );
    }

    #[test]
    fn elevations_follow_vertex_order() {
        let mut mesh = unit_square();
        mesh.vertices[2].z = 4.5;
        let z: Vec<f64> = mesh.elevations().collect();
        assert_eq!(z, vec![1.0, 1.0, 4.5, 1.0]);
    }
}
