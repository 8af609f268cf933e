//! # Generated Mesh
//!
//! Output of one generation pass: positions, triangle indices and
//! texture coordinates.

use crate::error::MeshError;
use glam::{DVec2, DVec3};
use serde::Serialize;

/// A generated case-side mesh.
///
/// All geometry is kept in f64. Export to f32 only happens through
/// [`GeneratedMesh::to_buffers`] for GPU consumers.
///
/// Texture coordinates are the vertex positions projected onto the
/// profile plane (the extrusion-axis component dropped).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedMesh {
    /// Vertex positions: near face block, then far face block
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Per-vertex texture coordinates
    uvs: Vec<DVec2>,
}

impl GeneratedMesh {
    /// Wraps finished vertex and triangle buffers, deriving texture
    /// coordinates from vertex x/y.
    pub fn from_buffers(vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>) -> Self {
        let uvs = vertices.iter().map(|v| v.truncate()).collect();
        Self {
            vertices,
            triangles,
            uvs,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns a reference to the texture coordinates.
    #[inline]
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    /// Returns the triangle indices as a flat list.
    pub fn indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices reference an existing vertex
    /// - There is one texture coordinate per vertex
    ///
    /// Zero-area triangles are accepted.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.uvs.len() != self.vertices.len() {
            return Err(MeshError::invalid_topology(format!(
                "{} texture coordinates for {} vertices",
                self.uvs.len(),
                self.vertices.len()
            )));
        }

        let vertex_count = self.vertices.len();
        for (index, tri) in self.triangles.iter().enumerate() {
            if let Some(&bad) = tri.iter().find(|&&v| v as usize >= vertex_count) {
                return Err(MeshError::invalid_topology(format!(
                    "triangle {index} references vertex {bad} of {vertex_count}"
                )));
            }
        }

        Ok(())
    }

    /// Exports the mesh to GPU-friendly flat buffers.
    ///
    /// # Example
    ///
    /// ```rust
    /// use case_mesh::{MeshBuilder, Profile};
    ///
    /// let mesh = MeshBuilder::new(Profile::reference()).generate().unwrap();
    /// let buffers = mesh.to_buffers();
    /// assert_eq!(buffers.positions.len(), 12 * 3);
    /// assert_eq!(buffers.uvs.len(), 12 * 2);
    /// assert_eq!(buffers.indices.len(), 66);
    /// ```
    pub fn to_buffers(&self) -> MeshBuffers {
        let mut buffers = MeshBuffers::with_capacity(self.vertices.len(), self.triangles.len());

        for v in &self.vertices {
            buffers.positions.extend([v.x as f32, v.y as f32, v.z as f32]);
        }
        for uv in &self.uvs {
            buffers.uvs.extend([uv.x as f32, uv.y as f32]);
        }
        buffers.indices.extend(self.triangles.iter().flatten());

        buffers
    }
}

/// Mesh buffers suitable for GPU rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MeshBuffers {
    /// Vertex positions as flat array [x, y, z, x, y, z, ...]
    pub positions: Vec<f32>,
    /// Texture coordinates as flat array [u, v, u, v, ...]
    pub uvs: Vec<f32>,
    /// Triangle indices as flat array [i0, i1, i2, i0, i1, i2, ...]
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Creates buffers with room for the given vertex and triangle counts.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count * 3),
            uvs: Vec::with_capacity(vertex_count * 2),
            indices: Vec::with_capacity(triangle_count * 3),
        }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> GeneratedMesh {
        GeneratedMesh::from_buffers(
            vec![
                DVec3::new(0.0, 0.0, -1.0),
                DVec3::new(1.0, 0.0, 0.0),
                DVec3::new(0.0, 2.0, 1.0),
            ],
            vec![[0, 1, 2]],
        )
    }

    #[test]
    fn test_uvs_drop_extrusion_axis() {
        let mesh = unit_triangle();
        assert_eq!(mesh.uvs(), &[DVec2::new(0.0, 0.0), DVec2::new(1.0, 0.0), DVec2::new(0.0, 2.0)]);
    }

    #[test]
    fn test_bounding_box() {
        let (min, max) = unit_triangle().bounding_box();
        assert_eq!(min, DVec3::new(0.0, 0.0, -1.0));
        assert_eq!(max, DVec3::new(1.0, 2.0, 1.0));
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = GeneratedMesh::from_buffers(Vec::new(), Vec::new());
        assert!(mesh.is_empty());
        assert_eq!(mesh.bounding_box(), (DVec3::ZERO, DVec3::ZERO));
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_validate_out_of_range_index() {
        let mesh = GeneratedMesh::from_buffers(vec![DVec3::ZERO; 3], vec![[0, 1, 3]]);
        let err = mesh.validate().unwrap_err();
        assert!(err.to_string().contains("vertex 3"));
    }

    #[test]
    fn test_buffers_export() {
        let buffers = unit_triangle().to_buffers();
        assert_eq!(buffers.vertex_count(), 3);
        assert_eq!(buffers.triangle_count(), 1);
        assert_eq!(&buffers.positions[6..9], &[0.0, 2.0, 1.0]);
        assert_eq!(&buffers.uvs[4..6], &[0.0, 2.0]);
        assert_eq!(buffers.indices, vec![0, 1, 2]);
    }
}
