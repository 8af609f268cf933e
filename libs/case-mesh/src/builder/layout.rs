//! # Buffer Layout
//!
//! Buffer sizes and triangle-region offsets, all fixed by the node-pair
//! count `N`:
//!
//! ```text
//! vertices:  [ near face: 2N | far face: 2N ]
//! triangles: [ near strip | far strip | edges | end caps ]
//!               2N-2         2N-2       4N-2     4
//! ```

/// Derived sizes for a profile of `node_pairs` rungs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshLayout {
    node_pairs: usize,
}

impl MeshLayout {
    /// Triangles contributed by the two end caps.
    pub const END_CAP_TRIANGLES: usize = 4;

    /// Creates the layout for `node_pairs` rungs.
    ///
    /// Callers must have checked `node_pairs >= 2`.
    pub fn new(node_pairs: usize) -> Self {
        Self { node_pairs }
    }

    /// Returns the node-pair count this layout was derived from.
    #[inline]
    pub fn node_pairs(&self) -> usize {
        self.node_pairs
    }

    /// Two vertices per node pair on each face.
    #[inline]
    pub fn vertices_per_face(&self) -> usize {
        self.node_pairs * 2
    }

    /// Total vertex count, `4N`.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices_per_face() * 2
    }

    /// Triangles in one face strip.
    #[inline]
    pub fn face_triangles(&self) -> usize {
        self.vertices_per_face() - 2
    }

    /// Triangles in the side walls: one quad per face vertex but the last.
    #[inline]
    pub fn edge_triangles(&self) -> usize {
        self.vertices_per_face() * 2 - 2
    }

    /// Total triangle count.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.face_triangles() * 2 + self.edge_triangles() + Self::END_CAP_TRIANGLES
    }

    /// Total index count, three per triangle.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.triangle_count() * 3
    }
}
