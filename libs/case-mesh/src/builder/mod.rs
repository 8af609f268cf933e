//! # Mesh Builder
//!
//! Turns a [`Profile`] into a [`GeneratedMesh`] in four stages, each
//! writing a disjoint region of buffers sized once up front:
//!
//! 1. **Vertices**: two per node pair for the near face, then the far face
//! 2. **Face strips**: one zig-zag strip per face
//! 3. **Edges**: side-wall quads joining the two faces
//! 4. **End caps**: a quad at each end of the profile
//!
//! Every triangle goes through the same strip routine.

mod caps;
mod edges;
mod faces;
mod layout;
mod strip;


pub use layout::MeshLayout;

use crate::error::MeshError;
use crate::mesh::GeneratedMesh;
use crate::profile::Profile;
use faces::Face;
use glam::DVec3;

/// Generates the mesh for a fixed profile.
///
/// # Example
///
/// ```rust
/// use case_mesh::{MeshBuilder, Profile};
///
/// let builder = MeshBuilder::new(Profile::reference());
/// let mesh = builder.generate().unwrap();
/// assert_eq!(mesh.vertex_count(), 12);
/// assert_eq!(mesh.triangle_count(), 22);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MeshBuilder {
    profile: Profile,
}

impl MeshBuilder {
    /// Creates a builder owning `profile`.
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }

    /// Returns the profile this builder extrudes.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Generates a fresh mesh. Identical profiles give identical meshes.
    pub fn generate(&self) -> Result<GeneratedMesh, MeshError> {
        build_mesh(&self.profile)
    }
}

/// Generates the mesh for `profile`.
///
/// Fails fast with a precondition error when the profile has fewer than
/// two node pairs or a non-positive thickness; no buffers are allocated
/// in that case.
pub fn build_mesh(profile: &Profile) -> Result<GeneratedMesh, MeshError> {
    if let Err(err) = profile.validate() {
        tracing::warn!(node_pairs = profile.len(), thickness = profile.thickness, "rejected profile: {err}");
        return Err(err);
    }

    let layout = MeshLayout::new(profile.len());
    let h = layout.vertices_per_face();

    let mut vertices = vec![DVec3::ZERO; layout.vertex_count()];
    let (near, far) = vertices.split_at_mut(h);
    faces::emit_face_vertices(near, &profile.node_pairs, Face::Near, profile.thickness);
    faces::emit_face_vertices(far, &profile.node_pairs, Face::Far, profile.thickness);

    let mut triangles = vec![[0u32; 3]; layout.triangle_count()];
    let (near_strip, rest) = triangles.split_at_mut(layout.face_triangles());
    let (far_strip, rest) = rest.split_at_mut(layout.face_triangles());
    let (edge_region, cap_region) = rest.split_at_mut(layout.edge_triangles());

    // Bounded by MAX_NODE_PAIRS, so h fits u32
    let h32 = h as u32;
    faces::write_face_strip(near_strip, 0, h32);
    faces::write_face_strip(far_strip, h32, h32);
    edges::write_edge_faces(edge_region, h);
    caps::write_end_caps(cap_region, h);

    tracing::debug!(
        node_pairs = layout.node_pairs(),
        vertices = layout.vertex_count(),
        triangles = layout.triangle_count(),
        "generated case-side mesh"
    );

    Ok(GeneratedMesh::from_buffers(vertices, triangles))
}
