//! # Face Generation
//!
//! Vertex emission and strip triangulation for the near and far faces.

use super::strip::write_strip;
use crate::node_pair::NodePair;
use config::constants::EXTRUSION_AXIS;
use glam::DVec3;

/// Which side of the profile plane a face sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Face {
    /// Offset by `-thickness`, emitted rear then front per pair
    Near,
    /// Offset by `+thickness`, emitted front then rear per pair
    Far,
}

impl Face {
    fn offset(self, thickness: f64) -> DVec3 {
        let axis = DVec3::from_array(EXTRUSION_AXIS);
        match self {
            Face::Near => -thickness * axis,
            Face::Far => thickness * axis,
        }
    }
}

/// Emits two vertices per node pair into `out`.
///
/// The near face is emitted rear-then-front and the far face
/// front-then-rear. Edge stitching depends on this order.
pub(crate) fn emit_face_vertices(out: &mut [DVec3], node_pairs: &[NodePair], face: Face, thickness: f64) {
    debug_assert_eq!(out.len(), node_pairs.len() * 2);

    let offset = face.offset(thickness);
    for (slot, pair) in out.chunks_exact_mut(2).zip(node_pairs) {
        let front = pair.front.extend(0.0) + offset;
        let rear = pair.rear.extend(0.0) + offset;
        match face {
            Face::Near => {
                slot[0] = rear;
                slot[1] = front;
            }
            Face::Far => {
                slot[0] = front;
                slot[1] = rear;
            }
        }
    }
}

/// Triangulates `vertex_count` consecutive vertices starting at
/// `first_vertex` as one zig-zag strip.
pub(crate) fn write_face_strip(out: &mut [[u32; 3]], first_vertex: u32, vertex_count: u32) {
    let indices: Vec<u32> = (first_vertex..first_vertex + vertex_count).collect();
    write_strip(out, &indices);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pairs() -> Vec<NodePair> {
        vec![
            NodePair::from_front_xy(0.32, 0.0),
            NodePair::from_front_xy(0.32, 0.16),
        ]
    }

    #[test]
    fn test_near_face_order() {
        let mut out = vec![DVec3::ZERO; 4];
        emit_face_vertices(&mut out, &pairs(), Face::Near, 0.02);
        assert_eq!(out[0], DVec3::new(0.0, 0.0, -0.02));
        assert_eq!(out[1], DVec3::new(0.32, 0.0, -0.02));
        assert_eq!(out[2], DVec3::new(0.0, 0.16, -0.02));
        assert_eq!(out[3], DVec3::new(0.32, 0.16, -0.02));
    }

    #[test]
    fn test_far_face_order() {
        let mut out = vec![DVec3::ZERO; 4];
        emit_face_vertices(&mut out, &pairs(), Face::Far, 0.02);
        assert_eq!(out[0], DVec3::new(0.32, 0.0, 0.02));
        assert_eq!(out[1], DVec3::new(0.0, 0.0, 0.02));
        assert_eq!(out[2], DVec3::new(0.32, 0.16, 0.02));
        assert_eq!(out[3], DVec3::new(0.0, 0.16, 0.02));
    }

    #[test]
    fn test_negated_thickness_swaps_offsets() {
        let mut near = vec![DVec3::ZERO; 4];
        let mut flipped = vec![DVec3::ZERO; 4];
        emit_face_vertices(&mut near, &pairs(), Face::Near, 0.02);
        emit_face_vertices(&mut flipped, &pairs(), Face::Near, -0.02);

        for (a, b) in near.iter().zip(&flipped) {
            assert_eq!(a.truncate(), b.truncate());
            assert_relative_eq!(a.z, -b.z);
            assert_relative_eq!(b.z, 0.02);
        }
    }

    #[test]
    fn test_face_strip_offset() {
        let mut out = vec![[0; 3]; 4];
        write_face_strip(&mut out, 6, 6);
        assert_eq!(out, vec![[6, 8, 7], [7, 8, 9], [8, 10, 9], [9, 10, 11]]);
    }
}
