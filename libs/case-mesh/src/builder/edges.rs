//! # Edge Faces
//!
//! Side walls bridging the near and far faces.
//!
//! Near vertex `i` is a rear node when `i` is even and a front node when
//! odd; the far face swaps that order. Its counterpart on the far face is
//! therefore `i + H + 1` for even `i` and `i + H - 1` for odd `i`.

use super::strip::write_strip;

/// Far-face index of the same node as near-face vertex `i`.
#[inline]
fn far_counterpart(i: usize, vertices_per_face: usize) -> usize {
    if i % 2 == 0 {
        i + vertices_per_face + 1
    } else {
        i + vertices_per_face - 1
    }
}

/// Writes one quad (two triangles) for each near vertex `i` in
/// `0..H-1`, joining the near edge `i -> (i + 2) % H` to its far
/// counterpart.
pub(crate) fn write_edge_faces(out: &mut [[u32; 3]], vertices_per_face: usize) {
    let h = vertices_per_face;
    debug_assert_eq!(out.len(), 2 * (h - 1));

    for (i, quad) in out.chunks_exact_mut(2).enumerate() {
        let i2 = (i + 2) % h;
        let j = far_counterpart(i, h);
        // i2 shares the parity of i since h is even
        let j2 = far_counterpart(i2, h);
        write_strip(quad, &[i as u32, j as u32, i2 as u32, j2 as u32]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_far_counterpart() {
        assert_eq!(far_counterpart(0, 6), 7);
        assert_eq!(far_counterpart(1, 6), 6);
        assert_eq!(far_counterpart(4, 6), 11);
        assert_eq!(far_counterpart(5, 6), 10);
    }

    #[test]
    fn test_reference_edges() {
        let mut out = vec![[0; 3]; 10];
        write_edge_faces(&mut out, 6);
        assert_eq!(
            out,
            vec![
                [0, 2, 7],
                [7, 2, 9],
                [1, 3, 6],
                [6, 3, 8],
                [2, 4, 9],
                [9, 4, 11],
                [3, 5, 8],
                [8, 5, 10],
                [4, 0, 11],
                [11, 0, 7],
            ]
        );
    }

    #[test]
    fn test_edges_stay_in_range() {
        for h in (4..40).step_by(2) {
            let mut out = vec![[0; 3]; 2 * (h - 1)];
            write_edge_faces(&mut out, h);
            assert!(out.iter().flatten().all(|&v| (v as usize) < 2 * h));
        }
    }
}
