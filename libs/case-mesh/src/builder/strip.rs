//! # Triangle Strips
//!
//! The single strip routine every region of the mesh goes through.

/// Writes the strip over `indices` into `out`, one triangle per window of
/// three indices. Even triangles are emitted `(a, c, b)`, odd ones
/// `(a, b, c)`, so the whole strip faces one way.
///
/// `out` must hold exactly `indices.len() - 2` triangles.
pub(crate) fn write_strip(out: &mut [[u32; 3]], indices: &[u32]) {
    debug_assert_eq!(out.len(), indices.len().saturating_sub(2));

    for (t, (tri, w)) in out.iter_mut().zip(indices.windows(3)).enumerate() {
        *tri = if t % 2 == 0 {
            [w[0], w[2], w[1]]
        } else {
            [w[0], w[1], w[2]]
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_strip() {
        let mut out = [[0; 3]; 2];
        write_strip(&mut out, &[10, 11, 12, 13]);
        assert_eq!(out, [[10, 12, 11], [11, 12, 13]]);
    }

    #[test]
    fn test_winding_alternates() {
        let indices: Vec<u32> = (0..8).collect();
        let mut out = vec![[0; 3]; 6];
        write_strip(&mut out, &indices);
        for (t, tri) in out.iter().enumerate() {
            let t = t as u32;
            if t % 2 == 0 {
                assert_eq!(*tri, [t, t + 2, t + 1]);
            } else {
                assert_eq!(*tri, [t, t + 1, t + 2]);
            }
        }
    }

    #[test]
    fn test_single_triangle() {
        let mut out = [[0; 3]; 1];
        write_strip(&mut out, &[4, 5, 6]);
        assert_eq!(out, [[4, 6, 5]]);
    }
}
