//! # End Caps
//!
//! Quads closing the first and last rung between near and far faces.

use super::strip::write_strip;

/// Writes both end caps (two triangles each) into `out`.
pub(crate) fn write_end_caps(out: &mut [[u32; 3]], vertices_per_face: usize) {
    debug_assert_eq!(out.len(), 4);

    let h = vertices_per_face as u32;
    let (first, last) = out.split_at_mut(2);
    write_strip(first, &[0, h + 1, 1, h]);
    write_strip(last, &[h - 2, h - 1, 2 * h - 1, 2 * h - 2]);
}
