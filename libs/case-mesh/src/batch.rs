//! # Batch Generation
//!
//! Generation passes share no state, so many profiles can be meshed in
//! parallel.

use crate::builder::build_mesh;
use crate::error::MeshError;
use crate::mesh::GeneratedMesh;
use crate::profile::Profile;
use rayon::prelude::*;

/// Generates one mesh per profile in parallel, in input order.
///
/// A failing profile yields an `Err` in its slot without affecting the
/// others.
///
/// # Example
///
/// ```rust
/// use case_mesh::{generate_batch, Profile};
///
/// let results = generate_batch(&[Profile::reference(), Profile::new(Vec::new(), 0.02)]);
/// assert!(results[0].is_ok());
/// assert!(results[1].is_err());
/// ```
pub fn generate_batch(profiles: &[Profile]) -> Vec<Result<GeneratedMesh, MeshError>> {
    profiles.par_iter().map(build_mesh).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn test_batch_preserves_order() {
        let profiles: Vec<Profile> = (2..20)
            .map(|n| Profile::from_front_nodes((0..n).map(|i| DVec2::new(0.3, i as f64 * 0.1)), 0.02))
            .collect();

        let results = generate_batch(&profiles);
        assert_eq!(results.len(), profiles.len());
        for (profile, result) in profiles.iter().zip(&results) {
            let mesh = result.as_ref().unwrap();
            assert_eq!(mesh.vertex_count(), profile.len() * 4);
        }
    }

    #[test]
    fn test_batch_matches_sequential() {
        let profiles = vec![Profile::reference(); 8];
        let sequential: Vec<GeneratedMesh> = profiles.iter().map(|p| build_mesh(p).unwrap()).collect();
        for (parallel, expected) in generate_batch(&profiles).into_iter().zip(&sequential) {
            assert_eq!(&parallel.unwrap(), expected);
        }
    }

    #[test]
    fn test_empty_batch() {
        assert!(generate_batch(&[]).is_empty());
    }
}
