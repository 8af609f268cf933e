//! # Generators and Consumers
//!
//! Host-facing seams around the builder. A [`MeshGenerator`] produces a
//! mesh on demand; a [`MeshConsumer`] receives a finished mesh for
//! display and never writes back.

use crate::builder::MeshBuilder;
use crate::error::MeshError;
use crate::mesh::{GeneratedMesh, MeshBuffers};
use crate::profile::Profile;

/// A type that can produce a [`GeneratedMesh`] on demand.
pub trait MeshGenerator {
    /// Runs a full generation pass.
    fn generate(&self) -> Result<GeneratedMesh, MeshError>;
}

/// A type that displays a generated mesh.
pub trait MeshConsumer {
    /// Binds `mesh` to this consumer's render target.
    fn bind_mesh(&mut self, mesh: &GeneratedMesh);
}

impl MeshGenerator for MeshBuilder {
    fn generate(&self) -> Result<GeneratedMesh, MeshError> {
        MeshBuilder::generate(self)
    }
}

impl MeshConsumer for MeshBuffers {
    fn bind_mesh(&mut self, mesh: &GeneratedMesh) {
        *self = mesh.to_buffers();
    }
}

/// Generates a mesh and hands it to `consumer`.
///
/// On failure the consumer is left untouched.
///
/// # Example
///
/// ```rust
/// use case_mesh::{assign_mesh, MeshBuffers, MeshBuilder, Profile};
///
/// let mut buffers = MeshBuffers::default();
/// assign_mesh(&MeshBuilder::new(Profile::reference()), &mut buffers).unwrap();
/// assert_eq!(buffers.triangle_count(), 22);
/// ```
pub fn assign_mesh<G, C>(generator: &G, consumer: &mut C) -> Result<(), MeshError>
where
    G: MeshGenerator + ?Sized,
    C: MeshConsumer + ?Sized,
{
    let mesh = generator.generate()?;
    consumer.bind_mesh(&mesh);
    Ok(())
}

/// Holds a profile and the mesh last generated from it.
///
/// Callers drive the lifecycle explicitly: [`initialize`](Self::initialize)
/// once, then [`regenerate`](Self::regenerate) whenever the profile
/// changes. Each regeneration replaces the previous mesh wholesale.
#[derive(Debug, Clone, Default)]
pub struct CaseSideGenerator {
    builder: MeshBuilder,
    mesh: Option<GeneratedMesh>,
}

impl CaseSideGenerator {
    /// Creates an uninitialized generator for `profile`.
    pub fn new(profile: Profile) -> Self {
        Self {
            builder: MeshBuilder::new(profile),
            mesh: None,
        }
    }

    /// Generates the first mesh. Later calls return the existing mesh.
    pub fn initialize(&mut self) -> Result<&GeneratedMesh, MeshError> {
        let mesh = match self.mesh.take() {
            Some(mesh) => mesh,
            None => self.builder.generate()?,
        };
        Ok(self.mesh.insert(mesh))
    }

    /// Generates a new mesh from the current profile.
    ///
    /// If generation fails the previous mesh is kept.
    pub fn regenerate(&mut self) -> Result<&GeneratedMesh, MeshError> {
        let mesh = self.builder.generate()?;
        Ok(self.mesh.insert(mesh))
    }

    /// Replaces the profile. The current mesh stays until the next
    /// [`regenerate`](Self::regenerate).
    pub fn set_profile(&mut self, profile: Profile) {
        self.builder = MeshBuilder::new(profile);
    }

    /// Returns the current profile.
    pub fn profile(&self) -> &Profile {
        self.builder.profile()
    }

    /// Returns the last generated mesh, if any.
    pub fn generated_mesh(&self) -> Option<&GeneratedMesh> {
        self.mesh.as_ref()
    }
}

impl MeshGenerator for CaseSideGenerator {
    fn generate(&self) -> Result<GeneratedMesh, MeshError> {
        self.builder.generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node_pair::NodePair;

    #[derive(Default)]
    struct RecordingConsumer {
        bound: Vec<usize>,
    }

    impl MeshConsumer for RecordingConsumer {
        fn bind_mesh(&mut self, mesh: &GeneratedMesh) {
            self.bound.push(mesh.vertex_count());
        }
    }

    fn single_pair() -> Profile {
        Profile::new(vec![NodePair::from_front_xy(0.32, 0.0)], 0.02)
    }

    #[test]
    fn test_assign_binds_once() {
        let mut consumer = RecordingConsumer::default();
        assign_mesh(&MeshBuilder::new(Profile::reference()), &mut consumer).unwrap();
        assert_eq!(consumer.bound, vec![12]);
    }

    #[test]
    fn test_failed_generation_never_reaches_consumer() {
        let mut consumer = RecordingConsumer::default();
        let result = assign_mesh(&MeshBuilder::new(single_pair()), &mut consumer);
        assert!(result.is_err());
        assert!(consumer.bound.is_empty());
    }

    #[test]
    fn test_dyn_generator() {
        let generators: Vec<Box<dyn MeshGenerator>> = vec![
            Box::new(MeshBuilder::new(Profile::reference())),
            Box::new(CaseSideGenerator::new(Profile::reference())),
        ];
        let mut buffers = MeshBuffers::default();
        for generator in &generators {
            assign_mesh(generator.as_ref(), &mut buffers).unwrap();
            assert_eq!(buffers.vertex_count(), 12);
        }
    }

    #[test]
    fn test_lifecycle() {
        let mut generator = CaseSideGenerator::new(Profile::reference());
        assert!(generator.generated_mesh().is_none());

        assert_eq!(generator.initialize().unwrap().vertex_count(), 12);
        // Idempotent
        assert_eq!(generator.initialize().unwrap().vertex_count(), 12);

        let mut profile = Profile::reference();
        profile.node_pairs.push(NodePair::from_front_xy(0.0, 0.4));
        generator.set_profile(profile);
        assert_eq!(generator.generated_mesh().unwrap().vertex_count(), 12);

        assert_eq!(generator.regenerate().unwrap().vertex_count(), 16);
        assert_eq!(generator.generated_mesh().unwrap().vertex_count(), 16);
    }

    #[test]
    fn test_failed_regeneration_keeps_previous_mesh() {
        let mut generator = CaseSideGenerator::new(Profile::reference());
        generator.initialize().unwrap();

        generator.set_profile(single_pair());
        assert!(generator.regenerate().is_err());
        assert_eq!(generator.generated_mesh().unwrap().vertex_count(), 12);
    }

    #[test]
    fn test_uninitialized_generator_with_bad_profile() {
        let mut generator = CaseSideGenerator::new(single_pair());
        assert!(generator.initialize().is_err());
        assert!(generator.generated_mesh().is_none());
    }
}
