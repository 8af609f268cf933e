//! # Case Mesh
//!
//! Procedural mesh generation for case-side profiles.
//! Extrudes an ordered list of front/rear node pairs by a fixed thickness
//! into a closed triangle mesh.
//!
//! ## Architecture
//!
//! ```text
//! Profile (node pairs + thickness) → MeshBuilder → GeneratedMesh → MeshConsumer
//! ```
//!
//! ## Mesh Regions
//!
//! - **Near/far faces**: zig-zag strips offset `∓thickness` along +Z
//! - **Edges**: side walls joining the two faces
//! - **End caps**: quads closing the first and last rung
//!
//! ## Usage
//!
//! ```rust
//! use case_mesh::{MeshBuilder, Profile};
//!
//! let mesh = MeshBuilder::new(Profile::reference()).generate()?;
//! assert_eq!(mesh.vertex_count(), 12);
//! assert_eq!(mesh.triangle_count(), 22);
//! # Ok::<(), case_mesh::MeshError>(())
//! ```

pub mod batch;
pub mod builder;
pub mod error;
pub mod generator;
pub mod mesh;
pub mod node_pair;
pub mod profile;

pub use batch::generate_batch;
pub use builder::{build_mesh, MeshBuilder, MeshLayout};
pub use error::MeshError;
pub use generator::{assign_mesh, CaseSideGenerator, MeshConsumer, MeshGenerator};
pub use mesh::{GeneratedMesh, MeshBuffers};
pub use node_pair::NodePair;
pub use profile::Profile;
