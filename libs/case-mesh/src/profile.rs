//! # Profiles
//!
//! The explicit configuration value a [`MeshBuilder`](crate::MeshBuilder)
//! is constructed from: an ordered list of node pairs plus a thickness.
//!
//! Profiles can be built in code or loaded from JSON:
//!
//! ```json
//! {
//!   "thickness": 0.02,
//!   "node_pairs": [
//!     { "front": [0.32, 0.0] },
//!     { "front": [0.32, 0.16], "rear": [0.0, 0.16] }
//!   ]
//! }
//! ```
//!
//! `rear` defaults to the front point projected onto `x = 0` and
//! `thickness` defaults to [`DEFAULT_THICKNESS`].

use crate::error::MeshError;
use crate::node_pair::NodePair;
use config::constants::{ExtrusionConfig, DEFAULT_THICKNESS, REFERENCE_FRONT_NODES};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Ordered node pairs and the thickness they are extruded with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    /// Rungs of the profile, in polyline order
    pub node_pairs: Vec<NodePair>,
    /// Offset of each face from the profile plane
    pub thickness: f64,
}

impl Profile {
    /// Creates a profile. Nothing is validated until generation.
    pub fn new(node_pairs: Vec<NodePair>, thickness: f64) -> Self {
        Self {
            node_pairs,
            thickness,
        }
    }

    /// Creates a profile from front points only, with straight rear wall.
    ///
    /// # Example
    ///
    /// ```rust
    /// use case_mesh::Profile;
    /// use glam::DVec2;
    ///
    /// let profile = Profile::from_front_nodes([DVec2::new(1.0, 0.0), DVec2::new(1.0, 1.0)], 0.1);
    /// assert_eq!(profile.len(), 2);
    /// ```
    pub fn from_front_nodes(fronts: impl IntoIterator<Item = DVec2>, thickness: f64) -> Self {
        Self::new(fronts.into_iter().map(NodePair::from_front).collect(), thickness)
    }

    /// The three-rung reference case side at the default thickness.
    pub fn reference() -> Self {
        Self::from_front_nodes(
            REFERENCE_FRONT_NODES.iter().map(|&[x, y]| DVec2::new(x, y)),
            DEFAULT_THICKNESS,
        )
    }

    /// Parses a profile from a JSON document.
    ///
    /// Only the document shape is checked here; generation preconditions
    /// are checked by [`Profile::validate`].
    pub fn from_json(source: &str) -> Result<Self, MeshError> {
        let document: ProfileDocument = serde_json::from_str(source)?;
        let node_pairs = document
            .node_pairs
            .into_iter()
            .map(|entry| match entry.rear {
                Some(rear) => NodePair::new(entry.front, rear),
                None => NodePair::from_front(entry.front),
            })
            .collect();
        Ok(Self::new(node_pairs, document.thickness))
    }

    /// Returns the number of node pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.node_pairs.len()
    }

    /// Returns true if the profile has no node pairs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.node_pairs.is_empty()
    }

    /// Checks the generation preconditions: at least two node pairs and a
    /// positive, finite thickness.
    pub fn validate(&self) -> Result<ExtrusionConfig, MeshError> {
        let config = ExtrusionConfig::new(self.thickness)?;
        config.check_node_pairs(self.node_pairs.len())?;
        Ok(config)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::reference()
    }
}

#[derive(Deserialize)]
struct ProfileDocument {
    #[serde(default = "default_thickness")]
    thickness: f64,
    node_pairs: Vec<NodePairEntry>,
}

#[derive(Deserialize)]
struct NodePairEntry {
    front: DVec2,
    #[serde(default)]
    rear: Option<DVec2>,
}

fn default_thickness() -> f64 {
    DEFAULT_THICKNESS
}
