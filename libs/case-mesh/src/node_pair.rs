//! # Node Pairs
//!
//! One cross-section rung of a case-side profile.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A front/rear coordinate pair at one position along the profile.
///
/// # Example
///
/// ```rust
/// use case_mesh::NodePair;
/// use glam::DVec2;
///
/// let pair = NodePair::from_front_xy(0.32, 0.16);
/// assert_eq!(pair.front, DVec2::new(0.32, 0.16));
/// assert_eq!(pair.rear, DVec2::new(0.0, 0.16));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodePair {
    /// Point on the front profile
    pub front: DVec2,
    /// Matching point on the rear wall
    pub rear: DVec2,
}

impl NodePair {
    /// Creates a node pair from explicit front and rear points.
    pub fn new(front: DVec2, rear: DVec2) -> Self {
        Self { front, rear }
    }

    /// Creates a node pair whose rear point is the front point projected
    /// onto the symmetry axis, i.e. a straight case rear at `x = 0`.
    pub fn from_front(front: DVec2) -> Self {
        Self {
            front,
            rear: DVec2::new(0.0, front.y),
        }
    }

    /// Shorthand for [`NodePair::from_front`] with scalar coordinates.
    pub fn from_front_xy(x: f64, y: f64) -> Self {
        Self::from_front(DVec2::new(x, y))
    }
}

impl From<DVec2> for NodePair {
    fn from(front: DVec2) -> Self {
        Self::from_front(front)
    }
}
