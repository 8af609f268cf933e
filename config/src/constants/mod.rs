//! Centralized configuration values shared by the case-side mesh pipeline.
//!
//! Each public item documents its purpose and carries a minimal usage
//! example so downstream crates avoid scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!(EPSILON < 1.0e-6);
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// PROFILE CONSTANTS
// =============================================================================

/// Half-thickness applied along the extrusion axis on each side of the
/// profile plane. The near face sits at `-DEFAULT_THICKNESS`, the far face
/// at `+DEFAULT_THICKNESS`.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_THICKNESS;
/// assert!(DEFAULT_THICKNESS > 0.0);
/// ```
pub const DEFAULT_THICKNESS: f64 = 0.02;

/// Minimum number of node pairs a profile needs.
///
/// Each end cap is a quad spanning two vertices per face, and the face
/// strips need at least two rungs to produce a triangle.
///
/// # Examples
/// ```
/// use config::constants::MIN_NODE_PAIRS;
/// assert_eq!(MIN_NODE_PAIRS, 2);
/// ```
pub const MIN_NODE_PAIRS: usize = 2;

/// Maximum number of node pairs accepted by the mesh builder.
///
/// Keeps the `4 * N` vertex index space well inside `u32`.
///
/// # Examples
/// ```
/// use config::constants::MAX_NODE_PAIRS;
/// assert!((MAX_NODE_PAIRS * 4) < u32::MAX as usize);
/// ```
pub const MAX_NODE_PAIRS: usize = 1 << 24;

/// Front nodes of the reference case-side profile, bottom to top.
///
/// Rear nodes are derived by projecting each front node onto the
/// symmetry axis (`x = 0`).
///
/// # Examples
/// ```
/// use config::constants::REFERENCE_FRONT_NODES;
/// assert_eq!(REFERENCE_FRONT_NODES.len(), 3);
/// assert_eq!(REFERENCE_FRONT_NODES[2], [0.16, 0.32]);
/// ```
pub const REFERENCE_FRONT_NODES: [[f64; 2]; 3] = [[0.32, 0.0], [0.32, 0.16], [0.16, 0.32]];

/// Unit direction along which thickness is applied ("forward", +Z).
///
/// # Examples
/// ```
/// use config::constants::EXTRUSION_AXIS;
/// assert_eq!(EXTRUSION_AXIS, [0.0, 0.0, 1.0]);
/// ```
pub const EXTRUSION_AXIS: [f64; 3] = [0.0, 0.0, 1.0];

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within [`EPSILON`].
///
/// # Examples
/// ```
/// use config::constants::approx_equal;
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Validated extrusion settings shared between crates.
///
/// # Examples
/// ```
/// use config::constants::ExtrusionConfig;
/// let config = ExtrusionConfig::default();
/// assert!(config.thickness > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrusionConfig {
    /// Offset applied along the extrusion axis to each face.
    pub thickness: f64,
    /// Smallest profile the builder accepts.
    pub min_node_pairs: usize,
}

impl ExtrusionConfig {
    /// Builds a configuration, rejecting non-positive or non-finite
    /// thickness values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ExtrusionConfig;
    /// let cfg = ExtrusionConfig::new(0.05).expect("valid config");
    /// assert_eq!(cfg.thickness, 0.05);
    /// assert!(ExtrusionConfig::new(0.0).is_err());
    /// ```
    pub fn new(thickness: f64) -> Result<Self, ConfigError> {
        if !thickness.is_finite() || thickness <= 0.0 {
            return Err(ConfigError::InvalidThickness(thickness));
        }
        Ok(Self {
            thickness,
            min_node_pairs: MIN_NODE_PAIRS,
        })
    }

    /// Checks that a profile with `count` node pairs can be extruded.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, ExtrusionConfig};
    /// let cfg = ExtrusionConfig::default();
    /// assert!(cfg.check_node_pairs(3).is_ok());
    /// assert_eq!(cfg.check_node_pairs(1), Err(ConfigError::TooFewNodePairs(1)));
    /// ```
    pub fn check_node_pairs(&self, count: usize) -> Result<(), ConfigError> {
        if count < self.min_node_pairs {
            return Err(ConfigError::TooFewNodePairs(count));
        }
        if count > MAX_NODE_PAIRS {
            return Err(ConfigError::TooManyNodePairs(count));
        }
        Ok(())
    }
}

impl Default for ExtrusionConfig {
    fn default() -> Self {
        Self {
            thickness: DEFAULT_THICKNESS,
            min_node_pairs: MIN_NODE_PAIRS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when thickness is zero, negative or not finite.
    InvalidThickness(f64),
    /// Raised when a profile has fewer node pairs than an end cap needs.
    TooFewNodePairs(usize),
    /// Raised when a profile would overflow the vertex index space.
    TooManyNodePairs(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidThickness(value) => {
                write!(f, "thickness must be positive and finite: {value}")
            }
            ConfigError::TooFewNodePairs(count) => {
                write!(f, "profile needs at least {MIN_NODE_PAIRS} node pairs: {count}")
            }
            ConfigError::TooManyNodePairs(count) => {
                write!(f, "profile exceeds {MAX_NODE_PAIRS} node pairs: {count}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
