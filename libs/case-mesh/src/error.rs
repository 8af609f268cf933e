//! # Mesh Errors
//!
//! Error types for case-side mesh generation.

use config::constants::{ConfigError, MAX_NODE_PAIRS, MIN_NODE_PAIRS};
use thiserror::Error;

/// Errors that can occur while loading a profile or generating its mesh.
///
/// Degenerate geometry (coincident or collinear node pairs) is not an
/// error: zero-area triangles are emitted as-is.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Profile has fewer node pairs than an end cap needs
    #[error("Too few node pairs: {count} (min: {min})")]
    TooFewNodePairs { count: usize, min: usize },

    /// Profile would overflow the u32 vertex index space
    #[error("Too many node pairs: {count} (max: {max})")]
    TooManyNodePairs { count: usize, max: usize },

    /// Thickness is zero, negative or not finite
    #[error("Invalid thickness: {thickness}")]
    InvalidThickness { thickness: f64 },

    /// Profile document could not be parsed
    #[error("Profile parse error: {0}")]
    ProfileParse(#[from] serde_json::Error),

    /// Mesh validation failed
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },
}

impl MeshError {
    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Returns true for errors raised because the caller broke a
    /// generation precondition.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            Self::TooFewNodePairs { .. } | Self::TooManyNodePairs { .. } | Self::InvalidThickness { .. }
        )
    }
}

impl From<ConfigError> for MeshError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidThickness(thickness) => Self::InvalidThickness { thickness },
            ConfigError::TooFewNodePairs(count) => Self::TooFewNodePairs {
                count,
                min: MIN_NODE_PAIRS,
            },
            ConfigError::TooManyNodePairs(count) => Self::TooManyNodePairs {
                count,
                max: MAX_NODE_PAIRS,
            },
        }
    }
}
