//! # Config Crate
//!
//! Centralized configuration constants for case-side mesh generation.
//! Every literal the mesh kernel depends on (thickness, profile bounds,
//! extrusion axis, reference profile) lives here so downstream crates
//! stay declarative.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ExtrusionConfig, DEFAULT_THICKNESS, MIN_NODE_PAIRS};
//!
//! let cfg = ExtrusionConfig::default();
//! assert_eq!(cfg.thickness, DEFAULT_THICKNESS);
//! assert_eq!(cfg.min_node_pairs, MIN_NODE_PAIRS);
//! ```

pub mod constants;
