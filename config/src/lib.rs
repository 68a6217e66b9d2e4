//! # Config Crate
//!
//! Centralized configuration constants for the brush-to-mesh pipeline.
//! All tolerances and tunable parameters are defined here so the mesh
//! accumulator and the brush builder agree on the same numbers.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{SNAP_THRESHOLD, TEXTURE_ALIGNMENT_THRESHOLD};
//!
//! // Two positions closer than SNAP_THRESHOLD on every axis weld together
//! let a = [0.0_f64, 0.0, 0.0];
//! let b = [0.2_f64, -0.1, 0.0];
//! let welds = a.iter().zip(&b).all(|(x, y)| (x - y).abs() <= SNAP_THRESHOLD);
//! assert!(welds);
//!
//! // Texture projections nearly edge-on to a face are rejected
//! assert!(0.05 < TEXTURE_ALIGNMENT_THRESHOLD);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Editor Units**: Tolerances are expressed in world units, not ratios
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
