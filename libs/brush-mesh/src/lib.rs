//! # Brush Mesh
//!
//! Converts convex brushes into attributed polygon meshes.
//! A brush is a set of planes; the solid is the intersection of the
//! half-spaces behind them.
//!
//! ## Architecture
//!
//! ```text
//! Brush (sides) → brush-mesh → MeshDescription (vertices, polygons, edges)
//! ```
//!
//! ## Stages
//!
//! - **Filter**: skip non-emitting sides and edge-on texture projections
//! - **Clip**: cut each side's plane down to its face
//! - **Weld**: share vertices within a quarter unit across the whole mesh
//! - **Bucket**: one polygon group per material
//! - **Project**: planar UVs from the side's texture axes
//! - **Smooth**: hard or soft edges from smoothing groups
//!
//! ## Usage
//!
//! ```rust
//! use brush_mesh::{build_brush_geometry, Brush, SmoothingGroups};
//! use glam::DVec3;
//! use mesh_description::MeshDescription;
//!
//! let mut brush = Brush::axis_aligned_box(DVec3::ZERO, DVec3::splat(64.0), "dev/crate");
//! brush.sides[4].smoothing_groups = SmoothingGroups::group(1);
//!
//! let mut mesh = MeshDescription::new();
//! build_brush_geometry(&brush, &mut mesh)?;
//!
//! let hard = mesh.edges().filter(|&e| mesh.edge_is_hard(e) == Ok(true)).count();
//! assert_eq!(hard, 4);
//! # Ok::<(), brush_mesh::BrushError>(())
//! ```

pub mod brush;
pub mod builder;
pub mod clipper;
pub mod error;
pub mod filter;
pub mod material;
pub mod poly;
pub mod report;
pub mod settings;
pub mod smoothing;
pub mod uv;
pub mod weld;

pub use brush::{Brush, Plane, Side, SmoothingGroups, TextureAxis};
pub use builder::{build_brush_geometry, BrushMeshBuilder};
pub use error::{BrushError, BrushResult};
pub use mesh_description::{Material, MeshDescription};
pub use report::{BrushBuildReport, EmittedFace, SideRejection, SkippedSide};
pub use settings::{BuildSettings, ConfigError};
