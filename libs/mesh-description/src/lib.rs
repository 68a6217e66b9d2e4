//! # Mesh Description
//!
//! Attributed polygon mesh used as the output accumulator of the brush
//! builder. A single `MeshDescription` is created per build session and
//! filled brush by brush.
//!
//! ## Element Model
//!
//! ```text
//! Vertex ◄── VertexInstance (UV per channel) ◄── Polygon ──► PolygonGroup (Material)
//!   ▲                                              │
//!   └──────────────── Edge (is_hard, crease) ◄─────┘
//! ```
//!
//! Edges are never created directly: they are derived from consecutive
//! vertex pairs of polygon contours and shared between every polygon that
//! walks the same pair.
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use mesh_description::{Material, MeshDescription};
//!
//! let mut mesh = MeshDescription::new();
//! let group = mesh.create_polygon_group();
//! mesh.set_polygon_group_material(group, Material::new("dev/floor"))?;
//!
//! let mut contour = Vec::new();
//! for position in [DVec3::ZERO, DVec3::X, DVec3::Y] {
//!     let vertex = mesh.create_vertex();
//!     mesh.set_vertex_position(vertex, position)?;
//!     contour.push(mesh.create_vertex_instance(vertex)?);
//! }
//! let polygon = mesh.create_polygon(group, &contour)?;
//!
//! assert_eq!(mesh.polygon_edges(polygon)?.len(), 3);
//! # Ok::<(), mesh_description::MeshError>(())
//! ```

pub mod error;
pub mod ids;
pub mod material;
pub mod mesh;

pub use error::{MeshError, MeshResult};
pub use ids::{EdgeId, PolygonGroupId, PolygonId, VertexId, VertexInstanceId};
pub use material::Material;
pub use mesh::MeshDescription;
