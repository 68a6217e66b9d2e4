//! # Brush Mesh Builder
//!
//! Drives one brush through the pipeline:
//!
//! ```text
//! Side ─► filter ─► clip ─► weld ─► group ─► instances + UV ─► polygon
//!                                                                 │
//!                       all sides done ─► resolve smoothing ◄─────┘
//! ```
//!
//! Each side either contributes one polygon or is skipped with a
//! [`SideRejection`]; a skipped side never leaves instances or groups
//! behind in the mesh.

use config::constants::MIN_POLYGON_VERTICES;
use glam::DVec3;
use mesh_description::{MeshDescription, MeshError, VertexId, VertexInstanceId};
use tracing::debug;

use crate::brush::{Brush, Side};
use crate::clipper::clip_side;
use crate::error::BrushResult;
use crate::filter::check_side;
use crate::material::find_or_create_polygon_group;
use crate::poly::ClipPolygon;
use crate::report::{BrushBuildReport, EmittedFace, SideRejection, SkippedSide};
use crate::settings::BuildSettings;
use crate::smoothing::resolve_smoothing;
use crate::uv::project_uv;
use crate::weld::{snap_position, ContourWelder};

/// Builds brush geometry into a caller-owned mesh.
///
/// # Example
///
/// ```rust
/// use brush_mesh::{Brush, BrushMeshBuilder};
/// use glam::DVec3;
/// use mesh_description::MeshDescription;
///
/// let brush = Brush::axis_aligned_box(DVec3::splat(-1.0), DVec3::splat(1.0), "dev/cube");
/// let mut mesh = MeshDescription::new();
///
/// let report = BrushMeshBuilder::default().build_brush(&brush, &mut mesh)?;
///
/// assert_eq!(report.polygon_count(), 6);
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.edge_count(), 12);
/// # Ok::<(), brush_mesh::BrushError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BrushMeshBuilder {
    settings: BuildSettings,
}

impl BrushMeshBuilder {
    /// Creates a builder with the given settings.
    pub fn new(settings: BuildSettings) -> Self {
        Self { settings }
    }

    /// Returns the builder settings.
    #[inline]
    pub fn settings(&self) -> &BuildSettings {
        &self.settings
    }

    /// Appends the faces of `brush` to `mesh`.
    ///
    /// Vertices within the weld tolerance of existing ones, including those
    /// of earlier brushes, are shared, and polygon groups are shared by
    /// material. Edge hardness is resolved from this brush's faces once all
    /// sides are processed.
    ///
    /// # Errors
    ///
    /// Returns `BrushError::Mesh` when the mesh does not carry the configured
    /// UV channel. Degenerate sides are not errors; see the report.
    pub fn build_brush(
        &self,
        brush: &Brush,
        mesh: &mut MeshDescription,
    ) -> BrushResult<BrushBuildReport> {
        let channel = self.settings.uv_channel();
        if channel >= mesh.uv_channel_count() {
            return Err(MeshError::UvChannelOutOfRange {
                channel,
                channels: mesh.uv_channel_count(),
            }
            .into());
        }

        let mut report = BrushBuildReport::default();
        for (index, side) in brush.sides().iter().enumerate() {
            match self.build_side(brush, index, side, mesh)? {
                Ok(face) => report.emitted.push(face),
                Err(reason) => {
                    debug!(side = index, %reason, "skipped brush side");
                    report.skipped.push(SkippedSide { side: index, reason });
                }
            }
        }

        resolve_smoothing(mesh, brush, &report.emitted)?;

        debug!(
            sides = brush.len(),
            polygons = report.polygon_count(),
            skipped = report.skipped.len(),
            "built brush"
        );
        Ok(report)
    }

    /// Builds several brushes into the same mesh, in order.
    ///
    /// Smoothing is resolved per brush, so edges shared by two brushes keep
    /// whatever the later brush wrote.
    pub fn build_brushes<'a, I>(
        &self,
        brushes: I,
        mesh: &mut MeshDescription,
    ) -> BrushResult<Vec<BrushBuildReport>>
    where
        I: IntoIterator<Item = &'a Brush>,
    {
        brushes
            .into_iter()
            .map(|brush| self.build_brush(brush, mesh))
            .collect()
    }

    /// Emits the polygon of one side.
    ///
    /// The outer result carries mesh errors, the inner one the reason the
    /// side produced nothing.
    fn build_side(
        &self,
        brush: &Brush,
        index: usize,
        side: &Side,
        mesh: &mut MeshDescription,
    ) -> BrushResult<Result<EmittedFace, SideRejection>> {
        if let Err(reason) = check_side(side, self.settings.texture_alignment_threshold()) {
            return Ok(Err(reason));
        }
        let face = match clip_side(brush, index, self.settings.clip_epsilon()) {
            Ok(face) => face,
            Err(reason) => return Ok(Err(reason)),
        };

        let corners = self.weld_face(&face, mesh)?;
        if corners.len() < MIN_POLYGON_VERTICES {
            return Ok(Err(SideRejection::ContourCollapsed));
        }

        let group = find_or_create_polygon_group(mesh, &side.material)?;
        let channel = self.settings.uv_channel();
        let mut contour: Vec<VertexInstanceId> = Vec::with_capacity(corners.len());
        for (vertex, position) in corners {
            let instance = mesh.create_vertex_instance(vertex)?;
            mesh.set_vertex_instance_uv(instance, channel, project_uv(side, position))?;
            contour.push(instance);
        }

        let polygon = mesh.create_polygon(group, &contour)?;
        Ok(Ok(EmittedFace { polygon, side: index }))
    }

    fn weld_face(
        &self,
        face: &ClipPolygon,
        mesh: &mut MeshDescription,
    ) -> BrushResult<Vec<(VertexId, DVec3)>> {
        let tolerance = self.settings.weld_tolerance();
        let mut welder = ContourWelder::new();
        for &position in face.vertices() {
            let position = if self.settings.snap_to_grid() {
                snap_position(position, tolerance)
            } else {
                position
            };
            welder.push(mesh, position, tolerance)?;
        }
        Ok(welder.into_corners())
    }
}

/// Builds `brush` into `mesh` with default settings.
///
/// Shorthand for `BrushMeshBuilder::default().build_brush(brush, mesh)`.
pub fn build_brush_geometry(
    brush: &Brush,
    mesh: &mut MeshDescription,
) -> BrushResult<BrushBuildReport> {
    BrushMeshBuilder::default().build_brush(brush, mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BrushError;

    fn cube() -> Brush {
        Brush::axis_aligned_box(DVec3::splat(-1.0), DVec3::splat(1.0), "dev/cube")
    }

    #[test]
    fn test_build_cube_reports_every_side() {
        let mut mesh = MeshDescription::new();
        let report = build_brush_geometry(&cube(), &mut mesh).unwrap();

        assert_eq!(report.polygon_count(), 6);
        assert!(report.skipped.is_empty());
        let sides: Vec<usize> = report.emitted.iter().map(|face| face.side).collect();
        assert_eq!(sides, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(mesh.vertex_instance_count(), 24);
        assert_eq!(mesh.polygon_group_count(), 1);
    }

    #[test]
    fn test_missing_uv_channel_is_an_error() {
        let builder =
            BrushMeshBuilder::new(BuildSettings::default().with_uv_channel(3).unwrap());
        let mut mesh = MeshDescription::new();

        let err = builder.build_brush(&cube(), &mut mesh).unwrap_err();
        assert_eq!(
            err,
            BrushError::Mesh(MeshError::UvChannelOutOfRange { channel: 3, channels: 1 })
        );
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_configured_uv_channel_is_written() {
        let builder =
            BrushMeshBuilder::new(BuildSettings::default().with_uv_channel(1).unwrap());
        let mut mesh = MeshDescription::with_uv_channels(2).unwrap();
        builder.build_brush(&cube(), &mut mesh).unwrap();

        let instance = VertexInstanceId(0);
        let position = mesh
            .vertex_position(mesh.vertex_instance_vertex(instance).unwrap())
            .unwrap();
        let written = mesh.vertex_instance_uv(instance, 1).unwrap();
        let brush = cube();
        assert_eq!(written, project_uv(&brush.sides[0], position));
    }

    #[test]
    fn test_coarse_weld_collapses_face() {
        // Tolerance wider than the brush welds every corner together
        let settings = BuildSettings::new(4.0, 0.1, 1e-5).unwrap();
        let mut mesh = MeshDescription::new();
        let report = BrushMeshBuilder::new(settings)
            .build_brush(&cube(), &mut mesh)
            .unwrap();

        assert!(report.is_empty());
        assert_eq!(report.rejection(0), Some(SideRejection::ContourCollapsed));
        assert_eq!(mesh.polygon_group_count(), 0);
        assert_eq!(mesh.vertex_instance_count(), 0);
    }
}
