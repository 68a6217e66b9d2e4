//! # Vertex Welder
//!
//! Maps clipped positions onto shared mesh vertices. A position reuses the
//! first existing vertex within the weld tolerance on every axis; otherwise
//! a new vertex is created at exactly that position.
//!
//! The scan is linear over all vertices of the mesh, including those created
//! by earlier brushes, so adjacent brushes share their coincident corners.

use std::collections::HashSet;

use config::constants::grid_snap;
use glam::DVec3;
use mesh_description::{MeshDescription, MeshResult, VertexId};
use tracing::trace;

/// Returns the first vertex, in creation order, whose position matches
/// `position` within `tolerance` on every axis.
pub fn find_vertex(mesh: &MeshDescription, position: DVec3, tolerance: f64) -> Option<VertexId> {
    mesh.vertices()
        .find(|(_, existing)| existing.abs_diff_eq(position, tolerance))
        .map(|(id, _)| id)
}

/// Finds or creates the vertex for `position`.
///
/// Reused vertices keep their stored position.
pub fn weld_vertex(
    mesh: &mut MeshDescription,
    position: DVec3,
    tolerance: f64,
) -> MeshResult<VertexId> {
    if let Some(existing) = find_vertex(mesh, position, tolerance) {
        trace!(vertex = existing.0, ?position, "welded to existing vertex");
        return Ok(existing);
    }
    let vertex = mesh.create_vertex();
    mesh.set_vertex_position(vertex, position)?;
    trace!(vertex = vertex.0, ?position, "created vertex");
    Ok(vertex)
}

/// Rounds each coordinate to the nearest multiple of `grid`.
pub fn snap_position(position: DVec3, grid: f64) -> DVec3 {
    DVec3::new(
        grid_snap(position.x, grid),
        grid_snap(position.y, grid),
        grid_snap(position.z, grid),
    )
}

/// Welds the corners of one polygon in order.
///
/// A corner that lands on a vertex already used by this contour is dropped,
/// so the resulting contour never repeats a vertex.
#[derive(Debug, Default)]
pub struct ContourWelder {
    visited: HashSet<VertexId>,
    corners: Vec<(VertexId, DVec3)>,
}

impl ContourWelder {
    /// Creates an empty welder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Welds one corner and appends it to the contour unless its vertex is
    /// already present.
    ///
    /// `position` is recorded alongside the vertex even when the vertex was
    /// reused, so UVs can follow the face's own corners.
    pub fn push(
        &mut self,
        mesh: &mut MeshDescription,
        position: DVec3,
        tolerance: f64,
    ) -> MeshResult<()> {
        let vertex = weld_vertex(mesh, position, tolerance)?;
        if self.visited.insert(vertex) {
            self.corners.push((vertex, position));
        }
        Ok(())
    }

    /// Number of distinct corners so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.corners.len()
    }

    /// True when no corner has been pushed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.corners.is_empty()
    }

    /// Welded corners in contour order.
    pub fn into_corners(self) -> Vec<(VertexId, DVec3)> {
        self.corners
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::SNAP_THRESHOLD;

    #[test]
    fn test_weld_reuses_within_tolerance() {
        let mut mesh = MeshDescription::new();
        let a = weld_vertex(&mut mesh, DVec3::new(1.0, 2.0, 3.0), SNAP_THRESHOLD).unwrap();
        let b = weld_vertex(&mut mesh, DVec3::new(1.2, 1.8, 3.25), SNAP_THRESHOLD).unwrap();

        assert_eq!(a, b);
        assert_eq!(mesh.vertex_count(), 1);
        // First position wins
        assert_eq!(mesh.vertex_position(a).unwrap(), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_weld_is_componentwise() {
        let mut mesh = MeshDescription::new();
        let a = weld_vertex(&mut mesh, DVec3::ZERO, SNAP_THRESHOLD).unwrap();
        // Euclidean distance 0.35 but every axis within 0.25
        let b = weld_vertex(&mut mesh, DVec3::new(0.2, 0.2, 0.2), SNAP_THRESHOLD).unwrap();
        let c = weld_vertex(&mut mesh, DVec3::new(0.3, 0.0, 0.0), SNAP_THRESHOLD).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(mesh.vertex_count(), 2);
    }

    #[test]
    fn test_first_match_wins() {
        let mut mesh = MeshDescription::new();
        let first = weld_vertex(&mut mesh, DVec3::ZERO, SNAP_THRESHOLD).unwrap();
        let second = weld_vertex(&mut mesh, DVec3::new(0.4, 0.0, 0.0), SNAP_THRESHOLD).unwrap();
        assert_ne!(first, second);

        // Within tolerance of both
        let probe = DVec3::new(0.2, 0.0, 0.0);
        assert_eq!(find_vertex(&mesh, probe, SNAP_THRESHOLD), Some(first));
    }

    #[test]
    fn test_zero_tolerance_matches_exact_only() {
        let mut mesh = MeshDescription::new();
        let a = weld_vertex(&mut mesh, DVec3::ONE, 0.0).unwrap();
        assert_eq!(weld_vertex(&mut mesh, DVec3::ONE, 0.0).unwrap(), a);
        assert_ne!(weld_vertex(&mut mesh, DVec3::new(1.0, 1.0, 1.001), 0.0).unwrap(), a);
    }

    #[test]
    fn test_snap_position() {
        assert_eq!(
            snap_position(DVec3::new(0.9, -0.13, 2.0), SNAP_THRESHOLD),
            DVec3::new(1.0, -0.25, 2.0)
        );
    }

    #[test]
    fn test_contour_welder_drops_repeats() {
        let mut mesh = MeshDescription::new();
        let mut welder = ContourWelder::new();
        for position in [
            DVec3::ZERO,
            DVec3::new(0.1, 0.0, 0.0),
            DVec3::X * 4.0,
            DVec3::Y * 4.0,
        ] {
            welder.push(&mut mesh, position, SNAP_THRESHOLD).unwrap();
        }

        assert_eq!(welder.len(), 3);
        let corners = welder.into_corners();
        assert_eq!(corners[0].1, DVec3::ZERO);
        assert_eq!(mesh.vertex_count(), 3);
    }
}
