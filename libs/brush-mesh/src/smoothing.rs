//! # Smoothing Resolver
//!
//! Marks each edge of a freshly built brush hard or soft from the smoothing
//! groups of the faces meeting at it.
//!
//! Only faces emitted by the same build call take part. An edge shared with
//! a polygon of another brush is resolved from this brush's faces alone,
//! and a later build may overwrite it.

use std::collections::{HashMap, HashSet};

use config::constants::{HARD_EDGE_CREASE_SHARPNESS, SOFT_EDGE_CREASE_SHARPNESS};
use mesh_description::{EdgeId, MeshDescription, MeshResult, PolygonId};

use crate::brush::{Brush, SmoothingGroups};
use crate::report::EmittedFace;

/// Combined smoothing groups of the faces of `emitted` that touch `edge`.
///
/// Returns `None` when no such face touches the edge.
fn edge_smoothing_groups(
    mesh: &MeshDescription,
    edge: EdgeId,
    face_groups: &HashMap<PolygonId, SmoothingGroups>,
) -> MeshResult<Option<SmoothingGroups>> {
    Ok(mesh
        .edge_connected_polygons(edge)?
        .iter()
        .filter_map(|polygon| face_groups.get(polygon).copied())
        .reduce(|mask, groups| mask & groups))
}

/// Writes `is_hard` and crease sharpness on every edge of the emitted faces.
///
/// An edge is soft when all faces of this build around it share at least one
/// smoothing group, and hard otherwise. A boundary edge is soft unless its
/// face has no group at all.
pub fn resolve_smoothing(
    mesh: &mut MeshDescription,
    brush: &Brush,
    emitted: &[EmittedFace],
) -> MeshResult<()> {
    let face_groups: HashMap<PolygonId, SmoothingGroups> = emitted
        .iter()
        .filter_map(|face| {
            brush
                .sides()
                .get(face.side)
                .map(|side| (face.polygon, side.smoothing_groups))
        })
        .collect();

    let mut resolved = HashSet::new();
    for face in emitted {
        let edges = mesh.polygon_edges(face.polygon)?.to_vec();
        for edge in edges {
            if !resolved.insert(edge) {
                continue;
            }
            let Some(mask) = edge_smoothing_groups(mesh, edge, &face_groups)? else {
                continue;
            };
            let is_hard = mask.is_empty();
            let sharpness = if is_hard {
                HARD_EDGE_CREASE_SHARPNESS
            } else {
                SOFT_EDGE_CREASE_SHARPNESS
            };
            mesh.set_edge_hard(edge, is_hard)?;
            mesh.set_edge_crease_sharpness(edge, sharpness)?;
        }
    }
    Ok(())
}
