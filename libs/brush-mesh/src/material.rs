//! # Material Bucketer
//!
//! One polygon group per distinct material in a mesh.

use mesh_description::{Material, MeshDescription, MeshResult, PolygonGroupId};
use tracing::trace;

/// Returns the first polygon group whose material equals `material`.
pub fn find_polygon_group(mesh: &MeshDescription, material: &Material) -> Option<PolygonGroupId> {
    mesh.polygon_groups()
        .find(|(_, existing)| *existing == material)
        .map(|(id, _)| id)
}

/// Returns the polygon group for `material`, creating it on first use.
///
/// Groups created by earlier brushes are reused, so a mesh never holds two
/// groups with the same material.
pub fn find_or_create_polygon_group(
    mesh: &mut MeshDescription,
    material: &Material,
) -> MeshResult<PolygonGroupId> {
    if let Some(group) = find_polygon_group(mesh, material) {
        return Ok(group);
    }
    let group = mesh.create_polygon_group();
    mesh.set_polygon_group_material(group, material.clone())?;
    trace!(group = group.0, %material, "created polygon group");
    Ok(group)
}
