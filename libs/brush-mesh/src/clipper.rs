//! # Face Clipper
//!
//! Cuts the infinite polygon of one side down to the brush face by clipping
//! it against every other side's half-space.

use crate::brush::Brush;
use crate::poly::ClipPolygon;
use crate::report::SideRejection;

/// Computes the face of side `index` of `brush`.
///
/// Other sides are applied in ascending index order and clipping stops at
/// the first side that removes the face entirely. The survivor is fixed
/// and must be bounded to count as a face.
///
/// # Errors
///
/// - `Degenerate` when the side's plane has no usable normal, the index is
///   out of range or the fixed polygon has no area
/// - `ClippedAway` when another side removes the whole face
/// - `Unbounded` when the other sides do not close the face
pub fn clip_side(brush: &Brush, index: usize, epsilon: f64) -> Result<ClipPolygon, SideRejection> {
    let side = brush.sides().get(index).ok_or(SideRejection::Degenerate)?;
    let initial = ClipPolygon::from_plane(&side.plane).ok_or(SideRejection::Degenerate)?;

    let clipped = brush
        .sides()
        .iter()
        .enumerate()
        .filter(|(other_index, _)| *other_index != index)
        .try_fold(initial, |polygon, (_, other)| {
            polygon
                .clip_behind(&other.plane, epsilon)
                .ok_or(SideRejection::ClippedAway)
        })?;

    if !clipped.is_bounded() {
        return Err(SideRejection::Unbounded);
    }
    clipped.fix().ok_or(SideRejection::Degenerate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::{Plane, Side};
    use approx::assert_relative_eq;
    use config::constants::CLIP_PLANE_EPSILON;
    use glam::DVec3;

    fn unit_cube() -> Brush {
        Brush::axis_aligned_box(DVec3::splat(-1.0), DVec3::splat(1.0), "dev/cube")
    }

    #[test]
    fn test_cube_face_is_square() {
        let brush = unit_cube();
        for (index, side) in brush.sides().iter().enumerate() {
            let face = clip_side(&brush, index, CLIP_PLANE_EPSILON).unwrap();
            assert_eq!(face.len(), 4);
            assert_relative_eq!(face.area(), 4.0, epsilon = 1e-9);
            for v in face.vertices() {
                assert_relative_eq!(side.plane.signed_distance(*v), 0.0, epsilon = 1e-9);
                assert!(v.abs().abs_diff_eq(DVec3::ONE, 1e-9));
            }
        }
    }

    #[test]
    fn test_face_winds_outward() {
        let brush = unit_cube();
        for (index, side) in brush.sides().iter().enumerate() {
            let face = clip_side(&brush, index, CLIP_PLANE_EPSILON).unwrap();
            assert!(face.newell_normal().normalize().dot(side.plane.normal) > 0.999);
        }
    }

    #[test]
    fn test_outside_side_is_clipped_away() {
        let mut brush = unit_cube();
        brush.sides.push(Side::new(Plane::new(DVec3::X, 5.0), "dev/cube"));

        assert_eq!(
            clip_side(&brush, 6, CLIP_PLANE_EPSILON),
            Err(SideRejection::ClippedAway)
        );
        // The redundant side does not change the real faces
        let face = clip_side(&brush, 0, CLIP_PLANE_EPSILON).unwrap();
        assert_relative_eq!(face.area(), 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_three_sided_brush_is_unbounded() {
        let brush = Brush::new(vec![
            Side::new(Plane::new(DVec3::X, 1.0), "dev/wedge"),
            Side::new(Plane::new(DVec3::Y, 1.0), "dev/wedge"),
            Side::new(Plane::new(DVec3::Z, 1.0), "dev/wedge"),
        ]);
        for index in 0..brush.len() {
            assert_eq!(
                clip_side(&brush, index, CLIP_PLANE_EPSILON),
                Err(SideRejection::Unbounded)
            );
        }
    }

    #[test]
    fn test_chamfer_cuts_pentagon() {
        let mut brush = unit_cube();
        brush
            .sides
            .push(Side::new(Plane::new(DVec3::ONE, 1.5 * 3f64.sqrt()), "dev/cube"));

        // +X face loses its (1, 1, 1) corner
        let face = clip_side(&brush, 0, CLIP_PLANE_EPSILON).unwrap();
        assert_eq!(face.len(), 5);
        // Chamfer face is a triangle
        let chamfer = clip_side(&brush, 6, CLIP_PLANE_EPSILON).unwrap();
        assert_eq!(chamfer.len(), 3);
    }

    #[test]
    fn test_out_of_range_index_is_degenerate() {
        assert_eq!(
            clip_side(&unit_cube(), 42, CLIP_PLANE_EPSILON),
            Err(SideRejection::Degenerate)
        );
    }
}
