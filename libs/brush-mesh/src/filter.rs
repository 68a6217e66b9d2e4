//! # Side Filter
//!
//! Decides whether a side may emit a face before any clipping is done.

use config::constants::approx_zero;

use crate::brush::Side;
use crate::report::SideRejection;

/// Checks that a side is allowed to emit a face.
///
/// Sides that fail are skipped entirely, but they still bound the solid
/// while the other faces are clipped.
pub fn check_side(side: &Side, alignment_threshold: f64) -> Result<(), SideRejection> {
    if !side.emit_geometry {
        return Err(SideRejection::EmitDisabled);
    }
    if !is_texture_aligned(side, alignment_threshold) {
        return Err(SideRejection::TextureMisaligned);
    }
    if !is_positive_scale(side.texture_width) || !is_positive_scale(side.texture_height) {
        return Err(SideRejection::InvalidTextureScale);
    }
    Ok(())
}

/// True when the texture projection faces the plane closely enough.
///
/// The projection normal is `normalize(U × V)`; parallel axes have no
/// normal and are never aligned.
pub fn is_texture_aligned(side: &Side, alignment_threshold: f64) -> bool {
    let cross = side.texture_u.axis.cross(side.texture_v.axis);
    let length = cross.length();
    if approx_zero(length) || !length.is_finite() {
        return false;
    }
    let texture_normal = cross / length;
    // NaN compares false and is rejected as well
    texture_normal.dot(side.plane.normal).abs() >= alignment_threshold
}

fn is_positive_scale(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::{Plane, TextureAxis};
    use config::constants::TEXTURE_ALIGNMENT_THRESHOLD;
    use glam::DVec3;

    fn floor_side() -> Side {
        Side::new(Plane::new(DVec3::Z, 0.0), "dev/floor")
    }

    #[test]
    fn test_aligned_side_passes() {
        assert_eq!(check_side(&floor_side(), TEXTURE_ALIGNMENT_THRESHOLD), Ok(()));
    }

    #[test]
    fn test_emit_disabled_is_rejected() {
        let side = floor_side().with_emit_geometry(false);
        assert_eq!(
            check_side(&side, TEXTURE_ALIGNMENT_THRESHOLD),
            Err(SideRejection::EmitDisabled)
        );
    }

    #[test]
    fn test_edge_on_texture_is_rejected() {
        // Projection normal is +X, face normal is +Z
        let side = floor_side().with_texture(
            TextureAxis::new(DVec3::Y, 0.0),
            TextureAxis::new(DVec3::Z, 0.0),
            64.0,
            64.0,
        );
        assert_eq!(
            check_side(&side, TEXTURE_ALIGNMENT_THRESHOLD),
            Err(SideRejection::TextureMisaligned)
        );
    }

    #[test]
    fn test_slightly_tilted_texture_passes() {
        let tilted_v = DVec3::new(0.0, 1.0, 0.5).normalize();
        let side = floor_side().with_texture(
            TextureAxis::new(DVec3::X, 0.0),
            TextureAxis::new(tilted_v, 0.0),
            64.0,
            64.0,
        );
        assert!(is_texture_aligned(&side, TEXTURE_ALIGNMENT_THRESHOLD));
    }

    #[test]
    fn test_parallel_axes_are_rejected() {
        let side = floor_side().with_texture(
            TextureAxis::new(DVec3::X, 0.0),
            TextureAxis::new(DVec3::X * 2.0, 8.0),
            64.0,
            64.0,
        );
        assert!(!is_texture_aligned(&side, TEXTURE_ALIGNMENT_THRESHOLD));
        assert_eq!(
            check_side(&side, TEXTURE_ALIGNMENT_THRESHOLD),
            Err(SideRejection::TextureMisaligned)
        );
    }

    #[test]
    fn test_flipped_projection_is_aligned() {
        // Sign of the projection normal does not matter
        let side = floor_side().with_texture(
            TextureAxis::new(DVec3::Y, 0.0),
            TextureAxis::new(DVec3::X, 0.0),
            64.0,
            64.0,
        );
        assert!(is_texture_aligned(&side, TEXTURE_ALIGNMENT_THRESHOLD));
    }

    #[test]
    fn test_zero_texture_size_is_rejected() {
        let side = floor_side().with_texture_size(0.0, 64.0);
        assert_eq!(
            check_side(&side, TEXTURE_ALIGNMENT_THRESHOLD),
            Err(SideRejection::InvalidTextureScale)
        );
    }
}
