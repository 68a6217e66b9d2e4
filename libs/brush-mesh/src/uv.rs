//! # UV Projector
//!
//! Planar texture projection: `u = (U · p + offset_u) / width`, and the
//! same for v with the V axis and height.

use glam::{DVec2, DVec3};

use crate::brush::Side;

/// Projects `position` into the texture space of `side`.
///
/// The texture size is assumed positive; sides with a non-positive size
/// never pass the side filter.
#[inline]
pub fn project_uv(side: &Side, position: DVec3) -> DVec2 {
    DVec2::new(
        side.texture_u.project(position) / side.texture_width,
        side.texture_v.project(position) / side.texture_height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::{Plane, TextureAxis};
    use approx::assert_relative_eq;

    fn wall(width: f64, height: f64, offset_u: f64, offset_v: f64) -> Side {
        Side::new(Plane::new(DVec3::Z, 32.0), "dev/wall").with_texture(
            TextureAxis::new(DVec3::X, offset_u),
            TextureAxis::new(DVec3::Y, offset_v),
            width,
            height,
        )
    }

    #[test]
    fn test_project_divides_by_texture_size() {
        let uv = project_uv(&wall(256.0, 256.0, 0.0, 0.0), DVec3::new(256.0, 128.0, 32.0));
        assert_relative_eq!(uv.x, 1.0);
        assert_relative_eq!(uv.y, 0.5);
    }

    #[test]
    fn test_project_applies_offset_before_scale() {
        let uv = project_uv(&wall(64.0, 32.0, 16.0, -8.0), DVec3::new(48.0, 40.0, 32.0));
        assert_relative_eq!(uv.x, 1.0);
        assert_relative_eq!(uv.y, 1.0);
    }

    #[test]
    fn test_project_ignores_normal_component() {
        let side = wall(128.0, 128.0, 0.0, 0.0);
        let near = project_uv(&side, DVec3::new(10.0, 20.0, 0.0));
        let far = project_uv(&side, DVec3::new(10.0, 20.0, 500.0));
        assert_eq!(near, far);
    }
}
