//! # Brush Input Types
//!
//! A brush is a convex solid described by the planes bounding it. Each side
//! carries its own texture projection, material and smoothing groups.
//!
//! All input types derive `serde` so brushes can be loaded from any
//! serde-supported format by the caller.

use std::ops::{BitAnd, BitAndAssign, BitOr};

use config::constants::{DEFAULT_SMOOTHING_GROUPS, DEFAULT_TEXTURE_SIZE, EPSILON};
use glam::DVec3;
use mesh_description::Material;
use serde::{Deserialize, Serialize};

// =============================================================================
// PLANE
// =============================================================================

/// An oriented plane `normal · p = distance`.
///
/// Points with `normal · p < distance` lie behind the plane, inside the
/// solid. Deserialized planes go through [`Plane::new`], so stored normals
/// are unit length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "PlaneDef")]
pub struct Plane {
    /// Unit normal pointing out of the solid.
    pub normal: DVec3,
    /// Offset along the normal from the origin.
    pub distance: f64,
}

impl Plane {
    /// Creates a plane, normalizing `normal` and scaling `distance` to match.
    ///
    /// A zero normal is kept as-is; such a plane never passes the side
    /// filter and never emits geometry.
    pub fn new(normal: DVec3, distance: f64) -> Self {
        let length = normal.length();
        if length > EPSILON {
            Self {
                normal: normal / length,
                distance: distance / length,
            }
        } else {
            Self { normal, distance }
        }
    }

    /// Point of the plane closest to the origin.
    #[inline]
    pub fn point_on_plane(&self) -> DVec3 {
        self.normal * self.distance
    }

    /// Signed distance from `point` to the plane.
    ///
    /// Positive = outside the solid, negative = inside, zero = on plane.
    #[inline]
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.distance
    }
}

/// Plane as written in serialized brushes, normal not yet normalized.
#[derive(Deserialize)]
struct PlaneDef {
    normal: DVec3,
    distance: f64,
}

impl From<PlaneDef> for Plane {
    fn from(def: PlaneDef) -> Self {
        Plane::new(def.normal, def.distance)
    }
}

// =============================================================================
// TEXTURE AXIS
// =============================================================================

/// One texture-space basis vector with its offset in texels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextureAxis {
    /// Direction in world space.
    pub axis: DVec3,
    /// Offset added after projecting onto `axis`.
    pub offset: f64,
}

impl TextureAxis {
    /// Creates a texture axis.
    pub fn new(axis: DVec3, offset: f64) -> Self {
        Self { axis, offset }
    }

    /// Projects a world position onto this axis, offset included.
    #[inline]
    pub fn project(&self, position: DVec3) -> f64 {
        self.axis.dot(position) + self.offset
    }
}

/// Picks the axis-aligned texture basis whose projection plane best faces
/// `normal`.
///
/// Floors and ceilings project along Z, walls along X or Y. Ties go to the
/// earlier entry (Z, then X, then Y).
pub fn default_texture_axes(normal: DVec3) -> (DVec3, DVec3) {
    const BASE_AXES: [(DVec3, DVec3, DVec3); 6] = [
        (DVec3::Z, DVec3::X, DVec3::NEG_Y),
        (DVec3::NEG_Z, DVec3::X, DVec3::NEG_Y),
        (DVec3::X, DVec3::Y, DVec3::NEG_Z),
        (DVec3::NEG_X, DVec3::Y, DVec3::NEG_Z),
        (DVec3::Y, DVec3::X, DVec3::NEG_Z),
        (DVec3::NEG_Y, DVec3::X, DVec3::NEG_Z),
    ];

    let mut best = 0;
    let mut best_dot = f64::MIN;
    for (i, (base_normal, _, _)) in BASE_AXES.iter().enumerate() {
        let dot = normal.dot(*base_normal);
        if dot > best_dot {
            best_dot = dot;
            best = i;
        }
    }
    (BASE_AXES[best].1, BASE_AXES[best].2)
}

// =============================================================================
// SMOOTHING GROUPS
// =============================================================================

/// Bitmask of 32 independent smoothing groups.
///
/// Two faces render with a shared normal across their common edge when
/// their masks have at least one bit in common.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SmoothingGroups(pub u32);

impl SmoothingGroups {
    /// Mask with no group set; every edge of such a face is hard.
    pub const NONE: SmoothingGroups = SmoothingGroups(0);

    /// Mask containing only group `index` (0-based, below 32).
    pub const fn group(index: u32) -> Self {
        Self(1 << (index & 31))
    }

    /// Raw bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True when no group is set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when both masks share at least one group.
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl Default for SmoothingGroups {
    fn default() -> Self {
        Self(DEFAULT_SMOOTHING_GROUPS)
    }
}

impl BitAnd for SmoothingGroups {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for SmoothingGroups {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for SmoothingGroups {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

// =============================================================================
// SIDE
// =============================================================================

fn default_emit_geometry() -> bool {
    true
}

fn default_texture_size() -> f64 {
    DEFAULT_TEXTURE_SIZE
}

/// One bounding half-space of a brush plus its surface attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Side {
    /// Bounding plane; the solid lies behind it.
    pub plane: Plane,
    /// False for sides that bound the solid but must not produce faces.
    #[serde(default = "default_emit_geometry")]
    pub emit_geometry: bool,
    /// Texture U basis vector and offset.
    pub texture_u: TextureAxis,
    /// Texture V basis vector and offset.
    pub texture_v: TextureAxis,
    /// Divisor applied to the U projection.
    #[serde(default = "default_texture_size")]
    pub texture_width: f64,
    /// Divisor applied to the V projection.
    #[serde(default = "default_texture_size")]
    pub texture_height: f64,
    /// Material of the emitted face.
    pub material: Material,
    /// Smoothing groups of the emitted face.
    #[serde(default)]
    pub smoothing_groups: SmoothingGroups,
}

impl Side {
    /// Creates an emitting side with axis-aligned texture projection, the
    /// default texture size and the default smoothing group.
    pub fn new(plane: Plane, material: impl Into<Material>) -> Self {
        let (u, v) = default_texture_axes(plane.normal);
        Self {
            plane,
            emit_geometry: true,
            texture_u: TextureAxis::new(u, 0.0),
            texture_v: TextureAxis::new(v, 0.0),
            texture_width: DEFAULT_TEXTURE_SIZE,
            texture_height: DEFAULT_TEXTURE_SIZE,
            material: material.into(),
            smoothing_groups: SmoothingGroups::default(),
        }
    }

    /// Replaces the texture projection.
    pub fn with_texture(
        mut self,
        texture_u: TextureAxis,
        texture_v: TextureAxis,
        width: f64,
        height: f64,
    ) -> Self {
        self.texture_u = texture_u;
        self.texture_v = texture_v;
        self.texture_width = width;
        self.texture_height = height;
        self
    }

    /// Replaces the texture size, keeping the axes.
    pub fn with_texture_size(mut self, width: f64, height: f64) -> Self {
        self.texture_width = width;
        self.texture_height = height;
        self
    }

    /// Replaces the smoothing groups.
    pub fn with_smoothing_groups(mut self, smoothing_groups: SmoothingGroups) -> Self {
        self.smoothing_groups = smoothing_groups;
        self
    }

    /// Sets whether the side emits a face.
    pub fn with_emit_geometry(mut self, emit_geometry: bool) -> Self {
        self.emit_geometry = emit_geometry;
        self
    }
}

// =============================================================================
// BRUSH
// =============================================================================

/// A convex solid: the intersection of the half-spaces behind its sides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Brush {
    /// Sides in index order.
    pub sides: Vec<Side>,
}

impl Brush {
    /// Creates a brush from its sides.
    pub fn new(sides: Vec<Side>) -> Self {
        Self { sides }
    }

    /// Creates an axis-aligned box brush.
    ///
    /// Sides are ordered +X, -X, +Y, -Y, +Z, -Z.
    pub fn axis_aligned_box(min: DVec3, max: DVec3, material: impl Into<Material>) -> Self {
        let material = material.into();
        let planes = [
            Plane::new(DVec3::X, max.x),
            Plane::new(DVec3::NEG_X, -min.x),
            Plane::new(DVec3::Y, max.y),
            Plane::new(DVec3::NEG_Y, -min.y),
            Plane::new(DVec3::Z, max.z),
            Plane::new(DVec3::NEG_Z, -min.z),
        ];
        Self {
            sides: planes
                .into_iter()
                .map(|plane| Side::new(plane, material.clone()))
                .collect(),
        }
    }

    /// Returns the sides.
    #[inline]
    pub fn sides(&self) -> &[Side] {
        &self.sides
    }

    /// Returns the number of sides.
    #[inline]
    pub fn len(&self) -> usize {
        self.sides.len()
    }

    /// Returns true if the brush has no sides.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sides.is_empty()
    }

    /// True when `point` lies inside or on every side.
    pub fn contains_point(&self, point: DVec3, tolerance: f64) -> bool {
        self.sides
            .iter()
            .all(|side| side.plane.signed_distance(point) <= tolerance)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_plane_new_normalizes() {
        let plane = Plane::new(DVec3::new(0.0, 0.0, 2.0), 4.0);
        assert_relative_eq!(plane.normal.z, 1.0);
        assert_relative_eq!(plane.distance, 2.0);
    }

    #[test]
    fn test_plane_signed_distance() {
        let plane = Plane::new(DVec3::X, 1.0);
        assert_relative_eq!(plane.signed_distance(DVec3::new(3.0, 5.0, -2.0)), 2.0);
        assert_relative_eq!(plane.signed_distance(DVec3::ZERO), -1.0);
        assert_eq!(plane.point_on_plane(), DVec3::X);
    }

    #[test]
    fn test_plane_deserialize_normalizes() {
        let plane: Plane =
            serde_json::from_str(r#"{ "normal": [2.0, 0.0, 0.0], "distance": 2.0 }"#).unwrap();
        assert_eq!(plane.normal, DVec3::X);
        assert_relative_eq!(plane.distance, 1.0);
        assert_relative_eq!(plane.signed_distance(DVec3::new(1.0, 4.0, -3.0)), 0.0);
    }

    #[test]
    fn test_plane_deserialize_keeps_zero_normal() {
        let plane: Plane =
            serde_json::from_str(r#"{ "normal": [0.0, 0.0, 0.0], "distance": 3.0 }"#).unwrap();
        assert_eq!(plane.normal, DVec3::ZERO);
    }

    #[test]
    fn test_texture_axis_project() {
        let axis = TextureAxis::new(DVec3::X, 16.0);
        assert_relative_eq!(axis.project(DVec3::new(32.0, 7.0, 9.0)), 48.0);
    }

    #[test]
    fn test_default_texture_axes_face_the_plane() {
        for normal in [
            DVec3::X,
            DVec3::NEG_X,
            DVec3::Y,
            DVec3::NEG_Y,
            DVec3::Z,
            DVec3::NEG_Z,
            DVec3::ONE.normalize(),
            DVec3::new(1.0, -2.0, 0.5).normalize(),
        ] {
            let (u, v) = default_texture_axes(normal);
            let texture_normal = u.cross(v).normalize();
            assert!(texture_normal.dot(normal).abs() >= 0.5);
        }
    }

    #[test]
    fn test_smoothing_groups_ops() {
        let a = SmoothingGroups::group(0) | SmoothingGroups::group(3);
        let b = SmoothingGroups::group(3);
        assert_eq!(a.bits(), 0b1001);
        assert!(a.intersects(b));
        assert_eq!(a & b, b);
        assert!(!SmoothingGroups::group(1).intersects(b));
        assert!(SmoothingGroups::NONE.is_empty());
        assert_eq!(SmoothingGroups::default(), SmoothingGroups(1));
    }

    #[test]
    fn test_axis_aligned_box_contains_center() {
        let brush = Brush::axis_aligned_box(DVec3::splat(-1.0), DVec3::splat(1.0), "dev/box");
        assert_eq!(brush.len(), 6);
        assert!(brush.contains_point(DVec3::ZERO, 0.0));
        assert!(brush.contains_point(DVec3::ONE, 1e-9));
        assert!(!brush.contains_point(DVec3::new(1.5, 0.0, 0.0), 1e-9));
    }

    #[test]
    fn test_side_builders() {
        let side = Side::new(Plane::new(DVec3::Z, 0.0), "dev/floor")
            .with_texture_size(64.0, 32.0)
            .with_smoothing_groups(SmoothingGroups(2))
            .with_emit_geometry(false);
        assert_eq!(side.texture_width, 64.0);
        assert_eq!(side.texture_height, 32.0);
        assert_eq!(side.smoothing_groups, SmoothingGroups(2));
        assert!(!side.emit_geometry);
        assert_eq!(side.material.as_str(), "dev/floor");
    }
}
