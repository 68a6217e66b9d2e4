//! # Clip Polygon
//!
//! Convex planar polygon that starts out "infinite" (a huge square on a
//! plane) and is cut down by successive half-space clips.
//!
//! Clipping consumes the polygon and returns the surviving part, so a series
//! of clips is a fold that stops at the first empty result.

use config::constants::{
    COLINEAR_EPSILON, EPSILON, INFINITE_POLYGON_EXTENT, MIN_POLYGON_VERTICES,
    POINTS_ARE_SAME_EPSILON,
};
use glam::DVec3;

use crate::brush::Plane;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Relative distance from the edge of the initial square within which a
/// vertex is still considered part of the infinite boundary.
const BOUNDARY_TOLERANCE: f64 = 1e-6;

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Classification of a point relative to a clip plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Classification {
    /// Point is on the kept side.
    Front,
    /// Point is on the removed side.
    Back,
    /// Point is within epsilon of the plane.
    Coplanar,
}

fn classify(distance: f64, epsilon: f64) -> Classification {
    if distance > epsilon {
        Classification::Front
    } else if distance < -epsilon {
        Classification::Back
    } else {
        Classification::Coplanar
    }
}

// =============================================================================
// CLIP POLYGON
// =============================================================================

/// A convex polygon lying on a plane.
///
/// Vertices wind counter-clockwise when viewed from the front of the plane
/// the polygon was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipPolygon {
    /// Vertices in counter-clockwise order.
    vertices: Vec<DVec3>,
    /// Center of the initial square.
    origin: DVec3,
    /// In-plane axes of the initial square.
    axes: [DVec3; 2],
    /// Half extent of the initial square.
    extent: f64,
}

impl ClipPolygon {
    /// Builds the "infinite" square on `plane`.
    ///
    /// Returns `None` when the plane normal is not unit length.
    pub fn from_plane(plane: &Plane) -> Option<Self> {
        Self::from_plane_with_extent(plane, INFINITE_POLYGON_EXTENT)
    }

    /// Builds a square of half size `extent` on `plane`, centered on the
    /// point of the plane closest to the origin.
    pub fn from_plane_with_extent(plane: &Plane, extent: f64) -> Option<Self> {
        let normal = plane.normal;
        if (normal.length() - 1.0).abs() > 1e-6 || extent.is_nan() || extent <= 0.0 {
            return None;
        }

        let origin = plane.point_on_plane();
        let u = normal.any_orthonormal_vector();
        let v = normal.cross(u);
        let vertices = vec![
            origin + (-u - v) * extent,
            origin + (u - v) * extent,
            origin + (u + v) * extent,
            origin + (-u + v) * extent,
        ];

        Some(Self {
            vertices,
            origin,
            axes: [u, v],
            extent,
        })
    }

    /// Get polygon vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True when the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Keeps the part of the polygon in front of the plane through
    /// `clip_point` with normal `clip_normal`.
    ///
    /// - Entirely in front or coplanar: returned unchanged
    /// - Entirely behind: `None`
    /// - Spanning: the front part, or `None` if it has fewer than three
    ///   vertices
    pub fn split(self, clip_normal: DVec3, clip_point: DVec3, epsilon: f64) -> Option<Self> {
        let distances: Vec<f64> = self
            .vertices
            .iter()
            .map(|v| clip_normal.dot(*v - clip_point))
            .collect();
        let classes: Vec<Classification> =
            distances.iter().map(|&d| classify(d, epsilon)).collect();

        let any_front = classes.contains(&Classification::Front);
        let any_back = classes.contains(&Classification::Back);

        if !any_back {
            return Some(self);
        }
        if !any_front {
            return None;
        }

        let count = self.vertices.len();
        let mut front = Vec::with_capacity(count + 1);
        for i in 0..count {
            let j = (i + 1) % count;
            let (vi, vj) = (self.vertices[i], self.vertices[j]);
            let (ti, tj) = (classes[i], classes[j]);

            if ti != Classification::Back {
                front.push(vi);
            }

            if (ti == Classification::Front && tj == Classification::Back)
                || (ti == Classification::Back && tj == Classification::Front)
            {
                let t = distances[i] / (distances[i] - distances[j]);
                front.push(vi.lerp(vj, t));
            }
        }

        if front.len() < MIN_POLYGON_VERTICES {
            return None;
        }
        Some(Self {
            vertices: front,
            ..self
        })
    }

    /// Clips against a plane, keeping the part behind it.
    pub fn clip_behind(self, plane: &Plane, epsilon: f64) -> Option<Self> {
        self.split(-plane.normal, plane.point_on_plane(), epsilon)
    }

    /// Removes repeated and colinear vertices.
    ///
    /// Returns `None` when fewer than three vertices remain or the polygon
    /// has no area.
    pub fn fix(mut self) -> Option<Self> {
        self.remove_repeated_points();
        self.remove_colinear_points();

        if self.vertices.len() < MIN_POLYGON_VERTICES || self.area() <= EPSILON {
            return None;
        }
        Some(self)
    }

    /// True when no vertex remains on the boundary of the initial square.
    ///
    /// Vertices anywhere inside the square count as bounded, however far
    /// they are from its center.
    pub fn is_bounded(&self) -> bool {
        let limit = self.extent * (1.0 - BOUNDARY_TOLERANCE);
        self.vertices.iter().all(|v| {
            let offset = *v - self.origin;
            offset.dot(self.axes[0]).abs() < limit && offset.dot(self.axes[1]).abs() < limit
        })
    }

    /// Area of the polygon.
    pub fn area(&self) -> f64 {
        self.newell_normal().length() * 0.5
    }

    /// Unnormalized polygon normal (Newell's method); its length is twice
    /// the area.
    pub fn newell_normal(&self) -> DVec3 {
        let count = self.vertices.len();
        let mut normal = DVec3::ZERO;
        for i in 0..count {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % count];
            normal += (a - self.origin).cross(b - self.origin);
        }
        normal
    }

    fn remove_repeated_points(&mut self) {
        let mut kept: Vec<DVec3> = Vec::with_capacity(self.vertices.len());
        for &v in &self.vertices {
            if kept
                .last()
                .map_or(true, |last| last.distance(v) >= POINTS_ARE_SAME_EPSILON)
            {
                kept.push(v);
            }
        }
        while kept.len() > 1 {
            let (first, last) = (kept[0], kept[kept.len() - 1]);
            if first.distance(last) < POINTS_ARE_SAME_EPSILON {
                kept.pop();
            } else {
                break;
            }
        }
        self.vertices = kept;
    }

    fn remove_colinear_points(&mut self) {
        let mut i = 0;
        while self.vertices.len() >= MIN_POLYGON_VERTICES && i < self.vertices.len() {
            let count = self.vertices.len();
            let prev = self.vertices[(i + count - 1) % count];
            let current = self.vertices[i];
            let next = self.vertices[(i + 1) % count];

            if distance_to_line(current, prev, next) < COLINEAR_EPSILON {
                self.vertices.remove(i);
                // Re-examine the previous corner, whose neighbour changed
                i = i.saturating_sub(1);
            } else {
                i += 1;
            }
        }
    }
}

/// Distance from `point` to the infinite line through `a` and `b`.
///
/// Coincident `a` and `b` fall back to the distance to `a`.
fn distance_to_line(point: DVec3, a: DVec3, b: DVec3) -> f64 {
    let direction = b - a;
    let length = direction.length();
    if length < POINTS_ARE_SAME_EPSILON {
        return point.distance(a);
    }
    direction.cross(point - a).length() / length
}

// =============================================================================
// TESTS
// =============================================================================
