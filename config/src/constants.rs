//! # Configuration Constants
//!
//! Centralized constants for the brush-to-mesh pipeline. Precision values,
//! welding tolerances and attribute defaults are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Welding**: Vertex snap and weld tolerances
//! - **Clipping**: Extents and thresholds for half-space clipping
//! - **Attributes**: Defaults for UV channels, smoothing and edge creases

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for deciding whether a length or a dot product is "zero", e.g. when
/// a cross product of two parallel texture axes collapses.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Distance below which two polygon points are considered the same point.
///
/// Used by the polygon fix step to drop repeated corners produced by
/// clipping through an existing vertex.
///
/// # Example
///
/// ```rust
/// use config::constants::POINTS_ARE_SAME_EPSILON;
///
/// let a = [1.0_f64, 2.0, 3.0];
/// let b = [1.0_f64, 2.0, 3.00001];
/// assert!(a.iter().zip(&b).all(|(x, y)| (x - y).abs() < POINTS_ARE_SAME_EPSILON));
/// ```
pub const POINTS_ARE_SAME_EPSILON: f64 = 2e-5;

/// Distance from a point to the line through its neighbours below which the
/// point is considered colinear and removed by the polygon fix step.
pub const COLINEAR_EPSILON: f64 = 1e-5;

// =============================================================================
// WELDING CONSTANTS
// =============================================================================

/// Componentwise tolerance for welding vertices (a quarter unit).
///
/// Two positions whose coordinates each differ by at most this amount map to
/// the same mesh vertex. The same value is the grid step of the optional
/// grid snap.
///
/// # Example
///
/// ```rust
/// use config::constants::SNAP_THRESHOLD;
///
/// assert_eq!(SNAP_THRESHOLD, 0.25);
/// let snapped = (1.37_f64 / SNAP_THRESHOLD).round() * SNAP_THRESHOLD;
/// assert_eq!(snapped, 1.25);
/// ```
pub const SNAP_THRESHOLD: f64 = 1.0 / 4.0;

// =============================================================================
// CLIPPING CONSTANTS
// =============================================================================

/// Minimum |cos| between the texture projection normal and the face normal.
///
/// Faces whose texture projection is closer to edge-on than this produce
/// numerically unstable UVs and are skipped.
///
/// # Example
///
/// ```rust
/// use config::constants::TEXTURE_ALIGNMENT_THRESHOLD;
///
/// let texture_normal_dot_face_normal: f64 = 0.05;
/// assert!(texture_normal_dot_face_normal.abs() < TEXTURE_ALIGNMENT_THRESHOLD);
/// ```
pub const TEXTURE_ALIGNMENT_THRESHOLD: f64 = 0.1;

/// Half extent of the "infinite" polygon built on a side's plane before it
/// is clipped by the other sides.
///
/// Any brush face must fit inside a square of this half size centered on
/// the point of the plane closest to the origin.
///
/// # Example
///
/// ```rust
/// use config::constants::INFINITE_POLYGON_EXTENT;
///
/// let brush_half_size = 4096.0;
/// assert!(brush_half_size < INFINITE_POLYGON_EXTENT);
/// ```
pub const INFINITE_POLYGON_EXTENT: f64 = 1_048_576.0;

/// Signed distance band treated as "on the plane" while clipping.
pub const CLIP_PLANE_EPSILON: f64 = 1e-5;

/// Minimum number of corners for a polygon to be emitted.
pub const MIN_POLYGON_VERTICES: usize = 3;

// =============================================================================
// ATTRIBUTE CONSTANTS
// =============================================================================

/// UV channel written by the brush builder unless configured otherwise.
pub const DEFAULT_UV_CHANNEL: usize = 0;

/// Number of UV channels a vertex instance can carry.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_UV_CHANNEL, MAX_UV_CHANNELS};
///
/// assert!(DEFAULT_UV_CHANNEL < MAX_UV_CHANNELS);
/// ```
pub const MAX_UV_CHANNELS: usize = 8;

/// Projection divisor used when a side does not specify texture dimensions.
///
/// With 1.0 one world unit along a texture axis maps to one UV unit.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_TEXTURE_SIZE;
///
/// let u = 3.0 / DEFAULT_TEXTURE_SIZE;
/// assert_eq!(u, 3.0);
/// ```
pub const DEFAULT_TEXTURE_SIZE: f64 = 1.0;

/// Smoothing-group mask given to sides that do not specify one.
///
/// Group 1 is the conventional "smooth everything" group; mask 0 means the
/// face shares no group with anything and all of its edges come out hard.
pub const DEFAULT_SMOOTHING_GROUPS: u32 = 1;

/// Crease sharpness written to edges whose faces share a smoothing group.
pub const SOFT_EDGE_CREASE_SHARPNESS: f32 = 0.0;

/// Crease sharpness written to edges whose faces share no smoothing group.
pub const HARD_EDGE_CREASE_SHARPNESS: f32 = 1.0;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Rounds a coordinate to the nearest multiple of `grid`.
///
/// A non-positive `grid` leaves the value unchanged.
///
/// # Example
///
/// ```rust
/// use config::constants::{grid_snap, SNAP_THRESHOLD};
///
/// assert_eq!(grid_snap(0.9, SNAP_THRESHOLD), 1.0);
/// assert_eq!(grid_snap(-0.13, SNAP_THRESHOLD), -0.25);
/// assert_eq!(grid_snap(3.3, 0.0), 3.3);
/// ```
#[inline]
pub fn grid_snap(value: f64, grid: f64) -> f64 {
    if grid <= 0.0 {
        value
    } else {
        (value / grid).round() * grid
    }
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
