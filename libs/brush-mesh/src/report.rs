//! # Build Report
//!
//! What a single brush build emitted and which sides it skipped, and why.

use mesh_description::PolygonId;
use thiserror::Error;

/// Reason a side contributed no polygon.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SideRejection {
    /// The side is flagged as non-emitting.
    #[error("side does not emit geometry")]
    EmitDisabled,
    /// Texture projection is edge-on to the face, or U and V are parallel.
    #[error("texture projection is not aligned with the face")]
    TextureMisaligned,
    /// Texture width or height is zero, negative or not finite.
    #[error("texture size is not a positive number")]
    InvalidTextureScale,
    /// Another side's half-space removed the whole face.
    #[error("face clipped away by another side")]
    ClippedAway,
    /// The face is not closed by the other sides.
    #[error("face is unbounded")]
    Unbounded,
    /// Clipping left a face with no area.
    #[error("face is degenerate")]
    Degenerate,
    /// Welding merged the face's corners down to fewer than three.
    #[error("face collapsed while welding vertices")]
    ContourCollapsed,
}

/// A polygon emitted for a side of the brush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmittedFace {
    /// Polygon created in the mesh.
    pub polygon: PolygonId,
    /// Index of the originating side.
    pub side: usize,
}

/// A side that emitted nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedSide {
    /// Index of the side.
    pub side: usize,
    /// Why it was skipped.
    pub reason: SideRejection,
}

/// Outcome of building one brush.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrushBuildReport {
    /// Emitted faces in side order.
    pub emitted: Vec<EmittedFace>,
    /// Skipped sides in side order.
    pub skipped: Vec<SkippedSide>,
}

impl BrushBuildReport {
    /// Number of polygons emitted.
    #[inline]
    pub fn polygon_count(&self) -> usize {
        self.emitted.len()
    }

    /// True when the brush produced no polygon at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.emitted.is_empty()
    }

    /// Reason side `side` was skipped, if it was.
    pub fn rejection(&self, side: usize) -> Option<SideRejection> {
        self.skipped
            .iter()
            .find(|skipped| skipped.side == side)
            .map(|skipped| skipped.reason)
    }

    /// Polygon emitted for side `side`, if any.
    pub fn polygon_for_side(&self, side: usize) -> Option<PolygonId> {
        self.emitted
            .iter()
            .find(|face| face.side == side)
            .map(|face| face.polygon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lookups() {
        let report = BrushBuildReport {
            emitted: vec![EmittedFace { polygon: PolygonId(4), side: 1 }],
            skipped: vec![SkippedSide { side: 0, reason: SideRejection::EmitDisabled }],
        };
        assert_eq!(report.polygon_count(), 1);
        assert!(!report.is_empty());
        assert_eq!(report.polygon_for_side(1), Some(PolygonId(4)));
        assert_eq!(report.polygon_for_side(0), None);
        assert_eq!(report.rejection(0), Some(SideRejection::EmitDisabled));
        assert_eq!(report.rejection(1), None);
    }

    #[test]
    fn test_rejection_display() {
        assert_eq!(
            SideRejection::ClippedAway.to_string(),
            "face clipped away by another side"
        );
    }
}
