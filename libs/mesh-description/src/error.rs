//! # Mesh Errors
//!
//! Error types for mesh description operations. Every error names the
//! offending element so callers can report precondition violations.

use crate::ids::{EdgeId, PolygonGroupId, PolygonId, VertexId, VertexInstanceId};
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while creating or querying mesh elements.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
    /// Vertex id does not name a vertex of this mesh.
    #[error("Invalid vertex reference: {0:?}")]
    InvalidVertex(VertexId),

    /// Vertex instance id does not name an instance of this mesh.
    #[error("Invalid vertex instance reference: {0:?}")]
    InvalidVertexInstance(VertexInstanceId),

    /// Polygon group id does not name a group of this mesh.
    #[error("Invalid polygon group reference: {0:?}")]
    InvalidPolygonGroup(PolygonGroupId),

    /// Polygon id does not name a polygon of this mesh.
    #[error("Invalid polygon reference: {0:?}")]
    InvalidPolygon(PolygonId),

    /// Edge id does not name an edge of this mesh.
    #[error("Invalid edge reference: {0:?}")]
    InvalidEdge(EdgeId),

    /// Polygon contour has fewer corners than a triangle.
    #[error("Polygon contour too short: {count} vertex instances (min: {min})")]
    ContourTooShort {
        /// Number of instances supplied
        count: usize,
        /// Minimum accepted
        min: usize,
    },

    /// Two consecutive contour corners reference the same vertex.
    #[error("Degenerate polygon edge: consecutive corners share {0:?}")]
    DegenerateEdge(VertexId),

    /// UV channel index beyond the channels enabled on this mesh.
    #[error("UV channel {channel} out of range (mesh has {channels})")]
    UvChannelOutOfRange {
        /// Requested channel
        channel: usize,
        /// Channels enabled on the mesh
        channels: usize,
    },

    /// Requested more UV channels than an instance can store.
    #[error("Too many UV channels: {requested} (max: {max})")]
    TooManyUvChannels {
        /// Requested channel count
        requested: usize,
        /// Maximum supported
        max: usize,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for mesh description operations.
pub type MeshResult<T> = Result<T, MeshError>;

// =============================================================================
// TESTS
// =============================================================================
