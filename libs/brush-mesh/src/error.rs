//! # Brush Errors
//!
//! Error types for brush mesh building.
//!
//! ## Error Policy
//!
//! - Degenerate geometry is never an error: the offending side is skipped
//!   and recorded in the build report
//! - Errors are reserved for misuse of the mesh accumulator and are
//!   propagated rather than panicking
//! - Invalid settings are rejected earlier, by `BuildSettings` itself

use mesh_description::MeshError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building brush geometry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BrushError {
    /// The mesh accumulator rejected an operation.
    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for brush building operations.
pub type BrushResult<T> = Result<T, BrushError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_description::VertexId;

    #[test]
    fn test_error_display() {
        let err = BrushError::from(MeshError::InvalidVertex(VertexId(2)));
        assert!(err.to_string().contains("Mesh error"));
        assert!(err.to_string().contains("VertexId(2)"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BrushError>();
    }
}
