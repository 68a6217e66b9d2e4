//! Typed element identifiers.
//!
//! Ids are dense indices into the owning `MeshDescription`; elements are
//! never removed, so an id stays valid for the lifetime of its mesh.

/// Unique identifier for vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u32);

/// Unique identifier for vertex instances (polygon corners)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexInstanceId(pub u32);

/// Unique identifier for polygon groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PolygonGroupId(pub u32);

/// Unique identifier for polygons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PolygonId(pub u32);

/// Unique identifier for edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub u32);

impl VertexId {
    /// Storage index of this vertex.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl VertexInstanceId {
    /// Storage index of this instance.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl PolygonGroupId {
    /// Storage index of this group.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl PolygonId {
    /// Storage index of this polygon.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl EdgeId {
    /// Storage index of this edge.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
