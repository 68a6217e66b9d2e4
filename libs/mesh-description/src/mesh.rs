//! # Mesh Description Data Structure
//!
//! Element storage and attribute access for the mesh accumulator.

use std::collections::HashMap;

use config::constants::{MAX_UV_CHANNELS, MIN_POLYGON_VERTICES, SOFT_EDGE_CREASE_SHARPNESS};
use glam::{DVec2, DVec3};

use crate::error::{MeshError, MeshResult};
use crate::ids::{EdgeId, PolygonGroupId, PolygonId, VertexId, VertexInstanceId};
use crate::material::Material;

// =============================================================================
// ELEMENT STORAGE
// =============================================================================

#[derive(Debug, Clone)]
struct VertexData {
    position: DVec3,
    instances: Vec<VertexInstanceId>,
}

#[derive(Debug, Clone)]
struct VertexInstanceData {
    vertex: VertexId,
    uvs: [DVec2; MAX_UV_CHANNELS],
}

#[derive(Debug, Clone)]
struct PolygonGroupData {
    material: Material,
    polygons: Vec<PolygonId>,
}

#[derive(Debug, Clone)]
struct PolygonData {
    group: PolygonGroupId,
    contour: Vec<VertexInstanceId>,
    edges: Vec<EdgeId>,
}

#[derive(Debug, Clone)]
struct EdgeData {
    vertices: [VertexId; 2],
    connected_polygons: Vec<PolygonId>,
    is_hard: bool,
    crease_sharpness: f32,
}

// =============================================================================
// MESH DESCRIPTION
// =============================================================================

/// Polygon mesh with per-element attributes.
///
/// Elements are append-only. Ids handed out by the `create_*` methods stay
/// valid for the lifetime of the mesh, and iteration always follows creation
/// order.
///
/// # Example
///
/// ```rust
/// use glam::{DVec2, DVec3};
/// use mesh_description::MeshDescription;
///
/// let mut mesh = MeshDescription::new();
/// let vertex = mesh.create_vertex();
/// mesh.set_vertex_position(vertex, DVec3::new(1.0, 2.0, 3.0))?;
///
/// let instance = mesh.create_vertex_instance(vertex)?;
/// mesh.set_vertex_instance_uv(instance, 0, DVec2::new(0.5, 0.25))?;
///
/// assert_eq!(mesh.vertex_count(), 1);
/// assert_eq!(mesh.vertex_instance_uv(instance, 0)?, DVec2::new(0.5, 0.25));
/// # Ok::<(), mesh_description::MeshError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MeshDescription {
    vertices: Vec<VertexData>,
    vertex_instances: Vec<VertexInstanceData>,
    polygon_groups: Vec<PolygonGroupData>,
    polygons: Vec<PolygonData>,
    edges: Vec<EdgeData>,
    /// Edge lookup keyed by (smaller, larger) vertex id.
    edge_lookup: HashMap<(VertexId, VertexId), EdgeId>,
    uv_channels: usize,
}

impl Default for MeshDescription {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshDescription {
    /// Creates an empty mesh with a single UV channel.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            vertex_instances: Vec::new(),
            polygon_groups: Vec::new(),
            polygons: Vec::new(),
            edges: Vec::new(),
            edge_lookup: HashMap::new(),
            uv_channels: 1,
        }
    }

    /// Creates an empty mesh with the given number of UV channels.
    pub fn with_uv_channels(uv_channels: usize) -> MeshResult<Self> {
        let mut mesh = Self::new();
        mesh.set_uv_channel_count(uv_channels)?;
        Ok(mesh)
    }

    /// Returns the number of UV channels each vertex instance carries.
    #[inline]
    pub fn uv_channel_count(&self) -> usize {
        self.uv_channels
    }

    /// Changes the number of UV channels. Existing UVs are kept.
    pub fn set_uv_channel_count(&mut self, uv_channels: usize) -> MeshResult<()> {
        if uv_channels > MAX_UV_CHANNELS {
            return Err(MeshError::TooManyUvChannels {
                requested: uv_channels,
                max: MAX_UV_CHANNELS,
            });
        }
        self.uv_channels = uv_channels;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Counts
    // -------------------------------------------------------------------------

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of vertex instances.
    #[inline]
    pub fn vertex_instance_count(&self) -> usize {
        self.vertex_instances.len()
    }

    /// Returns the number of polygon groups.
    #[inline]
    pub fn polygon_group_count(&self) -> usize {
        self.polygon_groups.len()
    }

    /// Returns the number of polygons.
    #[inline]
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Returns the number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // -------------------------------------------------------------------------
    // Vertices
    // -------------------------------------------------------------------------

    /// Creates a vertex at the origin and returns its id.
    pub fn create_vertex(&mut self) -> VertexId {
        let id = VertexId(self.vertices.len() as u32);
        self.vertices.push(VertexData {
            position: DVec3::ZERO,
            instances: Vec::new(),
        });
        id
    }

    /// Sets the position of a vertex.
    pub fn set_vertex_position(&mut self, vertex: VertexId, position: DVec3) -> MeshResult<()> {
        self.vertex_mut(vertex)?.position = position;
        Ok(())
    }

    /// Returns the position of a vertex.
    pub fn vertex_position(&self, vertex: VertexId) -> MeshResult<DVec3> {
        Ok(self.vertex(vertex)?.position)
    }

    /// Iterates all vertices with their positions, in creation order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, DVec3)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (VertexId(i as u32), v.position))
    }

    /// Returns the instances created for a vertex.
    pub fn vertex_vertex_instances(&self, vertex: VertexId) -> MeshResult<&[VertexInstanceId]> {
        Ok(&self.vertex(vertex)?.instances)
    }

    // -------------------------------------------------------------------------
    // Vertex instances
    // -------------------------------------------------------------------------

    /// Creates a vertex instance referencing `vertex`, with zeroed UVs.
    pub fn create_vertex_instance(&mut self, vertex: VertexId) -> MeshResult<VertexInstanceId> {
        let id = VertexInstanceId(self.vertex_instances.len() as u32);
        self.vertex_mut(vertex)?.instances.push(id);
        self.vertex_instances.push(VertexInstanceData {
            vertex,
            uvs: [DVec2::ZERO; MAX_UV_CHANNELS],
        });
        Ok(id)
    }

    /// Returns the vertex an instance refers to.
    pub fn vertex_instance_vertex(&self, instance: VertexInstanceId) -> MeshResult<VertexId> {
        Ok(self.vertex_instance(instance)?.vertex)
    }

    /// Sets the UV of an instance on one channel.
    pub fn set_vertex_instance_uv(
        &mut self,
        instance: VertexInstanceId,
        channel: usize,
        uv: DVec2,
    ) -> MeshResult<()> {
        self.check_uv_channel(channel)?;
        let data = self
            .vertex_instances
            .get_mut(instance.index())
            .ok_or(MeshError::InvalidVertexInstance(instance))?;
        data.uvs[channel] = uv;
        Ok(())
    }

    /// Returns the UV of an instance on one channel.
    pub fn vertex_instance_uv(
        &self,
        instance: VertexInstanceId,
        channel: usize,
    ) -> MeshResult<DVec2> {
        self.check_uv_channel(channel)?;
        Ok(self.vertex_instance(instance)?.uvs[channel])
    }

    // -------------------------------------------------------------------------
    // Polygon groups
    // -------------------------------------------------------------------------

    /// Creates a polygon group with no material and returns its id.
    pub fn create_polygon_group(&mut self) -> PolygonGroupId {
        let id = PolygonGroupId(self.polygon_groups.len() as u32);
        self.polygon_groups.push(PolygonGroupData {
            material: Material::default(),
            polygons: Vec::new(),
        });
        id
    }

    /// Sets the material of a polygon group.
    pub fn set_polygon_group_material(
        &mut self,
        group: PolygonGroupId,
        material: Material,
    ) -> MeshResult<()> {
        self.polygon_group_mut(group)?.material = material;
        Ok(())
    }

    /// Returns the material of a polygon group.
    pub fn material_of(&self, group: PolygonGroupId) -> MeshResult<&Material> {
        Ok(&self.polygon_group(group)?.material)
    }

    /// Iterates all polygon groups with their materials, in creation order.
    pub fn polygon_groups(&self) -> impl Iterator<Item = (PolygonGroupId, &Material)> + '_ {
        self.polygon_groups
            .iter()
            .enumerate()
            .map(|(i, g)| (PolygonGroupId(i as u32), &g.material))
    }

    /// Returns the polygons assigned to a group.
    pub fn polygon_group_polygons(&self, group: PolygonGroupId) -> MeshResult<&[PolygonId]> {
        Ok(&self.polygon_group(group)?.polygons)
    }

    // -------------------------------------------------------------------------
    // Polygons
    // -------------------------------------------------------------------------

    /// Creates a polygon from an ordered contour of vertex instances.
    ///
    /// Edges between consecutive corners (including last to first) are
    /// looked up or created and the new polygon is registered on each of
    /// them. The contour is validated before anything is mutated.
    ///
    /// # Errors
    ///
    /// - `InvalidPolygonGroup` / `InvalidVertexInstance` for dangling ids
    /// - `ContourTooShort` for fewer than three corners
    /// - `DegenerateEdge` when consecutive corners share a vertex
    pub fn create_polygon(
        &mut self,
        group: PolygonGroupId,
        contour: &[VertexInstanceId],
    ) -> MeshResult<PolygonId> {
        self.polygon_group(group)?;
        if contour.len() < MIN_POLYGON_VERTICES {
            return Err(MeshError::ContourTooShort {
                count: contour.len(),
                min: MIN_POLYGON_VERTICES,
            });
        }

        let corner_vertices = contour
            .iter()
            .map(|&instance| self.vertex_instance_vertex(instance))
            .collect::<MeshResult<Vec<_>>>()?;

        for (i, &a) in corner_vertices.iter().enumerate() {
            let b = corner_vertices[(i + 1) % corner_vertices.len()];
            if a == b {
                return Err(MeshError::DegenerateEdge(a));
            }
        }

        let id = PolygonId(self.polygons.len() as u32);
        let mut edges = Vec::with_capacity(corner_vertices.len());
        for (i, &a) in corner_vertices.iter().enumerate() {
            let b = corner_vertices[(i + 1) % corner_vertices.len()];
            let edge = self.find_or_create_edge(a, b);
            self.edges[edge.index()].connected_polygons.push(id);
            edges.push(edge);
        }

        self.polygon_groups[group.index()].polygons.push(id);
        self.polygons.push(PolygonData {
            group,
            contour: contour.to_vec(),
            edges,
        });
        Ok(id)
    }

    /// Returns the group a polygon belongs to.
    pub fn polygon_group_of(&self, polygon: PolygonId) -> MeshResult<PolygonGroupId> {
        Ok(self.polygon(polygon)?.group)
    }

    /// Returns the ordered contour of a polygon.
    pub fn polygon_vertex_instances(&self, polygon: PolygonId) -> MeshResult<&[VertexInstanceId]> {
        Ok(&self.polygon(polygon)?.contour)
    }

    /// Returns the vertices of a polygon's contour, in order.
    pub fn polygon_vertices(&self, polygon: PolygonId) -> MeshResult<Vec<VertexId>> {
        self.polygon(polygon)?
            .contour
            .iter()
            .map(|&instance| self.vertex_instance_vertex(instance))
            .collect()
    }

    /// Returns the edges of a polygon; edge `i` runs from corner `i` to
    /// corner `i + 1`.
    pub fn polygon_edges(&self, polygon: PolygonId) -> MeshResult<&[EdgeId]> {
        Ok(&self.polygon(polygon)?.edges)
    }

    /// Iterates all polygon ids in creation order.
    pub fn polygons(&self) -> impl Iterator<Item = PolygonId> + '_ {
        (0..self.polygons.len()).map(|i| PolygonId(i as u32))
    }

    // -------------------------------------------------------------------------
    // Edges
    // -------------------------------------------------------------------------

    /// Returns the edge joining two vertices, if any polygon walks it.
    pub fn find_edge(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        self.edge_lookup.get(&edge_key(a, b)).copied()
    }

    /// Returns the two vertices of an edge.
    pub fn edge_vertices(&self, edge: EdgeId) -> MeshResult<[VertexId; 2]> {
        Ok(self.edge(edge)?.vertices)
    }

    /// Returns every polygon whose contour walks this edge.
    pub fn edge_connected_polygons(&self, edge: EdgeId) -> MeshResult<&[PolygonId]> {
        Ok(&self.edge(edge)?.connected_polygons)
    }

    /// Marks an edge hard or soft.
    pub fn set_edge_hard(&mut self, edge: EdgeId, is_hard: bool) -> MeshResult<()> {
        self.edge_mut(edge)?.is_hard = is_hard;
        Ok(())
    }

    /// Returns whether an edge is hard.
    pub fn edge_is_hard(&self, edge: EdgeId) -> MeshResult<bool> {
        Ok(self.edge(edge)?.is_hard)
    }

    /// Sets the crease sharpness of an edge (0 = smooth, 1 = fully hard).
    pub fn set_edge_crease_sharpness(&mut self, edge: EdgeId, sharpness: f32) -> MeshResult<()> {
        self.edge_mut(edge)?.crease_sharpness = sharpness;
        Ok(())
    }

    /// Returns the crease sharpness of an edge.
    pub fn edge_crease_sharpness(&self, edge: EdgeId) -> MeshResult<f32> {
        Ok(self.edge(edge)?.crease_sharpness)
    }

    /// Iterates all edge ids in creation order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(|i| EdgeId(i as u32))
    }

    // -------------------------------------------------------------------------
    // Internal helpers
    // -------------------------------------------------------------------------

    fn find_or_create_edge(&mut self, a: VertexId, b: VertexId) -> EdgeId {
        let key = edge_key(a, b);
        if let Some(&edge) = self.edge_lookup.get(&key) {
            return edge;
        }
        let edge = EdgeId(self.edges.len() as u32);
        self.edges.push(EdgeData {
            vertices: [key.0, key.1],
            connected_polygons: Vec::new(),
            is_hard: false,
            crease_sharpness: SOFT_EDGE_CREASE_SHARPNESS,
        });
        self.edge_lookup.insert(key, edge);
        edge
    }

    fn check_uv_channel(&self, channel: usize) -> MeshResult<()> {
        if channel >= self.uv_channels {
            return Err(MeshError::UvChannelOutOfRange {
                channel,
                channels: self.uv_channels,
            });
        }
        Ok(())
    }

    fn vertex(&self, id: VertexId) -> MeshResult<&VertexData> {
        self.vertices.get(id.index()).ok_or(MeshError::InvalidVertex(id))
    }

    fn vertex_mut(&mut self, id: VertexId) -> MeshResult<&mut VertexData> {
        self.vertices
            .get_mut(id.index())
            .ok_or(MeshError::InvalidVertex(id))
    }

    fn vertex_instance(&self, id: VertexInstanceId) -> MeshResult<&VertexInstanceData> {
        self.vertex_instances
            .get(id.index())
            .ok_or(MeshError::InvalidVertexInstance(id))
    }

    fn polygon_group(&self, id: PolygonGroupId) -> MeshResult<&PolygonGroupData> {
        self.polygon_groups
            .get(id.index())
            .ok_or(MeshError::InvalidPolygonGroup(id))
    }

    fn polygon_group_mut(&mut self, id: PolygonGroupId) -> MeshResult<&mut PolygonGroupData> {
        self.polygon_groups
            .get_mut(id.index())
            .ok_or(MeshError::InvalidPolygonGroup(id))
    }

    fn polygon(&self, id: PolygonId) -> MeshResult<&PolygonData> {
        self.polygons.get(id.index()).ok_or(MeshError::InvalidPolygon(id))
    }

    fn edge(&self, id: EdgeId) -> MeshResult<&EdgeData> {
        self.edges.get(id.index()).ok_or(MeshError::InvalidEdge(id))
    }

    fn edge_mut(&mut self, id: EdgeId) -> MeshResult<&mut EdgeData> {
        self.edges.get_mut(id.index()).ok_or(MeshError::InvalidEdge(id))
    }
}

/// Orders an edge's vertices so both walking directions share one key.
#[inline]
fn edge_key(a: VertexId, b: VertexId) -> (VertexId, VertexId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

// =============================================================================
// TESTS
// =============================================================================
