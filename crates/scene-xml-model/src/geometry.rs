// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry queries over entity collections

use crate::{
    CurveId, DefinitionId, DrawingElement, EdgeId, EntitiesId, FaceId, GroupId, InstanceId,
    LayerId, LoopId, MaterialId, Result, Transform, VertexId,
};
use nalgebra::Point3;

/// Read access to entity collections and the geometry they own
///
/// Collections return handles in a stable order; readers must return the same
/// order on every call so that exports are deterministic.
///
/// # Example
///
/// ```ignore
/// use scene_xml_model::{GeometryReader, EntitiesId};
///
/// fn count_faces(geometry: &dyn GeometryReader, entities: EntitiesId) -> Result<usize> {
///     let mut count = geometry.faces(entities)?.len();
///     for group in geometry.groups(entities)? {
///         count += count_faces(geometry, geometry.group_entities(group)?)?;
///     }
///     Ok(count)
/// }
/// ```
pub trait GeometryReader {
    /// Component instances in the collection
    fn instances(&self, entities: EntitiesId) -> Result<Vec<InstanceId>>;

    /// Groups in the collection
    fn groups(&self, entities: EntitiesId) -> Result<Vec<GroupId>>;

    /// Faces in the collection
    fn faces(&self, entities: EntitiesId) -> Result<Vec<FaceId>>;

    /// Edges in the collection
    ///
    /// # Arguments
    /// * `entities` - The collection to query
    /// * `standalone_only` - Only return edges that do not bound a face
    fn edges(&self, entities: EntitiesId, standalone_only: bool) -> Result<Vec<EdgeId>>;

    /// Curves in the collection
    fn curves(&self, entities: EntitiesId) -> Result<Vec<CurveId>>;

    /// Layer set directly on a drawing element
    fn element_layer(&self, element: DrawingElement) -> Result<Option<LayerId>>;

    /// Material set directly on a drawing element
    fn element_material(&self, element: DrawingElement) -> Result<Option<MaterialId>>;

    /// Definition a component instance refers to
    fn instance_definition(&self, instance: InstanceId) -> Result<DefinitionId>;

    /// Placement of a component instance
    fn instance_transform(&self, instance: InstanceId) -> Result<Transform>;

    /// Entities owned by a group
    fn group_entities(&self, group: GroupId) -> Result<EntitiesId>;

    /// Placement of a group
    fn group_transform(&self, group: GroupId) -> Result<Transform>;

    /// Outer boundary of a face
    fn face_outer_loop(&self, face: FaceId) -> Result<LoopId>;

    /// Holes of a face
    fn face_inner_loops(&self, face: FaceId) -> Result<Vec<LoopId>>;

    /// Ordered vertices of a loop
    fn loop_vertices(&self, face_loop: LoopId) -> Result<Vec<VertexId>>;

    /// Position of a vertex
    fn vertex_position(&self, vertex: VertexId) -> Result<Point3<f64>>;

    /// Start vertex of an edge
    fn edge_start(&self, edge: EdgeId) -> Result<VertexId>;

    /// End vertex of an edge
    fn edge_end(&self, edge: EdgeId) -> Result<VertexId>;

    /// Ordered edges of a curve
    fn curve_edges(&self, curve: CurveId) -> Result<Vec<EdgeId>>;
}
