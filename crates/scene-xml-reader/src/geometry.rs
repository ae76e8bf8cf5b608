// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! GeometryReader trait implementation

use crate::store::{
    slot, CollectionData, CurveData, EdgeData, ElementData, FaceData, GroupData, InstanceData,
    SceneStore,
};
use nalgebra::Point3;
use scene_xml_model::{
    CurveId, DefinitionId, DrawingElement, EdgeId, EntitiesId, FaceId, GeometryReader, GroupId,
    InstanceId, LayerId, LoopId, MaterialId, ModelError, Result, Transform, VertexId,
};

impl SceneStore {
    fn collection(&self, id: EntitiesId) -> Result<&CollectionData> {
        self.collections
            .get(id.index())
            .ok_or(ModelError::InvalidHandle(id.into()))
    }

    fn instance(&self, id: InstanceId) -> Result<&InstanceData> {
        slot(&self.instances, id.index()).ok_or(ModelError::InvalidHandle(id.into()))
    }

    fn group(&self, id: GroupId) -> Result<&GroupData> {
        slot(&self.groups, id.index()).ok_or(ModelError::InvalidHandle(id.into()))
    }

    fn face(&self, id: FaceId) -> Result<&FaceData> {
        slot(&self.faces, id.index()).ok_or(ModelError::InvalidHandle(id.into()))
    }

    fn edge(&self, id: EdgeId) -> Result<&EdgeData> {
        slot(&self.edges, id.index()).ok_or(ModelError::InvalidHandle(id.into()))
    }

    fn curve(&self, id: CurveId) -> Result<&CurveData> {
        slot(&self.curves, id.index()).ok_or(ModelError::InvalidHandle(id.into()))
    }

    fn element(&self, element: DrawingElement) -> Result<ElementData> {
        match element {
            DrawingElement::Instance(id) => self.instance(id).map(|i| i.element),
            DrawingElement::Group(id) => self.group(id).map(|g| g.element),
            DrawingElement::Face(id) => self.face(id).map(|f| f.element),
            DrawingElement::Edge(id) => self.edge(id).map(|e| e.element),
        }
    }
}

impl GeometryReader for SceneStore {
    fn instances(&self, entities: EntitiesId) -> Result<Vec<InstanceId>> {
        Ok(self.collection(entities)?.instances.clone())
    }

    fn groups(&self, entities: EntitiesId) -> Result<Vec<GroupId>> {
        Ok(self.collection(entities)?.groups.clone())
    }

    fn faces(&self, entities: EntitiesId) -> Result<Vec<FaceId>> {
        Ok(self.collection(entities)?.faces.clone())
    }

    fn edges(&self, entities: EntitiesId, standalone_only: bool) -> Result<Vec<EdgeId>> {
        let edges = &self.collection(entities)?.edges;
        if !standalone_only {
            return Ok(edges.clone());
        }
        // Unpopulated slots are kept so callers see the same handles either way
        Ok(edges
            .iter()
            .copied()
            .filter(|id| slot(&self.edges, id.index()).map_or(true, |edge| edge.standalone))
            .collect())
    }

    fn curves(&self, entities: EntitiesId) -> Result<Vec<CurveId>> {
        Ok(self.collection(entities)?.curves.clone())
    }

    fn element_layer(&self, element: DrawingElement) -> Result<Option<LayerId>> {
        Ok(self.element(element)?.layer)
    }

    fn element_material(&self, element: DrawingElement) -> Result<Option<MaterialId>> {
        Ok(self.element(element)?.material)
    }

    fn instance_definition(&self, instance: InstanceId) -> Result<DefinitionId> {
        Ok(self.instance(instance)?.definition)
    }

    fn instance_transform(&self, instance: InstanceId) -> Result<Transform> {
        Ok(self.instance(instance)?.transform)
    }

    fn group_entities(&self, group: GroupId) -> Result<EntitiesId> {
        Ok(self.group(group)?.entities)
    }

    fn group_transform(&self, group: GroupId) -> Result<Transform> {
        Ok(self.group(group)?.transform)
    }

    fn face_outer_loop(&self, face: FaceId) -> Result<LoopId> {
        Ok(self.face(face)?.outer)
    }

    fn face_inner_loops(&self, face: FaceId) -> Result<Vec<LoopId>> {
        Ok(self.face(face)?.inner.clone())
    }

    fn loop_vertices(&self, face_loop: LoopId) -> Result<Vec<VertexId>> {
        self.loops
            .get(face_loop.index())
            .cloned()
            .ok_or(ModelError::InvalidHandle(face_loop.into()))
    }

    fn vertex_position(&self, vertex: VertexId) -> Result<Point3<f64>> {
        self.vertices
            .get(vertex.index())
            .copied()
            .ok_or(ModelError::InvalidHandle(vertex.into()))
    }

    fn edge_start(&self, edge: EdgeId) -> Result<VertexId> {
        Ok(self.edge(edge)?.start)
    }

    fn edge_end(&self, edge: EdgeId) -> Result<VertexId> {
        Ok(self.edge(edge)?.end)
    }

    fn curve_edges(&self, curve: CurveId) -> Result<Vec<EdgeId>> {
        Ok(self.curve(curve)?.edges.clone())
    }
}
