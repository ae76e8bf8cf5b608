// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene graph traversal
//!
//! Walks entity collections depth first and hands one record per element to a
//! [`DocumentWriter`]. Within a collection the order is fixed: component
//! instances, groups, faces, standalone edges, curves.

use crate::document::DocumentWriter;
use crate::inheritance::InheritanceContext;
use crate::records::{ComponentInstanceInfo, CurveInfo, EdgeInfo, FaceInfo};
use crate::{ExportOptions, ExportStats, Result};
use nalgebra::Point3;
use scene_xml_model::{
    DrawingElement, EdgeId, EntitiesId, EntityRef, FaceId, GroupId, InstanceId, LayerId, LoopId,
    ModelReader, VertexId,
};

/// Writes entity collections of one model into one document
pub struct SceneWriter<'a, D: DocumentWriter + ?Sized> {
    model: &'a dyn ModelReader,
    document: &'a mut D,
    options: &'a ExportOptions,
}

impl<'a, D: DocumentWriter + ?Sized> SceneWriter<'a, D> {
    pub fn new(model: &'a dyn ModelReader, document: &'a mut D, options: &'a ExportOptions) -> Self {
        Self {
            model,
            document,
            options,
        }
    }

    /// Context for top-level collections
    pub fn root_context(&self) -> InheritanceContext {
        InheritanceContext::root(self.model, self.options.export_materials_by_layer)
    }

    /// Write every element of `entities` under the current parent node
    pub fn write_entities(
        &mut self,
        entities: EntitiesId,
        context: InheritanceContext,
    ) -> Result<ExportStats> {
        let model = self.model;
        let geometry = model.geometry();
        let mut stats = ExportStats::default();

        for instance in geometry.instances(entities)? {
            if self.skip(instance) {
                continue;
            }
            self.write_instance(instance)?;
            stats.instances += 1;
        }

        for group in geometry.groups(entities)? {
            if self.skip(group) {
                continue;
            }
            stats += self.write_group(group, context)?;
            stats.groups += 1;
        }

        if self.options.export_faces {
            for face in geometry.faces(entities)? {
                if self.skip(face) {
                    continue;
                }
                stats.faces += self.write_face(face)?;
            }
        }

        if self.options.export_edges {
            for edge in geometry.edges(entities, true)? {
                if self.skip(edge) {
                    continue;
                }
                let info = self.edge_info(edge, context)?;
                self.document.write_edge_info(&info)?;
                stats.edges += 1;
            }

            for curve in geometry.curves(entities)? {
                if self.skip(curve) {
                    continue;
                }
                let mut info = CurveInfo::default();
                for edge in geometry.curve_edges(curve)? {
                    if self.skip(edge) {
                        continue;
                    }
                    info.edges.push(self.edge_info(edge, context)?);
                }
                self.document.write_curve_info(&info)?;
                stats.curves += 1;
            }
        }

        Ok(stats)
    }

    /// Write the `Definitions` section
    ///
    /// Each definition's entities are written with the root context; instances
    /// carry their own placement.
    pub fn write_component_definitions(&mut self) -> Result<ExportStats> {
        let model = self.model;
        let attributes = model.attributes();
        let context = self.root_context();
        let mut stats = ExportStats::default();

        self.document.start_component_definitions()?;
        for definition in attributes.component_definitions()? {
            if self.skip(definition) {
                continue;
            }
            let name = attributes.definition_name(definition)?;
            let entities = attributes.definition_entities(definition)?;

            self.document.start_component_definition(&name)?;
            stats += self.write_entities(entities, context)?;
            self.document.pop_parent_node()?;
            stats.definitions += 1;
        }
        self.document.pop_parent_node()?;

        Ok(stats)
    }

    fn skip(&self, handle: impl Into<EntityRef>) -> bool {
        let handle = handle.into();
        if self.model.is_valid(handle) {
            return false;
        }
        log::trace!("Skipping invalid {}", handle);
        true
    }

    fn write_instance(&mut self, instance: InstanceId) -> Result<()> {
        let model = self.model;
        let geometry = model.geometry();
        let attributes = model.attributes();
        let element = DrawingElement::Instance(instance);

        let definition = geometry.instance_definition(instance)?;
        let definition_name = attributes.definition_name(definition)?;

        // Overrides come from the instance alone, never from the context
        let layer_name = match geometry.element_layer(element) {
            Ok(Some(layer)) if self.model.is_valid(EntityRef::Layer(layer)) => {
                Some(attributes.layer_name(layer)?)
            }
            Ok(_) => None,
            Err(e) => {
                log::debug!("No layer on {}: {}", instance, e);
                None
            }
        };
        let material_name = match geometry.element_material(element) {
            Ok(Some(material)) if self.model.is_valid(EntityRef::Material(material)) => {
                Some(attributes.material_name(material)?)
            }
            Ok(_) => None,
            Err(e) => {
                log::debug!("No material on {}: {}", instance, e);
                None
            }
        };

        let info = ComponentInstanceInfo {
            definition_name,
            layer_name,
            material_name,
            transform: geometry.instance_transform(instance)?,
        };
        self.document.write_component_instance_info(&info)
    }

    fn write_group(&mut self, group: GroupId, context: InheritanceContext) -> Result<ExportStats> {
        let model = self.model;
        let geometry = model.geometry();
        let child = context.enter(
            self.model,
            DrawingElement::Group(group),
            self.options.export_materials_by_layer,
        )?;

        self.document.start_group()?;
        let stats = self.write_entities(geometry.group_entities(group)?, child)?;
        self.document
            .write_transformation(&geometry.group_transform(group)?)?;
        self.document.pop_parent_node()?;

        Ok(stats)
    }

    /// Outer loop first, then each inner loop as a sibling record
    fn write_face(&mut self, face: FaceId) -> Result<usize> {
        let model = self.model;
        let geometry = model.geometry();

        let outer = self.loop_info(geometry.face_outer_loop(face)?)?;
        self.document.write_face_info(&outer)?;
        let mut written = 1;

        for inner in geometry.face_inner_loops(face)? {
            if self.skip(inner) {
                continue;
            }
            let info = self.loop_info(inner)?;
            self.document.write_face_info(&info)?;
            written += 1;
        }

        Ok(written)
    }

    fn loop_info(&self, face_loop: LoopId) -> Result<FaceInfo> {
        let vertices = self
            .model
            .geometry()
            .loop_vertices(face_loop)?
            .into_iter()
            .map(|vertex| self.position(vertex))
            .collect::<Result<Vec<_>>>()?;
        Ok(FaceInfo { vertices })
    }

    fn edge_info(&self, edge: EdgeId, context: InheritanceContext) -> Result<EdgeInfo> {
        let model = self.model;
        let geometry = model.geometry();
        let context = context.enter(
            self.model,
            DrawingElement::Edge(edge),
            self.options.export_materials_by_layer,
        )?;

        let layer = if self.options.export_layers {
            context
                .layer
                .map(|layer| self.layer_name(layer))
                .transpose()?
        } else {
            None
        };
        let color = self.options.export_materials.then_some(context.edge_color);

        Ok(EdgeInfo {
            layer,
            color,
            start: self.position(geometry.edge_start(edge)?)?,
            end: self.position(geometry.edge_end(edge)?)?,
        })
    }

    fn layer_name(&self, layer: LayerId) -> Result<String> {
        Ok(self.model.attributes().layer_name(layer)?)
    }

    fn position(&self, vertex: VertexId) -> Result<Point3<f64>> {
        Ok(self.model.geometry().vertex_position(vertex)?)
    }
}
