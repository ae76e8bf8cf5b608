// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arena storage built from a scene document
//!
//! Every entity kind lives in its own arena indexed by its handle. Arenas for
//! kinds that a document can leave unpopulated hold `Option` slots.

use crate::document::{
    CurveDoc, EdgeDoc, EntitiesDoc, FaceDoc, GroupDoc, InstanceDoc, MaterialDoc, SceneDocument,
    TextureDoc,
};
use base64::Engine;
use nalgebra::Point3;
use rustc_hash::FxHashMap;
use scene_xml_model::{
    Color, CurveId, DefinitionId, EdgeId, EntitiesId, EntityRef, FaceId, GroupId, InstanceId,
    LayerId, LoopId, MaterialId, MaterialType, ModelError, ModelVersion, Result,
    TextureDimensions, TextureId, Transform, VertexId,
};
use std::path::{Path, PathBuf};

pub(crate) struct LayerData {
    pub name: String,
    pub visible: bool,
    pub material: Option<MaterialId>,
}

pub(crate) struct MaterialData {
    pub name: String,
    pub kind: MaterialType,
    pub color: Option<Color>,
    pub use_opacity: bool,
    pub opacity: f64,
    pub texture: Option<TextureId>,
}

pub(crate) enum TextureImage {
    Inline(Vec<u8>),
    File(PathBuf),
    Missing,
}

pub(crate) struct TextureData {
    pub file_name: String,
    pub dimensions: TextureDimensions,
    pub image: TextureImage,
}

pub(crate) struct DefinitionData {
    pub name: String,
    pub entities: EntitiesId,
}

#[derive(Default)]
pub(crate) struct CollectionData {
    pub instances: Vec<InstanceId>,
    pub groups: Vec<GroupId>,
    pub faces: Vec<FaceId>,
    pub edges: Vec<EdgeId>,
    pub curves: Vec<CurveId>,
}

/// Layer and material set directly on a drawing element
#[derive(Clone, Copy, Default)]
pub(crate) struct ElementData {
    pub layer: Option<LayerId>,
    pub material: Option<MaterialId>,
}

pub(crate) struct InstanceData {
    pub element: ElementData,
    pub definition: DefinitionId,
    pub transform: Transform,
}

pub(crate) struct GroupData {
    pub element: ElementData,
    pub entities: EntitiesId,
    pub transform: Transform,
}

pub(crate) struct FaceData {
    pub element: ElementData,
    pub outer: LoopId,
    pub inner: Vec<LoopId>,
}

pub(crate) struct EdgeData {
    pub element: ElementData,
    pub start: VertexId,
    pub end: VertexId,
    pub standalone: bool,
}

pub(crate) struct CurveData {
    pub edges: Vec<EdgeId>,
}

/// Look up a populated slot
pub(crate) fn slot<T>(slots: &[Option<T>], index: usize) -> Option<&T> {
    slots.get(index).and_then(Option::as_ref)
}

/// All entities of a loaded scene
#[derive(Default)]
pub(crate) struct SceneStore {
    pub version: ModelVersion,
    pub default_layer: Option<LayerId>,
    pub root: EntitiesId,
    pub layers: Vec<Option<LayerData>>,
    pub materials: Vec<Option<MaterialData>>,
    pub textures: Vec<TextureData>,
    pub definitions: Vec<Option<DefinitionData>>,
    pub collections: Vec<CollectionData>,
    pub instances: Vec<Option<InstanceData>>,
    pub groups: Vec<Option<GroupData>>,
    pub faces: Vec<Option<FaceData>>,
    pub loops: Vec<Vec<VertexId>>,
    pub vertices: Vec<Point3<f64>>,
    pub edges: Vec<Option<EdgeData>>,
    pub curves: Vec<Option<CurveData>>,
}

/// Name → handle tables used while resolving references
#[derive(Default)]
struct NameTables {
    layers: FxHashMap<String, LayerId>,
    materials: FxHashMap<String, MaterialId>,
    definitions: FxHashMap<String, DefinitionId>,
}

impl NameTables {
    fn layer(&self, name: Option<&str>) -> Result<Option<LayerId>> {
        name.map(|name| {
            self.layers
                .get(name)
                .copied()
                .ok_or_else(|| ModelError::unknown("layer", name))
        })
        .transpose()
    }

    fn material(&self, name: Option<&str>) -> Result<Option<MaterialId>> {
        name.map(|name| {
            self.materials
                .get(name)
                .copied()
                .ok_or_else(|| ModelError::unknown("material", name))
        })
        .transpose()
    }

    fn definition(&self, name: &str) -> Result<DefinitionId> {
        self.definitions
            .get(name)
            .copied()
            .ok_or_else(|| ModelError::unknown("definition", name))
    }
}

/// Handle value for an arena index
pub(crate) fn handle(index: usize) -> Result<u32> {
    u32::try_from(index)
        .map_err(|_| ModelError::other(format!("arena index {} exceeds the handle range", index)))
}

fn transform(values: Option<[f64; 16]>) -> Transform {
    values
        .map(Transform::from_column_major)
        .unwrap_or_else(Transform::identity)
}

impl SceneStore {
    /// Build the arenas from a parsed document
    ///
    /// # Arguments
    /// * `doc` - The deserialized scene document
    /// * `base_dir` - Directory that relative texture sources are resolved against
    pub fn build(doc: SceneDocument, base_dir: Option<&Path>) -> Result<Self> {
        let mut store = SceneStore {
            version: doc.version,
            ..Default::default()
        };
        let mut names = NameTables::default();

        // Materials first: layers refer to them
        for (index, material) in doc.materials.into_iter().enumerate() {
            let id = MaterialId(handle(index)?);
            let data = match material {
                Some(material) => {
                    names.materials.insert(material.name.clone(), id);
                    Some(store.add_material(material, base_dir)?)
                }
                None => None,
            };
            store.materials.push(data);
        }

        for (index, layer) in doc.layers.into_iter().enumerate() {
            let id = LayerId(handle(index)?);
            let data = match layer {
                Some(layer) => {
                    names.layers.insert(layer.name.clone(), id);
                    Some(LayerData {
                        material: names.material(layer.material.as_deref())?,
                        name: layer.name,
                        visible: layer.visible,
                    })
                }
                None => None,
            };
            store.layers.push(data);
        }

        store.default_layer = match doc.default_layer.as_deref() {
            Some(name) => names.layer(Some(name))?,
            None => store
                .layers
                .iter()
                .position(Option::is_some)
                .map(|index| handle(index).map(LayerId))
                .transpose()?,
        };

        // Definition names are registered before any body is built so that
        // instances can refer to definitions declared later.
        for (index, definition) in doc.definitions.iter().enumerate() {
            if let Some(definition) = definition {
                names
                    .definitions
                    .insert(definition.name.clone(), DefinitionId(handle(index)?));
            }
        }

        let mut definitions = Vec::with_capacity(doc.definitions.len());
        for definition in doc.definitions {
            let data = match definition {
                Some(definition) => Some(DefinitionData {
                    entities: store.add_entities(definition.entities, &names)?,
                    name: definition.name,
                }),
                None => None,
            };
            definitions.push(data);
        }
        store.definitions = definitions;

        store.root = store.add_entities(doc.entities, &names)?;

        Ok(store)
    }

    fn add_material(&mut self, doc: MaterialDoc, base_dir: Option<&Path>) -> Result<MaterialData> {
        let texture = match doc.texture {
            Some(texture) => Some(self.add_texture(texture, base_dir)?),
            None => None,
        };
        Ok(MaterialData {
            name: doc.name,
            kind: doc.kind,
            color: doc.color,
            use_opacity: doc.use_opacity,
            opacity: doc.opacity,
            texture,
        })
    }

    fn add_texture(&mut self, doc: TextureDoc, base_dir: Option<&Path>) -> Result<TextureId> {
        let image = match (doc.data, doc.source) {
            (Some(data), _) => base64::engine::general_purpose::STANDARD
                .decode(data.as_bytes())
                .map(TextureImage::Inline)
                .map_err(|e| ModelError::document(format!("texture '{}': {}", doc.file, e)))?,
            (None, Some(source)) => TextureImage::File(match base_dir {
                Some(dir) if source.is_relative() => dir.join(source),
                _ => source,
            }),
            (None, None) => TextureImage::Missing,
        };

        let id = TextureId(handle(self.textures.len())?);
        self.textures.push(TextureData {
            file_name: doc.file,
            dimensions: TextureDimensions {
                width: doc.width,
                height: doc.height,
                s_scale: doc.s_scale,
                t_scale: doc.t_scale,
            },
            image,
        });
        Ok(id)
    }

    fn add_entities(&mut self, doc: EntitiesDoc, names: &NameTables) -> Result<EntitiesId> {
        let mut collection = CollectionData::default();

        for instance in doc.instances {
            let data = instance
                .map(|instance| self.instance_data(instance, names))
                .transpose()?;
            collection
                .instances
                .push(InstanceId(handle(self.instances.len())?));
            self.instances.push(data);
        }

        for group in doc.groups {
            let data = group
                .map(|group| self.group_data(group, names))
                .transpose()?;
            collection.groups.push(GroupId(handle(self.groups.len())?));
            self.groups.push(data);
        }

        for face in doc.faces {
            let data = face.map(|face| self.face_data(face, names)).transpose()?;
            collection.faces.push(FaceId(handle(self.faces.len())?));
            self.faces.push(data);
        }

        for edge in doc.edges {
            collection.edges.push(self.add_edge(edge, names)?);
        }

        for curve in doc.curves {
            let data = curve
                .map(|curve| self.curve_data(curve, names))
                .transpose()?;
            collection.curves.push(CurveId(handle(self.curves.len())?));
            self.curves.push(data);
        }

        let id = EntitiesId(handle(self.collections.len())?);
        self.collections.push(collection);
        Ok(id)
    }

    fn element_data(
        names: &NameTables,
        layer: Option<&str>,
        material: Option<&str>,
    ) -> Result<ElementData> {
        Ok(ElementData {
            layer: names.layer(layer)?,
            material: names.material(material)?,
        })
    }

    fn instance_data(&self, doc: InstanceDoc, names: &NameTables) -> Result<InstanceData> {
        Ok(InstanceData {
            element: Self::element_data(names, doc.layer.as_deref(), doc.material.as_deref())?,
            definition: names.definition(&doc.definition)?,
            transform: transform(doc.transform),
        })
    }

    fn group_data(&mut self, doc: GroupDoc, names: &NameTables) -> Result<GroupData> {
        let element = Self::element_data(names, doc.layer.as_deref(), doc.material.as_deref())?;
        Ok(GroupData {
            element,
            entities: self.add_entities(doc.entities, names)?,
            transform: transform(doc.transform),
        })
    }

    fn face_data(&mut self, doc: FaceDoc, names: &NameTables) -> Result<FaceData> {
        let element = Self::element_data(names, doc.layer.as_deref(), doc.material.as_deref())?;
        let outer = self.add_loop(&doc.outer)?;
        let inner = doc
            .inner
            .iter()
            .map(|points| self.add_loop(points))
            .collect::<Result<Vec<_>>>()?;
        Ok(FaceData {
            element,
            outer,
            inner,
        })
    }

    fn add_loop(&mut self, points: &[[f64; 3]]) -> Result<LoopId> {
        let vertices = points
            .iter()
            .map(|p| self.add_vertex(*p))
            .collect::<Result<Vec<_>>>()?;
        let id = LoopId(handle(self.loops.len())?);
        self.loops.push(vertices);
        Ok(id)
    }

    fn add_vertex(&mut self, [x, y, z]: [f64; 3]) -> Result<VertexId> {
        let id = VertexId(handle(self.vertices.len())?);
        self.vertices.push(Point3::new(x, y, z));
        Ok(id)
    }

    fn add_edge(&mut self, doc: Option<EdgeDoc>, names: &NameTables) -> Result<EdgeId> {
        let data = match doc {
            Some(edge) => Some(EdgeData {
                element: Self::element_data(names, edge.layer.as_deref(), edge.material.as_deref())?,
                start: self.add_vertex(edge.start)?,
                end: self.add_vertex(edge.end)?,
                standalone: edge.standalone,
            }),
            None => None,
        };
        let id = EdgeId(handle(self.edges.len())?);
        self.edges.push(data);
        Ok(id)
    }

    fn curve_data(&mut self, doc: CurveDoc, names: &NameTables) -> Result<CurveData> {
        let edges = doc
            .edges
            .into_iter()
            .map(|edge| self.add_edge(edge, names))
            .collect::<Result<Vec<_>>>()?;
        Ok(CurveData { edges })
    }

    /// Check whether a handle refers to a populated entity
    pub fn contains(&self, entity: EntityRef) -> bool {
        match entity {
            EntityRef::Layer(id) => slot(&self.layers, id.index()).is_some(),
            EntityRef::Material(id) => slot(&self.materials, id.index()).is_some(),
            EntityRef::Texture(id) => id.index() < self.textures.len(),
            EntityRef::Definition(id) => slot(&self.definitions, id.index()).is_some(),
            EntityRef::Entities(id) => id.index() < self.collections.len(),
            EntityRef::Instance(id) => slot(&self.instances, id.index()).is_some(),
            EntityRef::Group(id) => slot(&self.groups, id.index()).is_some(),
            EntityRef::Face(id) => slot(&self.faces, id.index()).is_some(),
            EntityRef::Loop(id) => id.index() < self.loops.len(),
            EntityRef::Vertex(id) => id.index() < self.vertices.len(),
            EntityRef::Edge(id) => slot(&self.edges, id.index()).is_some(),
            EntityRef::Curve(id) => slot(&self.curves, id.index()).is_some(),
        }
    }
}
