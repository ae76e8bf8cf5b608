// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! SceneModel - Main scene model implementation

use crate::document::SceneDocument;
use crate::store::SceneStore;

use scene_xml_model::{
    AttributeReader, EntitiesId, EntityRef, GeometryReader, LayerId, ModelError, ModelReader,
    ModelVersion, Result,
};
use std::path::Path;

/// Loaded scene implementing the `ModelReader` trait
///
/// This is the main entry point for accessing scene data. Attribute and
/// geometry queries are served from arena storage built once at load time.
pub struct SceneModel {
    store: SceneStore,
}

impl SceneModel {
    /// Parse a JSON scene document
    ///
    /// Relative texture sources are resolved against the current directory.
    pub fn from_json(content: &str) -> Result<Self> {
        Self::parse(content, None)
    }

    /// Load a JSON scene document from disk
    ///
    /// Relative texture sources are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, path.parent())
    }

    fn parse(content: &str, base_dir: Option<&Path>) -> Result<Self> {
        let doc: SceneDocument =
            serde_json::from_str(content).map_err(|e| ModelError::document(e.to_string()))?;
        let store = SceneStore::build(doc, base_dir)?;

        log::debug!(
            "Loaded scene: {} layers, {} materials, {} definitions, {} collections",
            store.layers.len(),
            store.materials.len(),
            store.definitions.len(),
            store.collections.len()
        );

        Ok(Self { store })
    }
}

impl ModelReader for SceneModel {
    fn version(&self) -> Result<ModelVersion> {
        Ok(self.store.version)
    }

    fn root_entities(&self) -> Result<EntitiesId> {
        Ok(self.store.root)
    }

    fn default_layer(&self) -> Option<LayerId> {
        self.store.default_layer
    }

    fn is_valid(&self, entity: EntityRef) -> bool {
        self.store.contains(entity)
    }

    fn attributes(&self) -> &dyn AttributeReader {
        &self.store
    }

    fn geometry(&self) -> &dyn GeometryReader {
        &self.store
    }
}
