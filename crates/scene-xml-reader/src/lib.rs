// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene-XML Reader - JSON scene documents as scene-xml models
//!
//! This crate loads a scene graph described as JSON and implements the traits
//! defined in `scene-xml-model` on top of it.
//!
//! # Features
//!
//! - **Name-based references** resolved once at load time via `FxHashMap`
//! - **Arena storage** - every handle is an index, queries are O(1)
//! - **Unpopulated handles** - `null` array slots load as invalid handles
//! - **Texture images** from inline base64 data or files next to the scene
//!
//! # Example
//!
//! ```ignore
//! use scene_xml_reader::SceneParser;
//! use scene_xml_model::{ModelLoader, ModelReader};
//!
//! let model = SceneParser::new().load(Path::new("house.json"))?;
//! let layers = model.attributes().layers()?;
//! println!("Found {} layers", layers.len());
//! ```

mod attributes;
mod document;
mod geometry;
mod model;
mod store;

pub use model::SceneModel;

use scene_xml_model::{ModelLoader, ModelReader, Result};
use std::path::Path;

/// JSON scene loader implementing the `ModelLoader` trait
#[derive(Default, Debug, Clone, Copy)]
pub struct SceneParser;

impl SceneParser {
    /// Create a new loader
    pub fn new() -> Self {
        Self
    }
}

impl ModelLoader for SceneParser {
    fn load(&self, path: &Path) -> Result<Box<dyn ModelReader>> {
        SceneModel::load(path).map(|m| Box::new(m) as Box<dyn ModelReader>)
    }
}

/// Quick parse function for simple use cases
pub fn parse(content: &str) -> Result<SceneModel> {
    SceneModel::from_json(content)
}

/// Load a scene file
pub fn load(path: &Path) -> Result<SceneModel> {
    SceneModel::load(path)
}
