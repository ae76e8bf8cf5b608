// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Export options

use crate::{ExportError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which sections of the model are written
///
/// Every flag gates one export phase or sub-phase. Options can be built in
/// code or read from a JSON file; missing keys take their default.
///
/// ```ignore
/// let options = ExportOptions::default().with_edges(false);
/// let options = ExportOptions::from_json(r#"{ "export_faces": false }"#)?;
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportOptions {
    /// Write the layers section and layer names on edges
    pub export_layers: bool,
    /// Write textures, the materials section and edge colors
    pub export_materials: bool,
    /// Take materials from layers instead of the model's material list
    pub export_materials_by_layer: bool,
    /// Write faces
    pub export_faces: bool,
    /// Write standalone edges and curves
    pub export_edges: bool,
    /// Write the component definitions section
    pub export_component_definitions: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            export_layers: true,
            export_materials: true,
            export_materials_by_layer: false,
            export_faces: true,
            export_edges: true,
            export_component_definitions: false,
        }
    }
}

impl ExportOptions {
    /// Parse options from JSON
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| ExportError::options(e.to_string()))
    }

    /// Read options from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Set whether layers are exported
    pub fn with_layers(mut self, enabled: bool) -> Self {
        self.export_layers = enabled;
        self
    }

    /// Set whether materials are exported
    pub fn with_materials(mut self, enabled: bool) -> Self {
        self.export_materials = enabled;
        self
    }

    /// Set whether materials are taken from layers
    pub fn with_materials_by_layer(mut self, enabled: bool) -> Self {
        self.export_materials_by_layer = enabled;
        self
    }

    /// Set whether faces are exported
    pub fn with_faces(mut self, enabled: bool) -> Self {
        self.export_faces = enabled;
        self
    }

    /// Set whether edges and curves are exported
    pub fn with_edges(mut self, enabled: bool) -> Self {
        self.export_edges = enabled;
        self
    }

    /// Set whether component definitions are exported
    pub fn with_component_definitions(mut self, enabled: bool) -> Self {
        self.export_component_definitions = enabled;
        self
    }

    /// Whether the geometry phase runs at all
    pub fn exports_geometry(&self) -> bool {
        self.export_faces || self.export_edges
    }
}
