// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Serde representation of the JSON scene document
//!
//! Slots in entity arrays may be `null`; they load as unpopulated handles.

use scene_xml_model::{Color, MaterialType, ModelVersion};
use serde::Deserialize;
use std::path::PathBuf;

fn enabled() -> bool {
    true
}

fn unit() -> f64 {
    1.0
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub(crate) struct SceneDocument {
    #[serde(default)]
    pub version: ModelVersion,
    #[serde(default)]
    pub default_layer: Option<String>,
    #[serde(default)]
    pub layers: Vec<Option<LayerDoc>>,
    #[serde(default)]
    pub materials: Vec<Option<MaterialDoc>>,
    #[serde(default)]
    pub definitions: Vec<Option<DefinitionDoc>>,
    #[serde(default)]
    pub entities: EntitiesDoc,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub(crate) struct LayerDoc {
    pub name: String,
    #[serde(default = "enabled")]
    pub visible: bool,
    #[serde(default)]
    pub material: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub(crate) struct MaterialDoc {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: MaterialType,
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub use_opacity: bool,
    #[serde(default = "unit")]
    pub opacity: f64,
    #[serde(default)]
    pub texture: Option<TextureDoc>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub(crate) struct TextureDoc {
    pub file: String,
    pub width: usize,
    pub height: usize,
    #[serde(default = "unit")]
    pub s_scale: f64,
    #[serde(default = "unit")]
    pub t_scale: f64,
    /// Base64-encoded image bytes
    #[serde(default)]
    pub data: Option<String>,
    /// Image path, relative to the scene file
    #[serde(default)]
    pub source: Option<PathBuf>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub(crate) struct DefinitionDoc {
    pub name: String,
    #[serde(default)]
    pub entities: EntitiesDoc,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub(crate) struct EntitiesDoc {
    #[serde(default)]
    pub instances: Vec<Option<InstanceDoc>>,
    #[serde(default)]
    pub groups: Vec<Option<GroupDoc>>,
    #[serde(default)]
    pub faces: Vec<Option<FaceDoc>>,
    #[serde(default)]
    pub edges: Vec<Option<EdgeDoc>>,
    #[serde(default)]
    pub curves: Vec<Option<CurveDoc>>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub(crate) struct InstanceDoc {
    pub definition: String,
    #[serde(default)]
    pub transform: Option<[f64; 16]>,
    #[serde(default)]
    pub layer: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub(crate) struct GroupDoc {
    #[serde(default)]
    pub transform: Option<[f64; 16]>,
    #[serde(default)]
    pub layer: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub entities: EntitiesDoc,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub(crate) struct FaceDoc {
    #[serde(default)]
    pub layer: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    pub outer: Vec<[f64; 3]>,
    #[serde(default)]
    pub inner: Vec<Vec<[f64; 3]>>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub(crate) struct EdgeDoc {
    #[serde(default)]
    pub layer: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    pub start: [f64; 3],
    pub end: [f64; 3],
    /// Edge does not bound any face
    #[serde(default = "enabled")]
    pub standalone: bool,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub(crate) struct CurveDoc {
    pub edges: Vec<Option<EdgeDoc>>,
}
