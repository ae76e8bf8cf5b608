// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Flat records handed to a [`DocumentWriter`](crate::DocumentWriter)
//!
//! Records are snapshots: built from model queries, written, then dropped.

use nalgebra::Point3;
use scene_xml_model::{Color, Transform};

/// Texture reference of a material
#[derive(Clone, Debug, PartialEq)]
pub struct TextureInfo {
    /// File name as stored in the model
    pub path: String,
    pub width: usize,
    pub height: usize,
    pub s_scale: f64,
    pub t_scale: f64,
}

/// Material attributes
///
/// Color, alpha and texture are independent; any combination may be present.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialInfo {
    pub name: String,
    pub color: Option<Color>,
    pub alpha: Option<f64>,
    pub texture: Option<TextureInfo>,
}

/// Layer attributes
#[derive(Clone, Debug, PartialEq)]
pub struct LayerInfo {
    pub name: String,
    pub visible: bool,
    pub material: Option<MaterialInfo>,
}

/// One face loop
///
/// Outer and inner loops of a face are written as sibling records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FaceInfo {
    pub vertices: Vec<Point3<f64>>,
}

/// Edge with its inherited attributes
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeInfo {
    /// Effective layer name, present when layers are exported
    pub layer: Option<String>,
    /// Effective edge color, present when materials are exported
    pub color: Option<Color>,
    pub start: Point3<f64>,
    pub end: Point3<f64>,
}

/// Connected run of edges
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CurveInfo {
    pub edges: Vec<EdgeInfo>,
}

/// Placement of a component definition
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentInstanceInfo {
    pub definition_name: String,
    /// Layer set on the instance itself
    pub layer_name: Option<String>,
    /// Material set on the instance itself
    pub material_name: Option<String>,
    pub transform: Transform,
}
