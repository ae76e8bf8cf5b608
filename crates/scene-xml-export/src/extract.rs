// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Attribute extractors
//!
//! Turn layers and materials into flat records. Required queries propagate
//! their errors; optional facets that fail to resolve are left out.

use crate::records::{LayerInfo, MaterialInfo, TextureInfo};
use crate::Result;
use scene_xml_model::{EntityRef, LayerId, MaterialId, ModelReader};

/// Build the record for a material
///
/// The caller guarantees `material` is valid.
///
/// - color: only for colored and colorized-texture materials, absent if the
///   color query fails
/// - alpha: only when the material uses opacity
/// - texture: only for textured and colorized-texture materials, absent if the
///   material has no texture
pub fn material_info(model: &dyn ModelReader, material: MaterialId) -> Result<MaterialInfo> {
    debug_assert!(model.is_valid(EntityRef::Material(material)));
    let attributes = model.attributes();

    let name = attributes.material_name(material)?;
    let kind = attributes.material_type(material)?;

    let color = if kind.has_color() {
        match attributes.material_color(material) {
            Ok(color) => Some(color),
            Err(e) => {
                log::debug!("Material '{}' has no usable color: {}", name, e);
                None
            }
        }
    } else {
        None
    };

    let alpha = if attributes.material_uses_opacity(material)? {
        Some(attributes.material_opacity(material)?)
    } else {
        None
    };

    let texture = if kind.has_texture() {
        match attributes.material_texture(material) {
            Ok(texture) => {
                let dimensions = attributes.texture_dimensions(texture)?;
                Some(TextureInfo {
                    path: attributes.texture_file_name(texture)?,
                    width: dimensions.width,
                    height: dimensions.height,
                    s_scale: dimensions.s_scale,
                    t_scale: dimensions.t_scale,
                })
            }
            Err(e) => {
                log::debug!("Material '{}' has no usable texture: {}", name, e);
                None
            }
        }
    } else {
        None
    };

    Ok(MaterialInfo {
        name,
        color,
        alpha,
        texture,
    })
}

/// Build the record for a layer
///
/// The caller guarantees `layer` is valid. The layer's material is included
/// when it has one.
pub fn layer_info(model: &dyn ModelReader, layer: LayerId) -> Result<LayerInfo> {
    let attributes = model.attributes();

    let name = attributes.layer_name(layer)?;
    let material = match layer_material(model, layer) {
        Some(material) => Some(material_info(model, material)?),
        None => None,
    };
    let visible = attributes.layer_visibility(layer)?;

    Ok(LayerInfo {
        name,
        visible,
        material,
    })
}

/// Material attached to a layer, if it has a valid one
pub(crate) fn layer_material(model: &dyn ModelReader, layer: LayerId) -> Option<MaterialId> {
    match model.attributes().layer_material(layer) {
        Ok(Some(material)) if model.is_valid(EntityRef::Material(material)) => Some(material),
        Ok(_) => None,
        Err(e) => {
            log::debug!("No material for {}: {}", layer, e);
            None
        }
    }
}
