// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! AttributeReader trait implementation

use crate::store::{handle, slot, DefinitionData, LayerData, MaterialData, SceneStore, TextureData, TextureImage};
use scene_xml_model::{
    AttributeReader, Color, DefinitionId, EntitiesId, LayerId, MaterialId, MaterialType,
    ModelError, Result, TextureDimensions, TextureId,
};

impl SceneStore {
    pub(crate) fn layer(&self, id: LayerId) -> Result<&LayerData> {
        slot(&self.layers, id.index()).ok_or(ModelError::InvalidHandle(id.into()))
    }

    pub(crate) fn material(&self, id: MaterialId) -> Result<&MaterialData> {
        slot(&self.materials, id.index()).ok_or(ModelError::InvalidHandle(id.into()))
    }

    fn texture(&self, id: TextureId) -> Result<&TextureData> {
        self.textures
            .get(id.index())
            .ok_or(ModelError::InvalidHandle(id.into()))
    }

    fn definition(&self, id: DefinitionId) -> Result<&DefinitionData> {
        slot(&self.definitions, id.index()).ok_or(ModelError::InvalidHandle(id.into()))
    }
}

impl AttributeReader for SceneStore {
    fn layers(&self) -> Result<Vec<LayerId>> {
        (0..self.layers.len())
            .map(|index| handle(index).map(LayerId))
            .collect()
    }

    fn layer_name(&self, layer: LayerId) -> Result<String> {
        Ok(self.layer(layer)?.name.clone())
    }

    fn layer_visibility(&self, layer: LayerId) -> Result<bool> {
        Ok(self.layer(layer)?.visible)
    }

    fn layer_material(&self, layer: LayerId) -> Result<Option<MaterialId>> {
        Ok(self.layer(layer)?.material)
    }

    fn materials(&self) -> Result<Vec<MaterialId>> {
        (0..self.materials.len())
            .map(|index| handle(index).map(MaterialId))
            .collect()
    }

    fn material_name(&self, material: MaterialId) -> Result<String> {
        Ok(self.material(material)?.name.clone())
    }

    fn material_type(&self, material: MaterialId) -> Result<MaterialType> {
        Ok(self.material(material)?.kind)
    }

    fn material_color(&self, material: MaterialId) -> Result<Color> {
        self.material(material)?
            .color
            .ok_or_else(|| ModelError::missing(material, "color"))
    }

    fn material_uses_opacity(&self, material: MaterialId) -> Result<bool> {
        Ok(self.material(material)?.use_opacity)
    }

    fn material_opacity(&self, material: MaterialId) -> Result<f64> {
        Ok(self.material(material)?.opacity)
    }

    fn material_texture(&self, material: MaterialId) -> Result<TextureId> {
        self.material(material)?
            .texture
            .ok_or_else(|| ModelError::missing(material, "texture"))
    }

    fn texture_file_name(&self, texture: TextureId) -> Result<String> {
        Ok(self.texture(texture)?.file_name.clone())
    }

    fn texture_dimensions(&self, texture: TextureId) -> Result<TextureDimensions> {
        Ok(self.texture(texture)?.dimensions)
    }

    fn texture_image(&self, texture: TextureId) -> Result<Vec<u8>> {
        match &self.texture(texture)?.image {
            TextureImage::Inline(bytes) => Ok(bytes.clone()),
            TextureImage::File(path) => {
                log::debug!("Reading texture {} from {}", texture, path.display());
                Ok(std::fs::read(path)?)
            }
            TextureImage::Missing => Err(ModelError::missing(texture, "image data")),
        }
    }

    fn component_definitions(&self) -> Result<Vec<DefinitionId>> {
        (0..self.definitions.len())
            .map(|index| handle(index).map(DefinitionId))
            .collect()
    }

    fn definition_name(&self, definition: DefinitionId) -> Result<String> {
        Ok(self.definition(definition)?.name.clone())
    }

    fn definition_entities(&self, definition: DefinitionId) -> Result<EntitiesId> {
        Ok(self.definition(definition)?.entities)
    }
}
