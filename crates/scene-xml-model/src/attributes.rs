// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Attribute queries for layers, materials, textures and definitions

use crate::{
    Color, DefinitionId, EntitiesId, LayerId, MaterialId, MaterialType, Result, TextureDimensions,
    TextureId,
};

/// Read access to the model's named resources
///
/// Optional facets (a material's color or texture, a layer's material) are
/// reported as errors or `None` when absent; whether that is fatal is up to
/// the caller.
///
/// # Example
///
/// ```ignore
/// use scene_xml_model::AttributeReader;
///
/// fn list_layers(attributes: &dyn AttributeReader) -> Result<()> {
///     for layer in attributes.layers()? {
///         let name = attributes.layer_name(layer)?;
///         let visible = attributes.layer_visibility(layer)?;
///         println!("{name}: visible={visible}");
///     }
///     Ok(())
/// }
/// ```
pub trait AttributeReader {
    /// All layers in model order
    fn layers(&self) -> Result<Vec<LayerId>>;

    /// Layer display name
    fn layer_name(&self, layer: LayerId) -> Result<String>;

    /// Whether the layer is visible
    fn layer_visibility(&self, layer: LayerId) -> Result<bool>;

    /// Material attached to the layer, if any
    fn layer_material(&self, layer: LayerId) -> Result<Option<MaterialId>>;

    /// All materials in model order
    fn materials(&self) -> Result<Vec<MaterialId>>;

    /// Material display name
    fn material_name(&self, material: MaterialId) -> Result<String>;

    /// How the material is rendered
    fn material_type(&self, material: MaterialId) -> Result<MaterialType>;

    /// Material color
    ///
    /// Fails with `MissingAttribute` when the material has no color.
    fn material_color(&self, material: MaterialId) -> Result<Color>;

    /// Whether the material's opacity is in use
    fn material_uses_opacity(&self, material: MaterialId) -> Result<bool>;

    /// Material opacity in `[0, 1]`
    fn material_opacity(&self, material: MaterialId) -> Result<f64>;

    /// Texture applied by the material
    ///
    /// Fails with `MissingAttribute` when the material has no texture.
    fn material_texture(&self, material: MaterialId) -> Result<TextureId>;

    /// Texture file name as stored in the model
    fn texture_file_name(&self, texture: TextureId) -> Result<String>;

    /// Texture pixel size and scaling
    fn texture_dimensions(&self, texture: TextureId) -> Result<TextureDimensions>;

    /// Encoded image bytes of the texture
    fn texture_image(&self, texture: TextureId) -> Result<Vec<u8>>;

    /// All component definitions in model order
    fn component_definitions(&self) -> Result<Vec<DefinitionId>>;

    /// Component definition name
    fn definition_name(&self, definition: DefinitionId) -> Result<String>;

    /// Entities making up the component definition
    fn definition_entities(&self, definition: DefinitionId) -> Result<EntitiesId>;
}
