// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Texture extraction
//!
//! Textures are collected from materials in one pass and written to the
//! document's texture directory before any XML content.

use crate::extract::layer_material;
use crate::{ExportError, Result};
use rustc_hash::{FxHashMap, FxHashSet};
use scene_xml_model::{EntityRef, MaterialId, ModelReader, TextureId};
use std::path::{Path, PathBuf};

/// Collects texture images from a model and writes them to disk
pub trait TextureWriter {
    /// Register the textures of every relevant material
    ///
    /// With `by_layer` only materials attached to layers are considered.
    /// Returns the number of distinct textures found.
    fn load_all_textures(&mut self, model: &dyn ModelReader, by_layer: bool) -> Result<usize>;

    /// Write every registered texture into `directory`
    fn write_all_textures(&mut self, model: &dyn ModelReader, directory: &Path) -> Result<()>;

    /// File name a texture stored at `path` was registered under
    fn output_name(&self, path: &str) -> Option<&str>;

    /// Delete whatever `write_all_textures` put on disk
    fn discard_textures(&mut self) -> Result<()>;
}

/// Last component of a texture path, accepting either separator
pub fn texture_base_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// `name` with `_<n>` inserted before the extension
fn numbered_name(name: &str, n: usize) -> String {
    match name.rsplit_once('.') {
        Some((stem, extension)) if !stem.is_empty() => format!("{}_{}.{}", stem, n, extension),
        _ => format!("{}_{}", name, n),
    }
}

/// Writes each distinct texture once under a unique file name
///
/// Textures are keyed by their stored path. Two different paths sharing a
/// base name get numbered names: `brick.png`, `brick_1.png`.
#[derive(Default, Debug)]
pub struct TextureCollector {
    textures: Vec<(TextureId, String)>,
    by_path: FxHashMap<String, usize>,
    names: FxHashSet<String>,
    /// Directory created by the last write, if it did not exist before
    created: Option<PathBuf>,
    written: Vec<PathBuf>,
}

impl TextureCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Output file names in registration order
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.textures.iter().map(|(_, name)| name.as_str())
    }

    fn unique_name(&self, base: &str) -> String {
        if !self.names.contains(base) {
            return base.to_string();
        }
        (1..)
            .map(|n| numbered_name(base, n))
            .find(|name| !self.names.contains(name))
            .unwrap_or_else(|| base.to_string())
    }

    fn add_material(&mut self, model: &dyn ModelReader, material: MaterialId) -> Result<()> {
        if !model.is_valid(EntityRef::Material(material)) {
            log::trace!("Skipping invalid {}", material);
            return Ok(());
        }

        let attributes = model.attributes();
        if !attributes.material_type(material)?.has_texture() {
            return Ok(());
        }
        let texture = match attributes.material_texture(material) {
            Ok(texture) => texture,
            Err(e) => {
                log::debug!("{} has no texture: {}", material, e);
                return Ok(());
            }
        };

        let file_name = attributes.texture_file_name(texture)?;
        let base = texture_base_name(&file_name);
        if base.is_empty() {
            return Err(ExportError::texture(format!(
                "{} has no file name",
                texture
            )));
        }
        if self.by_path.contains_key(&file_name) {
            log::debug!("Texture '{}' already registered", file_name);
            return Ok(());
        }

        let name = self.unique_name(base);
        if name != base {
            log::debug!("Texture '{}' renamed to '{}'", file_name, name);
        }
        self.names.insert(name.clone());
        self.by_path.insert(file_name, self.textures.len());
        self.textures.push((texture, name));
        Ok(())
    }
}

impl TextureWriter for TextureCollector {
    fn load_all_textures(&mut self, model: &dyn ModelReader, by_layer: bool) -> Result<usize> {
        let attributes = model.attributes();
        if by_layer {
            for layer in attributes.layers()? {
                if !model.is_valid(EntityRef::Layer(layer)) {
                    continue;
                }
                if let Some(material) = layer_material(model, layer) {
                    self.add_material(model, material)?;
                }
            }
        } else {
            for material in attributes.materials()? {
                self.add_material(model, material)?;
            }
        }
        Ok(self.textures.len())
    }

    fn write_all_textures(&mut self, model: &dyn ModelReader, directory: &Path) -> Result<()> {
        if !directory.exists() {
            std::fs::create_dir_all(directory)?;
            self.created = Some(directory.to_path_buf());
        }
        for (texture, name) in &self.textures {
            let image = model.attributes().texture_image(*texture)?;
            let path = directory.join(name);
            std::fs::write(&path, image)?;
            log::debug!("Wrote texture {}", path.display());
            self.written.push(path);
        }
        log::info!(
            "Wrote {} textures to {}",
            self.textures.len(),
            directory.display()
        );
        Ok(())
    }

    fn output_name(&self, path: &str) -> Option<&str> {
        self.by_path
            .get(path)
            .and_then(|&index| self.textures.get(index))
            .map(|(_, name)| name.as_str())
    }

    fn discard_textures(&mut self) -> Result<()> {
        if let Some(directory) = self.created.take() {
            self.written.clear();
            std::fs::remove_dir_all(&directory)?;
            log::info!("Removed texture directory {}", directory.display());
            return Ok(());
        }
        // The directory predates this export; only our files go
        for path in self.written.drain(..) {
            match std::fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}
