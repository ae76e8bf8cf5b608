// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core traits for reading scene models
//!
//! These traits define the main abstractions for working with a loaded model.

use crate::{AttributeReader, EntitiesId, EntityRef, GeometryReader, LayerId, ModelVersion, Result};
use std::path::Path;

/// Loading interface - entry point for opening a model from disk
///
/// # Example
///
/// ```ignore
/// use scene_xml_model::{ModelLoader, ModelReader};
///
/// let loader: Box<dyn ModelLoader> = get_loader();
/// let model = loader.load(Path::new("house.json"))?;
/// println!("Saved by version {}", model.version()?);
/// ```
pub trait ModelLoader {
    /// Load a model from a file
    ///
    /// # Arguments
    /// * `path` - Location of the model file
    ///
    /// # Returns
    /// A boxed model on success, or a `ModelError` on failure
    fn load(&self, path: &Path) -> Result<Box<dyn ModelReader>>;
}

/// Core model interface - read-only access to a loaded scene
///
/// Attribute and geometry queries are grouped into sub-traits. Every handle
/// handed out by a reader may be unpopulated; callers check
/// [`is_valid`](ModelReader::is_valid) before passing it on.
pub trait ModelReader {
    /// Version of the application that saved the model
    fn version(&self) -> Result<ModelVersion>;

    /// Top-level entities collection
    fn root_entities(&self) -> Result<EntitiesId>;

    /// Layer that entities are placed on when nothing else is set
    ///
    /// Elements on this layer inherit their layer from their parent.
    fn default_layer(&self) -> Option<LayerId>;

    /// Check whether a handle refers to a populated entity
    fn is_valid(&self, entity: EntityRef) -> bool;

    /// Layers, materials, textures and component definitions
    fn attributes(&self) -> &dyn AttributeReader;

    /// Entity collections and their geometry
    fn geometry(&self) -> &dyn GeometryReader;
}

impl<M: ModelReader + ?Sized> ModelReader for Box<M> {
    fn version(&self) -> Result<ModelVersion> {
        (**self).version()
    }

    fn root_entities(&self) -> Result<EntitiesId> {
        (**self).root_entities()
    }

    fn default_layer(&self) -> Option<LayerId> {
        (**self).default_layer()
    }

    fn is_valid(&self, entity: EntityRef) -> bool {
        (**self).is_valid(entity)
    }

    fn attributes(&self) -> &dyn AttributeReader {
        (**self).attributes()
    }

    fn geometry(&self) -> &dyn GeometryReader {
        (**self).geometry()
    }
}

/// Extension methods for ModelReader
pub trait ModelReaderExt: ModelReader {
    /// Check a handle, converting it into an `EntityRef` first
    fn is_valid_handle(&self, handle: impl Into<EntityRef>) -> bool {
        self.is_valid(handle.into())
    }

    /// Return the handle if valid, otherwise an `InvalidHandle` error
    fn require<H: Into<EntityRef> + Copy>(&self, handle: H) -> Result<H> {
        if self.is_valid(handle.into()) {
            Ok(handle)
        } else {
            Err(crate::ModelError::InvalidHandle(handle.into()))
        }
    }
}

// Blanket implementation for all ModelReader types
impl<T: ModelReader + ?Sized> ModelReaderExt for T {}
