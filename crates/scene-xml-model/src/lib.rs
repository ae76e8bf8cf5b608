// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene-XML Model - Trait definitions and shared types for reading CAD scenes
//!
//! This crate provides the core abstractions for reading a CAD model's scene
//! graph: layers, materials, component definitions, and nested entity
//! collections holding instances, groups, faces, edges and curves. It defines
//! traits that can be implemented by different model backends, allowing
//! exporters to work with scene data in a backend-agnostic way.
//!
//! # Architecture
//!
//! The crate is organized around several key traits:
//!
//! - [`ModelLoader`] - Entry point for loading a model from disk
//! - [`ModelReader`] - Read-only access to a loaded model
//! - [`AttributeReader`] - Layers, materials, textures and definitions
//! - [`GeometryReader`] - Entity collections, loops, vertices and transforms
//!
//! # Example
//!
//! ```ignore
//! use scene_xml_model::{ModelLoader, ModelReader};
//!
//! let model = loader.load(path)?;
//! let root = model.root_entities()?;
//! for face in model.geometry().faces(root)? {
//!     let outer = model.geometry().face_outer_loop(face)?;
//!     println!("{} vertices", model.geometry().loop_vertices(outer)?.len());
//! }
//! ```

pub mod attributes;
pub mod error;
pub mod geometry;
pub mod traits;
pub mod types;

// Re-export all public types
pub use attributes::*;
pub use error::*;
pub use geometry::*;
pub use traits::*;
pub use types::*;

pub use nalgebra::Point3;
