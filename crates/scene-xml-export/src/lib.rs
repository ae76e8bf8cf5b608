// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Scene-XML Export
//!
//! Exports a loaded scene model to an XML document: layers, materials,
//! component definitions and instances, groups, faces, standalone edges and
//! curves, plus a sibling directory holding texture images.
//!
//! ## Overview
//!
//! - [`XmlExporter`] runs the export phases and reports progress
//! - [`SceneWriter`] walks entity collections depth first
//! - [`InheritanceContext`] carries the effective layer and edge color down
//!   the scene graph
//! - [`DocumentWriter`] and [`TextureWriter`] are the output seams, with
//!   [`XmlDocument`] and [`TextureCollector`] as the shipped implementations
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use scene_xml_export::{ExportOptions, XmlExporter};
//! use scene_xml_reader::SceneParser;
//!
//! let options = ExportOptions::load(Path::new("options.json"))?;
//! let stats = XmlExporter::new(options).convert(
//!     &SceneParser::new(),
//!     Path::new("house.json"),
//!     Path::new("house.xml"),
//!     &mut |percent: f32, label: &str| log::info!("{}% {}", percent, label),
//! )?;
//! ```

pub mod document;
pub mod error;
pub mod exporter;
pub mod extract;
pub mod inheritance;
pub mod options;
pub mod progress;
pub mod records;
pub mod stats;
pub mod texture;
pub mod traverse;

pub use document::{texture_directory_for, DocumentWriter, XmlDocument};
pub use error::{ExportError, Result};
pub use exporter::{ExportPhase, XmlExporter};
pub use extract::{layer_info, material_info};
pub use inheritance::{InheritanceContext, InheritanceTracker};
pub use options::ExportOptions;
pub use progress::ExportProgress;
pub use records::{
    ComponentInstanceInfo, CurveInfo, EdgeInfo, FaceInfo, LayerInfo, MaterialInfo, TextureInfo,
};
pub use stats::ExportStats;
pub use texture::{texture_base_name, TextureCollector, TextureWriter};
pub use traverse::SceneWriter;
