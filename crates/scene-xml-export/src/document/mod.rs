// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Output documents
//!
//! A [`DocumentWriter`] receives flat records and a parent-node protocol:
//! every `start_*` opens a node that later records nest under, and
//! [`pop_parent_node`](DocumentWriter::pop_parent_node) closes the most recent
//! one.

mod xml;

pub use xml::XmlDocument;

use crate::records::{
    ComponentInstanceInfo, CurveInfo, EdgeInfo, FaceInfo, LayerInfo, MaterialInfo,
};
use crate::Result;
use scene_xml_model::Transform;
use std::path::{Path, PathBuf};

/// Sink for exported records
pub trait DocumentWriter {
    /// Create the output at `path`
    ///
    /// Fails with `DestinationUnavailable` when the file cannot be created.
    fn open(&mut self, path: &Path) -> Result<()>;

    /// Version of the application that saved the model
    fn write_header(&mut self, major: u32, minor: u32, build: u32) -> Result<()>;

    fn start_layers(&mut self) -> Result<()>;
    fn start_materials(&mut self) -> Result<()>;
    fn start_component_definitions(&mut self) -> Result<()>;
    fn start_component_definition(&mut self, name: &str) -> Result<()>;
    fn start_geometry(&mut self) -> Result<()>;
    fn start_group(&mut self) -> Result<()>;

    /// Close the most recently started node
    fn pop_parent_node(&mut self) -> Result<()>;

    fn write_layer_info(&mut self, info: &LayerInfo) -> Result<()>;
    fn write_material_info(&mut self, info: &MaterialInfo) -> Result<()>;
    fn write_face_info(&mut self, info: &FaceInfo) -> Result<()>;
    fn write_edge_info(&mut self, info: &EdgeInfo) -> Result<()>;
    fn write_curve_info(&mut self, info: &CurveInfo) -> Result<()>;
    fn write_component_instance_info(&mut self, info: &ComponentInstanceInfo) -> Result<()>;

    /// Transform of the current parent node
    fn write_transformation(&mut self, transform: &Transform) -> Result<()>;

    /// Directory texture images are written to, once the document is open
    fn texture_directory(&self) -> Option<PathBuf>;

    /// Finish the document
    ///
    /// A cancelled document is discarded instead of completed.
    fn close(&mut self, cancelled: bool) -> Result<()>;
}

/// Sibling directory holding the textures of `document`: `<stem>_textures`
pub fn texture_directory_for(document: &Path) -> PathBuf {
    let stem = document
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    document.with_file_name(format!("{}_textures", stem))
}

#[cfg(test)]
pub(crate) mod recording {
    //! In-memory writer logging every call

    use super::*;
    use crate::ExportError;

    #[derive(Clone, Debug, PartialEq)]
    pub enum Record {
        Header(u32, u32, u32),
        Start(String),
        Pop,
        Layer(LayerInfo),
        Material(MaterialInfo),
        Face(FaceInfo),
        Edge(EdgeInfo),
        Curve(CurveInfo),
        Instance(ComponentInstanceInfo),
        Transformation(Transform),
    }

    #[derive(Default)]
    pub struct RecordingDocument {
        pub records: Vec<Record>,
        pub path: Option<PathBuf>,
        pub closed: Option<bool>,
        /// `close` fails when called with this `cancelled` flag
        pub fail_close: Option<bool>,
        pub(crate) depth: usize,
    }

    impl RecordingDocument {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn faces(&self) -> Vec<&FaceInfo> {
            self.records
                .iter()
                .filter_map(|record| match record {
                    Record::Face(face) => Some(face),
                    _ => None,
                })
                .collect()
        }

        pub fn edges(&self) -> Vec<&EdgeInfo> {
            self.records
                .iter()
                .filter_map(|record| match record {
                    Record::Edge(edge) => Some(edge),
                    _ => None,
                })
                .collect()
        }

        fn start(&mut self, name: &str) -> Result<()> {
            self.depth += 1;
            self.push(Record::Start(name.to_string()))
        }

        fn push(&mut self, record: Record) -> Result<()> {
            if self.path.is_none() {
                return Err(ExportError::DocumentNotOpen);
            }
            self.records.push(record);
            Ok(())
        }
    }

    impl DocumentWriter for RecordingDocument {
        fn open(&mut self, path: &Path) -> Result<()> {
            self.path = Some(path.to_path_buf());
            Ok(())
        }

        fn write_header(&mut self, major: u32, minor: u32, build: u32) -> Result<()> {
            self.push(Record::Header(major, minor, build))
        }

        fn start_layers(&mut self) -> Result<()> {
            self.start("Layers")
        }

        fn start_materials(&mut self) -> Result<()> {
            self.start("Materials")
        }

        fn start_component_definitions(&mut self) -> Result<()> {
            self.start("Definitions")
        }

        fn start_component_definition(&mut self, name: &str) -> Result<()> {
            self.start(&format!("Definition:{}", name))
        }

        fn start_geometry(&mut self) -> Result<()> {
            self.start("Geometry")
        }

        fn start_group(&mut self) -> Result<()> {
            self.start("Group")
        }

        fn pop_parent_node(&mut self) -> Result<()> {
            if self.depth == 0 {
                return Err(ExportError::UnbalancedNode);
            }
            self.depth -= 1;
            self.push(Record::Pop)
        }

        fn write_layer_info(&mut self, info: &LayerInfo) -> Result<()> {
            self.push(Record::Layer(info.clone()))
        }

        fn write_material_info(&mut self, info: &MaterialInfo) -> Result<()> {
            self.push(Record::Material(info.clone()))
        }

        fn write_face_info(&mut self, info: &FaceInfo) -> Result<()> {
            self.push(Record::Face(info.clone()))
        }

        fn write_edge_info(&mut self, info: &EdgeInfo) -> Result<()> {
            self.push(Record::Edge(info.clone()))
        }

        fn write_curve_info(&mut self, info: &CurveInfo) -> Result<()> {
            self.push(Record::Curve(info.clone()))
        }

        fn write_component_instance_info(&mut self, info: &ComponentInstanceInfo) -> Result<()> {
            self.push(Record::Instance(info.clone()))
        }

        fn write_transformation(&mut self, transform: &Transform) -> Result<()> {
            self.push(Record::Transformation(*transform))
        }

        fn texture_directory(&self) -> Option<PathBuf> {
            self.path.as_deref().map(texture_directory_for)
        }

        fn close(&mut self, cancelled: bool) -> Result<()> {
            self.closed = Some(cancelled);
            if self.fail_close == Some(cancelled) {
                return Err(std::io::Error::other("no space left on device").into());
            }
            Ok(())
        }
    }
}
