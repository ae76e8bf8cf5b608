// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! XML document writer

use super::{texture_directory_for, DocumentWriter};
use crate::records::{
    ComponentInstanceInfo, CurveInfo, EdgeInfo, FaceInfo, LayerInfo, MaterialInfo,
};
use crate::{ExportError, Result};
use nalgebra::Point3;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use scene_xml_model::{Color, Transform};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const ROOT: &str = "SceneModel";

struct OpenDocument {
    path: PathBuf,
    writer: Writer<BufWriter<File>>,
    /// Names of the elements started and not yet ended, root first
    nodes: Vec<&'static str>,
}

/// Writes records as an indented XML file
///
/// ```ignore
/// let mut document = XmlDocument::new();
/// document.open(Path::new("house.xml"))?;
/// document.write_header(23, 1, 340)?;
/// document.close(false)?;
/// ```
#[derive(Default)]
pub struct XmlDocument {
    open: Option<OpenDocument>,
}

impl XmlDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the open document
    pub fn path(&self) -> Option<&Path> {
        self.open.as_ref().map(|doc| doc.path.as_path())
    }

    fn doc(&mut self) -> Result<&mut OpenDocument> {
        self.open.as_mut().ok_or(ExportError::DocumentNotOpen)
    }

    fn start(&mut self, name: &'static str, attributes: &[(&str, String)]) -> Result<()> {
        let doc = self.doc()?;
        doc.writer
            .write_event(Event::Start(element(name, attributes)))?;
        doc.nodes.push(name);
        Ok(())
    }
}

impl Drop for XmlDocument {
    fn drop(&mut self) {
        if self.open.is_some() {
            log::warn!("XML document dropped without close, discarding it");
            if let Err(e) = self.close(true) {
                log::warn!("Failed to discard XML document: {}", e);
            }
        }
    }
}

fn element<'a>(name: &'a str, attributes: &[(&str, String)]) -> BytesStart<'a> {
    let mut start = BytesStart::new(name);
    for (key, value) in attributes {
        start.push_attribute((*key, value.as_str()));
    }
    start
}

fn point_attributes(point: &Point3<f64>) -> [(&'static str, String); 3] {
    [
        ("x", point.x.to_string()),
        ("y", point.y.to_string()),
        ("z", point.z.to_string()),
    ]
}

fn color_attributes(color: &Color) -> [(&'static str, String); 4] {
    [
        ("r", color.r.to_string()),
        ("g", color.g.to_string()),
        ("b", color.b.to_string()),
        ("a", color.a.to_string()),
    ]
}

fn write_empty<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    attributes: &[(&str, String)],
) -> Result<()> {
    writer.write_event(Event::Empty(element(name, attributes)))?;
    Ok(())
}

fn write_end<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<()> {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_material<W: Write>(writer: &mut Writer<W>, info: &MaterialInfo) -> Result<()> {
    let attributes = [("name", info.name.clone())];
    if info.color.is_none() && info.alpha.is_none() && info.texture.is_none() {
        return write_empty(writer, "Material", &attributes);
    }

    writer.write_event(Event::Start(element("Material", &attributes)))?;
    if let Some(color) = &info.color {
        write_empty(writer, "Color", &color_attributes(color))?;
    }
    if let Some(alpha) = info.alpha {
        write_empty(writer, "Alpha", &[("value", alpha.to_string())])?;
    }
    if let Some(texture) = &info.texture {
        write_empty(
            writer,
            "Texture",
            &[
                ("path", texture.path.clone()),
                ("width", texture.width.to_string()),
                ("height", texture.height.to_string()),
                ("sscale", texture.s_scale.to_string()),
                ("tscale", texture.t_scale.to_string()),
            ],
        )?;
    }
    write_end(writer, "Material")
}

fn write_edge<W: Write>(writer: &mut Writer<W>, info: &EdgeInfo) -> Result<()> {
    let attributes: Vec<(&str, String)> = info
        .layer
        .iter()
        .map(|layer| ("layer", layer.clone()))
        .collect();
    writer.write_event(Event::Start(element("Edge", &attributes)))?;
    if let Some(color) = &info.color {
        write_empty(writer, "Color", &color_attributes(color))?;
    }
    write_empty(writer, "Start", &point_attributes(&info.start))?;
    write_empty(writer, "End", &point_attributes(&info.end))?;
    write_end(writer, "Edge")
}

fn write_transform<W: Write>(writer: &mut Writer<W>, transform: &Transform) -> Result<()> {
    let values = transform
        .to_column_major()
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    writer.write_event(Event::Start(BytesStart::new("Transformation")))?;
    writer.write_event(Event::Text(BytesText::new(&values)))?;
    write_end(writer, "Transformation")
}

impl DocumentWriter for XmlDocument {
    fn open(&mut self, path: &Path) -> Result<()> {
        if self.open.is_some() {
            self.close(true)?;
        }

        let file = File::create(path).map_err(|e| ExportError::destination(path, e))?;
        let mut writer = Writer::new_with_indent(BufWriter::new(file), b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        writer.write_event(Event::Start(BytesStart::new(ROOT)))?;

        log::debug!("Opened XML document {}", path.display());
        self.open = Some(OpenDocument {
            path: path.to_path_buf(),
            writer,
            nodes: vec![ROOT],
        });
        Ok(())
    }

    fn write_header(&mut self, major: u32, minor: u32, build: u32) -> Result<()> {
        let doc = self.doc()?;
        write_empty(
            &mut doc.writer,
            "Header",
            &[
                ("major", major.to_string()),
                ("minor", minor.to_string()),
                ("build", build.to_string()),
            ],
        )
    }

    fn start_layers(&mut self) -> Result<()> {
        self.start("Layers", &[])
    }

    fn start_materials(&mut self) -> Result<()> {
        self.start("Materials", &[])
    }

    fn start_component_definitions(&mut self) -> Result<()> {
        self.start("Definitions", &[])
    }

    fn start_component_definition(&mut self, name: &str) -> Result<()> {
        self.start("Definition", &[("name", name.to_string())])
    }

    fn start_geometry(&mut self) -> Result<()> {
        self.start("Geometry", &[])
    }

    fn start_group(&mut self) -> Result<()> {
        self.start("Group", &[])
    }

    fn pop_parent_node(&mut self) -> Result<()> {
        let doc = self.doc()?;
        // The root element is only closed by `close`
        if doc.nodes.len() <= 1 {
            return Err(ExportError::UnbalancedNode);
        }
        let name = doc.nodes.pop().ok_or(ExportError::UnbalancedNode)?;
        write_end(&mut doc.writer, name)
    }

    fn write_layer_info(&mut self, info: &LayerInfo) -> Result<()> {
        let doc = self.doc()?;
        let attributes = [
            ("name", info.name.clone()),
            ("visible", info.visible.to_string()),
        ];
        match &info.material {
            Some(material) => {
                doc.writer
                    .write_event(Event::Start(element("Layer", &attributes)))?;
                write_material(&mut doc.writer, material)?;
                write_end(&mut doc.writer, "Layer")
            }
            None => write_empty(&mut doc.writer, "Layer", &attributes),
        }
    }

    fn write_material_info(&mut self, info: &MaterialInfo) -> Result<()> {
        write_material(&mut self.doc()?.writer, info)
    }

    fn write_face_info(&mut self, info: &FaceInfo) -> Result<()> {
        let writer = &mut self.doc()?.writer;
        writer.write_event(Event::Start(BytesStart::new("Face")))?;
        for vertex in &info.vertices {
            write_empty(writer, "Vertex", &point_attributes(vertex))?;
        }
        write_end(writer, "Face")
    }

    fn write_edge_info(&mut self, info: &EdgeInfo) -> Result<()> {
        write_edge(&mut self.doc()?.writer, info)
    }

    fn write_curve_info(&mut self, info: &CurveInfo) -> Result<()> {
        let writer = &mut self.doc()?.writer;
        writer.write_event(Event::Start(BytesStart::new("Curve")))?;
        for edge in &info.edges {
            write_edge(writer, edge)?;
        }
        write_end(writer, "Curve")
    }

    fn write_component_instance_info(&mut self, info: &ComponentInstanceInfo) -> Result<()> {
        let writer = &mut self.doc()?.writer;
        let mut attributes = vec![("definition", info.definition_name.clone())];
        if let Some(layer) = &info.layer_name {
            attributes.push(("layer", layer.clone()));
        }
        if let Some(material) = &info.material_name {
            attributes.push(("material", material.clone()));
        }
        writer.write_event(Event::Start(element("ComponentInstance", &attributes)))?;
        write_transform(writer, &info.transform)?;
        write_end(writer, "ComponentInstance")
    }

    fn write_transformation(&mut self, transform: &Transform) -> Result<()> {
        write_transform(&mut self.doc()?.writer, transform)
    }

    fn texture_directory(&self) -> Option<PathBuf> {
        self.path().map(texture_directory_for)
    }

    fn close(&mut self, cancelled: bool) -> Result<()> {
        let Some(mut doc) = self.open.take() else {
            return Err(ExportError::DocumentNotOpen);
        };

        if cancelled {
            discard(doc)?;
            return Ok(());
        }

        if let Err(e) = finish(&mut doc.writer, &mut doc.nodes) {
            log::warn!("Failed to complete {}: {}", doc.path.display(), e);
            if let Err(remove) = discard(doc) {
                log::warn!("Failed to remove incomplete document: {}", remove);
            }
            return Err(e);
        }
        log::debug!("Closed XML document {}", doc.path.display());
        Ok(())
    }
}

/// End every open element, innermost first, and flush
fn finish<W: Write>(writer: &mut Writer<W>, nodes: &mut Vec<&'static str>) -> Result<()> {
    while let Some(name) = nodes.pop() {
        write_end(writer, name)?;
    }
    writer.get_mut().flush()?;
    Ok(())
}

/// Release the file handle and delete the file
fn discard(doc: OpenDocument) -> Result<()> {
    let OpenDocument { path, writer, .. } = doc;
    drop(writer);
    std::fs::remove_file(&path)?;
    log::info!("Discarded document {}", path.display());
    Ok(())
}
