// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Export orchestration
//!
//! Runs the export phases in order, reports progress between them and makes
//! sure the output is closed exactly once on every path.

use crate::document::{DocumentWriter, XmlDocument};
use crate::extract::{layer_info, layer_material, material_info};
use crate::progress::ExportProgress;
use crate::records::MaterialInfo;
use crate::texture::{TextureCollector, TextureWriter};
use crate::traverse::SceneWriter;
use crate::{ExportError, ExportOptions, ExportStats, Result};
use rustc_hash::FxHashSet;
use scene_xml_model::{EntityRef, MaterialId, ModelLoader, ModelReader};
use std::path::Path;

/// Progress of a single export
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExportPhase {
    Init,
    TexturesWritten,
    HeaderWritten,
    LayersWritten,
    MaterialsWritten,
    DefinitionsWritten,
    GeometryWritten,
    Closed,
}

/// Exports models to the XML scene format
///
/// # Example
///
/// ```ignore
/// use scene_xml_export::{ExportOptions, XmlExporter};
/// use scene_xml_reader::SceneParser;
///
/// let exporter = XmlExporter::new(ExportOptions::default());
/// let stats = exporter.convert(
///     &SceneParser::new(),
///     Path::new("house.json"),
///     Path::new("house.xml"),
///     &mut |percent: f32, label: &str| println!("{:>3}% {}", percent, label),
/// )?;
/// println!("{} faces", stats.faces);
/// ```
#[derive(Clone, Debug, Default)]
pub struct XmlExporter {
    options: ExportOptions,
}

impl XmlExporter {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Load `source` with `loader` and export it to an XML file
    pub fn convert(
        &self,
        loader: &dyn ModelLoader,
        source: &Path,
        destination: &Path,
        progress: &mut dyn ExportProgress,
    ) -> Result<ExportStats> {
        let model = loader.load(source)?;
        self.export(
            model,
            XmlDocument::new(),
            TextureCollector::new(),
            destination,
            progress,
        )
    }

    /// Export `model` into `document` at `destination`
    ///
    /// Takes ownership of the model and both writers; all three are released
    /// when this returns. On failure or cancellation the document and any
    /// written textures are discarded before the error is returned.
    pub fn export<M, D, T>(
        &self,
        model: M,
        mut document: D,
        mut textures: T,
        destination: &Path,
        progress: &mut dyn ExportProgress,
    ) -> Result<ExportStats>
    where
        M: ModelReader,
        D: DocumentWriter,
        T: TextureWriter,
    {
        if let Err(e) = document.open(destination) {
            log::warn!("Export aborted: {}", e);
            return Err(e);
        }

        let mut phase = ExportPhase::Init;
        let result = self.write_phases(&model, &mut document, &mut textures, progress, &mut phase);

        match result {
            Ok(_) if progress.is_cancelled() => {
                discard(&mut document, &mut textures);
                log::info!("Export cancelled after {:?}", phase);
                Err(ExportError::Cancelled)
            }
            Ok(stats) => {
                if let Err(e) = document.close(false) {
                    if let Err(texture_error) = textures.discard_textures() {
                        log::warn!("Failed to remove textures: {}", texture_error);
                    }
                    log::warn!("Export failed while closing: {}", e);
                    return Err(e);
                }
                advance(&mut phase, ExportPhase::Closed);
                progress.on_progress(100.0, "Export Complete");
                log::info!("Export complete: {:?}", stats);
                Ok(stats)
            }
            Err(e) => {
                discard(&mut document, &mut textures);
                log::info!("Export failed after {:?}: {}", phase, e);
                Err(e)
            }
        }
    }

    fn write_phases<D, T>(
        &self,
        model: &dyn ModelReader,
        document: &mut D,
        textures: &mut T,
        progress: &mut dyn ExportProgress,
        phase: &mut ExportPhase,
    ) -> Result<ExportStats>
    where
        D: DocumentWriter,
        T: TextureWriter,
    {
        let options = &self.options;
        let by_layer = options.export_materials_by_layer;
        let mut stats = ExportStats::default();

        if options.export_materials {
            report(progress, 0.0, "Writing Texture Files...")?;
            stats.textures = textures.load_all_textures(model, by_layer)?;
            if stats.textures > 0 {
                let directory = document
                    .texture_directory()
                    .ok_or(ExportError::DocumentNotOpen)?;
                textures.write_all_textures(model, &directory)?;
            }
        }
        advance(phase, ExportPhase::TexturesWritten);

        let version = model.version()?;
        document.write_header(version.major, version.minor, version.build)?;
        advance(phase, ExportPhase::HeaderWritten);

        if options.export_layers {
            report(progress, 10.0, "Writing Layers...")?;
            stats.layers = write_layers(model, document, &*textures)?;
        }
        advance(phase, ExportPhase::LayersWritten);

        if options.export_materials {
            report(progress, 20.0, "Writing Materials...")?;
            stats.materials = write_materials(model, document, &*textures, by_layer)?;
        }
        advance(phase, ExportPhase::MaterialsWritten);

        if options.export_component_definitions {
            report(progress, 40.0, "Writing Definitions...")?;
            stats += SceneWriter::new(model, &mut *document, options).write_component_definitions()?;
        }
        advance(phase, ExportPhase::DefinitionsWritten);

        if options.exports_geometry() {
            report(progress, 60.0, "Writing Geometry...")?;
            let root = model.root_entities()?;
            document.start_geometry()?;
            let mut writer = SceneWriter::new(model, &mut *document, options);
            let context = writer.root_context();
            stats += writer.write_entities(root, context)?;
            document.pop_parent_node()?;
        }
        advance(phase, ExportPhase::GeometryWritten);

        Ok(stats)
    }
}

fn report(progress: &mut dyn ExportProgress, percent: f32, label: &str) -> Result<()> {
    if progress.is_cancelled() {
        return Err(ExportError::Cancelled);
    }
    progress.on_progress(percent, label);
    Ok(())
}

fn advance(phase: &mut ExportPhase, next: ExportPhase) {
    log::debug!("{:?} -> {:?}", phase, next);
    *phase = next;
}

/// Close the document as cancelled and remove written textures, logging failures
fn discard<D: DocumentWriter, T: TextureWriter>(document: &mut D, textures: &mut T) {
    if let Err(e) = document.close(true) {
        log::warn!("Failed to discard output: {}", e);
    }
    if let Err(e) = textures.discard_textures() {
        log::warn!("Failed to remove textures: {}", e);
    }
}

/// Point a material's texture at the file written for it
fn link_texture<T: TextureWriter>(info: &mut MaterialInfo, textures: &T) {
    if let Some(texture) = info.texture.as_mut() {
        if let Some(name) = textures.output_name(&texture.path) {
            texture.path = name.to_string();
        }
    }
}

fn write_layers<D: DocumentWriter, T: TextureWriter>(
    model: &dyn ModelReader,
    document: &mut D,
    textures: &T,
) -> Result<usize> {
    let mut written = 0;
    document.start_layers()?;
    for layer in model.attributes().layers()? {
        if !model.is_valid(EntityRef::Layer(layer)) {
            log::trace!("Skipping invalid {}", layer);
            continue;
        }
        let mut info = layer_info(model, layer)?;
        if let Some(material) = info.material.as_mut() {
            link_texture(material, textures);
        }
        document.write_layer_info(&info)?;
        written += 1;
    }
    document.pop_parent_node()?;
    Ok(written)
}

/// Model materials, or the distinct layer materials in layer order
///
/// The section is only started when there is a material to write.
fn write_materials<D: DocumentWriter, T: TextureWriter>(
    model: &dyn ModelReader,
    document: &mut D,
    textures: &T,
    by_layer: bool,
) -> Result<usize> {
    let attributes = model.attributes();
    let materials: Vec<MaterialId> = if by_layer {
        let mut seen = FxHashSet::default();
        attributes
            .layers()?
            .into_iter()
            .filter(|layer| model.is_valid(EntityRef::Layer(*layer)))
            .filter_map(|layer| layer_material(model, layer))
            .filter(|material| seen.insert(*material))
            .collect()
    } else {
        attributes.materials()?
    };
    let materials: Vec<MaterialId> = materials
        .into_iter()
        .filter(|material| {
            let valid = model.is_valid(EntityRef::Material(*material));
            if !valid {
                log::trace!("Skipping invalid {}", material);
            }
            valid
        })
        .collect();
    if materials.is_empty() {
        return Ok(0);
    }

    document.start_materials()?;
    for &material in &materials {
        let mut info = material_info(model, material)?;
        link_texture(&mut info, textures);
        document.write_material_info(&info)?;
    }
    document.pop_parent_node()?;
    Ok(materials.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::recording::RecordingDocument;
    use scene_xml_model::{
        AttributeReader, EntitiesId, GeometryReader, LayerId, ModelVersion,
    };
    use scene_xml_reader::{SceneModel, SceneParser};
    use std::cell::Cell;

    const SCENARIO: &str = r#"{
        "version": { "major": 23, "minor": 1, "build": 340 },
        "layers": [
            { "name": "Layer0" },
            { "name": "Hidden", "visible": false }
        ],
        "materials": [
            { "name": "Red", "type": "colored", "color": { "r": 255, "g": 0, "b": 0, "a": 255 } },
            { "name": "Stone", "type": "textured",
              "texture": { "file": "stone.png", "width": 16, "height": 16, "data": "iVBORw==" } }
        ],
        "entities": {
            "groups": [
                { "entities": {
                    "faces": [ { "outer": [[0,0,0],[1,0,0],[1,1,0],[0,1,0]] } ],
                    "edges": [ { "start": [0,0,0], "end": [0,0,1] } ]
                } }
            ]
        }
    }"#;

    /// Records every progress call, cancelling once `cancel_at` calls were seen
    #[derive(Default)]
    struct Progress {
        calls: Vec<(f32, String)>,
        cancel_at: Option<usize>,
    }

    impl ExportProgress for Progress {
        fn on_progress(&mut self, percent: f32, label: &str) {
            self.calls.push((percent, label.to_string()));
        }

        fn is_cancelled(&self) -> bool {
            self.cancel_at.is_some_and(|at| self.calls.len() >= at)
        }
    }

    /// Counts how often the wrapped model is released
    struct Counted<'a> {
        inner: SceneModel,
        drops: &'a Cell<usize>,
    }

    impl Drop for Counted<'_> {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    impl ModelReader for Counted<'_> {
        fn version(&self) -> scene_xml_model::Result<ModelVersion> {
            self.inner.version()
        }

        fn root_entities(&self) -> scene_xml_model::Result<EntitiesId> {
            self.inner.root_entities()
        }

        fn default_layer(&self) -> Option<LayerId> {
            self.inner.default_layer()
        }

        fn is_valid(&self, entity: EntityRef) -> bool {
            self.inner.is_valid(entity)
        }

        fn attributes(&self) -> &dyn AttributeReader {
            self.inner.attributes()
        }

        fn geometry(&self) -> &dyn GeometryReader {
            self.inner.geometry()
        }
    }

    fn export(options: ExportOptions, json: &str, destination: &Path) -> (Result<ExportStats>, Progress) {
        let model = SceneModel::from_json(json).unwrap();
        let mut progress = Progress::default();
        let result = XmlExporter::new(options).export(
            model,
            XmlDocument::new(),
            TextureCollector::new(),
            destination,
            &mut progress,
        );
        (result, progress)
    }

    #[test]
    fn test_scenario_without_edges() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.xml");
        let options = ExportOptions::default().with_edges(false);

        let (result, progress) = export(options, SCENARIO, &path);
        let stats = result.unwrap();

        assert_eq!(stats.textures, 1);
        assert_eq!(stats.layers, 2);
        assert_eq!(stats.materials, 2);
        assert_eq!(stats.groups, 1);
        assert_eq!(stats.faces, 1);
        assert_eq!(stats.edges, 0);

        let xml = std::fs::read_to_string(&path).unwrap();
        assert!(xml.contains(r#"<Header major="23" minor="1" build="340"/>"#));
        assert!(xml.contains(r#"<Layer name="Layer0" visible="true"/>"#));
        assert!(xml.contains(r#"<Layer name="Hidden" visible="false"/>"#));
        assert!(xml.contains(r#"<Color r="255" g="0" b="0" a="255"/>"#));
        assert!(xml.contains(r#"<Texture path="stone.png" width="16" height="16""#));
        assert_eq!(xml.matches("<Face>").count(), 1);
        assert_eq!(xml.matches("<Vertex ").count(), 4);
        assert_eq!(xml.matches("<Edge").count(), 0);

        // The red material has a color and no texture, stone the reverse
        let red = &xml[xml.find(r#"<Material name="Red">"#).unwrap()..];
        let red = &red[..red.find("</Material>").unwrap()];
        assert!(!red.contains("<Texture"));
        let stone = &xml[xml.find(r#"<Material name="Stone">"#).unwrap()..];
        let stone = &stone[..stone.find("</Material>").unwrap()];
        assert!(!stone.contains("<Color"));

        let group = xml.find("<Group>").unwrap();
        let face = xml.find("<Face>").unwrap();
        assert!(group < face && face < xml.find("</Group>").unwrap());

        assert!(dir.path().join("scenario_textures").join("stone.png").exists());

        let labels: Vec<_> = progress.calls.iter().map(|(_, label)| label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Writing Texture Files...",
                "Writing Layers...",
                "Writing Materials...",
                "Writing Geometry...",
                "Export Complete",
            ]
        );
        assert_eq!(progress.calls.last().map(|(percent, _)| *percent), Some(100.0));
    }

    #[test]
    fn test_unopenable_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.xml");
        let drops = Cell::new(0);
        let model = Counted {
            inner: SceneModel::from_json(SCENARIO).unwrap(),
            drops: &drops,
        };
        let mut progress = Progress::default();

        let result = XmlExporter::default().export(
            model,
            XmlDocument::new(),
            TextureCollector::new(),
            &path,
            &mut progress,
        );

        assert!(matches!(
            result,
            Err(ExportError::DestinationUnavailable { .. })
        ));
        assert!(progress.calls.is_empty());
        assert_eq!(drops.get(), 1);
        assert!(!path.exists());
    }

    #[test]
    fn test_cancel_between_phases() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cancelled.xml");
        let model = SceneModel::from_json(SCENARIO).unwrap();
        let mut progress = Progress {
            cancel_at: Some(2),
            ..Default::default()
        };

        let result = XmlExporter::default().export(
            model,
            XmlDocument::new(),
            TextureCollector::new(),
            &path,
            &mut progress,
        );

        assert!(result.unwrap_err().is_cancelled());
        assert_eq!(progress.calls.len(), 2);
        assert!(!path.exists());
        assert!(!dir.path().join("cancelled_textures").exists());
    }

    #[test]
    fn test_cancel_after_textures_removes_them() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("early.xml");
        let model = SceneModel::from_json(SCENARIO).unwrap();
        // Textures are written before the layers report sees the flag
        let mut progress = Progress {
            cancel_at: Some(1),
            ..Default::default()
        };

        let result = XmlExporter::default().export(
            model,
            XmlDocument::new(),
            TextureCollector::new(),
            &path,
            &mut progress,
        );

        assert!(matches!(result, Err(ExportError::Cancelled)));
        assert_eq!(progress.calls.len(), 1);
        assert!(!path.exists());
        assert!(!dir.path().join("early_textures").exists());
    }

    #[test]
    fn test_cancel_at_close() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("late.xml");
        let options = ExportOptions::default().with_materials(false);
        let model = SceneModel::from_json(SCENARIO).unwrap();
        // Layers and geometry report; the flag is raised by the last of them
        let mut progress = Progress {
            cancel_at: Some(2),
            ..Default::default()
        };

        let result = XmlExporter::new(options).export(
            model,
            XmlDocument::new(),
            TextureCollector::new(),
            &path,
            &mut progress,
        );

        assert!(matches!(result, Err(ExportError::Cancelled)));
        assert!(!progress.calls.iter().any(|(_, label)| label == "Export Complete"));
        assert!(!path.exists());
    }

    #[test]
    fn test_model_failure_discards_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.xml");
        let json = r#"{ "materials": [ { "name": "Ghost", "type": "textured",
            "texture": { "file": "ghost.png", "width": 1, "height": 1 } } ] }"#;

        let (result, progress) = export(ExportOptions::default(), json, &path);

        assert!(matches!(result, Err(ExportError::Model(_))));
        assert_eq!(progress.calls.len(), 1);
        assert!(!path.exists());
        assert!(!dir.path().join("broken_textures").exists());
    }

    fn export_recorded(
        options: ExportOptions,
        document: RecordingDocument,
        destination: &Path,
        progress: &mut Progress,
    ) -> Result<ExportStats> {
        XmlExporter::new(options).export(
            SceneModel::from_json(SCENARIO).unwrap(),
            document,
            TextureCollector::new(),
            destination,
            progress,
        )
    }

    #[test]
    fn test_failed_close_discards_textures() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("full.xml");
        let document = RecordingDocument {
            fail_close: Some(false),
            ..Default::default()
        };
        let mut progress = Progress::default();

        let result = export_recorded(ExportOptions::default(), document, &path, &mut progress);

        assert!(matches!(result, Err(ExportError::Io(_))));
        assert!(!dir.path().join("full_textures").exists());
        assert!(!progress.calls.iter().any(|(_, label)| label == "Export Complete"));
    }

    #[test]
    fn test_cancel_survives_failed_discard() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stuck.xml");
        let document = RecordingDocument {
            fail_close: Some(true),
            ..Default::default()
        };
        let mut progress = Progress {
            cancel_at: Some(2),
            ..Default::default()
        };
        let options = ExportOptions::default().with_materials(false);

        let result = export_recorded(options, document, &path, &mut progress);

        assert!(matches!(result, Err(ExportError::Cancelled)));
    }

    #[test]
    fn test_skipped_phases_emit_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bare.xml");
        let options = ExportOptions::default()
            .with_layers(false)
            .with_materials(false)
            .with_faces(false)
            .with_edges(false);

        let (result, progress) = export(options, SCENARIO, &path);

        assert_eq!(result.unwrap(), ExportStats::default());
        assert_eq!(progress.calls.len(), 1);
        let xml = std::fs::read_to_string(&path).unwrap();
        assert!(xml.contains("<Header"));
        assert!(!xml.contains("<Layers"));
        assert!(!xml.contains("<Geometry"));
        assert!(!dir.path().join("bare_textures").exists());
    }

    #[test]
    fn test_materials_by_layer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("by_layer.xml");
        let json = r#"{
            "layers": [
                { "name": "Layer0" },
                { "name": "Walls", "material": "Brick" },
                { "name": "Fence", "material": "Brick" }
            ],
            "materials": [
                { "name": "Unused", "type": "colored", "color": { "r": 1, "g": 1, "b": 1 } },
                { "name": "Brick", "type": "colored", "color": { "r": 150, "g": 60, "b": 40 } }
            ],
            "entities": {
                "edges": [ { "layer": "Walls", "start": [0,0,0], "end": [1,0,0] } ]
            }
        }"#;
        let options = ExportOptions::default().with_materials_by_layer(true);

        let (result, _) = export(options, json, &path);

        assert_eq!(result.unwrap().materials, 1);
        let xml = std::fs::read_to_string(&path).unwrap();
        let materials = &xml[xml.find("<Materials>").unwrap()..xml.find("</Materials>").unwrap()];
        assert!(materials.contains(r#"<Material name="Brick">"#));
        assert!(!materials.contains("Unused"));

        let edge = &xml[xml.find(r#"<Edge layer="Walls">"#).unwrap()..];
        assert!(edge.contains(r#"<Color r="150" g="60" b="40" a="255"/>"#));
    }

    #[test]
    fn test_no_materials_section_without_materials() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.xml");
        let json = r#"{ "layers": [ { "name": "Layer0" } ],
            "entities": { "edges": [ { "start": [0,0,0], "end": [1,0,0] } ] } }"#;

        let (result, progress) = export(ExportOptions::default(), json, &path);

        assert_eq!(result.unwrap().materials, 0);
        assert!(progress.calls.iter().any(|(_, label)| label == "Writing Materials..."));
        let xml = std::fs::read_to_string(&path).unwrap();
        assert!(!xml.contains("<Materials"));
        assert!(xml.contains("<Layers>"));

        let path = dir.path().join("plain_by_layer.xml");
        let options = ExportOptions::default().with_materials_by_layer(true);
        let (result, _) = export(options, SCENARIO, &path);
        assert_eq!(result.unwrap().materials, 0);
        assert!(!std::fs::read_to_string(&path).unwrap().contains("<Materials"));
    }

    #[test]
    fn test_texture_paths_match_written_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bricks.xml");
        let json = r#"{
            "layers": [ { "name": "Layer0", "material": "Old Brick" } ],
            "materials": [
                { "name": "Red Brick", "type": "textured",
                  "texture": { "file": "a/brick.png", "width": 4, "height": 4, "data": "iVBORw==" } },
                { "name": "Old Brick", "type": "textured",
                  "texture": { "file": "b/brick.png", "width": 4, "height": 4, "data": "/9j/" } }
            ]
        }"#;

        let (result, _) = export(ExportOptions::default(), json, &path);

        assert_eq!(result.unwrap().textures, 2);
        let xml = std::fs::read_to_string(&path).unwrap();
        let red = &xml[xml.find(r#"<Material name="Red Brick">"#).unwrap()..];
        assert!(red[..red.find("</Material>").unwrap()].contains(r#"<Texture path="brick.png""#));
        let old = &xml[xml.find(r#"<Material name="Old Brick">"#).unwrap()..];
        assert!(old[..old.find("</Material>").unwrap()].contains(r#"<Texture path="brick_1.png""#));

        let textures = dir.path().join("bricks_textures");
        assert_eq!(std::fs::read(textures.join("brick.png")).unwrap(), vec![0x89, b'P', b'N', b'G']);
        assert_eq!(std::fs::read(textures.join("brick_1.png")).unwrap(), vec![0xFF, 0xD8, 0xFF]);
    }

    #[test]
    fn test_component_definitions_phase() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("components.xml");
        let json = r#"{
            "definitions": [
                { "name": "Stool", "entities": { "faces": [ { "outer": [[0,0,0],[1,0,0],[0,1,0]] } ] } }
            ],
            "entities": {
                "instances": [ { "definition": "Stool", "transform": [1,0,0,0, 0,1,0,0, 0,0,1,0, 3,0,0,1] } ]
            }
        }"#;
        let options = ExportOptions::default().with_component_definitions(true);

        let (result, progress) = export(options, json, &path);
        let stats = result.unwrap();

        assert_eq!(stats.definitions, 1);
        assert_eq!(stats.instances, 1);
        assert_eq!(stats.faces, 1);
        assert!(progress
            .calls
            .iter()
            .any(|(percent, label)| *percent == 40.0 && label == "Writing Definitions..."));

        let xml = std::fs::read_to_string(&path).unwrap();
        let definitions = xml.find(r#"<Definition name="Stool">"#).unwrap();
        let geometry = xml.find("<Geometry>").unwrap();
        assert!(definitions < geometry);
        assert!(xml.contains(r#"<ComponentInstance definition="Stool">"#));
        assert!(xml.contains("1 0 0 0 0 1 0 0 0 0 1 0 3 0 0 1"));
    }

    #[test]
    fn test_convert_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("house.json");
        let destination = dir.path().join("house.xml");
        std::fs::write(&source, SCENARIO).unwrap();

        let mut labels = Vec::new();
        let stats = XmlExporter::default()
            .convert(
                &SceneParser::new(),
                &source,
                &destination,
                &mut |_percent: f32, label: &str| labels.push(label.to_string()),
            )
            .unwrap();

        assert_eq!(stats.faces, 1);
        assert_eq!(stats.edges, 1);
        assert_eq!(labels.last().map(String::as_str), Some("Export Complete"));
        assert!(destination.exists());
        assert!(dir.path().join("house_textures").join("stone.png").exists());
    }
}
