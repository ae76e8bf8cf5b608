// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Attribute inheritance
//!
//! Drawing elements that leave their layer or material unset take them from
//! the nearest ancestor that sets one. Elements placed on the model's default
//! layer count as unset.
//!
//! Traversal threads an [`InheritanceContext`] through recursive calls by
//! value. [`InheritanceTracker`] wraps the same rules in a push/pop stack for
//! callers that walk the graph themselves.

use crate::extract::layer_material;
use crate::Result;
use scene_xml_model::{Color, DrawingElement, EntityRef, LayerId, MaterialId, ModelReader};

/// Effective layer and edge color at one point of the traversal
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InheritanceContext {
    /// Effective layer, `None` when the model has no default layer
    pub layer: Option<LayerId>,
    /// Effective edge color
    pub edge_color: Color,
}

impl InheritanceContext {
    /// Context at the top of the scene graph
    ///
    /// The layer is the model's default layer. The edge color is black, or the
    /// color of the default layer's material when materials follow layers.
    pub fn root(model: &dyn ModelReader, by_layer: bool) -> Self {
        let layer = model
            .default_layer()
            .filter(|layer| model.is_valid(EntityRef::Layer(*layer)));

        let edge_color = if by_layer {
            layer
                .and_then(|layer| layer_material(model, layer))
                .and_then(|material| material_color(model, material))
                .unwrap_or(Color::BLACK)
        } else {
            Color::BLACK
        };

        Self { layer, edge_color }
    }

    /// Context seen by `element` and its children
    ///
    /// The caller guarantees `element` is valid.
    pub fn enter(
        &self,
        model: &dyn ModelReader,
        element: DrawingElement,
        by_layer: bool,
    ) -> Result<Self> {
        let geometry = model.geometry();
        let own_layer = geometry
            .element_layer(element)?
            .filter(|layer| Some(*layer) != model.default_layer())
            .filter(|layer| model.is_valid(EntityRef::Layer(*layer)));

        let own_color = if by_layer {
            own_layer
                .and_then(|layer| layer_material(model, layer))
                .and_then(|material| material_color(model, material))
        } else {
            geometry
                .element_material(element)?
                .filter(|material| model.is_valid(EntityRef::Material(*material)))
                .and_then(|material| material_color(model, material))
        };

        Ok(Self {
            layer: own_layer.or(self.layer),
            edge_color: own_color.unwrap_or(self.edge_color),
        })
    }
}

fn material_color(model: &dyn ModelReader, material: MaterialId) -> Option<Color> {
    match model.attributes().material_color(material) {
        Ok(color) => Some(color),
        Err(e) => {
            log::debug!("No edge color from {}: {}", material, e);
            None
        }
    }
}

/// Stack of inheritance contexts
///
/// Pushing an element derives its context from the current top (or from the
/// root context when the stack is empty). Popping restores the previous top.
pub struct InheritanceTracker<'a> {
    model: &'a dyn ModelReader,
    by_layer: bool,
    stack: Vec<InheritanceContext>,
}

impl<'a> InheritanceTracker<'a> {
    /// Create a tracker holding the root context
    pub fn new(model: &'a dyn ModelReader, by_layer: bool) -> Self {
        Self {
            model,
            by_layer,
            stack: vec![InheritanceContext::root(model, by_layer)],
        }
    }

    /// Push the effective context of `element`
    pub fn push_element(&mut self, element: DrawingElement) -> Result<()> {
        let parent = match self.stack.last() {
            Some(context) => *context,
            None => InheritanceContext::root(self.model, self.by_layer),
        };
        let context = parent.enter(self.model, element, self.by_layer)?;
        self.stack.push(context);
        Ok(())
    }

    /// Remove the top context
    pub fn pop_element(&mut self) -> Option<InheritanceContext> {
        self.stack.pop()
    }

    /// Top context, `None` once every context was popped
    pub fn current(&self) -> Option<InheritanceContext> {
        self.stack.last().copied()
    }

    /// Effective layer of the top context
    ///
    /// `None` when the stack is empty or the effective layer is unset.
    pub fn current_layer(&self) -> Option<LayerId> {
        self.stack.last().and_then(|context| context.layer)
    }

    /// Effective edge color of the top context, `None` on an empty stack
    pub fn current_edge_color(&self) -> Option<Color> {
        self.stack.last().map(|context| context.edge_color)
    }

    /// Number of contexts on the stack, counting the root context
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scene_xml_model::{GroupId, ModelReaderExt};
    use scene_xml_reader::SceneModel;

    const NESTED: &str = r#"{
        "layers": [
            { "name": "Layer0", "material": "Grey" },
            { "name": "Walls", "material": "Brick" },
            { "name": "Doors" }
        ],
        "materials": [
            { "name": "Grey", "type": "colored", "color": { "r": 90, "g": 90, "b": 90 } },
            { "name": "Brick", "type": "colored", "color": { "r": 200, "g": 80, "b": 40 } },
            { "name": "Blue", "type": "colored", "color": { "r": 0, "g": 0, "b": 255 } }
        ],
        "entities": {
            "groups": [
                { "layer": "Walls", "material": "Blue",
                  "entities": { "groups": [
                      { "layer": "Layer0",
                        "entities": { "edges": [ { "start": [0,0,0], "end": [1,0,0] } ] } },
                      { "layer": "Doors", "material": "Brick" }
                  ] } }
            ]
        }
    }"#;

    fn model() -> SceneModel {
        SceneModel::from_json(NESTED).unwrap()
    }

    // Nested groups are stored before their parent
    const OUTER: u32 = 2;
    const PLAIN: u32 = 0;
    const DOORS: u32 = 1;

    fn group(model: &SceneModel, index: u32) -> DrawingElement {
        DrawingElement::Group(model.require(GroupId(index)).unwrap())
    }

    #[test]
    fn test_root_context() {
        let model = model();

        let root = InheritanceContext::root(&model, false);
        assert_eq!(root.layer, Some(LayerId(0)));
        assert_eq!(root.edge_color, Color::BLACK);

        let by_layer = InheritanceContext::root(&model, true);
        assert_eq!(by_layer.edge_color, Color::rgb(90, 90, 90));
    }

    #[test]
    fn test_default_layer_inherits() {
        let model = model();
        let root = InheritanceContext::root(&model, false);

        let outer = root.enter(&model, group(&model, OUTER), false).unwrap();
        assert_eq!(outer.layer, Some(LayerId(1)));
        assert_eq!(outer.edge_color, Color::rgb(0, 0, 255));

        // Inner group sits on Layer0 and has no material
        let inner = outer.enter(&model, group(&model, PLAIN), false).unwrap();
        assert_eq!(inner, outer);
    }

    #[test]
    fn test_color_follows_layer_material() {
        let model = model();
        let root = InheritanceContext::root(&model, true);

        let outer = root.enter(&model, group(&model, OUTER), true).unwrap();
        assert_eq!(outer.edge_color, Color::rgb(200, 80, 40));

        // Doors has no material, so the Brick color is inherited even though
        // the group carries its own material
        let doors = outer.enter(&model, group(&model, DOORS), true).unwrap();
        assert_eq!(doors.layer, Some(LayerId(2)));
        assert_eq!(doors.edge_color, Color::rgb(200, 80, 40));
    }

    #[test]
    fn test_tracker_balanced_push_pop() {
        let model = model();
        let mut tracker = InheritanceTracker::new(&model, false);
        let before = tracker.current();

        tracker.push_element(group(&model, OUTER)).unwrap();
        tracker.push_element(group(&model, DOORS)).unwrap();
        assert_eq!(tracker.current_layer(), Some(LayerId(2)));
        assert_eq!(tracker.current_edge_color(), Some(Color::rgb(200, 80, 40)));
        assert_eq!(tracker.depth(), 3);

        tracker.pop_element();
        assert_eq!(tracker.current_layer(), Some(LayerId(1)));
        tracker.pop_element();
        assert_eq!(tracker.current(), before);
    }

    #[test]
    fn test_tracker_empty_stack() {
        let model = model();
        let mut tracker = InheritanceTracker::new(&model, false);

        assert!(tracker.pop_element().is_some());
        assert_eq!(tracker.current_layer(), None);
        assert_eq!(tracker.current_edge_color(), None);
        assert_eq!(tracker.current(), None);
        assert_eq!(tracker.depth(), 0);
        assert!(tracker.pop_element().is_none());

        // Pushing onto an empty stack starts from the root context
        tracker.push_element(group(&model, OUTER)).unwrap();
        assert_eq!(tracker.current_layer(), Some(LayerId(1)));
    }

    #[test]
    fn test_invalid_element_is_an_error() {
        let model = model();
        let root = InheritanceContext::root(&model, false);
        assert!(!model.is_valid_handle(GroupId(42)));
        assert!(root
            .enter(&model, DrawingElement::Group(GroupId(42)), false)
            .is_err());
    }
}
