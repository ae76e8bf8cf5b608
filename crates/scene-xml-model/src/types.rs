// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for scene graph representation
//!
//! This module defines the handle and value types shared by model readers and
//! exporters. Handles are plain indices into a model's storage; whether a
//! handle refers to a populated entity is answered by
//! [`ModelReader::is_valid`](crate::ModelReader::is_valid).

use nalgebra::{Matrix4, Point3};
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident, $variant:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                $name(id)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl From<$name> for EntityRef {
            fn from(id: $name) -> Self {
                EntityRef::$variant(id)
            }
        }

        impl $name {
            /// Position of the entity in its owning storage
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

define_handle!(
    /// Handle to a layer
    LayerId,
    Layer,
    "layer"
);
define_handle!(
    /// Handle to a material
    MaterialId,
    Material,
    "material"
);
define_handle!(
    /// Handle to a texture owned by a material
    TextureId,
    Texture,
    "texture"
);
define_handle!(
    /// Handle to a component definition
    DefinitionId,
    Definition,
    "definition"
);
define_handle!(
    /// Handle to an entities collection (model root, group or definition body)
    EntitiesId,
    Entities,
    "entities"
);
define_handle!(
    /// Handle to a component instance
    InstanceId,
    Instance,
    "instance"
);
define_handle!(
    /// Handle to a group
    GroupId,
    Group,
    "group"
);
define_handle!(
    /// Handle to a face
    FaceId,
    Face,
    "face"
);
define_handle!(
    /// Handle to a face loop
    LoopId,
    Loop,
    "loop"
);
define_handle!(
    /// Handle to a vertex
    VertexId,
    Vertex,
    "vertex"
);
define_handle!(
    /// Handle to an edge
    EdgeId,
    Edge,
    "edge"
);
define_handle!(
    /// Handle to a curve
    CurveId,
    Curve,
    "curve"
);

/// Tagged reference to any entity a model can hand out
///
/// Used for validity checks and error reporting.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum EntityRef {
    Layer(LayerId),
    Material(MaterialId),
    Texture(TextureId),
    Definition(DefinitionId),
    Entities(EntitiesId),
    Instance(InstanceId),
    Group(GroupId),
    Face(FaceId),
    Loop(LoopId),
    Vertex(VertexId),
    Edge(EdgeId),
    Curve(CurveId),
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityRef::Layer(id) => id.fmt(f),
            EntityRef::Material(id) => id.fmt(f),
            EntityRef::Texture(id) => id.fmt(f),
            EntityRef::Definition(id) => id.fmt(f),
            EntityRef::Entities(id) => id.fmt(f),
            EntityRef::Instance(id) => id.fmt(f),
            EntityRef::Group(id) => id.fmt(f),
            EntityRef::Face(id) => id.fmt(f),
            EntityRef::Loop(id) => id.fmt(f),
            EntityRef::Vertex(id) => id.fmt(f),
            EntityRef::Edge(id) => id.fmt(f),
            EntityRef::Curve(id) => id.fmt(f),
        }
    }
}

/// An entity that can carry its own layer and material
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum DrawingElement {
    Instance(InstanceId),
    Group(GroupId),
    Face(FaceId),
    Edge(EdgeId),
}

impl From<DrawingElement> for EntityRef {
    fn from(element: DrawingElement) -> Self {
        match element {
            DrawingElement::Instance(id) => EntityRef::Instance(id),
            DrawingElement::Group(id) => EntityRef::Group(id),
            DrawingElement::Face(id) => EntityRef::Face(id),
            DrawingElement::Edge(id) => EntityRef::Edge(id),
        }
    }
}

impl fmt::Display for DrawingElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        EntityRef::from(*self).fmt(f)
    }
}

/// Version of the application that saved the model
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct ModelVersion {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
}

impl fmt::Display for ModelVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.build)
    }
}

/// 8-bit RGBA color
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Color {
    /// Default edge color when nothing in the hierarchy sets one
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Create an opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with explicit alpha
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// How a material is rendered
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialType {
    /// Plain color
    #[default]
    Colored,
    /// Texture image only
    Textured,
    /// Texture image tinted by the material color
    ColorizedTexture,
}

impl MaterialType {
    /// Whether the material's color is meaningful
    pub fn has_color(self) -> bool {
        matches!(self, MaterialType::Colored | MaterialType::ColorizedTexture)
    }

    /// Whether the material's texture is meaningful
    pub fn has_texture(self) -> bool {
        matches!(self, MaterialType::Textured | MaterialType::ColorizedTexture)
    }
}

/// Texture image size and scaling
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct TextureDimensions {
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
    /// Horizontal scale (texture repeats per model unit)
    pub s_scale: f64,
    /// Vertical scale (texture repeats per model unit)
    pub t_scale: f64,
}

/// 4x4 affine transformation
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Transform(pub Matrix4<f64>);

impl Transform {
    /// Identity transformation
    pub fn identity() -> Self {
        Transform(Matrix4::identity())
    }

    /// Build from 16 values in column-major order
    pub fn from_column_major(values: [f64; 16]) -> Self {
        Transform(Matrix4::from_column_slice(&values))
    }

    /// Translation-only transformation
    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        Transform(Matrix4::new_translation(&nalgebra::Vector3::new(x, y, z)))
    }

    /// The 16 matrix values in column-major order
    pub fn to_column_major(&self) -> [f64; 16] {
        let mut values = [0.0; 16];
        values.copy_from_slice(self.0.as_slice());
        values
    }

    /// Apply the transformation to a point
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        self.0.transform_point(point)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform::identity()
    }
}
