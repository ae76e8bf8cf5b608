// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for model queries

use crate::EntityRef;
use thiserror::Error;

/// Result type alias for model queries
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur while loading or querying a model
#[derive(Error, Debug)]
pub enum ModelError {
    /// Handle does not refer to a populated entity
    #[error("Invalid handle {0}")]
    InvalidHandle(EntityRef),

    /// Entity exists but does not carry the requested attribute
    #[error("{entity} has no {attribute}")]
    MissingAttribute {
        entity: EntityRef,
        attribute: &'static str,
    },

    /// Named reference could not be resolved while loading
    #[error("Unknown {kind} '{name}'")]
    UnknownReference { kind: &'static str, name: String },

    /// Source document is malformed
    #[error("Invalid scene document: {0}")]
    InvalidDocument(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl ModelError {
    /// Create a missing attribute error
    pub fn missing(entity: impl Into<EntityRef>, attribute: &'static str) -> Self {
        ModelError::MissingAttribute {
            entity: entity.into(),
            attribute,
        }
    }

    /// Create an unknown reference error
    pub fn unknown(kind: &'static str, name: impl Into<String>) -> Self {
        ModelError::UnknownReference {
            kind,
            name: name.into(),
        }
    }

    /// Create an invalid document error
    pub fn document(msg: impl Into<String>) -> Self {
        ModelError::InvalidDocument(msg.into())
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        ModelError::Other(msg.into())
    }
}
