// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for XML export

use scene_xml_model::ModelError;
use std::path::PathBuf;
use thiserror::Error;

/// Export result type
pub type Result<T> = std::result::Result<T, ExportError>;

/// Export errors
#[derive(Error, Debug)]
pub enum ExportError {
    /// A required model query failed
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// Output file could not be created
    #[error("Cannot open {}: {source}", path.display())]
    DestinationUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Document used before `open` or after `close`
    #[error("Document is not open")]
    DocumentNotOpen,

    /// `pop_parent_node` without a matching `start_*`
    #[error("No open parent node to pop")]
    UnbalancedNode,

    /// Texture extraction failed
    #[error("Texture error: {0}")]
    Texture(String),

    /// Invalid export options
    #[error("Invalid options: {0}")]
    Options(String),

    /// Export cancelled through the progress callback
    #[error("Export cancelled")]
    Cancelled,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// Create a destination error
    pub fn destination(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::DestinationUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create a texture error
    pub fn texture(msg: impl Into<String>) -> Self {
        ExportError::Texture(msg.into())
    }

    /// Create an options error
    pub fn options(msg: impl Into<String>) -> Self {
        ExportError::Options(msg.into())
    }

    /// Whether the export stopped because it was cancelled
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ExportError::Cancelled)
    }
}
