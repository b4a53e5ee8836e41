//! # Portable Files
//!
//! A portable import batch is a set of JSON files. A document-level file
//! carries shared assets (colors, text styles, layer styles); a page-level
//! file carries the top-level layers to import into the current page. A
//! batch holds at most one of each kind; when duplicates occur the
//! last-seen file of a kind wins.

use crate::error::PortableError;
use crate::node::PortableNode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Shared color pool section of a document-level file. Entries stay raw
/// JSON; validation happens when they are merged into a host document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssetPool {
    #[serde(default)]
    pub colors: Vec<Value>,
}

/// One named shared style definition. Text styles carry the style payload
/// under `value`, layer styles under `style`; both map onto `value` here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedStyleDef {
    pub name: String,

    #[serde(alias = "style")]
    pub value: Value,

    #[serde(rename = "do_objectID", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
}

/// Ordered collection of shared style definitions
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StyleSheet {
    #[serde(default)]
    pub objects: Vec<SharedStyleDef>,
}

/// Classification of a portable file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Carries shared assets and styles
    Document,
    /// Carries layers for the current page
    Page,
    /// Unrecognized; skipped by the orchestrator
    Other,
}

/// One parsed portable JSON file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortableFile {
    #[serde(rename = "_class")]
    pub class: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub assets: AssetPool,

    #[serde(rename = "layerTextStyles", default)]
    pub layer_text_styles: StyleSheet,

    #[serde(rename = "layerStyles", default)]
    pub layer_styles: StyleSheet,

    #[serde(default)]
    pub layers: Vec<PortableNode>,
}

impl PortableFile {
    pub fn kind(&self) -> FileKind {
        match self.class.as_str() {
            "document" => FileKind::Document,
            "page" => FileKind::Page,
            _ => FileKind::Other,
        }
    }

    pub fn from_str(source: &str) -> Result<Self, PortableError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, PortableError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_str(&source)
    }
}

/// Partition a batch into at most one document-level and at most one
/// page-level file. Last-seen wins per kind.
pub fn partition_files(files: &[PortableFile]) -> (Option<&PortableFile>, Option<&PortableFile>) {
    let mut document = None;
    let mut page = None;

    for file in files {
        match file.kind() {
            FileKind::Document => document = Some(file),
            FileKind::Page => page = Some(file),
            FileKind::Other => {}
        }
    }

    (document, page)
}
