//! # Portable Node Tree
//!
//! The host-independent, JSON-shaped design tree. Nodes carry a `_class`
//! type tag, a geometry frame, an ordered child list, and whatever
//! type-specific fields the producer emitted (fills, text content, image
//! refs, style references). Unknown fields are preserved verbatim so the
//! importer never has to understand every layer kind to round-trip one.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Geometry frame in document units. A node's frame is independent of its
/// children's frames.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

impl Frame {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (x + width)
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// Parsed view of a node's `_class` tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Page,
    Artboard,
    Group,
    Text,
    Svg,
    Bitmap,
    ShapeGroup,
    ShapePath,
    SymbolMaster,
    SymbolInstance,
    /// Any other host-compatible tag; passed through untouched
    Other,
}

/// One node of a portable document tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortableNode {
    #[serde(rename = "_class")]
    pub class: String,

    #[serde(rename = "do_objectID", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub frame: Frame,

    /// Ordered children; empty, never null
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub layers: Vec<PortableNode>,

    /// Symbol identity for symbolMaster / symbolInstance nodes
    #[serde(rename = "symbolID", skip_serializing_if = "Option::is_none")]
    pub symbol_id: Option<String>,

    /// Type-specific fields (fills, style, attributedString, image, ...)
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl PortableNode {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            object_id: None,
            name: None,
            frame: Frame::default(),
            layers: Vec::new(),
            symbol_id: None,
            rest: Map::new(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self.class.as_str() {
            "document" => NodeKind::Document,
            "page" => NodeKind::Page,
            "artboard" => NodeKind::Artboard,
            "group" => NodeKind::Group,
            "text" => NodeKind::Text,
            "svg" => NodeKind::Svg,
            "bitmap" => NodeKind::Bitmap,
            "shapeGroup" => NodeKind::ShapeGroup,
            "shapePath" => NodeKind::ShapePath,
            "symbolMaster" => NodeKind::SymbolMaster,
            "symbolInstance" => NodeKind::SymbolInstance,
            _ => NodeKind::Other,
        }
    }

    /// Human-readable name for diagnostics and failure reporting
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.class)
    }

    /// Look up a type-specific field
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.rest.get(name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.rest.get_mut(name)
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: Value) {
        self.rest.insert(name.into(), value);
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.frame = frame;
        self
    }

    pub fn with_child(mut self, child: PortableNode) -> Self {
        self.layers.push(child);
        self
    }

    pub fn with_symbol_id(mut self, symbol_id: impl Into<String>) -> Self {
        self.symbol_id = Some(symbol_id.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.rest.insert(name.into(), value);
        self
    }
}
