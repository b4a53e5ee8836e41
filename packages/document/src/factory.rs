//! # Layer Construction
//!
//! The seam between portable nodes and native layers. A factory receives a
//! fully-specified, child-free node (identity already assigned, fixups
//! already applied) and either constructs the native object or reports a
//! construction failure. Failures here are recoverable: the materializer
//! records them and skips the subtree.

use crate::layer::NativeLayer;
use sketchport_portable::{NodeKind, PortableNode};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConstructError {
    #[error("layer class '{0}' cannot be constructed")]
    UnsupportedClass(String),

    #[error("invalid frame for '{name}': {width}x{height}")]
    InvalidFrame {
        name: String,
        width: f64,
        height: f64,
    },

    #[error("{class} layer '{name}' is missing required field '{field}'")]
    MissingField {
        class: String,
        field: &'static str,
        name: String,
    },
}

/// Constructs one native layer from one child-free node description
pub trait LayerFactory {
    fn construct(&self, node: &PortableNode) -> Result<NativeLayer, ConstructError>;
}

/// Default construction rules: class compatibility, sane geometry, and the
/// per-kind required fields the host refuses to live without.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFactory;

impl StandardFactory {
    fn require_field(node: &PortableNode, field: &'static str) -> Result<(), ConstructError> {
        if node.field(field).is_some() {
            return Ok(());
        }
        Err(ConstructError::MissingField {
            class: node.class.clone(),
            field,
            name: node.display_name().to_string(),
        })
    }

    fn require_symbol_id(node: &PortableNode) -> Result<(), ConstructError> {
        if node.symbol_id.is_some() {
            return Ok(());
        }
        Err(ConstructError::MissingField {
            class: node.class.clone(),
            field: "symbolID",
            name: node.display_name().to_string(),
        })
    }
}

impl LayerFactory for StandardFactory {
    fn construct(&self, node: &PortableNode) -> Result<NativeLayer, ConstructError> {
        debug_assert!(node.layers.is_empty(), "construction is child-free");

        match node.kind() {
            // Documents and pages are containers of the store, not layers
            NodeKind::Document | NodeKind::Page => {
                return Err(ConstructError::UnsupportedClass(node.class.clone()));
            }
            NodeKind::Text => {
                if node.field("attributedString").is_none() && node.field("text").is_none() {
                    return Err(ConstructError::MissingField {
                        class: node.class.clone(),
                        field: "attributedString",
                        name: node.display_name().to_string(),
                    });
                }
            }
            NodeKind::Bitmap => Self::require_field(node, "image")?,
            NodeKind::Svg => Self::require_field(node, "rawSVGString")?,
            NodeKind::SymbolMaster | NodeKind::SymbolInstance => Self::require_symbol_id(node)?,
            _ => {}
        }

        if node.class.is_empty() {
            return Err(ConstructError::UnsupportedClass(node.class.clone()));
        }

        let frame = node.frame;
        let valid_extent = |v: f64| v.is_finite() && v >= 0.0;
        if !frame.x.is_finite()
            || !frame.y.is_finite()
            || !valid_extent(frame.width)
            || !valid_extent(frame.height)
        {
            return Err(ConstructError::InvalidFrame {
                name: node.display_name().to_string(),
                width: frame.width,
                height: frame.height,
            });
        }

        let id = node.object_id.clone().ok_or(ConstructError::MissingField {
            class: node.class.clone(),
            field: "do_objectID",
            name: node.display_name().to_string(),
        })?;

        let mut layer = NativeLayer::new(id, node.class.clone(), node.display_name(), frame)
            .with_payload(node.rest.clone());
        layer.symbol_id = node.symbol_id.clone();
        Ok(layer)
    }
}
