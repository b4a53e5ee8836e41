//! # Native Layers
//!
//! The host's live, mutable layer objects. A native layer is exclusively
//! owned by its parent container once attached; detached layers are owned
//! by whoever constructed them until attachment or discard. Layer identity
//! is always host-generated, never carried over from a portable source.

use serde_json::{Map, Value};
use sketchport_portable::{Frame, PortableNode};

/// One materialized design layer
#[derive(Debug, Clone, PartialEq)]
pub struct NativeLayer {
    pub id: String,
    pub class: String,
    pub name: String,
    pub frame: Frame,
    pub symbol_id: Option<String>,
    children: Vec<NativeLayer>,
    payload: Map<String, Value>,
}

impl NativeLayer {
    pub fn new(
        id: impl Into<String>,
        class: impl Into<String>,
        name: impl Into<String>,
        frame: Frame,
    ) -> Self {
        Self {
            id: id.into(),
            class: class.into(),
            name: name.into(),
            frame,
            symbol_id: None,
            children: Vec::new(),
            payload: Map::new(),
        }
    }

    pub fn with_payload(mut self, payload: Map<String, Value>) -> Self {
        self.payload = payload;
        self
    }

    pub fn children(&self) -> &[NativeLayer] {
        &self.children
    }

    pub fn append_child(&mut self, child: NativeLayer) {
        self.children.push(child);
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Type-specific fields retained from construction
    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    /// Count of layers in this subtree, this layer included
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(NativeLayer::subtree_len)
            .sum::<usize>()
    }

    /// Read this layer back as a portable node. Used to reconcile registry
    /// state with pages that were edited outside the importer.
    pub fn to_portable(&self) -> PortableNode {
        let mut node = PortableNode::new(self.class.clone());
        node.object_id = Some(self.id.clone());
        node.name = Some(self.name.clone());
        node.frame = self.frame;
        node.symbol_id = self.symbol_id.clone();
        node.rest = self.payload.clone();
        node.layers = self.children.iter().map(NativeLayer::to_portable).collect();
        node
    }
}

/// Anything that can hold an ordered run of layers. Pages and group-like
/// layers both qualify; the importer attaches through this seam.
pub trait LayerContainer {
    fn layers(&self) -> &[NativeLayer];

    fn attach(&mut self, layer: NativeLayer);
}

impl LayerContainer for NativeLayer {
    fn layers(&self) -> &[NativeLayer] {
        &self.children
    }

    fn attach(&mut self, layer: NativeLayer) {
        self.children.push(layer);
    }
}
