//! Pages: top-level layer containers of a document

use crate::layer::{LayerContainer, NativeLayer};

/// One document page
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    id: String,
    pub name: String,
    layers: Vec<NativeLayer>,
}

impl Page {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            layers: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Remove every layer, leaving the page itself intact
    pub fn clear(&mut self) {
        self.layers.clear();
    }
}

impl LayerContainer for Page {
    fn layers(&self) -> &[NativeLayer] {
        &self.layers
    }

    fn attach(&mut self, layer: NativeLayer) {
        self.layers.push(layer);
    }
}
