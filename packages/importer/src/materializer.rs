//! # Layer Materializer
//!
//! Recursively converts a portable node tree into native layers. Failure
//! isolation is per subtree root: a node that cannot be constructed is
//! recorded by name and skipped together with all of its descendants (a
//! malformed parent cannot safely host children), while siblings and the
//! rest of the import continue. The returned tree never contains holes.

use crate::fixups::{NodePreprocessor, StandardFixups};
use sketchport_document::{DocumentStore, LayerFactory, NativeLayer, StandardFactory};
use sketchport_portable::PortableNode;
use tracing::warn;

/// Names of nodes whose construction failed, in first-encountered
/// (pre-order) order. Scoped to one import call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportFailures {
    names: Vec<String>,
}

impl ImportFailures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// Converts portable nodes into detached native layers
pub struct Materializer<'a> {
    factory: &'a dyn LayerFactory,
    fixups: &'a dyn NodePreprocessor,
}

impl<'a> Materializer<'a> {
    pub fn new(factory: &'a dyn LayerFactory, fixups: &'a dyn NodePreprocessor) -> Self {
        Self { factory, fixups }
    }

    /// Default construction rules and fixups
    pub fn standard() -> Materializer<'static> {
        Materializer::new(&StandardFactory, &StandardFixups)
    }

    /// Materialize one node and its subtree. Returns `None` when the node
    /// itself fails construction; its name lands in `failures` and its
    /// descendants are never attempted.
    pub fn materialize(
        &self,
        store: &mut DocumentStore,
        node: &PortableNode,
        failures: &mut ImportFailures,
    ) -> Option<NativeLayer> {
        // Work on a structural copy so the caller's tree is never mutated
        let mut node = node.clone();
        self.fixups.apply(&mut node);

        // Detach children and construct this node alone; that is what lets
        // a failing node take down only its own subtree
        let children = std::mem::take(&mut node.layers);
        node.object_id = Some(store.new_layer_id());

        let mut native = match self.factory.construct(&node) {
            Ok(native) => native,
            Err(error) => {
                let name = node.display_name().to_string();
                warn!(layer = %name, %error, "layer failed to import, skipping subtree");
                failures.record(name);
                return None;
            }
        };

        for child in &children {
            if let Some(native_child) = self.materialize(store, child, failures) {
                native.append_child(native_child);
            }
        }

        Some(native)
    }
}
