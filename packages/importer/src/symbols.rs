//! # Symbol Registry & Injection
//!
//! Process-wide store of symbol master definitions, keyed by symbol
//! identity. The registry lives for the whole host session: created empty
//! once, grown by imports, never torn down. Each identity maps to exactly
//! one definition; the first registration wins.
//!
//! Injection materializes registered masters onto the reserved symbols
//! page. Packing is recomputed over the *entire* registry every time so
//! that re-imports keep existing master positions consistent as new
//! masters are appended. Injection with an explicit identity list is
//! additive; injection without one clears the page and rebuilds everything.

use crate::materializer::{ImportFailures, Materializer};
use indexmap::IndexMap;
use sketchport_document::{DocumentStore, LayerContainer, NativeLayer};
use sketchport_portable::{NodeKind, PortableNode};
use tracing::{debug, instrument};

/// Horizontal gap between packed masters on the symbols page
pub const SYMBOL_GUTTER: f64 = 20.0;

#[derive(Debug, Clone, Default)]
pub struct SymbolRegistry {
    masters: IndexMap<String, PortableNode>,
}

impl SymbolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.masters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masters.is_empty()
    }

    pub fn contains(&self, symbol_id: &str) -> bool {
        self.masters.contains_key(symbol_id)
    }

    pub fn master(&self, symbol_id: &str) -> Option<&PortableNode> {
        self.masters.get(symbol_id)
    }

    /// Registered identities in registration order
    pub fn identities(&self) -> impl Iterator<Item = &str> {
        self.masters.keys().map(String::as_str)
    }

    /// Add a master definition. Re-registering a known identity is a
    /// no-op. Returns true when the identity is newly added.
    pub fn register(&mut self, master: &PortableNode) -> bool {
        let Some(symbol_id) = master.symbol_id.clone() else {
            debug!(name = master.display_name(), "master without symbol identity ignored");
            return false;
        };
        if self.masters.contains_key(&symbol_id) {
            debug!(%symbol_id, "symbol already registered");
            return false;
        }
        self.masters.insert(symbol_id, master.clone());
        true
    }

    /// Register a batch of masters, then inject exactly the newly added
    /// identities onto the symbols page.
    #[instrument(skip_all, fields(masters = masters.len()))]
    pub fn register_masters(
        &mut self,
        masters: &[PortableNode],
        store: &mut DocumentStore,
        materializer: &Materializer,
        failures: &mut ImportFailures,
    ) {
        let mut new_ids = Vec::new();
        for master in masters {
            if self.register(master) {
                new_ids.push(
                    master
                        .symbol_id
                        .clone()
                        .expect("registered masters have identity"),
                );
            }
        }
        self.inject(store, Some(&new_ids), materializer, failures);
    }

    /// Materialize an instance after making sure its master is registered
    /// and present on the symbols page; the caller owns attachment.
    pub fn instance_layer(
        &mut self,
        master: &PortableNode,
        instance: &PortableNode,
        store: &mut DocumentStore,
        materializer: &Materializer,
        failures: &mut ImportFailures,
    ) -> Option<NativeLayer> {
        if self.register(master) {
            let symbol_id = master
                .symbol_id
                .clone()
                .expect("registered master has identity");
            self.inject(store, Some(&[symbol_id]), materializer, failures);
        }
        materializer.materialize(store, instance, failures)
    }

    /// Materialize an instance and attach it to `container`. The instance
    /// is attached whether or not its master was already registered.
    pub fn render_instance(
        &mut self,
        master: &PortableNode,
        instance: &PortableNode,
        container: &mut dyn LayerContainer,
        store: &mut DocumentStore,
        materializer: &Materializer,
        failures: &mut ImportFailures,
    ) -> Option<String> {
        let layer = self.instance_layer(master, instance, store, materializer, failures)?;
        let id = layer.id.clone();
        container.attach(layer);
        Some(id)
    }

    /// Materialize registered masters onto the symbols page.
    ///
    /// With `identities`, only those masters are placed and the page keeps
    /// its existing children. Without, the page is cleared and every
    /// registered master is rebuilt onto it.
    #[instrument(skip_all, fields(registered = self.masters.len(), additive = identities.is_some()))]
    pub fn inject(
        &mut self,
        store: &mut DocumentStore,
        identities: Option<&[String]>,
        materializer: &Materializer,
        failures: &mut ImportFailures,
    ) {
        self.sync_from_page(store);
        self.pack_frames();

        match identities {
            Some(identities) => {
                for symbol_id in identities {
                    let Some(master) = self.masters.get(symbol_id).cloned() else {
                        continue;
                    };
                    if let Some(layer) = materializer.materialize(store, &master, failures) {
                        store.symbols_page_mut().attach(layer);
                    }
                }
            }
            None => {
                let masters: Vec<PortableNode> = self.masters.values().cloned().collect();
                store.symbols_page_mut().clear();
                for master in &masters {
                    if let Some(layer) = materializer.materialize(store, master, failures) {
                        store.symbols_page_mut().attach(layer);
                    }
                }
            }
        }
    }

    /// Fold the symbols page's current content back into the registry so
    /// that masters placed there outside the importer survive re-imports.
    fn sync_from_page(&mut self, store: &mut DocumentStore) {
        let nodes: Vec<PortableNode> = store
            .symbols_page_mut()
            .layers()
            .iter()
            .map(NativeLayer::to_portable)
            .collect();

        for node in nodes {
            if node.kind() != NodeKind::SymbolMaster {
                continue;
            }
            let Some(symbol_id) = node.symbol_id.clone() else {
                continue;
            };
            self.masters.entry(symbol_id).or_insert(node);
        }
    }

    /// Recompute left-to-right packing for every registered master,
    /// top-left anchored at the origin.
    fn pack_frames(&mut self) {
        let mut left = 0.0;
        for master in self.masters.values_mut() {
            master.frame.y = 0.0;
            master.frame.x = left;
            left += master.frame.width + SYMBOL_GUTTER;
        }
    }
}
