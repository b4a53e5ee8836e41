//! # Import Session
//!
//! Owns the state that outlives individual import calls: the document
//! store and the symbol registry. The registry is created empty with the
//! session, grows monotonically, and is never torn down; it holds exactly
//! one definition per symbol identity for the session's lifetime.

use crate::import::{import_files, ImportOptions, ImportSummary};
use crate::materializer::{ImportFailures, Materializer};
use crate::symbols::SymbolRegistry;
use crate::error::ImportError;
use sketchport_document::{DocumentStore, HostContext, LayerContainer};
use sketchport_portable::{PortableFile, PortableNode};

pub struct ImportSession {
    store: DocumentStore,
    registry: SymbolRegistry,
    options: ImportOptions,
}

impl ImportSession {
    pub fn new(label: &str) -> Self {
        Self {
            store: DocumentStore::new(label),
            registry: SymbolRegistry::new(),
            options: ImportOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ImportOptions) -> Self {
        self.options = options;
        self
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut DocumentStore {
        &mut self.store
    }

    pub fn registry(&self) -> &SymbolRegistry {
        &self.registry
    }

    /// Run one import batch against the session's store
    pub fn import(
        &mut self,
        host: &dyn HostContext,
        files: &[PortableFile],
    ) -> Result<ImportSummary, ImportError> {
        import_files(&mut self.store, host, files, &self.options)
    }

    /// Register master definitions and inject the newly added ones onto
    /// the symbols page
    pub fn register_masters(&mut self, masters: &[PortableNode]) -> ImportFailures {
        let materializer = Materializer::standard();
        let mut failures = ImportFailures::new();
        self.registry
            .register_masters(masters, &mut self.store, &materializer, &mut failures);
        failures
    }

    /// Materialize a symbol instance onto the current page, registering
    /// its master first if needed. Returns the attached layer's identity.
    pub fn render_instance(
        &mut self,
        master: &PortableNode,
        instance: &PortableNode,
        failures: &mut ImportFailures,
    ) -> Option<String> {
        let materializer = Materializer::standard();
        let layer = self.registry.instance_layer(
            master,
            instance,
            &mut self.store,
            &materializer,
            failures,
        )?;
        let id = layer.id.clone();
        self.store.current_page_mut().attach(layer);
        Some(id)
    }

    /// Clear the symbols page and rebuild every registered master onto it
    pub fn rebuild_symbols(&mut self) -> ImportFailures {
        let materializer = Materializer::standard();
        let mut failures = ImportFailures::new();
        self.registry
            .inject(&mut self.store, None, &materializer, &mut failures);
        failures
    }
}
