//! # Document Store
//!
//! The live, stateful host document: an ordered set of pages (one of which
//! may be the reserved symbols page), document-level shared pools, and the
//! session's layer-identity generator. One store lives for one host
//! session; every import call mutates it in place.

use crate::assets::{SharedColor, SharedStyleEntry};
use crate::id::IdGenerator;
use crate::page::Page;

/// Name given to the reserved symbols page when it is first created
pub const SYMBOLS_PAGE_NAME: &str = "Symbols";

#[derive(Debug, Clone)]
pub struct DocumentStore {
    pages: Vec<Page>,
    current_page: String,
    symbols_page: Option<String>,
    colors: Vec<SharedColor>,
    text_styles: Vec<SharedStyleEntry>,
    layer_styles: Vec<SharedStyleEntry>,
    ids: IdGenerator,
}

impl DocumentStore {
    /// Create a store with one empty page. `label` seeds layer identities.
    pub fn new(label: &str) -> Self {
        let mut ids = IdGenerator::new(label);
        let first = Page::new(ids.new_id(), "Page 1");
        let current_page = first.id().to_string();

        Self {
            pages: vec![first],
            current_page,
            symbols_page: None,
            colors: Vec::new(),
            text_styles: Vec::new(),
            layer_styles: Vec::new(),
            ids,
        }
    }

    /// Generate a fresh, session-unique layer identity
    pub fn new_layer_id(&mut self) -> String {
        self.ids.new_id()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|page| page.id() == id)
    }

    pub fn page_mut(&mut self, id: &str) -> Option<&mut Page> {
        self.pages.iter_mut().find(|page| page.id() == id)
    }

    pub fn add_page(&mut self, name: &str) -> String {
        let id = self.ids.new_id();
        self.pages.push(Page::new(id.clone(), name));
        id
    }

    /// Remove a page by id. Refuses to remove the last remaining page or
    /// the reserved symbols page. The current-page cursor falls back to the
    /// first remaining page when its page goes away.
    pub fn remove_page(&mut self, id: &str) -> bool {
        if self.pages.len() <= 1 || self.is_symbols_page(id) {
            return false;
        }
        let Some(index) = self.pages.iter().position(|page| page.id() == id) else {
            return false;
        };

        self.pages.remove(index);
        if self.current_page == id {
            self.current_page = self.pages[0].id().to_string();
        }
        true
    }

    pub fn current_page(&self) -> &Page {
        self.page(&self.current_page)
            .expect("current page always exists")
    }

    pub fn current_page_mut(&mut self) -> &mut Page {
        let id = self.current_page.clone();
        self.page_mut(&id).expect("current page always exists")
    }

    pub fn set_current_page(&mut self, id: &str) -> bool {
        if self.page(id).is_some() {
            self.current_page = id.to_string();
            return true;
        }
        false
    }

    pub fn is_symbols_page(&self, id: &str) -> bool {
        self.symbols_page.as_deref() == Some(id)
    }

    pub fn symbols_page(&self) -> Option<&Page> {
        self.symbols_page.as_deref().and_then(|id| self.page(id))
    }

    /// The reserved symbols page, created on first use
    pub fn symbols_page_mut(&mut self) -> &mut Page {
        if self.symbols_page.is_none() {
            let id = self.add_page(SYMBOLS_PAGE_NAME);
            self.symbols_page = Some(id);
        }
        let id = self.symbols_page.clone().expect("just created");
        self.page_mut(&id).expect("symbols page always exists")
    }

    pub fn non_symbols_page_count(&self) -> usize {
        self.pages
            .iter()
            .filter(|page| !self.is_symbols_page(page.id()))
            .count()
    }

    // Shared pools. Each is a replaceable, appendable collection.

    pub fn colors(&self) -> &[SharedColor] {
        &self.colors
    }

    pub fn add_color(&mut self, color: SharedColor) {
        self.colors.push(color);
    }

    pub fn clear_colors(&mut self) {
        self.colors.clear();
    }

    pub fn text_styles(&self) -> &[SharedStyleEntry] {
        &self.text_styles
    }

    pub fn add_text_style(&mut self, style: SharedStyleEntry) {
        self.text_styles.push(style);
    }

    pub fn set_text_styles(&mut self, styles: Vec<SharedStyleEntry>) {
        self.text_styles = styles;
    }

    pub fn layer_styles(&self) -> &[SharedStyleEntry] {
        &self.layer_styles
    }

    pub fn add_layer_style(&mut self, style: SharedStyleEntry) {
        self.layer_styles.push(style);
    }

    pub fn set_layer_styles(&mut self, styles: Vec<SharedStyleEntry>) {
        self.layer_styles = styles;
    }
}
