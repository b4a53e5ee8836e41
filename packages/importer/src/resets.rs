//! # Container Resets
//!
//! Idempotent clearing of layer containers and whole documents. The
//! reserved symbols page is exempt from document resets, and a document
//! always keeps at least one non-symbols page.

use sketchport_document::{DocumentStore, NativeLayer, Page};

/// Remove every layer from a page, leaving the page itself in place
pub fn reset_page(page: &mut Page) {
    page.clear();
}

/// Remove every child from a group-like layer
pub fn reset_layer(layer: &mut NativeLayer) {
    layer.clear_children();
}

/// Remove every non-symbols page from the document. The last remaining
/// non-symbols page is cleared in place instead of removed.
pub fn reset_document(store: &mut DocumentStore) {
    // Collect ids up front; removal happens in reverse page order
    let ids: Vec<String> = store
        .pages()
        .iter()
        .rev()
        .map(|page| page.id().to_string())
        .collect();

    for id in ids {
        if store.is_symbols_page(&id) {
            continue;
        }
        if store.non_symbols_page_count() > 1 {
            store.remove_page(&id);
        } else if let Some(page) = store.page_mut(&id) {
            page.clear();
        }
    }
}
