//! # Import Orchestrator
//!
//! The entry point for one import batch: classify incoming portable files,
//! merge shared assets, materialize page content with non-overlapping
//! placement, aggregate failures, and notify the host. This module owns
//! sequencing and aggregation only; materialization logic lives in the
//! components.

use crate::assets::{merge_assets, MergeCounts};
use crate::error::ImportError;
use crate::materializer::{ImportFailures, Materializer};
use sketchport_document::{DocumentStore, HostContext, LayerContainer, Page};
use sketchport_portable::{partition_files, PortableFile};
use tracing::{debug, info, instrument};

/// Title used for blocking alerts
pub const APP_TITLE: &str = "sketchport";

/// Horizontal gap between existing content and newly placed layers
pub const PLACEMENT_GAP: f64 = 100.0;

/// Suffixes for the success toast, rotated by imported-layer count
const SUCCESS_EMOJI: [&str; 13] = [
    "👌", "👍", "✨", "😍", "🍾", "🤩", "🎉", "👏", "💪", "🤘", "💅", "🏆", "🚀",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct ImportOptions {
    /// Clear the shared color/text-style/layer-style pools before merging
    pub replace_shared_assets: bool,
}

/// Outcome of one import batch
#[derive(Debug, Clone, Default)]
pub struct ImportSummary {
    /// Per-family merge counts, present when a document-level file was in
    /// the batch
    pub merged: Option<MergeCounts>,
    /// Top-level layers attached to the current page
    pub imported_layers: usize,
    pub failures: ImportFailures,
}

/// Placement anchor for appended content: the existing layer with the
/// greatest right edge wins, ties going to the first such layer in page
/// order. An empty page anchors at the origin.
fn placement_anchor(page: &Page) -> (f64, f64) {
    let mut max_x = 0.0;
    let mut y_position = 0.0;
    let mut found = false;

    for layer in page.layers() {
        let right = layer.frame.right();
        if !found || right > max_x {
            max_x = right;
            y_position = layer.frame.y;
            found = true;
        }
    }

    (max_x, y_position)
}

/// Import one batch of portable files into the store's current page and
/// shared pools. At most one document-level and one page-level file are
/// honored (last-seen wins). Per-node failures are collected into the
/// summary; malformed shared assets abort with an error.
#[instrument(skip_all, fields(files = files.len()))]
pub fn import_files(
    store: &mut DocumentStore,
    host: &dyn HostContext,
    files: &[PortableFile],
    options: &ImportOptions,
) -> Result<ImportSummary, ImportError> {
    let (document_file, page_file) = partition_files(files);
    let materializer = Materializer::standard();
    let mut summary = ImportSummary::default();

    if let Some(file) = document_file {
        summary.merged = Some(merge_assets(store, file, options.replace_shared_assets)?);
    }

    if let Some(file) = page_file {
        let mut failures = ImportFailures::new();
        let (mut max_x, y_position) = placement_anchor(store.current_page());
        debug!(max_x, y_position, layers = file.layers.len(), "placing page content");

        for node in &file.layers {
            let Some(mut layer) = materializer.materialize(store, node, &mut failures) else {
                continue;
            };
            // Lay top-level imports out left to right; the cursor only
            // ever advances, so successive batches never overlap
            layer.frame.x = max_x + PLACEMENT_GAP;
            layer.frame.y = y_position;
            max_x = layer.frame.right();
            store.current_page_mut().attach(layer);
            summary.imported_layers += 1;
        }

        match failures.len() {
            0 => {
                let emoji = SUCCESS_EMOJI[summary.imported_layers % SUCCESS_EMOJI.len()];
                host.message(&format!("Import successful {emoji}"));
            }
            1 => host.alert(APP_TITLE, "One layer couldn't be imported and was skipped."),
            count => host.alert(
                APP_TITLE,
                &format!("{count} layers couldn't be imported and were skipped."),
            ),
        }
        host.zoom_to_fit();

        summary.failures = failures;
    }

    info!(
        imported = summary.imported_layers,
        failed = summary.failures.len(),
        "import complete"
    );
    Ok(summary)
}
