//! # Shared Asset Merging
//!
//! Folds a document-level portable file's shared colors, text styles, and
//! layer styles into the host document's pools. Unlike layer
//! materialization this path is not fault tolerant: a malformed entry
//! aborts the merge with a fatal error.

use crate::error::ImportError;
use crate::fixups::fix_shared_text_style;
use sketchport_document::{DocumentStore, SharedColor, SharedStyleEntry};
use sketchport_portable::PortableFile;
use tracing::info;

/// Entries merged per asset family, for reporting
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MergeCounts {
    pub colors: usize,
    pub text_styles: usize,
    pub layer_styles: usize,
}

/// Merge the shared-asset sections of `file` into the document pools.
/// With `reset_first`, all three pools are cleared before merging.
pub fn merge_assets(
    store: &mut DocumentStore,
    file: &PortableFile,
    reset_first: bool,
) -> Result<MergeCounts, ImportError> {
    if reset_first {
        store.clear_colors();
        store.set_text_styles(Vec::new());
        store.set_layer_styles(Vec::new());
    }

    let mut counts = MergeCounts::default();

    for value in &file.assets.colors {
        let color = SharedColor::from_value(value).map_err(|source| {
            ImportError::MalformedAsset {
                family: "color",
                source,
            }
        })?;
        store.add_color(color);
        counts.colors += 1;
    }
    info!(count = counts.colors, "shared colors added");

    for def in &file.layer_text_styles.objects {
        let mut def = def.clone();
        fix_shared_text_style(&mut def);
        let entry = SharedStyleEntry::new(def.name, def.value).map_err(|source| {
            ImportError::MalformedAsset {
                family: "text style",
                source,
            }
        })?;
        store.add_text_style(entry);
        counts.text_styles += 1;
    }
    info!(count = counts.text_styles, "shared text styles added");

    for def in &file.layer_styles.objects {
        let entry = SharedStyleEntry::new(def.name.clone(), def.value.clone()).map_err(
            |source| ImportError::MalformedAsset {
                family: "layer style",
                source,
            },
        )?;
        store.add_layer_style(entry);
        counts.layer_styles += 1;
    }
    info!(count = counts.layer_styles, "shared layer styles added");

    Ok(counts)
}
