pub mod assets;
pub mod error;
pub mod fixups;
pub mod import;
pub mod materializer;
pub mod resets;
pub mod session;
pub mod symbols;

#[cfg(test)]
mod tests_materializer;


#[cfg(test)]
mod tests_assets;


#[cfg(test)]
mod tests_import;

pub use assets::{merge_assets, MergeCounts};
pub use error::ImportError;
pub use fixups::{fix_shared_text_style, NodePreprocessor, StandardFixups};
pub use import::{import_files, ImportOptions, ImportSummary, APP_TITLE, PLACEMENT_GAP};
pub use materializer::{ImportFailures, Materializer};
pub use resets::{reset_document, reset_layer, reset_page};
pub use session::ImportSession;
pub use symbols::{SymbolRegistry, SYMBOL_GUTTER};
