//! Error types for the import engine.
//!
//! Per-node construction failures are not errors at this level: the
//! materializer records and skips them. `ImportError` covers the fatal
//! class that aborts the remainder of an import call.

use sketchport_document::AssetError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("malformed shared {family} asset: {source}")]
    MalformedAsset {
        family: &'static str,
        #[source]
        source: AssetError,
    },
}
