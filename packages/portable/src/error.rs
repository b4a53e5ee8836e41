//! Error types for portable file loading

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortableError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
