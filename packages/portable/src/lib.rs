pub mod document;
pub mod error;
pub mod node;

pub use document::{
    partition_files, AssetPool, FileKind, PortableFile, SharedStyleDef, StyleSheet,
};
pub use error::PortableError;
pub use node::{Frame, NodeKind, PortableNode};
