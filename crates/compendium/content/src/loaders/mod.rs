//! Content loaders for reading compendium inputs from files.
//!
//! This module provides the XML reader/writer, the TOML run configuration,
//! and the document sources the assembler pulls category documents from.

pub mod config;
pub mod source;
pub mod xml;

pub use config::{CompendiumConfig, ConfigLoader, SourcePaths};
pub use source::{DocumentSource, FileDocumentSource, MemoryDocumentSource};
pub use xml::{parse_document, render_document};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
