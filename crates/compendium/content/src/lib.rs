//! Compendium inputs, outputs, and the assembler that joins them.
//!
//! This crate provides:
//! - XML reading and pretty-printed writing for [`compendium_core::Element`] trees
//! - Run configuration (data-driven via TOML)
//! - Document sources (file-backed and in-memory)
//! - The [`CompendiumAssembler`] that decodes, merges, and encodes one run
//!
//! All entity semantics live in `compendium-core`; this crate only moves
//! documents in and out and decides which categories take part.

pub mod assembler;
pub mod loaders;

pub use assembler::{AssembleError, CompendiumAssembler};
pub use loaders::{
    CompendiumConfig, ConfigLoader, DocumentSource, FileDocumentSource, LoadResult,
    MemoryDocumentSource, SourcePaths, parse_document, render_document,
};
