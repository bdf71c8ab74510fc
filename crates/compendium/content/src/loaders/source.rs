//! Document sources: where category documents come from.

use std::collections::HashMap;

use compendium_core::{Category, Element};

use crate::loaders::config::SourcePaths;
use crate::loaders::xml::parse_document;
use crate::loaders::{LoadResult, read_file};

/// Provides the parsed source document for a category.
pub trait DocumentSource {
    /// Returns the document root, or `None` when the category has no document.
    fn document(&self, category: Category) -> LoadResult<Option<Element>>;
}

/// Reads category documents from XML files.
#[derive(Clone, Debug, Default)]
pub struct FileDocumentSource {
    paths: SourcePaths,
}

impl FileDocumentSource {
    pub fn new(paths: SourcePaths) -> Self {
        Self { paths }
    }
}

impl DocumentSource for FileDocumentSource {
    fn document(&self, category: Category) -> LoadResult<Option<Element>> {
        let Some(path) = self.paths.get(category) else {
            return Ok(None);
        };
        let content = read_file(path)?;
        let root = parse_document(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;

        tracing::debug!("Loaded {} document from {}", category, path.display());
        Ok(Some(root))
    }
}

/// In-memory documents keyed by category.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocumentSource {
    documents: HashMap<Category, Element>,
}

impl MemoryDocumentSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, category: Category, root: Element) -> Self {
        self.documents.insert(category, root);
        self
    }
}

impl DocumentSource for MemoryDocumentSource {
    fn document(&self, category: Category) -> LoadResult<Option<Element>> {
        Ok(self.documents.get(&category).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_category_has_no_document() {
        let source = FileDocumentSource::default();
        assert!(source.document(Category::Spells).unwrap().is_none());
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut paths = SourcePaths::default();
        paths.set(Category::Feats, "/nonexistent/compendium/Feats.xml");
        let source = FileDocumentSource::new(paths);

        let err = source.document(Category::Feats).unwrap_err();
        assert!(err.to_string().contains("Feats.xml"));
    }

    #[test]
    fn memory_source_returns_inserted_documents() {
        let source =
            MemoryDocumentSource::new().with_document(Category::Feats, Element::new("feats"));
        assert_eq!(
            source.document(Category::Feats).unwrap(),
            Some(Element::new("feats"))
        );
        assert_eq!(source.document(Category::Races).unwrap(), None);
    }
}
