//! Compendium run configuration loader.

use std::path::{Path, PathBuf};

use compendium_core::Category;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Source document locations, one optional path per category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourcePaths {
    pub classes: Option<PathBuf>,
    pub races: Option<PathBuf>,
    pub backgrounds: Option<PathBuf>,
    pub feats: Option<PathBuf>,
    pub spells: Option<PathBuf>,
}

impl SourcePaths {
    pub fn get(&self, category: Category) -> Option<&Path> {
        match category {
            Category::Classes => self.classes.as_deref(),
            Category::Races => self.races.as_deref(),
            Category::Backgrounds => self.backgrounds.as_deref(),
            Category::Feats => self.feats.as_deref(),
            Category::Spells => self.spells.as_deref(),
        }
    }

    pub fn set(&mut self, category: Category, path: impl Into<PathBuf>) {
        let slot = match category {
            Category::Classes => &mut self.classes,
            Category::Races => &mut self.races,
            Category::Backgrounds => &mut self.backgrounds,
            Category::Feats => &mut self.feats,
            Category::Spells => &mut self.spells,
        };
        *slot = Some(path.into());
    }
}

/// Configuration for one conversion run.
///
/// ```toml
/// categories = ["classes", "races"]
///
/// [sources]
/// races = "Sources/Races.xml"
/// classes = "Character/Classes.xml"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompendiumConfig {
    /// Categories to include. Output order is fixed regardless of the order here.
    pub categories: Vec<Category>,
    pub sources: SourcePaths,
}

impl Default for CompendiumConfig {
    fn default() -> Self {
        Self {
            categories: Category::all(),
            sources: SourcePaths::default(),
        }
    }
}

impl CompendiumConfig {
    /// Resolves relative source paths against `base_dir`.
    pub fn resolve_paths(&mut self, base_dir: &Path) {
        for category in Category::all() {
            if let Some(path) = self.sources.get(category) {
                if path.is_relative() {
                    let resolved = base_dir.join(path);
                    self.sources.set(category, resolved);
                }
            }
        }
    }
}

/// Loader for run configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> LoadResult<CompendiumConfig> {
        let config: CompendiumConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse compendium config TOML: {}", e))?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// Relative source paths are resolved against the file's directory.
    pub fn load(path: &Path) -> LoadResult<CompendiumConfig> {
        let content = read_file(path)?;
        let mut config = Self::parse(&content)?;
        if let Some(dir) = path.parent() {
            config.resolve_paths(dir);
        }

        Ok(config)
    }
}
