//! Compendium assembler: sources in, one merged compendium out.

use std::collections::BTreeSet;

use compendium_core::{
    Background, Category, CharacterClass, Codec, Compendium, DecodeError, Element, Feat,
    MergeError, Race, Spell, Subrace, resolve_subraces,
};
use thiserror::Error;

use crate::loaders::DocumentSource;

/// Errors that abort a conversion run.
#[derive(Debug, Error)]
pub enum AssembleError {
    #[error("failed to load {category} document: {source}")]
    Source {
        category: Category,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("failed to decode {tag} '{entity}' in {category} document: {source}")]
    Decode {
        category: Category,
        tag: &'static str,
        entity: String,
        #[source]
        source: DecodeError,
    },

    #[error(transparent)]
    Merge(#[from] MergeError),
}

pub type Result<T> = std::result::Result<T, AssembleError>;

/// Builds a [`Compendium`] from the documents of a [`DocumentSource`].
///
/// Each call to [`load`](Self::load) or [`assemble`](Self::assemble) is an
/// independent run; nothing is cached between calls.
pub struct CompendiumAssembler<'a> {
    source: &'a dyn DocumentSource,
    categories: BTreeSet<Category>,
}

impl<'a> CompendiumAssembler<'a> {
    /// Creates an assembler including every category.
    pub fn new(source: &'a dyn DocumentSource) -> Self {
        Self {
            source,
            categories: Category::all().into_iter().collect(),
        }
    }

    /// Restricts the run to `categories`. Output order stays fixed.
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.iter().copied()
    }

    /// Decodes and merges every selected category.
    pub fn load(&self) -> Result<Compendium> {
        let mut compendium = Compendium::default();

        for category in self.categories() {
            let Some(root) = self
                .source
                .document(category)
                .map_err(|e| AssembleError::Source {
                    category,
                    source: e.into(),
                })?
            else {
                tracing::warn!("No {} document configured, skipping", category);
                continue;
            };

            match category {
                Category::Classes => {
                    compendium.classes = decode::<CharacterClass>(&root, category)?
                }
                Category::Races => {
                    let races = decode::<Race>(&root, category)?;
                    let subraces = decode::<Subrace>(&root, category)?;
                    tracing::debug!(
                        "Merging {} subraces into {} races",
                        subraces.len(),
                        races.len()
                    );
                    compendium.races = resolve_subraces(races, &subraces)?;
                }
                Category::Backgrounds => {
                    compendium.backgrounds = decode::<Background>(&root, category)?
                }
                Category::Feats => compendium.feats = decode::<Feat>(&root, category)?,
                Category::Spells => compendium.spells = decode::<Spell>(&root, category)?,
            }

            tracing::info!("Converted {} {}", compendium.count(category), category);
        }

        Ok(compendium)
    }

    /// Runs [`load`](Self::load) and encodes the `<compendium>` root.
    pub fn assemble(&self) -> Result<Element> {
        Ok(self.load()?.encode())
    }
}

/// Decodes every `T::TAG` child of a category document.
fn decode<T: Codec>(root: &Element, category: Category) -> Result<Vec<T>> {
    root.children_named(T::TAG)
        .map(|element| {
            let entity = element.child_text("name").unwrap_or("").to_string();
            tracing::trace!("Decoding {} '{}'", T::TAG, entity);
            T::decode(element).map_err(|source| AssembleError::Decode {
                category,
                tag: T::TAG,
                entity,
                source,
            })
        })
        .collect()
}
