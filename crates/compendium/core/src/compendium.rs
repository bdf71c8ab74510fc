//! The assembled compendium and its root element.

use crate::category::Category;
use crate::codec::Codec;
use crate::document::Element;
use crate::model::{Background, CharacterClass, Feat, Race, Spell};

/// Every converted entity of one run, already merged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Compendium {
    pub classes: Vec<CharacterClass>,
    pub races: Vec<Race>,
    pub backgrounds: Vec<Background>,
    pub feats: Vec<Feat>,
    pub spells: Vec<Spell>,
}

impl Compendium {
    pub const TAG: &'static str = "compendium";
    /// Schema version understood by the viewer.
    pub const VERSION: &'static str = "5";

    /// Number of entities in `category`.
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Classes => self.classes.len(),
            Category::Races => self.races.len(),
            Category::Backgrounds => self.backgrounds.len(),
            Category::Feats => self.feats.len(),
            Category::Spells => self.spells.len(),
        }
    }

    /// Encoded entities of one category, in stored order.
    pub fn encode_category(&self, category: Category) -> Vec<Element> {
        fn encode_all<T: Codec>(items: &[T]) -> Vec<Element> {
            items.iter().map(T::encode).collect()
        }
        match category {
            Category::Classes => encode_all(&self.classes),
            Category::Races => encode_all(&self.races),
            Category::Backgrounds => encode_all(&self.backgrounds),
            Category::Feats => encode_all(&self.feats),
            Category::Spells => encode_all(&self.spells),
        }
    }

    /// Builds `<compendium version="5">` with categories in output order.
    pub fn encode(&self) -> Element {
        let mut root = Element::new(Self::TAG);
        root.set_attr("version", Self::VERSION);
        for category in Category::all() {
            for element in self.encode_category(category) {
                root.push(element);
            }
        }
        root
    }
}
