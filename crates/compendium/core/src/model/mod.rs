//! Typed rules entities and their element codecs.

pub mod abilities;
pub mod background;
pub mod class;
pub mod feat;
pub mod modifier;
pub mod race;
pub mod spell;
pub mod traits;

pub use abilities::{Abilities, Ability};
pub use background::Background;
pub use class::{CharacterClass, Feature, Level, Slots};
pub use feat::Feat;
pub use modifier::Modifier;
pub use race::{Race, Subrace};
pub use spell::Spell;
pub use traits::Trait;
