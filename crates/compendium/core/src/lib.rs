//! Rules-content model, merge engine, and compendium codecs.
//!
//! `compendium-core` turns source document trees into typed entities
//! ([`Race`], [`CharacterClass`], [`Spell`], ...), combines subraces with
//! their base races and level fragments into levels, and encodes everything
//! back into the element layout the compendium viewer reads. It performs no
//! I/O; documents arrive and leave as [`Element`] trees.
pub mod category;
pub mod codec;
pub mod compendium;
pub mod document;
pub mod error;
pub mod merge;
pub mod model;

pub use category::Category;
pub use codec::Codec;
pub use compendium::Compendium;
pub use document::Element;
pub use error::{DecodeError, MergeError};
pub use merge::{aggregate_levels, resolve_subraces};
pub use model::{
    Abilities, Ability, Background, CharacterClass, Feat, Feature, Level, Modifier, Race, Slots,
    Spell, Subrace, Trait,
};
