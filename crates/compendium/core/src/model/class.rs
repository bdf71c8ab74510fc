//! Character classes and their per-level progression.
//!
//! A class stores its progression as [`Level`] records, but the compendium
//! schema splits each level into separate `autolevel` fragments for spell
//! slots and for features. See [`CharacterClass::encode`] for the emission
//! order and [`crate::merge::aggregate_levels`] for the reverse direction.

use std::fmt;

use crate::codec::{
    Codec, YES, decode_flag, decode_list, decode_number, decode_paragraphs, encode_list,
    encode_paragraphs,
};
use crate::document::Element;
use crate::error::Result;
use crate::merge::aggregate_levels;
use crate::model::modifier::Modifier;

/// A class feature gained at a given level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Feature {
    pub name: String,
    pub optional: bool,
    pub texts: Vec<String>,
    pub modifiers: Vec<Modifier>,
}

impl Feature {
    pub fn new(name: impl Into<String>, texts: Vec<String>) -> Self {
        Self {
            name: name.into(),
            texts,
            ..Self::default()
        }
    }
}

impl Codec for Feature {
    const TAG: &'static str = "feature";

    fn decode(element: &Element) -> Result<Self> {
        Ok(Self {
            name: element.child_text("name").unwrap_or("").to_string(),
            optional: decode_flag(element.attr("optional")),
            texts: decode_paragraphs(element, "text"),
            modifiers: Modifier::decode_children(element),
        })
    }

    fn encode(&self) -> Element {
        let mut element = Element::new(Self::TAG);
        if self.optional {
            element.set_attr("optional", YES);
        }
        element.push_text("name", self.name.as_str());
        encode_paragraphs(&mut element, "text", &self.texts);
        for modifier in &self.modifiers {
            element.push(modifier.encode());
        }
        element
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let optional = if self.optional { " (Optional)" } else { "" };
        write!(f, "Feature{}: {}", optional, self.name)?;
        for text in &self.texts {
            write!(f, "\n{}", text)?;
        }
        Ok(())
    }
}

/// Spell slot counts for one character level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slots {
    pub counts: [u32; Slots::TIERS],
    pub optional: bool,
}

impl Slots {
    /// Cantrips plus spell levels 1 through 9.
    pub const TIERS: usize = 10;

    pub const fn new(counts: [u32; Slots::TIERS]) -> Self {
        Self {
            counts,
            optional: false,
        }
    }

    /// True when any tier grants at least one slot.
    pub fn is_active(&self) -> bool {
        self.counts.iter().any(|&c| c > 0)
    }

    /// Parses `"2,3,0,..."`; unparseable entries read as 0 and missing tiers stay 0.
    pub fn parse_counts(text: &str) -> [u32; Slots::TIERS] {
        let mut counts = [0; Slots::TIERS];
        for (slot, token) in counts.iter_mut().zip(text.split(',')) {
            *slot = token.trim().parse().unwrap_or(0);
        }
        counts
    }
}

impl Codec for Slots {
    const TAG: &'static str = "slots";

    fn decode(element: &Element) -> Result<Self> {
        Ok(Self {
            counts: Self::parse_counts(element.text().unwrap_or("")),
            optional: decode_flag(element.attr("optional")),
        })
    }

    fn encode(&self) -> Element {
        let text = self
            .counts
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let mut element = Element::with_text(Self::TAG, text);
        if self.optional {
            element.set_attr("optional", YES);
        }
        element
    }
}

/// Everything a class gains at one level.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level {
    pub level: u32,
    pub slots: Slots,
    pub features: Vec<Feature>,
}

impl Level {
    pub const TAG: &'static str = "autolevel";

    pub fn new(level: u32) -> Self {
        Self {
            level,
            slots: Slots::default(),
            features: Vec::new(),
        }
    }

    fn fragment(&self) -> Element {
        let mut element = Element::new(Self::TAG);
        element.set_attr("level", self.level.to_string());
        element
    }

    /// Slots-only fragment: `<autolevel level="N"><slots>..</slots></autolevel>`.
    pub fn encode_slots(&self) -> Element {
        let mut element = self.fragment();
        element.push(self.slots.encode());
        element
    }

    /// Feature fragment carrying every feature of this level, possibly none.
    pub fn encode_features(&self) -> Element {
        let mut element = self.fragment();
        for feature in &self.features {
            element.push(feature.encode());
        }
        element
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let optional = if self.slots.optional { " (Optional)" } else { "" };
        write!(f, "Level: {}\nSlots{}: {:?}", self.level, optional, self.slots.counts)?;
        for feature in &self.features {
            write!(f, "\n{}", feature)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterClass {
    pub name: String,
    pub hit_die: u32,
    pub proficiencies: Vec<String>,
    pub spell_ability: String,
    pub levels: Vec<Level>,
}

impl CharacterClass {
    /// True when any level grants spell slots.
    pub fn has_slots(&self) -> bool {
        self.levels.iter().any(|l| l.slots.is_active())
    }
}

impl Codec for CharacterClass {
    const TAG: &'static str = "class";

    fn decode(element: &Element) -> Result<Self> {
        Ok(Self {
            name: element.child_text("name").unwrap_or("").to_string(),
            hit_die: decode_number(element.child_text("hd")).unwrap_or(0),
            proficiencies: decode_list(element.child_text("proficiency")),
            spell_ability: element.child_text("spellAbility").unwrap_or("").to_string(),
            levels: aggregate_levels(element.children_named(Level::TAG))?,
        })
    }

    /// Emits header fields, then (for spellcasting classes) one slots-only
    /// fragment per level, then one feature fragment per level.
    fn encode(&self) -> Element {
        let mut element = Element::new(Self::TAG);
        element.push_text("name", self.name.as_str());
        element.push_text("hd", self.hit_die.to_string());
        element.push_text("proficiency", encode_list(&self.proficiencies));
        element.push_text("spellAbility", self.spell_ability.as_str());

        if self.has_slots() {
            for level in &self.levels {
                element.push(level.encode_slots());
            }
        }
        for level in &self.levels {
            element.push(level.encode_features());
        }
        element
    }
}
