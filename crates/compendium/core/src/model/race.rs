//! Races and the subraces layered on top of them.

use crate::codec::{Codec, decode_list, decode_number, encode_list};
use crate::document::Element;
use crate::error::{DecodeError, Result};
use crate::model::abilities::{self, Abilities};
use crate::model::traits::Trait;

/// A playable race as it appears in the compendium.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Race {
    pub name: String,
    pub size: String,
    pub speed: u32,
    pub abilities: Abilities,
    pub proficiencies: Vec<String>,
    pub traits: Vec<Trait>,
}

impl Race {
    pub const DEFAULT_SIZE: &'static str = "M";
    pub const DEFAULT_SPEED: u32 = 30;

    /// Creates a medium race with walking speed 30 and no bonuses.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: Self::DEFAULT_SIZE.to_string(),
            speed: Self::DEFAULT_SPEED,
            abilities: Abilities::default(),
            proficiencies: Vec::new(),
            traits: Vec::new(),
        }
    }
}

impl Default for Race {
    fn default() -> Self {
        Self::new("")
    }
}

impl Codec for Race {
    const TAG: &'static str = "race";

    fn decode(element: &Element) -> Result<Self> {
        Ok(Self {
            name: element.child_text("name").unwrap_or("").to_string(),
            size: element
                .child_text("size")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(Self::DEFAULT_SIZE)
                .to_string(),
            speed: decode_number(element.child_text("speed"))
                .filter(|&s| s > 0)
                .unwrap_or(Self::DEFAULT_SPEED),
            abilities: abilities::decode_child(element)?,
            proficiencies: decode_list(element.child_text("proficiency")),
            traits: Trait::decode_all(element)?,
        })
    }

    fn encode(&self) -> Element {
        let mut element = Element::new(Self::TAG);
        element.push_text("name", self.name.as_str());
        element.push_text("size", self.size.as_str());
        element.push_text("speed", self.speed.to_string());
        element.push(self.abilities.encode());
        element.push_text("proficiency", encode_list(&self.proficiencies));
        for t in &self.traits {
            element.push(t.encode());
        }
        element
    }
}

/// A subrace: a set of overrides and additions applied to a named base race.
///
/// A blank `name` or `size` and a zero `speed` mean "no override". Encoding
/// drops them, so they decode back as `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subrace {
    pub base: String,
    pub name: Option<String>,
    pub size: Option<String>,
    pub speed: Option<u32>,
    pub abilities: Abilities,
    pub proficiencies: Vec<String>,
    pub traits: Vec<Trait>,
}

impl Subrace {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            name: None,
            size: None,
            speed: None,
            abilities: Abilities::default(),
            proficiencies: Vec::new(),
            traits: Vec::new(),
        }
    }

    /// Name the combined race will carry.
    pub fn resolved_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.base)
    }

    /// Combines this subrace with its base race into a new race.
    ///
    /// Overrides win when present, ability bonuses add up, and the base race's
    /// proficiencies and traits come first.
    pub fn inheriting(&self, race: &Race) -> Race {
        Race {
            name: self.name.clone().unwrap_or_else(|| race.name.clone()),
            size: self.size.clone().unwrap_or_else(|| race.size.clone()),
            speed: self.speed.unwrap_or(race.speed),
            abilities: self.abilities.adding(&race.abilities),
            proficiencies: race
                .proficiencies
                .iter()
                .chain(&self.proficiencies)
                .cloned()
                .collect(),
            traits: race.traits.iter().chain(&self.traits).cloned().collect(),
        }
    }
}

impl Codec for Subrace {
    const TAG: &'static str = "subrace";

    fn decode(element: &Element) -> Result<Self> {
        let non_blank = |field: &str| {
            element
                .child_text(field)
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
        };
        let name = non_blank("name");

        let base = element.attr("base").unwrap_or("").trim();
        if base.is_empty() {
            return Err(DecodeError::MissingBaseRace {
                subrace: name.unwrap_or_default(),
            });
        }

        Ok(Self {
            base: base.to_string(),
            name,
            size: non_blank("size"),
            speed: decode_number(element.child_text("speed")).filter(|&s| s > 0),
            abilities: abilities::decode_child(element)?,
            proficiencies: decode_list(element.child_text("proficiency")),
            traits: Trait::decode_all(element)?,
        })
    }

    fn encode(&self) -> Element {
        let mut element = Element::new(Self::TAG);
        element.set_attr("base", self.base.as_str());
        if let Some(name) = self.name.as_deref().filter(|s| !s.trim().is_empty()) {
            element.push_text("name", name);
        }
        if let Some(size) = self.size.as_deref().filter(|s| !s.trim().is_empty()) {
            element.push_text("size", size);
        }
        if let Some(speed) = self.speed.filter(|&s| s > 0) {
            element.push_text("speed", speed.to_string());
        }
        if !self.abilities.is_zero() {
            element.push(self.abilities.encode());
        }
        if !self.proficiencies.is_empty() {
            element.push_text("proficiency", encode_list(&self.proficiencies));
        }
        for t in &self.traits {
            element.push(t.encode());
        }
        element
    }
}
