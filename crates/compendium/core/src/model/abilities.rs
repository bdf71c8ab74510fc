//! Ability scores and the `"Str 2, Dex 1"` string codec.

use std::ops::Add;
use std::str::FromStr;

use crate::codec::{Codec, LIST_SEPARATOR};
use crate::document::Element;
use crate::error::{DecodeError, Result};

/// The six abilities, in the order the compendium lists them.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Ability {
    #[strum(to_string = "Str", serialize = "strength")]
    Strength,
    #[strum(to_string = "Dex", serialize = "dexterity")]
    Dexterity,
    #[strum(to_string = "Con", serialize = "constitution")]
    Constitution,
    #[strum(to_string = "Int", serialize = "intelligence")]
    Intelligence,
    #[strum(to_string = "Wis", serialize = "wisdom")]
    Wisdom,
    #[strum(to_string = "Cha", serialize = "charisma")]
    Charisma,
}

/// Ability score bonuses granted by a race or subrace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Abilities {
    pub str: u32,
    pub dex: u32,
    pub con: u32,
    pub int: u32,
    pub wis: u32,
    pub cha: u32,
}

impl Abilities {
    pub const fn new(str: u32, dex: u32, con: u32, int: u32, wis: u32, cha: u32) -> Self {
        Self {
            str,
            dex,
            con,
            int,
            wis,
            cha,
        }
    }

    #[inline]
    pub fn get(&self, ability: Ability) -> u32 {
        match ability {
            Ability::Strength => self.str,
            Ability::Dexterity => self.dex,
            Ability::Constitution => self.con,
            Ability::Intelligence => self.int,
            Ability::Wisdom => self.wis,
            Ability::Charisma => self.cha,
        }
    }

    #[inline]
    pub fn set(&mut self, ability: Ability, value: u32) {
        let slot = match ability {
            Ability::Strength => &mut self.str,
            Ability::Dexterity => &mut self.dex,
            Ability::Constitution => &mut self.con,
            Ability::Intelligence => &mut self.int,
            Ability::Wisdom => &mut self.wis,
            Ability::Charisma => &mut self.cha,
        };
        *slot = value;
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Field-wise sum, saturating at `u32::MAX`.
    pub fn adding(&self, other: &Abilities) -> Abilities {
        Abilities {
            str: self.str.saturating_add(other.str),
            dex: self.dex.saturating_add(other.dex),
            con: self.con.saturating_add(other.con),
            int: self.int.saturating_add(other.int),
            wis: self.wis.saturating_add(other.wis),
            cha: self.cha.saturating_add(other.cha),
        }
    }

    /// Parses `"Str 2, Dex 1"`. Blank tokens are ignored.
    pub fn parse_str(text: &str) -> Result<Self> {
        let mut abilities = Abilities::default();
        for token in text.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let (name, value) =
                token
                    .split_once(' ')
                    .ok_or_else(|| DecodeError::MalformedAbility {
                        token: token.to_string(),
                    })?;
            let value: u32 = value
                .trim()
                .parse()
                .map_err(|_| DecodeError::MalformedAbility {
                    token: token.to_string(),
                })?;
            let ability = Ability::from_str(name).map_err(|_| DecodeError::UnknownAbility {
                token: token.to_string(),
                name: name.to_string(),
            })?;
            abilities.set(ability, value);
        }
        Ok(abilities)
    }

    /// Formats non-zero scores in Str, Dex, Con, Int, Wis, Cha order.
    pub fn format(&self) -> String {
        use strum::IntoEnumIterator;

        Ability::iter()
            .filter(|&a| self.get(a) > 0)
            .map(|a| format!("{} {}", a, self.get(a)))
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR)
    }
}

impl Add for Abilities {
    type Output = Abilities;

    fn add(self, rhs: Abilities) -> Abilities {
        self.adding(&rhs)
    }
}

impl Codec for Abilities {
    const TAG: &'static str = "ability";

    fn decode(element: &Element) -> Result<Self> {
        Abilities::parse_str(element.text().unwrap_or(""))
    }

    fn encode(&self) -> Element {
        Element::with_text(Self::TAG, self.format())
    }
}

/// Decodes the optional `ability` child of an entity element.
pub(crate) fn decode_child(parent: &Element) -> Result<Abilities> {
    parent
        .child(Abilities::TAG)
        .map(Abilities::decode)
        .transpose()
        .map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_skips_zero_scores() {
        let abilities = Abilities {
            str: 15,
            con: 14,
            ..Abilities::default()
        };
        assert_eq!(abilities.format(), "Str 15, Con 14");
    }

    #[test]
    fn format_keeps_fixed_order() {
        let abilities = Abilities::new(1, 2, 3, 4, 5, 6);
        assert_eq!(
            abilities.format(),
            "Str 1, Dex 2, Con 3, Int 4, Wis 5, Cha 6"
        );
    }

    #[test]
    fn parse_is_case_insensitive() {
        let abilities = Abilities::parse_str("str 2, CHA 1, Wisdom 3").unwrap();
        assert_eq!(abilities, Abilities::new(2, 0, 0, 0, 3, 1));
    }

    #[test]
    fn parse_empty_text_is_zero() {
        assert!(Abilities::parse_str("").unwrap().is_zero());
        assert!(Abilities::parse_str(" , ").unwrap().is_zero());
    }

    #[test]
    fn parse_rejects_unknown_ability() {
        let err = Abilities::parse_str("Str 1, Luck 2").unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnknownAbility {
                token: "Luck 2".into(),
                name: "Luck".into()
            }
        );
    }

    #[test]
    fn parse_rejects_token_without_value() {
        let err = Abilities::parse_str("Str").unwrap_err();
        assert_eq!(err, DecodeError::MalformedAbility { token: "Str".into() });

        let err = Abilities::parse_str("Dex two").unwrap_err();
        assert_eq!(
            err,
            DecodeError::MalformedAbility {
                token: "Dex two".into()
            }
        );
    }

    #[test]
    fn addition_is_commutative_and_associative() {
        let a = Abilities::new(2, 0, 1, 0, 0, 0);
        let b = Abilities::new(0, 1, 0, 0, 2, 0);
        let c = Abilities::new(1, 1, 1, 1, 1, 1);

        assert_eq!(a.adding(&b), b.adding(&a));
        assert_eq!(a.adding(&b).adding(&c), a.adding(&b.adding(&c)));
        assert_eq!(a + b, Abilities::new(2, 1, 1, 0, 2, 0));
    }

    #[test]
    fn round_trips_through_element() {
        let abilities = Abilities::new(12, 0, 3, 0, 1, 10);
        let decoded = Abilities::decode(&abilities.encode()).unwrap();
        assert_eq!(decoded, abilities);
    }
}
