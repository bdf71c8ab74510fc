use crate::codec::{Codec, decode_list, encode_list};
use crate::document::Element;
use crate::error::Result;
use crate::model::traits::Trait;

/// A character background: skill proficiencies plus descriptive traits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Background {
    pub name: String,
    pub proficiencies: Vec<String>,
    pub traits: Vec<Trait>,
}

impl Codec for Background {
    const TAG: &'static str = "background";

    fn decode(element: &Element) -> Result<Self> {
        Ok(Self {
            name: element.child_text("name").unwrap_or("").to_string(),
            proficiencies: decode_list(element.child_text("proficiency")),
            traits: Trait::decode_all(element)?,
        })
    }

    fn encode(&self) -> Element {
        let mut element = Element::new(Self::TAG);
        element.push_text("name", self.name.as_str());
        element.push_text("proficiency", encode_list(&self.proficiencies));
        for t in &self.traits {
            element.push(t.encode());
        }
        element
    }
}
