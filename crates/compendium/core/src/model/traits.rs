//! Named rules text attached to races and backgrounds.

use crate::codec::{Codec, decode_paragraphs, encode_paragraphs};
use crate::document::Element;
use crate::error::Result;

/// A named block of rules text (e.g. "Darkvision").
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trait {
    pub name: String,
    pub texts: Vec<String>,
}

impl Trait {
    pub fn new(name: impl Into<String>, texts: Vec<String>) -> Self {
        Self {
            name: name.into(),
            texts,
        }
    }
}

impl Codec for Trait {
    const TAG: &'static str = "trait";

    fn decode(element: &Element) -> Result<Self> {
        Ok(Self {
            name: element.child_text("name").unwrap_or("").to_string(),
            texts: decode_paragraphs(element, "text"),
        })
    }

    fn encode(&self) -> Element {
        let mut element = Element::new(Self::TAG);
        element.push_text("name", self.name.as_str());
        encode_paragraphs(&mut element, "text", &self.texts);
        element
    }
}
