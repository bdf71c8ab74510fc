use crate::codec::{Codec, decode_paragraphs, encode_paragraphs};
use crate::document::Element;
use crate::error::Result;
use crate::model::modifier::Modifier;

/// An optional feat. An empty prerequisite means the feat has none.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Feat {
    pub name: String,
    pub prerequisite: String,
    pub texts: Vec<String>,
    pub modifiers: Vec<Modifier>,
}

impl Codec for Feat {
    const TAG: &'static str = "feat";

    fn decode(element: &Element) -> Result<Self> {
        Ok(Self {
            name: element.child_text("name").unwrap_or("").to_string(),
            prerequisite: element.child_text("prerequisite").unwrap_or("").to_string(),
            texts: decode_paragraphs(element, "text"),
            modifiers: Modifier::decode_children(element),
        })
    }

    fn encode(&self) -> Element {
        let mut element = Element::new(Self::TAG);
        element.push_text("name", self.name.as_str());
        if !self.prerequisite.is_empty() {
            element.push_text("prerequisite", self.prerequisite.as_str());
        }
        encode_paragraphs(&mut element, "text", &self.texts);
        for modifier in &self.modifiers {
            element.push(modifier.encode());
        }
        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grappler() -> Feat {
        Feat {
            name: "Grappler".into(),
            prerequisite: "Strength 13 or higher".into(),
            texts: vec!["You've developed the skills".into(), "to hold your own.".into()],
            modifiers: vec![
                Modifier::new("bonus", "grapple +1"),
                Modifier::new("ability score", "strength +1"),
            ],
        }
    }

    #[test]
    fn round_trips() {
        let feat = grappler();
        assert_eq!(Feat::decode(&feat.encode()).unwrap(), feat);
    }

    #[test]
    fn empty_prerequisite_is_omitted() {
        let feat = Feat {
            prerequisite: String::new(),
            ..grappler()
        };
        let element = feat.encode();

        assert_eq!(element.child("prerequisite"), None);
        let names: Vec<_> = element.children().iter().map(Element::name).collect();
        assert_eq!(names, vec!["name", "text", "text", "modifier", "modifier"]);
    }
}
