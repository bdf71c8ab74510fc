use crate::codec::{
    Codec, YES, decode_flag, decode_list, decode_number, decode_paragraphs, encode_list,
    encode_paragraphs,
};
use crate::document::Element;
use crate::error::Result;

/// A spell entry. `level` 0 is a cantrip.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spell {
    pub name: String,
    pub level: u32,
    pub school: String,
    pub ritual: bool,
    pub time: String,
    pub range: String,
    pub components: String,
    pub duration: String,
    pub classes: Vec<String>,
    pub texts: Vec<String>,
    pub rolls: Vec<String>,
}

impl Codec for Spell {
    const TAG: &'static str = "spell";

    fn decode(element: &Element) -> Result<Self> {
        let field = |name: &str| element.child_text(name).unwrap_or("").to_string();
        Ok(Self {
            name: field("name"),
            level: decode_number(element.child_text("level")).unwrap_or(0),
            school: field("school"),
            ritual: decode_flag(element.child_text("ritual")),
            time: field("time"),
            range: field("range"),
            components: field("components"),
            duration: field("duration"),
            classes: decode_list(element.child_text("classes")),
            texts: decode_paragraphs(element, "text"),
            rolls: decode_paragraphs(element, "roll"),
        })
    }

    fn encode(&self) -> Element {
        let mut element = Element::new(Self::TAG);
        element.push_text("name", self.name.as_str());
        element.push_text("level", self.level.to_string());
        element.push_text("school", self.school.as_str());
        if self.ritual {
            element.push_text("ritual", YES);
        }
        element.push_text("time", self.time.as_str());
        element.push_text("range", self.range.as_str());
        element.push_text("components", self.components.as_str());
        element.push_text("duration", self.duration.as_str());
        element.push_text("classes", encode_list(&self.classes));
        encode_paragraphs(&mut element, "text", &self.texts);
        encode_paragraphs(&mut element, "roll", &self.rolls);
        element
    }
}
