//! Mechanical modifiers carried by features and feats.

use crate::document::Element;

/// A categorised bonus such as `<modifier category="bonus">ac +1</modifier>`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifier {
    pub category: Option<String>,
    pub value: String,
}

impl Modifier {
    pub const TAG: &'static str = "modifier";

    pub fn new(category: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            value: value.into(),
        }
    }

    /// Returns `None` when either the category attribute or the text is absent.
    pub fn decode(element: &Element) -> Option<Self> {
        let category = element.attr("category")?;
        let value = element.text()?;
        Some(Self {
            category: Some(category.to_string()),
            value: value.to_string(),
        })
    }

    pub fn encode(&self) -> Element {
        let mut element = Element::with_text(Self::TAG, self.value.as_str());
        if let Some(category) = &self.category {
            element.set_attr("category", category.as_str());
        }
        element
    }

    /// Decodes every `modifier` child, skipping the ones that are incomplete.
    pub(crate) fn decode_children(parent: &Element) -> Vec<Self> {
        parent.children_named(Self::TAG).filter_map(Self::decode).collect()
    }
}
