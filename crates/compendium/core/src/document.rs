//! Owned element tree shared by every entity codec.
//!
//! The tree carries only what the compendium schema uses: an element name,
//! attributes in insertion order, an optional text payload, and ordered child
//! elements. Mixed content is not modelled; text belongs to leaf elements.

/// A single node in a compendium or source document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    /// Creates an empty element with the given tag name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Creates a leaf element carrying `text`.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text payload of this element, if any was present.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Returns the value of attribute `key`.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Sets attribute `key`, replacing an existing value in place.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// First child named `name`.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All children named `name`, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Text of the first child named `name`.
    ///
    /// A present child without text yields `Some("")`, so callers can tell an
    /// empty field from a missing one.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(|c| c.text().unwrap_or(""))
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Appends a leaf child `<name>text</name>`.
    pub fn push_text(&mut self, name: &str, text: impl Into<String>) {
        self.children.push(Element::with_text(name, text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_text_distinguishes_empty_from_missing() {
        let mut race = Element::new("race");
        race.push(Element::new("size"));
        race.push_text("name", "Dwarf");

        assert_eq!(race.child_text("size"), Some(""));
        assert_eq!(race.child_text("name"), Some("Dwarf"));
        assert_eq!(race.child_text("speed"), None);
    }

    #[test]
    fn set_attr_replaces_existing_value() {
        let mut level = Element::new("autolevel");
        level.set_attr("level", "1");
        level.set_attr("level", "2");

        assert_eq!(level.attr("level"), Some("2"));
        assert_eq!(level.attributes().count(), 1);
    }

    #[test]
    fn children_named_preserves_order() {
        let mut feat = Element::new("feat");
        feat.push_text("text", "first");
        feat.push_text("name", "Alert");
        feat.push_text("text", "second");

        let texts: Vec<_> = feat.children_named("text").filter_map(Element::text).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }
}
