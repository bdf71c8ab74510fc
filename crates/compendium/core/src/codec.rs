//! Primitive field codecs and the per-entity [`Codec`] contract.

use crate::document::Element;
use crate::error::Result;

/// Separator written between list entries.
pub const LIST_SEPARATOR: &str = ", ";

/// The only flag token the compendium schema treats as true.
pub const YES: &str = "YES";

/// Matched decode/encode pair for one entity shape.
///
/// `decode` is lenient about missing children; `encode` reproduces the exact
/// child order the compendium viewer expects.
pub trait Codec: Sized {
    /// Element name this entity is stored under.
    const TAG: &'static str;

    fn decode(element: &Element) -> Result<Self>;

    fn encode(&self) -> Element;

    /// Decodes every direct child of `parent` named [`Self::TAG`].
    fn decode_all(parent: &Element) -> Result<Vec<Self>> {
        parent.children_named(Self::TAG).map(Self::decode).collect()
    }
}

/// Splits a comma-separated field into trimmed entries.
///
/// Missing or blank fields yield an empty list.
pub fn decode_list(text: Option<&str>) -> Vec<String> {
    match text {
        Some(text) if !text.trim().is_empty() => {
            text.split(',').map(|s| s.trim().to_string()).collect()
        }
        _ => Vec::new(),
    }
}

pub fn encode_list(items: &[String]) -> String {
    items.join(LIST_SEPARATOR)
}

/// Only the literal `YES` is true.
pub fn decode_flag(text: Option<&str>) -> bool {
    text == Some(YES)
}

/// Parses a numeric field, treating missing or unparseable text as absent.
pub fn decode_number<T: std::str::FromStr>(text: Option<&str>) -> Option<T> {
    text.and_then(|t| t.trim().parse().ok())
}

/// Collects the text of every child named `name`; empty children become "".
pub fn decode_paragraphs(element: &Element, name: &str) -> Vec<String> {
    element
        .children_named(name)
        .map(|c| c.text().unwrap_or("").to_string())
        .collect()
}

pub fn encode_paragraphs(element: &mut Element, name: &str, paragraphs: &[String]) {
    for paragraph in paragraphs {
        element.push_text(name, paragraph.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_trims_entries() {
        assert_eq!(
            decode_list(Some("Common ,  Elvish,Dwarvish")),
            vec!["Common", "Elvish", "Dwarvish"]
        );
    }

    #[test]
    fn blank_or_missing_list_is_empty() {
        assert!(decode_list(None).is_empty());
        assert!(decode_list(Some("")).is_empty());
        assert!(decode_list(Some("   ")).is_empty());
    }

    #[test]
    fn list_encodes_with_comma_space() {
        let items = vec!["Athletics".to_string(), "Survival".to_string()];
        assert_eq!(encode_list(&items), "Athletics, Survival");
        assert_eq!(encode_list(&[]), "");
    }

    #[test]
    fn only_literal_yes_is_true() {
        assert!(decode_flag(Some("YES")));
        assert!(!decode_flag(Some("yes")));
        assert!(!decode_flag(Some("NO")));
        assert!(!decode_flag(Some("1")));
        assert!(!decode_flag(None));
    }

    #[test]
    fn unparseable_number_is_absent() {
        assert_eq!(decode_number::<u32>(Some(" 12 ")), Some(12));
        assert_eq!(decode_number::<u32>(Some("twelve")), None);
        assert_eq!(decode_number::<u32>(None), None);
    }
}
