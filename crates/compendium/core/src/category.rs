//! Content categories and their order in the compendium.

/// A kind of source document feeding the compendium.
///
/// Variant order is the order categories appear in the output.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Category {
    Classes,
    /// Races and subraces share one document.
    Races,
    Backgrounds,
    Feats,
    Spells,
}

impl Category {
    /// Every category, in output order.
    pub fn all() -> Vec<Category> {
        use strum::IntoEnumIterator;
        Category::iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Races".parse::<Category>().unwrap(), Category::Races);
        assert_eq!("spells".parse::<Category>().unwrap(), Category::Spells);
        assert!("monsters".parse::<Category>().is_err());
    }

    #[test]
    fn classes_come_first() {
        assert_eq!(
            Category::all(),
            vec![
                Category::Classes,
                Category::Races,
                Category::Backgrounds,
                Category::Feats,
                Category::Spells
            ]
        );
        assert_eq!(Category::Backgrounds.to_string(), "backgrounds");
    }
}
