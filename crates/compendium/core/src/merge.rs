//! Combining decoded entities: subraces into races, level fragments into levels.

use std::collections::BTreeMap;

use crate::codec::{Codec, decode_number};
use crate::document::Element;
use crate::error::{MergeError, Result};
use crate::model::{Feature, Level, Race, Slots, Subrace};

/// Collapses `autolevel` fragments into one [`Level`] per level number.
///
/// Fragments tagged level 0, or with a missing or unparseable `level`
/// attribute, are skipped. A later `slots` block replaces an earlier one for
/// the same level; features accumulate in encounter order. The result is
/// ascending by level.
pub fn aggregate_levels<'a>(
    fragments: impl IntoIterator<Item = &'a Element>,
) -> Result<Vec<Level>> {
    let mut levels: BTreeMap<u32, Level> = BTreeMap::new();

    for fragment in fragments {
        let number = match decode_number::<u32>(fragment.attr("level")) {
            Some(n) if n > 0 => n,
            _ => continue,
        };
        let level = levels.entry(number).or_insert_with(|| Level::new(number));

        if let Some(slots) = fragment.child(Slots::TAG) {
            level.slots = Slots::decode(slots)?;
        }
        for feature in fragment.children_named(Feature::TAG) {
            level.features.push(Feature::decode(feature)?);
        }
    }

    Ok(levels.into_values().collect())
}

/// Applies every subrace to its base race.
///
/// Races are keyed by name; each subrace, in order, looks its base up among
/// the races and already-combined subraces, and the combined race is stored
/// under its own name (replacing a same-named entry). Output is sorted by
/// name.
pub fn resolve_subraces(
    races: Vec<Race>,
    subraces: &[Subrace],
) -> std::result::Result<Vec<Race>, MergeError> {
    let mut by_name: BTreeMap<String, Race> =
        races.into_iter().map(|r| (r.name.clone(), r)).collect();

    for subrace in subraces {
        let base = by_name
            .get(&subrace.base)
            .ok_or_else(|| MergeError::UnresolvedBaseRace {
                base: subrace.base.clone(),
                subrace: subrace.resolved_name().to_string(),
            })?;
        let combined = subrace.inheriting(base);
        by_name.insert(combined.name.clone(), combined);
    }

    Ok(by_name.into_values().collect())
}
