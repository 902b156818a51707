//! Body-part alias table.
//!
//! Maps lowercase free-text aliases (what people actually type in workout
//! notes) to one or more canonical muscle groups. Aliases may be exact names
//! ("quads"), joints or regions that imply the surrounding musculature
//! ("knee", "elbow"), or multi-word phrases ("lower back", "hip flexor").
//!
//! The expansion list is ordered: its first element is the representative
//! group used as a token's normalized value for distance pairing. The full
//! list is what the issue extractor fans out into.
//!
//! # Examples
//!
//! ```
//! use myotag::lexicon::{groups_of, MuscleGroup};
//!
//! assert_eq!(groups_of("knee"), Some([MuscleGroup::Quads].as_slice()));
//! assert_eq!(
//!     groups_of("Shoulder"),
//!     Some([MuscleGroup::FrontDelt, MuscleGroup::SideDelt, MuscleGroup::RearDelt].as_slice())
//! );
//! assert_eq!(groups_of("torso"), None);
//! ```

use std::sync::LazyLock;

use ahash::AHashMap;

use super::muscle::MuscleGroup::{self, *};

/// Alias → canonical muscle groups.
///
/// Keys are lowercase and may contain a single internal space. Every
/// expansion list is non-empty.
const BODY_ALIASES: &[(&str, &[MuscleGroup])] = &[
    ("quad", &[Quads]),
    ("quads", &[Quads]),
    ("quadriceps", &[Quads]),
    ("thigh", &[Quads, Hamstrings]),
    ("thighs", &[Quads, Hamstrings]),
    ("knee", &[Quads]),
    ("knees", &[Quads]),
    ("hamstring", &[Hamstrings]),
    ("hamstrings", &[Hamstrings]),
    ("hammy", &[Hamstrings]),
    ("glute", &[Glutes]),
    ("glutes", &[Glutes]),
    ("hip", &[Glutes]),
    ("hips", &[Glutes]),
    ("hip flexor", &[Quads, Abs]),
    ("hip flexors", &[Quads, Abs]),
    ("calf", &[Calves]),
    ("calves", &[Calves]),
    ("ankle", &[Calves]),
    ("ankles", &[Calves]),
    ("shoulder", &[FrontDelt, SideDelt, RearDelt]),
    ("shoulders", &[FrontDelt, SideDelt, RearDelt]),
    ("delt", &[FrontDelt, SideDelt, RearDelt]),
    ("delts", &[FrontDelt, SideDelt, RearDelt]),
    ("rotator cuff", &[RearDelt, SideDelt]),
    ("bicep", &[Biceps]),
    ("biceps", &[Biceps]),
    ("tricep", &[Triceps]),
    ("triceps", &[Triceps]),
    ("elbow", &[Forearms, Triceps]),
    ("elbows", &[Forearms, Triceps]),
    ("forearm", &[Forearms]),
    ("forearms", &[Forearms]),
    ("wrist", &[Forearms]),
    ("wrists", &[Forearms]),
    ("chest", &[Chest]),
    ("pec", &[Chest]),
    ("pecs", &[Chest]),
    ("lat", &[Lats]),
    ("lats", &[Lats]),
    ("upper back", &[UpperBack]),
    ("lower back", &[LowerBack]),
    ("back", &[UpperBack, LowerBack, Lats]),
    ("abs", &[Abs]),
    ("core", &[Abs]),
    ("trap", &[Traps]),
    ("traps", &[Traps]),
    ("neck", &[Traps]),
];

static BODY_TABLE: LazyLock<AHashMap<&'static str, &'static [MuscleGroup]>> =
    LazyLock::new(|| BODY_ALIASES.iter().copied().collect());

/// Look up the canonical muscle groups for a body-part alias.
///
/// Case-insensitive exact lookup; returns `None` for unknown aliases.
pub fn groups_of(alias: &str) -> Option<&'static [MuscleGroup]> {
    BODY_TABLE.get(alias.to_lowercase().as_str()).copied()
}

/// Iterate over every body-part alias in the table.
///
/// Order is unspecified; the pattern compiler re-sorts by length.
pub fn body_aliases() -> impl Iterator<Item = &'static str> {
    BODY_TABLE.keys().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_alias() {
        assert_eq!(groups_of("quads"), Some([Quads].as_slice()));
    }

    #[test]
    fn test_compound_alias_fan_out() {
        assert_eq!(
            groups_of("shoulder"),
            Some([FrontDelt, SideDelt, RearDelt].as_slice())
        );
        assert_eq!(groups_of("elbow"), Some([Forearms, Triceps].as_slice()));
    }

    #[test]
    fn test_multi_word_alias() {
        assert_eq!(groups_of("lower back"), Some([LowerBack].as_slice()));
        assert_eq!(groups_of("rotator cuff"), Some([RearDelt, SideDelt].as_slice()));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(groups_of("KNEE"), Some([Quads].as_slice()));
        assert_eq!(groups_of("Lower Back"), Some([LowerBack].as_slice()));
    }

    #[test]
    fn test_unknown_alias() {
        assert_eq!(groups_of("torso"), None);
        assert_eq!(groups_of(""), None);
    }

    #[test]
    fn test_every_expansion_is_non_empty() {
        for alias in body_aliases() {
            let groups = groups_of(alias).unwrap();
            assert!(!groups.is_empty(), "alias {alias:?} has no groups");
        }
    }
}
