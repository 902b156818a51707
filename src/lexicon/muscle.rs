//! Canonical muscle group identifiers.
//!
//! Every body-part alias in the lexicon resolves to one or more of these
//! fixed groups. The snake_case string form (`front_delt`, `lower_back`, ...)
//! is the wire format used by serialization, `Display`, and `FromStr`, and is
//! what downstream persistence stores against a session.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MyotagError;

/// A canonical muscle group.
///
/// This is a closed enumeration: free-text aliases ("knee", "shoulder",
/// "lower back") are resolved to these identifiers by the lexicon, never the
/// other way around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Quads,
    Hamstrings,
    Glutes,
    Calves,
    FrontDelt,
    SideDelt,
    RearDelt,
    Biceps,
    Triceps,
    Forearms,
    Chest,
    Lats,
    UpperBack,
    LowerBack,
    Abs,
    Traps,
}

impl MuscleGroup {
    /// All canonical groups, in declaration order.
    pub const ALL: &'static [MuscleGroup] = &[
        MuscleGroup::Quads,
        MuscleGroup::Hamstrings,
        MuscleGroup::Glutes,
        MuscleGroup::Calves,
        MuscleGroup::FrontDelt,
        MuscleGroup::SideDelt,
        MuscleGroup::RearDelt,
        MuscleGroup::Biceps,
        MuscleGroup::Triceps,
        MuscleGroup::Forearms,
        MuscleGroup::Chest,
        MuscleGroup::Lats,
        MuscleGroup::UpperBack,
        MuscleGroup::LowerBack,
        MuscleGroup::Abs,
        MuscleGroup::Traps,
    ];

    /// The snake_case identifier for this group.
    pub fn as_str(&self) -> &'static str {
        match self {
            MuscleGroup::Quads => "quads",
            MuscleGroup::Hamstrings => "hamstrings",
            MuscleGroup::Glutes => "glutes",
            MuscleGroup::Calves => "calves",
            MuscleGroup::FrontDelt => "front_delt",
            MuscleGroup::SideDelt => "side_delt",
            MuscleGroup::RearDelt => "rear_delt",
            MuscleGroup::Biceps => "biceps",
            MuscleGroup::Triceps => "triceps",
            MuscleGroup::Forearms => "forearms",
            MuscleGroup::Chest => "chest",
            MuscleGroup::Lats => "lats",
            MuscleGroup::UpperBack => "upper_back",
            MuscleGroup::LowerBack => "lower_back",
            MuscleGroup::Abs => "abs",
            MuscleGroup::Traps => "traps",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MuscleGroup {
    type Err = MyotagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MuscleGroup::ALL
            .iter()
            .copied()
            .find(|group| group.as_str() == s)
            .ok_or_else(|| MyotagError::UnknownMuscleGroup(s.to_string()))
    }
}
