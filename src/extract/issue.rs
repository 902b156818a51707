//! Detected body-issue records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lexicon::MuscleGroup;

/// A structured observation extracted from a note.
///
/// One symptom/body-part pairing yields one issue per canonical group the
/// alias expands to, all sharing the same symptom and raw text. Issues carry
/// no severity — callers look it up via
/// [`severity_of`](crate::lexicon::severity_of) before persistence — and no
/// identity beyond their fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedIssue {
    /// Canonical muscle group the issue is recorded against
    pub body_part: MuscleGroup,

    /// The matched symptom keyword, lowercased
    pub symptom: String,

    /// The span of the original text from the earlier of the paired tokens
    /// to the later one, inclusive of everything between
    pub raw_text: String,
}

impl fmt::Display for DetectedIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.symptom, self.body_part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_field_names() {
        let issue = DetectedIssue {
            body_part: MuscleGroup::Quads,
            symptom: "sore".to_string(),
            raw_text: "knee sore".to_string(),
        };

        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["bodyPart"], "quads");
        assert_eq!(json["symptom"], "sore");
        assert_eq!(json["rawText"], "knee sore");
    }

    #[test]
    fn test_display() {
        let issue = DetectedIssue {
            body_part: MuscleGroup::LowerBack,
            symptom: "tight".to_string(),
            raw_text: "tight lower back".to_string(),
        };
        assert_eq!(format!("{issue}"), "tight lower_back");
    }
}
