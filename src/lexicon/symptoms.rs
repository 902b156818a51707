//! Symptom keyword table and severity scale.
//!
//! Maps lowercase symptom keywords to a three-level severity. The detection
//! engine only uses the *keys* of this table (to build the symptom matcher);
//! severity is looked up separately by the caller before persistence and is
//! never attached to a detected issue.
//!
//! # Examples
//!
//! ```
//! use myotag::lexicon::{severity_of, Severity};
//!
//! assert_eq!(severity_of("Sharp"), Some(Severity::Severe));
//! assert_eq!(severity_of("tired"), None);
//! ```

use std::sync::LazyLock;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Severity of a reported symptom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Severity {
    /// Minor discomfort (tightness, stiffness)
    Minor = 1,
    /// Moderate discomfort (soreness, cramping)
    Moderate = 2,
    /// Severe symptoms (pain, swelling)
    Severe = 3,
}

impl Severity {
    /// Numeric level, 1 through 3.
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> u8 {
        severity as u8
    }
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Severity::Minor),
            2 => Ok(Severity::Moderate),
            3 => Ok(Severity::Severe),
            other => Err(format!("severity out of range: {other}")),
        }
    }
}

/// Symptom keywords and their severities.
///
/// Keys are lowercase; lookup is case-insensitive but exact (no stemming),
/// so close inflections are listed explicitly.
const SYMPTOM_SEVERITIES: &[(&str, Severity)] = &[
    ("tight", Severity::Minor),
    ("stiff", Severity::Minor),
    ("weak", Severity::Minor),
    ("tense", Severity::Minor),
    ("sore", Severity::Moderate),
    ("ache", Severity::Moderate),
    ("achy", Severity::Moderate),
    ("cramp", Severity::Moderate),
    ("cramping", Severity::Moderate),
    ("tender", Severity::Moderate),
    ("tweaked", Severity::Moderate),
    ("pain", Severity::Severe),
    ("painful", Severity::Severe),
    ("sharp", Severity::Severe),
    ("burning", Severity::Severe),
    ("swollen", Severity::Severe),
    ("hurt", Severity::Severe),
    ("hurts", Severity::Severe),
];

static SYMPTOM_TABLE: LazyLock<AHashMap<&'static str, Severity>> =
    LazyLock::new(|| SYMPTOM_SEVERITIES.iter().copied().collect());

/// Look up the severity for a symptom keyword.
///
/// Returns `None` for words that are not in the symptom table.
pub fn severity_of(keyword: &str) -> Option<Severity> {
    SYMPTOM_TABLE.get(keyword.to_lowercase().as_str()).copied()
}

/// Iterate over every symptom keyword in the table.
///
/// Order is unspecified; the pattern compiler re-sorts by length.
pub fn symptom_keywords() -> impl Iterator<Item = &'static str> {
    SYMPTOM_TABLE.keys().copied()
}
