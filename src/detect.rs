//! Detection facade.
//!
//! [`detect`] is the single entry point hosts call, typically on every
//! keystroke of a notes field. It is a pure function of the input text:
//! identical input always yields a structurally identical [`Detection`], so
//! hosts may memoize on the text value alone. The compiled scanner is built
//! once per process and shared; there is no other state.
//!
//! # Examples
//!
//! ```
//! use myotag::detect;
//!
//! let detection = detect("sore knee after the long run");
//!
//! assert!(detection.has_detections());
//! assert_eq!(detection.body_part_count(), 1);
//! assert_eq!(detection.symptom_count(), 1);
//! assert_eq!(detection.issues[0].raw_text, "sore knee");
//! ```

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::analysis::scanner::Scanner;
use crate::analysis::token::{SemanticToken, TokenKind};
use crate::extract::issue::DetectedIssue;
use crate::extract::pairer::extract_issues;

// The lexicon tables are compile-time static and already escaped by the
// pattern compiler, so building the default scanner cannot fail.
static SCANNER: LazyLock<Scanner> =
    LazyLock::new(|| Scanner::new().expect("lexicon tables should compile"));

/// The result of one detection pass over a note.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Detection {
    /// All classified tokens, sorted ascending by start offset
    pub tokens: Vec<SemanticToken>,

    /// Extracted issues, in symptom order with alias fan-out applied
    pub issues: Vec<DetectedIssue>,
}

impl Detection {
    /// Whether the note contained any body-part or symptom mention.
    pub fn has_detections(&self) -> bool {
        !self.tokens.is_empty()
    }

    /// Number of body-part tokens.
    pub fn body_part_count(&self) -> usize {
        self.count_kind(TokenKind::BodyPart)
    }

    /// Number of symptom tokens.
    pub fn symptom_count(&self) -> usize {
        self.count_kind(TokenKind::Symptom)
    }

    fn count_kind(&self, kind: TokenKind) -> usize {
        self.tokens.iter().filter(|t| t.kind == kind).count()
    }
}

/// Analyze a workout note for body-part and symptom mentions.
///
/// Blank input returns an empty [`Detection`] without running the matchers.
/// Never panics or errors for any string input, including text containing
/// regex metacharacters.
pub fn detect(text: &str) -> Detection {
    if text.trim().is_empty() {
        return Detection::default();
    }

    let tokens = SCANNER.scan(text);
    let issues = extract_issues(text, &tokens);

    Detection { tokens, issues }
}
