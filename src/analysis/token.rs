//! Semantic token types produced by the scanner.
//!
//! A [`SemanticToken`] is a classified substring occurrence: the exact text
//! that matched (original casing preserved), its byte span within the source
//! string, and its class. Body-part tokens additionally carry a normalized
//! muscle group used for distance pairing.
//!
//! # Examples
//!
//! ```
//! use myotag::analysis::token::{SemanticToken, TokenKind};
//! use myotag::lexicon::MuscleGroup;
//!
//! let token = SemanticToken::body_part("Knee", 3, 7, MuscleGroup::Quads);
//! assert_eq!(token.text, "Knee");
//! assert_eq!(token.kind, TokenKind::BodyPart);
//! assert_eq!(token.normalized, Some(MuscleGroup::Quads));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lexicon::MuscleGroup;

/// Classification of a matched substring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    /// A body-part alias mention ("knee", "lower back")
    BodyPart,
    /// A symptom keyword mention ("sore", "tight")
    Symptom,
}

/// A classified substring occurrence within the scanned text.
///
/// # Fields
///
/// - `text` - The exact matched substring, original casing preserved
/// - `kind` - Token class (body part or symptom)
/// - `start` / `end` - Half-open byte offsets into the *original* text,
///   valid for direct slicing (`&text[start..end]`)
/// - `normalized` - For body-part tokens, the first canonical group the
///   matched alias expands to; `None` for symptom tokens. Only used for
///   distance pairing, not as the authoritative alias mapping.
///
/// Tokens of the same kind never overlap, and a scanner's combined output is
/// sorted ascending by `start`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticToken {
    /// The matched substring
    pub text: String,

    /// Token classification
    pub kind: TokenKind,

    /// Byte offset where the match starts in the original text
    pub start: usize,

    /// Byte offset where the match ends (exclusive)
    pub end: usize,

    /// Representative muscle group for body-part tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<MuscleGroup>,
}

impl SemanticToken {
    /// Create a body-part token with its representative muscle group.
    pub fn body_part<S: Into<String>>(
        text: S,
        start: usize,
        end: usize,
        normalized: MuscleGroup,
    ) -> Self {
        SemanticToken {
            text: text.into(),
            kind: TokenKind::BodyPart,
            start,
            end,
            normalized: Some(normalized),
        }
    }

    /// Create a symptom token.
    pub fn symptom<S: Into<String>>(text: S, start: usize, end: usize) -> Self {
        SemanticToken {
            text: text.into(),
            kind: TokenKind::Symptom,
            start,
            end,
            normalized: None,
        }
    }

    /// Length of the matched text in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check whether the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check whether this token's span intersects another span.
    ///
    /// Partial and full overlap both count; adjacency (`self.end ==
    /// other.start`) does not.
    pub fn intersects(&self, start: usize, end: usize) -> bool {
        self.start < end && start < self.end
    }
}

impl fmt::Display for SemanticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
