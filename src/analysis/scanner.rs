//! Dual-class scanner producing the ordered token stream.
//!
//! Runs the body-part matcher and the symptom matcher over the same text and
//! merges their matches into one stream sorted by start offset. A symptom
//! match whose span intersects a body-part match is dropped entirely: it is
//! taken to be a substring artifact of the body-part mention rather than an
//! independent symptom. The reverse never happens — body-part tokens are
//! recorded first and cannot be displaced.
//!
//! # Examples
//!
//! ```
//! use myotag::analysis::scanner::Scanner;
//! use myotag::analysis::token::TokenKind;
//!
//! let scanner = Scanner::new().unwrap();
//! let tokens = scanner.scan("sore knee");
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].kind, TokenKind::Symptom);
//! assert_eq!(tokens[1].kind, TokenKind::BodyPart);
//! ```

use crate::analysis::pattern::KeywordPattern;
use crate::analysis::token::{SemanticToken, TokenKind};
use crate::error::Result;
use crate::lexicon::{body_aliases, groups_of, symptom_keywords};

/// Scans text for body-part and symptom mentions.
///
/// Compile once and reuse; the compiled patterns are immutable and safe to
/// share across threads.
#[derive(Clone, Debug)]
pub struct Scanner {
    body: KeywordPattern,
    symptom: KeywordPattern,
}

impl Scanner {
    /// Build a scanner over the canonical lexicon tables.
    pub fn new() -> Result<Self> {
        Ok(Scanner {
            body: KeywordPattern::compile(body_aliases())?,
            symptom: KeywordPattern::compile(symptom_keywords())?,
        })
    }

    /// Build a scanner from custom compiled patterns.
    ///
    /// Body-part matches from a custom pattern only receive a normalized
    /// group when the matched text is an alias in the canonical table.
    pub fn with_patterns(body: KeywordPattern, symptom: KeywordPattern) -> Self {
        Scanner { body, symptom }
    }

    /// Produce the classified, ordered token stream for `text`.
    ///
    /// Offsets in the returned tokens are byte offsets into `text` itself,
    /// never into a normalized copy, so they are valid for direct slicing
    /// and for highlighting overlays. Blank input short-circuits to an empty
    /// vec without running the matchers.
    pub fn scan(&self, text: &str) -> Vec<SemanticToken> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut tokens: Vec<SemanticToken> = Vec::new();

        for (start, end, matched) in self.body.find_all(text) {
            let normalized = groups_of(matched).and_then(|groups| groups.first().copied());
            tokens.push(SemanticToken {
                text: matched.to_string(),
                kind: TokenKind::BodyPart,
                start,
                end,
                normalized,
            });
        }

        let body_count = tokens.len();
        for (start, end, matched) in self.symptom.find_all(text) {
            let clashes = tokens[..body_count]
                .iter()
                .any(|body| body.intersects(start, end));
            if !clashes {
                tokens.push(SemanticToken::symptom(matched, start, end));
            }
        }

        tokens.sort_by_key(|token| token.start);
        tokens
    }
}
