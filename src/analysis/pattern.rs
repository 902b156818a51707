//! Keyword pattern compilation.
//!
//! Builds one compiled matcher per token class from the keys of a lexicon
//! table: a case-insensitive, word-bounded alternation with the keys ordered
//! longest-first. The ordering is load-bearing, not stylistic — the regex
//! crate's alternation prefers the leftmost branch, so "lower back" must
//! appear before "back" or the shorter alias would shadow the longer one.

use regex::{Regex, RegexBuilder};

use crate::error::{MyotagError, Result};

/// A compiled multi-keyword matcher for one token class.
#[derive(Clone, Debug)]
pub struct KeywordPattern {
    regex: Regex,
}

impl KeywordPattern {
    /// Compile a matcher from a set of keywords.
    ///
    /// Every keyword is regex-escaped, so table entries containing
    /// metacharacters are matched as literal text. An empty keyword set is
    /// rejected: a blank alternation always indicates a broken table.
    pub fn compile<'a, I>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut keys: Vec<&str> = keywords.into_iter().collect();
        if keys.is_empty() {
            return Err(MyotagError::pattern("cannot compile an empty keyword set"));
        }

        // Longest first, so multi-word keys win over their embedded suffixes.
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let alternation = keys
            .iter()
            .map(|key| regex::escape(key))
            .collect::<Vec<_>>()
            .join("|");

        let regex = RegexBuilder::new(&format!(r"\b(?:{alternation})\b"))
            .case_insensitive(true)
            .build()
            .map_err(|e| MyotagError::pattern(format!("invalid keyword alternation: {e}")))?;

        Ok(KeywordPattern { regex })
    }

    /// Find all non-overlapping matches in `text`, as `(start, end, matched)`
    /// triples with byte offsets into `text`.
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<(usize, usize, &'t str)> {
        self.regex
            .find_iter(text)
            .map(|mat| (mat.start(), mat.end(), mat.as_str()))
            .collect()
    }

    /// The underlying regex source, for debugging.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
