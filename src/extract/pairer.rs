//! Nearest-neighbor pairing of symptoms to body parts.
//!
//! Each symptom token is paired with the body-part token whose span is
//! closest in the text, then fanned out into one issue per canonical group
//! the winning alias expands to. Distance is the character gap between the
//! nearer pair of span edges; overlap between the two classes has already
//! been excluded by the scanner, so the gap is never negative.

use crate::analysis::token::{SemanticToken, TokenKind};
use crate::extract::issue::DetectedIssue;
use crate::lexicon::groups_of;

/// Convert a scanned token stream into issue records.
///
/// Symptoms are processed left to right. For each one, every body-part token
/// is scored by `min(|s.start - b.end|, |b.start - s.end|)` and the strictly
/// smallest distance wins, so ties go to the leftmost body-part token. A
/// symptom with no body-part token anywhere in the text is dropped silently.
///
/// `text` must be the same string the tokens were scanned from; the raw text
/// of each issue is sliced directly out of it.
pub fn extract_issues(text: &str, tokens: &[SemanticToken]) -> Vec<DetectedIssue> {
    let body_parts: Vec<&SemanticToken> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::BodyPart)
        .collect();

    let mut issues = Vec::new();

    for symptom in tokens.iter().filter(|t| t.kind == TokenKind::Symptom) {
        let Some(nearest) = nearest_body_part(symptom, &body_parts) else {
            continue;
        };

        let Some(groups) = groups_of(&nearest.text) else {
            continue;
        };

        let start = symptom.start.min(nearest.start);
        let end = symptom.end.max(nearest.end);
        let raw_text = &text[start..end];
        let keyword = symptom.text.to_lowercase();

        for group in groups {
            issues.push(DetectedIssue {
                body_part: *group,
                symptom: keyword.clone(),
                raw_text: raw_text.to_string(),
            });
        }
    }

    issues
}

/// Find the body-part token nearest to `symptom`, leftmost on ties.
fn nearest_body_part<'a>(
    symptom: &SemanticToken,
    body_parts: &[&'a SemanticToken],
) -> Option<&'a SemanticToken> {
    let mut best: Option<(&SemanticToken, usize)> = None;

    for &body in body_parts {
        let distance = span_gap(symptom, body);
        match best {
            Some((_, smallest)) if distance >= smallest => {}
            _ => best = Some((body, distance)),
        }
    }

    best.map(|(token, _)| token)
}

/// Character gap between the nearer pair of span edges. Zero when the spans
/// touch; the scanner guarantees cross-class spans never overlap.
fn span_gap(a: &SemanticToken, b: &SemanticToken) -> usize {
    a.start.abs_diff(b.end).min(b.start.abs_diff(a.end))
}
