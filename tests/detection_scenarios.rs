//! End-to-end detection scenarios against the public API.

use myotag::{MuscleGroup, Severity, TokenKind, detect, severity_of};

#[test]
fn detect_is_pure_and_idempotent() {
    let text = "sore knee, wrist tight after deadlifts";
    let first = detect(text);
    let second = detect(text);

    assert_eq!(first, second);
}

#[test]
fn tokens_are_sorted_by_start() {
    let text = "shoulder sore, knee pain, lower back tight, everything hurts";
    let detection = detect(text);

    assert!(
        detection
            .tokens
            .windows(2)
            .all(|pair| pair[0].start <= pair[1].start)
    );
}

#[test]
fn tokens_of_the_same_kind_never_overlap() {
    let text = "back and lower back and upper back, sore sore sore";
    let detection = detect(text);

    for (i, a) in detection.tokens.iter().enumerate() {
        for b in detection.tokens.iter().skip(i + 1) {
            if a.kind == b.kind {
                assert!(a.end <= b.start || b.end <= a.start, "{a:?} overlaps {b:?}");
            }
        }
    }
}

#[test]
fn longest_alias_takes_precedence() {
    let detection = detect("my lower back hurts");

    let body: Vec<_> = detection
        .tokens
        .iter()
        .filter(|t| t.kind == TokenKind::BodyPart)
        .collect();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0].text, "lower back");

    assert!(
        detection
            .issues
            .iter()
            .all(|i| i.body_part == MuscleGroup::LowerBack)
    );
}

#[test]
fn shoulder_pain_fans_out_to_all_three_delts() {
    let detection = detect("shoulder pain");

    assert_eq!(detection.issues.len(), 3);
    let groups: Vec<_> = detection.issues.iter().map(|i| i.body_part).collect();
    assert_eq!(
        groups,
        vec![
            MuscleGroup::FrontDelt,
            MuscleGroup::SideDelt,
            MuscleGroup::RearDelt
        ]
    );
    for issue in &detection.issues {
        assert_eq!(issue.symptom, "pain");
        assert_eq!(issue.raw_text, "shoulder pain");
    }
}

#[test]
fn nearest_pairing_does_not_cross() {
    let detection = detect("knee sore, wrist tight");

    assert_eq!(detection.issues.len(), 2);
    assert_eq!(detection.issues[0].body_part, MuscleGroup::Quads);
    assert_eq!(detection.issues[0].symptom, "sore");
    assert_eq!(detection.issues[1].body_part, MuscleGroup::Forearms);
    assert_eq!(detection.issues[1].symptom, "tight");
}

#[test]
fn dangling_symptom_produces_no_issues() {
    let detection = detect("feeling sore today");

    assert_eq!(detection.symptom_count(), 1);
    assert_eq!(detection.body_part_count(), 0);
    assert!(detection.issues.is_empty());
}

#[test]
fn detection_is_case_insensitive_and_preserves_casing() {
    let detection = detect("TIGHT Shoulder");

    assert_eq!(detection.tokens.len(), 2);
    assert_eq!(detection.tokens[0].text, "TIGHT");
    assert_eq!(detection.tokens[1].text, "Shoulder");

    assert_eq!(detection.issues.len(), 3);
    assert!(detection.issues.iter().all(|i| i.symptom == "tight"));
}

#[test]
fn empty_and_whitespace_input() {
    for text in ["", "   "] {
        let detection = detect(text);
        assert!(detection.tokens.is_empty());
        assert!(detection.issues.is_empty());
        assert!(!detection.has_detections());
    }
}

#[test]
fn token_spans_slice_the_original_text() {
    let text = "Sore QUADS, tight Lower Back & a weak grip";
    let detection = detect(text);

    assert!(detection.has_detections());
    for token in &detection.tokens {
        assert_eq!(&text[token.start..token.end], token.text);
    }
}

#[test]
fn severity_is_looked_up_separately_not_attached() {
    let detection = detect("burning shoulder");

    // Issues never carry severity; callers resolve it from the keyword.
    assert_eq!(detection.issues.len(), 3);
    for issue in &detection.issues {
        assert_eq!(severity_of(&issue.symptom), Some(Severity::Severe));
    }
}

#[test]
fn submission_payload_shape() {
    let detection = detect("knee sore");
    let issue = &detection.issues[0];

    let payload = serde_json::json!({
        "bodyPart": issue.body_part,
        "symptom": issue.symptom,
        "rawText": issue.raw_text,
        "sessionId": "2026-08-30-a",
    });

    assert_eq!(payload["bodyPart"], "quads");
    assert_eq!(payload["symptom"], "sore");
    assert_eq!(payload["rawText"], "knee sore");
}

#[test]
fn multiple_symptoms_share_one_body_part() {
    let detection = detect("hamstring tight and sore");

    assert_eq!(detection.issues.len(), 2);
    assert!(
        detection
            .issues
            .iter()
            .all(|i| i.body_part == MuscleGroup::Hamstrings)
    );
    let symptoms: Vec<_> = detection.issues.iter().map(|i| i.symptom.as_str()).collect();
    assert_eq!(symptoms, vec!["tight", "sore"]);
}

#[test]
fn realistic_note() {
    let text = "Shoulders fine today. Squats 5x5 @ 100kg. Right knee felt \
                sore on the last set, lower back a bit tight.";
    let detection = detect(text);

    assert_eq!(detection.body_part_count(), 3);
    assert_eq!(detection.symptom_count(), 2);

    let pairs: Vec<_> = detection
        .issues
        .iter()
        .map(|i| (i.body_part, i.symptom.as_str()))
        .collect();
    assert!(pairs.contains(&(MuscleGroup::Quads, "sore")));
    assert!(pairs.contains(&(MuscleGroup::LowerBack, "tight")));
}
