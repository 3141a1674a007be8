//! Serde roundtrip and JsonSchema validation tests for Scout entities.

use chrono::{TimeZone, Utc};
use schemars::schema_for;
use scout_core::entities::*;
use scout_core::enums::Role;
use scout_core::questions::QuestionSet;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn candidate() -> CandidateProfile {
    CandidateProfile {
        name: "Linus".into(),
        email: "linus@example.com".into(),
        phone: "+358 40 000 0000".into(),
        years: 12,
        desired: "Kernel Engineer".into(),
        location: "Portland".into(),
        techstack: "C, Git".into(),
    }
}

fn questions() -> QuestionSet {
    let mut set = QuestionSet::new();
    set.insert(
        "C".into(),
        vec![
            "What is undefined behavior?".into(),
            "Explain volatile.".into(),
        ],
    );
    set.insert("Git".into(), vec!["How does rebase differ from merge?".into()]);
    set
}

roundtrip_and_validate!(candidate_roundtrip, CandidateProfile, candidate());

roundtrip_and_validate!(
    conversation_turn_roundtrip,
    ConversationTurn,
    ConversationTurn {
        role: Role::Assistant,
        text: "Sure, here is a simpler wording.".into(),
    }
);

roundtrip_and_validate!(
    submission_roundtrip,
    SubmissionRecord,
    SubmissionRecord::new(
        candidate(),
        questions(),
        Utc.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap()
    )
);

#[test]
fn submission_has_expected_top_level_keys() {
    let record = SubmissionRecord::new(candidate(), questions(), Utc::now());
    let value = serde_json::to_value(&record).unwrap();
    let mut keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(keys, ["candidate", "questions", "ts"]);
}

#[test]
fn submission_questions_keep_declared_order() {
    let mut set = QuestionSet::new();
    for tech in ["Zig", "Ada", "Nim"] {
        set.insert(tech.into(), vec![format!("Why {tech}?")]);
    }
    let record = SubmissionRecord::new(candidate(), set, Utc::now());
    let json = serde_json::to_string(&record).unwrap();
    let recovered: SubmissionRecord = serde_json::from_str(&json).unwrap();
    let keys: Vec<&str> = recovered.questions.keys().map(String::as_str).collect();
    assert_eq!(keys, ["Zig", "Ada", "Nim"]);
}
