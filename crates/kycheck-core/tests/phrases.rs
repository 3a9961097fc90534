use kycheck_core::defaults::DEFAULT_NEGATIVE_PHRASES;
use kycheck_core::error::CoreError;
use kycheck_core::models::{ClassificationResult, NegativePhraseSet};

#[test]
fn default_set_matches_builtin_list() {
    let set = NegativePhraseSet::default();
    assert_eq!(set.len(), DEFAULT_NEGATIVE_PHRASES.len());
    assert!(set.iter().eq(DEFAULT_NEGATIVE_PHRASES.iter().copied()));
}

#[test]
fn builtin_phrases_are_lowercase_and_non_empty() {
    for phrase in DEFAULT_NEGATIVE_PHRASES {
        assert!(!phrase.is_empty());
        assert_eq!(*phrase, phrase.to_lowercase());
    }
}

#[test]
fn new_lowercases_and_keeps_order() {
    let set = NegativePhraseSet::new(["Invalid PAN", "no record", "Invalid PAN"]).unwrap();
    assert_eq!(set.as_slice(), ["invalid pan", "no record", "invalid pan"]);
}

#[test]
fn empty_phrase_is_rejected_with_its_index() {
    let err = NegativePhraseSet::new(["not found", ""]).unwrap_err();
    assert!(matches!(err, CoreError::EmptyPhrase { index: 1 }));
}

#[test]
fn empty_list_is_allowed() {
    let set = NegativePhraseSet::new(Vec::<String>::new()).unwrap();
    assert!(set.is_empty());
}

#[test]
fn deserializes_from_plain_array() {
    let set: NegativePhraseSet = serde_json::from_str(r#"["Not Found", "expired"]"#).unwrap();
    assert_eq!(set.as_slice(), ["not found", "expired"]);

    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, r#"["not found","expired"]"#);
}

#[test]
fn deserialization_rejects_empty_phrase() {
    let result: Result<NegativePhraseSet, _> = serde_json::from_str(r#"["ok", ""]"#);
    assert!(result.is_err());
}

#[test]
fn result_verdict_follows_matches() {
    assert!(ClassificationResult::from_matches(vec![]).verified());

    let failed = ClassificationResult::from_matches(vec!["not found".to_string()]);
    assert!(!failed.verified());
    assert_eq!(failed.matched_phrases(), ["not found"]);
}

#[test]
fn result_serializes_with_camel_case_keys() {
    let result = ClassificationResult::from_matches(vec!["no match".to_string()]);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "verified": false, "matchedPhrases": ["no match"] })
    );
}
