use kycheck_core::models::{ClassificationResult, NegativePhraseSet};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::ClassifyError;

/// Classify a provider response against the given negative phrases.
///
/// The payload is serialized to JSON, lowercased, and padded with one space
/// on each side so that phrases written with boundary spaces (such as
/// `" not "`) also match at the very start or end of the text. A payload
/// that serializes to a bare string is scanned as the string itself,
/// without its JSON quotes. Every phrase that occurs as a substring is
/// reported, in phrase-set order.
///
/// Fails only when the payload cannot be serialized.
pub fn classify<T>(
    payload: &T,
    phrases: &NegativePhraseSet,
) -> Result<ClassificationResult, ClassifyError>
where
    T: Serialize + ?Sized,
{
    let text = match serde_json::to_value(payload)? {
        Value::String(text) => text,
        value => serde_json::to_string(&value)?,
    };
    Ok(classify_text(&text, phrases))
}

/// [`classify`] with the built-in phrase list.
pub fn classify_with_defaults<T>(payload: &T) -> Result<ClassificationResult, ClassifyError>
where
    T: Serialize + ?Sized,
{
    classify(payload, &NegativePhraseSet::default())
}

/// Classify text that is already serialized, e.g. a raw response body.
pub fn classify_text(text: &str, phrases: &NegativePhraseSet) -> ClassificationResult {
    let padded = format!(" {} ", text.to_lowercase());

    let matched: Vec<String> = phrases
        .iter()
        .filter(|phrase| padded.contains(*phrase))
        .map(str::to_string)
        .collect();

    debug!(
        text_len = text.len(),
        phrase_count = phrases.len(),
        matched = matched.len(),
        "classified response text"
    );

    ClassificationResult::from_matches(matched)
}
