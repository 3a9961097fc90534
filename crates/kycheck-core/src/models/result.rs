use serde::Serialize;
use ts_rs::TS;

/// The verdict for a single provider response, with the evidence behind it.
///
/// `verified` is `false` exactly when `matched_phrases` is non-empty. An
/// empty, null, or unrecognised response carries no evidence of failure
/// and is therefore reported as verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ClassificationResult {
    verified: bool,
    /// Matching phrases, in configured phrase order.
    matched_phrases: Vec<String>,
}

impl ClassificationResult {
    pub fn from_matches(matched_phrases: Vec<String>) -> Self {
        Self {
            verified: matched_phrases.is_empty(),
            matched_phrases,
        }
    }

    pub fn verified(&self) -> bool {
        self.verified
    }

    pub fn matched_phrases(&self) -> &[String] {
        &self.matched_phrases
    }
}
