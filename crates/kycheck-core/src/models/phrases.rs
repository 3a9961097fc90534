use serde::{Deserialize, Serialize};

use crate::defaults::DEFAULT_NEGATIVE_PHRASES;
use crate::error::CoreError;

/// An ordered list of lowercase phrases that indicate a failed verification.
///
/// Phrases are matched as plain substrings of the padded, lowercased
/// response text. Order is preserved so that matches are reported in the
/// order the caller configured them. Duplicates are kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct NegativePhraseSet {
    phrases: Vec<String>,
}

impl NegativePhraseSet {
    /// Build a set from caller-supplied phrases, lowercasing each one.
    ///
    /// Returns [`CoreError::EmptyPhrase`] if any phrase is the empty string,
    /// since an empty phrase would match every payload.
    pub fn new<I, S>(phrases: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases = phrases
            .into_iter()
            .enumerate()
            .map(|(index, phrase)| {
                let phrase: String = phrase.into();
                if phrase.is_empty() {
                    Err(CoreError::EmptyPhrase { index })
                } else {
                    Ok(phrase.to_lowercase())
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { phrases })
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

impl Default for NegativePhraseSet {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_NEGATIVE_PHRASES
                .iter()
                .map(|p| (*p).to_string())
                .collect(),
        }
    }
}

impl TryFrom<Vec<String>> for NegativePhraseSet {
    type Error = CoreError;

    fn try_from(phrases: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(phrases)
    }
}

impl From<NegativePhraseSet> for Vec<String> {
    fn from(set: NegativePhraseSet) -> Self {
        set.phrases
    }
}
