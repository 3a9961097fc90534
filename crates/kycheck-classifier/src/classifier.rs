use std::collections::BTreeMap;

use kycheck_core::models::{ClassificationResult, NegativePhraseSet};
use serde::Serialize;
use tracing::debug;

use crate::classify::{classify, classify_text};
use crate::error::ClassifyError;

/// A classifier bound to a phrase configuration.
///
/// Holds the base phrase set plus optional per-provider replacements. The
/// configuration is fixed at construction; classifying never mutates it, so
/// one instance can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct OutcomeClassifier {
    phrases: NegativePhraseSet,
    providers: BTreeMap<String, NegativePhraseSet>,
}

impl OutcomeClassifier {
    pub fn new(phrases: NegativePhraseSet) -> Self {
        Self {
            phrases,
            providers: BTreeMap::new(),
        }
    }

    /// Replace the phrase list used for responses from `provider`.
    pub fn with_provider(mut self, provider: impl Into<String>, phrases: NegativePhraseSet) -> Self {
        self.providers.insert(provider.into(), phrases);
        self
    }

    pub fn phrases(&self) -> &NegativePhraseSet {
        &self.phrases
    }

    /// The phrase set for `provider`, falling back to the base set.
    pub fn phrases_for(&self, provider: &str) -> &NegativePhraseSet {
        self.providers.get(provider).unwrap_or(&self.phrases)
    }

    pub fn providers(&self) -> impl Iterator<Item = &str> {
        self.providers.keys().map(String::as_str)
    }

    pub fn classify<T>(&self, payload: &T) -> Result<ClassificationResult, ClassifyError>
    where
        T: Serialize + ?Sized,
    {
        let result = classify(payload, &self.phrases)?;
        log_failure(None, &result);
        Ok(result)
    }

    /// Classify using the phrase set configured for `provider`.
    ///
    /// Providers without an override use the base set.
    pub fn classify_for<T>(
        &self,
        provider: &str,
        payload: &T,
    ) -> Result<ClassificationResult, ClassifyError>
    where
        T: Serialize + ?Sized,
    {
        let result = classify(payload, self.phrases_for(provider))?;
        log_failure(Some(provider), &result);
        Ok(result)
    }

    pub fn classify_text(&self, text: &str) -> ClassificationResult {
        let result = classify_text(text, &self.phrases);
        log_failure(None, &result);
        result
    }

    pub fn classify_text_for(&self, provider: &str, text: &str) -> ClassificationResult {
        let result = classify_text(text, self.phrases_for(provider));
        log_failure(Some(provider), &result);
        result
    }
}

fn log_failure(provider: Option<&str>, result: &ClassificationResult) {
    if !result.verified() {
        debug!(
            provider = provider.unwrap_or("default"),
            matched = ?result.matched_phrases(),
            "verification response contains negative phrases"
        );
    }
}
