use kycheck_core::models::ClassificationResult;
use serde::Serialize;
use tracing::info;

/// A structured record of one verdict, for the host service's log pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct VerdictEvent {
    pub provider: Option<String>,
    pub verified: bool,
    pub matched_phrases: Vec<String>,
    /// Length in bytes of the response body as received by the caller.
    pub payload_len: usize,
}

impl VerdictEvent {
    pub fn new(result: &ClassificationResult, payload_len: usize) -> Self {
        Self {
            provider: None,
            verified: result.verified(),
            matched_phrases: result.matched_phrases().to_vec(),
            payload_len,
        }
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Emit this event via tracing.
    pub fn emit(&self) {
        info!(
            verdict.provider = self.provider.as_deref().unwrap_or("default"),
            verdict.verified = self.verified,
            verdict.matched = ?self.matched_phrases,
            verdict.payload_len = self.payload_len,
            "verdict"
        );
    }
}
