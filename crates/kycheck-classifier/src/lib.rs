//! kycheck-classifier
//!
//! Decides whether a verification provider's response means success or
//! failure by scanning its serialized text for negative phrases.
//!
//! The heuristic is deliberately biased toward success on missing evidence:
//! an empty, null, or unrecognised response that contains none of the
//! configured phrases is classified as verified. Callers that need a
//! positive confirmation must check for it themselves.

pub mod classifier;
pub mod classify;
pub mod config;
pub mod error;
pub mod events;

pub use classifier::OutcomeClassifier;
pub use classify::{classify, classify_text, classify_with_defaults};
