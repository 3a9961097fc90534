pub mod phrases;
pub mod result;

pub use phrases::NegativePhraseSet;
pub use result::ClassificationResult;
