//! kycheck-core
//!
//! Pure domain types for classifying verification-provider responses.
//! No I/O. This is the shared vocabulary of the kycheck crates and the
//! browser client that consumes their results.

pub mod defaults;
pub mod error;
pub mod models;
