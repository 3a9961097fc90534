//! Built-in negative phrases.
//!
//! Every entry is lowercase. Entries that begin or end with a space only
//! match at a word boundary (or at the edge of the padded text).

/// Phrases whose presence anywhere in a provider response marks the
/// verification as failed.
pub const DEFAULT_NEGATIVE_PHRASES: &[&str] = &[
    // Non-existence
    "not found",
    "no record",
    "no match",
    "no data found",
    "does not exist",
    "does not match",
    "do not match",
    "mismatch",
    // Verification and validation wording
    "not verified",
    "verification failed",
    "unable to verify",
    "could not be verified",
    "validation failed",
    "invalid",
    " not ",
    // Account state
    "account blocked",
    "account suspended",
    "account inactive",
    "account closed",
    "account deactivated",
    // Expiry
    "document expired",
    "subscription expired",
    "plan expired",
    "plan cancelled",
    "plan canceled",
];
