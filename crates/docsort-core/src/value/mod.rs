//! Value ordering for document fields.
//!
//! The sort engine treats value comparison as a pluggable strategy
//! ([`ValueOrder`]); [`CanonicalOrder`] is the default.

mod compare;
mod rank;
mod tag;

#[cfg(test)]
mod tests;

use serde_json::Value;

// re-exports
pub use compare::{CanonicalOrder, ValueOrder, canonical_cmp};
pub use rank::canonical_rank;
pub use tag::{ValueTag, canonical_tag};

/// Sentinel compared in place of a field that resolved to nothing.
pub static MISSING: Value = Value::Null;
