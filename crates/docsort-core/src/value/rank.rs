use crate::value::tag;
use serde_json::Value;

///
/// Canonical Value Rank
///
/// Stable rank used for cross-type ordering.
///
#[must_use]
pub const fn canonical_rank(value: &Value) -> u8 {
    // Tags are 1-based; rank is 0-based.
    tag::canonical_tag(value).to_u8() - 1
}
