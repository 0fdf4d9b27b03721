//! Core runtime for docsort: sort specifications, path-sensitive key
//! extraction, and the document comparators built from them.
//!
//! Documents are `serde_json::Value` trees. Sorting itself is left to the
//! caller; this crate only produces comparators usable by any sort routine.
#![warn(unreachable_pub)]

pub mod document;
pub mod error;
pub mod sort;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// CONSTANTS
///

/// Default document field holding the stable identifier used by the
/// distance tie-break.
pub const DEFAULT_ID_FIELD: &str = "id";

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No helpers or internal comparator parts are re-exported here.
///

pub mod prelude {
    pub use crate::{
        document::{DistanceTable, DocumentId},
        error::SortError,
        sort::{Direction, DocumentCompare, SortSpec, Sorter, SorterConfig},
        value::{CanonicalOrder, ValueOrder},
    };
}
