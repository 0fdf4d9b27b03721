//! Sort specifications and the comparators built from them.
//!
//! A document's sort key is not the per-field minimum. Each path is walked
//! independently, every combination of branches forms a candidate key
//! vector, and the lexicographically smallest candidate (under each field's
//! direction) represents the document.
//!
//! Branches are not restricted by query selectors; callers that need
//! `$elemMatch`-style parity must filter branches themselves.

mod comparator;
mod key;
mod sorter;
mod spec;

#[cfg(test)]
mod tests;

// re-exports
pub use comparator::{
    BaseComparator, ComposedComparator, DistanceComparator, DocumentCompare, compose_comparators,
    with_distance_tie_break,
};
pub use key::{KeyComparator, KeyVector};
pub use sorter::{Sorter, SorterConfig};
pub use spec::{Direction, SortField, SortSpec, SpecElement, SpecLiteral};
