//! Document model boundary: field paths, branch lookup, identifiers, and
//! the distance table used by proximity tie-breaks.

mod lookup;
mod path;


use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

// re-exports
pub use lookup::{ArrayIndex, Branch, branches_for, expand_leaf_arrays, lookup};
pub use path::{FieldPath, PathSegment};

///
/// DocumentId
///
/// Stable document identifier, encoded so distinct id values never share
/// a key. String ids are kept verbatim; any other id value is keyed as
/// `~` followed by its compact JSON text, and a string id that itself
/// starts with `~` gains one more `~`.
///

#[derive(
    Clone, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    const MARKER: char = '~';

    /// Read the identifier stored under `id_field`, if any.
    #[must_use]
    pub fn of(document: &Value, id_field: &str) -> Option<Self> {
        document.get(id_field).map(Self::from_value)
    }

    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(text) => Self::from_text(text),
            other => Self(format!("{}{other}", Self::MARKER)),
        }
    }

    fn from_text(text: &str) -> Self {
        if text.starts_with(Self::MARKER) {
            Self(format!("{}{text}", Self::MARKER))
        } else {
            Self(text.to_string())
        }
    }
}

impl From<&str> for DocumentId {
    fn from(value: &str) -> Self {
        Self::from_text(value)
    }
}

impl From<String> for DocumentId {
    fn from(value: String) -> Self {
        if value.starts_with(Self::MARKER) {
            Self::from_text(&value)
        } else {
            Self(value)
        }
    }
}

impl From<&Value> for DocumentId {
    fn from(value: &Value) -> Self {
        Self::from_value(value)
    }
}

///
/// DistanceTable
///
/// Precomputed per-document distances supplied by a proximity search.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DistanceTable(HashMap<DocumentId, f64>);

impl DistanceTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<DocumentId>, distance: f64) -> Option<f64> {
        self.0.insert(id.into(), distance)
    }

    #[must_use]
    pub fn get(&self, id: &DocumentId) -> Option<f64> {
        self.0.get(id).copied()
    }

    #[must_use]
    pub fn contains(&self, id: &DocumentId) -> bool {
        self.0.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<DocumentId>> FromIterator<(K, f64)> for DistanceTable {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(id, d)| (id.into(), d)).collect())
    }
}
