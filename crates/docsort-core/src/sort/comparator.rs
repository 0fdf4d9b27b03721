use crate::{
    document::{DistanceTable, DocumentId},
    error::SortError,
    sort::sorter::Sorter,
    value::ValueOrder,
};
use serde_json::Value;
use std::{cmp::Ordering, fmt};

///
/// DocumentCompare
///
/// Fallible comparator over two documents. Only the returned ordering's
/// direction matters; equal means neither document sorts first.
///

pub trait DocumentCompare: Send + Sync {
    fn compare(&self, left: &Value, right: &Value) -> Result<Ordering, SortError>;
}

impl<C: DocumentCompare + ?Sized> DocumentCompare for &C {
    fn compare(&self, left: &Value, right: &Value) -> Result<Ordering, SortError> {
        (**self).compare(left, right)
    }
}

impl<C: DocumentCompare + ?Sized> DocumentCompare for Box<C> {
    fn compare(&self, left: &Value, right: &Value) -> Result<Ordering, SortError> {
        (**self).compare(left, right)
    }
}

///
/// BaseComparator
///
/// Orders documents by their minimal key vectors. An empty spec orders
/// nothing: every pair compares equal.
///

#[derive(Debug)]
pub struct BaseComparator<'s, O> {
    sorter: &'s Sorter<O>,
}

impl<O> Clone for BaseComparator<'_, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O> Copy for BaseComparator<'_, O> {}

impl<'s, O> BaseComparator<'s, O> {
    pub(crate) const fn new(sorter: &'s Sorter<O>) -> Self {
        Self { sorter }
    }
}

impl<O: ValueOrder> DocumentCompare for BaseComparator<'_, O> {
    fn compare(&self, left: &Value, right: &Value) -> Result<Ordering, SortError> {
        if self.sorter.spec().is_empty() {
            return Ok(Ordering::Equal);
        }

        let left = self.sorter.minimal_key_vector(left)?;
        let right = self.sorter.minimal_key_vector(right)?;

        self.sorter.compare_keys(&left, &right)
    }
}

///
/// DistanceComparator
///
/// Orders documents by precomputed distance, nearest first. A document
/// without a distance is a broken caller contract, not a tie.
///

#[derive(Clone, Debug)]
pub struct DistanceComparator<'t> {
    distances: &'t DistanceTable,
    id_field: String,
}

impl<'t> DistanceComparator<'t> {
    pub fn new(distances: &'t DistanceTable, id_field: impl Into<String>) -> Self {
        Self {
            distances,
            id_field: id_field.into(),
        }
    }

    fn distance_of(&self, document: &Value) -> Result<f64, SortError> {
        let id = DocumentId::of(document, &self.id_field);
        if let Some(distance) = id.as_ref().and_then(|id| self.distances.get(id)) {
            return Ok(distance);
        }

        let id = id.map_or_else(
            || format!("document without '{}'", self.id_field),
            |id| id.to_string(),
        );
        tracing::warn!(id = %id, "distance tie-break reached a document with no distance");

        Err(SortError::MissingDistance { id })
    }
}

impl DocumentCompare for DistanceComparator<'_> {
    fn compare(&self, left: &Value, right: &Value) -> Result<Ordering, SortError> {
        let left = self.distance_of(left)?;
        let right = self.distance_of(right)?;

        Ok(left
            .partial_cmp(&right)
            .unwrap_or_else(|| left.total_cmp(&right)))
    }
}

///
/// ComposedComparator
///
/// Runs its comparators in order and returns the first non-equal result.
///

pub struct ComposedComparator<'c> {
    parts: Vec<Box<dyn DocumentCompare + 'c>>,
}

impl<'c> ComposedComparator<'c> {
    #[must_use]
    pub fn new(parts: Vec<Box<dyn DocumentCompare + 'c>>) -> Self {
        Self { parts }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl fmt::Debug for ComposedComparator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComposedComparator")
            .field("parts", &self.parts.len())
            .finish()
    }
}

impl DocumentCompare for ComposedComparator<'_> {
    fn compare(&self, left: &Value, right: &Value) -> Result<Ordering, SortError> {
        for part in &self.parts {
            let ordering = part.compare(left, right)?;

            if ordering != Ordering::Equal {
                return Ok(ordering);
            }
        }

        Ok(Ordering::Equal)
    }
}

/// Compose comparators; an empty list compares everything equal.
#[must_use]
pub fn compose_comparators<'c>(parts: Vec<Box<dyn DocumentCompare + 'c>>) -> ComposedComparator<'c> {
    ComposedComparator::new(parts)
}

/// `base`, with ties broken by distance. Distances are only consulted for
/// pairs `base` considers equal.
pub fn with_distance_tie_break<'c, C>(
    base: C,
    distances: &'c DistanceTable,
    id_field: &str,
) -> ComposedComparator<'c>
where
    C: DocumentCompare + 'c,
{
    let base: Box<dyn DocumentCompare + 'c> = Box::new(base);
    let tie_break: Box<dyn DocumentCompare + 'c> =
        Box::new(DistanceComparator::new(distances, id_field));

    compose_comparators(vec![base, tie_break])
}
