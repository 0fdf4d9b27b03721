use crate::{
    DEFAULT_ID_FIELD,
    document::{self, Branch, DistanceTable},
    error::SortError,
    sort::{
        comparator::{
            BaseComparator, ComposedComparator, DocumentCompare, with_distance_tie_break,
        },
        key::{KeyComparator, KeyOdometer, KeyVector},
        spec::SortSpec,
    },
    value::{CanonicalOrder, ValueOrder},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

/// Candidate count past which key enumeration is logged.
const WIDE_FAN_OUT: usize = 64;

///
/// SorterConfig
///
/// Ambient sorter settings, loadable from any serde source.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct SorterConfig {
    /// Document field holding the id looked up in distance tables.
    pub id_field: String,
}

impl Default for SorterConfig {
    fn default() -> Self {
        Self {
            id_field: DEFAULT_ID_FIELD.to_string(),
        }
    }
}

///
/// Sorter
///
/// Compiled sort specification. Builds key vectors for documents and hands
/// out comparators; holds no mutable state, so one sorter can serve any
/// number of concurrent comparisons.
///

#[derive(Clone, Debug)]
pub struct Sorter<O = CanonicalOrder> {
    spec: SortSpec,
    order: O,
    config: SorterConfig,
}

impl Sorter {
    #[must_use]
    pub fn new(spec: SortSpec) -> Self {
        Self {
            spec,
            order: CanonicalOrder,
            config: SorterConfig::default(),
        }
    }

    /// Parse a sort literal straight into a sorter.
    pub fn parse(literal: &Value) -> Result<Self, SortError> {
        SortSpec::parse(literal).map(Self::new)
    }
}

impl<O> Sorter<O> {
    /// Swap the value ordering strategy.
    #[must_use]
    pub fn with_value_order<P: ValueOrder>(self, order: P) -> Sorter<P> {
        Sorter {
            spec: self.spec,
            order,
            config: self.config,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: SorterConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub const fn spec(&self) -> &SortSpec {
        &self.spec
    }

    #[must_use]
    pub const fn config(&self) -> &SorterConfig {
        &self.config
    }

    /// Raw sort paths in precedence order, for index selection and the like.
    #[must_use]
    pub fn paths(&self) -> Vec<&str> {
        self.spec.paths()
    }
}

impl<O: ValueOrder> Sorter<O> {
    #[must_use]
    pub fn key_comparator(&self) -> KeyComparator<'_, O> {
        KeyComparator::new(self.spec.fields(), &self.order)
    }

    /// Compare two key vectors under this spec.
    pub fn compare_keys(&self, left: &[&Value], right: &[&Value]) -> Result<Ordering, SortError> {
        self.key_comparator().compare_keys(left, right)
    }

    /// Sort branches of `document` for every spec field, in spec order.
    pub fn branch_sets<'a>(&self, document: &'a Value) -> Result<Vec<Vec<Branch<'a>>>, SortError> {
        if self.spec.is_empty() {
            return Err(SortError::NoKeys);
        }

        Ok(self
            .spec
            .iter()
            .map(|field| document::branches_for(document, &field.path))
            .collect())
    }

    /// Every candidate key vector of `document`, last field varying fastest.
    pub fn key_vectors<'a>(&self, document: &'a Value) -> Result<Vec<KeyVector<'a>>, SortError> {
        let branch_sets = self.branch_sets(document)?;
        let mut odometer = KeyOdometer::new(radices(&branch_sets));
        let mut keys = Vec::with_capacity(odometer.positions().min(WIDE_FAN_OUT));

        loop {
            keys.push(materialize(&branch_sets, odometer.current()));
            if !odometer.advance() {
                break;
            }
        }

        Ok(keys)
    }

    /// Lexicographically smallest key vector of `document` under the spec's
    /// per-field directions. Ties keep the first candidate enumerated.
    pub fn minimal_key_vector<'a>(&self, document: &'a Value) -> Result<KeyVector<'a>, SortError> {
        let branch_sets = self.branch_sets(document)?;
        let comparator = self.key_comparator();
        let mut odometer = KeyOdometer::new(radices(&branch_sets));

        let candidates = odometer.positions();
        if candidates > WIDE_FAN_OUT {
            tracing::debug!(
                candidates,
                paths = ?self.paths(),
                "enumerating wide key vector fan-out"
            );
        }

        let mut best: Box<[usize]> = odometer.current().into();
        while odometer.advance() {
            let candidate = odometer.current();
            if compare_positions(&comparator, &branch_sets, candidate, &best) == Ordering::Less {
                best.copy_from_slice(candidate);
            }
        }

        Ok(materialize(&branch_sets, &best))
    }

    /// Spec-only document comparator (no tie-break).
    #[must_use]
    pub const fn base_comparator(&self) -> BaseComparator<'_, O> {
        BaseComparator::new(self)
    }

    /// Document comparator; with `distances`, spec ties fall back to the
    /// precomputed distance of each document.
    pub fn comparator<'s>(&'s self, distances: Option<&'s DistanceTable>) -> ComposedComparator<'s>
    where
        O: 's,
    {
        match distances {
            Some(distances) => {
                with_distance_tie_break(self.base_comparator(), distances, &self.config.id_field)
            }
            None => {
                let base: Box<dyn DocumentCompare + 's> = Box::new(self.base_comparator());
                ComposedComparator::new(vec![base])
            }
        }
    }
}

fn radices(branch_sets: &[Vec<Branch<'_>>]) -> Box<[usize]> {
    branch_sets.iter().map(Vec::len).collect()
}

fn materialize<'a>(branch_sets: &[Vec<Branch<'a>>], positions: &[usize]) -> KeyVector<'a> {
    KeyVector::new(
        branch_sets
            .iter()
            .zip(positions)
            .map(|(branches, position)| branches[*position].sort_value())
            .collect(),
    )
}

// Compare two odometer positions without materializing either key.
fn compare_positions<O: ValueOrder>(
    comparator: &KeyComparator<'_, O>,
    branch_sets: &[Vec<Branch<'_>>],
    left: &[usize],
    right: &[usize],
) -> Ordering {
    for (index, branches) in branch_sets.iter().enumerate() {
        let ordering = comparator.compare_field(
            index,
            branches[left[index]].sort_value(),
            branches[right[index]].sort_value(),
        );

        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}
