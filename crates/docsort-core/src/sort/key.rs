use crate::{
    error::SortError,
    sort::spec::{Direction, SortField},
    value::ValueOrder,
};
use derive_more::Deref;
use serde_json::Value;
use std::cmp::Ordering;

///
/// KeyVector
///
/// One candidate sort key: a value per sort field, taken from one
/// combination of branches.
///

#[derive(Clone, Debug, Deref, Eq, PartialEq)]
pub struct KeyVector<'a>(Vec<&'a Value>);

impl<'a> KeyVector<'a> {
    #[must_use]
    pub const fn new(values: Vec<&'a Value>) -> Self {
        Self(values)
    }
}

///
/// KeyComparator
///
/// Compound comparator over key vectors: field comparators run in spec
/// order and the first non-equal result wins.
///

#[derive(Debug)]
pub struct KeyComparator<'s, O> {
    fields: &'s [SortField],
    order: &'s O,
}

impl<O> Clone for KeyComparator<'_, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O> Copy for KeyComparator<'_, O> {}

impl<'s, O: ValueOrder> KeyComparator<'s, O> {
    pub(crate) const fn new(fields: &'s [SortField], order: &'s O) -> Self {
        Self { fields, order }
    }

    /// Compare two key vectors; both must be exactly as wide as the spec.
    pub fn compare_keys(&self, left: &[&Value], right: &[&Value]) -> Result<Ordering, SortError> {
        self.check_width(left)?;
        self.check_width(right)?;

        Ok(self.compare_unchecked(left, right))
    }

    /// Comparator over field `index` alone, direction applied.
    ///
    /// Keys are width-checked like `compare_keys`; an `index` outside the
    /// spec is reported as a `KeyLength` failure on every call.
    pub fn field_comparator(
        self,
        index: usize,
    ) -> impl Fn(&[&Value], &[&Value]) -> Result<Ordering, SortError> + 's {
        move |left: &[&Value], right: &[&Value]| {
            self.check_width(left)?;
            self.check_width(right)?;

            match (left.get(index), right.get(index)) {
                (Some(left), Some(right)) => Ok(self.compare_field(index, left, right)),
                _ => Err(SortError::KeyLength {
                    expected: index + 1,
                    found: self.fields.len(),
                }),
            }
        }
    }

    fn check_width(&self, key: &[&Value]) -> Result<(), SortError> {
        if key.len() == self.fields.len() {
            Ok(())
        } else {
            Err(SortError::KeyLength {
                expected: self.fields.len(),
                found: key.len(),
            })
        }
    }

    // Direction-aware comparison of one field's values.
    pub(crate) fn compare_field(&self, index: usize, left: &Value, right: &Value) -> Ordering {
        let ordering = self.order.compare(left, right);

        apply_order_direction(ordering, self.fields[index].direction)
    }

    fn compare_unchecked(&self, left: &[&Value], right: &[&Value]) -> Ordering {
        for (index, (left, right)) in left.iter().zip(right.iter()).enumerate() {
            let ordering = self.compare_field(index, left, right);

            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        Ordering::Equal
    }
}

const fn apply_order_direction(ordering: Ordering, direction: Direction) -> Ordering {
    match direction {
        Direction::Asc => ordering,
        Direction::Desc => ordering.reverse(),
    }
}

///
/// KeyOdometer
///
/// Mixed-radix counter over per-field branch indexes. The last field turns
/// fastest; enumeration ends on carry out of the first field.
///

#[derive(Debug)]
pub(crate) struct KeyOdometer {
    radices: Box<[usize]>,
    counters: Box<[usize]>,
}

impl KeyOdometer {
    // Every radix must be at least one.
    pub(crate) fn new(radices: Box<[usize]>) -> Self {
        debug_assert!(radices.iter().all(|radix| *radix > 0));
        let counters = vec![0; radices.len()].into_boxed_slice();

        Self { radices, counters }
    }

    pub(crate) fn current(&self) -> &[usize] {
        &self.counters
    }

    /// Number of positions the odometer visits, saturating.
    pub(crate) fn positions(&self) -> usize {
        self.radices
            .iter()
            .fold(1usize, |total, radix| total.saturating_mul(*radix))
    }

    /// Step to the next position; `false` once every position was visited.
    pub(crate) fn advance(&mut self) -> bool {
        for slot in (0..self.counters.len()).rev() {
            if self.counters[slot] + 1 < self.radices[slot] {
                self.counters[slot] += 1;
                return true;
            }
            self.counters[slot] = 0;
        }

        false
    }
}
