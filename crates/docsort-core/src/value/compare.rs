use crate::value::rank::canonical_rank;
use serde_json::{Map, Number, Value};
use std::cmp::Ordering;

///
/// ValueOrder
///
/// Total-order value comparator consumed by the sort engine.
///
/// Implementations must be a consistent total order (transitive and
/// antisymmetric) over every value they are handed, including the `null`
/// that stands in for missing fields.
///

pub trait ValueOrder: Send + Sync {
    fn compare(&self, left: &Value, right: &Value) -> Ordering;
}

impl<F> ValueOrder for F
where
    F: Fn(&Value, &Value) -> Ordering + Send + Sync,
{
    fn compare(&self, left: &Value, right: &Value) -> Ordering {
        self(left, right)
    }
}

///
/// CanonicalOrder
///
/// Default value ordering: database-native type rank first, then a
/// type-specific comparison.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CanonicalOrder;

impl ValueOrder for CanonicalOrder {
    fn compare(&self, left: &Value, right: &Value) -> Ordering {
        canonical_cmp(left, right)
    }
}

/// Total canonical comparator over document values.
///
/// Ordering rules:
/// 1. Type rank (`null < numbers < strings < objects < arrays < booleans`)
/// 2. Type-specific comparison for same-ranked values
#[must_use]
pub fn canonical_cmp(left: &Value, right: &Value) -> Ordering {
    let rank = canonical_rank(left).cmp(&canonical_rank(right));
    if rank != Ordering::Equal {
        return rank;
    }

    canonical_cmp_same_rank(left, right)
}

fn canonical_cmp_same_rank(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => canonical_cmp_number(a, b),
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Object(a), Value::Object(b)) => canonical_cmp_object(a, b),
        (Value::Array(a), Value::Array(b)) => canonical_cmp_array(a, b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

// Integers compare exactly, including against floats. Float pairs use
// IEEE equality so `-0.0` and `0.0` tie as they do with integer zero.
fn canonical_cmp_number(left: &Number, right: &Number) -> Ordering {
    match (number_as_i128(left), number_as_i128(right)) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(left), None) => cmp_int_float(left, number_as_f64(right)),
        (None, Some(right)) => cmp_int_float(right, number_as_f64(left)).reverse(),
        (None, None) => {
            let (left, right) = (number_as_f64(left), number_as_f64(right));
            left.partial_cmp(&right).unwrap_or_else(|| left.total_cmp(&right))
        }
    }
}

// 2^127: the first float above every i128.
const I128_UPPER: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

// Exact integer/float comparison without rounding the integer to f64.
#[expect(clippy::cast_possible_truncation)]
fn cmp_int_float(int: i128, float: f64) -> Ordering {
    if float.is_nan() {
        return Ordering::Less;
    }
    if float >= I128_UPPER {
        return Ordering::Less;
    }
    if float < -I128_UPPER {
        return Ordering::Greater;
    }

    let floor = float.floor();
    int.cmp(&(floor as i128)).then_with(|| {
        if float > floor {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    })
}

fn number_as_i128(number: &Number) -> Option<i128> {
    number
        .as_i64()
        .map(i128::from)
        .or_else(|| number.as_u64().map(i128::from))
}

fn number_as_f64(number: &Number) -> f64 {
    number.as_f64().unwrap_or(f64::NAN)
}

fn canonical_cmp_array(left: &[Value], right: &[Value]) -> Ordering {
    for (left, right) in left.iter().zip(right.iter()) {
        let cmp = canonical_cmp(left, right);
        if cmp != Ordering::Equal {
            return cmp;
        }
    }

    left.len().cmp(&right.len())
}

// Entry order is document order; a strict prefix sorts first.
fn canonical_cmp_object(left: &Map<String, Value>, right: &Map<String, Value>) -> Ordering {
    for ((left_key, left_value), (right_key, right_value)) in left.iter().zip(right.iter()) {
        let key_cmp = left_key.cmp(right_key);
        if key_cmp != Ordering::Equal {
            return key_cmp;
        }

        let value_cmp = canonical_cmp(left_value, right_value);
        if value_cmp != Ordering::Equal {
            return value_cmp;
        }
    }

    left.len().cmp(&right.len())
}
