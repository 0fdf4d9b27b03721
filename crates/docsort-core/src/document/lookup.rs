use crate::{
    document::path::{FieldPath, PathSegment},
    value::MISSING,
};
use serde_json::Value;

///
/// ArrayIndex
///
/// How a branch stepped through one array on its way to the leaf.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ArrayIndex {
    /// Fan-out over every element of an array.
    Branch(usize),
    /// Explicit numeric path segment.
    Explicit(usize),
}

///
/// Branch
///
/// One value reachable at a path through one combination of array
/// choices. `value == None` means the path resolved to nothing.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Branch<'a> {
    pub value: Option<&'a Value>,
    pub array_indices: Vec<ArrayIndex>,
    /// Array reached through an explicit index into an outer array.
    /// Such arrays are compared whole instead of being expanded.
    pub dont_iterate: bool,
}

impl<'a> Branch<'a> {
    const fn missing(array_indices: Vec<ArrayIndex>) -> Self {
        Self {
            value: None,
            array_indices,
            dont_iterate: false,
        }
    }

    /// Value this branch contributes to a sort key.
    #[must_use]
    pub fn sort_value(&self) -> &'a Value {
        self.value.unwrap_or(&MISSING)
    }
}

/// Every branch a path reaches in `document`, before leaf-array expansion.
#[must_use]
pub fn lookup<'a>(document: &'a Value, path: &FieldPath) -> Vec<Branch<'a>> {
    let mut branches = Vec::new();
    lookup_segments(document, path.segments(), Vec::new(), &mut branches);

    branches
}

/// Sort branches for `path`: lookup, one level of leaf-array expansion, and
/// a single missing branch when nothing survives. Never empty.
#[must_use]
pub fn branches_for<'a>(document: &'a Value, path: &FieldPath) -> Vec<Branch<'a>> {
    let mut branches = expand_leaf_arrays(lookup(document, path));
    if branches.is_empty() {
        branches.push(Branch::missing(Vec::new()));
    }

    branches
}

/// Replace each iterable array branch by its elements. The array itself is
/// dropped: arrays are never sort keys unless reached by explicit index.
#[must_use]
pub fn expand_leaf_arrays(branches: Vec<Branch<'_>>) -> Vec<Branch<'_>> {
    let mut expanded = Vec::with_capacity(branches.len());

    for branch in branches {
        match branch.value {
            Some(Value::Array(items)) if !branch.dont_iterate => {
                for (index, leaf) in items.iter().enumerate() {
                    let mut array_indices = branch.array_indices.clone();
                    array_indices.push(ArrayIndex::Branch(index));

                    expanded.push(Branch {
                        value: Some(leaf),
                        array_indices,
                        dont_iterate: false,
                    });
                }
            }
            _ => expanded.push(branch),
        }
    }

    expanded
}

fn lookup_segments<'a>(
    document: &'a Value,
    segments: &[PathSegment],
    mut array_indices: Vec<ArrayIndex>,
    out: &mut Vec<Branch<'a>>,
) {
    let Some((segment, rest)) = segments.split_first() else {
        return;
    };

    // Arrays only answer explicit in-bounds indexes; anything else is no result.
    let first = match document {
        Value::Array(items) => {
            let Some(index) = segment.index().filter(|index| *index < items.len()) else {
                return;
            };
            array_indices.push(ArrayIndex::Explicit(index));
            items.get(index)
        }
        Value::Object(map) => map.get(segment.name()),
        _ => None,
    };
    let document_is_array = document.is_array();

    if rest.is_empty() {
        out.push(Branch {
            value: first,
            dont_iterate: document_is_array && first.is_some_and(Value::is_array),
            array_indices,
        });
        return;
    }

    let Some(first) = first.filter(|value| is_indexable(value)) else {
        // Digging through an explicit index finds nothing, not a missing value.
        if !document_is_array {
            out.push(Branch::missing(array_indices));
        }
        return;
    };

    lookup_segments(first, rest, array_indices.clone(), out);

    // Also branch into every object element of an array, in parallel with
    // the explicit-index reading above.
    if let Value::Array(items) = first {
        for (index, item) in items.iter().enumerate() {
            if item.is_object() {
                let mut branch_indices = array_indices.clone();
                branch_indices.push(ArrayIndex::Branch(index));
                lookup_segments(item, rest, branch_indices, out);
            }
        }
    }
}

const fn is_indexable(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}
