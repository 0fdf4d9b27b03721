use crate::sort::{DocumentCompare, SortSpec, Sorter};
use serde_json::Value;
use std::cmp::Ordering;

/// Install a test-writer subscriber once; later calls are no-ops.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("docsort_core=trace"))
        .with_test_writer()
        .try_init();
}

pub(crate) fn sorter(literal: &Value) -> Sorter {
    Sorter::new(SortSpec::parse(literal).expect("test sort literal should parse"))
}

pub(crate) fn cmp(comparator: &impl DocumentCompare, left: &Value, right: &Value) -> Ordering {
    comparator
        .compare(left, right)
        .expect("test comparison should succeed")
}

/// Sort `documents` with `comparator` and return their `id` fields in order.
pub(crate) fn sorted_ids(comparator: &impl DocumentCompare, mut documents: Vec<Value>) -> Vec<Value> {
    documents.sort_by(|left, right| cmp(comparator, left, right));

    documents
        .into_iter()
        .map(|document| document.get("id").cloned().unwrap_or(Value::Null))
        .collect()
}
