use crate::value::{
    CanonicalOrder, MISSING, ValueOrder, ValueTag, canonical_cmp, canonical_rank, canonical_tag,
};
use serde_json::{Value, json};
use std::cmp::Ordering;

// ---- helpers -----------------------------------------------------------

fn sample_per_tag() -> Vec<Value> {
    vec![
        json!(null),
        json!(-3),
        json!("abc"),
        json!({"a": 1}),
        json!([1, 2]),
        json!(false),
    ]
}

// ---- type ordering ------------------------------------------------------

#[test]
fn type_rank_follows_database_order() {
    let values = sample_per_tag();

    for window in values.windows(2) {
        assert_eq!(
            canonical_cmp(&window[0], &window[1]),
            Ordering::Less,
            "{:?} should sort before {:?}",
            window[0],
            window[1],
        );
    }
}

#[test]
fn tags_are_stable() {
    assert_eq!(canonical_tag(&json!(null)), ValueTag::Null);
    assert_eq!(canonical_tag(&json!(1.5)), ValueTag::Number);
    assert_eq!(canonical_tag(&json!("x")), ValueTag::Text);
    assert_eq!(canonical_tag(&json!({})), ValueTag::Object);
    assert_eq!(canonical_tag(&json!([])), ValueTag::Array);
    assert_eq!(canonical_tag(&json!(true)), ValueTag::Bool);

    assert_eq!(ValueTag::Null.to_u8(), 1);
    assert_eq!(ValueTag::Bool.to_u8(), 6);
    assert_eq!(ValueTag::Object.label(), "Object");
    assert_eq!(canonical_rank(&json!(null)), 0);
}

#[test]
fn missing_sentinel_is_null() {
    assert_eq!(canonical_cmp(&MISSING, &json!(null)), Ordering::Equal);
    assert_eq!(canonical_cmp(&MISSING, &json!(i64::MIN)), Ordering::Less);
}

// ---- numbers ------------------------------------------------------------

#[test]
fn numbers_compare_numerically_across_representations() {
    assert_eq!(canonical_cmp(&json!(2), &json!(10)), Ordering::Less);
    assert_eq!(canonical_cmp(&json!(2), &json!(2.0)), Ordering::Equal);
    assert_eq!(canonical_cmp(&json!(1.5), &json!(1)), Ordering::Greater);
    assert_eq!(canonical_cmp(&json!(-1), &json!(u64::MAX)), Ordering::Less);
    assert_eq!(
        canonical_cmp(&json!(i64::MAX), &json!(u64::MAX)),
        Ordering::Less
    );
}

#[test]
fn integer_float_equality_is_transitive_past_f64_precision() {
    let int = json!(9_007_199_254_740_992_i64);
    let float = json!(9_007_199_254_740_992.0_f64);
    let next_int = json!(9_007_199_254_740_993_i64);

    assert_eq!(canonical_cmp(&int, &float), Ordering::Equal);
    assert_eq!(canonical_cmp(&float, &next_int), Ordering::Less);
    assert_eq!(canonical_cmp(&next_int, &float), Ordering::Greater);
    assert_eq!(canonical_cmp(&int, &next_int), Ordering::Less);
}

#[test]
fn integers_and_floats_compare_exactly() {
    assert_eq!(canonical_cmp(&json!(2), &json!(2.5)), Ordering::Less);
    assert_eq!(canonical_cmp(&json!(-3), &json!(-2.5)), Ordering::Less);
    assert_eq!(canonical_cmp(&json!(-2.5), &json!(-2)), Ordering::Less);
    assert_eq!(canonical_cmp(&json!(0), &json!(-0.0)), Ordering::Equal);
    assert_eq!(canonical_cmp(&json!(-0.0), &json!(0.0)), Ordering::Equal);
    assert_eq!(canonical_cmp(&json!(u64::MAX), &json!(1e30)), Ordering::Less);
    assert_eq!(canonical_cmp(&json!(i64::MIN), &json!(-1e300)), Ordering::Greater);
    assert_eq!(canonical_cmp(&json!(1e300), &json!(i64::MAX)), Ordering::Greater);
}

// ---- strings ------------------------------------------------------------

#[test]
fn strings_compare_by_code_point() {
    assert_eq!(canonical_cmp(&json!("B"), &json!("a")), Ordering::Less);
    assert_eq!(canonical_cmp(&json!("ab"), &json!("abc")), Ordering::Less);
    assert_eq!(canonical_cmp(&json!("é"), &json!("z")), Ordering::Greater);
}

// ---- composites ---------------------------------------------------------

#[test]
fn arrays_compare_elementwise_then_by_length() {
    assert_eq!(canonical_cmp(&json!([1, 2]), &json!([1, 3])), Ordering::Less);
    assert_eq!(canonical_cmp(&json!([1, 2]), &json!([1])), Ordering::Greater);
    assert_eq!(canonical_cmp(&json!([]), &json!([null])), Ordering::Less);
    assert_eq!(canonical_cmp(&json!([[1]]), &json!([[1]])), Ordering::Equal);
}

#[test]
fn objects_compare_key_then_value_in_document_order() {
    assert_eq!(
        canonical_cmp(&json!({"a": 1}), &json!({"b": 0})),
        Ordering::Less
    );
    assert_eq!(
        canonical_cmp(&json!({"a": 2}), &json!({"a": 1})),
        Ordering::Greater
    );
    assert_eq!(
        canonical_cmp(&json!({"a": 1}), &json!({"a": 1, "b": 1})),
        Ordering::Less
    );
    // entry order is significant: {b, a} vs {a, b} differ on the first key
    assert_eq!(
        canonical_cmp(&json!({"b": 1, "a": 1}), &json!({"a": 1, "b": 1})),
        Ordering::Greater
    );
}

// ---- strategy -----------------------------------------------------------

#[test]
fn closures_act_as_value_orders() {
    let reversed = |left: &Value, right: &Value| canonical_cmp(right, left);

    assert_eq!(reversed.compare(&json!(1), &json!(2)), Ordering::Greater);
    assert_eq!(CanonicalOrder.compare(&json!(1), &json!(2)), Ordering::Less);
}
