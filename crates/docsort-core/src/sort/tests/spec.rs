use crate::{
    error::{ErrorClass, SortError},
    sort::{Direction, SortSpec, SpecElement, SpecLiteral},
};
use serde_json::json;

fn directions(spec: &SortSpec) -> Vec<(&str, Direction)> {
    spec.iter()
        .map(|field| (field.path.as_str(), field.direction))
        .collect()
}

#[test]
fn mapping_keeps_insertion_order_and_sign_of_direction() {
    let spec = SortSpec::parse(&json!({"b": 1, "a": -1, "c": 0, "d": -0.5}))
        .expect("mapping literal should parse");

    assert_eq!(
        directions(&spec),
        vec![
            ("b", Direction::Asc),
            ("a", Direction::Desc),
            ("c", Direction::Asc),
            ("d", Direction::Desc),
        ]
    );
    assert_eq!(spec.paths(), vec!["b", "a", "c", "d"]);
}

#[test]
fn sequence_of_paths_is_ascending() {
    let spec = SortSpec::parse(&json!(["x", "y.z"])).expect("path list should parse");

    assert_eq!(
        directions(&spec),
        vec![("x", Direction::Asc), ("y.z", Direction::Asc)]
    );
    assert!(spec.fields().iter().all(|field| field.ascending()));
}

#[test]
fn sequence_accepts_pairs_and_mixed_elements() {
    let spec = SortSpec::parse(&json!([["key1", "asc"], "key2", ["key3", "desc"]]))
        .expect("mixed list should parse");

    assert_eq!(
        directions(&spec),
        vec![
            ("key1", Direction::Asc),
            ("key2", Direction::Asc),
            ("key3", Direction::Desc),
        ]
    );
}

#[test]
fn scalar_literal_is_rejected() {
    let err = SortSpec::parse(&json!(42)).expect_err("scalar literal must be rejected");

    assert!(matches!(err, SortError::InvalidSpec { .. }));
    assert_eq!(err.class(), ErrorClass::Unsupported);
    assert_eq!(
        err.to_string(),
        "bad sort specification: expected a mapping or a sequence, found 42"
    );
}

#[test]
fn malformed_literals_are_rejected_at_parse_time() {
    let cases = [
        json!({"a": "desc"}),
        json!({"a": null}),
        json!([["a", "down"]]),
        json!([["a"]]),
        json!([["a", "asc", "extra"]]),
        json!([[1, "asc"]]),
        json!([7]),
        json!(["a..b"]),
        json!({"": 1}),
        json!("a"),
        json!(null),
    ];

    for literal in cases {
        let err = SortSpec::parse(&literal).expect_err("malformed literal must be rejected");
        assert!(
            matches!(err, SortError::InvalidSpec { .. }),
            "{literal}: {err:?}"
        );
    }
}

#[test]
fn empty_literals_give_empty_specs() {
    assert!(SortSpec::parse(&json!({})).expect("empty mapping").is_empty());
    assert!(SortSpec::parse(&json!([])).expect("empty list").is_empty());
    assert_eq!(SortSpec::new(), SortSpec::default());
}

#[test]
fn literal_resolves_to_closed_variant() {
    let literal = SpecLiteral::try_from(&json!(["a", ["b", "desc"]])).expect("should resolve");

    assert_eq!(
        literal,
        SpecLiteral::Sequence(vec![
            SpecElement::Path("a".to_string()),
            SpecElement::Pair("b".to_string(), Direction::Desc),
        ])
    );

    let literal = SpecLiteral::try_from(&json!({"a": -1})).expect("should resolve");
    assert_eq!(literal, SpecLiteral::Mapping(vec![("a".to_string(), -1.0)]));
}

#[test]
fn builder_matches_parsed_literal() {
    let built = SortSpec::new()
        .order_by("a")
        .and_then(|spec| spec.order_by_desc("b.c"))
        .expect("builder paths should be valid");
    let parsed = SortSpec::parse(&json!({"a": 1, "b.c": -1})).expect("literal should parse");

    assert_eq!(built, parsed);
    assert!(SortSpec::new().order_by("").is_err());
}

#[test]
fn spec_deserializes_from_literal() {
    let spec: SortSpec =
        serde_json::from_value(json!([["a", "desc"]])).expect("spec should deserialize");
    assert_eq!(directions(&spec), vec![("a", Direction::Desc)]);

    let err = serde_json::from_value::<SortSpec>(json!(true)).expect_err("bool is not a spec");
    assert!(err.to_string().contains("bad sort specification"));
}
