use ddb_flatten::{
    flatten, from_slice, from_str, from_str_with_options, from_value, to_string,
    to_string_pretty, Error, FlattenOptions, PlainValue, TagConflict, TypedDocument,
};
use serde_json::{json, Value};

fn flat(input: Value) -> Value {
    let doc = from_value(&input).unwrap();
    serde_json::to_value(&doc).unwrap()
}

#[test]
fn test_full_item() {
    let input = json!({
        "id": {"S": "user-001"},
        "age": {"N": " 42 "},
        "score": {"N": "98.5"},
        "active": {"BOOL": "TRUE"},
        "verified": {"BOOL": "f"},
        "deleted_at": {"NULL": "true"},
        "nickname": {"NULL": "false"},
        "created": {"S": "2021-01-01T00:00:00Z"},
        "profile": {"M": {
            "city": {"S": "Oslo"},
            "zip": {"N": "0150"},
            "prefs": {"M": {"theme": {"S": "dark"}}}
        }},
        "tags": {"L": [{"S": "admin"}, {"N": "3"}, {"BOOL": "1"}]}
    });

    assert_eq!(
        flat(input),
        json!({
            "id": "user-001",
            "age": 42,
            "score": 98.5,
            "active": true,
            "verified": false,
            "deleted_at": null,
            "created": 1_609_459_200,
            "profile": {
                "city": "Oslo",
                "zip": 150,
                "prefs": {"theme": "dark"}
            },
            "tags": ["admin", 3, true]
        })
    );
}

#[test]
fn test_output_keeps_input_order() {
    let doc = from_str(r#"{"zeta": {"S": "z"}, "alpha": {"S": "a"}, "mid": {"N": "1"}}"#).unwrap();
    assert_eq!(to_string(&doc).unwrap(), r#"{"zeta":"z","alpha":"a","mid":1}"#);
}

#[test]
fn test_unrecognised_tags_are_absent() {
    let input = json!({
        "set": {"SS": ["a", "b"]},
        "binary": {"B": "aGVsbG8="},
        "lower": {"s": "x"},
        "kept": {"S": "x"}
    });
    assert_eq!(flat(input), json!({"kept": "x"}));
}

#[test]
fn test_blank_field_names_are_dropped() {
    let input = json!({
        "": {"S": "x"},
        "   ": {"N": "1"},
        "  name  ": {"S": "Alice"}
    });
    assert_eq!(flat(input), json!({"name": "Alice"}));
}

#[test]
fn test_nested_map_that_flattens_to_nothing_is_dropped() {
    let input = json!({
        "a": {"M": {"b": {"N": "abc"}, "c": {"NULL": "false"}}},
        "d": {"M": {"e": {"M": {}}}}
    });
    assert_eq!(flat(input), json!({}));
}

#[test]
fn test_list_edge_cases() {
    let input = json!({
        "empty": {"L": []},
        "all_dropped": {"L": [{"S": " "}, {"N": "x"}, {"M": {}}, 7]},
        "not_a_list": {"L": {"S": "x"}},
        "mixed": {"L": [{"S": " x "}, {"N": "5"}, {"S": ""}, {"BOOL": "maybe"}]}
    });
    assert_eq!(flat(input), json!({"mixed": ["x", 5, false]}));
}

#[test]
fn test_non_object_field_values_are_skipped() {
    let input = json!({
        "a": "plain",
        "b": 1,
        "c": [1, 2],
        "d": null,
        "e": {"BOOL": "t"}
    });
    assert_eq!(flat(input), json!({"e": true}));
}

#[test]
fn test_malformed_nested_map_aborts_everything() {
    let input = r#"{"good": {"S": "x"}, "bad": {"M": {"deep": {"M": 5}}}}"#;
    match from_str(input) {
        Err(Error::MalformedMap { path, found }) => {
            assert_eq!(path, "bad.deep");
            assert_eq!(found, "number");
        }
        other => panic!("Expected MalformedMap, got {:?}", other),
    }
}

#[test]
fn test_malformed_map_inside_list_is_tolerated() {
    let input = json!({"a": {"L": [{"M": "not-a-map"}, {"S": "x"}]}});
    assert_eq!(flat(input), json!({"a": ["x"]}));
}

#[test]
fn test_root_must_be_object() {
    assert!(matches!(from_str("[1, 2, 3]"), Err(Error::NotADocument { .. })));
    assert!(matches!(from_str("\"text\""), Err(Error::NotADocument { .. })));
}

#[test]
fn test_invalid_json() {
    match from_slice(b"{\"a\": {\"S\": }") {
        Err(Error::Syntax { line, .. }) => assert_eq!(line, 1),
        other => panic!("Expected Syntax, got {:?}", other),
    }
}

#[test]
fn test_conflicting_tags() {
    let input = r#"{"a": {"S": "text", "N": "1"}}"#;

    let doc = from_str(input).unwrap();
    assert_eq!(doc.get("a"), Some(&PlainValue::from(1.0)));

    let strict = FlattenOptions::new().with_tag_conflict(TagConflict::Reject);
    assert!(matches!(
        from_str_with_options(input, &strict),
        Err(Error::ConflictingTags { .. })
    ));
}

#[test]
fn test_typed_document_deserialize_then_flatten() {
    let doc: TypedDocument =
        serde_json::from_str(r#"{"a": {"S": "x"}, "b": {"M": {"c": {"BOOL": "true"}}}}"#).unwrap();
    let plain = flatten(&doc).unwrap();
    assert_eq!(
        serde_json::to_value(&plain).unwrap(),
        json!({"a": "x", "b": {"c": true}})
    );
}

#[test]
fn test_flatten_is_deterministic() {
    let input = r#"{"a": {"S": "x"}, "b": {"L": [{"N": "1"}, {"N": "2"}]}, "c": {"M": {"d": {"S": "y"}}}}"#;
    let first = to_string(&from_str(input).unwrap()).unwrap();
    let second = to_string(&from_str(input).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_reapplying_to_output_yields_empty_document() {
    let input = r#"{"a": {"S": "x"}, "b": {"M": {"c": {"N": "1"}}}, "d": {"L": [{"BOOL": "t"}]}}"#;
    let once = to_string(&from_str(input).unwrap()).unwrap();
    let twice = from_str(&once).unwrap();
    assert!(twice.is_empty());
}

#[test]
fn test_pretty_output() {
    let doc = from_str(r#"{"a": {"M": {"b": {"N": "1.25"}}}}"#).unwrap();
    let pretty = to_string_pretty(&doc).unwrap();
    assert_eq!(pretty, "{\n  \"a\": {\n    \"b\": 1.25\n  }\n}");
}

#[test]
fn test_non_string_scalar_operand_fails_decode() {
    match from_str(r#"{"ok": {"S": "x"}, "count": {"N": 5}}"#) {
        Err(Error::InvalidOperand { path, tag, .. }) => {
            assert_eq!(path, "count");
            assert_eq!(tag, "N");
        }
        other => panic!("Expected InvalidOperand, got {:?}", other),
    }
}

#[test]
fn test_loose_timestamp_strings_are_kept() {
    let input = json!({
        "spaced": {"S": "2021-01-01 00:00:00Z"},
        "lower": {"S": "2021-01-01t00:00:00z"},
        "leap": {"S": "2016-12-31T23:59:60Z"},
        "strict": {"S": "2021-01-01T00:00:00Z"}
    });
    assert_eq!(
        flat(input),
        json!({
            "spaced": "2021-01-01 00:00:00Z",
            "lower": "2021-01-01t00:00:00z",
            "leap": "2016-12-31T23:59:60Z",
            "strict": 1_609_459_200
        })
    );
}
