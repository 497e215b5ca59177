//! Integration tests for typed accessors and their fallback behavior.

use jsonnav::{Document, JsonQuery, Navigate, PathError};

fn doc(json: &str) -> Document {
    Document::parse(json).unwrap()
}

#[test]
fn test_multi_index_chain() {
    let doc = doc(r#"{"a": [[1,2],[3,4]]}"#);
    assert_eq!(doc.get_int("a[1][0]", -1).unwrap(), 3);
    assert_eq!(doc.get_int("a[0][1]", -1).unwrap(), 2);
    assert_eq!(doc.get_int("a[2][0]", -1).unwrap(), -1);
}

#[test]
fn test_missing_key_fallback() {
    let doc = doc(r#"{"x": 1}"#);
    assert_eq!(doc.get_string("y", "none").unwrap(), "none");
}

#[test]
fn test_array_enumeration_and_use() {
    let doc = doc(r#"{"items":[{"name":"A"},{"name":"B"}]}"#);
    let items = doc.get_array("items").unwrap().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(doc.use_node(&items[1]).get_string("name", "").unwrap(), "B");
    assert_eq!(doc.use_node(&items[0]).get_string("name", "").unwrap(), "A");
}

#[test]
fn test_type_mismatch_fallback() {
    let doc = doc(r#"{"x": "hello", "n": 5, "b": true}"#);
    assert_eq!(doc.get_int("x", 7).unwrap(), 7);
    assert_eq!(doc.get_string("n", "fb").unwrap(), "fb");
    assert!(!doc.get_bool("x", false).unwrap());
    assert_eq!(doc.get_int("b", 9).unwrap(), 9);
    assert!(doc.get_array("x").unwrap().is_none());
    assert!(doc.get_object("x").unwrap().is_none());
}

#[test]
fn test_string_number_is_not_coerced() {
    let doc = doc(r#"{"n": "42"}"#);
    assert_eq!(doc.get_int("n", 0).unwrap(), 0);
}

#[test]
fn test_top_level_array_root() {
    let doc = doc("[10,20,30]");
    let items = doc.root_array().unwrap();
    assert_eq!(items.len(), 3);

    // Numeric segments are property names, never positions.
    assert_eq!(doc.get_int("1", -1).unwrap(), -1);
    assert_eq!(doc.get_int("0", -1).unwrap(), -1);
}

#[test]
fn test_numeric_key_on_object() {
    let doc = doc(r#"{"1": 11}"#);
    assert_eq!(doc.get_int("1", -1).unwrap(), 11);
}

#[test]
fn test_root_array_absent_for_object_root() {
    let doc = doc(r#"{"a": []}"#);
    assert!(doc.root_array().is_none());
    assert_eq!(doc.get_array("a").unwrap().map(<[_]>::len), Some(0));
}

#[test]
fn test_null_root_falls_back() {
    let doc = doc("null");
    assert_eq!(doc.get_string("a", "fb").unwrap(), "fb");
    assert_eq!(doc.get_int("a[0]", -1).unwrap(), -1);
    assert!(doc.root_array().is_none());
    assert!(doc.get_object("a").unwrap().is_none());
}

#[test]
fn test_null_along_path_falls_back() {
    let doc = doc(r#"{"a": null, "b": {"c": null}}"#);
    assert_eq!(doc.get_string("a.x", "fb").unwrap(), "fb");
    assert_eq!(doc.get_string("a", "fb").unwrap(), "fb");
    assert_eq!(doc.get_int("b.c", 4).unwrap(), 4);
    assert_eq!(doc.get_int("b.c.d[0]", 4).unwrap(), 4);
    assert!(doc.get_array("a").unwrap().is_none());
    // A null leaf still counts as present.
    assert!(doc.contains("b.c").unwrap());
    assert!(!doc.contains("b.c.d").unwrap());
}

#[test]
fn test_syntax_error_beats_traversal_failure() {
    let doc = doc(r#"{"x": 1}"#);
    // The first segment would not resolve, but the whole path is checked first.
    let err = doc.get_string("missing.ok[bad]", "").unwrap_err();
    assert!(matches!(err, PathError::UnexpectedToken { .. }));
    assert!(err.to_string().starts_with("invalid path syntax"));
}

#[test]
fn test_every_accessor_reports_syntax_errors() {
    let doc = doc(r#"{"x": 1}"#);
    assert!(doc.get_string("x[", "").is_err());
    assert!(doc.get_int("x[", 0).is_err());
    assert!(doc.get_i64("x[", 0).is_err());
    assert!(doc.get_f64("x[", 0.0).is_err());
    assert!(doc.get_bool("x[", false).is_err());
    assert!(doc.get_array("x[").is_err());
    assert!(doc.get_object("x[").is_err());
    assert!(doc.resolve("").is_err());
    assert!(doc.contains("a..b").is_err());
}

#[test]
fn test_use_object_round_trip() {
    let doc = doc(r#"{"order": {"lines": [{"sku": "X1", "qty": 3}]}}"#);
    let order = doc.use_node(doc.get_object("order").unwrap());
    let line = order.use_node(order.get_object("lines[0]").unwrap());

    assert_eq!(
        line.get_string("sku", "").unwrap(),
        doc.get_string("order.lines[0].sku", "").unwrap()
    );
    assert_eq!(
        order.get_int("lines[0].qty", 0).unwrap(),
        doc.get_int("order.lines[0].qty", 0).unwrap()
    );
}

#[test]
fn test_use_node_on_non_container_is_neutral() {
    let doc = doc(r#"{"s": "text", "n": null, "items": [1]}"#);

    let scalar = doc.use_node(doc.resolve("s").unwrap());
    assert!(scalar.is_neutral());
    assert_eq!(scalar.get_string("anything", "fb").unwrap(), "fb");

    let null = doc.use_node(doc.resolve("n").unwrap());
    assert!(null.is_neutral());

    let absent = doc.use_node(doc.get_object("nope").unwrap());
    assert!(absent.is_neutral());
    assert!(absent.root_array().is_none());
}

#[test]
fn test_use_node_on_array() {
    let doc = doc(r#"{"rows": [[1, 2], [3]]}"#);
    let rows = doc.use_node(doc.resolve("rows").unwrap());
    assert_eq!(rows.root_array().map(<[_]>::len), Some(2));
    let first = rows.use_node(&rows.root_array().unwrap()[0]);
    assert_eq!(first.root_array().map(<[_]>::len), Some(2));
}

#[test]
fn test_deep_real_world_path() {
    let doc = doc(
        r#"{
            "staff": {"groups": [{"team_leader": {"name": "Grace", "id": 7}}]},
            "order_lines": [{"available_attributes": ["red", "blue"]}]
        }"#,
    );
    assert_eq!(
        doc.get_string("staff.groups[0].team_leader.name", "").unwrap(),
        "Grace"
    );
    assert_eq!(
        doc.get_string("order_lines[0].available_attributes[1]", "").unwrap(),
        "blue"
    );
    assert_eq!(doc.get_int("staff.groups[0].team_leader.id", 0).unwrap(), 7);
}

#[test]
fn test_numbers() {
    let doc = doc(r#"{"i": 2147483647, "over": 2147483648, "f": 1.25, "whole": -8.0}"#);
    assert_eq!(doc.get_int("i", 0).unwrap(), i32::MAX);
    assert_eq!(doc.get_int("over", 0).unwrap(), 0);
    assert_eq!(doc.get_i64("over", 0).unwrap(), 2_147_483_648);
    assert_eq!(doc.get_int("f", 0).unwrap(), 0);
    assert_eq!(doc.get_f64("f", 0.0).unwrap(), 1.25);
    assert_eq!(doc.get_int("whole", 0).unwrap(), -8);
    assert_eq!(doc.get_f64("i", 0.0).unwrap(), 2_147_483_647.0);
}

#[test]
fn test_get_str_borrows() {
    let doc = doc(r#"{"name": "borrowed"}"#);
    let name: &str = doc.get_str("name", "").unwrap();
    assert_eq!(name, "borrowed");
}

#[test]
fn test_try_parse() {
    let (ok, good) = Document::try_parse(r#"{"a": true}"#);
    assert!(ok);
    assert!(good.get_bool("a", false).unwrap());

    let (ok, bad) = Document::try_parse(r#"{"a": tru"#);
    assert!(!ok);
    assert!(!bad.get_bool("a", false).unwrap());
}

#[test]
fn test_query_view_matches_document() {
    let doc = doc(r#"{"a": {"b": [5]}}"#);
    let view: JsonQuery<'_> = doc.query();
    assert_eq!(view.get_int("a.b[0]", 0).unwrap(), 5);
}

#[test]
fn test_concurrent_reads() {
    use std::sync::Arc;
    use std::thread;

    let doc = Arc::new(
        Document::parse(r#"{"items": [{"v": 0}, {"v": 1}, {"v": 2}, {"v": 3}]}"#)
            .unwrap()
            .with_path_cache(Arc::new(jsonnav::PathCache::new(8))),
    );
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let doc = Arc::clone(&doc);
            thread::spawn(move || {
                let path = format!("items[{}].v", i);
                for _ in 0..100 {
                    assert_eq!(doc.get_int(&path, -1).unwrap(), i);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
