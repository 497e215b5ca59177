//! Queries over `serde_json::Value` trees through the generic adapter.

use jsonnav::{JsonQuery, Navigate, NodeKind, TreeNode};
use serde_json::{json, Value};

fn sample() -> Value {
    json!({
        "staff": {
            "groups": [
                {"team_leader": {"name": "Ada", "age": 36, "active": true}},
                {"team_leader": null}
            ]
        },
        "matrix": [[1, 2], [3, 4]],
        "ratio": 0.5
    })
}

#[test]
fn test_serde_value_typed_accessors() {
    let value = sample();
    let query = JsonQuery::over(&value);

    assert_eq!(
        query.get_string("staff.groups[0].team_leader.name", "").unwrap(),
        "Ada"
    );
    assert_eq!(query.get_int("staff.groups[0].team_leader.age", 0).unwrap(), 36);
    assert!(query.get_bool("staff.groups[0].team_leader.active", false).unwrap());
    assert_eq!(query.get_int("matrix[1][0]", -1).unwrap(), 3);
    assert_eq!(query.get_f64("ratio", 0.0).unwrap(), 0.5);
}

#[test]
fn test_serde_value_fallbacks() {
    let value = sample();
    let query = JsonQuery::over(&value);

    assert_eq!(
        query.get_string("staff.groups[1].team_leader.name", "vacant").unwrap(),
        "vacant"
    );
    assert_eq!(query.get_int("matrix[5][0]", -1).unwrap(), -1);
    assert_eq!(query.get_int("ratio", -1).unwrap(), -1);
    assert!(query.get_string("matrix[", "").is_err());
}

#[test]
fn test_serde_value_use_node() {
    let value = sample();
    let query = JsonQuery::over(&value);

    let groups = query.get_array("staff.groups").unwrap().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].kind(), NodeKind::Object);

    let leader = query.use_node(&groups[0]);
    assert_eq!(leader.get_string("team_leader.name", "").unwrap(), "Ada");

    let vacant = query.use_node(groups[1].property("team_leader"));
    assert!(vacant.is_neutral());
}

#[test]
fn test_serde_value_top_level_array() {
    let value = json!([10, 20, 30]);
    let query = JsonQuery::over(&value);
    assert_eq!(query.root_array().map(<[_]>::len), Some(3));
    assert_eq!(query.get_int("1", -1).unwrap(), -1);
}

#[test]
fn test_both_adapters_agree() {
    let value = sample();
    let document = jsonnav::Document::from_value(&value);
    let query = JsonQuery::over(&value);

    for path in [
        "staff.groups[0].team_leader.age",
        "matrix[0][1]",
        "matrix[1][1]",
        "staff.groups[1].team_leader",
        "nope",
    ] {
        assert_eq!(
            document.get_int(path, -99).unwrap(),
            query.get_int(path, -99).unwrap(),
            "path {}",
            path
        );
        assert_eq!(
            document.contains(path).unwrap(),
            query.contains(path).unwrap(),
            "path {}",
            path
        );
    }
}
