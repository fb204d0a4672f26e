// File: crates/chart-model/tests/normalize.rs
// Purpose: Validate series normalization over every accepted input shape.

use chart_model::{normalize_series, Bounds};
use serde_json::{json, Value};

#[test]
fn empty_array_normalizes_to_empty() {
    let out = normalize_series(&json!([]));
    assert!(out.collection.is_empty());
    assert_eq!(out.bounds, None);
}

#[test]
fn null_normalizes_to_empty() {
    let out = normalize_series(&Value::Null);
    assert!(out.collection.is_empty());
    assert_eq!(out.bounds, None);
}

#[test]
fn empty_object_normalizes_to_empty() {
    let out = normalize_series(&json!({}));
    assert!(out.collection.is_empty());
    assert_eq!(out.bounds, None);
}

#[test]
fn scalars_normalize_to_empty() {
    for raw in [json!(42), json!("series"), json!(true)] {
        let out = normalize_series(&raw);
        assert!(out.collection.is_empty());
        assert_eq!(out.bounds, None);
    }
}

#[test]
fn array_input_keeps_entries_and_derives_global_bounds() {
    let raw = json!([
        {"label": "A", "data": [1, 5, 3]},
        {"label": "B", "data": [-2, 9]},
    ]);
    let out = normalize_series(&raw);

    assert_eq!(out.collection.len(), 2);
    assert_eq!(out.collection[0].label(), Some("A"));
    assert_eq!(out.collection[1].label(), Some("B"));
    assert_eq!(out.collection[0].data().map(|d| d.len()), Some(3));
    assert_eq!(out.bounds, Some(Bounds { min: -2.0, max: 9.0 }));
}

#[test]
fn single_object_wraps_as_singleton_gauge() {
    let out = normalize_series(&json!({"value": 42}));
    assert_eq!(out.collection.len(), 1);
    assert_eq!(out.collection[0].get("value"), Some(&json!(42)));
    assert_eq!(out.bounds, Some(Bounds { min: 42.0, max: 42.0 }));
}

#[test]
fn wrapped_object_is_a_copy_not_an_alias() {
    let mut raw = json!({"value": 42});
    let out = normalize_series(&raw);

    // mutate the caller-owned object after normalization
    raw.as_object_mut()
        .unwrap()
        .insert("value".to_string(), json!(-1));

    assert_eq!(out.collection[0].get("value"), Some(&json!(42)));
    assert_eq!(out.bounds, Some(Bounds { min: 42.0, max: 42.0 }));
}

#[test]
fn non_object_array_entries_are_dropped() {
    let raw = json!([{"label": "A", "data": [4]}, 7, "stray", null]);
    let out = normalize_series(&raw);
    assert_eq!(out.collection.len(), 1);
    assert_eq!(out.bounds, Some(Bounds { min: 4.0, max: 4.0 }));
}

#[test]
fn labels_do_not_pollute_bounds() {
    // the "label" string and non-data styling fields must not be scanned
    let raw = json!([{"label": "999", "color": 12345, "data": [1, 2]}]);
    let out = normalize_series(&raw);
    assert_eq!(out.bounds, Some(Bounds { min: 1.0, max: 2.0 }));
}

#[test]
fn series_without_numeric_payload_yields_no_bounds() {
    let out = normalize_series(&json!([{"label": "A", "data": []}]));
    assert_eq!(out.collection.len(), 1);
    assert_eq!(out.bounds, None);
}

#[test]
fn nested_data_leaves_are_scanned() {
    // some hosts supply [x, y] pairs instead of flat values
    let raw = json!([{"label": "A", "data": [[0, 3.5], [1, -1.25]]}]);
    let out = normalize_series(&raw);
    assert_eq!(out.bounds, Some(Bounds { min: -1.25, max: 3.5 }));
}

#[test]
fn normalization_does_not_mutate_input() {
    let raw = json!([{"label": "A", "data": [1, 2]}, 7]);
    let before = raw.clone();
    let _ = normalize_series(&raw);
    assert_eq!(raw, before);
}
