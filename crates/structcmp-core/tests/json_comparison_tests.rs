#![allow(clippy::unwrap_used, clippy::expect_used)]

use serde_json::json;
use structcmp_core::compare;

#[test]
fn test_equal_documents() {
    let expected = json!({ "name": "ada", "tags": ["a", "b"], "age": 36 });
    let actual = json!({ "age": 36, "tags": ["a", "b"], "name": "ada" });
    assert_eq!(compare(&expected, &actual), None);
}

#[test]
fn test_nested_value_difference() {
    let expected = json!({ "user": { "emails": ["a@x.io", "b@x.io"] } });
    let actual = json!({ "user": { "emails": ["a@x.io", "c@x.io"] } });
    assert_eq!(
        compare(&expected, &actual).unwrap().description(),
        "Difference at <root-object>.user.emails.[1]. Expected: b@x.io, but actual was: c@x.io"
    );
}

#[test]
fn test_kind_mismatch_is_a_type_difference() {
    let expected = json!({ "id": 1 });
    let actual = json!({ "id": "1" });
    assert_eq!(
        compare(&expected, &actual).unwrap().description(),
        "Difference at <root-object>.id. Expected type: json::number, but actual type was: json::string"
    );
}

#[test]
fn test_null_member() {
    let expected = json!({ "id": null });
    let actual = json!({ "id": [1] });
    assert_eq!(
        compare(&expected, &actual).unwrap().description(),
        "Difference at <root-object>.id. Expected: null, but actual was: [1]"
    );
}

#[test]
fn test_missing_member() {
    let expected = json!({ "a": 1, "b": 2 });
    let actual = json!({ "a": 1 });
    assert_eq!(
        compare(&expected, &actual).unwrap().description(),
        "Difference at <root-object>. Actual object does not contain field: b"
    );

    assert_eq!(
        compare(&actual, &expected).unwrap().description(),
        "Difference at <root-object>. Expected object does not contain field: b"
    );
}

#[test]
fn test_renamed_member_is_a_difference() {
    let expected = json!({ "id": 1 });
    let actual = json!({ "user_id": 1 });
    assert_eq!(
        compare(&expected, &actual).unwrap().description(),
        "Difference at <root-object>. Actual object does not contain field: id"
    );

    let expected = json!({ "a": 1, "b": 2 });
    let actual = json!({ "a": 1, "c": 2 });
    assert_eq!(
        compare(&expected, &actual).unwrap().description(),
        "Difference at <root-object>. Actual object does not contain field: b"
    );
}

#[test]
fn test_renamed_nested_member_reports_container_path() {
    let expected = json!({ "user": { "name": "ada", "zip": "1" } });
    let actual = json!({ "user": { "alias": "ada", "zip": "1" } });
    assert_eq!(
        compare(&expected, &actual).unwrap().description(),
        "Difference at <root-object>.user. Expected object does not contain field: alias"
    );
}

#[test]
fn test_absent_and_present_strings_render_unquoted() {
    let expected = json!({ "id": null });
    let actual = json!({ "id": "x" });
    assert_eq!(
        compare(&expected, &actual).unwrap().description(),
        "Difference at <root-object>.id. Expected: null, but actual was: x"
    );
}

#[test]
fn test_array_lengths() {
    assert_eq!(
        compare(&json!([1, 2, 3]), &json!([1, 2])).unwrap().description(),
        "Difference at <root-object>. Expected collection is larger than actual collection"
    );
}
