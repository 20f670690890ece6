//! Behavioral tests for the decorator composition protocol.

use cribble::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn val(j: serde_json::Value) -> Value {
    Value::from(j)
}

// ============================================================================
// OPTIONAL-FIELD DECORATOR
// ============================================================================

#[test]
fn optional_field_matrix_over_boolean() {
    let codec = optional(boolean());

    assert_eq!(
        codec.decode(Some(&val(json!(true)))).unwrap(),
        Some(val(json!(true)))
    );
    assert_eq!(
        codec.decode(Some(&val(json!(false)))).unwrap(),
        Some(val(json!(false)))
    );
    assert!(codec.decode(Some(&Value::Null)).is_err());
    assert_eq!(codec.decode(None).unwrap(), None);

    assert!(codec.is(None));
    assert!(!codec.is(Some(&Value::Null)));
    assert!(codec.is(Some(&val(json!(true)))));
    assert!(!codec.is(Some(&val(json!(1)))));
}

#[test]
fn optional_field_inside_an_object() {
    // A required slot holding an optional-field codec: the key may be
    // missing, but a present null is still invalid.
    let codec = object(Shape::new().required("key", optional(boolean())));

    let present = val(json!({"key": true}));
    assert_eq!(codec.decode(Some(&present)).unwrap(), Some(present));

    let absent = val(json!({}));
    assert_eq!(codec.decode(Some(&absent)).unwrap(), Some(absent));

    let null = val(json!({"key": null}));
    let errors = codec.decode(Some(&null)).unwrap_err();
    assert_eq!(errors.errors()[0].path.to_string(), "key");
}

// ============================================================================
// NULL-NORMALIZATION DECORATOR
// ============================================================================

#[test]
fn nullable_normalizes_null_and_absent_for_any_inner() {
    let over_boolean = nullable(boolean());
    let over_object = nullable(object(Shape::new().required("name", string())));

    assert_eq!(over_boolean.decode(Some(&Value::Null)).unwrap(), None);
    assert_eq!(over_boolean.decode(None).unwrap(), None);
    assert_eq!(over_object.decode(Some(&Value::Null)).unwrap(), None);
    assert_eq!(over_object.decode(None).unwrap(), None);
}

#[test]
fn nullable_delegates_present_values() {
    let codec = nullable(string());
    let input = val(json!("keep"));
    assert_eq!(codec.decode(Some(&input)).unwrap(), Some(input));
    assert!(codec.decode(Some(&val(json!(1)))).is_err());
}

#[test]
fn nullable_and_optional_differ_exactly_on_null() {
    let null = Value::Null;
    assert!(nullable(boolean()).decode(Some(&null)).is_ok());
    assert!(optional(boolean()).decode(Some(&null)).is_err());
}

// ============================================================================
// CONVERSION DECORATOR
// ============================================================================

#[test]
fn convert_coerces_before_the_inner_decode() {
    // Accept numbers where a string is expected.
    let codec = convert_when(
        string(),
        |v: Input<'_>| v.map(|v| Value::from(v.to_string())),
        |v: Input<'_>| matches!(v, Some(Value::Number(_))),
    );

    assert_eq!(
        codec.decode(Some(&val(json!(42)))).unwrap(),
        Some(val(json!("42.0")))
    );
    let passthrough = val(json!("kept"));
    assert_eq!(
        codec.decode(Some(&passthrough)).unwrap(),
        Some(passthrough)
    );
    assert!(codec.decode(Some(&val(json!(true)))).is_err());
}

#[test]
fn convert_failures_come_from_the_inner_codec() {
    // Conversion to null still has to satisfy the inner codec.
    let codec = convert(boolean(), |_: Input<'_>| Some(Value::Null));
    let errors = codec.decode(Some(&val(json!(true)))).unwrap_err();
    assert_eq!(errors.errors()[0].expected.as_deref(), Some("boolean"));
}

#[test]
fn decorators_stack() {
    // Nullable over Convert: null short-circuits before any coercion runs.
    let codec = nullable(convert(string(), |v: Input<'_>| {
        v.map(|v| Value::from(v.to_string()))
    }));
    assert_eq!(codec.decode(Some(&Value::Null)).unwrap(), None);
    assert_eq!(
        codec.decode(Some(&val(json!(false)))).unwrap(),
        Some(val(json!("false")))
    );
}

// ============================================================================
// DECORATOR CAPABILITY
// ============================================================================

#[test]
fn decorators_expose_their_inner_codec() {
    let codec = nullable(optional(boolean()));
    let first = codec.inner().expect("nullable wraps a codec");
    let second = first.inner().expect("optional wraps a codec");
    assert_eq!(second.name(), "boolean");
    assert!(second.inner().is_none());
}

#[test]
fn plain_codecs_are_not_decorators() {
    assert!(boolean().inner().is_none());
    assert!(object(Shape::new()).inner().is_none());
    assert!(instant().inner().is_none());
}

#[test]
fn decorator_names_default_to_the_inner_name() {
    assert_eq!(nullable(boolean()).name(), "boolean");
    assert_eq!(optional(string()).name(), "string");
    assert_eq!(
        nullable(boolean()).named("maybe_flag").name(),
        "maybe_flag"
    );
}
