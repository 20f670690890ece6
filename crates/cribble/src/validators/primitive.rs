//! Primitive base codecs.
//!
//! Strict membership tests with identity decode/encode. These are the
//! leaves the shape engine and the decorators compose over.

use std::borrow::Cow;

use crate::foundation::{Codec, DecodeResult, Decoded, Input, ValidationError};
use crate::value::Value;

/// Accepts every input, including absent, unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnyCodec;

impl Codec for AnyCodec {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("any")
    }

    fn is(&self, _input: Input<'_>) -> bool {
        true
    }

    fn decode(&self, input: Input<'_>) -> DecodeResult {
        Ok(input.cloned())
    }

    fn encode(&self, value: Input<'_>) -> Decoded {
        value.cloned()
    }
}

/// Accepts exactly `Value::Bool`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BooleanCodec;

impl Codec for BooleanCodec {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("boolean")
    }

    fn is(&self, input: Input<'_>) -> bool {
        matches!(input, Some(Value::Bool(_)))
    }

    fn decode(&self, input: Input<'_>) -> DecodeResult {
        match input {
            Some(v @ Value::Bool(_)) => Ok(Some(v.clone())),
            other => Err(ValidationError::mismatch("boolean", other).into()),
        }
    }

    fn encode(&self, value: Input<'_>) -> Decoded {
        value.cloned()
    }
}

/// Accepts exactly `Value::Number`.
///
/// Membership mirrors the host number type: non-finite values are numbers
/// too. Codecs with narrower numeric semantics reject them downstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberCodec;

impl Codec for NumberCodec {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("number")
    }

    fn is(&self, input: Input<'_>) -> bool {
        matches!(input, Some(Value::Number(_)))
    }

    fn decode(&self, input: Input<'_>) -> DecodeResult {
        match input {
            Some(v @ Value::Number(_)) => Ok(Some(v.clone())),
            other => Err(ValidationError::mismatch("number", other).into()),
        }
    }

    fn encode(&self, value: Input<'_>) -> Decoded {
        value.cloned()
    }
}

/// Accepts exactly `Value::String`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringCodec;

impl Codec for StringCodec {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("string")
    }

    fn is(&self, input: Input<'_>) -> bool {
        matches!(input, Some(Value::String(_)))
    }

    fn decode(&self, input: Input<'_>) -> DecodeResult {
        match input {
            Some(v @ Value::String(_)) => Ok(Some(v.clone())),
            other => Err(ValidationError::mismatch("string", other).into()),
        }
    }

    fn encode(&self, value: Input<'_>) -> Decoded {
        value.cloned()
    }
}

/// Creates the accept-everything codec.
#[must_use]
pub fn any() -> AnyCodec {
    AnyCodec
}

/// Creates the boolean codec.
#[must_use]
pub fn boolean() -> BooleanCodec {
    BooleanCodec
}

/// Creates the number codec.
#[must_use]
pub fn number() -> NumberCodec {
    NumberCodec
}

/// Creates the string codec.
#[must_use]
pub fn string() -> StringCodec {
    StringCodec
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_accepts_everything() {
        assert!(any().is(None));
        assert!(any().is(Some(&Value::Null)));
        assert_eq!(any().decode(None).unwrap(), None);
        let v = Value::from("x");
        assert_eq!(any().decode(Some(&v)).unwrap(), Some(v));
    }

    #[test]
    fn boolean_accepts_only_booleans() {
        let v = Value::from(true);
        assert!(boolean().is(Some(&v)));
        assert_eq!(boolean().decode(Some(&v)).unwrap(), Some(v));

        for bad in [Value::Null, Value::from(1.0), Value::from("true")] {
            assert!(!boolean().is(Some(&bad)));
            assert!(boolean().decode(Some(&bad)).is_err());
        }
        assert!(boolean().decode(None).is_err());
    }

    #[test]
    fn number_accepts_non_finite() {
        assert!(number().is(Some(&Value::Number(f64::NAN))));
        assert!(number().is(Some(&Value::Number(f64::INFINITY))));
        assert!(!number().is(Some(&Value::from("1"))));
    }

    #[test]
    fn string_mismatch_reports_actual_type() {
        let errors = string().decode(Some(&Value::from(3.0))).unwrap_err();
        let error = &errors.errors()[0];
        assert_eq!(error.expected.as_deref(), Some("string"));
        assert_eq!(error.actual, Some(Value::Number(3.0)));
    }

    #[test]
    fn encode_is_identity() {
        let v = Value::from("keep");
        assert_eq!(string().encode(Some(&v)), Some(v));
        assert_eq!(string().encode(None), None);
    }
}
