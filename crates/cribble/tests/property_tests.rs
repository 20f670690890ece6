//! Property-based tests for the codec laws.

use chrono::DateTime;
use cribble::prelude::*;
use proptest::prelude::*;
// Disambiguate the glob clash between `cribble::prelude::any` (the AnyCodec
// constructor) and proptest's `any::<T>()` strategy used throughout this file.
use proptest::prelude::any;
use serde_json::json;

fn leaf_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,16}".prop_map(Value::from),
    ]
}

// ============================================================================
// ROUND TRIP: is(v) implies is(encode(v))
// ============================================================================

proptest! {
    #[test]
    fn primitive_round_trip(v in leaf_value()) {
        let b = boolean();
        let n = number();
        let s = string();
        let codecs: [&dyn Codec; 3] = [&b, &n, &s];
        for codec in codecs {
            if codec.is(Some(&v)) {
                let encoded = codec.encode(Some(&v));
                prop_assert!(codec.is(encoded.as_ref()));
            }
        }
    }

    #[test]
    fn object_round_trip(name in "[a-z]{1,8}", admin in any::<bool>()) {
        let codec = object(
            Shape::new()
                .required("name", string())
                .optional("admin", boolean()),
        );
        let input = Value::from(json!({"name": name, "admin": admin}));
        prop_assert!(codec.is(Some(&input)));
        let encoded = codec.encode(Some(&input));
        prop_assert!(codec.is(encoded.as_ref()));
    }
}

// ============================================================================
// NULL NORMALIZATION: null/absent always decode to absent
// ============================================================================

proptest! {
    #[test]
    fn nullable_normalizes_regardless_of_inner(which in 0usize..3) {
        let codec: Nullable<Box<dyn Codec>> = match which {
            0 => nullable(boolean().boxed()),
            1 => nullable(number().boxed()),
            _ => nullable(string().boxed()),
        };
        prop_assert_eq!(codec.decode(Some(&Value::Null)).unwrap(), None);
        prop_assert_eq!(codec.decode(None).unwrap(), None);
    }

    #[test]
    fn nullable_decode_is_idempotent(v in leaf_value()) {
        let codec = nullable(string());
        if let Ok(decoded) = codec.decode(Some(&v)) {
            let again = codec.decode(decoded.as_ref()).unwrap();
            prop_assert_eq!(again, decoded);
        }
    }
}

// ============================================================================
// OPTIONAL-FIELD STRICTNESS
// ============================================================================

proptest! {
    #[test]
    fn optional_accepts_members_and_absence_only(v in leaf_value()) {
        let codec = optional(boolean());
        let inner_ok = boolean().is(Some(&v));
        prop_assert_eq!(codec.decode(Some(&v)).is_ok(), inner_ok);
        prop_assert_eq!(codec.is(Some(&v)), inner_ok);
        prop_assert!(codec.decode(None).is_ok());
        prop_assert!(codec.decode(Some(&Value::Null)).is_err());
    }
}

// ============================================================================
// SHAPE POLICIES
// ============================================================================

proptest! {
    #[test]
    fn violet_keeps_exactly_the_declared_keys(
        name in "[a-z]{1,8}",
        extras in proptest::collection::vec(("[a-z]{1,6}", any::<i64>()), 0..5),
    ) {
        let codec = object(Shape::new().required("name", string()));

        let mut input = Map::new();
        input.insert("name".to_owned(), Value::from(name));
        for (key, val) in extras {
            input.insert(format!("x_{key}"), Value::from(val));
        }

        let decoded = codec.violet().decode(Some(&Value::Object(input))).unwrap().unwrap();
        let keys: Vec<_> = decoded.as_object().unwrap().keys().cloned().collect();
        prop_assert_eq!(keys, vec!["name".to_owned()]);
    }

    #[test]
    fn strict_fails_per_extra_key(
        name in "[a-z]{1,8}",
        extras in proptest::collection::vec(("[a-z]{1,6}", any::<i64>()), 1..5),
    ) {
        let codec = object(Shape::new().required("name", string()));

        let mut input = Map::new();
        input.insert("name".to_owned(), Value::from(name));
        for (key, val) in extras {
            input.insert(format!("x_{key}"), Value::from(val));
        }
        let extra_count = input.len() - 1;

        let result = codec.strict().decode(Some(&Value::Object(input)));
        let errors = result.unwrap_err();
        prop_assert_eq!(errors.len(), extra_count);
        for error in errors.errors() {
            prop_assert_eq!(error.code.as_ref(), "additional_property");
        }
    }

    #[test]
    fn violet_output_satisfies_strict(
        name in "[a-z]{1,8}",
        extras in proptest::collection::vec(("[a-z]{1,6}", any::<i64>()), 0..5),
    ) {
        let codec = object(Shape::new().required("name", string()));

        let mut input = Map::new();
        input.insert("name".to_owned(), Value::from(name));
        for (key, val) in extras {
            input.insert(format!("x_{key}"), Value::from(val));
        }

        let stripped = codec.violet().decode(Some(&Value::Object(input))).unwrap();
        prop_assert!(codec.strict().decode(stripped.as_ref()).is_ok());
    }
}

// ============================================================================
// TEMPORAL WINDOW
// ============================================================================

proptest! {
    #[test]
    fn window_accepts_exactly_the_inclusive_range(
        a in -4_000_000_000i64..4_000_000_000,
        b in -4_000_000_000i64..4_000_000_000,
        x in -4_000_000_000i64..4_000_000_000,
    ) {
        let ta = DateTime::from_timestamp(a, 0).unwrap();
        let tb = DateTime::from_timestamp(b, 0).unwrap();
        let tx = DateTime::from_timestamp(x, 0).unwrap();

        let codec = instant().min(ta).max(tb);
        let input = Value::Instant(tx);
        let in_window = ta <= tx && tx <= tb;

        prop_assert_eq!(codec.decode(Some(&input)).is_ok(), in_window);
        prop_assert_eq!(codec.is(Some(&input)), in_window);
    }
}
