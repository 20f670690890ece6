//! Object shape engine: loose, strict, and violet object codecs.
//!
//! A [`Shape`] declares an ordered set of required and optional field
//! codecs; [`object`] turns it into a codec over `Value::Object`. Three
//! policies govern keys outside the declared set:
//!
//! | Policy | Unknown keys |
//! |---|---|
//! | loose  | pass through decode untouched |
//! | strict | rejected, one structural error per key |
//! | violet | silently dropped from the decoded output |
//!
//! All three share the same loose core: required keys must decode through
//! their codecs, optional keys are wrapped in [`Nullable`] at registration
//! (a present `null` normalizes to absent), and sibling failures accumulate
//! so one decode call reports every invalid key.
//!
//! # Examples
//!
//! ```rust,ignore
//! use cribble::prelude::*;
//!
//! let user = object(
//!     Shape::new()
//!         .required("name", string())
//!         .optional("admin", boolean()),
//! );
//! assert_eq!(user.name(), "{ name: string, admin?: boolean }");
//!
//! let strict = user.strict();   // `user` stays usable
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::decorators::Nullable;
use crate::foundation::{Codec, DecodeResult, Decoded, Input, ValidationError, ValidationErrors};
use crate::value::{Map, Value};

// ============================================================================
// SHAPE DESCRIPTOR
// ============================================================================

/// The required/optional key-to-codec mappings defining an object codec.
///
/// Keys keep their registration order, which drives error ordering and the
/// derived display name. Registering the same key twice, in either map,
/// is a programmer error and panics.
#[derive(Clone, Default)]
pub struct Shape {
    required: IndexMap<String, Arc<dyn Codec>>,
    optional: IndexMap<String, Arc<dyn Codec>>,
}

impl Shape {
    /// Creates an empty shape.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a required field.
    ///
    /// # Panics
    ///
    /// Panics if `key` is already declared.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self, key: impl Into<String>, codec: impl Codec + 'static) -> Self {
        let key = key.into();
        assert!(
            !self.contains(&key),
            "shape key `{key}` registered twice"
        );
        self.required.insert(key, Arc::new(codec));
        self
    }

    /// Declares an optional field.
    ///
    /// The codec is wrapped in [`Nullable`], so a present `null` normalizes
    /// to absent while any other present value must satisfy `codec`.
    ///
    /// # Panics
    ///
    /// Panics if `key` is already declared.
    #[must_use = "builder methods must be chained or built"]
    pub fn optional(mut self, key: impl Into<String>, codec: impl Codec + 'static) -> Self {
        let key = key.into();
        assert!(
            !self.contains(&key),
            "shape key `{key}` registered twice"
        );
        self.optional.insert(key, Arc::new(Nullable::new(codec)));
        self
    }

    /// True when `key` is declared, required or optional.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.required.contains_key(key) || self.optional.contains_key(key)
    }

    /// True when no field is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.optional.is_empty()
    }

    /// Declared fields in registration order, required first.
    fn fields(&self) -> impl Iterator<Item = (&String, &Arc<dyn Codec>)> {
        self.required.iter().chain(self.optional.iter())
    }

    /// Derives the display name: `{ k1: T1, k2?: T2 }`, `{}` when empty.
    fn derived_name(&self) -> String {
        if self.is_empty() {
            return "{}".to_owned();
        }
        let entries: Vec<String> = self
            .required
            .iter()
            .map(|(key, codec)| format!("{key}: {}", codec.name()))
            .chain(
                self.optional
                    .iter()
                    .map(|(key, codec)| format!("{key}?: {}", codec.name())),
            )
            .collect();
        format!("{{ {} }}", entries.join(", "))
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shape")
            .field("required", &self.required.keys().collect::<Vec<_>>())
            .field("optional", &self.optional.keys().collect::<Vec<_>>())
            .finish()
    }
}

// ============================================================================
// POLICIES
// ============================================================================

/// Enforcement policy for keys outside the declared set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Unknown keys pass through decode untouched.
    Loose,
    /// Unknown keys are rejected with a structural error each.
    Strict,
    /// Unknown keys are silently dropped from the decoded output.
    Violet,
}

// ============================================================================
// OBJECT CODEC
// ============================================================================

/// A codec over `Value::Object` values matching a [`Shape`].
///
/// Policy refinements return a new codec and leave the receiver valid;
/// field codecs are shared, so refinement is cheap.
#[derive(Clone)]
pub struct ObjectCodec {
    shape: Shape,
    policy: Policy,
    name: String,
}

impl ObjectCodec {
    /// Creates a loose object codec with a derived display name.
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        let name = shape.derived_name();
        Self {
            shape,
            policy: Policy::Loose,
            name,
        }
    }

    /// Returns a copy under an overridden display name.
    #[must_use = "builder methods must be chained or built"]
    pub fn named(&self, name: impl Into<String>) -> Self {
        Self {
            shape: self.shape.clone(),
            policy: self.policy,
            name: name.into(),
        }
    }

    /// Returns a copy that rejects unknown keys at decode time.
    #[must_use = "builder methods must be chained or built"]
    pub fn strict(&self) -> Self {
        Self {
            shape: self.shape.clone(),
            policy: Policy::Strict,
            name: self.name.clone(),
        }
    }

    /// Returns a copy that silently drops unknown keys at decode time.
    #[must_use = "builder methods must be chained or built"]
    pub fn violet(&self) -> Self {
        Self {
            shape: self.shape.clone(),
            policy: Policy::Violet,
            name: self.name.clone(),
        }
    }

    /// The active enforcement policy.
    #[must_use]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// The shared loose core: decode every declared field, accumulating
    /// sibling failures. Unknown keys stay in the output for the policy
    /// step to inspect.
    fn decode_loose(&self, map: &Map) -> Result<Map, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut out = map.clone();

        for (key, codec) in self.shape.fields() {
            match codec.decode(map.get(key)) {
                Ok(Some(decoded)) => {
                    out.insert(key.clone(), decoded);
                }
                Ok(None) => {
                    out.shift_remove(key);
                }
                Err(field_errors) => errors.extend(field_errors.under_key(key)),
            }
        }

        errors.into_result(out)
    }

    fn is_loose(&self, map: &Map) -> bool {
        self.shape
            .required
            .iter()
            .all(|(key, codec)| codec.is(map.get(key)))
            && self
                .shape
                .optional
                .iter()
                .all(|(key, codec)| map.get(key).is_none() || codec.is(map.get(key)))
    }
}

impl fmt::Debug for ObjectCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectCodec")
            .field("name", &self.name)
            .field("policy", &self.policy)
            .field("shape", &self.shape)
            .finish()
    }
}

impl Codec for ObjectCodec {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn is(&self, input: Input<'_>) -> bool {
        let map = match input {
            Some(Value::Object(map)) => map,
            _ => return false,
        };
        match self.policy {
            Policy::Strict => {
                self.is_loose(map) && map.keys().all(|key| self.shape.contains(key))
            }
            Policy::Loose | Policy::Violet => self.is_loose(map),
        }
    }

    fn decode(&self, input: Input<'_>) -> DecodeResult {
        let map = match input {
            Some(Value::Object(map)) => map,
            other => return Err(ValidationError::mismatch(self.name.clone(), other).into()),
        };

        let out = self.decode_loose(map)?;

        match self.policy {
            Policy::Loose => Ok(Some(Value::Object(out))),
            Policy::Strict => {
                let mut errors = ValidationErrors::new();
                for (key, value) in &out {
                    if !self.shape.contains(key) {
                        errors.add(
                            ValidationError::additional_property(Some(value))
                                .under_key(key.clone()),
                        );
                    }
                }
                errors.into_result(Some(Value::Object(out)))
            }
            Policy::Violet => {
                let kept: Map = out
                    .into_iter()
                    .filter(|(key, _)| self.shape.contains(key))
                    .collect();
                Ok(Some(Value::Object(kept)))
            }
        }
    }

    fn encode(&self, value: Input<'_>) -> Decoded {
        match value {
            Some(Value::Object(map)) => {
                let mut out = map.clone();
                for (key, codec) in self.shape.fields() {
                    if let Some(field) = map.get(key) {
                        match codec.encode(Some(field)) {
                            Some(encoded) => {
                                out.insert(key.clone(), encoded);
                            }
                            None => {
                                out.shift_remove(key);
                            }
                        }
                    }
                }
                Some(Value::Object(out))
            }
            other => other.cloned(),
        }
    }
}

/// Creates a loose object codec from a shape.
#[must_use]
pub fn object(shape: Shape) -> ObjectCodec {
    ObjectCodec::new(shape)
}

// ============================================================================
// TESTS
// ============================================================================
