//! NULLABLE decorator - null normalization.
//!
//! [`Nullable`] treats `null` and absent input as "absent": decoding either
//! short-circuits to an absent result without consulting the inner codec.
//! Every other input delegates. This is the wrapper the object shape engine
//! applies to each optional field codec, so absence, `null`, and a missing
//! key all normalize to the same downstream shape.
//!
//! Only `decode` is affected: `is(null)` is still the inner codec's verdict,
//! and `encode` delegates unchanged.

use std::borrow::Cow;

use crate::decorators::base::DecoratorBase;
use crate::foundation::{Codec, DecodeResult, Decoded, Input};
use crate::value::Value;

/// Normalizes `null` and absent input to an absent decode result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nullable<C> {
    base: DecoratorBase<C>,
}

impl<C: Codec> Nullable<C> {
    /// Wraps `inner`.
    pub fn new(inner: C) -> Self {
        Self {
            base: DecoratorBase::new(inner),
        }
    }

    /// Overrides the display name (defaults to the inner codec's name).
    #[must_use = "builder methods must be chained or built"]
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.base = self.base.with_name(name);
        self
    }

    /// Returns a reference to the inner codec.
    pub fn inner_codec(&self) -> &C {
        self.base.inner()
    }

    /// Extracts the inner codec.
    pub fn into_inner(self) -> C {
        self.base.into_inner()
    }
}

impl<C: Codec> Codec for Nullable<C> {
    fn name(&self) -> Cow<'_, str> {
        self.base.name()
    }

    fn is(&self, input: Input<'_>) -> bool {
        self.base.is(input)
    }

    fn decode(&self, input: Input<'_>) -> DecodeResult {
        match input {
            None | Some(Value::Null) => Ok(None),
            present => self.base.decode(present),
        }
    }

    fn encode(&self, value: Input<'_>) -> Decoded {
        self.base.encode(value)
    }

    fn inner(&self) -> Option<&dyn Codec> {
        Some(self.base.inner())
    }
}

/// Creates a null-normalizing decorator over `inner`.
pub fn nullable<C: Codec>(inner: C) -> Nullable<C> {
    Nullable::new(inner)
}

// ============================================================================
// TESTS
// ============================================================================
