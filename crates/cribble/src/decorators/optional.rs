//! OPTIONAL decorator - absent-tolerant, null-rejecting.
//!
//! [`Optional`] accepts an absent input (decoding it to an absent result)
//! while delegating everything else, so `null` still fails exactly as the
//! inner codec fails it. Use it inside optional-property declarations that
//! must not conflate `null` with absence; [`Nullable`](super::Nullable) is
//! the variant that normalizes both.

use std::borrow::Cow;

use crate::decorators::base::DecoratorBase;
use crate::foundation::{Codec, DecodeResult, Decoded, Input};

/// Accepts absent input; rejects `null` as the inner codec would.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Optional<C> {
    base: DecoratorBase<C>,
}

impl<C: Codec> Optional<C> {
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

impl<C: Codec> Codec for Optional<C> {
    fn name(&self) -> Cow<'_, str> {
        self.base.name()
    }

    fn is(&self, input: Input<'_>) -> bool {
        input.is_none() || self.base.is(input)
    }

    fn decode(&self, input: Input<'_>) -> DecodeResult {
        match input {
            None => Ok(None),
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

/// Creates an absent-tolerant decorator over `inner`.
pub fn optional<C: Codec>(inner: C) -> Optional<C> {
    Optional::new(inner)
}

// ============================================================================
// TESTS
// ============================================================================
