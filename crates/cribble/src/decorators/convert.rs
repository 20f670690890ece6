//! CONVERT decorator - guarded decode-time coercion.
//!
//! [`Convert`] coerces the input value before delegating to the inner
//! codec, letting a codec accept a superset of input shapes without
//! altering its output contract. A guard predicate limits which inputs are
//! coerced; everything else reaches the inner codec untouched.
//!
//! Conversion is a decode-time-only concern: `is` and `encode` delegate
//! unchanged, so a coercible-but-unconverted value is still a non-member.

use std::borrow::Cow;

use crate::decorators::base::DecoratorBase;
use crate::foundation::{Codec, DecodeResult, Decoded, Input};

/// Guard predicate type used when no custom guard is supplied.
pub type GuardFn = for<'a> fn(Input<'a>) -> bool;

fn always(_: Input<'_>) -> bool {
    true
}

/// Coerces the input before delegating to the inner codec, when the guard
/// holds.
///
/// # Type Parameters
///
/// * `C` - The inner codec type
/// * `F` - The conversion function (`Fn(Input) -> Decoded`)
/// * `G` - The guard predicate (`Fn(Input) -> bool`)
///
/// # Examples
///
/// ```rust,ignore
/// use cribble::prelude::*;
///
/// // Accept numbers where a string is expected, by stringifying them.
/// let codec = string().convert_when(
///     |v| v.map(|v| Value::from(v.to_string())),
///     |v| matches!(v, Some(Value::Number(_))),
/// );
/// ```
#[derive(Clone)]
pub struct Convert<C, F, G = GuardFn> {
    base: DecoratorBase<C>,
    convert: F,
    guard: G,
}

impl<C: Codec, F> Convert<C, F, GuardFn> {
    /// Wraps `inner` with an unconditional conversion.
    pub fn new(inner: C, convert: F) -> Self {
        Self {
            base: DecoratorBase::new(inner),
            convert,
            guard: always,
        }
    }
}

impl<C: Codec, F, G> Convert<C, F, G> {
    /// Wraps `inner` with a conversion applied only when `guard` holds.
    pub fn with_guard(inner: C, convert: F, guard: G) -> Self {
        Self {
            base: DecoratorBase::new(inner),
            convert,
            guard,
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
}

impl<C, F, G> std::fmt::Debug for Convert<C, F, G>
where
    C: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Convert")
            .field("base", &self.base)
            .field("convert", &"<function>")
            .field("guard", &"<function>")
            .finish()
    }
}

impl<C, F, G> Codec for Convert<C, F, G>
where
    C: Codec,
    F: Fn(Input<'_>) -> Decoded + Send + Sync,
    G: Fn(Input<'_>) -> bool + Send + Sync,
{
    fn name(&self) -> Cow<'_, str> {
        self.base.name()
    }

    fn is(&self, input: Input<'_>) -> bool {
        self.base.is(input)
    }

    fn decode(&self, input: Input<'_>) -> DecodeResult {
        if (self.guard)(input) {
            let converted = (self.convert)(input);
            self.base.decode(converted.as_ref())
        } else {
            self.base.decode(input)
        }
    }

    fn encode(&self, value: Input<'_>) -> Decoded {
        self.base.encode(value)
    }

    fn inner(&self) -> Option<&dyn Codec> {
        Some(self.base.inner())
    }
}

/// Creates an unconditional conversion decorator over `inner`.
pub fn convert<C, F>(inner: C, f: F) -> Convert<C, F, GuardFn>
where
    C: Codec,
    F: Fn(Input<'_>) -> Decoded + Send + Sync,
{
    Convert::new(inner, f)
}

/// Creates a guarded conversion decorator over `inner`.
pub fn convert_when<C, F, G>(inner: C, f: F, guard: G) -> Convert<C, F, G>
where
    C: Codec,
    F: Fn(Input<'_>) -> Decoded + Send + Sync,
    G: Fn(Input<'_>) -> bool + Send + Sync,
{
    Convert::with_guard(inner, f, guard)
}

// ============================================================================
// TESTS
// ============================================================================
