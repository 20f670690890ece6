//! The core codec trait.
//!
//! A [`Codec`] can test membership of an untrusted value, decode it into a
//! validated (possibly transformed) value, and encode a trusted value back
//! to its wire form. Decorators and shape/temporal refinements all speak
//! this one trait, so they compose transparently.
//!
//! Absence is positional: codec inputs are `Option<&Value>` (`None` marks a
//! missing object key or an explicitly absent argument) and decoded results
//! are `Option<Value>` (`None` marks an absent result, e.g. a normalized
//! null). The trait is object-safe, so heterogeneous field codecs can be
//! type-erased behind `Arc<dyn Codec>`.

use std::borrow::Cow;
use std::sync::Arc;

use crate::decorators::{Convert, GuardFn, Nullable, Optional};
use crate::foundation::error::ValidationErrors;
use crate::value::Value;

/// A codec input: a borrowed dynamic value, or `None` when the position is
/// absent.
pub type Input<'a> = Option<&'a Value>;

/// A decoded (or encoded) result value. `None` marks an absent result.
pub type Decoded = Option<Value>;

/// The result of a decode call: the decoded value, or every failure the
/// decoder found.
pub type DecodeResult = Result<Decoded, ValidationErrors>;

// ============================================================================
// CORE CODEC TRAIT
// ============================================================================

/// The core trait every validator implements.
///
/// # Contract
///
/// * `is(v)` holds whenever `decode(v)` succeeds with `v` unchanged.
/// * `encode` is total and never fails; on well-formed values it is the
///   left inverse of a successful `decode`.
/// * `decode` and `encode` never mutate their input and never panic on
///   malformed input data; every data failure is a returned error.
///
/// Codecs are immutable after construction and `Send + Sync`, so one codec
/// value is safely shared across concurrent callers.
pub trait Codec: Send + Sync {
    /// The display name, used in error reports and derived object names.
    fn name(&self) -> Cow<'_, str>;

    /// Tests whether `input` is a member of this codec's type.
    fn is(&self, input: Input<'_>) -> bool;

    /// Decodes untrusted input, accumulating every failure found.
    fn decode(&self, input: Input<'_>) -> DecodeResult;

    /// Encodes a trusted value back to its wire form.
    fn encode(&self, value: Input<'_>) -> Decoded;

    /// The codec this one wraps, when it is a decorator.
    ///
    /// Composition logic can walk the chain through this method; plain
    /// codecs return `None`.
    fn inner(&self) -> Option<&dyn Codec> {
        None
    }
}

impl<C: Codec + ?Sized> Codec for &C {
    fn name(&self) -> Cow<'_, str> {
        (**self).name()
    }

    fn is(&self, input: Input<'_>) -> bool {
        (**self).is(input)
    }

    fn decode(&self, input: Input<'_>) -> DecodeResult {
        (**self).decode(input)
    }

    fn encode(&self, value: Input<'_>) -> Decoded {
        (**self).encode(value)
    }

    fn inner(&self) -> Option<&dyn Codec> {
        (**self).inner()
    }
}

impl<C: Codec + ?Sized> Codec for Box<C> {
    fn name(&self) -> Cow<'_, str> {
        (**self).name()
    }

    fn is(&self, input: Input<'_>) -> bool {
        (**self).is(input)
    }

    fn decode(&self, input: Input<'_>) -> DecodeResult {
        (**self).decode(input)
    }

    fn encode(&self, value: Input<'_>) -> Decoded {
        (**self).encode(value)
    }

    fn inner(&self) -> Option<&dyn Codec> {
        (**self).inner()
    }
}

impl<C: Codec + ?Sized> Codec for Arc<C> {
    fn name(&self) -> Cow<'_, str> {
        (**self).name()
    }

    fn is(&self, input: Input<'_>) -> bool {
        (**self).is(input)
    }

    fn decode(&self, input: Input<'_>) -> DecodeResult {
        (**self).decode(input)
    }

    fn encode(&self, value: Input<'_>) -> Decoded {
        (**self).encode(value)
    }

    fn inner(&self) -> Option<&dyn Codec> {
        (**self).inner()
    }
}

// ============================================================================
// CODEC EXTENSION TRAIT
// ============================================================================

/// Extension trait providing chainable decorator constructors.
///
/// Automatically implemented for every [`Codec`].
///
/// # Examples
///
/// ```rust,ignore
/// use cribble::prelude::*;
///
/// let lenient = boolean().nullable();
/// assert_eq!(lenient.decode(Some(&Value::Null)), Ok(None));
/// ```
pub trait CodecExt: Codec + Sized {
    /// Coerces the input with `convert` before delegating to `self`.
    ///
    /// Conversion is a decode-time-only concern: `is` and `encode` are
    /// unaffected.
    fn convert<F>(self, convert: F) -> Convert<Self, F, GuardFn>
    where
        F: Fn(Input<'_>) -> Decoded + Send + Sync,
    {
        Convert::new(self, convert)
    }

    /// Coerces the input with `convert`, but only when `guard` holds;
    /// other inputs delegate to `self` untouched.
    fn convert_when<F, G>(self, convert: F, guard: G) -> Convert<Self, F, G>
    where
        F: Fn(Input<'_>) -> Decoded + Send + Sync,
        G: Fn(Input<'_>) -> bool + Send + Sync,
    {
        Convert::with_guard(self, convert, guard)
    }

    /// Normalizes `null` and absent input to an absent decode result.
    fn nullable(self) -> Nullable<Self> {
        Nullable::new(self)
    }

    /// Accepts absent input (decoding it to absent) while still rejecting
    /// `null` exactly as `self` does.
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// Type-erases the codec for heterogeneous storage.
    fn boxed(self) -> Box<dyn Codec>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<T: Codec> CodecExt for T {}

// ============================================================================
// TESTS
// ============================================================================
