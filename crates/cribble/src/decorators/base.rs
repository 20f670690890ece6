//! Shared delegation core for decorators.

use std::borrow::Cow;

use crate::foundation::{Codec, DecodeResult, Decoded, Input};

/// The delegation core every decorator embeds: the owned inner codec plus
/// an optional display-name override.
///
/// A decorator forwards the operations it does not customize through this
/// type, so unmodified operations behave exactly like the inner codec's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratorBase<C> {
    inner: C,
    name: Option<Cow<'static, str>>,
}

impl<C: Codec> DecoratorBase<C> {
    /// Wraps `inner`, keeping its display name.
    pub fn new(inner: C) -> Self {
        Self { inner, name: None }
    }

    /// Wraps `inner` under an overridden display name.
    pub fn named(inner: C, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            name: Some(name.into()),
        }
    }

    /// Replaces the display name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns a reference to the inner codec.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Extracts the inner codec.
    pub fn into_inner(self) -> C {
        self.inner
    }

    /// The override name if set, the inner codec's name otherwise.
    pub fn name(&self) -> Cow<'_, str> {
        match &self.name {
            Some(name) => Cow::Borrowed(name.as_ref()),
            None => self.inner.name(),
        }
    }

    /// Delegates membership testing to the inner codec.
    pub fn is(&self, input: Input<'_>) -> bool {
        self.inner.is(input)
    }

    /// Delegates decoding to the inner codec.
    pub fn decode(&self, input: Input<'_>) -> DecodeResult {
        self.inner.decode(input)
    }

    /// Delegates encoding to the inner codec.
    pub fn encode(&self, value: Input<'_>) -> Decoded {
        self.inner.encode(value)
    }
}
