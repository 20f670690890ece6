//! Homogeneous array codec.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::foundation::{Codec, DecodeResult, Decoded, Input, ValidationError, ValidationErrors};
use crate::value::Value;

/// A codec over `Value::Array` whose elements all satisfy one element
/// codec. Element failures accumulate across the whole array, each tagged
/// with its index.
#[derive(Clone)]
pub struct ArrayCodec {
    elem: Arc<dyn Codec>,
    name: Option<Cow<'static, str>>,
}

impl ArrayCodec {
    /// Creates an array codec over `elem`.
    pub fn new(elem: impl Codec + 'static) -> Self {
        Self {
            elem: Arc::new(elem),
            name: None,
        }
    }

    /// Overrides the display name (defaults to `<elem>[]`).
    #[must_use = "builder methods must be chained or built"]
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl fmt::Debug for ArrayCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayCodec")
            .field("elem", &self.elem.name())
            .field("name", &self.name)
            .finish()
    }
}

impl Codec for ArrayCodec {
    fn name(&self) -> Cow<'_, str> {
        match &self.name {
            Some(name) => Cow::Borrowed(name.as_ref()),
            None => Cow::Owned(format!("{}[]", self.elem.name())),
        }
    }

    fn is(&self, input: Input<'_>) -> bool {
        match input {
            Some(Value::Array(items)) => items.iter().all(|item| self.elem.is(Some(item))),
            _ => false,
        }
    }

    fn decode(&self, input: Input<'_>) -> DecodeResult {
        let items = match input {
            Some(Value::Array(items)) => items,
            other => return Err(ValidationError::mismatch(self.name().into_owned(), other).into()),
        };

        let mut errors = ValidationErrors::new();
        let mut out = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match self.elem.decode(Some(item)) {
                // An absent element result becomes null so positions hold.
                Ok(decoded) => out.push(decoded.unwrap_or(Value::Null)),
                Err(elem_errors) => errors.extend(elem_errors.under_index(index)),
            }
        }

        errors.into_result(Some(Value::Array(out)))
    }

    fn encode(&self, value: Input<'_>) -> Decoded {
        match value {
            Some(Value::Array(items)) => Some(Value::Array(
                items
                    .iter()
                    .map(|item| self.elem.encode(Some(item)).unwrap_or(Value::Null))
                    .collect(),
            )),
            other => other.cloned(),
        }
    }
}

/// Creates an array codec over `elem`.
pub fn array(elem: impl Codec + 'static) -> ArrayCodec {
    ArrayCodec::new(elem)
}

// ============================================================================
// TESTS
// ============================================================================
