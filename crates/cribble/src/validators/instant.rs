//! Instant codec with chainable range and string-parsing refinements.
//!
//! The base codec accepts only `Value::Instant`: numbers, strings, null,
//! and non-finite values are type mismatches. Refinements are independently
//! addable in any order; each returns a new codec carrying a display name
//! that reflects every active refinement, and the receiver stays usable
//! (the type is `Copy`).
//!
//! # Examples
//!
//! ```rust,ignore
//! use cribble::prelude::*;
//!
//! let launch_window = instant()
//!     .min(opening)
//!     .max(closing)
//!     .parse_strings();
//! ```

use std::borrow::Cow;

use chrono::{DateTime, Utc};

use crate::foundation::{Codec, DecodeResult, Decoded, Input, ValidationError};
use crate::value::{Value, format_instant};

/// A codec over `Value::Instant` with inclusive bounds and optional
/// RFC 3339 string parsing.
///
/// Bound violations surface as type mismatches whose expected name is the
/// refined codec's composed name, since the refined membership predicate
/// encodes the bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InstantCodec {
    min: Option<DateTime<Utc>>,
    max: Option<DateTime<Utc>>,
    parse_strings: bool,
    name: Option<&'static str>,
}

impl InstantCodec {
    /// Creates the base instant codec with no refinements.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the base display name (defaults to `instant`). Active
    /// refinements still compose onto the overridden name.
    #[must_use = "builder methods must be chained or built"]
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    /// Requires decoded instants to be at or after `bound` (inclusive).
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, bound: DateTime<Utc>) -> Self {
        self.min = Some(bound);
        self
    }

    /// Requires decoded instants to be at or before `bound` (inclusive).
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, bound: DateTime<Utc>) -> Self {
        self.max = Some(bound);
        self
    }

    /// Additionally accepts RFC 3339 strings at decode time.
    ///
    /// Parse failure is a decode failure; a parsed string is subject to
    /// the active bounds. Membership testing is unaffected: a string is
    /// still a non-member.
    #[must_use = "builder methods must be chained or built"]
    pub fn parse_strings(mut self) -> Self {
        self.parse_strings = true;
        self
    }

    fn in_bounds(&self, t: DateTime<Utc>) -> bool {
        self.min.is_none_or(|min| t >= min) && self.max.is_none_or(|max| t <= max)
    }

    fn check(&self, t: DateTime<Utc>, input: Input<'_>) -> DecodeResult {
        if self.in_bounds(t) {
            Ok(Some(Value::Instant(t)))
        } else {
            Err(ValidationError::mismatch(self.name().into_owned(), input).into())
        }
    }
}

impl Codec for InstantCodec {
    fn name(&self) -> Cow<'_, str> {
        let base = self.name.unwrap_or("instant");
        let mut refinements: Vec<String> = Vec::new();
        if let Some(min) = self.min {
            refinements.push(format!(">={}", format_instant(&min)));
        }
        if let Some(max) = self.max {
            refinements.push(format!("<={}", format_instant(&max)));
        }
        if self.parse_strings {
            refinements.push("parse".to_owned());
        }
        if refinements.is_empty() {
            Cow::Borrowed(base)
        } else {
            Cow::Owned(format!("{base}({})", refinements.join(", ")))
        }
    }

    fn is(&self, input: Input<'_>) -> bool {
        matches!(input, Some(Value::Instant(t)) if self.in_bounds(*t))
    }

    fn decode(&self, input: Input<'_>) -> DecodeResult {
        match input {
            Some(Value::Instant(t)) => self.check(*t, input),
            Some(Value::String(s)) if self.parse_strings => {
                match DateTime::parse_from_rfc3339(s) {
                    Ok(parsed) => self.check(parsed.with_timezone(&Utc), input),
                    Err(_) => Err(ValidationError::mismatch(self.name().into_owned(), input).into()),
                }
            }
            other => Err(ValidationError::mismatch(self.name().into_owned(), other).into()),
        }
    }

    fn encode(&self, value: Input<'_>) -> Decoded {
        value.cloned()
    }
}

/// Creates the base instant codec.
#[must_use]
pub fn instant() -> InstantCodec {
    InstantCodec::new()
}

// ============================================================================
// TESTS
// ============================================================================
