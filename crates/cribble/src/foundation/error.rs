//! Error types for decode failures.
//!
//! Every decode failure is a [`ValidationError`]: a stable machine code, a
//! human message, the [`Path`] at which the failure occurred, the expected
//! type's display name, and the offending value. Sibling failures accumulate
//! into a [`ValidationErrors`] collection rather than short-circuiting.
//!
//! String fields use `Cow<'static, str>` for zero-allocation in the common
//! case of static error codes and messages.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

use crate::foundation::traits::Input;
use crate::value::Value;

// ============================================================================
// PATHS
// ============================================================================

/// One step from an enclosing value to the failing position: an object key
/// or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Segment {
    Key(String),
    Index(usize),
}

/// The position of a failure, as the sequence of keys and indices traversed
/// from the root. Renders as `user.email` or `items[0].name`; the root path
/// renders empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// The root path (no segments).
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns true when no segment has been recorded.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The traversed segments, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    fn prepend(&mut self, segment: Segment) {
        self.segments.insert(0, segment);
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(key) if i == 0 => write!(f, "{key}")?,
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

type Params = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

/// A structured decode failure.
///
/// # Examples
///
/// ```rust,ignore
/// let error = ValidationError::mismatch("boolean", Some(&Value::Number(1.0)))
///     .under_key("active");
/// assert_eq!(error.path.to_string(), "active");
/// ```
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "type_mismatch", "additional_property"
    pub code: Cow<'static, str>,

    /// Human-readable error message in English.
    pub message: Cow<'static, str>,

    /// Where in the input the failure occurred.
    pub path: Path,

    /// Display name of the type the failing position was expected to hold.
    pub expected: Option<Cow<'static, str>>,

    /// The offending value. `None` when the input was absent.
    pub actual: Option<Value>,

    /// Parameters for the error message template.
    ///
    /// Stored as ordered key-value pairs (typically 0-3 params).
    pub params: Params,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: Path::root(),
            expected: None,
            actual: None,
            params: Params::new(),
        }
    }

    /// Creates a "type_mismatch" error: the input does not satisfy the
    /// named codec's predicate.
    pub fn mismatch(expected: impl Into<Cow<'static, str>>, actual: Input<'_>) -> Self {
        let expected = expected.into();
        let got = actual.map_or("absent", Value::type_name);
        Self::new("type_mismatch", format!("expected {expected}, got {got}"))
            .with_expected(expected)
            .with_actual(actual)
    }

    /// Creates an "additional_property" error: a decoded object carries an
    /// own property outside the declared key set.
    pub fn additional_property(actual: Input<'_>) -> Self {
        Self::new("additional_property", "no additional properties allowed")
            .with_expected("no additional properties")
            .with_actual(actual)
    }

    /// Sets the expected-type name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_expected(mut self, expected: impl Into<Cow<'static, str>>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Records the offending value (`None` for absent input).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_actual(mut self, actual: Input<'_>) -> Self {
        self.actual = actual.cloned();
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Re-roots the error one object level up, under `key`.
    #[must_use = "builder methods must be chained or built"]
    pub fn under_key(mut self, key: impl Into<String>) -> Self {
        self.path.prepend(Segment::Key(key.into()));
        self
    }

    /// Re-roots the error one array level up, under `index`.
    #[must_use = "builder methods must be chained or built"]
    pub fn under_index(mut self, index: usize) -> Self {
        self.path.prepend(Segment::Index(index));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Converts the error to a JSON structure for reporting.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "code": self.code,
            "message": self.message,
            "path": self.path,
            "expected": self.expected,
            "actual": self.actual,
            "params": params,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "{}: {}", self.code, self.message)?;
        } else {
            write!(f, "[{}] {}: {}", self.path, self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// An ordered collection of decode failures.
///
/// Decoders report every sibling failure from one call, in the order the
/// failing positions were visited.
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Adds every error from `other` to the collection.
    pub fn extend(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Re-roots every contained error under an object key.
    #[must_use = "builder methods must be chained or built"]
    pub fn under_key(mut self, key: &str) -> Self {
        for error in &mut self.errors {
            error.path.prepend(Segment::Key(key.to_owned()));
        }
        self
    }

    /// Re-roots every contained error under an array index.
    #[must_use = "builder methods must be chained or built"]
    pub fn under_index(mut self, index: usize) -> Self {
        for error in &mut self.errors {
            error.path.prepend(Segment::Index(index));
        }
        self
    }

    /// Converts to a Result: `ok_value` when empty, the collection otherwise.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() { Ok(ok_value) } else { Err(self) }
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Decoding failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_records_the_triple() {
        let value = Value::from(1.0);
        let error = ValidationError::mismatch("boolean", Some(&value));
        assert_eq!(error.code, "type_mismatch");
        assert_eq!(error.expected.as_deref(), Some("boolean"));
        assert_eq!(error.actual, Some(Value::Number(1.0)));
    }

    #[test]
    fn mismatch_on_absent_input() {
        let error = ValidationError::mismatch("string", None);
        assert_eq!(error.actual, None);
        assert!(error.message.contains("got absent"));
    }

    #[test]
    fn path_rendering() {
        let error = ValidationError::mismatch("number", None)
            .under_key("price")
            .under_index(2)
            .under_key("items");
        assert_eq!(error.path.to_string(), "items[2].price");
    }

    #[test]
    fn root_path_renders_empty() {
        assert_eq!(Path::root().to_string(), "");
        assert!(Path::root().is_root());
    }

    #[test]
    fn params_lookup() {
        let error = ValidationError::new("min", "too small")
            .with_param("min", "5")
            .with_param("actual", "3");
        assert_eq!(error.param("min"), Some("5"));
        assert_eq!(error.param("actual"), Some("3"));
        assert_eq!(error.param("missing"), None);
    }

    #[test]
    fn collection_accumulates_in_order() {
        let mut errors = ValidationErrors::new();
        errors.add(ValidationError::new("first", "first error"));
        errors.add(ValidationError::new("second", "second error"));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.errors()[0].code, "first");
        assert_eq!(errors.errors()[1].code, "second");
    }

    #[test]
    fn under_key_re_roots_every_error() {
        let errors: ValidationErrors = vec![
            ValidationError::mismatch("boolean", None),
            ValidationError::mismatch("string", None).under_key("inner"),
        ]
        .into_iter()
        .collect();

        let errors = errors.under_key("outer");
        assert_eq!(errors.errors()[0].path.to_string(), "outer");
        assert_eq!(errors.errors()[1].path.to_string(), "outer.inner");
    }

    #[test]
    fn path_serializes_as_segment_array() {
        let error = ValidationError::mismatch("number", None)
            .under_index(0)
            .under_key("items");
        let json = error.to_json_value();
        assert_eq!(json["path"], serde_json::json!(["items", 0]));
    }

    #[test]
    fn zero_alloc_static_strings() {
        let error = ValidationError::new("additional_property", "no additional properties allowed");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn into_result() {
        let empty = ValidationErrors::new();
        assert!(matches!(empty.into_result(1), Ok(1)));

        let mut errors = ValidationErrors::new();
        errors.add(ValidationError::new("x", "y"));
        assert!(errors.into_result(1).is_err());
    }
}
