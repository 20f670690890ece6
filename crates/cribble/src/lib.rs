//! # cribble
//!
//! Decode/encode/test combinators for untrusted dynamic values.
//!
//! A [`Codec`](foundation::Codec) tests membership (`is`), decodes
//! untrusted input into a validated value, and encodes a trusted value back
//! to its wire form. Decorators wrap one inner codec to add a single
//! behavior (coercion, null handling) while delegating the rest; the
//! object shape engine and the instant codec add structural and temporal
//! refinements.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cribble::prelude::*;
//! use serde_json::json;
//!
//! let user = object(
//!     Shape::new()
//!         .required("name", string())
//!         .optional("admin", boolean()),
//! );
//!
//! // Loose: unknown keys pass through. Strict: rejected. Violet: dropped.
//! let decoded = user.violet().decode(Some(&Value::from(json!({
//!     "name": "ada",
//!     "extra": 1,
//! }))));
//! ```
//!
//! ## Built-in Codecs
//!
//! - **Primitives**: [`any()`](validators::any()), [`boolean()`](validators::boolean()),
//!   [`number()`](validators::number()), [`string()`](validators::string())
//! - **Structural**: [`object()`](validators::object()), [`array()`](validators::array())
//! - **Temporal**: [`instant()`](validators::instant()) with `.min()`, `.max()`,
//!   `.parse_strings()`
//! - **Decorators**: [`Convert`](decorators::Convert),
//!   [`Nullable`](decorators::Nullable), [`Optional`](decorators::Optional)

pub mod decorators;
pub mod foundation;
pub mod prelude;
pub mod validators;
pub mod value;
