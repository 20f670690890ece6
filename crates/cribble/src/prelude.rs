//! Prelude module for convenient imports.
//!
//! Provides a single `use cribble::prelude::*;` import that brings in all
//! commonly needed traits, types, codecs, and decorators.
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
//! )
//! .strict();
//! ```

// ============================================================================
// FOUNDATION: Core trait, errors, aliases
// ============================================================================

pub use crate::foundation::{
    Codec, CodecExt, DecodeResult, Decoded, Input, Path, Segment, ValidationError,
    ValidationErrors,
};

// ============================================================================
// VALUE DOMAIN
// ============================================================================

pub use crate::value::{Map, Value};

// ============================================================================
// CODECS
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// DECORATORS
// ============================================================================

pub use crate::decorators::{
    Convert, DecoratorBase, Nullable, Optional, convert, convert_when, nullable, optional,
};
