//! Core codec types and traits.
//!
//! This module contains the fundamental building blocks of the library:
//!
//! - **Traits**: [`Codec`], [`CodecExt`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`Path`]
//!
//! # Architecture
//!
//! Codecs are immutable values composed by wrapping: a decorator owns
//! exactly one inner codec and overrides exactly one of `is`/`decode`/
//! `encode`, delegating the rest. There is no shared mutable state; every
//! call is pure, synchronous, and reentrant.
//!
//! Errors accumulate rather than short-circuit: one decode call reports
//! every failing position, each carrying its [`Path`] from the root, the
//! expected type's name, and the offending value.

pub mod error;
pub mod traits;

pub use error::{Path, Segment, ValidationError, ValidationErrors};
pub use traits::{Codec, CodecExt, DecodeResult, Decoded, Input};
