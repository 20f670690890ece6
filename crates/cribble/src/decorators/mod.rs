//! Decorators: codecs that wrap one inner codec to add or alter a single
//! behavior while delegating the rest.
//!
//! Every decorator embeds a [`DecoratorBase`], overrides exactly one of
//! `is`/`decode`/`encode`, and reports its wrapped codec through
//! [`Codec::inner`](crate::foundation::Codec::inner).

pub mod base;
pub mod convert;
pub mod nullable;
pub mod optional;

pub use base::DecoratorBase;
pub use convert::{Convert, GuardFn, convert, convert_when};
pub use nullable::{Nullable, nullable};
pub use optional::{Optional, optional};
