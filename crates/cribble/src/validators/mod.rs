//! Built-in codecs: primitives, the object shape engine, arrays, and the
//! instant codec.

pub mod array;
pub mod instant;
pub mod object;
pub mod primitive;

pub use array::{ArrayCodec, array};
pub use instant::{InstantCodec, instant};
pub use object::{ObjectCodec, Policy, Shape, object};
pub use primitive::{
    AnyCodec, BooleanCodec, NumberCodec, StringCodec, any, boolean, number, string,
};
