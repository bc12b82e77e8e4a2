//! Element type descriptors for sequential record payloads.
//!
//! A record payload is just bytes; this crate supplies the typed view over
//! it: [`ElementType`] names one of the ten fixed-width machine scalars and
//! knows its byte size and how to encode/decode a dynamic [`Value`] in
//! host-native byte order.
//!
//! The record layers never interpret payloads themselves — they take an
//! `ElementType` from the caller and defer to it, so the framing protocol
//! stays independent of what the bytes mean.

pub mod element;
pub mod error;
pub mod value;

pub use element::ElementType;
pub use error::{ElementError, Result};
pub use value::Value;
