use crate::element::ElementType;
use crate::value::Value;

/// Errors that can occur converting values to or from element types.
#[derive(Debug, thiserror::Error)]
pub enum ElementError {
    /// The value does not fit in the requested element type's range.
    #[error("value {value} is out of range for element type {ty}")]
    OutOfRange { value: Value, ty: ElementType },

    /// The value's kind cannot be represented by the requested element type
    /// (e.g. a float written as an integer type).
    #[error("value {value} cannot be represented as element type {ty}")]
    Unrepresentable { value: Value, ty: ElementType },

    /// The byte slice length does not match the element size.
    #[error("expected {expected} bytes for element type {ty}, got {got}")]
    WrongLength {
        ty: ElementType,
        expected: usize,
        got: usize,
    },

    /// The element type name is not recognized.
    #[error("unknown element type: {0}")]
    UnknownType(String),
}

pub type Result<T> = std::result::Result<T, ElementError>;
