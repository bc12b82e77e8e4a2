use std::fmt;

/// A dynamically typed scalar read from, or destined for, a record payload.
///
/// Decoding widens every element to one of these three carriers; encoding
/// narrows back down with range checks. Floats never silently convert to
/// integer types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// Signed integer, carries every `i8`..`i64` element.
    Int(i64),
    /// Unsigned integer, carries every `u8`..`u64` element.
    Uint(u64),
    /// Floating point, carries `f32` and `f64` elements.
    Float(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Uint(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Uint(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Uint(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v.into())
    }
}
