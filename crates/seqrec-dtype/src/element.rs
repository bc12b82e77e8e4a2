use std::fmt;
use std::str::FromStr;

use bytes::{BufMut, BytesMut};

use crate::error::{ElementError, Result};
use crate::value::Value;

/// Descriptor for one fixed-width machine scalar.
///
/// Carries the element byte size and the encode/decode routines between raw
/// payload bytes and [`Value`]. All encodings use host-native byte order,
/// matching the layout unformatted sequential files are produced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
}

impl ElementType {
    /// Size of one element in bytes.
    pub fn size(self) -> usize {
        match self {
            ElementType::I8 | ElementType::U8 => 1,
            ElementType::I16 | ElementType::U16 => 2,
            ElementType::I32 | ElementType::U32 | ElementType::F32 => 4,
            ElementType::I64 | ElementType::U64 | ElementType::F64 => 8,
        }
    }

    /// Canonical short name, e.g. `i32` or `f64`.
    pub fn name(self) -> &'static str {
        match self {
            ElementType::I8 => "i8",
            ElementType::I16 => "i16",
            ElementType::I32 => "i32",
            ElementType::I64 => "i64",
            ElementType::U8 => "u8",
            ElementType::U16 => "u16",
            ElementType::U32 => "u32",
            ElementType::U64 => "u64",
            ElementType::F32 => "f32",
            ElementType::F64 => "f64",
        }
    }

    /// Encode one value as this element type, appending to `dst`.
    ///
    /// Integer narrowing is range-checked; floats are never implicitly
    /// converted to integer types; integers convert to float types.
    pub fn encode(self, value: &Value, dst: &mut BytesMut) -> Result<()> {
        match self {
            ElementType::I8 => dst.put_i8(self.narrow_i64(value)? as i8),
            ElementType::I16 => dst.put_i16_ne(self.narrow_i64(value)? as i16),
            ElementType::I32 => dst.put_i32_ne(self.narrow_i64(value)? as i32),
            ElementType::I64 => dst.put_i64_ne(self.to_i64(value)?),
            ElementType::U8 => dst.put_u8(self.narrow_u64(value)? as u8),
            ElementType::U16 => dst.put_u16_ne(self.narrow_u64(value)? as u16),
            ElementType::U32 => dst.put_u32_ne(self.narrow_u64(value)? as u32),
            ElementType::U64 => dst.put_u64_ne(self.to_u64(value)?),
            ElementType::F32 => dst.put_f32_ne(self.to_f32(value)?),
            ElementType::F64 => dst.put_f64_ne(self.to_f64(value)),
        }
        Ok(())
    }

    /// Decode one element from `bytes`, which must be exactly `size()` long.
    pub fn decode(self, bytes: &[u8]) -> Result<Value> {
        let value = match self {
            ElementType::I8 => Value::Int(i8::from_ne_bytes(self.array(bytes)?).into()),
            ElementType::I16 => Value::Int(i16::from_ne_bytes(self.array(bytes)?).into()),
            ElementType::I32 => Value::Int(i32::from_ne_bytes(self.array(bytes)?).into()),
            ElementType::I64 => Value::Int(i64::from_ne_bytes(self.array(bytes)?)),
            ElementType::U8 => Value::Uint(u8::from_ne_bytes(self.array(bytes)?).into()),
            ElementType::U16 => Value::Uint(u16::from_ne_bytes(self.array(bytes)?).into()),
            ElementType::U32 => Value::Uint(u32::from_ne_bytes(self.array(bytes)?).into()),
            ElementType::U64 => Value::Uint(u64::from_ne_bytes(self.array(bytes)?)),
            ElementType::F32 => Value::Float(f32::from_ne_bytes(self.array(bytes)?).into()),
            ElementType::F64 => Value::Float(f64::from_ne_bytes(self.array(bytes)?)),
        };
        Ok(value)
    }

    fn array<const N: usize>(self, bytes: &[u8]) -> Result<[u8; N]> {
        bytes.try_into().map_err(|_| ElementError::WrongLength {
            ty: self,
            expected: N,
            got: bytes.len(),
        })
    }

    fn to_i64(self, value: &Value) -> Result<i64> {
        match *value {
            Value::Int(v) => Ok(v),
            Value::Uint(v) => i64::try_from(v).map_err(|_| ElementError::OutOfRange {
                value: *value,
                ty: self,
            }),
            Value::Float(_) => Err(ElementError::Unrepresentable {
                value: *value,
                ty: self,
            }),
        }
    }

    fn narrow_i64(self, value: &Value) -> Result<i64> {
        let v = self.to_i64(value)?;
        let bits = self.size() as u32 * 8;
        let min = -(1i64 << (bits - 1));
        let max = (1i64 << (bits - 1)) - 1;
        if v < min || v > max {
            return Err(ElementError::OutOfRange {
                value: *value,
                ty: self,
            });
        }
        Ok(v)
    }

    fn to_u64(self, value: &Value) -> Result<u64> {
        match *value {
            Value::Uint(v) => Ok(v),
            Value::Int(v) => u64::try_from(v).map_err(|_| ElementError::OutOfRange {
                value: *value,
                ty: self,
            }),
            Value::Float(_) => Err(ElementError::Unrepresentable {
                value: *value,
                ty: self,
            }),
        }
    }

    fn narrow_u64(self, value: &Value) -> Result<u64> {
        let v = self.to_u64(value)?;
        let bits = self.size() as u32 * 8;
        let max = if bits == 64 { u64::MAX } else { (1u64 << bits) - 1 };
        if v > max {
            return Err(ElementError::OutOfRange {
                value: *value,
                ty: self,
            });
        }
        Ok(v)
    }

    fn to_f64(self, value: &Value) -> f64 {
        match *value {
            Value::Int(v) => v as f64,
            Value::Uint(v) => v as f64,
            Value::Float(v) => v,
        }
    }

    fn to_f32(self, value: &Value) -> Result<f32> {
        let v = self.to_f64(value);
        let narrowed = v as f32;
        if v.is_finite() && narrowed.is_infinite() {
            return Err(ElementError::OutOfRange {
                value: *value,
                ty: self,
            });
        }
        Ok(narrowed)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementType {
    type Err = ElementError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "i8" => Ok(ElementType::I8),
            "i16" => Ok(ElementType::I16),
            "i32" => Ok(ElementType::I32),
            "i64" => Ok(ElementType::I64),
            "u8" => Ok(ElementType::U8),
            "u16" => Ok(ElementType::U16),
            "u32" => Ok(ElementType::U32),
            "u64" => Ok(ElementType::U64),
            "f32" => Ok(ElementType::F32),
            "f64" => Ok(ElementType::F64),
            other => Err(ElementError::UnknownType(other.to_string())),
        }
    }
}
