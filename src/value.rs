// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Operands that arrive at the public boundary of a buffer.
//!
//! Most byte-sequence operations accept "anything that looks like bytes" or
//! "anything that can act as an integer". [`Value`] is the tagged form of
//! those inputs: it keeps text, floats and absent values as distinct variants
//! so an operation can reject them with a `TypeMismatch` instead of silently
//! coercing.
//!
//! [`AsIndex`] is the index-like capability: one operation producing an
//! integer. Primitive integers implement it; so can any caller type.
//!
//! ```
//! use bytebuf::{AsIndex, ByteBuffer, Value};
//!
//! struct Slot(i64);
//! impl AsIndex for Slot {
//!     fn as_index(&self) -> i64 { self.0 }
//! }
//!
//! let mut buf = ByteBuffer::from(&b"abc"[..]);
//! let slot = Slot(120);
//! buf.append(Value::index(&slot)).unwrap();
//! assert_eq!(buf, b"abcx");
//! ```

use crate::error::{BufferError, Result};

/// Index-like capability: produce an integer on request.
pub trait AsIndex {
    fn as_index(&self) -> i64;
}

macro_rules! as_index_lossless {
    ($($t:ty),*) => {
        $(impl AsIndex for $t {
            #[inline]
            fn as_index(&self) -> i64 {
                i64::from(*self)
            }
        })*
    };
}

macro_rules! as_index_saturating {
    ($($t:ty),*) => {
        $(impl AsIndex for $t {
            #[inline]
            fn as_index(&self) -> i64 {
                i64::try_from(*self).unwrap_or(if *self > 0 as $t { i64::MAX } else { i64::MIN })
            }
        })*
    };
}

as_index_lossless!(i8, i16, i32, i64, u8, u16, u32);
as_index_saturating!(u64, usize, isize, i128, u128);

/// A borrowed, tagged operand.
#[derive(Clone, Copy)]
pub enum Value<'a> {
    Int(i64),
    Index(&'a dyn AsIndex),
    Bytes(&'a [u8]),
    Text(&'a str),
    Float(f64),
    None,
}

impl<'a> Value<'a> {
    /// Wrap an index-like object.
    pub fn index(obj: &'a dyn AsIndex) -> Self {
        Value::Index(obj)
    }

    /// Human-readable kind, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Index(_) => "index-like",
            Value::Bytes(_) => "bytes",
            Value::Text(_) => "str",
            Value::Float(_) => "float",
            Value::None => "None",
        }
    }

    /// Resolve through the index protocol.
    ///
    /// Integers pass through, index-like objects are asked for their integer,
    /// everything else is a `TypeMismatch`.
    pub fn to_index(&self, op: &'static str) -> Result<i64> {
        match self {
            Value::Int(i) => Ok(*i),
            Value::Index(obj) => Ok(obj.as_index()),
            other => Err(BufferError::type_mismatch(op, "an integer", other.kind_name())),
        }
    }

    /// Resolve through the index protocol and range-check to a byte.
    pub fn to_byte(&self, op: &'static str) -> Result<u8> {
        let value = self.to_index(op)?;
        u8::try_from(value).map_err(|_| BufferError::ByteOutOfRange { value })
    }

    /// The byte-sequence view of this operand.
    ///
    /// Text is rejected; crossing into bytes requires an explicit codec step.
    pub fn to_bytes(&self, op: &'static str) -> Result<&'a [u8]> {
        match self {
            Value::Bytes(b) => Ok(b),
            other => Err(BufferError::type_mismatch(op, "a bytes-like object", other.kind_name())),
        }
    }

    /// Whether this operand is a byte sequence.
    pub fn is_bytes(&self) -> bool {
        matches!(self, Value::Bytes(_))
    }
}

impl std::fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(i) => write!(f, "Int({})", i),
            Value::Index(obj) => write!(f, "Index({})", obj.as_index()),
            Value::Bytes(b) => write!(f, "Bytes({})", crate::repr::escape(b)),
            Value::Text(s) => write!(f, "Text({:?})", s),
            Value::Float(x) => write!(f, "Float({})", x),
            Value::None => f.write_str("None"),
        }
    }
}

macro_rules! value_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Value<'_> {
            #[inline]
            fn from(v: $t) -> Self {
                Value::Int(v.as_index())
            }
        })*
    };
}

value_from_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl From<f64> for Value<'_> {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl<'a> From<&'a [u8]> for Value<'a> {
    fn from(v: &'a [u8]) -> Self {
        Value::Bytes(v)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Value<'a> {
    fn from(v: &'a [u8; N]) -> Self {
        Value::Bytes(v)
    }
}

impl<'a> From<&'a Vec<u8>> for Value<'a> {
    fn from(v: &'a Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(v: &'a str) -> Self {
        Value::Text(v)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(v: &'a String) -> Self {
        Value::Text(v)
    }
}

impl<'a> From<&'a dyn AsIndex> for Value<'a> {
    fn from(v: &'a dyn AsIndex) -> Self {
        Value::Index(v)
    }
}

impl<'a, T> From<Option<T>> for Value<'a>
where
    T: Into<Value<'a>>,
{
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::None, Into::into)
    }
}
