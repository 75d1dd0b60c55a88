// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Equality and ordering.
//!
//! Byte sequences compare lexicographically no matter which side is mutable.
//! Text is never equal to a buffer, and ordering against text (or anything
//! else that is not a byte sequence) is a `TypeMismatch`. The static trait
//! impls cover the byte types; [`ByteBuffer::equals`] and
//! [`ByteBuffer::compare`] take dynamic operands.

use std::cmp::Ordering;

use super::ByteBuffer;
use crate::error::{BufferError, Result};
use crate::value::Value;
use crate::view::ByteView;

impl PartialEq for ByteBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ByteBuffer {}

impl PartialOrd for ByteBuffer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByteBuffer {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

macro_rules! byte_peer {
    ($([$($g:tt)*] $peer:ty),* $(,)?) => {
        $(
            impl<$($g)*> PartialEq<$peer> for ByteBuffer {
                fn eq(&self, other: &$peer) -> bool {
                    self.as_bytes() == AsRef::<[u8]>::as_ref(other)
                }
            }

            impl<$($g)*> PartialEq<ByteBuffer> for $peer {
                fn eq(&self, other: &ByteBuffer) -> bool {
                    AsRef::<[u8]>::as_ref(self) == other.as_bytes()
                }
            }

            impl<$($g)*> PartialOrd<$peer> for ByteBuffer {
                fn partial_cmp(&self, other: &$peer) -> Option<Ordering> {
                    Some(self.as_bytes().cmp(AsRef::<[u8]>::as_ref(other)))
                }
            }

            impl<$($g)*> PartialOrd<ByteBuffer> for $peer {
                fn partial_cmp(&self, other: &ByteBuffer) -> Option<Ordering> {
                    Some(AsRef::<[u8]>::as_ref(self).cmp(other.as_bytes()))
                }
            }
        )*
    };
}

byte_peer! {
    [] [u8],
    ['a] &'a [u8],
    [] Vec<u8>,
    [const N: usize] [u8; N],
    ['a, const N: usize] &'a [u8; N],
    [] ByteView,
}

macro_rules! never_equal_to_text {
    ($([$($g:tt)*] $text:ty),* $(,)?) => {
        $(
            impl<$($g)*> PartialEq<$text> for ByteBuffer {
                fn eq(&self, _other: &$text) -> bool {
                    false
                }
            }

            impl<$($g)*> PartialEq<ByteBuffer> for $text {
                fn eq(&self, _other: &ByteBuffer) -> bool {
                    false
                }
            }
        )*
    };
}

never_equal_to_text! {
    [] str,
    ['a] &'a str,
    [] String,
}

impl ByteBuffer {
    /// Equality against any operand. Only byte sequences can be equal.
    pub fn equals<'a>(&self, other: impl Into<Value<'a>>) -> bool {
        match other.into() {
            Value::Bytes(bytes) => self.as_bytes() == bytes,
            _ => false,
        }
    }

    /// Ordering against any operand. Non-byte operands are a `TypeMismatch`.
    pub fn compare<'a>(&self, other: impl Into<Value<'a>>) -> Result<Ordering> {
        match other.into() {
            Value::Bytes(bytes) => Ok(self.as_bytes().cmp(bytes)),
            other => Err(BufferError::type_mismatch(
                "compare",
                "a bytes-like object",
                other.kind_name(),
            )),
        }
    }

    pub fn lt<'a>(&self, other: impl Into<Value<'a>>) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    pub fn le<'a>(&self, other: impl Into<Value<'a>>) -> Result<bool> {
        Ok(self.compare(other)? != Ordering::Greater)
    }

    pub fn gt<'a>(&self, other: impl Into<Value<'a>>) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    pub fn ge<'a>(&self, other: impl Into<Value<'a>>) -> Result<bool> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    /// Always fails: a buffer's value can change after it has been hashed.
    pub fn hash_value(&self) -> Result<u64> {
        Err(BufferError::Unhashable)
    }
}
