// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Immutable byte sequence, the read-only peer of [`ByteBuffer`].
//!
//! A view is fixed at construction (capacity equals length), hashable, and
//! interchangeable with a buffer as a search pattern or comparison operand.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

use crate::buffer::ByteBuffer;
use crate::error::Result;
use crate::search;
use crate::slice::Slice;
use crate::value::Value;

/// A frozen byte sequence.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteView {
    bytes: Box<[u8]>,
}

impl ByteView {
    pub fn new(bytes: impl Into<Box<[u8]>>) -> Self {
        ByteView {
            bytes: bytes.into(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Copy into a mutable buffer.
    pub fn to_buffer(&self) -> ByteBuffer {
        ByteBuffer::from(self.as_bytes())
    }

    pub fn find<'a>(&self, pattern: impl Into<Value<'a>>) -> Result<Option<usize>> {
        let pattern = search::Pattern::from_value(pattern.into(), "find")?;
        Ok(search::find(&self.bytes, pattern.as_bytes(), Slice::full()))
    }

    pub fn count<'a>(&self, pattern: impl Into<Value<'a>>) -> Result<usize> {
        let pattern = search::Pattern::from_value(pattern.into(), "count")?;
        Ok(search::count(&self.bytes, pattern.as_bytes(), Slice::full()))
    }

    pub fn contains<'a>(&self, item: impl Into<Value<'a>>) -> Result<bool> {
        search::contains(&self.bytes, item.into())
    }

    pub fn to_hex(&self) -> String {
        crate::hex::to_hex(&self.bytes)
    }

    /// Ordering against any operand. Non-byte operands are a `TypeMismatch`.
    pub fn compare<'a>(&self, other: impl Into<Value<'a>>) -> Result<Ordering> {
        let other = other.into().to_bytes("compare")?;
        Ok(self.as_bytes().cmp(other))
    }
}

impl Deref for ByteView {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for ByteView {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<&[u8]> for ByteView {
    fn from(bytes: &[u8]) -> Self {
        ByteView::new(bytes)
    }
}

impl From<Vec<u8>> for ByteView {
    fn from(bytes: Vec<u8>) -> Self {
        ByteView::new(bytes)
    }
}

impl From<&ByteBuffer> for ByteView {
    fn from(buf: &ByteBuffer) -> Self {
        ByteView::new(buf.as_bytes())
    }
}

impl From<ByteBuffer> for ByteView {
    fn from(buf: ByteBuffer) -> Self {
        ByteView::new(buf.into_vec())
    }
}

impl From<&ByteView> for ByteBuffer {
    fn from(view: &ByteView) -> Self {
        view.to_buffer()
    }
}

impl<'a> From<&'a ByteView> for Value<'a> {
    fn from(view: &'a ByteView) -> Self {
        Value::Bytes(view.as_bytes())
    }
}

impl fmt::Display for ByteView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::repr::write_literal(f, &self.bytes)
    }
}

impl fmt::Debug for ByteView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::repr::write_literal(f, &self.bytes)
    }
}
