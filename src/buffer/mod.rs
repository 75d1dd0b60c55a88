// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The mutable byte buffer.
//!
//! [`ByteBuffer`] is a growable sequence of bytes that behaves like a
//! resizable array for indexing, slicing and in-place edits, and like a
//! text-ish value for search and transforms, without ever turning into text
//! on its own.
//!
//! # Indexing
//!
//! Single-element access takes any integer or index-like operand; negative
//! positions count from the end, and anything outside `[-len, len)` is an
//! `OutOfRange` error. Slice access takes anything convertible to a
//! [`Slice`] and goes through [`Slice::resolve`], the only normalization
//! routine in the crate.
//!
//! # Aliasing
//!
//! A plain `&[u8]` source can never point into the destination because the
//! borrow checker forbids it. Assigning a buffer into itself goes through the
//! `*_from_self` methods, which snapshot first. [`SharedBuffer`] does the same
//! for shared handles.
//!
//! [`SharedBuffer`]: crate::SharedBuffer

mod compare;
mod construct;
mod ops;
mod text;

pub use construct::Source;

use std::fmt;

use tracing::debug;

use crate::error::{BufferError, Result};
use crate::slice::Slice;
use crate::store::Store;
use crate::value::Value;

/// A growable, mutable sequence of bytes.
#[derive(Clone, Default)]
pub struct ByteBuffer {
    pub(crate) store: Store,
}

impl ByteBuffer {
    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    /// An empty buffer.
    pub fn new() -> Self {
        ByteBuffer::default()
    }

    /// A buffer of `size` zero bytes.
    ///
    /// `size` goes through the index protocol; a negative size is a
    /// `ValueConstraint` error, a non-integer a `TypeMismatch`.
    pub fn with_size<'a>(size: impl Into<Value<'a>>) -> Result<Self> {
        let size = size.into().to_index("with_size")?;
        let len = usize::try_from(size).map_err(|_| BufferError::NegativeSize { size })?;
        Ok(ByteBuffer {
            store: Store::zeroed(len)?,
        })
    }

    /// Build from values that each pass the index protocol and fit a byte.
    ///
    /// The first offending element decides the error. Nothing is returned on
    /// failure.
    pub fn from_values<'a, I>(values: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Value<'a>>,
    {
        Ok(ByteBuffer::from(collect_bytes(values, "construct")?))
    }

    pub(crate) fn from_store(store: Store) -> Self {
        ByteBuffer { store }
    }

    // ========================================================================
    // SIZE
    // ========================================================================

    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Bytes currently allocated. Never less than [`len`](Self::len).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Release over-allocation so that capacity equals length.
    pub fn shrink_to_fit(&mut self) {
        self.store.shrink_to_fit();
    }

    /// The current contents, sized to the logical length.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.store.as_slice()
    }

    /// Mutable view of the current contents.
    ///
    /// The view covers the logical length only, never the spare capacity.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.store.as_mut_slice()
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, u8>> {
        self.as_bytes().iter().copied()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.store.into_vec()
    }

    // ========================================================================
    // ELEMENT ACCESS
    // ========================================================================

    fn position(&self, index: Value<'_>, op: &'static str) -> Result<usize> {
        let index = index.to_index(op)?;
        let len = self.len();
        let adjusted = if index < 0 {
            index as i128 + len as i128
        } else {
            index as i128
        };
        if adjusted < 0 || adjusted >= len as i128 {
            return Err(BufferError::IndexOutOfRange { op, index, len });
        }
        Ok(adjusted as usize)
    }

    /// The byte at `index`.
    pub fn get<'a>(&self, index: impl Into<Value<'a>>) -> Result<u8> {
        let pos = self.position(index.into(), "get")?;
        Ok(self.as_bytes()[pos])
    }

    /// Overwrite the byte at `index`.
    pub fn set<'a, 'b>(&mut self, index: impl Into<Value<'a>>, value: impl Into<Value<'b>>) -> Result<()> {
        let pos = self.position(index.into(), "set")?;
        let byte = value.into().to_byte("set")?;
        self.store.as_mut_slice()[pos] = byte;
        Ok(())
    }

    /// Remove the byte at `index`, shifting the tail left.
    pub fn delete<'a>(&mut self, index: impl Into<Value<'a>>) -> Result<()> {
        let pos = self.position(index.into(), "delete")?;
        self.store.remove(pos);
        Ok(())
    }

    /// Copy out a slice as a new buffer.
    pub fn get_slice(&self, slice: impl Into<Slice>) -> Result<ByteBuffer> {
        let spec = slice.into().resolve(self.len())?;
        Ok(ByteBuffer::from(self.store.get_range(&spec)))
    }

    /// Assign a byte sequence to a slice.
    ///
    /// A step-1 slice may change the buffer length. Any other step requires
    /// the source to have exactly as many bytes as the slice selects.
    pub fn set_slice<'a>(&mut self, slice: impl Into<Slice>, source: impl Into<Value<'a>>) -> Result<()> {
        let source = source.into().to_bytes("set_slice")?;
        self.assign(slice.into(), source)
    }

    /// Assign values that each fit a byte to a slice.
    pub fn set_slice_values<'a, I>(&mut self, slice: impl Into<Slice>, values: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Value<'a>>,
    {
        let source = collect_bytes(values, "set_slice")?;
        self.assign(slice.into(), &source)
    }

    /// Assign this buffer's own contents to one of its slices.
    pub fn set_slice_from_self(&mut self, slice: impl Into<Slice>) -> Result<()> {
        let snapshot = self.snapshot();
        self.assign(slice.into(), &snapshot)
    }

    pub(crate) fn assign(&mut self, slice: Slice, source: &[u8]) -> Result<()> {
        let spec = slice.resolve(self.len())?;
        if spec.is_contiguous() {
            let start = spec.lower();
            return self.store.replace_range(start, start + spec.count, source);
        }
        if source.len() != spec.count {
            return Err(BufferError::ExtendedSliceSize {
                expected: spec.count,
                got: source.len(),
            });
        }
        self.store.assign_extended(&spec, source);
        Ok(())
    }

    /// Remove every byte a slice selects.
    pub fn del_slice(&mut self, slice: impl Into<Slice>) -> Result<()> {
        let spec = slice.into().resolve(self.len())?;
        if spec.is_contiguous() {
            let start = spec.lower();
            return self.store.replace_range(start, start + spec.count, &[]);
        }
        self.store.delete_extended(&spec);
        Ok(())
    }

    pub(crate) fn snapshot(&self) -> Vec<u8> {
        debug!(len = self.len(), "snapshotting aliased source");
        self.as_bytes().to_vec()
    }

    // ========================================================================
    // MUTATORS
    // ========================================================================

    /// Append one byte.
    pub fn append<'a>(&mut self, value: impl Into<Value<'a>>) -> Result<()> {
        let byte = value.into().to_byte("append")?;
        self.store.push(byte)
    }

    /// Append a byte sequence. Text and integers are a `TypeMismatch`.
    pub fn extend<'a>(&mut self, source: impl Into<Value<'a>>) -> Result<()> {
        let source = source.into().to_bytes("extend")?;
        self.store.extend_from_slice(source)
    }

    /// Append values that each fit a byte.
    ///
    /// All values are checked before anything is appended.
    pub fn extend_values<'a, I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Value<'a>>,
    {
        let source = collect_bytes(values, "extend")?;
        self.store.extend_from_slice(&source)
    }

    /// Append a copy of this buffer to itself.
    pub fn extend_from_self(&mut self) -> Result<()> {
        let snapshot = self.snapshot();
        self.store.extend_from_slice(&snapshot)
    }

    /// Insert one byte before `index`. Out-of-range positions clamp to the ends.
    pub fn insert<'a, 'b>(&mut self, index: impl Into<Value<'a>>, value: impl Into<Value<'b>>) -> Result<()> {
        let index = index.into().to_index("insert")?;
        let byte = value.into().to_byte("insert")?;
        let len = self.len() as i128;
        let mut pos = index as i128;
        if pos < 0 {
            pos = (pos + len).max(0);
        }
        self.store.insert(pos.min(len) as usize, byte)
    }

    /// Remove and return the last byte.
    pub fn pop(&mut self) -> Result<u8> {
        if self.is_empty() {
            return Err(BufferError::EmptyPop);
        }
        Ok(self.store.remove(self.len() - 1))
    }

    /// Remove and return the byte at `index`.
    pub fn pop_at<'a>(&mut self, index: impl Into<Value<'a>>) -> Result<u8> {
        if self.is_empty() {
            return Err(BufferError::EmptyPop);
        }
        let pos = self.position(index.into(), "pop")?;
        Ok(self.store.remove(pos))
    }

    /// Remove the first occurrence of a byte value.
    pub fn remove<'a>(&mut self, value: impl Into<Value<'a>>) -> Result<()> {
        let value = value.into().to_byte("remove")?;
        let pos = memchr::memchr(value, self.as_bytes()).ok_or(BufferError::ValueNotPresent { value })?;
        self.store.remove(pos);
        Ok(())
    }

    /// Reverse in place.
    pub fn reverse(&mut self) {
        self.store.reverse();
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }
}

/// Run every value through the byte check before anything is written.
pub(crate) fn collect_bytes<'a, I>(values: I, op: &'static str) -> Result<Vec<u8>>
where
    I: IntoIterator,
    I::Item: Into<Value<'a>>,
{
    values.into_iter().map(|v| v.into().to_byte(op)).collect()
}

impl From<&[u8]> for ByteBuffer {
    fn from(bytes: &[u8]) -> Self {
        ByteBuffer::from_store(Store::from_slice(bytes))
    }
}

impl<const N: usize> From<&[u8; N]> for ByteBuffer {
    fn from(bytes: &[u8; N]) -> Self {
        ByteBuffer::from(&bytes[..])
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        ByteBuffer::from_store(Store::from_vec(bytes))
    }
}

impl From<ByteBuffer> for Vec<u8> {
    fn from(buf: ByteBuffer) -> Self {
        buf.into_vec()
    }
}

impl FromIterator<u8> for ByteBuffer {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        ByteBuffer::from(iter.into_iter().collect::<Vec<u8>>())
    }
}

impl<'a> IntoIterator for &'a ByteBuffer {
    type Item = u8;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsMut<[u8]> for ByteBuffer {
    fn as_mut(&mut self) -> &mut [u8] {
        self.as_bytes_mut()
    }
}

impl<'a> From<&'a ByteBuffer> for Value<'a> {
    fn from(buf: &'a ByteBuffer) -> Self {
        Value::Bytes(buf.as_bytes())
    }
}

impl fmt::Display for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::repr::write_literal(f, self.as_bytes())
    }
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ByteBuffer(")?;
        crate::repr::write_literal(f, self.as_bytes())?;
        f.write_str(")")
    }
}
