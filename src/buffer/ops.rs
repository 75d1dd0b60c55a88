// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Concatenation, repetition, and raw-buffer I/O.

use std::io::{self, Read, Write};
use std::ops::{Add, AddAssign, Mul, MulAssign};

use super::ByteBuffer;
use crate::error::{BufferError, Result};
use crate::store::Store;
use crate::value::Value;

impl ByteBuffer {
    /// A new buffer holding `self` followed by `other`.
    pub fn concat<'a>(&self, other: impl Into<Value<'a>>) -> Result<ByteBuffer> {
        let other = other.into().to_bytes("concat")?;
        let mut store = Store::from_slice(self.as_bytes());
        store.extend_from_slice(other)?;
        Ok(ByteBuffer::from_store(store))
    }

    /// A new buffer holding `n` copies of `self`. `n <= 0` gives an empty buffer.
    pub fn repeat<'a>(&self, n: impl Into<Value<'a>>) -> Result<ByteBuffer> {
        let n = n.into().to_index("repeat")?;
        Ok(ByteBuffer::from(repeated(self.as_bytes(), n)?))
    }

    /// Replace the contents with `n` copies of themselves.
    pub fn repeat_in_place<'a>(&mut self, n: impl Into<Value<'a>>) -> Result<()> {
        let n = n.into().to_index("repeat")?;
        let data = repeated(self.as_bytes(), n)?;
        self.store = Store::from_vec(data);
        Ok(())
    }

    /// Fill the buffer from `reader`, up to its current length.
    ///
    /// Returns the number of bytes read. The length never changes.
    pub fn read_into<R: Read>(&mut self, reader: &mut R) -> io::Result<usize> {
        reader.read(self.as_bytes_mut())
    }

    /// Write the whole buffer to `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.as_bytes())
    }
}

fn repeated(bytes: &[u8], n: i64) -> Result<Vec<u8>> {
    if n <= 0 || bytes.is_empty() {
        return Ok(Vec::new());
    }
    let requested = bytes.len() as u128 * n as u128;
    let total = usize::try_from(n)
        .ok()
        .and_then(|n| bytes.len().checked_mul(n))
        .ok_or_else(|| BufferError::overflow("repeat", requested))?;
    let mut out = Vec::new();
    out.try_reserve_exact(total)
        .map_err(|_| BufferError::overflow("repeat", requested))?;
    out.extend_from_slice(bytes);
    while out.len() < total {
        let chunk = out.len().min(total - out.len());
        out.extend_from_within(..chunk);
    }
    Ok(out)
}

#[track_caller]
fn or_panic<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}

/// # Panics
/// If the combined length cannot be allocated, like `Vec`.
impl Add<&[u8]> for &ByteBuffer {
    type Output = ByteBuffer;

    #[track_caller]
    fn add(self, rhs: &[u8]) -> ByteBuffer {
        or_panic(self.concat(rhs))
    }
}

impl Add<&ByteBuffer> for &ByteBuffer {
    type Output = ByteBuffer;

    #[track_caller]
    fn add(self, rhs: &ByteBuffer) -> ByteBuffer {
        self + rhs.as_bytes()
    }
}

impl AddAssign<&[u8]> for ByteBuffer {
    #[track_caller]
    fn add_assign(&mut self, rhs: &[u8]) {
        or_panic(self.store.extend_from_slice(rhs));
    }
}

impl AddAssign<&ByteBuffer> for ByteBuffer {
    #[track_caller]
    fn add_assign(&mut self, rhs: &ByteBuffer) {
        *self += rhs.as_bytes();
    }
}

/// # Panics
/// If the repeated length overflows or cannot be allocated. Use
/// [`ByteBuffer::repeat`] to get an error instead.
impl Mul<usize> for &ByteBuffer {
    type Output = ByteBuffer;

    #[track_caller]
    fn mul(self, n: usize) -> ByteBuffer {
        or_panic(self.repeat(n))
    }
}

impl MulAssign<usize> for ByteBuffer {
    #[track_caller]
    fn mul_assign(&mut self, n: usize) {
        or_panic(self.repeat_in_place(n));
    }
}

/// Writing appends.
impl Write for ByteBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.store
            .extend_from_slice(buf)
            .map_err(|err| io::Error::new(io::ErrorKind::OutOfMemory, err))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
