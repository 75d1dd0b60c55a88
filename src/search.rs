// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Byte-pattern search over any byte slice.
//!
//! These are the algorithms behind `find`, `rfind`, `count`, containment and
//! the prefix/suffix tests on both [`ByteBuffer`](crate::ByteBuffer) and
//! [`ByteView`](crate::ByteView). Positions are absolute offsets into the
//! haystack, never relative to the window.
//!
//! Single-byte patterns go through `memchr`, longer ones through
//! `memchr::memmem`. An empty pattern matches at every position of the window,
//! including its end.

use memchr::{memchr, memchr_iter, memmem, memrchr};

use crate::contracts::check_window;
use crate::error::{BufferError, Result};
use crate::slice::{window, Slice};
use crate::value::Value;

/// A search pattern taken from an operand.
///
/// Search methods accept either a byte sequence or a single integer naming one
/// byte, so `find(b"s")` and `find(b's')` mean the same thing.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Pattern<'a> {
    Byte([u8; 1]),
    Seq(&'a [u8]),
}

impl<'a> Pattern<'a> {
    pub(crate) fn from_value(value: Value<'a>, op: &'static str) -> Result<Self> {
        match value {
            Value::Bytes(b) => Ok(Pattern::Seq(b)),
            Value::Int(_) | Value::Index(_) => Ok(Pattern::Byte([value.to_byte(op)?])),
            other => Err(BufferError::type_mismatch(
                op,
                "a bytes-like object or an integer",
                other.kind_name(),
            )),
        }
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        match self {
            Pattern::Byte(b) => b,
            Pattern::Seq(s) => s,
        }
    }
}

fn clamp(hay: &[u8], range: Slice) -> Option<(usize, usize)> {
    let bounds = window(hay.len(), range.start, range.stop)?;
    check_window(bounds.0, bounds.1, hay.len());
    Some(bounds)
}

/// First occurrence of `needle` in `hay[range]`.
pub fn find(hay: &[u8], needle: &[u8], range: Slice) -> Option<usize> {
    let (lo, hi) = clamp(hay, range)?;
    let sub = &hay[lo..hi];
    let found = match needle {
        [] => Some(0),
        [byte] => memchr(*byte, sub),
        _ => memmem::find(sub, needle),
    };
    found.map(|pos| pos + lo)
}

/// Last occurrence of `needle` in `hay[range]`.
pub fn rfind(hay: &[u8], needle: &[u8], range: Slice) -> Option<usize> {
    let (lo, hi) = clamp(hay, range)?;
    let sub = &hay[lo..hi];
    let found = match needle {
        [] => Some(sub.len()),
        [byte] => memrchr(*byte, sub),
        _ => memmem::rfind(sub, needle),
    };
    found.map(|pos| pos + lo)
}

/// Non-overlapping occurrences of `needle` in `hay[range]`, scanned left to right.
pub fn count(hay: &[u8], needle: &[u8], range: Slice) -> usize {
    let Some((lo, hi)) = clamp(hay, range) else {
        return 0;
    };
    let sub = &hay[lo..hi];
    match needle {
        [] => sub.len() + 1,
        [byte] => memchr_iter(*byte, sub).count(),
        _ => memmem::find_iter(sub, needle).count(),
    }
}

/// Whether `hay[range]` begins with `prefix`.
pub fn starts_with(hay: &[u8], prefix: &[u8], range: Slice) -> bool {
    clamp(hay, range).is_some_and(|(lo, hi)| hay[lo..hi].starts_with(prefix))
}

/// Whether `hay[range]` ends with `suffix`.
pub fn ends_with(hay: &[u8], suffix: &[u8], range: Slice) -> bool {
    clamp(hay, range).is_some_and(|(lo, hi)| hay[lo..hi].ends_with(suffix))
}

/// Membership test: substring for sequences, single-byte for integers.
///
/// An integer outside `[0, 255]` is a `ValueConstraint` error; anything that
/// is neither a sequence nor an integer is a `TypeMismatch`.
pub fn contains(hay: &[u8], item: Value<'_>) -> Result<bool> {
    let pattern = Pattern::from_value(item, "contains")?;
    Ok(find(hay, pattern.as_bytes(), Slice::full()).is_some())
}

/// Positions of every non-overlapping match, left to right.
///
/// `needle` must be non-empty.
pub(crate) fn match_positions(hay: &[u8], needle: &[u8]) -> Vec<usize> {
    debug_assert!(!needle.is_empty());
    match needle {
        [byte] => memchr_iter(*byte, hay).collect(),
        _ => memmem::find_iter(hay, needle).collect(),
    }
}

/// Positions of every non-overlapping match, scanning right to left.
///
/// Returned in descending order. `needle` must be non-empty.
pub(crate) fn rmatch_positions(hay: &[u8], needle: &[u8]) -> Vec<usize> {
    debug_assert!(!needle.is_empty());
    match needle {
        [byte] => memchr::memrchr_iter(*byte, hay).collect(),
        _ => memmem::rfind_iter(hay, needle).collect(),
    }
}
