// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation. The
//! reference models here are deliberately naive: they walk indices one at a
//! time so they can serve as oracles for the real slice arithmetic.

#![doc(hidden)]

use crate::buffer::ByteBuffer;
use crate::value::AsIndex;

/// A user-defined integer-like operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntLike(pub i64);

impl AsIndex for IntLike {
    fn as_index(&self) -> i64 {
        self.0
    }
}

/// Positions selected by `[start:stop:step]` over a sequence of `len`, by
/// stepping one index at a time. `step` must be nonzero.
pub fn reference_indices(
    len: usize,
    start: Option<i64>,
    stop: Option<i64>,
    step: Option<i64>,
) -> Vec<usize> {
    let len = len as i64;
    let step = step.unwrap_or(1);
    assert!(step != 0, "reference model needs a nonzero step");

    let adjust = |bound: i64| if bound < 0 { bound + len } else { bound };
    let mut out = Vec::new();
    if step > 0 {
        let lo = start.map_or(0, |s| adjust(s).clamp(0, len));
        let hi = stop.map_or(len, |s| adjust(s).clamp(0, len));
        let mut i = lo;
        while i < hi {
            out.push(i as usize);
            i += step;
        }
    } else {
        let hi = start.map_or(len - 1, |s| adjust(s).clamp(-1, len - 1));
        let lo = stop.map_or(-1, |s| adjust(s).clamp(-1, len - 1));
        let mut i = hi;
        while i > lo {
            out.push(i as usize);
            i += step;
        }
    }
    out
}

/// The bytes `data[start:stop:step]` would select.
pub fn reference_slice(data: &[u8], start: Option<i64>, stop: Option<i64>, step: Option<i64>) -> Vec<u8> {
    reference_indices(data.len(), start, stop, step)
        .into_iter()
        .map(|i| data[i])
        .collect()
}

/// `data[start:stop:step] = src` on a plain `Vec`, or `None` where the real
/// operation must fail (extended slice with a length mismatch).
pub fn reference_assign(
    data: &[u8],
    start: Option<i64>,
    stop: Option<i64>,
    step: Option<i64>,
    src: &[u8],
) -> Option<Vec<u8>> {
    let indices = reference_indices(data.len(), start, stop, step);
    if step.unwrap_or(1) == 1 {
        let len = data.len() as i64;
        let adjust = |b: i64| if b < 0 { (b + len).clamp(0, len) } else { b.min(len) };
        let lo = start.map_or(0, adjust) as usize;
        let hi = (stop.map_or(len, adjust) as usize).max(lo);
        let mut out = data[..lo].to_vec();
        out.extend_from_slice(src);
        out.extend_from_slice(&data[hi..]);
        return Some(out);
    }
    if indices.len() != src.len() {
        return None;
    }
    let mut out = data.to_vec();
    for (&i, &b) in indices.iter().zip(src) {
        out[i] = b;
    }
    Some(out)
}

/// `del data[start:stop:step]` on a plain `Vec`.
pub fn reference_delete(data: &[u8], start: Option<i64>, stop: Option<i64>, step: Option<i64>) -> Vec<u8> {
    let doomed = reference_indices(data.len(), start, stop, step);
    data.iter()
        .enumerate()
        .filter(|(i, _)| !doomed.contains(i))
        .map(|(_, &b)| b)
        .collect()
}

/// A buffer holding `0, 1, ..., n-1` (each mod 256).
pub fn counting_buffer(n: usize) -> ByteBuffer {
    (0..n).map(|i| (i % 256) as u8).collect()
}
