// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Substring replacement.

use crate::error::{BufferError, Result};
use crate::search::match_positions;

/// Replace up to `count` non-overlapping occurrences of `old`, left to right.
///
/// An empty `old` matches at every boundary, so `new` is inserted before each
/// byte and once at the end (subject to `count`).
pub fn replace(data: &[u8], old: &[u8], new: &[u8], count: Option<usize>) -> Result<Vec<u8>> {
    let limit = count.unwrap_or(usize::MAX);
    if old.is_empty() {
        let inserts = limit.min(data.len() + 1);
        let mut out = with_capacity(data.len(), inserts, new.len())?;
        for (i, &byte) in data.iter().enumerate() {
            if i < inserts {
                out.extend_from_slice(new);
            }
            out.push(byte);
        }
        if inserts > data.len() {
            out.extend_from_slice(new);
        }
        return Ok(out);
    }

    let positions: Vec<usize> = match_positions(data, old).into_iter().take(limit).collect();
    if positions.is_empty() {
        return Ok(data.to_vec());
    }
    let kept = data.len() - positions.len() * old.len();
    let mut out = with_capacity(kept, positions.len(), new.len())?;
    let mut start = 0;
    for pos in positions {
        out.extend_from_slice(&data[start..pos]);
        out.extend_from_slice(new);
        start = pos + old.len();
    }
    out.extend_from_slice(&data[start..]);
    Ok(out)
}

/// Allocate for `base + copies * each` bytes, reporting overflow as an error.
fn with_capacity(base: usize, copies: usize, each: usize) -> Result<Vec<u8>> {
    let total = copies
        .checked_mul(each)
        .and_then(|extra| extra.checked_add(base))
        .ok_or_else(|| BufferError::overflow("replace", base as u128 + copies as u128 * each as u128))?;
    let mut out = Vec::new();
    out.try_reserve_exact(total)
        .map_err(|_| BufferError::overflow("replace", total as u128))?;
    Ok(out)
}
