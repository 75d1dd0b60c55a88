// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text-style algorithms on raw bytes.
//!
//! Every function here reads a byte slice and either borrows sub-slices of it
//! or builds a fresh vector. None of them mutate their input; the buffer
//! methods wrap the results into new buffers.
//!
//! Whitespace is the fixed ASCII set `{space, \t, \n, \r, \x0b, \x0c}`. Case
//! handling is ASCII-only; bytes above `0x7f` are never cased.

pub mod case;
pub mod layout;
pub mod replace;
pub mod split;
pub mod strip;

use crate::error::{BufferError, Result};

/// Membership in the ASCII whitespace set.
#[inline]
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Drop every byte in `delete`, then map the rest through `table`.
///
/// `table` must have exactly 256 entries; `None` leaves bytes unchanged.
pub fn translate(data: &[u8], table: Option<&[u8]>, delete: &[u8]) -> Result<Vec<u8>> {
    let table: Option<&[u8; 256]> = match table {
        Some(t) => Some(t.try_into().map_err(|_| BufferError::TableSize { len: t.len() })?),
        None => None,
    };
    let mut doomed = [false; 256];
    for &byte in delete {
        doomed[byte as usize] = true;
    }
    Ok(data
        .iter()
        .filter(|&&b| !doomed[b as usize])
        .map(|&b| table.map_or(b, |t| t[b as usize]))
        .collect())
}

/// Concatenate `items` with `sep` between consecutive elements.
pub fn join<'a, I>(sep: &[u8], items: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = &'a [u8]>,
    I::IntoIter: Clone,
{
    let items = items.into_iter();
    let mut total: usize = 0;
    for (i, item) in items.clone().enumerate() {
        let extra = if i == 0 { 0 } else { sep.len() };
        total = total
            .checked_add(item.len())
            .and_then(|t| t.checked_add(extra))
            .ok_or_else(|| BufferError::overflow("join", total as u128 + item.len() as u128))?;
    }
    let mut out = Vec::new();
    out.try_reserve_exact(total)
        .map_err(|_| BufferError::overflow("join", total as u128))?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            out.extend_from_slice(sep);
        }
        out.extend_from_slice(item);
    }
    Ok(out)
}
