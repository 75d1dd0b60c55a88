// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Padding and tab expansion. Every function returns a fresh copy, even when
//! nothing needs to change. A width whose result cannot be allocated is a
//! `CapacityOverflow` error.

use crate::error::{BufferError, Result};

pub fn ljust(data: &[u8], width: usize, fill: u8) -> Result<Vec<u8>> {
    pad("ljust", data, 0, width.saturating_sub(data.len()), fill)
}

pub fn rjust(data: &[u8], width: usize, fill: u8) -> Result<Vec<u8>> {
    pad("rjust", data, width.saturating_sub(data.len()), 0, fill)
}

/// Center within `width`. When the margin is odd the extra byte goes left
/// only if `width` is odd too.
pub fn center(data: &[u8], width: usize, fill: u8) -> Result<Vec<u8>> {
    let margin = width.saturating_sub(data.len());
    let left = margin / 2 + (margin & width & 1);
    pad("center", data, left, margin - left, fill)
}

/// Left-pad with ASCII zeros, keeping a leading sign in front.
pub fn zfill(data: &[u8], width: usize) -> Result<Vec<u8>> {
    let mut out = pad("zfill", data, width.saturating_sub(data.len()), 0, b'0')?;
    let fill = out.len() - data.len();
    if fill > 0 && matches!(data.first(), Some(b'+' | b'-')) {
        out[0] = data[0];
        out[fill] = b'0';
    }
    Ok(out)
}

/// Replace tabs with spaces up to the next multiple of `tabsize`.
///
/// The column resets after `\n` and `\r`. A tab size of zero removes tabs.
pub fn expandtabs(data: &[u8], tabsize: usize) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(data.len());
    let mut column = 0usize;
    for &b in data {
        match b {
            b'\t' => {
                if tabsize > 0 {
                    let spaces = tabsize - column % tabsize;
                    let requested = out.len() as u128 + spaces as u128;
                    out.try_reserve(spaces)
                        .map_err(|_| BufferError::overflow("expandtabs", requested))?;
                    out.resize(out.len() + spaces, b' ');
                    column = column
                        .checked_add(spaces)
                        .ok_or_else(|| BufferError::overflow("expandtabs", requested))?;
                }
            }
            b'\n' | b'\r' => {
                out.push(b);
                column = 0;
            }
            _ => {
                out.push(b);
                column = column.wrapping_add(1);
            }
        }
    }
    Ok(out)
}

fn pad(op: &'static str, data: &[u8], left: usize, right: usize, fill: u8) -> Result<Vec<u8>> {
    let requested = left as u128 + data.len() as u128 + right as u128;
    let total = usize::try_from(requested).map_err(|_| BufferError::overflow(op, requested))?;
    let mut out = Vec::new();
    out.try_reserve_exact(total)
        .map_err(|_| BufferError::overflow(op, requested))?;
    out.resize(left, fill);
    out.extend_from_slice(data);
    out.resize(total, fill);
    Ok(out)
}
