// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Splitting and partitioning.
//!
//! Two split modes:
//!
//! - **Explicit separator**: every non-overlapping occurrence is a boundary,
//!   empty fields are kept, an empty separator is an error.
//! - **Whitespace**: runs of whitespace are boundaries, leading and trailing
//!   whitespace produce no empty fields.
//!
//! `maxsplit` bounds the number of splits counted from the scanning end. Once
//! it is used up, the rest of the input becomes the last field. In whitespace
//! mode the remainder keeps its whitespace on the far side.

use super::is_space;
use crate::error::{BufferError, Result};
use crate::search::{find, match_positions, rfind, rmatch_positions};
use crate::slice::Slice;

pub fn split<'d>(data: &'d [u8], sep: Option<&[u8]>, maxsplit: Option<usize>) -> Result<Vec<&'d [u8]>> {
    let limit = maxsplit.unwrap_or(usize::MAX);
    match sep {
        None => Ok(split_whitespace(data, limit)),
        Some([]) => Err(BufferError::EmptySeparator { op: "split" }),
        Some(sep) => {
            let mut fields = Vec::new();
            let mut start = 0;
            for pos in match_positions(data, sep).into_iter().take(limit) {
                fields.push(&data[start..pos]);
                start = pos + sep.len();
            }
            fields.push(&data[start..]);
            Ok(fields)
        }
    }
}

pub fn rsplit<'d>(data: &'d [u8], sep: Option<&[u8]>, maxsplit: Option<usize>) -> Result<Vec<&'d [u8]>> {
    let limit = maxsplit.unwrap_or(usize::MAX);
    match sep {
        None => Ok(rsplit_whitespace(data, limit)),
        Some([]) => Err(BufferError::EmptySeparator { op: "rsplit" }),
        Some(sep) => {
            let mut fields = Vec::new();
            let mut end = data.len();
            for pos in rmatch_positions(data, sep).into_iter().take(limit) {
                fields.push(&data[pos + sep.len()..end]);
                end = pos;
            }
            fields.push(&data[..end]);
            fields.reverse();
            Ok(fields)
        }
    }
}

fn split_whitespace(data: &[u8], mut remaining: usize) -> Vec<&[u8]> {
    let mut fields = Vec::new();
    let n = data.len();
    let mut i = 0;
    loop {
        while i < n && is_space(data[i]) {
            i += 1;
        }
        if i == n {
            break;
        }
        if remaining == 0 {
            fields.push(&data[i..]);
            break;
        }
        let start = i;
        while i < n && !is_space(data[i]) {
            i += 1;
        }
        fields.push(&data[start..i]);
        remaining -= 1;
    }
    fields
}

fn rsplit_whitespace(data: &[u8], mut remaining: usize) -> Vec<&[u8]> {
    let mut fields = Vec::new();
    let mut end = data.len();
    loop {
        while end > 0 && is_space(data[end - 1]) {
            end -= 1;
        }
        if end == 0 {
            break;
        }
        if remaining == 0 {
            fields.push(&data[..end]);
            break;
        }
        let stop = end;
        while end > 0 && !is_space(data[end - 1]) {
            end -= 1;
        }
        fields.push(&data[end..stop]);
        remaining -= 1;
    }
    fields.reverse();
    fields
}

/// `(before, separator, after)` around the first occurrence of `sep`.
pub fn partition<'d>(data: &'d [u8], sep: &[u8]) -> Result<(&'d [u8], &'d [u8], &'d [u8])> {
    if sep.is_empty() {
        return Err(BufferError::EmptySeparator { op: "partition" });
    }
    Ok(match find(data, sep, Slice::full()) {
        Some(pos) => {
            let end = pos + sep.len();
            (&data[..pos], &data[pos..end], &data[end..])
        }
        None => (data, &data[..0], &data[..0]),
    })
}

/// `(before, separator, after)` around the last occurrence of `sep`.
pub fn rpartition<'d>(data: &'d [u8], sep: &[u8]) -> Result<(&'d [u8], &'d [u8], &'d [u8])> {
    if sep.is_empty() {
        return Err(BufferError::EmptySeparator { op: "rpartition" });
    }
    Ok(match rfind(data, sep, Slice::full()) {
        Some(pos) => {
            let end = pos + sep.len();
            (&data[..pos], &data[pos..end], &data[end..])
        }
        None => (&data[..0], &data[..0], data),
    })
}

/// Split at `\n`, `\r` and `\r\n`, optionally keeping the terminators.
pub fn splitlines(data: &[u8], keepends: bool) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let n = data.len();
    let mut i = 0;
    while i < n {
        let start = i;
        while i < n && data[i] != b'\n' && data[i] != b'\r' {
            i += 1;
        }
        let mut eol = i;
        if i < n {
            i += if data[i] == b'\r' && data.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
            if keepends {
                eol = i;
            }
        }
        lines.push(&data[start..eol]);
    }
    lines
}
