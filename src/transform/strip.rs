// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Trimming runs of bytes from either end.

use super::is_space;

/// Which bytes to trim: the whitespace set, or an explicit set.
#[derive(Debug, Clone, Copy)]
pub enum StripSet<'a> {
    Whitespace,
    Bytes(&'a [u8]),
}

impl StripSet<'_> {
    fn matcher(self) -> [bool; 256] {
        let mut set = [false; 256];
        match self {
            StripSet::Whitespace => {
                for b in 0..=255u8 {
                    set[b as usize] = is_space(b);
                }
            }
            StripSet::Bytes(bytes) => {
                for &b in bytes {
                    set[b as usize] = true;
                }
            }
        }
        set
    }
}

pub fn lstrip<'d>(data: &'d [u8], chars: StripSet<'_>) -> &'d [u8] {
    let set = chars.matcher();
    let start = data.iter().position(|&b| !set[b as usize]).unwrap_or(data.len());
    &data[start..]
}

pub fn rstrip<'d>(data: &'d [u8], chars: StripSet<'_>) -> &'d [u8] {
    let set = chars.matcher();
    let end = data.iter().rposition(|&b| !set[b as usize]).map_or(0, |p| p + 1);
    &data[..end]
}

pub fn strip<'d>(data: &'d [u8], chars: StripSet<'_>) -> &'d [u8] {
    rstrip(lstrip(data, chars), chars)
}
