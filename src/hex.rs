// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Hexadecimal interop.
//!
//! Output is lowercase with no separators. Input is pairs of hex digits in
//! either case, optionally separated by ASCII spaces. A space may not split a
//! pair.

use crate::error::{BufferError, Result};

/// Lowercase hex, two digits per byte.
pub fn to_hex(bytes: &[u8]) -> String {
    ::hex::encode(bytes)
}

/// Parse space-separated hex pairs.
///
/// Errors carry the character position of the first offending character (or
/// the end of input for a dangling digit).
pub fn from_hex(text: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(text.len() / 2);
    let mut chars = text.chars().enumerate();
    while let Some((position, ch)) = chars.next() {
        if ch == ' ' {
            continue;
        }
        let high = digit(ch).ok_or(BufferError::InvalidHex { position })?;
        let (position, low) = match chars.next() {
            Some((p, c)) => (p, digit(c)),
            None => (position + 1, None),
        };
        let low = low.ok_or(BufferError::InvalidHex { position })?;
        out.push((high << 4) | low);
    }
    Ok(out)
}

fn digit(ch: char) -> Option<u8> {
    ch.to_digit(16).map(|d| d as u8)
}
