// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Quoted, escaped, ASCII-safe rendering of byte sequences.
//!
//! The literal form is `b'...'`. Printable ASCII is shown as itself, `\t`,
//! `\n` and `\r` get short escapes, the backslash and the active quote are
//! backslash-escaped, and everything else becomes `\xhh`. Single quotes are
//! used unless the content contains `'` but no `"`, in which case double
//! quotes avoid the escape.

use std::fmt::{self, Write};

/// Pick the quote character for `bytes`.
pub fn quote_for(bytes: &[u8]) -> u8 {
    if bytes.contains(&b'\'') && !bytes.contains(&b'"') {
        b'"'
    } else {
        b'\''
    }
}

/// Write the `b'...'` literal for `bytes` into any formatter.
pub fn write_literal<W: Write>(out: &mut W, bytes: &[u8]) -> fmt::Result {
    let quote = quote_for(bytes);
    out.write_char('b')?;
    out.write_char(char::from(quote))?;
    for &byte in bytes {
        match byte {
            b'\t' => out.write_str("\\t")?,
            b'\n' => out.write_str("\\n")?,
            b'\r' => out.write_str("\\r")?,
            b'\\' => out.write_str("\\\\")?,
            b if b == quote => {
                out.write_char('\\')?;
                out.write_char(char::from(b))?;
            }
            0x20..=0x7e => out.write_char(char::from(byte))?,
            _ => write!(out, "\\x{:02x}", byte)?,
        }
    }
    out.write_char(char::from(quote))
}

/// The `b'...'` literal for `bytes` as an owned string.
pub fn escape(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 3);
    // Writing into a String cannot fail.
    let _ = write_literal(&mut out, bytes);
    out
}
