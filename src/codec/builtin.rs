// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Codecs available from [`CodecRegistry::with_builtins`](super::CodecRegistry::with_builtins).

use super::{Codec, CodecError, ErrorMode};

const REPLACEMENT: char = '\u{FFFD}';

/// UTF-8. Encoding cannot fail since `&str` is already valid UTF-8.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8;

impl Codec for Utf8 {
    fn name(&self) -> &'static str {
        "utf-8"
    }

    fn encode(&self, text: &str, _errors: ErrorMode) -> Result<Vec<u8>, CodecError> {
        Ok(text.as_bytes().to_vec())
    }

    fn decode(&self, bytes: &[u8], errors: ErrorMode) -> Result<String, CodecError> {
        let mut out = String::with_capacity(bytes.len());
        let mut rest = bytes;
        let mut offset = 0;
        loop {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    out.push_str(valid);
                    return Ok(out);
                }
                Err(e) => {
                    let good = e.valid_up_to();
                    out.push_str(std::str::from_utf8(&rest[..good]).unwrap_or_default());
                    let bad = e.error_len().unwrap_or(rest.len() - good);
                    match errors {
                        ErrorMode::Strict => {
                            return Err(CodecError::Decode {
                                codec: "utf-8",
                                byte: rest[good],
                                position: offset + good,
                                reason: if e.error_len().is_some() {
                                    "invalid start byte"
                                } else {
                                    "unexpected end of data"
                                },
                            })
                        }
                        ErrorMode::Ignore => {}
                        ErrorMode::Replace => out.push(REPLACEMENT),
                    }
                    offset += good + bad;
                    rest = &rest[good + bad..];
                }
            }
        }
    }
}

/// UTF-16 with a byte-order mark.
///
/// Encoding always writes a little-endian BOM. Decoding honours a leading BOM
/// in either order and assumes little-endian without one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf16;

impl Codec for Utf16 {
    fn name(&self) -> &'static str {
        "utf-16"
    }

    fn encode(&self, text: &str, _errors: ErrorMode) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::with_capacity(2 + text.len() * 2);
        out.extend_from_slice(&[0xFF, 0xFE]);
        for unit in text.encode_utf16() {
            out.extend_from_slice(&unit.to_le_bytes());
        }
        Ok(out)
    }

    fn decode(&self, bytes: &[u8], errors: ErrorMode) -> Result<String, CodecError> {
        let (big_endian, body, base) = match bytes {
            [0xFF, 0xFE, rest @ ..] => (false, rest, 2),
            [0xFE, 0xFF, rest @ ..] => (true, rest, 2),
            _ => (false, bytes, 0),
        };

        let mut out = String::with_capacity(body.len() / 2);
        let pairs = body.chunks_exact(2);
        let tail = pairs.remainder();
        let units = pairs.map(|pair| {
            let pair = [pair[0], pair[1]];
            if big_endian {
                u16::from_be_bytes(pair)
            } else {
                u16::from_le_bytes(pair)
            }
        });

        let mut position = base;
        for decoded in char::decode_utf16(units) {
            match decoded {
                Ok(ch) => {
                    out.push(ch);
                    position += ch.len_utf16() * 2;
                }
                Err(e) => {
                    match errors {
                        ErrorMode::Strict => {
                            return Err(CodecError::Decode {
                                codec: "utf-16",
                                byte: (e.unpaired_surrogate() & 0xFF) as u8,
                                position,
                                reason: "illegal UTF-16 surrogate",
                            })
                        }
                        ErrorMode::Ignore => {}
                        ErrorMode::Replace => out.push(REPLACEMENT),
                    }
                    position += 2;
                }
            }
        }

        if let [byte] = tail {
            match errors {
                ErrorMode::Strict => {
                    return Err(CodecError::Decode {
                        codec: "utf-16",
                        byte: *byte,
                        position: bytes.len() - 1,
                        reason: "truncated data",
                    })
                }
                ErrorMode::Ignore => {}
                ErrorMode::Replace => out.push(REPLACEMENT),
            }
        }
        Ok(out)
    }
}

/// ISO-8859-1: every byte is the code point of the same value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Latin1;

impl Codec for Latin1 {
    fn name(&self) -> &'static str {
        "latin-1"
    }

    fn encode(&self, text: &str, errors: ErrorMode) -> Result<Vec<u8>, CodecError> {
        encode_below(text, 0x100, "latin-1", "ordinal not in range(256)", errors)
    }

    fn decode(&self, bytes: &[u8], _errors: ErrorMode) -> Result<String, CodecError> {
        Ok(bytes.iter().map(|&b| char::from(b)).collect())
    }
}

/// 7-bit ASCII.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ascii;

impl Codec for Ascii {
    fn name(&self) -> &'static str {
        "ascii"
    }

    fn encode(&self, text: &str, errors: ErrorMode) -> Result<Vec<u8>, CodecError> {
        encode_below(text, 0x80, "ascii", "ordinal not in range(128)", errors)
    }

    fn decode(&self, bytes: &[u8], errors: ErrorMode) -> Result<String, CodecError> {
        let mut out = String::with_capacity(bytes.len());
        for (position, &byte) in bytes.iter().enumerate() {
            if byte.is_ascii() {
                out.push(char::from(byte));
                continue;
            }
            match errors {
                ErrorMode::Strict => {
                    return Err(CodecError::Decode {
                        codec: "ascii",
                        byte,
                        position,
                        reason: "ordinal not in range(128)",
                    })
                }
                ErrorMode::Ignore => {}
                ErrorMode::Replace => out.push(REPLACEMENT),
            }
        }
        Ok(out)
    }
}

/// Single-byte encoding of every char below `limit`.
fn encode_below(
    text: &str,
    limit: u32,
    codec: &'static str,
    reason: &'static str,
    errors: ErrorMode,
) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::with_capacity(text.len());
    for (position, ch) in text.chars().enumerate() {
        let code = u32::from(ch);
        if code < limit {
            out.push(code as u8);
            continue;
        }
        match errors {
            ErrorMode::Strict => {
                return Err(CodecError::Encode {
                    codec,
                    ch,
                    position,
                    reason,
                })
            }
            ErrorMode::Ignore => {}
            ErrorMode::Replace => out.push(b'?'),
        }
    }
    Ok(out)
}
