// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Framed binary snapshots of a buffer.
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │ MAGIC "BBUF" (4 bytes)                     │
//! │ VERSION (1 byte)                           │
//! │ payload length (varint, ≤ 10 bytes)        │
//! │ payload (length bytes)                     │
//! │ FOOTER: crc32 LE (4) + magic "FUBB" (4)    │
//! └────────────────────────────────────────────┘
//! ```
//!
//! The CRC covers everything before the footer. A snapshot that fails any
//! check is rejected whole; there is no partial recovery.

use std::io;

use crc32fast::Hasher as Crc32Hasher;
use tracing::debug;

use crate::buffer::ByteBuffer;

/// Magic bytes: "BBUF" in ASCII (header)
pub const MAGIC: [u8; 4] = *b"BBUF";

/// Footer magic: "FUBB" (reversed, marks valid end)
pub const FOOTER_MAGIC: [u8; 4] = *b"FUBB";

pub const VERSION: u8 = 1;

/// Maximum varint bytes (u64 needs at most 10 bytes)
pub const MAX_VARINT_BYTES: usize = 10;

const HEADER_SIZE: usize = MAGIC.len() + 1;
const FOOTER_SIZE: usize = 8;

// ============================================================================
// VARINT ENCODING
// ============================================================================

/// Encode a LEB128 varint.
pub fn encode_varint(mut value: u64, buf: &mut Vec<u8>) {
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        if value == 0 {
            buf.push(byte);
            break;
        }
        buf.push(byte | 0x80);
    }
}

/// Decode a varint, returning (value, bytes_consumed).
pub fn decode_varint(bytes: &[u8]) -> io::Result<(u64, usize)> {
    let mut result: u64 = 0;
    let mut shift = 0;

    for (i, &byte) in bytes.iter().take(MAX_VARINT_BYTES).enumerate() {
        // The tenth byte may only carry the top bit of a u64.
        if i == MAX_VARINT_BYTES - 1 && byte > 1 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Varint overflows u64",
            ));
        }
        result |= ((byte & 0x7F) as u64) << shift;
        if byte & 0x80 == 0 {
            return Ok((result, i + 1));
        }
        shift += 7;
    }

    if bytes.len() >= MAX_VARINT_BYTES {
        Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "Varint exceeds maximum length (possible corruption)",
        ))
    } else {
        Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "Incomplete varint",
        ))
    }
}

fn compute_crc32(data: &[u8]) -> u32 {
    let mut hasher = Crc32Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

// ============================================================================
// SNAPSHOT
// ============================================================================

/// Serialize a buffer into a self-checking snapshot.
pub fn encode_snapshot(buf: &ByteBuffer) -> Vec<u8> {
    let payload = buf.as_bytes();
    let mut out = Vec::with_capacity(HEADER_SIZE + MAX_VARINT_BYTES + payload.len() + FOOTER_SIZE);
    out.extend_from_slice(&MAGIC);
    out.push(VERSION);
    encode_varint(payload.len() as u64, &mut out);
    out.extend_from_slice(payload);
    let crc32 = compute_crc32(&out);
    out.extend_from_slice(&crc32.to_le_bytes());
    out.extend_from_slice(&FOOTER_MAGIC);
    out
}

/// Parse a snapshot produced by [`encode_snapshot`].
///
/// Truncated input yields `UnexpectedEof`. Everything else wrong (magic,
/// version, checksum, trailing bytes) yields `InvalidData`.
pub fn decode_snapshot(bytes: &[u8]) -> io::Result<ByteBuffer> {
    let min_size = HEADER_SIZE + 1 + FOOTER_SIZE;
    if bytes.len() < min_size {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("Snapshot too small: {} bytes (minimum {})", bytes.len(), min_size),
        ));
    }

    if bytes[..MAGIC.len()] != MAGIC {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Invalid magic: expected BBUF, got {:?}", &bytes[..MAGIC.len()]),
        ));
    }

    let footer_start = bytes.len() - FOOTER_SIZE;
    if bytes[footer_start + 4..] != FOOTER_MAGIC {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "Invalid footer magic (truncated or corrupted)",
        ));
    }
    let stored_crc32 = u32::from_le_bytes([
        bytes[footer_start],
        bytes[footer_start + 1],
        bytes[footer_start + 2],
        bytes[footer_start + 3],
    ]);
    let content = &bytes[..footer_start];
    let computed_crc32 = compute_crc32(content);
    if stored_crc32 != computed_crc32 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "CRC32 mismatch: expected {:#010x}, got {:#010x} (snapshot corrupted)",
                stored_crc32, computed_crc32
            ),
        ));
    }

    let version = bytes[MAGIC.len()];
    if version != VERSION {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Unsupported version: {} (expected {})", version, VERSION),
        ));
    }

    let (len, consumed) = decode_varint(&content[HEADER_SIZE..])?;
    let payload = &content[HEADER_SIZE + consumed..];
    if payload.len() as u64 != len {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "Payload length mismatch: header says {}, found {}",
                len,
                payload.len()
            ),
        ));
    }

    debug!(len = payload.len(), "decoded snapshot");
    Ok(ByteBuffer::from(payload))
}


#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// decode_varint never panics and never reports consuming more than it read.
    #[kani::proof]
    #[kani::unwind(12)]
    fn verify_decode_varint_bounded() {
        let bytes: [u8; MAX_VARINT_BYTES + 1] = kani::any();
        let len: usize = kani::any();
        kani::assume(len <= bytes.len());
        if let Ok((_, consumed)) = decode_varint(&bytes[..len]) {
            assert!(consumed >= 1);
            assert!(consumed <= len);
            assert!(consumed <= MAX_VARINT_BYTES);
        }
    }
}
