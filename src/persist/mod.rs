// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Persistence hooks.
//!
//! Three layers, from thinnest to most self-describing:
//!
//! - [`ByteBuffer::reduce`] / [`ByteBuffer::restore`]: a `(tag, raw bytes)`
//!   pair for generic object-persistence layers.
//! - serde `Serialize`/`Deserialize` (in `serde_impl`), as a byte string.
//! - [`encode_snapshot`] / [`decode_snapshot`]: a framed binary format with a
//!   checksum, for files and the CLI.

mod serde_impl;
pub mod snapshot;

pub use snapshot::{decode_snapshot, encode_snapshot};

use crate::buffer::ByteBuffer;
use crate::error::{BufferError, Result};

/// Tag naming the buffer type in a reduced form.
pub const TAG: &str = "bytebuf.ByteBuffer";

impl ByteBuffer {
    /// Extract `(tag, raw bytes)`, independent of the internal layout.
    pub fn reduce(&self) -> (&'static str, Vec<u8>) {
        (TAG, self.as_bytes().to_vec())
    }

    /// Rebuild from a reduced form.
    pub fn restore(tag: &str, bytes: &[u8]) -> Result<Self> {
        if tag != TAG {
            return Err(BufferError::UnknownTag {
                tag: tag.to_string(),
            });
        }
        Ok(ByteBuffer::from(bytes))
    }
}
