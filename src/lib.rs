// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A growable, mutable byte buffer with byte-string operations.
//!
//! [`ByteBuffer`] owns a contiguous run of bytes whose length can change. It
//! supports integer and slice indexing (negative indices, steps, extended
//! slice assignment), in-place mutation, search, byte-wise transformations,
//! and a small text boundary (hex, escaped literals, pluggable codecs).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  value.rs   │────▶│  buffer/     │◀────│  slice.rs        │
//! │ (Value,     │     │ (ByteBuffer: │     │ (Slice →         │
//! │  AsIndex)   │     │  ops, text)  │     │  SliceSpec)      │
//! └─────────────┘     └──────────────┘     └──────────────────┘
//!        │              │    │    │                 │
//!        ▼              ▼    ▼    ▼                 ▼
//! ┌───────────┐ ┌────────┐ ┌──────────┐ ┌──────────────────────┐
//! │ search.rs │ │ store  │ │transform/│ │ contracts.rs         │
//! │ (memchr)  │ │ (grow, │ │ (split,  │ │ (debug invariants)   │
//! │           │ │ shrink)│ │  case..) │ │                      │
//! └───────────┘ └────────┘ └──────────┘ └──────────────────────┘
//!        │                                          │
//!        ▼                                          ▼
//! ┌──────────────────────┐              ┌──────────────────────┐
//! │ codec/  hex  repr    │              │ persist/ (reduce,    │
//! │ (text boundary)      │              │  serde, snapshots)   │
//! └──────────────────────┘              └──────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use bytebuf::{ByteBuffer, Slice};
//!
//! let mut buf = ByteBuffer::from(&b"hello world"[..]);
//! buf.set_slice(Slice::range(0, 5), &b"HELLO"[..]).unwrap();
//! assert_eq!(buf, b"HELLO world");
//!
//! buf.del_slice(Slice::new(None, None, Some(2))).unwrap();
//! assert_eq!(buf, b"EL ol");
//!
//! assert_eq!(buf.find(&b"ol"[..]).unwrap(), Some(3));
//! assert_eq!(ByteBuffer::from_hex("de ad").unwrap().to_hex(), "dead");
//! ```

pub mod buffer;
pub mod codec;
pub mod contracts;
pub mod error;
pub mod hex;
pub mod persist;
pub mod repr;
pub mod search;
pub mod shared;
pub mod slice;
mod store;
pub mod testing;
pub mod transform;
pub mod value;
pub mod view;

pub use buffer::{ByteBuffer, Source};
pub use codec::{Codec, CodecError, CodecRegistry, ErrorMode};
pub use error::{BufferError, ErrorKind, Result};
pub use persist::{decode_snapshot, encode_snapshot};
pub use shared::SharedBuffer;
pub use slice::{window, Slice, SliceSpec};
pub use value::{AsIndex, Value};
pub use view::ByteView;
