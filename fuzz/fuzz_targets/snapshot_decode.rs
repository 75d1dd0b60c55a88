// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for snapshot decoding.
//!
//! Garbage must be rejected with an error, never a panic. Anything accepted
//! must re-encode to exactly the input, since the format has one canonical
//! encoding per payload.

#![no_main]

use bytebuf::{decode_snapshot, encode_snapshot, ByteBuffer};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(buf) = decode_snapshot(data) {
        assert_eq!(encode_snapshot(&buf), data);
    }

    // Every payload survives a round trip.
    let buf = ByteBuffer::from(data);
    assert_eq!(decode_snapshot(&encode_snapshot(&buf)).unwrap(), buf);
});
