// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for hex parsing.
//!
//! Arbitrary text must either parse or fail with `InvalidHex` at a position
//! inside the input. Anything that parses must re-encode to the same digits
//! with the spaces removed and the case folded.

#![no_main]

use bytebuf::{BufferError, ByteBuffer};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    match ByteBuffer::from_hex(text) {
        Ok(buf) => {
            let digits: String = text
                .chars()
                .filter(|&c| c != ' ')
                .collect::<String>()
                .to_lowercase();
            assert_eq!(buf.to_hex(), digits);
            assert_eq!(ByteBuffer::from_hex(buf.to_hex().as_str()).unwrap(), buf);
        }
        Err(BufferError::InvalidHex { position }) => {
            assert!(position <= text.chars().count());
        }
        Err(other) => panic!("unexpected error from from_hex: {other}"),
    }
});
