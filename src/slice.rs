// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Slice arithmetic: turning `(start, stop, step)` requests into concrete positions.
//!
//! A [`Slice`] is what the caller asks for. Each bound may be absent, negative,
//! or wildly out of range. [`Slice::resolve`] clamps it against a concrete
//! length and produces a [`SliceSpec`], which is never out of bounds. This is
//! the only normalization routine in the crate: get, set and delete all go
//! through it, and so does the search window logic (with the step pinned to 1).
//!
//! # Resolution rules
//!
//! | step | default start | default stop | clamp range      |
//! |------|---------------|--------------|------------------|
//! | > 0  | `0`           | `len`        | `[0, len]`       |
//! | < 0  | `len - 1`     | `-1`         | `[-1, len - 1]`  |
//!
//! Negative bounds have `len` added before clamping. The element count is
//! `ceil((stop - start) / step)` in the direction of travel, floored at zero.

use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use crate::contracts::check_spec_in_bounds;
use crate::error::{BufferError, Result};

/// An unresolved slice request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Slice {
    pub start: Option<i64>,
    pub stop: Option<i64>,
    pub step: Option<i64>,
}

impl Slice {
    pub fn new(start: Option<i64>, stop: Option<i64>, step: Option<i64>) -> Self {
        Slice { start, stop, step }
    }

    /// `[..]`
    pub fn full() -> Self {
        Slice::default()
    }

    /// `[start:stop]`
    pub fn range(start: i64, stop: i64) -> Self {
        Slice::new(Some(start), Some(stop), None)
    }

    /// `[start:]`
    pub fn from_start(start: i64) -> Self {
        Slice::new(Some(start), None, None)
    }

    /// `[:stop]`
    pub fn to_stop(stop: i64) -> Self {
        Slice::new(None, Some(stop), None)
    }

    /// `[::step]`
    pub fn stepped(step: i64) -> Self {
        Slice::new(None, None, Some(step))
    }

    /// Resolve against a sequence of length `len`.
    pub fn resolve(&self, len: usize) -> Result<SliceSpec> {
        let step = match self.step {
            None => 1,
            Some(0) => return Err(BufferError::ZeroStep),
            Some(step) => step,
        };

        let len = len as i128;
        let step_wide = step as i128;
        let (start, stop) = if step > 0 {
            (
                clamp_bound(self.start, len, 0, 0, len),
                clamp_bound(self.stop, len, len, 0, len),
            )
        } else {
            (
                clamp_bound(self.start, len, len - 1, -1, len - 1),
                clamp_bound(self.stop, len, -1, -1, len - 1),
            )
        };

        let count = if step > 0 && start < stop {
            (stop - start - 1) / step_wide + 1
        } else if step < 0 && stop < start {
            (start - stop - 1) / (-step_wide) + 1
        } else {
            0
        };

        let spec = SliceSpec {
            start: start as isize,
            stop: stop as isize,
            step: step.clamp(isize::MIN as i64 + 1, isize::MAX as i64) as isize,
            count: count as usize,
        };
        check_spec_in_bounds(&spec, len as usize);
        Ok(spec)
    }
}

/// Apply the default, wrap negatives, then clamp into `[lo, hi]`.
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

impl From<Range<i64>> for Slice {
    fn from(r: Range<i64>) -> Self {
        Slice::range(r.start, r.end)
    }
}

impl From<RangeFrom<i64>> for Slice {
    fn from(r: RangeFrom<i64>) -> Self {
        Slice::from_start(r.start)
    }
}

impl From<RangeTo<i64>> for Slice {
    fn from(r: RangeTo<i64>) -> Self {
        Slice::to_stop(r.end)
    }
}

impl From<RangeFull> for Slice {
    fn from(_: RangeFull) -> Self {
        Slice::full()
    }
}

/// A slice resolved against a concrete length.
///
/// `start` and `stop` are signed because a descending slice may stop at `-1`.
/// Every position yielded by [`SliceSpec::indices`] is in `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceSpec {
    pub start: isize,
    pub stop: isize,
    pub step: isize,
    pub count: usize,
}

impl SliceSpec {
    /// Step 1 slices can change length on assignment; anything else cannot.
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.step == 1
    }

    /// Selected positions in iteration order.
    pub fn indices(&self) -> impl DoubleEndedIterator<Item = usize> + ExactSizeIterator {
        let start = self.start;
        let step = self.step;
        (0..self.count).map(move |i| (start + i as isize * step) as usize)
    }

    /// First index at or after which a contiguous run lives.
    ///
    /// For an empty step-1 slice this is the insertion point.
    #[inline]
    pub fn lower(&self) -> usize {
        self.start.max(0) as usize
    }
}

/// Clamp an optional `[start, stop)` search window against `len`.
///
/// Same bound rules as a step-1 slice, except that a start beyond the end is
/// not pulled back: a window starting past its stop (or past `len`) is empty
/// in the strong sense that not even an empty pattern matches inside it, and
/// comes back as `None`.
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
