// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Contiguous byte storage with a capacity distinct from its length.
//!
//! The backing vector is always exactly `capacity` bytes long; everything
//! past `len` is slack that has been allocated but is not part of the value.
//! Keeping the slack inside the vector (instead of relying on `Vec`'s own
//! reservation) makes the growth policy ours, observable, and testable.
//!
//! # Growth policy
//!
//! Moderate growth over-allocates by one eighth plus a small constant, the
//! same shape CPython uses for its lists. A jump to more than twice the
//! current capacity allocates exactly, since the caller already told us how
//! big things are going to be. Shrinking happens when the value drops below
//! half of the allocation.
//!
//! All range edits are expressed as [`Store::replace_range`] (contiguous, may
//! change length) or the extended-slice pair [`Store::assign_extended`] /
//! [`Store::delete_extended`] (fixed positions).

use tracing::trace;

use crate::contracts::{check_extended_assignment, check_store_well_formed};
use crate::error::{BufferError, Result};
use crate::slice::SliceSpec;

/// Growable storage for a byte buffer.
#[derive(Clone, Default)]
pub struct Store {
    data: Vec<u8>,
    len: usize,
}

impl Store {
    pub fn new() -> Self {
        Store::default()
    }

    /// Storage holding `len` zero bytes, allocated exactly.
    pub fn zeroed(len: usize) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| BufferError::overflow("allocate", len as u128))?;
        data.resize(len, 0);
        Ok(Store { data, len })
    }

    /// Storage holding a copy of `bytes`, allocated exactly.
    pub fn from_slice(bytes: &[u8]) -> Self {
        Store {
            data: bytes.to_vec(),
            len: bytes.len(),
        }
    }

    /// Adopt an existing vector; its length becomes both length and capacity.
    pub fn from_vec(data: Vec<u8>) -> Self {
        let len = data.len();
        Store { data, len }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated size in bytes. Always `>= len`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.len]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data[..self.len]
    }

    /// Consume into a vector trimmed to the logical length.
    pub fn into_vec(mut self) -> Vec<u8> {
        self.data.truncate(self.len);
        self.data
    }

    // ========================================================================
    // CAPACITY
    // ========================================================================

    /// Make room for `additional` more bytes past the current length.
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        let needed = self
            .len
            .checked_add(additional)
            .ok_or_else(|| BufferError::overflow("reserve", self.len as u128 + additional as u128))?;
        self.grow_to(needed)
    }

    fn grow_to(&mut self, needed: usize) -> Result<()> {
        let current = self.capacity();
        if needed <= current {
            return Ok(());
        }
        let target = next_capacity(current, needed)
            .ok_or_else(|| BufferError::overflow("grow", needed as u128))?;
        self.data
            .try_reserve_exact(target - current)
            .map_err(|_| BufferError::overflow("grow", target as u128))?;
        self.data.resize(target, 0);
        trace!(from = current, to = target, len = self.len, "grew buffer");
        check_store_well_formed(self.len, self.capacity());
        Ok(())
    }

    fn maybe_shrink(&mut self) {
        let current = self.capacity();
        if self.len >= current / 2 {
            return;
        }
        self.data.truncate(self.len);
        self.data.shrink_to_fit();
        trace!(from = current, to = self.data.len(), "shrank buffer");
    }

    /// Drop all slack so that capacity equals length.
    pub fn shrink_to_fit(&mut self) {
        self.data.truncate(self.len);
        self.data.shrink_to_fit();
    }

    // ========================================================================
    // CONTIGUOUS EDITS
    // ========================================================================

    /// Replace `[start, stop)` with `src`, shifting the tail as needed.
    ///
    /// `src` is a plain borrow, so it can never alias this store's storage;
    /// callers holding a view into this store must snapshot it first.
    pub fn replace_range(&mut self, start: usize, stop: usize, src: &[u8]) -> Result<()> {
        let stop = stop.max(start);
        debug_assert!(stop <= self.len);
        let removed = stop - start;
        let new_len = (self.len - removed)
            .checked_add(src.len())
            .ok_or_else(|| BufferError::overflow("assign", (self.len - removed) as u128 + src.len() as u128))?;

        let shrinking = src.len() < removed;
        if src.len() > removed {
            self.grow_to(new_len)?;
        }
        if src.len() != removed {
            self.data.copy_within(stop..self.len, start + src.len());
        }
        self.data[start..start + src.len()].copy_from_slice(src);
        self.len = new_len;

        if shrinking {
            self.maybe_shrink();
        }
        check_store_well_formed(self.len, self.capacity());
        Ok(())
    }

    /// Append bytes at the end.
    pub fn extend_from_slice(&mut self, src: &[u8]) -> Result<()> {
        let end = self.len;
        self.replace_range(end, end, src)
    }

    /// Append one byte with amortized constant cost.
    pub fn push(&mut self, byte: u8) -> Result<()> {
        self.reserve(1)?;
        self.data[self.len] = byte;
        self.len += 1;
        Ok(())
    }

    /// Insert one byte at `pos` (`pos <= len`).
    pub fn insert(&mut self, pos: usize, byte: u8) -> Result<()> {
        self.replace_range(pos, pos, &[byte])
    }

    /// Remove and return the byte at `pos` (`pos < len`).
    pub fn remove(&mut self, pos: usize) -> u8 {
        let byte = self.data[pos];
        self.data.copy_within(pos + 1..self.len, pos);
        self.len -= 1;
        self.maybe_shrink();
        byte
    }

    pub fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.len = len;
            self.maybe_shrink();
        }
    }

    pub fn clear(&mut self) {
        self.truncate(0);
    }

    pub fn reverse(&mut self) {
        self.as_mut_slice().reverse();
    }

    // ========================================================================
    // SLICE EDITS
    // ========================================================================

    /// Copy out the selected elements in slice order.
    pub fn get_range(&self, spec: &SliceSpec) -> Vec<u8> {
        if spec.is_contiguous() {
            let lo = spec.lower();
            return self.as_slice()[lo..lo + spec.count].to_vec();
        }
        let data = self.as_slice();
        spec.indices().map(|i| data[i]).collect()
    }

    /// Overwrite exactly the selected positions with `src`.
    ///
    /// The caller has already checked `src.len() == spec.count`.
    pub fn assign_extended(&mut self, spec: &SliceSpec, src: &[u8]) {
        check_extended_assignment(spec, src.len());
        let data = self.as_mut_slice();
        for (pos, &byte) in spec.indices().zip(src) {
            data[pos] = byte;
        }
    }

    /// Remove exactly the selected positions, keeping the rest in order.
    pub fn delete_extended(&mut self, spec: &SliceSpec) {
        if spec.count == 0 {
            return;
        }
        // Walk ascending regardless of the slice direction.
        let stride = spec.step.unsigned_abs();
        let first = if spec.step > 0 {
            spec.start as usize
        } else {
            (spec.start + (spec.count as isize - 1) * spec.step) as usize
        };
        let last = first + (spec.count - 1) * stride;

        let mut write = first;
        for read in first..self.len {
            let selected = read <= last && (read - first) % stride == 0;
            if !selected {
                self.data[write] = self.data[read];
                write += 1;
            }
        }
        self.len = write;
        self.maybe_shrink();
        check_store_well_formed(self.len, self.capacity());
    }
}

/// Capacity to allocate when `needed` bytes no longer fit in `current`.
fn next_capacity(current: usize, needed: usize) -> Option<usize> {
    if needed > current.saturating_mul(2) {
        return Some(needed);
    }
    let pad = if needed < 9 { 3 } else { 6 };
    needed.checked_add(needed >> 3)?.checked_add(pad)
}
