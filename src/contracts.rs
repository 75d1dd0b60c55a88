// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the storage and slice layers.
//!
//! Debug-mode assertions of the invariants every other module leans on.
//! They compile to nothing in release builds and fail loudly in tests.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function            | Invariant                                   |
//! |------------------------------|---------------------------------------------|
//! | `check_store_well_formed`    | `len <= capacity`                           |
//! | `check_spec_in_bounds`       | every resolved slice position `< len`       |
//! | `check_extended_assignment`  | extended-slice source length == count       |
//! | `check_window`               | search window `start <= len`, `stop <= len` |

use crate::slice::SliceSpec;

// ============================================================================
// STORE CONTRACTS
// ============================================================================

/// Check that logical length never exceeds the allocation.
///
/// # Panics (debug builds only)
/// Panics if `len > capacity`.
#[inline]
pub fn check_store_well_formed(len: usize, capacity: usize) {
    debug_assert!(
        len <= capacity,
        "Contract violation: Store.WellFormed - len {} > capacity {}",
        len,
        capacity
    );
}

// ============================================================================
// SLICE CONTRACTS
// ============================================================================

/// Check that a resolved slice only touches valid positions.
///
/// # Panics (debug builds only)
/// Panics if the first or last selected position is outside `[0, len)`.
#[inline]
pub fn check_spec_in_bounds(spec: &SliceSpec, len: usize) {
    if spec.count == 0 {
        return;
    }
    let first = spec.start;
    let last = spec.start + (spec.count as isize - 1) * spec.step;
    debug_assert!(
        first >= 0 && (first as usize) < len,
        "Contract violation: SliceSpec.InBounds - first position {} outside [0, {})",
        first,
        len
    );
    debug_assert!(
        last >= 0 && (last as usize) < len,
        "Contract violation: SliceSpec.InBounds - last position {} outside [0, {})",
        last,
        len
    );
}

/// Check the extended-slice length rule right before writing.
#[inline]
pub fn check_extended_assignment(spec: &SliceSpec, source_len: usize) {
    debug_assert!(
        spec.is_contiguous() || spec.count == source_len,
        "Contract violation: ExtendedSlice.SameLength - count {} != source {}",
        spec.count,
        source_len
    );
}

/// Check a clamped search window.
#[inline]
pub fn check_window(start: usize, stop: usize, len: usize) {
    debug_assert!(
        start <= len && stop <= len,
        "Contract violation: Window.Clamped - [{}, {}) against length {}",
        start,
        stop,
        len
    );
}
