// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors reported by buffer operations.
//!
//! Every failure is reported synchronously to the caller of the operation
//! that detected it. Variants carry the offending values so messages stay
//! useful without a backtrace. Callers that only care about the broad
//! category match on [`BufferError::kind`].
//!
//! | Kind                | Raised by                                              |
//! |---------------------|--------------------------------------------------------|
//! | `OutOfRange`        | single-element get/set/delete, `pop_at`                 |
//! | `ValueConstraint`   | byte range, zero step, bad hex, empty separator, not found |
//! | `TypeMismatch`      | wrong operand kind, text where bytes are needed, ordering |
//! | `Exhausted`         | `pop` on an empty buffer                                |
//! | `ResourceExhausted` | size computations that overflow or cannot be allocated |
//! | `EncodingFailure`   | anything the codec layer reports                       |

use crate::codec::CodecError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BufferError>;

/// Broad error category, independent of the concrete variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    OutOfRange,
    ValueConstraint,
    TypeMismatch,
    Exhausted,
    ResourceExhausted,
    EncodingFailure,
}

/// Error type for every fallible buffer operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    /// Single-element index outside `[-len, len)`.
    #[error("{op}: index {index} out of range for length {len}")]
    IndexOutOfRange {
        op: &'static str,
        index: i64,
        len: usize,
    },

    /// An element value outside `[0, 255]`.
    #[error("byte must be in range(0, 256), got {value}")]
    ByteOutOfRange { value: i64 },

    /// A negative size passed to the sized constructor.
    #[error("negative count: {size}")]
    NegativeSize { size: i64 },

    /// Slice step of zero.
    #[error("slice step cannot be zero")]
    ZeroStep,

    /// Extended-slice assignment with a source of the wrong length.
    #[error("attempt to assign sequence of size {got} to extended slice of size {expected}")]
    ExtendedSliceSize { expected: usize, got: usize },

    /// Malformed hexadecimal input.
    #[error("non-hexadecimal number found in fromhex() arg at position {position}")]
    InvalidHex { position: usize },

    /// Separator was empty where a non-empty one is required.
    #[error("{op}: empty separator")]
    EmptySeparator { op: &'static str },

    /// Search-based operation could not find its pattern.
    #[error("{op}: subsection not found")]
    NotFound { op: &'static str },

    /// `remove` could not find the value.
    #[error("remove: value {value} not in buffer")]
    ValueNotPresent { value: u8 },

    /// Translation table was not exactly 256 entries.
    #[error("translation table must be 256 characters long, got {len}")]
    TableSize { len: usize },

    /// Persistence tag did not name this type.
    #[error("cannot restore from tag {tag:?}")]
    UnknownTag { tag: String },

    /// Operand of the wrong kind.
    #[error("{op}: expected {expected}, found {found}")]
    TypeMismatch {
        op: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// Hash requested for the mutable buffer.
    #[error("unhashable type: 'ByteBuffer'")]
    Unhashable,

    /// `pop` on an empty buffer.
    #[error("pop from empty buffer")]
    EmptyPop,

    /// A size computation overflowed or an allocation was refused.
    #[error("{op}: cannot allocate {requested} bytes")]
    CapacityOverflow { op: &'static str, requested: u128 },

    /// Codec failure, passed through unchanged.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl BufferError {
    /// The category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BufferError::IndexOutOfRange { .. } => ErrorKind::OutOfRange,
            BufferError::ByteOutOfRange { .. }
            | BufferError::NegativeSize { .. }
            | BufferError::ZeroStep
            | BufferError::ExtendedSliceSize { .. }
            | BufferError::InvalidHex { .. }
            | BufferError::EmptySeparator { .. }
            | BufferError::NotFound { .. }
            | BufferError::ValueNotPresent { .. }
            | BufferError::TableSize { .. }
            | BufferError::UnknownTag { .. } => ErrorKind::ValueConstraint,
            BufferError::TypeMismatch { .. } | BufferError::Unhashable => ErrorKind::TypeMismatch,
            BufferError::EmptyPop => ErrorKind::Exhausted,
            BufferError::CapacityOverflow { .. } => ErrorKind::ResourceExhausted,
            BufferError::Codec(_) => ErrorKind::EncodingFailure,
        }
    }

    pub(crate) fn type_mismatch(op: &'static str, expected: &'static str, found: &'static str) -> Self {
        BufferError::TypeMismatch {
            op,
            expected,
            found,
        }
    }

    pub(crate) fn overflow(op: &'static str, requested: u128) -> Self {
        BufferError::CapacityOverflow { op, requested }
    }
}
