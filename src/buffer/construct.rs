// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Construction dispatch by source shape.

use tracing::debug;

use super::{collect_bytes, ByteBuffer};
use crate::codec::{CodecRegistry, ErrorMode};
use crate::error::{BufferError, Result};
use crate::store::Store;
use crate::value::Value;

/// Where a new buffer's contents come from.
pub enum Source<'a> {
    /// Nothing: an empty buffer.
    Empty,
    /// A single operand. Integers give a zero-filled buffer of that size,
    /// byte sequences are copied, anything else is rejected.
    Value(Value<'a>),
    /// Values that each pass the index protocol and fit a byte.
    Items(Box<dyn Iterator<Item = Value<'a>> + 'a>),
    /// Text plus the codec that turns it into bytes.
    Encoded {
        value: Value<'a>,
        codec: Option<&'a str>,
        errors: Option<&'a str>,
    },
}

impl<'a> Source<'a> {
    pub fn items<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::IntoIter: 'a,
        I::Item: Into<Value<'a>> + 'a,
    {
        Source::Items(Box::new(values.into_iter().map(Into::into)))
    }

    pub fn text(text: &'a str, codec: &'a str, errors: Option<&'a str>) -> Self {
        Source::Encoded {
            value: Value::Text(text),
            codec: Some(codec),
            errors,
        }
    }
}

impl ByteBuffer {
    /// Build a buffer from any supported source.
    ///
    /// The codec registry is consulted only for encoded text.
    pub fn construct(source: Source<'_>, registry: &CodecRegistry) -> Result<Self> {
        match source {
            Source::Empty => Ok(ByteBuffer::new()),
            Source::Value(value) => match value {
                Value::Int(_) | Value::Index(_) => ByteBuffer::with_size(value),
                Value::Bytes(bytes) => Ok(ByteBuffer::from(bytes)),
                Value::Text(_) => Err(BufferError::type_mismatch(
                    "construct",
                    "a codec name alongside text",
                    "str",
                )),
                other => Err(BufferError::type_mismatch(
                    "construct",
                    "a size, a bytes-like object or an iterable of integers",
                    other.kind_name(),
                )),
            },
            Source::Items(values) => Ok(ByteBuffer::from(collect_bytes(values, "construct")?)),
            Source::Encoded {
                value,
                codec,
                errors,
            } => {
                let text = match value {
                    Value::Text(text) => text,
                    other => {
                        return Err(BufferError::type_mismatch(
                            "construct",
                            "text when a codec is given",
                            other.kind_name(),
                        ))
                    }
                };
                let codec = codec.ok_or(BufferError::type_mismatch(
                    "construct",
                    "a codec name alongside text",
                    "str",
                ))?;
                ByteBuffer::from_text(text, codec, errors, registry)
            }
        }
    }

    /// Encode `text` through a named codec.
    pub fn from_text(
        text: &str,
        codec: &str,
        errors: Option<&str>,
        registry: &CodecRegistry,
    ) -> Result<Self> {
        let mode = ErrorMode::parse_optional(errors)?;
        let codec = registry.lookup(codec)?;
        let bytes = codec.encode(text, mode)?;
        debug!(codec = codec.name(), len = bytes.len(), "encoded text");
        Ok(ByteBuffer::from_store(Store::from_vec(bytes)))
    }
}
