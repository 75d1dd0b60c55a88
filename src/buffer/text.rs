// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search, transforms and the text boundary.
//!
//! Patterns and separators are dynamic operands: byte sequences are accepted,
//! text is a `TypeMismatch`, and the search family additionally takes a
//! single integer naming one byte. Transforms never modify `self`; they
//! return new buffers.
//!
//! Windowed variants (`*_in`) take a [`Slice`] whose start and stop bound the
//! search; its step is ignored.

use super::ByteBuffer;
use crate::codec::{CodecRegistry, ErrorMode};
use crate::error::{BufferError, Result};
use crate::search::{self, Pattern};
use crate::slice::Slice;
use crate::transform::{self, case, layout, replace, split, strip::StripSet};
use crate::value::Value;

fn to_pattern<'a>(value: impl Into<Value<'a>>, op: &'static str) -> Result<Pattern<'a>> {
    Pattern::from_value(value.into(), op)
}

/// `None` selects the default behaviour, byte sequences are used as given.
fn optional_bytes<'a>(value: impl Into<Value<'a>>, op: &'static str) -> Result<Option<&'a [u8]>> {
    match value.into() {
        Value::None => Ok(None),
        other => other.to_bytes(op).map(Some),
    }
}

fn wrap_all(fields: Vec<&[u8]>) -> Vec<ByteBuffer> {
    fields.into_iter().map(ByteBuffer::from).collect()
}

impl ByteBuffer {
    // ========================================================================
    // SEARCH
    // ========================================================================

    /// Membership: a byte sequence is a substring test, an integer a single
    /// byte test.
    pub fn contains<'a>(&self, item: impl Into<Value<'a>>) -> Result<bool> {
        search::contains(self.as_bytes(), item.into())
    }

    /// Lowest position of `pattern`, or `None`.
    pub fn find<'a>(&self, pattern: impl Into<Value<'a>>) -> Result<Option<usize>> {
        self.find_in(pattern, Slice::full())
    }

    pub fn find_in<'a>(&self, pattern: impl Into<Value<'a>>, range: impl Into<Slice>) -> Result<Option<usize>> {
        let pattern = to_pattern(pattern, "find")?;
        Ok(search::find(self.as_bytes(), pattern.as_bytes(), range.into()))
    }

    /// Highest position of `pattern`, or `None`.
    pub fn rfind<'a>(&self, pattern: impl Into<Value<'a>>) -> Result<Option<usize>> {
        self.rfind_in(pattern, Slice::full())
    }

    pub fn rfind_in<'a>(&self, pattern: impl Into<Value<'a>>, range: impl Into<Slice>) -> Result<Option<usize>> {
        let pattern = to_pattern(pattern, "rfind")?;
        Ok(search::rfind(self.as_bytes(), pattern.as_bytes(), range.into()))
    }

    /// Like [`find`](Self::find), but absence is a `ValueConstraint` error.
    pub fn index<'a>(&self, pattern: impl Into<Value<'a>>) -> Result<usize> {
        self.index_in(pattern, Slice::full())
    }

    pub fn index_in<'a>(&self, pattern: impl Into<Value<'a>>, range: impl Into<Slice>) -> Result<usize> {
        let pattern = to_pattern(pattern, "index")?;
        search::find(self.as_bytes(), pattern.as_bytes(), range.into())
            .ok_or(BufferError::NotFound { op: "index" })
    }

    /// Like [`rfind`](Self::rfind), but absence is a `ValueConstraint` error.
    pub fn rindex<'a>(&self, pattern: impl Into<Value<'a>>) -> Result<usize> {
        self.rindex_in(pattern, Slice::full())
    }

    pub fn rindex_in<'a>(&self, pattern: impl Into<Value<'a>>, range: impl Into<Slice>) -> Result<usize> {
        let pattern = to_pattern(pattern, "rindex")?;
        search::rfind(self.as_bytes(), pattern.as_bytes(), range.into())
            .ok_or(BufferError::NotFound { op: "rindex" })
    }

    /// Non-overlapping occurrences. An empty pattern counts `len + 1`.
    pub fn count<'a>(&self, pattern: impl Into<Value<'a>>) -> Result<usize> {
        self.count_in(pattern, Slice::full())
    }

    pub fn count_in<'a>(&self, pattern: impl Into<Value<'a>>, range: impl Into<Slice>) -> Result<usize> {
        let pattern = to_pattern(pattern, "count")?;
        Ok(search::count(self.as_bytes(), pattern.as_bytes(), range.into()))
    }

    pub fn starts_with<'a>(&self, prefix: impl Into<Value<'a>>) -> Result<bool> {
        self.starts_with_in(prefix, Slice::full())
    }

    pub fn starts_with_in<'a>(&self, prefix: impl Into<Value<'a>>, range: impl Into<Slice>) -> Result<bool> {
        let prefix = prefix.into().to_bytes("starts_with")?;
        Ok(search::starts_with(self.as_bytes(), prefix, range.into()))
    }

    pub fn ends_with<'a>(&self, suffix: impl Into<Value<'a>>) -> Result<bool> {
        self.ends_with_in(suffix, Slice::full())
    }

    pub fn ends_with_in<'a>(&self, suffix: impl Into<Value<'a>>, range: impl Into<Slice>) -> Result<bool> {
        let suffix = suffix.into().to_bytes("ends_with")?;
        Ok(search::ends_with(self.as_bytes(), suffix, range.into()))
    }

    // ========================================================================
    // TRANSFORMS
    // ========================================================================

    /// Map every byte through a 256-entry table. `Value::None` is the identity.
    pub fn translate<'a>(&self, table: impl Into<Value<'a>>) -> Result<ByteBuffer> {
        self.translate_deleting(table, Value::None)
    }

    /// Drop every byte in `delete`, then map the rest through `table`.
    pub fn translate_deleting<'a, 'b>(
        &self,
        table: impl Into<Value<'a>>,
        delete: impl Into<Value<'b>>,
    ) -> Result<ByteBuffer> {
        let table = optional_bytes(table, "translate")?;
        let delete = optional_bytes(delete, "translate")?.unwrap_or_default();
        Ok(ByteBuffer::from(transform::translate(self.as_bytes(), table, delete)?))
    }

    fn strip_set<'a>(chars: impl Into<Value<'a>>, op: &'static str) -> Result<StripSet<'a>> {
        Ok(optional_bytes(chars, op)?.map_or(StripSet::Whitespace, StripSet::Bytes))
    }

    /// Trim both ends. `Value::None` trims ASCII whitespace.
    pub fn strip<'a>(&self, chars: impl Into<Value<'a>>) -> Result<ByteBuffer> {
        let set = Self::strip_set(chars, "strip")?;
        Ok(ByteBuffer::from(transform::strip::strip(self.as_bytes(), set)))
    }

    pub fn lstrip<'a>(&self, chars: impl Into<Value<'a>>) -> Result<ByteBuffer> {
        let set = Self::strip_set(chars, "lstrip")?;
        Ok(ByteBuffer::from(transform::strip::lstrip(self.as_bytes(), set)))
    }

    pub fn rstrip<'a>(&self, chars: impl Into<Value<'a>>) -> Result<ByteBuffer> {
        let set = Self::strip_set(chars, "rstrip")?;
        Ok(ByteBuffer::from(transform::strip::rstrip(self.as_bytes(), set)))
    }

    /// Split on `sep`, or on whitespace runs when `sep` is `Value::None`.
    pub fn split<'a>(&self, sep: impl Into<Value<'a>>, maxsplit: Option<usize>) -> Result<Vec<ByteBuffer>> {
        let sep = optional_bytes(sep, "split")?;
        Ok(wrap_all(split::split(self.as_bytes(), sep, maxsplit)?))
    }

    /// Split from the right; only differs from [`split`](Self::split) when
    /// `maxsplit` is given.
    pub fn rsplit<'a>(&self, sep: impl Into<Value<'a>>, maxsplit: Option<usize>) -> Result<Vec<ByteBuffer>> {
        let sep = optional_bytes(sep, "rsplit")?;
        Ok(wrap_all(split::rsplit(self.as_bytes(), sep, maxsplit)?))
    }

    pub fn partition<'a>(&self, sep: impl Into<Value<'a>>) -> Result<(ByteBuffer, ByteBuffer, ByteBuffer)> {
        let sep = sep.into().to_bytes("partition")?;
        let (before, found, after) = split::partition(self.as_bytes(), sep)?;
        Ok((before.into(), found.into(), after.into()))
    }

    pub fn rpartition<'a>(&self, sep: impl Into<Value<'a>>) -> Result<(ByteBuffer, ByteBuffer, ByteBuffer)> {
        let sep = sep.into().to_bytes("rpartition")?;
        let (before, found, after) = split::rpartition(self.as_bytes(), sep)?;
        Ok((before.into(), found.into(), after.into()))
    }

    pub fn splitlines(&self, keepends: bool) -> Vec<ByteBuffer> {
        wrap_all(split::splitlines(self.as_bytes(), keepends))
    }

    /// Replace every non-overlapping occurrence of `old` with `new`.
    pub fn replace<'a, 'b>(&self, old: impl Into<Value<'a>>, new: impl Into<Value<'b>>) -> Result<ByteBuffer> {
        self.replace_with_limit(old, new, None)
    }

    /// Replace at most `count` occurrences, leftmost first.
    pub fn replace_n<'a, 'b>(
        &self,
        old: impl Into<Value<'a>>,
        new: impl Into<Value<'b>>,
        count: usize,
    ) -> Result<ByteBuffer> {
        self.replace_with_limit(old, new, Some(count))
    }

    fn replace_with_limit<'a, 'b>(
        &self,
        old: impl Into<Value<'a>>,
        new: impl Into<Value<'b>>,
        count: Option<usize>,
    ) -> Result<ByteBuffer> {
        let old = old.into().to_bytes("replace")?;
        let new = new.into().to_bytes("replace")?;
        Ok(ByteBuffer::from(replace::replace(self.as_bytes(), old, new, count)?))
    }

    /// Concatenate byte sequences with this buffer between them.
    pub fn join<'a, I>(&self, items: I) -> Result<ByteBuffer>
    where
        I: IntoIterator,
        I::Item: Into<Value<'a>>,
    {
        let parts = items
            .into_iter()
            .map(|item| item.into().to_bytes("join"))
            .collect::<Result<Vec<&[u8]>>>()?;
        Ok(ByteBuffer::from(transform::join(self.as_bytes(), parts.iter().copied())?))
    }

    pub fn ljust(&self, width: usize, fill: u8) -> Result<ByteBuffer> {
        layout::ljust(self.as_bytes(), width, fill).map(ByteBuffer::from)
    }

    pub fn rjust(&self, width: usize, fill: u8) -> Result<ByteBuffer> {
        layout::rjust(self.as_bytes(), width, fill).map(ByteBuffer::from)
    }

    pub fn center(&self, width: usize, fill: u8) -> Result<ByteBuffer> {
        layout::center(self.as_bytes(), width, fill).map(ByteBuffer::from)
    }

    pub fn zfill(&self, width: usize) -> Result<ByteBuffer> {
        layout::zfill(self.as_bytes(), width).map(ByteBuffer::from)
    }

    pub fn expandtabs(&self, tabsize: usize) -> Result<ByteBuffer> {
        layout::expandtabs(self.as_bytes(), tabsize).map(ByteBuffer::from)
    }

    pub fn lower(&self) -> ByteBuffer {
        case::lower(self.as_bytes()).into()
    }

    pub fn upper(&self) -> ByteBuffer {
        case::upper(self.as_bytes()).into()
    }

    pub fn swapcase(&self) -> ByteBuffer {
        case::swapcase(self.as_bytes()).into()
    }

    pub fn capitalize(&self) -> ByteBuffer {
        case::capitalize(self.as_bytes()).into()
    }

    pub fn title(&self) -> ByteBuffer {
        case::title(self.as_bytes()).into()
    }

    pub fn is_alnum(&self) -> bool {
        case::is_alnum(self.as_bytes())
    }

    pub fn is_alpha(&self) -> bool {
        case::is_alpha(self.as_bytes())
    }

    pub fn is_digit(&self) -> bool {
        case::is_digit(self.as_bytes())
    }

    pub fn is_space(&self) -> bool {
        case::is_space_only(self.as_bytes())
    }

    pub fn is_lower(&self) -> bool {
        case::is_lower(self.as_bytes())
    }

    pub fn is_upper(&self) -> bool {
        case::is_upper(self.as_bytes())
    }

    pub fn is_title(&self) -> bool {
        case::is_title(self.as_bytes())
    }

    // ========================================================================
    // TEXT BOUNDARY
    // ========================================================================

    /// Decode through a named codec. `errors` defaults to strict.
    pub fn decode(&self, codec: &str, errors: Option<&str>, registry: &CodecRegistry) -> Result<String> {
        let mode = ErrorMode::parse_optional(errors)?;
        Ok(registry.lookup(codec)?.decode(self.as_bytes(), mode)?)
    }

    /// Strict decode through a named codec.
    pub fn to_text(&self, codec: &str, registry: &CodecRegistry) -> Result<String> {
        self.decode(codec, None, registry)
    }

    /// Parse space-separated hex pairs. Anything other than text is a
    /// `TypeMismatch`.
    pub fn from_hex<'a>(text: impl Into<Value<'a>>) -> Result<ByteBuffer> {
        match text.into() {
            Value::Text(text) => Ok(crate::hex::from_hex(text)?.into()),
            other => Err(BufferError::type_mismatch("from_hex", "str", other.kind_name())),
        }
    }

    /// Lowercase hex with no separators.
    pub fn to_hex(&self) -> String {
        crate::hex::to_hex(self.as_bytes())
    }

    /// The quoted, escaped `b'...'` literal.
    pub fn repr(&self) -> String {
        crate::repr::escape(self.as_bytes())
    }
}
