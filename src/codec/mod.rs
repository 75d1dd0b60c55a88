// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The one deliberate crossing point between bytes and text.
//!
//! A buffer never turns into text (or text into a buffer) implicitly. The
//! crossing goes through a named [`Codec`] looked up in a [`CodecRegistry`]
//! that the caller owns and passes in. There is no process-wide registry.
//!
//! Codec failures are reported as [`CodecError`] and travel through
//! `BufferError::Codec` untouched.
//!
//! # Name normalization
//!
//! Lookups are case-insensitive and treat `_` and `-` alike, so `UTF_8`,
//! `utf-8` and `Utf-8` find the same codec. Aliases are registered as extra
//! names pointing at the same codec.

mod builtin;

pub use builtin::{Ascii, Latin1, Utf16, Utf8};

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// What to do with characters or bytes a codec cannot handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorMode {
    /// Fail with a `CodecError`.
    #[default]
    Strict,
    /// Drop the offending input.
    Ignore,
    /// Substitute `?` when encoding, U+FFFD when decoding.
    Replace,
}

impl ErrorMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorMode::Strict => "strict",
            ErrorMode::Ignore => "ignore",
            ErrorMode::Replace => "replace",
        }
    }

    /// Parse an optional mode name, defaulting to strict.
    pub fn parse_optional(name: Option<&str>) -> Result<Self, CodecError> {
        name.map_or(Ok(ErrorMode::Strict), str::parse)
    }
}

impl FromStr for ErrorMode {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(ErrorMode::Strict),
            "ignore" => Ok(ErrorMode::Ignore),
            "replace" => Ok(ErrorMode::Replace),
            other => Err(CodecError::UnknownErrorMode(other.to_string())),
        }
    }
}

impl fmt::Display for ErrorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure reported by a codec or by codec lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("unknown encoding: {0}")]
    UnknownCodec(String),

    #[error("unknown error handler name {0:?}")]
    UnknownErrorMode(String),

    #[error("'{codec}' codec can't encode character {ch:?} in position {position}: {reason}")]
    Encode {
        codec: &'static str,
        ch: char,
        position: usize,
        reason: &'static str,
    },

    #[error("'{codec}' codec can't decode byte 0x{byte:02x} in position {position}: {reason}")]
    Decode {
        codec: &'static str,
        byte: u8,
        position: usize,
        reason: &'static str,
    },
}

/// A named bidirectional transform between bytes and text.
pub trait Codec: Send + Sync {
    /// Canonical name, e.g. `"utf-8"`.
    fn name(&self) -> &'static str;

    fn encode(&self, text: &str, errors: ErrorMode) -> Result<Vec<u8>, CodecError>;

    fn decode(&self, bytes: &[u8], errors: ErrorMode) -> Result<String, CodecError>;
}

/// Named codec lookup, supplied by the caller.
#[derive(Clone, Default)]
pub struct CodecRegistry {
    codecs: HashMap<String, Arc<dyn Codec>>,
}

impl CodecRegistry {
    /// A registry with nothing in it.
    pub fn new() -> Self {
        CodecRegistry {
            codecs: HashMap::new(),
        }
    }

    /// A registry preloaded with utf-8, utf-16, latin-1 and ascii.
    pub fn with_builtins() -> Self {
        let mut registry = CodecRegistry::new();
        registry.register_aliases(Arc::new(Utf8), &["utf-8", "utf8", "u8"]);
        registry.register_aliases(Arc::new(Utf16), &["utf-16", "utf16", "u16"]);
        registry.register_aliases(
            Arc::new(Latin1),
            &["latin-1", "latin1", "iso-8859-1", "iso8859-1", "l1"],
        );
        registry.register_aliases(Arc::new(Ascii), &["ascii", "us-ascii"]);
        registry
    }

    /// Register a codec under `name`, replacing whatever was there.
    pub fn register(&mut self, name: &str, codec: Arc<dyn Codec>) {
        self.codecs.insert(normalize_name(name), codec);
    }

    /// Register one codec under several names.
    pub fn register_aliases(&mut self, codec: Arc<dyn Codec>, names: &[&str]) {
        for name in names {
            self.register(name, Arc::clone(&codec));
        }
    }

    /// Find a codec by name.
    pub fn lookup(&self, name: &str) -> Result<Arc<dyn Codec>, CodecError> {
        self.codecs
            .get(&normalize_name(name))
            .cloned()
            .ok_or_else(|| CodecError::UnknownCodec(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }

    /// Encode `text` with the named codec.
    pub fn encode(&self, text: &str, codec: &str, errors: ErrorMode) -> Result<Vec<u8>, CodecError> {
        self.lookup(codec)?.encode(text, errors)
    }

    /// Decode `bytes` with the named codec.
    pub fn decode(&self, bytes: &[u8], codec: &str, errors: ErrorMode) -> Result<String, CodecError> {
        self.lookup(codec)?.decode(bytes, errors)
    }
}

impl fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.codecs.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("CodecRegistry").field("names", &names).finish()
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace('_', "-")
}
