// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Multi-step workflows that combine several parts of the library.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};
use std::sync::Arc;

use bytebuf::{
    decode_snapshot, encode_snapshot, ByteBuffer, Codec, CodecError, CodecRegistry, ErrorKind, ErrorMode,
    SharedBuffer, Slice, Source,
};
use tempfile::tempfile;

use crate::common::{assert_kind, buf};

/// Caller-supplied codec: hex digits as the text form.
struct HexText;

impl Codec for HexText {
    fn name(&self) -> &'static str {
        "hextext"
    }

    fn encode(&self, text: &str, _errors: ErrorMode) -> Result<Vec<u8>, CodecError> {
        let chars: Vec<char> = text.chars().collect();
        chars
            .chunks(2)
            .enumerate()
            .map(|(i, pair)| {
                let s: String = pair.iter().collect();
                u8::from_str_radix(&s, 16).map_err(|_| CodecError::Encode {
                    codec: "hextext",
                    ch: pair[0],
                    position: i * 2,
                    reason: "not a hex pair",
                })
            })
            .collect()
    }

    fn decode(&self, bytes: &[u8], _errors: ErrorMode) -> Result<String, CodecError> {
        Ok(bytes.iter().map(|b| format!("{:02x}", b)).collect())
    }
}

#[test]
fn test_custom_codec_through_registry() {
    let mut registry = CodecRegistry::with_builtins();
    registry.register("HexText", Arc::new(HexText));

    let b = ByteBuffer::construct(Source::text("cafe", "hextext", None), &registry).unwrap();
    assert_eq!(b, [0xcau8, 0xfe]);
    assert_eq!(b.decode("hextext", None, &registry).unwrap(), "cafe");
    assert_kind(
        ByteBuffer::from_text("zz", "hextext", None, &registry),
        ErrorKind::EncodingFailure,
    );

    // a registry without it does not know the name
    let plain = CodecRegistry::with_builtins();
    assert_kind(b.decode("hextext", None, &plain), ErrorKind::EncodingFailure);
}

#[test]
fn test_shared_handles_see_each_other() {
    let log = SharedBuffer::new(ByteBuffer::new());
    let writer = log.clone();
    writer.borrow_mut().extend(&b"GET /"[..]).unwrap();
    writer.borrow_mut().extend(&b" 200\n"[..]).unwrap();
    assert_eq!(log.len(), 10);

    // duplicate the line in place through the aliasing handle
    log.extend(&writer).unwrap();
    assert_eq!(*log.borrow(), b"GET / 200\nGET / 200\n");

    // overwrite the status of the first line from a separate buffer
    let status = SharedBuffer::new(buf(b"404"));
    log.set_slice(6i64..9, &status).unwrap();
    assert_eq!(log.borrow().splitlines(false), vec![buf(b"GET / 404"), buf(b"GET / 200")]);
}

#[test]
fn test_file_round_trip_through_buffer_io() {
    let mut file = tempfile().unwrap();
    let mut b = ByteBuffer::new();
    for line in ["alpha", "beta", "gamma"] {
        b.extend(line.as_bytes()).unwrap();
        b.append(b'\n').unwrap();
    }
    b.write_to(&mut file).unwrap();
    file.flush().unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();

    let mut target = ByteBuffer::with_size(5).unwrap();
    assert_eq!(target.read_into(&mut file).unwrap(), 5);
    assert_eq!(target, b"alpha");

    let mut rest = Vec::new();
    file.read_to_end(&mut rest).unwrap();
    assert_eq!(rest, b"\nbeta\ngamma\n");
}

#[test]
fn test_edit_then_persist() {
    let mut b = buf(b"name=old; mode=rw");
    let start = b.find(&b"old"[..]).unwrap().unwrap() as i64;
    b.set_slice(start..start + 3, &b"fresh"[..]).unwrap();
    b.del_slice(Slice::from_start(b.rfind(&b";"[..]).unwrap().unwrap() as i64)).unwrap();
    assert_eq!(b, b"name=fresh");

    let snap = encode_snapshot(&b);
    let back = decode_snapshot(&snap).unwrap();
    assert_eq!(back, b);

    let (tag, raw) = back.reduce();
    let mut again = ByteBuffer::restore(tag, &raw).unwrap();
    again.extend_from_self().unwrap();
    assert_eq!(again, b"name=freshname=fresh");
    assert_eq!(b, b"name=fresh");
}

#[test]
fn test_tokenize_and_rebuild() {
    let line = buf(b"  GET   /index.html   HTTP/1.1 \r\n");
    let fields = line.strip(bytebuf::Value::None).unwrap().split(bytebuf::Value::None, None).unwrap();
    assert_eq!(fields.len(), 3);
    let method = fields[0].lower();
    assert_eq!(method, b"get");
    let rebuilt = buf(b" ").join(fields.iter()).unwrap();
    assert_eq!(rebuilt, b"GET /index.html HTTP/1.1");
    assert!(rebuilt.starts_with(&b"GET"[..]).unwrap());
    assert_eq!(rebuilt.count(b'/').unwrap(), 2);
}
