// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reduce/restore, serde, and snapshot persistence.

use std::fs;
use std::io::ErrorKind as IoErrorKind;

use bytebuf::persist::snapshot::MAGIC;
use bytebuf::persist::TAG;
use bytebuf::{decode_snapshot, encode_snapshot, ByteBuffer, ByteView, ErrorKind};
use tempfile::TempDir;

use crate::common::{assert_kind, buf, counting_buffer};

#[test]
fn test_reduce_restore() {
    let b = counting_buffer(300);
    let (tag, bytes) = b.reduce();
    assert_eq!(tag, TAG);
    assert_eq!(bytes.len(), 300);
    assert_eq!(ByteBuffer::restore(tag, &bytes).unwrap(), b);
    assert_kind(ByteBuffer::restore("something.else", &bytes), ErrorKind::ValueConstraint);
}

#[test]
fn test_restored_buffer_is_independent() {
    let (tag, mut bytes) = buf(b"abc").reduce();
    let restored = ByteBuffer::restore(tag, &bytes).unwrap();
    bytes[0] = b'z';
    assert_eq!(restored, b"abc");
}

#[test]
fn test_serde_json_round_trip() {
    let b = buf(b"\x00hi\xff");
    let json = serde_json::to_string(&b).unwrap();
    assert_eq!(json, "[0,104,105,255]");
    let back: ByteBuffer = serde_json::from_str(&json).unwrap();
    assert_eq!(back, b);

    let view: ByteView = serde_json::from_str("[1,2,3]").unwrap();
    assert_eq!(view.as_bytes(), &[1, 2, 3]);
    assert_eq!(serde_json::to_string(&view).unwrap(), "[1,2,3]");

    assert!(serde_json::from_str::<ByteBuffer>("[1,300]").is_err());
    assert!(serde_json::from_str::<ByteBuffer>("{\"a\":1}").is_err());
}

#[test]
fn test_serde_inside_a_struct() {
    #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
    struct Record {
        name: String,
        payload: ByteBuffer,
    }

    let record = Record {
        name: "blob".to_string(),
        payload: buf(b"ok"),
    };
    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(json, r#"{"name":"blob","payload":[111,107]}"#);
    let back: Record = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn test_snapshot_round_trip() {
    for b in [ByteBuffer::new(), buf(b"hi"), counting_buffer(1000)] {
        let snap = encode_snapshot(&b);
        assert_eq!(&snap[..4], &MAGIC);
        assert_eq!(decode_snapshot(&snap).unwrap(), b);
    }
}

#[test]
fn test_snapshot_rejects_damage() {
    let snap = encode_snapshot(&buf(b"payload"));

    let mut flipped = snap.clone();
    flipped[7] ^= 0x01;
    assert_eq!(decode_snapshot(&flipped).unwrap_err().kind(), IoErrorKind::InvalidData);

    let truncated = &snap[..snap.len() - 1];
    assert!(decode_snapshot(truncated).is_err());

    let mut extended = snap.clone();
    extended.push(0);
    assert!(decode_snapshot(&extended).is_err());

    assert!(decode_snapshot(b"").is_err());
    assert!(decode_snapshot(b"not a snapshot at all").is_err());
}

#[test]
fn test_snapshot_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("buffer.bbuf");
    let b = counting_buffer(4096);

    fs::write(&path, encode_snapshot(&b)).unwrap();
    let bytes = fs::read(&path).unwrap();
    assert_eq!(decode_snapshot(&bytes).unwrap(), b);
}
