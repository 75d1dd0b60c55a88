// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Construction, element access, and slicing.

use bytebuf::{ByteBuffer, CodecRegistry, ErrorKind, Slice, Source, Value};

use crate::common::{assert_kind, buf, counting_buffer, IntLike};

// ============================================================================
// CONSTRUCTION
// ============================================================================

#[test]
fn test_construct_from_every_source() {
    let registry = CodecRegistry::with_builtins();

    let empty = ByteBuffer::construct(Source::Empty, &registry).unwrap();
    assert!(empty.is_empty());

    let sized = ByteBuffer::construct(Source::Value(Value::Int(4)), &registry).unwrap();
    assert_eq!(sized, [0u8; 4]);

    let copied = ByteBuffer::construct(Source::Value(Value::Bytes(b"xyz")), &registry).unwrap();
    assert_eq!(copied, b"xyz");

    let items = ByteBuffer::construct(Source::items([104, 105]), &registry).unwrap();
    assert_eq!(items, b"hi");

    let encoded = ByteBuffer::construct(Source::text("é", "utf-8", None), &registry).unwrap();
    assert_eq!(encoded, [0xc3u8, 0xa9]);
}

#[test]
fn test_construct_rejections() {
    let registry = CodecRegistry::with_builtins();
    assert_kind(
        ByteBuffer::construct(Source::Value(Value::Text("abc")), &registry),
        ErrorKind::TypeMismatch,
    );
    assert_kind(
        ByteBuffer::construct(Source::Value(Value::Float(1.5)), &registry),
        ErrorKind::TypeMismatch,
    );
    assert_kind(
        ByteBuffer::construct(Source::items([1, 256]), &registry),
        ErrorKind::ValueConstraint,
    );
    assert_kind(
        ByteBuffer::construct(
            Source::Encoded {
                value: Value::Text("abc"),
                codec: None,
                errors: None,
            },
            &registry,
        ),
        ErrorKind::TypeMismatch,
    );
    assert_kind(
        ByteBuffer::construct(Source::text("abc", "no-such-codec", None), &registry),
        ErrorKind::EncodingFailure,
    );
}

#[test]
fn test_with_size_goes_through_index_protocol() {
    let size = IntLike(3);
    assert_eq!(ByteBuffer::with_size(Value::index(&size)).unwrap(), [0u8; 3]);
    assert_eq!(ByteBuffer::with_size(0).unwrap().len(), 0);
    assert_kind(ByteBuffer::with_size(-1), ErrorKind::ValueConstraint);
    assert_kind(ByteBuffer::with_size("3"), ErrorKind::TypeMismatch);
}

#[test]
fn test_first_bad_element_decides_error() {
    assert_kind(
        ByteBuffer::from_values([Value::Int(1), Value::Text("x"), Value::Int(999)]),
        ErrorKind::TypeMismatch,
    );
    assert_kind(
        ByteBuffer::from_values([Value::Int(1), Value::Int(999), Value::Text("x")]),
        ErrorKind::ValueConstraint,
    );
}

#[test]
fn test_copy_never_shares_storage() {
    let mut source = vec![1u8, 2, 3];
    let copy = ByteBuffer::from(source.as_slice());
    source[0] = 9;
    assert_eq!(copy, [1u8, 2, 3]);
}

// ============================================================================
// ELEMENT ACCESS
// ============================================================================

#[test]
fn test_set_by_positive_and_negative_index() {
    let mut b = ByteBuffer::from_values([1, 2, 3]).unwrap();
    b.set(1, 100).unwrap();
    assert_eq!(b, [1u8, 100, 3]);
    b.set(-1, 200).unwrap();
    assert_eq!(b, [1u8, 100, 200]);
}

#[test]
fn test_index_errors() {
    let mut b = buf(b"abc");
    assert_eq!(b.get(-3).unwrap(), b'a');
    assert_kind(b.get(3), ErrorKind::OutOfRange);
    assert_kind(b.get(-4), ErrorKind::OutOfRange);
    assert_kind(b.get(1.0), ErrorKind::TypeMismatch);
    assert_kind(b.set(0, 256), ErrorKind::ValueConstraint);
    assert_kind(b.set(0, -1), ErrorKind::ValueConstraint);
    assert_kind(b.delete(5), ErrorKind::OutOfRange);
    assert_eq!(b, b"abc");
}

#[test]
fn test_index_like_operands() {
    let mut b = buf(b"abcd");
    let at = IntLike(-2);
    assert_eq!(b.get(Value::index(&at)).unwrap(), b'c');
    b.delete(Value::index(&at)).unwrap();
    assert_eq!(b, b"abd");
}

// ============================================================================
// SLICING
// ============================================================================

#[test]
fn test_get_slice_directions() {
    let b = buf(b"0123456789");
    assert_eq!(b.get_slice(2i64..5).unwrap(), b"234");
    assert_eq!(b.get_slice(Slice::stepped(-1)).unwrap(), b"9876543210");
    assert_eq!(b.get_slice(Slice::new(Some(8), Some(1), Some(-3))).unwrap(), b"852");
    assert_eq!(b.get_slice(Slice::new(Some(-100), Some(100), Some(4))).unwrap(), b"048");
    assert_eq!(b.get_slice(5i64..2).unwrap(), b"");
    assert_kind(b.get_slice(Slice::stepped(0)), ErrorKind::ValueConstraint);
}

#[test]
fn test_slice_result_is_independent() {
    let b = buf(b"abc");
    let mut part = b.get_slice(..).unwrap();
    part.set(0, b'z').unwrap();
    assert_eq!(b, b"abc");
}

#[test]
fn test_contiguous_assignment_resizes() {
    let mut b = buf(b"hello world");
    b.set_slice(0i64..5, &b"bye"[..]).unwrap();
    assert_eq!(b, b"bye world");
    b.set_slice(3i64.., &b""[..]).unwrap();
    assert_eq!(b, b"bye");
    b.set_slice(10i64..20, &b"!"[..]).unwrap();
    assert_eq!(b, b"bye!");
    // stop before start inserts at start
    b.set_slice(2i64..0, &b"--"[..]).unwrap();
    assert_eq!(b, b"by--e!");
}

#[test]
fn test_extended_assignment_requires_exact_length() {
    let mut b = buf(b"abcdef");
    b.set_slice(Slice::stepped(2), &b"XYZ"[..]).unwrap();
    assert_eq!(b, b"XbYdZf");

    let err = b.set_slice(Slice::stepped(2), &b"XY"[..]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueConstraint);
    assert!(err.to_string().contains("size 2"), "{}", err);
    assert_eq!(b, b"XbYdZf");

    b.set_slice_values(Slice::stepped(-3), [49, 50]).unwrap();
    assert_eq!(b, b"Xb2dZ1");
}

#[test]
fn test_slice_assignment_rejects_text() {
    let mut b = buf(b"abc");
    assert_kind(b.set_slice(0i64..1, "z"), ErrorKind::TypeMismatch);
    assert_kind(b.set_slice_values(0i64..1, [300]), ErrorKind::ValueConstraint);
    assert_eq!(b, b"abc");
}

#[test]
fn test_self_assignment_snapshots_first() {
    let mut b = counting_buffer(256);
    b.set_slice_from_self(8i64..).unwrap();
    assert_eq!(b.len(), 264);
    let expected: Vec<u8> = (0..8u8).chain(0..=255u8).collect();
    assert_eq!(b, expected);
}

#[test]
fn test_del_slice() {
    let mut b = buf(b"0123456789");
    b.del_slice(Slice::new(Some(1), None, Some(3))).unwrap();
    assert_eq!(b, b"0235689");
    b.del_slice(Slice::stepped(-2)).unwrap();
    assert_eq!(b, b"258");
    b.del_slice(..).unwrap();
    assert!(b.is_empty());
}
