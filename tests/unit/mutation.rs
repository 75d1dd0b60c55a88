// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Mutators, concatenation, repetition, and capacity.

use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};

use bytebuf::{BufferError, ByteBuffer, ErrorKind, Value};

use crate::common::{assert_kind, buf, IntLike};

#[test]
fn test_append_and_extend() {
    let mut b = ByteBuffer::new();
    b.append(b'a').unwrap();
    let like = IntLike(98);
    b.append(Value::index(&like)).unwrap();
    b.extend(&b"cd"[..]).unwrap();
    b.extend_values([101, 102]).unwrap();
    assert_eq!(b, b"abcdef");

    assert_kind(b.append(256), ErrorKind::ValueConstraint);
    assert_kind(b.append("g"), ErrorKind::TypeMismatch);
    assert_kind(b.extend("gh"), ErrorKind::TypeMismatch);
    assert_kind(b.extend(7), ErrorKind::TypeMismatch);
    assert_kind(b.extend_values([103, -1]), ErrorKind::ValueConstraint);
    assert_eq!(b, b"abcdef");
}

#[test]
fn test_extend_from_self_doubles() {
    let mut b = buf(b"ab");
    b.extend_from_self().unwrap();
    b.extend_from_self().unwrap();
    assert_eq!(b, b"abababab");
}

#[test]
fn test_insert_clamps_out_of_range_positions() {
    let mut b = buf(b"bd");
    b.insert(1, b'c').unwrap();
    b.insert(-100, b'a').unwrap();
    b.insert(100, b'e').unwrap();
    b.insert(-1, b'!').unwrap();
    assert_eq!(b, b"abcd!e");
    assert_kind(b.insert(0, 1000), ErrorKind::ValueConstraint);
}

#[test]
fn test_pop_variants() {
    let mut b = buf(b"xyz");
    assert_eq!(b.pop().unwrap(), b'z');
    assert_eq!(b.pop_at(0).unwrap(), b'x');
    assert_kind(b.pop_at(5), ErrorKind::OutOfRange);
    assert_eq!(b.pop_at(-1).unwrap(), b'y');
    assert_eq!(b.pop().unwrap_err(), BufferError::EmptyPop);
    assert_kind(b.pop(), ErrorKind::Exhausted);
    assert_kind(b.pop_at(0), ErrorKind::Exhausted);
}

#[test]
fn test_remove_first_occurrence() {
    let mut b = buf(b"banana");
    b.remove(b'a').unwrap();
    assert_eq!(b, b"bnana");
    assert_eq!(b.remove(b'z').unwrap_err(), BufferError::ValueNotPresent { value: b'z' });
    assert_kind(b.remove(-5), ErrorKind::ValueConstraint);
}

#[test]
fn test_reverse_and_clear() {
    let mut b = buf(b"stressed");
    b.reverse();
    assert_eq!(b, b"desserts");
    b.clear();
    assert!(b.is_empty());
    assert_eq!(b.len(), 0);
}

// ============================================================================
// CONCATENATION AND REPETITION
// ============================================================================

#[test]
fn test_concat_leaves_operands_alone() {
    let a = buf(b"foo");
    let b = buf(b"bar");
    let joined = &a + &b;
    assert_eq!(joined, b"foobar");
    assert_eq!(a.concat(&b"!"[..]).unwrap(), b"foo!");
    assert_kind(a.concat("!"), ErrorKind::TypeMismatch);
    assert_eq!(a, b"foo");

    let mut c = a.clone();
    c += &b;
    c += &b"?"[..];
    assert_eq!(c, b"foobar?");
}

#[test]
fn test_repeat() {
    let b = buf(b"abc");
    assert_eq!(&b * 3, b"abcabcabc");
    assert_eq!(b.repeat(0).unwrap(), b"");
    assert_eq!(b.repeat(-4).unwrap(), b"");
    assert_eq!(ByteBuffer::new().repeat(1000).unwrap(), b"");

    let mut m = buf(b"xy");
    m *= 2;
    assert_eq!(m, b"xyxy");
    m.repeat_in_place(0).unwrap();
    assert!(m.is_empty());
}

#[test]
fn test_repeat_overflow_is_resource_exhaustion() {
    let b = buf(b"abc");
    assert_kind(b.repeat(i64::MAX), ErrorKind::ResourceExhausted);
    assert_kind(b.repeat(usize::MAX), ErrorKind::ResourceExhausted);
    let mut m = buf(b"abc");
    assert_kind(m.repeat_in_place(i64::MAX), ErrorKind::ResourceExhausted);
    assert_eq!(m, b"abc");
}

#[test]
#[should_panic]
fn test_repeat_operator_panics_on_overflow() {
    let b = buf(b"abc");
    let _ = &b * usize::MAX;
}

#[test]
fn test_operator_panic_points_at_caller() {
    thread_local!(static PANIC_FILE: RefCell<Option<String>> = RefCell::new(None));
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        PANIC_FILE.with(|f| *f.borrow_mut() = info.location().map(|l| l.file().to_string()));
        previous(info);
    }));

    let b = buf(b"abc");
    let result = panic::catch_unwind(AssertUnwindSafe(|| &b * usize::MAX));
    assert!(result.is_err());
    PANIC_FILE.with(|f| assert_eq!(f.borrow().as_deref(), Some(file!())));
}

// ============================================================================
// CAPACITY
// ============================================================================

#[test]
fn test_capacity_tracks_length() {
    let mut b = ByteBuffer::new();
    let mut reallocations = 0;
    let mut last = b.capacity();
    for i in 0..10_000u32 {
        b.append((i % 256) as u8).unwrap();
        assert!(b.capacity() >= b.len());
        if b.capacity() != last {
            reallocations += 1;
            last = b.capacity();
        }
    }
    // Geometric growth keeps the number of reallocations logarithmic.
    assert!(reallocations < 100, "{} reallocations", reallocations);

    b.del_slice(100i64..).unwrap();
    assert!(b.capacity() >= b.len());
    b.shrink_to_fit();
    assert_eq!(b.capacity(), b.len());
}

#[test]
fn test_io_round_trip() {
    use std::io::Write;

    let mut b = ByteBuffer::new();
    b.write_all(b"hello ").unwrap();
    write!(b, "{}", 42).unwrap();
    assert_eq!(b, b"hello 42");

    let mut out = Vec::new();
    b.write_to(&mut out).unwrap();
    assert_eq!(out, b"hello 42");

    let mut target = ByteBuffer::with_size(4).unwrap();
    let read = target.read_into(&mut &b"abcdefgh"[..]).unwrap();
    assert_eq!(read, 4);
    assert_eq!(target, b"abcd");
}
