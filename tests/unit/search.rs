// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search, count, membership, and affix tests.

use bytebuf::{BufferError, ByteView, ErrorKind, Slice, Value};
use regex::bytes::Regex;

use crate::common::{assert_kind, buf};

#[test]
fn test_find_and_rfind() {
    let b = buf(b"abracadabra");
    assert_eq!(b.find(&b"abra"[..]).unwrap(), Some(0));
    assert_eq!(b.rfind(&b"abra"[..]).unwrap(), Some(7));
    assert_eq!(b.find(&b"zzz"[..]).unwrap(), None);
    assert_eq!(b.find(b'c').unwrap(), Some(4));
    assert_eq!(b.rfind(b'a').unwrap(), Some(10));
}

#[test]
fn test_windowed_search() {
    let b = buf(b"abracadabra");
    assert_eq!(b.find_in(&b"a"[..], Slice::from_start(1)).unwrap(), Some(3));
    assert_eq!(b.find_in(&b"abra"[..], 1i64..10).unwrap(), None);
    assert_eq!(b.find_in(&b"abra"[..], 1i64..11).unwrap(), Some(7));
    assert_eq!(b.rfind_in(&b"abra"[..], Slice::to_stop(-1)).unwrap(), Some(0));
    assert_eq!(b.find_in(&b"a"[..], Slice::from_start(-1)).unwrap(), Some(10));
    assert_eq!(b.count_in(&b"a"[..], 1i64..-1).unwrap(), 3);
}

#[test]
fn test_empty_pattern_positions() {
    let b = buf(b"abc");
    assert_eq!(b.find(&b""[..]).unwrap(), Some(0));
    assert_eq!(b.rfind(&b""[..]).unwrap(), Some(3));
    assert_eq!(b.find_in(&b""[..], Slice::from_start(3)).unwrap(), Some(3));
    assert_eq!(b.find_in(&b""[..], Slice::from_start(4)).unwrap(), None);
    assert_eq!(b.count(&b""[..]).unwrap(), 4);
    assert_eq!(b.count_in(&b""[..], Slice::from_start(9)).unwrap(), 0);
}

#[test]
fn test_index_reports_not_found() {
    let b = buf(b"hello");
    assert_eq!(b.index(&b"l"[..]).unwrap(), 2);
    assert_eq!(b.rindex(&b"l"[..]).unwrap(), 3);
    assert_eq!(b.index_in(&b"l"[..], Slice::from_start(3)).unwrap(), 3);
    assert_kind(b.index(&b"z"[..]), ErrorKind::ValueConstraint);
    assert!(matches!(b.rindex_in(&b"h"[..], Slice::from_start(1)), Err(BufferError::NotFound { .. })));
}

#[test]
fn test_search_rejects_text_and_bad_bytes() {
    let b = buf(b"hello");
    assert_kind(b.find("l"), ErrorKind::TypeMismatch);
    assert_kind(b.count(1000), ErrorKind::ValueConstraint);
    assert_kind(b.contains("h"), ErrorKind::TypeMismatch);
    assert_kind(b.contains(Value::Float(104.0)), ErrorKind::TypeMismatch);
}

#[test]
fn test_contains() {
    let b = buf(b"hello");
    assert!(b.contains(b'e').unwrap());
    assert!(b.contains(&b"ell"[..]).unwrap());
    assert!(b.contains(&b""[..]).unwrap());
    assert!(!b.contains(b'z').unwrap());
    assert!(!b.contains(&b"hex"[..]).unwrap());
    assert_kind(b.contains(256), ErrorKind::ValueConstraint);
}

#[test]
fn test_count_is_non_overlapping() {
    let b = buf(b"aaaa");
    assert_eq!(b.count(&b"aa"[..]).unwrap(), 2);
    assert_eq!(b.count(b'a').unwrap(), 4);
    assert_eq!(buf(b"").count(&b"a"[..]).unwrap(), 0);
}

#[test]
fn test_affixes() {
    let b = buf(b"prefix-body-suffix");
    assert!(b.starts_with(&b"prefix"[..]).unwrap());
    assert!(b.ends_with(&b"suffix"[..]).unwrap());
    assert!(b.starts_with(&b"body"[..]).is_ok_and(|hit| !hit));
    assert!(b.starts_with_in(&b"body"[..], Slice::from_start(7)).unwrap());
    assert!(b.ends_with_in(&b"body"[..], 0i64..11).unwrap());
    assert!(b.starts_with(&b""[..]).unwrap());
    assert_kind(b.starts_with("prefix"), ErrorKind::TypeMismatch);
}

#[test]
fn test_view_search_matches_buffer() {
    let b = buf(b"one two one");
    let v = ByteView::from(&b);
    assert_eq!(v.find(&b"one"[..]).unwrap(), b.find(&b"one"[..]).unwrap());
    assert_eq!(v.count(&b"one"[..]).unwrap(), 2);
    assert!(v.contains(&b"two"[..]).unwrap());
    // a view can be the pattern too
    let needle = ByteView::from(&b"two"[..]);
    assert_eq!(b.find(&needle).unwrap(), Some(4));
}

#[test]
fn test_find_agrees_with_regex() {
    let hay = b"the quick brown fox jumps over the lazy dog; the end";
    let b = buf(hay);
    for needle in [&b"the"[..], &b"o"[..], &b"fox"[..], &b"dog;"[..], &b"e"[..], &b"xyz"[..]] {
        let re = Regex::new(&regex::escape(std::str::from_utf8(needle).unwrap())).unwrap();
        let first = re.find(hay).map(|m| m.start());
        let total = re.find_iter(hay).count();
        assert_eq!(b.find(needle).unwrap(), first, "find {:?}", needle);
        assert_eq!(b.count(needle).unwrap(), total, "count {:?}", needle);
    }
}
