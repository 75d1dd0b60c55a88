// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Byte-string transforms, hex, repr, and codec boundary.

use bytebuf::{ByteBuffer, CodecRegistry, ErrorKind, Value};

use crate::common::{assert_kind, buf, parts};

// ============================================================================
// REPLACE / SPLIT / JOIN
// ============================================================================

#[test]
fn test_mississippi() {
    let b = buf(b"mississippi");
    assert_eq!(b.replace(&b"i"[..], &b"a"[..]).unwrap(), b"massassappa");
    assert_eq!(b.replace_n(&b"ss"[..], &b"SS"[..], 1).unwrap(), b"miSSissippi");
    assert_eq!(
        parts(&b.split(&b"i"[..], None).unwrap()),
        vec![b"m".to_vec(), b"ss".to_vec(), b"ss".to_vec(), b"pp".to_vec(), b"".to_vec()]
    );
    assert_eq!(
        parts(&b.rsplit(&b"i"[..], Some(2)).unwrap()),
        vec![b"mississ".to_vec(), b"pp".to_vec(), b"".to_vec()]
    );
    // the source is never modified
    assert_eq!(b, b"mississippi");
}

#[test]
fn test_replace_empty_pattern() {
    let b = buf(b"abc");
    assert_eq!(b.replace(&b""[..], &b"-"[..]).unwrap(), b"-a-b-c-");
    assert_eq!(b.replace_n(&b""[..], &b"-"[..], 2).unwrap(), b"-a-bc");
    assert_eq!(b.replace(&b"x"[..], &b"y"[..]).unwrap(), b"abc");
    assert_kind(b.replace("a", &b"b"[..]), ErrorKind::TypeMismatch);
}

#[test]
fn test_whitespace_split() {
    let b = buf(b"  a b\t\x0bc \n");
    assert_eq!(parts(&b.split(Value::None, None).unwrap()), vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);
    assert_eq!(
        parts(&b.split(Value::None, Some(1)).unwrap()),
        vec![b"a".to_vec(), b"b\t\x0bc \n".to_vec()]
    );
    assert_eq!(
        parts(&b.rsplit(Value::None, Some(1)).unwrap()),
        vec![b"  a b".to_vec(), b"c".to_vec()]
    );
    assert!(buf(b" \t ").split(Value::None, None).unwrap().is_empty());
}

#[test]
fn test_split_edge_cases() {
    assert_kind(buf(b"abc").split(&b""[..], None), ErrorKind::ValueConstraint);
    assert_kind(buf(b"abc").rsplit(&b""[..], None), ErrorKind::ValueConstraint);
    assert_kind(buf(b"abc").split("b", None), ErrorKind::TypeMismatch);
    assert_eq!(parts(&buf(b"").split(&b","[..], None).unwrap()), vec![b"".to_vec()]);
    assert_eq!(
        parts(&buf(b",a,,").split(&b","[..], Some(0)).unwrap()),
        vec![b",a,,".to_vec()]
    );
}

#[test]
fn test_partition() {
    let b = buf(b"key=value=x");
    let (k, s, v) = b.partition(&b"="[..]).unwrap();
    assert_eq!((k, s, v), (buf(b"key"), buf(b"="), buf(b"value=x")));
    let (k, s, v) = b.rpartition(&b"="[..]).unwrap();
    assert_eq!((k, s, v), (buf(b"key=value"), buf(b"="), buf(b"x")));

    let (a, s, c) = b.partition(&b"#"[..]).unwrap();
    assert_eq!((a, s, c), (b.clone(), buf(b""), buf(b"")));
    let (a, s, c) = b.rpartition(&b"#"[..]).unwrap();
    assert_eq!((a, s, c), (buf(b""), buf(b""), b.clone()));

    assert_kind(b.partition(&b""[..]), ErrorKind::ValueConstraint);
}

#[test]
fn test_splitlines() {
    let b = buf(b"a\nb\r\nc\rd");
    assert_eq!(
        parts(&b.splitlines(false)),
        vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec(), b"d".to_vec()]
    );
    assert_eq!(
        parts(&b.splitlines(true)),
        vec![b"a\n".to_vec(), b"b\r\n".to_vec(), b"c\r".to_vec(), b"d".to_vec()]
    );
    assert!(buf(b"").splitlines(false).is_empty());
    assert_eq!(parts(&buf(b"\n\n").splitlines(false)), vec![b"".to_vec(), b"".to_vec()]);
}

#[test]
fn test_join() {
    let sep = buf(b", ");
    assert_eq!(sep.join([&b"a"[..], &b"b"[..], &b"c"[..]]).unwrap(), b"a, b, c");
    assert_eq!(sep.join(Vec::<&[u8]>::new()).unwrap(), b"");
    let items = [buf(b"x"), buf(b"y")];
    assert_eq!(sep.join(items.iter()).unwrap(), b"x, y");
    assert_kind(
        sep.join([Value::Bytes(b"a"), Value::Text("b")]),
        ErrorKind::TypeMismatch,
    );
}

// ============================================================================
// STRIP / TRANSLATE
// ============================================================================

#[test]
fn test_strip_family() {
    let b = buf(b" \t hi there \x0c\n");
    assert_eq!(b.strip(Value::None).unwrap(), b"hi there");
    assert_eq!(b.lstrip(Value::None).unwrap(), b"hi there \x0c\n");
    assert_eq!(b.rstrip(Value::None).unwrap(), b" \t hi there");

    let x = buf(b"xyhixyx");
    assert_eq!(x.strip(&b"xy"[..]).unwrap(), b"hi");
    assert_eq!(x.lstrip(&b"yx"[..]).unwrap(), b"hixyx");
    assert_eq!(x.rstrip(&b"x"[..]).unwrap(), b"xyhixy");
    assert_kind(x.strip("x"), ErrorKind::TypeMismatch);
}

#[test]
fn test_translate() {
    let table: Vec<u8> = (0..=255u8).map(|b| b.to_ascii_uppercase()).collect();
    let b = buf(b"hello, world");
    assert_eq!(b.translate(&table).unwrap(), b"HELLO, WORLD");
    assert_eq!(b.translate_deleting(&table, &b"lo"[..]).unwrap(), b"HE, WRD");
    assert_eq!(b.translate_deleting(Value::None, &b"l"[..]).unwrap(), b"heo, word");
    assert_kind(b.translate(&b"short"[..]), ErrorKind::ValueConstraint);
    assert_eq!(b, b"hello, world");
}

// ============================================================================
// LAYOUT / CASE
// ============================================================================

#[test]
fn test_padding() {
    let b = buf(b"abc");
    assert_eq!(b.ljust(6, b'.').unwrap(), b"abc...");
    assert_eq!(b.rjust(5, b' ').unwrap(), b"  abc");
    assert_eq!(b.center(6, b'*').unwrap(), b"*abc**");
    assert_eq!(b.center(7, b'*').unwrap(), b"**abc**");
    assert_eq!(b.center(2, b'*').unwrap(), b"abc");
    assert_eq!(buf(b"-42").zfill(5).unwrap(), b"-0042");
    assert_eq!(buf(b"+7").zfill(2).unwrap(), b"+7");
    assert_eq!(buf(b"42").zfill(4).unwrap(), b"0042");
    assert_eq!(buf(b"a\tbc\td").expandtabs(4).unwrap(), b"a   bc  d");
    assert_eq!(buf(b"ab\n\tc").expandtabs(8).unwrap(), b"ab\n        c");
}

#[test]
fn test_padding_width_too_large() {
    let b = buf(b"abc");
    assert_kind(b.ljust(usize::MAX, b' '), ErrorKind::ResourceExhausted);
    assert_kind(b.center(usize::MAX - 1, b' '), ErrorKind::ResourceExhausted);
    assert_kind(b.zfill(usize::MAX), ErrorKind::ResourceExhausted);
    assert_kind(buf(b"a\tb").expandtabs(usize::MAX), ErrorKind::ResourceExhausted);
    assert_eq!(b, b"abc");
}

#[test]
fn test_case_mapping() {
    let b = buf(b"hELLO wORLD 42");
    assert_eq!(b.lower(), b"hello world 42");
    assert_eq!(b.upper(), b"HELLO WORLD 42");
    assert_eq!(b.swapcase(), b"Hello World 42");
    assert_eq!(b.capitalize(), b"Hello world 42");
    assert_eq!(buf(b"they're bill's").title(), b"They'Re Bill'S");
    // non-ASCII bytes pass through untouched
    assert_eq!(buf(b"\xe9a").upper(), b"\xe9A");
}

#[test]
fn test_predicates() {
    assert!(buf(b"abc123").is_alnum());
    assert!(!buf(b"abc 123").is_alnum());
    assert!(buf(b"abc").is_alpha());
    assert!(!buf(b"").is_alpha());
    assert!(buf(b"0123").is_digit());
    assert!(buf(b" \x0b\t").is_space());
    assert!(!buf(b"").is_space());
    assert!(buf(b"hello 1").is_lower());
    assert!(buf(b"HELLO 1").is_upper());
    assert!(!buf(b"123").is_upper());
    assert!(buf(b"Hello World").is_title());
    assert!(!buf(b"Hello world").is_title());
}

// ============================================================================
// HEX / REPR
// ============================================================================

#[test]
fn test_hex() {
    let b = ByteBuffer::from_hex("1a2B30").unwrap();
    assert_eq!(b, ByteBuffer::from_values([0x1a, 0x2b, 0x30]).unwrap());
    assert_eq!(b.to_hex(), "1a2b30");
    assert_eq!(ByteBuffer::from_hex(" de ad  be ef ").unwrap(), [0xdeu8, 0xad, 0xbe, 0xef]);
    assert_kind(ByteBuffer::from_hex("1a b"), ErrorKind::ValueConstraint);
    assert_kind(ByteBuffer::from_hex("zz"), ErrorKind::ValueConstraint);
    assert_kind(ByteBuffer::from_hex(&b"1a"[..]), ErrorKind::TypeMismatch);
    assert_eq!(ByteBuffer::new().to_hex(), "");
}

#[test]
fn test_repr_and_display() {
    let b = buf(b"it's\n\x00");
    assert_eq!(b.repr(), r#"b"it's\n\x00""#);
    assert_eq!(b.to_string(), b.repr());
    assert_eq!(format!("{:?}", buf(b"a\\")), r"ByteBuffer(b'a\\')");
    assert_eq!(buf(b"\x7f\xff").repr(), r"b'\x7f\xff'");
}

// ============================================================================
// CODECS
// ============================================================================

#[test]
fn test_decode_error_modes() {
    let registry = CodecRegistry::with_builtins();
    let b = buf(b"a\xffb");
    assert_kind(b.decode("utf-8", None, &registry), ErrorKind::EncodingFailure);
    assert_eq!(b.decode("utf-8", Some("replace"), &registry).unwrap(), "a\u{fffd}b");
    assert_eq!(b.decode("utf-8", Some("ignore"), &registry).unwrap(), "ab");
    assert_eq!(b.decode("latin-1", None, &registry).unwrap(), "a\u{ff}b");
    assert_kind(b.decode("utf-8", Some("bogus"), &registry), ErrorKind::EncodingFailure);
    assert_kind(b.decode("ebcdic", None, &registry), ErrorKind::EncodingFailure);
}

#[test]
fn test_codec_aliases_and_round_trip() {
    let registry = CodecRegistry::with_builtins();
    let text = "naïve café";
    for codec in ["utf-8", "UTF8", "utf_16", "latin1"] {
        let b = ByteBuffer::from_text(text, codec, None, &registry).unwrap();
        assert_eq!(b.to_text(codec, &registry).unwrap(), text, "codec {}", codec);
    }
    let wide = ByteBuffer::from_text("hi", "utf-16", None, &registry).unwrap();
    assert_eq!(wide, [0xffu8, 0xfe, b'h', 0, b'i', 0]);
    assert_kind(
        ByteBuffer::from_text("café", "ascii", None, &registry),
        ErrorKind::EncodingFailure,
    );
    assert_eq!(
        ByteBuffer::from_text("café", "ascii", Some("replace"), &registry).unwrap(),
        b"caf?"
    );
}

#[test]
fn test_empty_registry_knows_nothing() {
    let registry = CodecRegistry::new();
    assert!(registry.is_empty());
    assert_kind(buf(b"abc").decode("utf-8", None, &registry), ErrorKind::EncodingFailure);
}
