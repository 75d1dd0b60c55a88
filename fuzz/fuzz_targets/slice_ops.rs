// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for slice get/set/delete against a naive model.
//!
//! Every operation is applied to a `ByteBuffer` and to a plain `Vec<u8>`
//! driven by the reference walkers in `bytebuf::testing`. After each step
//! the two must agree byte for byte, and every failure must be one the model
//! also predicts.

#![no_main]

use arbitrary::Arbitrary;
use bytebuf::testing::{reference_assign, reference_delete, reference_slice};
use bytebuf::{ByteBuffer, ErrorKind, Slice};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Get {
        start: Option<i8>,
        stop: Option<i8>,
        step: Option<i8>,
    },
    Set {
        start: Option<i8>,
        stop: Option<i8>,
        step: Option<i8>,
        src: Vec<u8>,
    },
    SetFromSelf {
        start: Option<i8>,
        stop: Option<i8>,
    },
    Delete {
        start: Option<i8>,
        stop: Option<i8>,
        step: Option<i8>,
    },
    Insert {
        index: i8,
        byte: u8,
    },
    Pop,
}

#[derive(Debug, Arbitrary)]
struct Input {
    initial: Vec<u8>,
    ops: Vec<Op>,
}

fn widen(b: Option<i8>) -> Option<i64> {
    b.map(i64::from)
}

fuzz_target!(|input: Input| {
    let mut buf = ByteBuffer::from(input.initial.as_slice());
    let mut model = input.initial;

    for op in input.ops.into_iter().take(64) {
        match op {
            Op::Get { start, stop, step } => {
                let (start, stop, step) = (widen(start), widen(stop), widen(step));
                let got = buf.get_slice(Slice::new(start, stop, step));
                if step == Some(0) {
                    assert_eq!(got.unwrap_err().kind(), ErrorKind::ValueConstraint);
                } else {
                    assert_eq!(got.unwrap(), reference_slice(&model, start, stop, step));
                }
            }
            Op::Set { start, stop, step, src } => {
                let (start, stop, step) = (widen(start), widen(stop), widen(step));
                let got = buf.set_slice(Slice::new(start, stop, step), src.as_slice());
                if step == Some(0) {
                    assert!(got.is_err());
                    continue;
                }
                match reference_assign(&model, start, stop, step, &src) {
                    Some(next) => {
                        assert!(got.is_ok());
                        model = next;
                    }
                    None => assert_eq!(got.unwrap_err().kind(), ErrorKind::ValueConstraint),
                }
            }
            Op::SetFromSelf { start, stop } => {
                let (start, stop) = (widen(start), widen(stop));
                buf.set_slice_from_self(Slice::new(start, stop, None)).unwrap();
                let src = model.clone();
                model = reference_assign(&model, start, stop, None, &src).unwrap();
            }
            Op::Delete { start, stop, step } => {
                let (start, stop, step) = (widen(start), widen(stop), widen(step));
                let got = buf.del_slice(Slice::new(start, stop, step));
                if step == Some(0) {
                    assert!(got.is_err());
                } else {
                    got.unwrap();
                    model = reference_delete(&model, start, stop, step);
                }
            }
            Op::Insert { index, byte } => {
                buf.insert(index, byte).unwrap();
                let len = model.len() as i64;
                let mut at = i64::from(index);
                if at < 0 {
                    at += len;
                }
                model.insert(at.clamp(0, len) as usize, byte);
            }
            Op::Pop => match model.pop() {
                Some(last) => assert_eq!(buf.pop().unwrap(), last),
                None => assert_eq!(buf.pop().unwrap_err().kind(), ErrorKind::Exhausted),
            },
        }
        assert_eq!(buf, model);
        assert!(buf.len() <= buf.capacity());
    }
});
