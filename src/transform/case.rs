// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! ASCII case mapping and character-class predicates.

use super::is_space;

pub fn lower(data: &[u8]) -> Vec<u8> {
    data.to_ascii_lowercase()
}

pub fn upper(data: &[u8]) -> Vec<u8> {
    data.to_ascii_uppercase()
}

pub fn swapcase(data: &[u8]) -> Vec<u8> {
    data.iter()
        .map(|&b| {
            if b.is_ascii_lowercase() {
                b.to_ascii_uppercase()
            } else {
                b.to_ascii_lowercase()
            }
        })
        .collect()
}

/// First byte upper-cased, the rest lower-cased.
pub fn capitalize(data: &[u8]) -> Vec<u8> {
    let mut out = data.to_ascii_lowercase();
    if let Some(first) = out.first_mut() {
        first.make_ascii_uppercase();
    }
    out
}

/// Upper-case letters that follow an uncased byte, lower-case the rest.
pub fn title(data: &[u8]) -> Vec<u8> {
    let mut previous_cased = false;
    data.iter()
        .map(|&b| {
            let mapped = if previous_cased {
                b.to_ascii_lowercase()
            } else {
                b.to_ascii_uppercase()
            };
            previous_cased = b.is_ascii_alphabetic();
            mapped
        })
        .collect()
}

fn all_nonempty(data: &[u8], pred: impl Fn(u8) -> bool) -> bool {
    !data.is_empty() && data.iter().all(|&b| pred(b))
}

pub fn is_alnum(data: &[u8]) -> bool {
    all_nonempty(data, |b| b.is_ascii_alphanumeric())
}

pub fn is_alpha(data: &[u8]) -> bool {
    all_nonempty(data, |b| b.is_ascii_alphabetic())
}

pub fn is_digit(data: &[u8]) -> bool {
    all_nonempty(data, |b| b.is_ascii_digit())
}

pub fn is_space_only(data: &[u8]) -> bool {
    all_nonempty(data, is_space)
}

/// At least one lower-case letter and no upper-case ones.
pub fn is_lower(data: &[u8]) -> bool {
    data.iter().any(u8::is_ascii_lowercase) && !data.iter().any(u8::is_ascii_uppercase)
}

/// At least one upper-case letter and no lower-case ones.
pub fn is_upper(data: &[u8]) -> bool {
    data.iter().any(u8::is_ascii_uppercase) && !data.iter().any(u8::is_ascii_lowercase)
}

/// Upper-case letters only after uncased bytes, lower-case only after cased.
pub fn is_title(data: &[u8]) -> bool {
    let mut cased = false;
    let mut previous_cased = false;
    for &b in data {
        if b.is_ascii_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            cased = true;
        } else if b.is_ascii_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            cased = true;
        } else {
            previous_cased = false;
        }
    }
    cased
}
