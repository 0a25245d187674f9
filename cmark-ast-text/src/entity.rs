// Copyright 2015 Google Inc. All rights reserved.
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! Character reference decoding.
//!
//! Named references are resolved against the full HTML5 entity set from the
//! `entities` crate; numeric references are decoded directly.

use std::collections::HashMap;

use entities::ENTITIES;
use log::debug;
use memchr::memchr;
use once_cell::sync::Lazy;

use crate::ctype::{hex_value, is_digit};
use crate::error::{extend, push, with_capacity, Result};

/// Shortest entity name worth looking up, not counting `&` and `;`.
pub const ENTITY_MIN_LENGTH: usize = 2;
/// How far past the `&` we search for the terminating `;`.
pub const ENTITY_MAX_LENGTH: usize = 32;

const MAX_NUMERIC_DIGITS: usize = 8;
const CODEPOINT_CAP: u32 = 0x11_0000;

static ENTITY_MAP: Lazy<HashMap<&'static [u8], &'static str>> = Lazy::new(|| {
    ENTITIES
        .iter()
        .map(|e| (e.entity.as_bytes(), e.characters))
        .collect()
});

/// Looks up a named character reference. The key must be given in full,
/// leading `&` and trailing `;` included.
pub fn lookup(key: &[u8]) -> Option<&'static str> {
    ENTITY_MAP.get(key).copied()
}

/// Decodes the character reference at the start of `text`, which is the
/// input directly following an `&` the caller has already consumed.
///
/// On a match the replacement is appended to `out` and the number of bytes
/// of `text` consumed (terminating `;` included) is returned. `Ok(None)`
/// means there is no reference here; `out` is left untouched and the caller
/// should emit the `&` literally.
pub fn unescape_into(text: &[u8], out: &mut Vec<u8>) -> Result<Option<usize>> {
    if text.first() == Some(&b'#') {
        unescape_numeric(text, out)
    } else {
        unescape_named(text, out)
    }
}

fn unescape_numeric(text: &[u8], out: &mut Vec<u8>) -> Result<Option<usize>> {
    let (radix, start) = match text.get(1) {
        Some(b'x') | Some(b'X') => (16, 2),
        _ => (10, 1),
    };

    let mut codepoint: u32 = 0;
    let mut i = start;
    while let Some(digit) = text.get(i).and_then(|&c| digit_value(c, radix)) {
        codepoint = (codepoint * radix + digit).min(CODEPOINT_CAP);
        i += 1;
    }

    let num_digits = i - start;
    if !(1..=MAX_NUMERIC_DIGITS).contains(&num_digits) || text.get(i) != Some(&b';') {
        return Ok(None);
    }

    let c = match char::from_u32(codepoint) {
        Some(c) if codepoint != 0 => c,
        _ => {
            debug!("invalid codepoint {:#x} in numeric reference", codepoint);
            char::REPLACEMENT_CHARACTER
        }
    };
    let mut buf = [0u8; 4];
    extend(out, c.encode_utf8(&mut buf).as_bytes())?;
    Ok(Some(i + 1))
}

fn digit_value(c: u8, radix: u32) -> Option<u32> {
    if radix == 16 {
        hex_value(c)
    } else if is_digit(c) {
        Some(u32::from(c - b'0'))
    } else {
        None
    }
}

fn unescape_named(text: &[u8], out: &mut Vec<u8>) -> Result<Option<usize>> {
    let size = text.len().min(ENTITY_MAX_LENGTH);
    let mut key = [0u8; ENTITY_MAX_LENGTH + 2];
    key[0] = b'&';

    for i in ENTITY_MIN_LENGTH..size {
        match text[i] {
            // entity names never contain spaces
            b' ' => return Ok(None),
            b';' => {
                key[1..=i].copy_from_slice(&text[..i]);
                key[i + 1] = b';';
                if let Some(characters) = lookup(&key[..i + 2]) {
                    extend(out, characters.as_bytes())?;
                    return Ok(Some(i + 1));
                }
            }
            _ => (),
        }
    }
    Ok(None)
}

/// Resolves every character reference in `src`. Anything that does not
/// decode is copied through unchanged.
pub fn unescape_html(src: &[u8]) -> Result<Vec<u8>> {
    let mut out = with_capacity(src.len())?;
    unescape_html_into(src, &mut out)?;
    Ok(out)
}

pub(crate) fn unescape_html_into(src: &[u8], out: &mut Vec<u8>) -> Result<()> {
    let mut i = 0;

    while i < src.len() {
        let amp = memchr(b'&', &src[i..]).map_or(src.len(), |x| i + x);
        extend(out, &src[i..amp])?;
        if amp == src.len() {
            break;
        }

        i = amp + 1;
        match unescape_into(&src[i..], out)? {
            Some(consumed) => i += consumed,
            None => push(out, b'&')?,
        }
    }

    Ok(())
}
