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

//! Byte classes used by the CommonMark grammar.
//!
//! All predicates are ASCII-only; bytes at or above 0x80 are never
//! whitespace, digits or punctuation.

/// Space, tab, line feed, vertical tab, form feed or carriage return.
#[inline]
pub fn is_space(c: u8) -> bool {
    (0x09..=0x0d).contains(&c) || c == b' '
}

#[inline]
pub fn is_space_or_tab(c: u8) -> bool {
    matches!(c, b' ' | b'\t')
}

#[inline]
pub fn is_line_end_char(c: u8) -> bool {
    matches!(c, b'\n' | b'\r')
}

#[inline]
pub fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

#[inline]
pub fn is_hex_digit(c: u8) -> bool {
    c.is_ascii_hexdigit()
}

/// Value of a single hex digit, either case.
#[inline]
pub fn hex_value(c: u8) -> Option<u32> {
    match c {
        b'0'..=b'9' => Some(u32::from(c - b'0')),
        b'a'..=b'f' => Some(u32::from(c - b'a' + 10)),
        b'A'..=b'F' => Some(u32::from(c - b'A' + 10)),
        _ => None,
    }
}

/// ASCII punctuation, the set of characters a backslash can escape.
#[inline]
pub fn is_punctuation(c: u8) -> bool {
    c.is_ascii_punctuation()
}
