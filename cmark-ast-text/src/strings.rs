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

//! Whitespace handling, escapes and link cleanup.

use memchr::{memchr, memchr2};
use unicase::UniCase;

use crate::ctype::{is_line_end_char, is_punctuation, is_space, is_space_or_tab};
use crate::entity::{unescape_html, unescape_html_into};
use crate::error::{extend, push, with_capacity, Result};

/// What kind of destination an autolink like `<...>` holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AutolinkKind {
    /// `<http://foo.bar/baz>`
    Uri,
    /// `<john@example.org>`
    Email,
}

/// A link reference label, compared case-insensitively.
pub type LinkLabel = UniCase<String>;

pub fn ltrim(s: &[u8]) -> &[u8] {
    let n = s.iter().take_while(|&&c| is_space(c)).count();
    &s[n..]
}

pub fn rtrim(s: &[u8]) -> &[u8] {
    let n = s.iter().rev().take_while(|&&c| is_space(c)).count();
    &s[..s.len() - n]
}

pub fn trim(s: &[u8]) -> &[u8] {
    rtrim(ltrim(s))
}

/// True when `s` holds nothing but spaces, tabs and line endings.
pub fn is_blank(s: &[u8]) -> bool {
    s.iter().all(|&c| is_space_or_tab(c) || is_line_end_char(c))
}

/// Strips the optional closing sequence of an ATX heading.
///
/// The run of trailing `#`s only counts as a closing sequence when a space
/// or tab precedes it, so `foo#` keeps its hash while `foo ##` does not.
pub fn chop_trailing_hashtags(line: &[u8]) -> &[u8] {
    let line = rtrim(line);
    let hashes = line.iter().rev().take_while(|&&c| c == b'#').count();
    let rest = &line[..line.len() - hashes];

    match rest.last() {
        Some(&c) if hashes > 0 && is_space_or_tab(c) => rtrim(rest),
        _ => line,
    }
}

/// Normalizes the contents of a code span.
///
/// Line endings become single spaces. If the result has a non-space
/// character and both starts and ends with a space, one space is removed
/// from each end.
pub fn normalize_code(code: &[u8]) -> Result<Vec<u8>> {
    let mut out = with_capacity(code.len())?;
    let mut contains_nonspace = false;

    for (i, &c) in code.iter().enumerate() {
        match c {
            b'\r' => {
                if code.get(i + 1) != Some(&b'\n') {
                    out.push(b' ');
                }
            }
            b'\n' => out.push(b' '),
            _ => {
                if c != b' ' {
                    contains_nonspace = true;
                }
                out.push(c);
            }
        }
    }

    if contains_nonspace && out.first() == Some(&b' ') && out.last() == Some(&b' ') {
        out.pop();
        out.remove(0);
    }

    Ok(out)
}

/// Drops every blank line at the end of `buf`, along with the line ending
/// that precedes them. A buffer of nothing but blank lines is emptied.
pub fn remove_trailing_blank_lines(buf: &mut Vec<u8>) {
    let last = match buf
        .iter()
        .rposition(|&c| !is_space_or_tab(c) && !is_line_end_char(c))
    {
        Some(ix) => ix,
        None => {
            buf.clear();
            return;
        }
    };

    if let Some(eol) = memchr2(b'\n', b'\r', &buf[last..]) {
        buf.truncate(last + eol);
    }
}

/// Removes backslash escapes: a backslash before ASCII punctuation is
/// dropped, every other backslash is kept.
pub fn unescape(text: &[u8]) -> Result<Vec<u8>> {
    let mut out = with_capacity(text.len())?;
    let mut i = 0;

    while let Some(x) = memchr(b'\\', &text[i..]) {
        let backslash = i + x;
        extend(&mut out, &text[i..backslash])?;
        match text.get(backslash + 1) {
            Some(&c) if is_punctuation(c) => {
                push(&mut out, c)?;
                i = backslash + 2;
            }
            _ => {
                push(&mut out, b'\\')?;
                i = backslash + 1;
            }
        }
    }
    extend(&mut out, &text[i..])?;

    Ok(out)
}

/// Produces the destination of an autolink from the text between `<` and `>`.
pub fn clean_autolink(url: &[u8], kind: AutolinkKind) -> Result<Vec<u8>> {
    let url = trim(url);
    if url.is_empty() {
        return Ok(Vec::new());
    }

    let mut out = with_capacity(url.len() + 7)?;
    if kind == AutolinkKind::Email {
        extend(&mut out, b"mailto:")?;
    }
    unescape_html_into(url, &mut out)?;

    Ok(out)
}

/// Cleans an inline link or reference definition destination.
pub fn clean_url(url: &[u8]) -> Result<Vec<u8>> {
    let url = trim(url);
    if url.is_empty() {
        return Ok(Vec::new());
    }

    let inner = match url {
        [b'<', inner @ .., b'>'] => inner,
        _ => url,
    };
    unescape(&unescape_html(inner)?)
}

/// Cleans a link title, removing its enclosing quotes or parentheses.
pub fn clean_title(title: &[u8]) -> Result<Vec<u8>> {
    let inner = match title {
        [b'"', inner @ .., b'"'] | [b'\'', inner @ .., b'\''] | [b'(', inner @ .., b')'] => inner,
        _ => title,
    };
    unescape(&unescape_html(inner)?)
}

/// Normalizes a link reference label for matching: surrounding whitespace
/// goes, inner whitespace runs collapse to a single space, and the result
/// compares with Unicode case folding.
pub fn normalize_label(label: &str) -> Result<LinkLabel> {
    let mut normalized = String::new();
    normalized.try_reserve(label.len())?;

    let mut in_whitespace = false;
    for c in label.trim().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                normalized.push(' ');
            }
            in_whitespace = true;
        } else {
            normalized.push(c);
            in_whitespace = false;
        }
    }

    Ok(UniCase::new(normalized))
}
