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

//! Text transforms applied to CommonMark content before it is stored in, or
//! rendered from, a document tree.
//!
//! Every function here is a standalone transform over bytes: trimming, blank
//! line detection, character reference decoding, backslash escape removal,
//! code span normalization and link destination cleanup. Functions that
//! build a new buffer return [`Result`], failing only when the allocator
//! refuses to grow the output.
//!
//! # Example
//! ```rust
//! use cmark_ast_text::{clean_autolink, unescape_html, AutolinkKind};
//!
//! assert_eq!(b"test", &unescape_html(b"&#116;&#101;&#115;&#116;").unwrap()[..]);
//!
//! let url = clean_autolink(b"  hello&#x40;world.example ", AutolinkKind::Email).unwrap();
//! assert_eq!(b"mailto:hello@world.example", &url[..]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod ctype;
pub mod entity;
mod error;
mod strings;

pub use crate::entity::{unescape_html, unescape_into};
pub use crate::error::{Error, Result};
pub use crate::strings::{
    chop_trailing_hashtags, clean_autolink, clean_title, clean_url, is_blank, ltrim,
    normalize_code, normalize_label, remove_trailing_blank_lines, rtrim, trim, unescape,
    AutolinkKind, LinkLabel,
};
