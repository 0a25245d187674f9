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

use std::collections::TryReserveError;

/// The only way a text transform can fail.
///
/// Malformed markup is never an error: unmatched references and stray
/// backslashes are copied through literally.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("out of memory while building normalized text")]
    OutOfMemory(#[from] TryReserveError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Appends `bytes` to `out`, reporting allocation failure instead of aborting.
pub(crate) fn extend(out: &mut Vec<u8>, bytes: &[u8]) -> Result<()> {
    out.try_reserve(bytes.len())?;
    out.extend_from_slice(bytes);
    Ok(())
}

pub(crate) fn push(out: &mut Vec<u8>, b: u8) -> Result<()> {
    out.try_reserve(1)?;
    out.push(b);
    Ok(())
}

/// A fresh buffer sized for `cap` bytes of output.
pub(crate) fn with_capacity(cap: usize) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    out.try_reserve(cap)?;
    Ok(out)
}
