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

//! A mutable document tree for [CommonMark](https://commonmark.org) and its
//! GitHub extensions, plus the text normalization that prepares content for
//! it.
//!
//! Nodes live in a [`Tree`] arena and are linked by index. Each node carries
//! a [`NodeValue`]; which values may nest inside which is answered by
//! [`can_contain_type`] and the other predicates on [`NodeKind`]. The tree
//! itself never enforces those rules: the block and inline parsers that
//! build a document consult them before they link nodes in.
//!
//! # Example
//! ```rust
//! use cmark_ast::{can_contain_type, NodeValue, Tree};
//!
//! let mut tree = Tree::new();
//! let root = tree.create_node(NodeValue::Document);
//! let para = tree.create_node(NodeValue::Paragraph);
//! let text = tree.create_node(NodeValue::Text("Hello".to_owned()));
//!
//! assert!(can_contain_type(&tree[root].item, &tree[para].item));
//! tree.append(root, para);
//! tree.append(para, text);
//!
//! assert_eq!(vec![text], tree.children(para).collect::<Vec<_>>());
//! assert!(!can_contain_type(&NodeValue::Paragraph, &NodeValue::Document));
//! ```
//!
//! Leaf content goes through [`text`] before it is stored:
//!
//! ```rust
//! use cmark_ast::text::{normalize_code, unescape_html};
//!
//! assert_eq!(b" qwe ", &normalize_code(b"  qwe  ").unwrap()[..]);
//! assert_eq!("&eacute\u{c9}".as_bytes(), &unescape_html(b"&eacute&Eacute;").unwrap()[..]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use cmark_ast_text as text;

pub mod ast;
mod nodes;
mod tree;

pub use crate::ast::{Ast, Error};
pub use crate::nodes::{
    can_contain_type, ListDelimType, ListType, NodeCodeBlock, NodeHeading, NodeHtmlBlock,
    NodeKind, NodeLink, NodeList, NodeValue,
};
pub use crate::tree::{Ancestors, Node, NodeEdge, Siblings, Traverse, Tree, TreeIndex};

bitflags::bitflags! {
    /// Option struct containing flags for enabling extra node kinds
    /// that are not part of core CommonMark.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct Options: u32 {
        const ENABLE_STRIKETHROUGH = 1 << 3;
    }
}

impl Options {
    /// Whether nodes of `kind` may appear in a document parsed with these
    /// options.
    pub fn permits(self, kind: NodeKind) -> bool {
        match kind {
            NodeKind::Strikethrough => self.contains(Options::ENABLE_STRIKETHROUGH),
            _ => true,
        }
    }
}
