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

//! The per-node record block parsers fill in, and the bookkeeping they do
//! over a `Tree<Ast>` while a document is being built.

use std::mem;
use std::string::FromUtf8Error;

use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::nodes::{can_contain_type, NodeKind, NodeValue};
use crate::text;
use crate::text::ctype::is_line_end_char;
use crate::tree::{Tree, TreeIndex};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Text(#[from] text::Error),
    #[error("block content is not valid UTF-8")]
    Utf8(#[from] FromUtf8Error),
}

/// A node as the block parser sees it: the payload plus the raw source it
/// has collected and where that source came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ast {
    pub value: NodeValue,
    /// Raw lines gathered while the node is open and accepts lines.
    pub content: String,
    pub start_line: u32,
    pub start_column: usize,
    pub end_line: u32,
    pub end_column: usize,
    pub open: bool,
    pub last_line_blank: bool,
}

impl Ast {
    /// A freshly opened block starting at the given position.
    pub fn new(value: NodeValue, start_line: u32, start_column: usize) -> Ast {
        Ast {
            value,
            content: String::new(),
            start_line,
            start_column,
            end_line: start_line,
            end_column: 0,
            open: true,
            last_line_blank: false,
        }
    }

    pub fn add_line(&mut self, line: &str) -> Result<(), Error> {
        debug_assert!(
            self.value.accepts_lines(),
            "{:?} does not accept lines",
            self.value.kind()
        );
        self.content
            .try_reserve(line.len())
            .map_err(text::Error::from)?;
        self.content.push_str(line);
        Ok(())
    }
}

pub fn can_contain(tree: &Tree<Ast>, parent: TreeIndex, child: &NodeValue) -> bool {
    can_contain_type(&tree[parent].item.value, child)
}

pub fn last_child_is_open(tree: &Tree<Ast>, ix: TreeIndex) -> bool {
    tree.last_child(ix).map_or(false, |child| tree[child].item.open)
}

/// Whether `ix` ended on a blank line, looking through the last item of
/// nested lists.
pub fn ends_with_blank_line(tree: &Tree<Ast>, ix: TreeIndex) -> bool {
    let mut it = Some(ix);
    while let Some(cur) = it {
        let ast = &tree[cur].item;
        if ast.last_line_blank {
            return true;
        }
        it = match ast.value.kind() {
            NodeKind::List | NodeKind::Item => tree.last_child(cur),
            _ => None,
        };
    }
    false
}

/// The nearest block at or above `ix`.
pub fn containing_block(tree: &Tree<Ast>, ix: TreeIndex) -> Option<TreeIndex> {
    tree.ancestors(ix).find(|&a| tree[a].item.value.block())
}

/// A list is loose if a blank line separates two of its items, or two
/// blocks inside one item.
pub fn determine_list_tight(tree: &Tree<Ast>, list: TreeIndex) -> bool {
    for item in tree.children(list) {
        let has_next_item = tree.next_sibling(item).is_some();
        if tree[item].item.last_line_blank && has_next_item {
            return false;
        }

        for sub in tree.children(item) {
            let has_next_sub = tree.next_sibling(sub).is_some();
            if (has_next_item || has_next_sub) && ends_with_blank_line(tree, sub) {
                return false;
            }
        }
    }
    true
}

/// Closes `ix` and turns the raw content it gathered into its final
/// payload. Returns the parent, which becomes the parser's current block.
///
/// Code blocks get their literal (and info string, when fenced), HTML
/// blocks their literal, ATX headings lose their closing sequence, lists
/// learn whether they are tight, and paragraphs left with nothing but
/// blank content are dropped from the tree.
pub fn finalize(tree: &mut Tree<Ast>, ix: TreeIndex) -> Result<Option<TreeIndex>, Error> {
    let parent = tree.parent(ix);
    let tight = match tree[ix].item.value {
        NodeValue::List(..) => determine_list_tight(tree, ix),
        _ => false,
    };

    let ast = &mut tree[ix].item;
    ast.open = false;

    let mut drop_node = false;
    match ast.value {
        NodeValue::Paragraph => drop_node = text::is_blank(ast.content.as_bytes()),
        NodeValue::Heading(heading) if !heading.setext => {
            let chopped = text::chop_trailing_hashtags(text::trim(ast.content.as_bytes()));
            ast.content = String::from_utf8(chopped.to_vec())?;
        }
        NodeValue::CodeBlock(ref mut ncb) => {
            let content = mem::take(&mut ast.content);
            if ncb.fenced {
                let bytes = content.as_bytes();
                let eol = bytes
                    .iter()
                    .position(|&c| is_line_end_char(c))
                    .unwrap_or(bytes.len());
                let info = text::unescape(text::trim(&text::unescape_html(&bytes[..eol])?))?;
                ncb.info = String::from_utf8(info)?;

                let mut pos = eol;
                if bytes.get(pos) == Some(&b'\r') {
                    pos += 1;
                }
                if bytes.get(pos) == Some(&b'\n') {
                    pos += 1;
                }
                ncb.literal = content[pos..].to_owned();
            } else {
                let mut bytes = content.into_bytes();
                text::remove_trailing_blank_lines(&mut bytes);
                bytes.try_reserve(1).map_err(text::Error::from)?;
                bytes.push(b'\n');
                ncb.literal = String::from_utf8(bytes)?;
            }
        }
        NodeValue::HtmlBlock(ref mut nhb) => nhb.literal = mem::take(&mut ast.content),
        NodeValue::List(ref mut nl) => nl.tight = tight,
        _ => (),
    }

    if drop_node && parent.is_some() {
        trace!("dropping blank paragraph {:?}", ix);
        tree.detach(ix);
    }

    Ok(parent)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::nodes::{NodeCodeBlock, NodeHeading, NodeHtmlBlock, NodeList};

    fn document() -> (Tree<Ast>, TreeIndex) {
        let mut tree = Tree::new();
        let root = tree.create_node(Ast::new(NodeValue::Document, 1, 1));
        (tree, root)
    }

    fn open(tree: &mut Tree<Ast>, parent: TreeIndex, value: NodeValue) -> TreeIndex {
        let ix = tree.create_node(Ast::new(value, 1, 1));
        tree.append(parent, ix);
        ix
    }

    #[test]
    fn new_blocks_start_open() {
        let ast = Ast::new(NodeValue::Paragraph, 3, 5);
        assert!(ast.open);
        assert_eq!(3, ast.end_line);
        assert!(ast.content.is_empty());
    }

    #[test]
    fn indented_code_loses_trailing_blank_lines() {
        let (mut tree, root) = document();
        let code = open(&mut tree, root, NodeValue::CodeBlock(NodeCodeBlock::default()));
        tree[code].item.add_line("foo\n").unwrap();
        tree[code].item.add_line("\n").unwrap();
        tree[code].item.add_line("   \n").unwrap();

        assert_eq!(Some(root), finalize(&mut tree, code).unwrap());
        let ast = &tree[code].item;
        assert!(!ast.open);
        assert_eq!(Some("foo\n"), ast.value.literal());
        assert!(ast.content.is_empty());
    }

    #[test]
    fn fenced_code_takes_info_from_first_line() {
        let (mut tree, root) = document();
        let fenced = NodeCodeBlock {
            fenced: true,
            fence_char: b'`',
            fence_length: 3,
            ..NodeCodeBlock::default()
        };
        let code = open(&mut tree, root, NodeValue::CodeBlock(fenced));
        tree[code].item.add_line(" ru&#115;t\\! \r\n").unwrap();
        tree[code].item.add_line("fn main() {}\n").unwrap();

        finalize(&mut tree, code).unwrap();
        match &tree[code].item.value {
            NodeValue::CodeBlock(ncb) => {
                assert_eq!("rust!", ncb.info);
                assert_eq!("fn main() {}\n", ncb.literal);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn html_block_keeps_content_verbatim() {
        let (mut tree, root) = document();
        let html = open(&mut tree, root, NodeValue::HtmlBlock(NodeHtmlBlock::default()));
        tree[html].item.content.push_str("<div>\n&amp;\n");
        finalize(&mut tree, html).unwrap();
        assert_eq!(Some("<div>\n&amp;\n"), tree[html].item.value.literal());
    }

    #[test]
    fn atx_heading_closing_sequence_is_removed() {
        let (mut tree, root) = document();
        let heading = NodeValue::Heading(NodeHeading {
            level: 2,
            setext: false,
        });
        let h = open(&mut tree, root, heading);
        tree[h].item.add_line(" foo bar ##  ").unwrap();
        finalize(&mut tree, h).unwrap();
        assert_eq!("foo bar", tree[h].item.content);
    }

    #[test]
    fn blank_paragraph_is_dropped() {
        let (mut tree, root) = document();
        let keep = open(&mut tree, root, NodeValue::Paragraph);
        tree[keep].item.add_line("text\n").unwrap();
        let blank = open(&mut tree, root, NodeValue::Paragraph);
        tree[blank].item.add_line("  \n").unwrap();

        finalize(&mut tree, keep).unwrap();
        finalize(&mut tree, blank).unwrap();
        assert_eq!(vec![keep], tree.children(root).collect::<Vec<_>>());
        assert_eq!(None, tree.parent(blank));
    }

    #[test]
    fn list_tightness() {
        let (mut tree, root) = document();
        let list = open(&mut tree, root, NodeValue::List(NodeList::default()));
        let first = open(&mut tree, list, NodeValue::Item(NodeList::default()));
        open(&mut tree, first, NodeValue::Paragraph);
        let second = open(&mut tree, list, NodeValue::Item(NodeList::default()));
        open(&mut tree, second, NodeValue::Paragraph);

        finalize(&mut tree, list).unwrap();
        assert!(matches!(tree[list].item.value, NodeValue::List(NodeList { tight: true, .. })));

        tree[first].item.last_line_blank = true;
        finalize(&mut tree, list).unwrap();
        assert!(matches!(tree[list].item.value, NodeValue::List(NodeList { tight: false, .. })));
    }

    #[test]
    fn blank_line_seen_through_nested_lists() {
        let (mut tree, root) = document();
        let list = open(&mut tree, root, NodeValue::List(NodeList::default()));
        let item = open(&mut tree, list, NodeValue::Item(NodeList::default()));
        let para = open(&mut tree, item, NodeValue::Paragraph);
        assert!(!ends_with_blank_line(&tree, list));
        tree[item].item.last_line_blank = true;
        assert!(ends_with_blank_line(&tree, list));
        assert!(!ends_with_blank_line(&tree, para));
    }

    #[test]
    fn structure_queries() {
        let (mut tree, root) = document();
        let para = open(&mut tree, root, NodeValue::Paragraph);
        let emph = open(&mut tree, para, NodeValue::Emph);
        let text = open(&mut tree, emph, NodeValue::Text("hi".to_owned()));

        assert_eq!(Some(para), containing_block(&tree, text));
        assert_eq!(Some(root), containing_block(&tree, root));
        assert!(last_child_is_open(&tree, root));
        tree[para].item.open = false;
        assert!(!last_child_is_open(&tree, root));
        assert!(!last_child_is_open(&tree, text));

        assert!(can_contain(&tree, root, &NodeValue::Paragraph));
        assert!(can_contain(&tree, emph, &NodeValue::SoftBreak));
        assert!(!can_contain(&tree, para, &NodeValue::Paragraph));
    }
}
