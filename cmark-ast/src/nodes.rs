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

//! Node payloads and the nesting rules between node kinds.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The payload of a single node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeValue {
    /// The root of every document.
    #[default]
    Document,
    BlockQuote,
    /// A list. Contains only items.
    List(NodeList),
    /// A list item, carrying the same list metadata as its list.
    Item(NodeList),
    CodeBlock(NodeCodeBlock),
    HtmlBlock(NodeHtmlBlock),
    Paragraph,
    Heading(NodeHeading),
    ThematicBreak,

    // span-level values
    Text(String),
    SoftBreak,
    LineBreak,
    Code(String),
    HtmlInline(String),
    Emph,
    Strong,
    Strikethrough,
    Link(NodeLink),
    Image(NodeLink),
}

/// The kind of a node, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeKind {
    Document,
    BlockQuote,
    List,
    Item,
    CodeBlock,
    HtmlBlock,
    Paragraph,
    Heading,
    ThematicBreak,
    Text,
    SoftBreak,
    LineBreak,
    Code,
    HtmlInline,
    Emph,
    Strong,
    Strikethrough,
    Link,
    Image,
}

/// Destination and title of a link or image.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeLink {
    pub url: String,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeList {
    pub list_type: ListType,
    /// Columns of indentation before the list marker.
    pub marker_offset: usize,
    /// Columns from the start of the marker to the item's content.
    pub padding: usize,
    /// First number of an ordered list.
    pub start: usize,
    pub delimiter: ListDelimType,
    /// `-`, `+` or `*` for bullet lists.
    pub bullet_char: u8,
    /// Tight lists render their items without paragraph wrappers.
    pub tight: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ListType {
    #[default]
    Bullet,
    Ordered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ListDelimType {
    #[default]
    Period,
    Paren,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeCodeBlock {
    /// Fenced with backticks or tildes, as opposed to indented.
    pub fenced: bool,
    pub fence_char: u8,
    pub fence_length: usize,
    pub fence_offset: usize,
    pub info: String,
    pub literal: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeHeading {
    /// 1 through 6.
    pub level: u8,
    /// Underlined with `=` or `-` rather than introduced by `#`s.
    pub setext: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeHtmlBlock {
    /// Which of the seven HTML block start conditions opened this block.
    pub block_type: u8,
    pub literal: String,
}

/// What a node kind may hold as children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Children {
    Nothing,
    /// Any block except documents and list items.
    Blocks,
    /// List items only.
    Items,
    /// Any inline.
    Inlines,
}

#[derive(Debug, Clone, Copy)]
struct Shape {
    block: bool,
    accepts_lines: bool,
    contains_inlines: bool,
    children: Children,
}

const fn row(block: bool, accepts_lines: bool, contains_inlines: bool, children: Children) -> Shape {
    Shape {
        block,
        accepts_lines,
        contains_inlines,
        children,
    }
}

impl NodeKind {
    pub const ALL: [NodeKind; 19] = [
        NodeKind::Document,
        NodeKind::BlockQuote,
        NodeKind::List,
        NodeKind::Item,
        NodeKind::CodeBlock,
        NodeKind::HtmlBlock,
        NodeKind::Paragraph,
        NodeKind::Heading,
        NodeKind::ThematicBreak,
        NodeKind::Text,
        NodeKind::SoftBreak,
        NodeKind::LineBreak,
        NodeKind::Code,
        NodeKind::HtmlInline,
        NodeKind::Emph,
        NodeKind::Strong,
        NodeKind::Strikethrough,
        NodeKind::Link,
        NodeKind::Image,
    ];

    // Every structural property of a kind lives in this one table.
    const fn shape(self) -> Shape {
        use Children::*;
        match self {
            NodeKind::Document | NodeKind::BlockQuote | NodeKind::Item => {
                row(true, false, false, Blocks)
            }
            NodeKind::List => row(true, false, false, Items),
            NodeKind::CodeBlock => row(true, true, false, Nothing),
            NodeKind::HtmlBlock | NodeKind::ThematicBreak => row(true, false, false, Nothing),
            NodeKind::Paragraph | NodeKind::Heading => row(true, true, true, Inlines),
            NodeKind::Emph | NodeKind::Strong | NodeKind::Link | NodeKind::Image => {
                row(false, false, false, Inlines)
            }
            NodeKind::Text
            | NodeKind::SoftBreak
            | NodeKind::LineBreak
            | NodeKind::Code
            | NodeKind::HtmlInline
            | NodeKind::Strikethrough => row(false, false, false, Nothing),
        }
    }

    pub fn block(self) -> bool {
        self.shape().block
    }

    /// Kinds that collect raw source lines before their content is final.
    pub fn accepts_lines(self) -> bool {
        self.shape().accepts_lines
    }

    /// Kinds whose finished content is parsed again as inlines.
    pub fn contains_inlines(self) -> bool {
        self.shape().contains_inlines
    }

    /// Whether a node of this kind may directly hold a `child` node.
    pub fn can_contain(self, child: NodeKind) -> bool {
        match self.shape().children {
            Children::Nothing => false,
            Children::Blocks => {
                child.block() && !matches!(child, NodeKind::Document | NodeKind::Item)
            }
            Children::Items => child == NodeKind::Item,
            Children::Inlines => !child.block(),
        }
    }
}

impl NodeValue {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeValue::Document => NodeKind::Document,
            NodeValue::BlockQuote => NodeKind::BlockQuote,
            NodeValue::List(..) => NodeKind::List,
            NodeValue::Item(..) => NodeKind::Item,
            NodeValue::CodeBlock(..) => NodeKind::CodeBlock,
            NodeValue::HtmlBlock(..) => NodeKind::HtmlBlock,
            NodeValue::Paragraph => NodeKind::Paragraph,
            NodeValue::Heading(..) => NodeKind::Heading,
            NodeValue::ThematicBreak => NodeKind::ThematicBreak,
            NodeValue::Text(..) => NodeKind::Text,
            NodeValue::SoftBreak => NodeKind::SoftBreak,
            NodeValue::LineBreak => NodeKind::LineBreak,
            NodeValue::Code(..) => NodeKind::Code,
            NodeValue::HtmlInline(..) => NodeKind::HtmlInline,
            NodeValue::Emph => NodeKind::Emph,
            NodeValue::Strong => NodeKind::Strong,
            NodeValue::Strikethrough => NodeKind::Strikethrough,
            NodeValue::Link(..) => NodeKind::Link,
            NodeValue::Image(..) => NodeKind::Image,
        }
    }

    pub fn block(&self) -> bool {
        self.kind().block()
    }

    pub fn accepts_lines(&self) -> bool {
        self.kind().accepts_lines()
    }

    pub fn contains_inlines(&self) -> bool {
        self.kind().contains_inlines()
    }

    /// Literal text carried by text runs, code and raw HTML.
    pub fn literal(&self) -> Option<&str> {
        match self {
            NodeValue::Text(t) | NodeValue::Code(t) | NodeValue::HtmlInline(t) => Some(t),
            NodeValue::CodeBlock(ncb) => Some(&ncb.literal),
            NodeValue::HtmlBlock(nhb) => Some(&nhb.literal),
            _ => None,
        }
    }

    pub fn literal_mut(&mut self) -> Option<&mut String> {
        match self {
            NodeValue::Text(t) | NodeValue::Code(t) | NodeValue::HtmlInline(t) => Some(t),
            NodeValue::CodeBlock(ncb) => Some(&mut ncb.literal),
            NodeValue::HtmlBlock(nhb) => Some(&mut nhb.literal),
            _ => None,
        }
    }
}

/// Whether `parent` may directly hold `child`. Only the kinds matter.
pub fn can_contain_type(parent: &NodeValue, child: &NodeValue) -> bool {
    parent.kind().can_contain(child.kind())
}
