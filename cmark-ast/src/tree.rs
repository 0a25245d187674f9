// Copyright 2018 Google LLC
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A Vec-based container for a doubly linked tree.
//!
//! Nodes live in one arena and refer to each other by [`TreeIndex`]. The
//! five links on every node (parent, both siblings, both ends of the child
//! list) never own anything; relinking only rewrites indices.

use std::num::NonZeroUsize;

use log::trace;

#[derive(Debug, Eq, PartialEq, Copy, Clone, PartialOrd, Ord, Hash)]
pub struct TreeIndex(NonZeroUsize);

impl TreeIndex {
    fn new(i: usize) -> Self {
        TreeIndex(NonZeroUsize::new(i).expect("tree index must be nonzero"))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

#[derive(Debug, Clone)]
pub struct Node<T> {
    parent: Option<TreeIndex>,
    previous_sibling: Option<TreeIndex>,
    next_sibling: Option<TreeIndex>,
    first_child: Option<TreeIndex>,
    last_child: Option<TreeIndex>,
    pub item: T,
}

impl<T> Node<T> {
    fn new(item: T) -> Self {
        Node {
            parent: None,
            previous_sibling: None,
            next_sibling: None,
            first_child: None,
            last_child: None,
            item,
        }
    }

    pub fn parent(&self) -> Option<TreeIndex> {
        self.parent
    }

    pub fn previous_sibling(&self) -> Option<TreeIndex> {
        self.previous_sibling
    }

    pub fn next_sibling(&self) -> Option<TreeIndex> {
        self.next_sibling
    }

    pub fn first_child(&self) -> Option<TreeIndex> {
        self.first_child
    }

    pub fn last_child(&self) -> Option<TreeIndex> {
        self.last_child
    }
}

/// One step of a document-order walk: entering a node, then leaving it once
/// all of its children have been visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeEdge {
    Start(TreeIndex),
    End(TreeIndex),
}

/// An arena of nodes linked into one or more trees.
#[derive(Clone)]
pub struct Tree<T> {
    nodes: Vec<Node<T>>,
}

impl<T: Default> Tree<T> {
    pub fn new() -> Tree<T> {
        Tree::with_capacity(0)
    }

    // Indices start at one, so we place a dummy value at index zero.
    // The alternative would be subtracting one from every TreeIndex
    // every time we convert it to usize to index our nodes.
    pub fn with_capacity(cap: usize) -> Tree<T> {
        let mut nodes = Vec::with_capacity(cap + 1);
        nodes.push(Node::new(<T as Default>::default()));
        Tree { nodes }
    }
}

impl<T: Default> Default for Tree<T> {
    fn default() -> Self {
        Tree::new()
    }
}

impl<T> Tree<T> {
    /// Create an isolated node. It has no parent until it is linked in.
    pub fn create_node(&mut self, item: T) -> TreeIndex {
        let this = self.nodes.len();
        self.nodes.push(Node::new(item));
        TreeIndex::new(this)
    }

    /// Number of nodes in the arena, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Returns true when there are no nodes in the tree, false otherwise.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Make `child` the last child of `parent`, detaching it from wherever
    /// it was first.
    pub fn append(&mut self, parent: TreeIndex, child: TreeIndex) {
        trace!("append {:?} to {:?}", child, parent);
        self.unlink(child);

        let last = self[parent].last_child;
        {
            let node = &mut self[child];
            node.parent = Some(parent);
            node.previous_sibling = last;
            node.next_sibling = None;
        }
        match last {
            Some(last) => self[last].next_sibling = Some(child),
            None => self[parent].first_child = Some(child),
        }
        self[parent].last_child = Some(child);
    }

    /// Make `child` the first child of `parent`.
    pub fn prepend(&mut self, parent: TreeIndex, child: TreeIndex) {
        trace!("prepend {:?} to {:?}", child, parent);
        self.unlink(child);

        let first = self[parent].first_child;
        {
            let node = &mut self[child];
            node.parent = Some(parent);
            node.previous_sibling = None;
            node.next_sibling = first;
        }
        match first {
            Some(first) => self[first].previous_sibling = Some(child),
            None => self[parent].last_child = Some(child),
        }
        self[parent].first_child = Some(child);
    }

    /// Link `new` in directly after `sibling`, under the same parent.
    ///
    /// # Panics
    ///
    /// Panics if `sibling` has no parent.
    pub fn insert_after(&mut self, sibling: TreeIndex, new: TreeIndex) {
        self.unlink(new);

        let parent = self.expect_parent(sibling);
        let next = self[sibling].next_sibling;
        {
            let node = &mut self[new];
            node.parent = Some(parent);
            node.previous_sibling = Some(sibling);
            node.next_sibling = next;
        }
        self[sibling].next_sibling = Some(new);
        match next {
            Some(next) => self[next].previous_sibling = Some(new),
            None => self[parent].last_child = Some(new),
        }
    }

    /// Link `new` in directly before `sibling`, under the same parent.
    ///
    /// # Panics
    ///
    /// Panics if `sibling` has no parent.
    pub fn insert_before(&mut self, sibling: TreeIndex, new: TreeIndex) {
        self.unlink(new);

        let parent = self.expect_parent(sibling);
        let previous = self[sibling].previous_sibling;
        {
            let node = &mut self[new];
            node.parent = Some(parent);
            node.previous_sibling = previous;
            node.next_sibling = Some(sibling);
        }
        self[sibling].previous_sibling = Some(new);
        match previous {
            Some(previous) => self[previous].next_sibling = Some(new),
            None => self[parent].first_child = Some(new),
        }
    }

    /// Remove `ix` from its parent's child list. The node keeps its own
    /// children and can be linked in again elsewhere.
    ///
    /// # Panics
    ///
    /// Panics if `ix` has no parent; detaching a root is a caller bug.
    pub fn detach(&mut self, ix: TreeIndex) {
        trace!("detach {:?}", ix);
        self.expect_parent(ix);
        self.unlink(ix);
    }

    fn expect_parent(&self, ix: TreeIndex) -> TreeIndex {
        match self[ix].parent {
            Some(parent) => parent,
            None => panic!("node {:?} has no parent", ix),
        }
    }

    // Relinks around `ix` if it is attached anywhere, then clears its own
    // parent and sibling links.
    fn unlink(&mut self, ix: TreeIndex) {
        let (parent, previous, next) = {
            let node = &self[ix];
            (node.parent, node.previous_sibling, node.next_sibling)
        };

        match previous {
            Some(previous) => self[previous].next_sibling = next,
            None => {
                if let Some(parent) = parent {
                    self[parent].first_child = next;
                }
            }
        }
        match next {
            Some(next) => self[next].previous_sibling = previous,
            None => {
                if let Some(parent) = parent {
                    self[parent].last_child = previous;
                }
            }
        }

        let node = &mut self[ix];
        node.parent = None;
        node.previous_sibling = None;
        node.next_sibling = None;
    }

    pub fn parent(&self, ix: TreeIndex) -> Option<TreeIndex> {
        self[ix].parent
    }

    pub fn first_child(&self, ix: TreeIndex) -> Option<TreeIndex> {
        self[ix].first_child
    }

    pub fn last_child(&self, ix: TreeIndex) -> Option<TreeIndex> {
        self[ix].last_child
    }

    pub fn next_sibling(&self, ix: TreeIndex) -> Option<TreeIndex> {
        self[ix].next_sibling
    }

    pub fn previous_sibling(&self, ix: TreeIndex) -> Option<TreeIndex> {
        self[ix].previous_sibling
    }

    /// Children of `ix`, first to last.
    pub fn children(&self, ix: TreeIndex) -> Siblings<'_, T> {
        Siblings {
            tree: self,
            cur: self[ix].first_child,
            forward: true,
        }
    }

    /// Children of `ix`, last to first.
    pub fn reverse_children(&self, ix: TreeIndex) -> Siblings<'_, T> {
        Siblings {
            tree: self,
            cur: self[ix].last_child,
            forward: false,
        }
    }

    /// `ix` itself followed by each of its ancestors up to the root.
    pub fn ancestors(&self, ix: TreeIndex) -> Ancestors<'_, T> {
        Ancestors {
            tree: self,
            cur: Some(ix),
        }
    }

    /// Enter and leave events for `root` and its whole subtree.
    pub fn traverse(&self, root: TreeIndex) -> Traverse<'_, T> {
        Traverse {
            tree: self,
            root,
            next: Some(NodeEdge::Start(root)),
        }
    }

    /// `root` and every node below it, in preorder.
    pub fn descendants(&self, root: TreeIndex) -> impl Iterator<Item = TreeIndex> + '_ {
        self.traverse(root).filter_map(|edge| match edge {
            NodeEdge::Start(ix) => Some(ix),
            NodeEdge::End(_) => None,
        })
    }
}

#[derive(Debug)]
pub struct Siblings<'a, T> {
    tree: &'a Tree<T>,
    cur: Option<TreeIndex>,
    forward: bool,
}

impl<'a, T> Iterator for Siblings<'a, T> {
    type Item = TreeIndex;

    fn next(&mut self) -> Option<TreeIndex> {
        let ix = self.cur?;
        let node = &self.tree[ix];
        self.cur = if self.forward {
            node.next_sibling
        } else {
            node.previous_sibling
        };
        Some(ix)
    }
}

#[derive(Debug)]
pub struct Ancestors<'a, T> {
    tree: &'a Tree<T>,
    cur: Option<TreeIndex>,
}

impl<'a, T> Iterator for Ancestors<'a, T> {
    type Item = TreeIndex;

    fn next(&mut self) -> Option<TreeIndex> {
        let ix = self.cur?;
        self.cur = self.tree[ix].parent;
        Some(ix)
    }
}

#[derive(Debug)]
pub struct Traverse<'a, T> {
    tree: &'a Tree<T>,
    root: TreeIndex,
    next: Option<NodeEdge>,
}

impl<'a, T> Iterator for Traverse<'a, T> {
    type Item = NodeEdge;

    fn next(&mut self) -> Option<NodeEdge> {
        let edge = self.next?;
        self.next = match edge {
            NodeEdge::Start(ix) => match self.tree[ix].first_child {
                Some(child) => Some(NodeEdge::Start(child)),
                None => Some(NodeEdge::End(ix)),
            },
            NodeEdge::End(ix) if ix == self.root => None,
            NodeEdge::End(ix) => match self.tree[ix].next_sibling {
                Some(sibling) => Some(NodeEdge::Start(sibling)),
                None => self.tree[ix].parent.map(NodeEdge::End),
            },
        };
        Some(edge)
    }
}

impl<T> std::fmt::Debug for Tree<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "Empty tree");
        }

        // every parentless node heads its own tree
        for root in (1..self.nodes.len()).map(TreeIndex::new) {
            if self[root].parent.is_some() {
                continue;
            }
            let mut indent = 0;
            for edge in self.traverse(root) {
                match edge {
                    NodeEdge::Start(ix) => {
                        for _ in 0..indent {
                            write!(f, "  ")?;
                        }
                        writeln!(f, "{:?}", &self[ix].item)?;
                        indent += 1;
                    }
                    NodeEdge::End(_) => indent -= 1,
                }
            }
        }
        Ok(())
    }
}

impl<T> std::ops::Index<TreeIndex> for Tree<T> {
    type Output = Node<T>;

    fn index(&self, ix: TreeIndex) -> &Self::Output {
        &self.nodes[ix.get()]
    }
}

impl<T> std::ops::IndexMut<TreeIndex> for Tree<T> {
    fn index_mut(&mut self, ix: TreeIndex) -> &mut Node<T> {
        &mut self.nodes[ix.get()]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn tree_with_children(n: usize) -> (Tree<usize>, TreeIndex, Vec<TreeIndex>) {
        let mut tree = Tree::new();
        let root = tree.create_node(0);
        let children = (1..=n)
            .map(|i| {
                let ix = tree.create_node(i);
                tree.append(root, ix);
                ix
            })
            .collect();
        (tree, root, children)
    }

    fn items(tree: &Tree<usize>, ixs: impl Iterator<Item = TreeIndex>) -> Vec<usize> {
        ixs.map(|ix| tree[ix].item).collect()
    }

    #[test]
    fn append_links_both_directions() {
        let (tree, root, children) = tree_with_children(3);
        assert_eq!(vec![1, 2, 3], items(&tree, tree.children(root)));
        assert_eq!(vec![3, 2, 1], items(&tree, tree.reverse_children(root)));
        assert_eq!(Some(children[0]), tree.first_child(root));
        assert_eq!(Some(children[2]), tree.last_child(root));
        assert_eq!(None, tree.previous_sibling(children[0]));
        assert_eq!(None, tree.next_sibling(children[2]));
        for &child in &children {
            assert_eq!(Some(root), tree.parent(child));
        }
    }

    #[test]
    fn detach_middle_child() {
        let (mut tree, root, children) = tree_with_children(3);
        tree.detach(children[1]);
        assert_eq!(vec![1, 3], items(&tree, tree.children(root)));
        assert_eq!(vec![3, 1], items(&tree, tree.reverse_children(root)));
        let detached = &tree[children[1]];
        assert_eq!(None, detached.parent());
        assert_eq!(None, detached.previous_sibling());
        assert_eq!(None, detached.next_sibling());
    }

    #[test]
    fn detach_only_child_empties_parent() {
        let (mut tree, root, children) = tree_with_children(1);
        tree.detach(children[0]);
        assert_eq!(None, tree.first_child(root));
        assert_eq!(None, tree.last_child(root));
    }

    #[test]
    fn detach_keeps_subtree() {
        let (mut tree, root, children) = tree_with_children(2);
        let grandchild = tree.create_node(10);
        tree.append(children[0], grandchild);
        tree.detach(children[0]);
        assert_eq!(vec![2], items(&tree, tree.children(root)));
        assert_eq!(vec![10], items(&tree, tree.children(children[0])));
        assert_eq!(Some(children[0]), tree.parent(grandchild));
    }

    #[test]
    #[should_panic]
    fn detach_root_panics() {
        let (mut tree, root, _) = tree_with_children(1);
        tree.detach(root);
    }

    #[test]
    fn append_moves_attached_node() {
        let (mut tree, root, children) = tree_with_children(3);
        tree.append(children[2], children[0]);
        assert_eq!(vec![2, 3], items(&tree, tree.children(root)));
        assert_eq!(vec![1], items(&tree, tree.children(children[2])));
    }

    #[test]
    fn prepend_and_insert() {
        let (mut tree, root, children) = tree_with_children(2);
        let a = tree.create_node(10);
        let b = tree.create_node(11);
        let c = tree.create_node(12);
        tree.prepend(root, a);
        tree.insert_after(children[1], b);
        tree.insert_before(children[1], c);
        assert_eq!(vec![10, 1, 12, 2, 11], items(&tree, tree.children(root)));
        assert_eq!(vec![11, 2, 12, 1, 10], items(&tree, tree.reverse_children(root)));
        assert_eq!(Some(b), tree.last_child(root));
        assert_eq!(Some(a), tree.first_child(root));
    }

    #[test]
    fn traverse_visits_in_document_order() {
        let (mut tree, root, children) = tree_with_children(2);
        let grandchild = tree.create_node(3);
        tree.append(children[0], grandchild);

        let edges: Vec<_> = tree.traverse(root).collect();
        assert_eq!(
            vec![
                NodeEdge::Start(root),
                NodeEdge::Start(children[0]),
                NodeEdge::Start(grandchild),
                NodeEdge::End(grandchild),
                NodeEdge::End(children[0]),
                NodeEdge::Start(children[1]),
                NodeEdge::End(children[1]),
                NodeEdge::End(root),
            ],
            edges
        );
        assert_eq!(vec![0, 1, 3, 2], items(&tree, tree.descendants(root)));
        assert_eq!(vec![3, 1, 0], items(&tree, tree.ancestors(grandchild)));
    }

    #[test]
    fn traverse_subtree_stops_at_its_root() {
        let (tree, _, children) = tree_with_children(2);
        let edges: Vec<_> = tree.traverse(children[0]).collect();
        assert_eq!(
            vec![NodeEdge::Start(children[0]), NodeEdge::End(children[0])],
            edges
        );
    }

    #[test]
    fn debug_prints_outline() {
        let (mut tree, _, children) = tree_with_children(2);
        let grandchild = tree.create_node(3);
        tree.append(children[1], grandchild);
        assert_eq!("0\n  1\n  2\n    3\n", format!("{:?}", tree));
        assert_eq!("Empty tree", format!("{:?}", Tree::<usize>::new()));
    }
}
