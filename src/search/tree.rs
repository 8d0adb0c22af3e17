//! Search tree built during one ladder search
//!
//! Nodes live in a flat arena and point at their parent by index. A node's
//! children are pushed together, so they occupy one contiguous index range.

use crate::core::Word;
use std::borrow::Cow;
use std::ops::Range;

/// Index of a node in a [`SearchTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The start word of every tree
    pub const ROOT: Self = Self(0);

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One word reached by a search
#[derive(Debug, Clone)]
pub struct SearchNode<'d> {
    word: Cow<'d, Word>,
    parent: Option<NodeId>,
    depth: usize,
    children: Range<usize>,
}

impl<'d> SearchNode<'d> {
    #[inline]
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// The node that produced this one, `None` for the root
    #[inline]
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Number of single-character edits from the start word
    #[inline]
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Nodes this one produced when it was expanded
    pub fn children(&self) -> impl Iterator<Item = NodeId> {
        self.children.clone().map(NodeId)
    }
}

/// Arena of search nodes rooted at the start word
#[derive(Debug, Clone)]
pub struct SearchTree<'d> {
    nodes: Vec<SearchNode<'d>>,
}

impl<'d> SearchTree<'d> {
    /// Create a tree holding only the root
    #[must_use]
    pub fn new(root: Word) -> Self {
        Self {
            nodes: vec![SearchNode {
                word: Cow::Owned(root),
                parent: None,
                depth: 0,
                children: 0..0,
            }],
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false, the root is created with the tree
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&SearchNode<'d>> {
        self.nodes.get(id.0)
    }

    pub(crate) fn node(&self, id: NodeId) -> &SearchNode<'d> {
        &self.nodes[id.0]
    }

    /// Iterate nodes in creation order, which is breadth-first order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode<'d>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i), node))
    }

    pub(crate) fn push_child(&mut self, parent: NodeId, word: &'d Word) -> NodeId {
        let depth = self.nodes[parent.0].depth + 1;
        let id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode {
            word: Cow::Borrowed(word),
            parent: Some(parent),
            depth,
            children: 0..0,
        });
        id
    }

    pub(crate) fn set_children(&mut self, parent: NodeId, children: Range<usize>) {
        self.nodes[parent.0].children = children;
    }

    /// Words from the root down to `node`
    ///
    /// Returns an empty vector when `node` does not belong to this tree.
    #[must_use]
    pub fn path_to(&self, node: NodeId) -> Vec<String> {
        let Some(found) = self.get(node) else {
            tracing::warn!(node = node.0, "path requested for a node outside the tree");
            return Vec::new();
        };
        if found.word.is_empty() {
            tracing::warn!(node = node.0, "path requested for a node with no word");
            return Vec::new();
        }

        let mut path = Vec::with_capacity(found.depth + 1);
        let mut current = Some(node);
        // Parents are always created before their children, so the walk
        // strictly decreases the index and ends at the root.
        while let Some(id) = current {
            let step = &self.nodes[id.0];
            path.push(step.word.text().to_string());
            current = step.parent;
        }
        path.reverse();
        path
    }
}
