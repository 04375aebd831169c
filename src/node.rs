use std::cmp::max;
use std::ops::{Index, IndexMut};

use crate::interface::NodeInterface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NodeIdx(usize);

/// One stored key plus the cached heights of its two subtrees.
///
/// An absent child has height 0; a present child has height
/// `1 + max(child.left_height, child.right_height)`.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) value: i32,
    pub(crate) left_height: usize,
    pub(crate) right_height: usize,
    pub(crate) left: Option<NodeIdx>,
    pub(crate) right: Option<NodeIdx>,
}

impl Node {
    fn leaf(value: i32) -> Self {
        Node {
            value,
            left_height: 0,
            right_height: 0,
            left: None,
            right: None,
        }
    }

    /// Number of nodes on the longest path from here down to a leaf.
    pub(crate) fn height(&self) -> usize {
        1 + max(self.left_height, self.right_height)
    }

    pub(crate) fn is_balanced(&self) -> bool {
        self.left_height.abs_diff(self.right_height) <= 1
    }
}

/// Arena owning every node of a tree. Freed slots are recycled.
pub(crate) struct NodePool {
    nodes: Vec<Node>,
    free_list: Vec<NodeIdx>,
}

impl NodePool {
    pub(crate) fn new() -> Self {
        NodePool {
            nodes: Vec::new(),
            free_list: Vec::new(),
        }
    }

    pub(crate) fn alloc(&mut self, value: i32) -> NodeIdx {
        if let Some(idx) = self.free_list.pop() {
            self.nodes[idx.0] = Node::leaf(value);
            idx
        } else {
            let idx = NodeIdx(self.nodes.len());
            self.nodes.push(Node::leaf(value));
            idx
        }
    }

    pub(crate) fn free(&mut self, idx: NodeIdx) {
        self.free_list.push(idx);
    }

    /// Slots currently holding a node reachable from the tree.
    pub(crate) fn live(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    /// Cached height of the subtree in `idx`, 0 for an empty slot.
    pub(crate) fn height_of(&self, idx: Option<NodeIdx>) -> usize {
        idx.map_or(0, |i| self[i].height())
    }
}

impl Index<NodeIdx> for NodePool {
    type Output = Node;

    fn index(&self, idx: NodeIdx) -> &Node {
        &self.nodes[idx.0]
    }
}

impl IndexMut<NodeIdx> for NodePool {
    fn index_mut(&mut self, idx: NodeIdx) -> &mut Node {
        &mut self.nodes[idx.0]
    }
}

/// Read-only handle to a node inside a tree.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    pool: &'a NodePool,
    idx: NodeIdx,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(pool: &'a NodePool, idx: NodeIdx) -> Self {
        NodeRef { pool, idx }
    }

    fn node(&self) -> &'a Node {
        &self.pool[self.idx]
    }

    fn child(&self, idx: Option<NodeIdx>) -> Option<NodeRef<'a>> {
        idx.map(|idx| NodeRef::new(self.pool, idx))
    }

    pub fn data(&self) -> i32 {
        self.node().value
    }

    pub fn left_child(&self) -> Option<NodeRef<'a>> {
        self.child(self.node().left)
    }

    pub fn right_child(&self) -> Option<NodeRef<'a>> {
        self.child(self.node().right)
    }

    pub fn height(&self) -> usize {
        self.node().height()
    }

    /// Cached height of the left subtree, as maintained by the tree.
    pub fn left_height(&self) -> usize {
        self.node().left_height
    }

    /// Cached height of the right subtree, as maintained by the tree.
    pub fn right_height(&self) -> usize {
        self.node().right_height
    }
}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "NodeRef({} {}/{})",
            self.data(),
            self.left_height(),
            self.right_height()
        )
    }
}

impl<'a> NodeInterface for NodeRef<'a> {
    fn data(&self) -> i32 {
        NodeRef::data(self)
    }

    fn left_child(&self) -> Option<Self> {
        NodeRef::left_child(self)
    }

    fn right_child(&self) -> Option<Self> {
        NodeRef::right_child(self)
    }

    fn height(&self) -> usize {
        NodeRef::height(self)
    }
}
