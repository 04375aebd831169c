/// Read access to a single node of a tree.
pub trait NodeInterface: Sized {
    /// The key stored in this node.
    fn data(&self) -> i32;
    /// The left child, or `None` if the left subtree is empty.
    fn left_child(&self) -> Option<Self>;
    /// The right child, or `None` if the right subtree is empty.
    fn right_child(&self) -> Option<Self>;
    /// Number of nodes on the longest path from this node down to a leaf.
    fn height(&self) -> usize;
}

/// A set of unique `i32` keys kept height-balanced across mutations.
pub trait AvlInterface {
    type Node<'a>: NodeInterface
    where
        Self: 'a;

    /// The root node, or `None` for an empty tree.
    fn root_node(&self) -> Option<Self::Node<'_>>;

    /// Inserts `data` and rebalances. Returns `false` if it was already present.
    fn add(&mut self, data: i32) -> bool;

    /// Removes `data` and rebalances. Returns `false` if it was not present.
    fn remove(&mut self, data: i32) -> bool;

    /// Removes every node, leaving an empty tree.
    fn clear(&mut self);
}
