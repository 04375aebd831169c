use std::cell::RefCell;
use std::cmp::Ordering;
use std::marker::PhantomData;

use crate::config::{ConfigT, DebugConfig, QuietConfig};
use crate::debug;
use crate::interface::AvlInterface;
use crate::node::{NodeIdx, NodePool, NodeRef};
use crate::verify;

/// Which rotation restores balance at an unbalanced node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    /// Single right rotation.
    LeftLeft = 0,
    /// Left rotation at the left child, then right rotation.
    LeftRight = 1,
    /// Right rotation at the right child, then left rotation.
    RightLeft = 2,
    /// Single left rotation.
    RightRight = 3,
}

/// AVL tree over unique `i32` keys.
///
/// Nodes live in an arena owned by the tree; each node is referenced by
/// exactly one parent slot (or the root slot). Every node caches the heights
/// of its two subtrees, and those caches are brought up to date on the way
/// back up from each insertion or deletion, rotating any node whose subtree
/// heights have drifted more than one apart.
pub struct Avl<Config: ConfigT> {
    pool: NodePool,
    root: Option<NodeIdx>,
    debug_writer: Option<RefCell<Box<dyn std::fmt::Write>>>,
    _config: PhantomData<Config>,
}

impl<Config: ConfigT> Avl<Config> {
    pub fn new() -> Self {
        Self::new_with_debug_writer::<String>(None)
    }

    pub fn new_with_debug_writer<Writer: std::fmt::Write + 'static>(
        debug_writer: Option<Writer>,
    ) -> Self {
        let debug_writer = match debug_writer {
            None => None,
            Some(w) => {
                let b: Box<dyn std::fmt::Write> = Box::new(w);
                Some(RefCell::new(b))
            }
        };
        Avl {
            pool: NodePool::new(),
            root: None,
            debug_writer,
            _config: PhantomData,
        }
    }

    pub fn root_node(&self) -> Option<NodeRef<'_>> {
        self.root.map(|idx| NodeRef::new(&self.pool, idx))
    }

    pub fn len(&self) -> usize {
        self.pool.live()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn contains(&self, value: i32) -> bool {
        let mut cur = self.root;
        while let Some(i) = cur {
            let node = &self.pool[i];
            cur = match value.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Inserts `value`, returning `false` and leaving the tree untouched if
    /// it is already present.
    pub fn add(&mut self, value: i32) -> bool {
        debug!(self.debug_writer, "add {}", value);
        let (root, added) = self.insert(self.root, value);
        self.root = Some(root);
        if !added {
            debug!(self.debug_writer, "{} already present", value);
        }
        self.check_invariants();
        added
    }

    fn insert(&mut self, t: Option<NodeIdx>, value: i32) -> (NodeIdx, bool) {
        let Some(t) = t else {
            return (self.pool.alloc(value), true);
        };
        match value.cmp(&self.pool[t].value) {
            Ordering::Equal => (t, false),
            Ordering::Greater => {
                let (right, added) = self.insert(self.pool[t].right, value);
                self.pool[t].right = Some(right);
                if !added {
                    return (t, false);
                }
                self.update_right_height(t);
                (self.rebalance(t), true)
            }
            Ordering::Less => {
                let (left, added) = self.insert(self.pool[t].left, value);
                self.pool[t].left = Some(left);
                if !added {
                    return (t, false);
                }
                self.update_left_height(t);
                (self.rebalance(t), true)
            }
        }
    }

    /// Removes `value`, returning `false` and leaving the tree untouched if
    /// it is absent.
    pub fn remove(&mut self, value: i32) -> bool {
        debug!(self.debug_writer, "remove {}", value);
        let (root, removed) = self.remove_from(self.root, value);
        self.root = root;
        if !removed {
            debug!(self.debug_writer, "{} not present", value);
        }
        self.check_invariants();
        removed
    }

    fn remove_from(&mut self, t: Option<NodeIdx>, value: i32) -> (Option<NodeIdx>, bool) {
        let Some(t) = t else {
            return (None, false);
        };
        match value.cmp(&self.pool[t].value) {
            Ordering::Less => {
                let (left, removed) = self.remove_from(self.pool[t].left, value);
                self.pool[t].left = left;
                if !removed {
                    return (Some(t), false);
                }
                self.update_left_height(t);
                self.update_right_height(t);
                (Some(self.rebalance(t)), true)
            }
            Ordering::Greater => {
                let (right, removed) = self.remove_from(self.pool[t].right, value);
                self.pool[t].right = right;
                if !removed {
                    return (Some(t), false);
                }
                self.update_left_height(t);
                self.update_right_height(t);
                (Some(self.rebalance(t)), true)
            }
            Ordering::Equal => {
                let node = &self.pool[t];
                match (node.left, node.right) {
                    (None, None) => {
                        self.pool.free(t);
                        (None, true)
                    }
                    (Some(child), None) | (None, Some(child)) => {
                        self.pool.free(t);
                        (Some(child), true)
                    }
                    (Some(left), Some(_)) => {
                        let predecessor = self.highest(left);
                        debug!(
                            self.debug_writer,
                            "replacing {} with predecessor {}", value, predecessor
                        );
                        let (left, _) = self.remove_from(Some(left), predecessor);
                        self.pool[t].left = left;
                        self.pool[t].value = predecessor;
                        // The right subtree kept its shape, so its cached height stands.
                        self.update_left_height(t);
                        (Some(self.rebalance(t)), true)
                    }
                }
            }
        }
    }

    /// Largest key in the subtree rooted at `t`.
    fn highest(&self, mut t: NodeIdx) -> i32 {
        while let Some(right) = self.pool[t].right {
            t = right;
        }
        self.pool[t].value
    }

    /// Drops every node, children before parents.
    pub fn clear(&mut self) {
        debug!(self.debug_writer, "clear");
        if let Some(root) = self.root.take() {
            self.clear_from(root);
        }
    }

    fn clear_from(&mut self, t: NodeIdx) {
        if let Some(left) = self.pool[t].left {
            self.clear_from(left);
        }
        if let Some(right) = self.pool[t].right {
            self.clear_from(right);
        }
        self.pool.free(t);
    }

    fn update_left_height(&mut self, t: NodeIdx) {
        self.pool[t].left_height = self.pool.height_of(self.pool[t].left);
    }

    fn update_right_height(&mut self, t: NodeIdx) {
        self.pool[t].right_height = self.pool.height_of(self.pool[t].right);
    }

    /// Rotates `t` if its subtree heights differ by more than one, returning
    /// the node now occupying its slot.
    fn rebalance(&mut self, t: NodeIdx) -> NodeIdx {
        let node = &self.pool[t];
        if node.is_balanced() {
            return t;
        }
        let condition = self.find_condition(t);
        debug!(
            self.debug_writer,
            "{} is unbalanced ({}/{}), rotating {:?}",
            node.value,
            node.left_height,
            node.right_height,
            condition
        );
        self.rotate(t, condition)
    }

    // Ties on the heavier child's own balance pick the single rotation.
    fn find_condition(&self, t: NodeIdx) -> Condition {
        let node = &self.pool[t];
        if node.left_height > node.right_height {
            let left = &self.pool[node.left.expect("left-heavy node has a left child")];
            if left.left_height >= left.right_height {
                Condition::LeftLeft
            } else {
                Condition::LeftRight
            }
        } else {
            let right = &self.pool[node.right.expect("right-heavy node has a right child")];
            if right.left_height > right.right_height {
                Condition::RightLeft
            } else {
                Condition::RightRight
            }
        }
    }

    fn rotate(&mut self, t: NodeIdx, condition: Condition) -> NodeIdx {
        match condition {
            Condition::LeftLeft => self.rotate_right(t),
            Condition::LeftRight => {
                let left = self.pool[t].left.expect("left-right rotation needs a left child");
                let left = self.rotate_left(left);
                self.pool[t].left = Some(left);
                self.rotate_right(t)
            }
            Condition::RightLeft => {
                let right = self.pool[t].right.expect("right-left rotation needs a right child");
                let right = self.rotate_right(right);
                self.pool[t].right = Some(right);
                self.rotate_left(t)
            }
            Condition::RightRight => self.rotate_left(t),
        }
    }

    fn rotate_left(&mut self, old_root: NodeIdx) -> NodeIdx {
        let new_root = self.pool[old_root]
            .right
            .expect("rotate_left needs a right child");
        self.pool[old_root].right = self.pool[new_root].left;
        self.pool[new_root].left = Some(old_root);
        self.update_right_height(old_root);
        self.update_left_height(old_root);
        self.update_left_height(new_root);
        new_root
    }

    fn rotate_right(&mut self, old_root: NodeIdx) -> NodeIdx {
        let new_root = self.pool[old_root]
            .left
            .expect("rotate_right needs a left child");
        self.pool[old_root].left = self.pool[new_root].right;
        self.pool[new_root].right = Some(old_root);
        self.update_right_height(old_root);
        self.update_left_height(old_root);
        self.update_right_height(new_root);
        new_root
    }

    fn check_invariants(&self) {
        if Config::CHECK_INVARIANTS {
            match verify::check(self.root_node()) {
                Ok(count) => assert_eq!(count, self.len(), "reachable nodes != live nodes"),
                Err(violation) => panic!("invariant violated: {:?}", violation),
            }
        }
    }
}

impl<Config: ConfigT> Default for Avl<Config> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Config: ConfigT> AvlInterface for Avl<Config> {
    type Node<'a>
        = NodeRef<'a>
    where
        Self: 'a;

    fn root_node(&self) -> Option<NodeRef<'_>> {
        Avl::root_node(self)
    }

    fn add(&mut self, data: i32) -> bool {
        Avl::add(self, data)
    }

    fn remove(&mut self, data: i32) -> bool {
        Avl::remove(self, data)
    }

    fn clear(&mut self) {
        Avl::clear(self)
    }
}

pub type AvlTree = Avl<QuietConfig>;
pub type AvlTreeDebug = Avl<DebugConfig>;
