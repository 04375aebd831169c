//! Independent checks of a tree's shape, recomputed from scratch by walking
//! every node. None of this runs during normal operation; trees configured
//! with `CHECK_INVARIANTS` call [`check`] after each mutation, and the tests
//! call it directly.

use std::cmp::max;

use crate::interface::NodeInterface;
use crate::node::NodeRef;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    /// `key` sits on the wrong side of an ancestor holding `bound`.
    OutOfOrder { key: i32, bound: i32 },
    /// Subtree heights under `key` differ by more than one.
    Unbalanced {
        key: i32,
        left_height: usize,
        right_height: usize,
    },
    /// The cached `(left, right)` heights under `key` disagree with the real ones.
    StaleHeight {
        key: i32,
        cached: (usize, usize),
        actual: (usize, usize),
    },
}

/// Walks the whole tree, returning the number of nodes or the first violation found.
pub fn check(root: Option<NodeRef<'_>>) -> Result<usize, Violation> {
    walk(root, None, None).map(|(_, count)| count)
}

// Returns (true height, node count) of the subtree.
fn walk(
    node: Option<NodeRef<'_>>,
    lower: Option<i32>,
    upper: Option<i32>,
) -> Result<(usize, usize), Violation> {
    let Some(node) = node else {
        return Ok((0, 0));
    };
    let key = node.data();
    if let Some(bound) = lower.filter(|&bound| key <= bound) {
        return Err(Violation::OutOfOrder { key, bound });
    }
    if let Some(bound) = upper.filter(|&bound| key >= bound) {
        return Err(Violation::OutOfOrder { key, bound });
    }

    let (left_height, left_count) = walk(node.left_child(), lower, Some(key))?;
    let (right_height, right_count) = walk(node.right_child(), Some(key), upper)?;

    let cached = (node.left_height(), node.right_height());
    if cached != (left_height, right_height) {
        return Err(Violation::StaleHeight {
            key,
            cached,
            actual: (left_height, right_height),
        });
    }
    if left_height.abs_diff(right_height) > 1 {
        return Err(Violation::Unbalanced {
            key,
            left_height,
            right_height,
        });
    }

    Ok((
        1 + max(left_height, right_height),
        1 + left_count + right_count,
    ))
}

/// Keys in ascending order, as seen through the node interface.
pub fn in_order<N: NodeInterface>(root: Option<N>) -> Vec<i32> {
    fn traverse<N: NodeInterface>(node: Option<N>, out: &mut Vec<i32>) {
        if let Some(node) = node {
            traverse(node.left_child(), out);
            out.push(node.data());
            traverse(node.right_child(), out);
        }
    }
    let mut keys = Vec::new();
    traverse(root, &mut keys);
    keys
}

/// Height of the subtree under `root` by full traversal, ignoring cached values.
pub fn true_height<N: NodeInterface>(root: Option<N>) -> usize {
    root.map_or(0, |node| {
        1 + max(
            true_height(node.left_child()),
            true_height(node.right_child()),
        )
    })
}
