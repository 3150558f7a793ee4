//! Node-level operations: height and balance computation, rotations, and the
//! budgeted rebalancing procedure.
//!
//! Rotations are pure structural transformations that move ownership between
//! child slots. Given a tree that satisfies the BST property everywhere, they
//! cannot fail, so nothing in this module returns a `Result`.

use crate::types::{Link, Node};

impl<K> Node<K> {
    /// Creates a new leaf node holding `key`.
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// Returns true if this node has no children.
    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Balance factor: height(left) - height(right).
    ///
    /// Positive means left-heavy, negative means right-heavy.
    pub(crate) fn balance_factor(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }

    /// Smallest key in this subtree (the in-order leftmost key).
    pub(crate) fn min_key(&self) -> &K {
        match self.left.as_deref() {
            Some(left) => left.min_key(),
            None => &self.key,
        }
    }

    /// Largest key in this subtree (the in-order rightmost key).
    pub(crate) fn max_key(&self) -> &K {
        match self.right.as_deref() {
            Some(right) => right.max_key(),
            None => &self.key,
        }
    }
}

/// Height of a subtree, computed by full recursive descent.
///
/// An absent node has height -1, so a single-leaf tree has height 0. Heights
/// are not cached per node; every call walks the whole subtree.
pub(crate) fn height<K>(link: &Link<K>) -> i32 {
    match link.as_deref() {
        Some(node) => 1 + height(&node.left).max(height(&node.right)),
        None => -1,
    }
}

// ============================================================================
// ROTATIONS
// ============================================================================

/// Single left rotation: promote the right child over `node`, reattaching the
/// child's left subtree as `node`'s new right subtree.
fn rotate_left<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    match node.right.take() {
        Some(mut pivot) => {
            node.right = pivot.left.take();
            pivot.left = Some(node);
            pivot
        }
        None => node,
    }
}

/// Single right rotation, mirror of `rotate_left`.
fn rotate_right<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    match node.left.take() {
        Some(mut pivot) => {
            node.left = pivot.right.take();
            pivot.right = Some(node);
            pivot
        }
        None => node,
    }
}

/// Right-left double rotation: rotate the right child right, then `node` left.
fn rotate_right_left<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    node.right = node.right.take().map(rotate_right);
    rotate_left(node)
}

/// Left-right double rotation: rotate the left child left, then `node` right.
fn rotate_left_right<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    node.left = node.left.take().map(rotate_left);
    rotate_right(node)
}

// ============================================================================
// BUDGETED REBALANCING
// ============================================================================

/// Restore the AVL-G balance invariant at `node`, tolerating an imbalance of
/// up to `budget`.
///
/// Applied bottom-up at every ancestor touched by an insert or delete, with
/// `budget` starting at the tree's configured G. When a heavy child leans the
/// opposite way and its inner grandchild is more than a leaf, the child is
/// first rebalanced recursively with `budget - 1` before the single rotation
/// at `node`. That budget reduction lets a higher-G tree correct a deeply
/// unbalanced subtree with fewer rotations than repeated single rotations
/// would need, and is the defining difference from classic AVL rebalancing.
///
/// Ties prefer the single rotation: a heavy child with balance factor 0 is
/// corrected by one rotation, never a double.
pub(crate) fn rebalance<K>(mut node: Box<Node<K>>, budget: i32) -> Box<Node<K>> {
    let balance = node.balance_factor();
    if balance < -budget {
        // Right side is heavier
        let right_balance = node.right.as_deref().map_or(0, Node::balance_factor);
        if right_balance <= 0 {
            rotate_left(node)
        } else {
            // The right child is left-heavy, so its left grandchild exists.
            let inner_is_leaf = node
                .right
                .as_deref()
                .and_then(|right| right.left.as_deref())
                .map_or(false, Node::is_leaf);
            if inner_is_leaf {
                rotate_right_left(node)
            } else {
                node.right = node
                    .right
                    .take()
                    .map(|right| rebalance(right, budget - 1));
                rotate_left(node)
            }
        }
    } else if balance > budget {
        // Left side is heavier
        let left_balance = node.left.as_deref().map_or(0, Node::balance_factor);
        if left_balance >= 0 {
            rotate_right(node)
        } else {
            let inner_is_leaf = node
                .left
                .as_deref()
                .and_then(|left| left.right.as_deref())
                .map_or(false, Node::is_leaf);
            if inner_is_leaf {
                rotate_left_right(node)
            } else {
                node.left = node.left.take().map(|left| rebalance(left, budget - 1));
                rotate_right(node)
            }
        }
    } else {
        node
    }
}
