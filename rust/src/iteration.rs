//! Whole-tree in-order traversal for AvlgTree.
//!
//! The tree deliberately exposes no cursors beyond a full in-order walk.
//! The iterator keeps an explicit stack of the pending left spine, so `next`
//! runs without recursion and the whole traversal is O(n).

use crate::types::{AvlgTree, Link, Node};

/// Borrowing in-order iterator over the keys of an [`AvlgTree`].
///
/// Yields keys in ascending order. Created by [`AvlgTree::keys`].
pub struct KeyIterator<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> KeyIterator<'a, K> {
    fn new(root: &'a Link<K>) -> Self {
        let mut iter = KeyIterator { stack: Vec::new() };
        iter.push_left_spine(root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for KeyIterator<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.key)
    }
}

impl<K: Ord + Clone> AvlgTree<K> {
    /// Returns an iterator over all keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avlg_tree::AvlgTree;
    ///
    /// let mut tree = AvlgTree::new(1).unwrap();
    /// for key in [20, 10, 30, 5] {
    ///     tree.insert(key);
    /// }
    ///
    /// let keys: Vec<i32> = tree.keys().copied().collect();
    /// assert_eq!(keys, vec![5, 10, 20, 30]);
    /// ```
    pub fn keys(&self) -> KeyIterator<'_, K> {
        KeyIterator::new(&self.root)
    }

    /// Returns the smallest key in the tree.
    pub fn first(&self) -> Option<&K> {
        self.root.as_deref().map(Node::min_key)
    }

    /// Returns the largest key in the tree.
    pub fn last(&self) -> Option<&K> {
        self.root.as_deref().map(Node::max_key)
    }
}
