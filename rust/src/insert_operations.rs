//! Insert operations for AvlgTree.
//!
//! This module contains the insertion path of the AVL-G tree: BST descent,
//! leaf creation, and the bottom-up rebalancing pass over every ancestor on
//! the insertion path.

use crate::node;
use crate::types::{AvlgTree, Link, Node};
use std::cmp::Ordering;

impl<K: Ord + Clone> AvlgTree<K> {
    /// Insert a key into the tree.
    ///
    /// Descends the BST path for `key` and creates a leaf at the first
    /// absent slot, then rebalances every ancestor on the way back up with
    /// the tree's configured imbalance bound G. Inserting a key that is
    /// already present is a no-op and leaves the element count unchanged.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert
    ///
    /// # Examples
    ///
    /// ```
    /// use avlg_tree::AvlgTree;
    ///
    /// let mut tree = AvlgTree::new(1).unwrap();
    /// tree.insert(20);
    /// tree.insert(10);
    /// tree.insert(15); // triggers a left-right double rotation
    ///
    /// assert_eq!(tree.root_key(), Ok(&15));
    /// assert_eq!(tree.len(), 3);
    ///
    /// tree.insert(15); // duplicate: no-op
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn insert(&mut self, key: K) {
        let (root, inserted) = Self::insert_recursive(self.root.take(), key, self.max_imbalance);
        self.root = root;
        if inserted {
            self.size += 1;
        }
    }

    /// Recursive insertion helper.
    ///
    /// Returns the possibly rotated subtree root for the caller to reattach,
    /// plus whether a new node was actually created. The flag propagates to
    /// the top so `size` grows by exactly one per successful operation, and
    /// it gates rebalancing: a duplicate no-op cannot change any height.
    fn insert_recursive(link: Link<K>, key: K, budget: i32) -> (Link<K>, bool) {
        let mut node = match link {
            Some(node) => node,
            None => return (Some(Box::new(Node::new(key))), true),
        };

        let inserted = match key.cmp(&node.key) {
            Ordering::Less => {
                let (left, inserted) = Self::insert_recursive(node.left.take(), key, budget);
                node.left = left;
                inserted
            }
            Ordering::Greater => {
                let (right, inserted) = Self::insert_recursive(node.right.take(), key, budget);
                node.right = right;
                inserted
            }
            Ordering::Equal => false,
        };

        if inserted {
            node = node::rebalance(node, budget);
        }
        (Some(node), inserted)
    }
}
