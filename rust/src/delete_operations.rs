//! Delete operations for AvlgTree.
//!
//! This module contains the deletion path of the AVL-G tree: BST descent to
//! the target, leaf removal or successor/predecessor promotion for interior
//! nodes, and the bottom-up rebalancing pass over every ancestor.

use crate::error::{AvlgTreeError, ModifyResult};
use crate::node;
use crate::types::{AvlgTree, Link, Node};
use std::cmp::Ordering;
use std::mem;

impl<K: Ord + Clone> AvlgTree<K> {
    /// Remove a key from the tree and return it to the caller.
    ///
    /// An interior node with a right subtree is removed by promoting its
    /// in-order successor; a node with only a left subtree symmetrically
    /// promotes its in-order predecessor. Every ancestor on the deletion
    /// path is rebalanced on the way back up. Removing a key that is not
    /// present leaves the tree bit-for-bit unchanged.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to remove
    ///
    /// # Returns
    ///
    /// The owned removed key, `Err(AvlgTreeError::EmptyTree)` if the tree
    /// holds zero keys, or `Err(AvlgTreeError::KeyNotFound)` if the key is
    /// absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use avlg_tree::{AvlgTree, AvlgTreeError};
    ///
    /// let mut tree = AvlgTree::new(1).unwrap();
    /// assert_eq!(tree.remove(&1), Err(AvlgTreeError::EmptyTree));
    ///
    /// tree.insert(1);
    /// tree.insert(2);
    /// assert_eq!(tree.remove(&3), Err(AvlgTreeError::KeyNotFound));
    /// assert_eq!(tree.remove(&1), Ok(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn remove(&mut self, key: &K) -> ModifyResult<K> {
        if self.is_empty() {
            return Err(AvlgTreeError::EmptyTree);
        }

        let (root, removed) = Self::remove_recursive(self.root.take(), key, self.max_imbalance);
        self.root = root;
        match removed {
            Some(removed) => {
                self.size -= 1;
                Ok(removed)
            }
            None => Err(AvlgTreeError::KeyNotFound),
        }
    }

    /// Recursive deletion helper.
    ///
    /// Returns the possibly rotated subtree root for the caller to reattach,
    /// plus the removed key if the target was found in this subtree.
    /// Rebalancing is gated on an actual removal so a miss cannot perturb
    /// the structure.
    fn remove_recursive(link: Link<K>, key: &K, budget: i32) -> (Link<K>, Option<K>) {
        let mut node = match link {
            Some(node) => node,
            None => return (None, None),
        };

        let removed = match key.cmp(&node.key) {
            Ordering::Less => {
                let (left, removed) = Self::remove_recursive(node.left.take(), key, budget);
                node.left = left;
                removed
            }
            Ordering::Greater => {
                let (right, removed) = Self::remove_recursive(node.right.take(), key, budget);
                node.right = right;
                removed
            }
            Ordering::Equal => return Self::remove_node(node, budget),
        };

        if removed.is_some() {
            node = node::rebalance(node, budget);
        }
        (Some(node), removed)
    }

    /// Remove the key held by `node` itself.
    ///
    /// A leaf is simply discarded. Otherwise the in-order successor (or, for
    /// a left-only node, the in-order predecessor) replaces the node's key
    /// and is deleted from its own subtree, which keeps the structural edit
    /// at a leaf-adjacent position.
    fn remove_node(mut node: Box<Node<K>>, budget: i32) -> (Link<K>, Option<K>) {
        let successor = node.right.as_deref().map(|right| right.min_key().clone());
        if let Some(successor) = successor {
            let removed = mem::replace(&mut node.key, successor);
            let (right, _) = Self::remove_recursive(node.right.take(), &node.key, budget);
            node.right = right;
            return (Some(node::rebalance(node, budget)), Some(removed));
        }

        let predecessor = node.left.as_deref().map(|left| left.max_key().clone());
        if let Some(predecessor) = predecessor {
            let removed = mem::replace(&mut node.key, predecessor);
            let (left, _) = Self::remove_recursive(node.left.take(), &node.key, budget);
            node.left = left;
            return (Some(node::rebalance(node, budget)), Some(removed));
        }

        (None, Some(node.key))
    }
}
