//! Read operations for AvlgTree.
//!
//! This module contains all the read-only operations of the AVL-G tree:
//! key search, root access, height, and configuration accessors.

use crate::error::{AvlgTreeError, TreeResult};
use crate::node;
use crate::types::AvlgTree;
use std::cmp::Ordering;

impl<K: Ord + Clone> AvlgTree<K> {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Search for a key in the tree.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to search for
    ///
    /// # Returns
    ///
    /// `Ok(Some(&key))` on an exact match, `Ok(None)` if the key is absent,
    /// or `Err(AvlgTreeError::EmptyTree)` if the tree holds zero keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use avlg_tree::{AvlgTree, AvlgTreeError};
    ///
    /// let mut tree = AvlgTree::new(1).unwrap();
    /// assert_eq!(tree.search(&1), Err(AvlgTreeError::EmptyTree));
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.search(&1), Ok(Some(&1)));
    /// assert_eq!(tree.search(&2), Ok(None));
    /// ```
    pub fn search(&self, key: &K) -> TreeResult<Option<&K>> {
        if self.is_empty() {
            return Err(AvlgTreeError::EmptyTree);
        }

        let mut current = &self.root;
        while let Some(node) = current.as_deref() {
            match key.cmp(&node.key) {
                Ordering::Less => current = &node.left,
                Ordering::Greater => current = &node.right,
                Ordering::Equal => return Ok(Some(&node.key)),
            }
        }
        Ok(None)
    }

    /// Check if a key exists in the tree.
    ///
    /// Unlike [`search`](Self::search), this treats an empty tree as an
    /// ordinary miss rather than an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use avlg_tree::AvlgTree;
    ///
    /// let mut tree = AvlgTree::new(1).unwrap();
    /// assert!(!tree.contains(&1));
    /// tree.insert(1);
    /// assert!(tree.contains(&1));
    /// ```
    pub fn contains(&self, key: &K) -> bool {
        self.search(key).map_or(false, |found| found.is_some())
    }

    /// Return the key at the tree's root node.
    ///
    /// # Returns
    ///
    /// A reference to the root key, or `Err(AvlgTreeError::EmptyTree)` if
    /// the tree holds zero keys.
    pub fn root_key(&self) -> TreeResult<&K> {
        self.root
            .as_deref()
            .map(|node| &node.key)
            .ok_or(AvlgTreeError::EmptyTree)
    }

    /// Height of the tree: length of the longest path from the root to a
    /// leaf. A single-leaf tree has height 0; an empty tree has height -1.
    ///
    /// Computed by full recursive descent; heights are not cached.
    pub fn height(&self) -> i32 {
        node::height(&self.root)
    }

    /// The configured maximum imbalance bound G.
    pub fn max_imbalance(&self) -> i32 {
        self.max_imbalance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_on_empty_tree_fails() {
        let tree = AvlgTree::<i32>::new(1).unwrap();
        assert!(tree.search(&1).unwrap_err().is_empty_tree());
        assert!(tree.root_key().unwrap_err().is_empty_tree());
    }

    #[test]
    fn test_search_miss_is_not_an_error() {
        let mut tree = AvlgTree::new(1).unwrap();
        tree.insert(10);
        tree.insert(5);
        assert_eq!(tree.search(&7), Ok(None));
        assert_eq!(tree.search(&5), Ok(Some(&5)));
    }

    #[test]
    fn test_contains_is_total() {
        let mut tree = AvlgTree::new(2).unwrap();
        assert!(!tree.contains(&3));
        tree.insert(3);
        assert!(tree.contains(&3));
        assert!(!tree.contains(&4));
    }

    #[test]
    fn test_height_of_empty_and_single_leaf() {
        let mut tree = AvlgTree::new(1).unwrap();
        assert_eq!(tree.height(), -1);
        tree.insert(1);
        assert_eq!(tree.height(), 0);
    }
}
