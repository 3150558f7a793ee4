//! Construction and initialization logic for AvlgTree.
//!
//! This module contains the constructors and imbalance-bound validation for
//! the AVL-G tree, including the default (classic AVL) configuration.

use crate::error::{AvlgTreeError, InitResult, TreeResult};
use crate::types::{AvlgTree, MIN_IMBALANCE};

/// Imbalance bound of a textbook AVL tree, used by the default constructor
pub const DEFAULT_IMBALANCE: i32 = 1;

impl<K: Ord + Clone> AvlgTree<K> {
    /// Create an AVL-G tree with the specified maximum imbalance bound.
    ///
    /// # Arguments
    ///
    /// * `max_imbalance` - Maximum height imbalance G tolerated on any
    ///   subtree before a rotation is triggered (minimum 1)
    ///
    /// # Returns
    ///
    /// Returns `Ok(AvlgTree)` if the bound is valid, `Err(AvlgTreeError)`
    /// otherwise. The tree starts empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avlg_tree::AvlgTree;
    ///
    /// let tree = AvlgTree::<i32>::new(2).unwrap();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.max_imbalance(), 2);
    ///
    /// assert!(AvlgTree::<i32>::new(0).is_err());
    /// ```
    pub fn new(max_imbalance: i32) -> InitResult<Self> {
        validation::validate_imbalance(max_imbalance)?;

        Ok(Self {
            root: None,
            max_imbalance,
            size: 0,
        })
    }

    /// Create a classic AVL tree (G = 1).
    ///
    /// This is equivalent to calling `new(DEFAULT_IMBALANCE)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avlg_tree::AvlgTree;
    ///
    /// let tree = AvlgTree::<i32>::with_default_imbalance();
    /// assert_eq!(tree.max_imbalance(), 1);
    /// ```
    pub fn with_default_imbalance() -> Self {
        Self {
            root: None,
            max_imbalance: DEFAULT_IMBALANCE,
            size: 0,
        }
    }
}

impl<K: Ord + Clone> Default for AvlgTree<K> {
    /// Create a classic AVL tree (G = 1).
    fn default() -> Self {
        Self::with_default_imbalance()
    }
}

/// Validation utilities for construction
pub mod validation {
    use super::*;

    /// Validate that an imbalance bound is suitable for an AVL-G tree.
    ///
    /// # Arguments
    ///
    /// * `max_imbalance` - The bound to validate
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` if valid, `Err(AvlgTreeError)` otherwise.
    pub fn validate_imbalance(max_imbalance: i32) -> TreeResult<()> {
        if max_imbalance < MIN_IMBALANCE {
            Err(AvlgTreeError::invalid_balance(max_imbalance, MIN_IMBALANCE))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_construction() {
        let tree = AvlgTree::<i32>::new(3).unwrap();
        assert_eq!(tree.max_imbalance(), 3);
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), -1);
    }

    #[test]
    fn test_tree_invalid_balance() {
        let result = AvlgTree::<i32>::new(0);
        assert!(result.is_err());
        assert!(result.unwrap_err().is_balance_error());

        let result = AvlgTree::<i32>::new(-5);
        assert!(result.unwrap_err().is_balance_error());
    }

    #[test]
    fn test_tree_default_is_classic_avl() {
        let tree = AvlgTree::<i32>::default();
        assert_eq!(tree.max_imbalance(), DEFAULT_IMBALANCE);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_validation() {
        assert!(validation::validate_imbalance(1).is_ok());
        assert!(validation::validate_imbalance(10).is_ok());
        assert!(validation::validate_imbalance(0).is_err());
    }
}
