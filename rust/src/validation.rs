//! Validation and debugging utilities for AvlgTree.
//!
//! This module contains the structural invariant checks (BST property,
//! AVL-G balance, size consistency), detailed error reporting, and the
//! debugging printer.

use crate::types::{AvlgTree, Node};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<K: Ord + Clone> AvlgTree<K> {
    /// Establishes whether the tree globally satisfies the BST condition.
    ///
    /// The check is transitive: every key in a node's left subtree must
    /// compare less than the node's key and every key in its right subtree
    /// greater, not merely the immediate children. An empty tree is trivially
    /// a BST.
    pub fn is_bst(&self) -> bool {
        Self::check_bst(self.root.as_deref(), None, None)
    }

    /// Establishes whether the tree globally satisfies the AVL-G condition.
    ///
    /// The balance factor is checked at every node, not just the root:
    /// |height(left) - height(right)| <= G must hold for the whole tree.
    pub fn is_avlg_balanced(&self) -> bool {
        Self::check_balance(self.root.as_deref(), self.max_imbalance)
    }

    /// Check if the tree maintains all of its invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        if !self.is_bst() {
            return Err("BST property violated".to_string());
        }
        if !self.is_avlg_balanced() {
            return Err(format!(
                "AVL-{} balance violated (height {})",
                self.max_imbalance,
                self.height()
            ));
        }

        let reachable = Self::count_reachable(self.root.as_deref());
        if reachable != self.size {
            return Err(format!(
                "Size mismatch: {} reachable nodes vs size {}",
                reachable, self.size
            ));
        }

        self.check_in_order_invariants()
    }

    /// Alias for check_invariants_detailed (for test compatibility).
    pub fn validate(&self) -> Result<(), String> {
        self.check_invariants_detailed()
    }

    /// Check that the in-order traversal yields strictly ascending keys.
    fn check_in_order_invariants(&self) -> Result<(), String> {
        let keys: Vec<&K> = self.keys().collect();

        for i in 1..keys.len() {
            if keys[i - 1] >= keys[i] {
                return Err(format!("Iterator returned unsorted keys at index {}", i));
            }
        }

        if keys.len() != self.len() {
            return Err(format!(
                "Iterator returned {} keys but tree has {} items",
                keys.len(),
                self.len()
            ));
        }

        Ok(())
    }

    /// Recursively check the BST property within exclusive bounds.
    fn check_bst(node: Option<&Node<K>>, min: Option<&K>, max: Option<&K>) -> bool {
        let node = match node {
            Some(node) => node,
            None => return true,
        };

        if let Some(min) = min {
            if node.key <= *min {
                return false;
            }
        }
        if let Some(max) = max {
            if node.key >= *max {
                return false;
            }
        }

        Self::check_bst(node.left.as_deref(), min, Some(&node.key))
            && Self::check_bst(node.right.as_deref(), Some(&node.key), max)
    }

    /// Recursively check the AVL-G balance condition at every node.
    fn check_balance(node: Option<&Node<K>>, bound: i32) -> bool {
        let node = match node {
            Some(node) => node,
            None => return true,
        };

        node.balance_factor().abs() <= bound
            && Self::check_balance(node.left.as_deref(), bound)
            && Self::check_balance(node.right.as_deref(), bound)
    }

    /// Count the nodes reachable from `node`.
    fn count_reachable(node: Option<&Node<K>>) -> usize {
        match node {
            Some(node) => {
                1 + Self::count_reachable(node.left.as_deref())
                    + Self::count_reachable(node.right.as_deref())
            }
            None => 0,
        }
    }

    // ============================================================================
    // DEBUGGING AND TESTING UTILITIES
    // ============================================================================

    /// Prints the tree structure for debugging.
    pub fn print_structure(&self)
    where
        K: std::fmt::Debug,
    {
        println!(
            "AVL-{} tree, {} keys, height {}:",
            self.max_imbalance,
            self.size,
            self.height()
        );
        Self::print_node(self.root.as_deref(), 0);
    }

    /// Print a node and its children recursively for debugging.
    fn print_node(node: Option<&Node<K>>, depth: usize)
    where
        K: std::fmt::Debug,
    {
        let indent = "  ".repeat(depth);
        match node {
            Some(node) => {
                println!(
                    "{}{:?} [balance={}]",
                    indent,
                    node.key,
                    node.balance_factor()
                );
                if !node.is_leaf() {
                    Self::print_node(node.left.as_deref(), depth + 1);
                    Self::print_node(node.right.as_deref(), depth + 1);
                }
            }
            None => println!("{}<absent>", indent),
        }
    }
}
