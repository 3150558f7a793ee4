//! AVL-G tree implementation in Rust.
//!
//! This crate provides a generalized AVL tree: a self-balancing binary
//! search tree whose balance condition is relaxed so any subtree may carry a
//! height imbalance of up to a configurable positive integer G before a
//! rotation is triggered. G = 1 is a textbook AVL tree; larger G means fewer
//! rotations on insert and delete at the cost of deeper searches.

mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod node;
mod types;
mod validation;

pub use construction::DEFAULT_IMBALANCE;
pub use error::{AvlgTreeError, InitResult, KeyResult, ModifyResult, TreeResult};
pub use iteration::KeyIterator;
pub use types::AvlgTree;

impl<K: Ord + Clone> AvlgTree<K> {
    // ============================================================================
    // OTHER API OPERATIONS
    // ============================================================================

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the tree holds zero keys.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Empties the tree of all its keys.
    ///
    /// Drops the whole node graph and resets the count to zero; the
    /// configured imbalance bound is kept.
    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
    }
}
