//! Core types and data structures for AvlgTree.
//!
//! This module contains the fundamental data structures, type definitions,
//! and constants used throughout the AVL-G tree implementation.

// ============================================================================
// CONSTANTS
// ============================================================================

/// Minimum imbalance bound accepted by any AVL-G tree
pub(crate) const MIN_IMBALANCE: i32 = 1;

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Exclusively owned optional child slot.
///
/// Children are owned by their parent; rotations move ownership between
/// slots rather than copying keys.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// A single node of the tree.
///
/// Holds a key and the two owned child slots. A node with both slots absent
/// is a leaf. Height is deliberately not stored per node; it is recomputed
/// from subtree shape on demand (see `node::height`).
#[derive(Debug, Clone)]
pub(crate) struct Node<K> {
    /// The key stored at this node.
    pub(crate) key: K,
    /// Owned left subtree; all keys in it compare less than `key`.
    pub(crate) left: Link<K>,
    /// Owned right subtree; all keys in it compare greater than `key`.
    pub(crate) right: Link<K>,
}

/// A generalized AVL tree ("AVL-G").
///
/// A classic AVL tree relaxed so any subtree may tolerate a height imbalance
/// of up to a configurable positive integer G before a rebalancing rotation
/// is triggered. G = 1 is a textbook AVL tree; larger G trades worse
/// guaranteed search depth for fewer rotations on insert and delete,
/// spanning the space between an unbalanced BST (G = infinity) and classic
/// AVL.
///
/// Keys are unique: inserting a key that is already present is a no-op and
/// leaves the element count unchanged.
///
/// # Type Parameters
///
/// * `K` - Key type that must implement `Ord + Clone`
///
/// # Examples
///
/// ```
/// use avlg_tree::AvlgTree;
///
/// let mut tree = AvlgTree::new(1).unwrap();
/// tree.insert(20);
/// tree.insert(10);
/// tree.insert(5);
///
/// // G = 1 forces a single right rotation: 10 is promoted to the root.
/// assert_eq!(tree.root_key(), Ok(&10));
/// assert_eq!(tree.height(), 1);
/// assert_eq!(tree.len(), 3);
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(log n) comparisons, fewer rotations for larger G
/// - **Lookup**: O(log n), degrading toward O(n) as G grows
/// - **Deletion**: O(log n) comparisons
/// - **Height bookkeeping**: recomputed recursively, not cached; balance
///   checks cost O(subtree size)
///
/// # Choosing G
///
/// - G = 1: tightest balance, most rotations (classic AVL)
/// - G = 2..4: noticeably fewer rotations, slightly deeper trees
/// - Large G: rotation-free in practice, search degrades toward a plain BST
#[derive(Debug, Clone)]
pub struct AvlgTree<K> {
    /// Owned root node, absent for an empty tree.
    pub(crate) root: Link<K>,
    /// The configured imbalance bound G, fixed at construction.
    pub(crate) max_imbalance: i32,
    /// Number of keys currently stored in the tree.
    pub(crate) size: usize,
}
