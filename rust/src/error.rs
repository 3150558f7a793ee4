//! Error handling and result types for AvlgTree operations.
//!
//! This module provides the error type shared by all fallible tree
//! operations, along with result type aliases for better ergonomics.

/// Error type for AVL-G tree operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvlgTreeError {
    /// Construction was attempted with an imbalance bound smaller than 1.
    InvalidBalance(String),
    /// Delete, search, or root access was invoked on a tree with zero keys.
    EmptyTree,
    /// The target key of a delete was not present in the tree.
    KeyNotFound,
}

impl AvlgTreeError {
    /// Create an InvalidBalance error with context
    pub fn invalid_balance(requested: i32, min_required: i32) -> Self {
        Self::InvalidBalance(format!(
            "Imbalance bound {} is invalid (minimum required: {})",
            requested, min_required
        ))
    }

    /// Check if this error is an invalid balance error
    pub fn is_balance_error(&self) -> bool {
        matches!(self, Self::InvalidBalance(_))
    }

    /// Check if this error is an empty tree error
    pub fn is_empty_tree(&self) -> bool {
        matches!(self, Self::EmptyTree)
    }

    /// Check if this error is a key-not-found error
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound)
    }
}

impl std::fmt::Display for AvlgTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AvlgTreeError::InvalidBalance(msg) => write!(f, "Invalid balance: {}", msg),
            AvlgTreeError::EmptyTree => write!(f, "Tree is empty"),
            AvlgTreeError::KeyNotFound => write!(f, "Key not found in tree"),
        }
    }
}

impl std::error::Error for AvlgTreeError {}

/// Public result type for tree operations that may fail
pub type TreeResult<T> = Result<T, AvlgTreeError>;

/// Result type for key lookup operations
pub type KeyResult<T> = Result<T, AvlgTreeError>;

/// Result type for tree modification operations
pub type ModifyResult<T> = Result<T, AvlgTreeError>;

/// Result type for tree construction
pub type InitResult<T> = Result<T, AvlgTreeError>;
