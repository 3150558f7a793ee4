//! Concrete rotation and lifecycle scenarios for the AVL-G tree.
//!
//! Each test pins down an exact structural outcome: which key ends up at the
//! root and how tall the tree is after a known insert/delete sequence.

use avlg_tree::{AvlgTree, AvlgTreeError};

#[test]
fn test_g1_single_right_rotation() {
    // Inserting a descending chain under G = 1 forces a single right
    // rotation at the root: 10 is promoted over 20.
    let mut tree = AvlgTree::new(1).unwrap();
    tree.insert(20);
    tree.insert(10);
    tree.insert(5);

    assert_eq!(tree.root_key(), Ok(&10));
    assert_eq!(tree.height(), 1);
    assert_eq!(tree.len(), 3);
    assert!(tree.is_bst());
    assert!(tree.is_avlg_balanced());
}

#[test]
fn test_g1_left_right_double_rotation() {
    // The zig-zag 20 <- 10 -> 15 needs a left-right double rotation; the
    // middle key 15 becomes the root.
    let mut tree = AvlgTree::new(1).unwrap();
    tree.insert(20);
    tree.insert(10);
    tree.insert(15);

    assert_eq!(tree.root_key(), Ok(&15));
    assert_eq!(tree.height(), 1);
    assert!(tree.is_bst());
    assert!(tree.is_avlg_balanced());
}

#[test]
fn test_g1_right_left_double_rotation() {
    // Mirror zig-zag on the right side.
    let mut tree = AvlgTree::new(1).unwrap();
    tree.insert(10);
    tree.insert(20);
    tree.insert(15);

    assert_eq!(tree.root_key(), Ok(&15));
    assert_eq!(tree.height(), 1);
    assert!(tree.is_bst());
    assert!(tree.is_avlg_balanced());
}

#[test]
fn test_g2_tolerates_imbalance_without_rotation() {
    // The same descending chain that rotates under G = 1 is tolerated by
    // G = 2: the root stays 20 and the tree stays a chain of height 2.
    let mut tree = AvlgTree::new(2).unwrap();
    tree.insert(20);
    tree.insert(10);
    tree.insert(5);

    assert_eq!(tree.root_key(), Ok(&20));
    assert_eq!(tree.height(), 2);
    assert!(tree.is_avlg_balanced());
}

#[test]
fn test_g1_delete_triggers_single_left_rotation() {
    // After deleting 2 the root 5 is right-heavy beyond tolerance. Its right
    // child 7 has balance factor exactly 0, and the tie must be corrected by
    // a single left rotation, not a double.
    let mut tree = AvlgTree::new(1).unwrap();
    for key in [5, 2, 7, 6, 8] {
        tree.insert(key);
    }
    assert_eq!(tree.remove(&2), Ok(2));

    assert_eq!(tree.root_key(), Ok(&7));
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.len(), 4);
    assert!(tree.is_bst());
    assert!(tree.is_avlg_balanced());

    let keys: Vec<i32> = tree.keys().copied().collect();
    assert_eq!(keys, vec![5, 6, 7, 8]);
}

#[test]
fn test_removing_absent_key_changes_nothing() {
    let mut tree = AvlgTree::new(1).unwrap();
    for key in [5, 2, 7, 6, 8] {
        tree.insert(key);
    }
    let keys_before: Vec<i32> = tree.keys().copied().collect();
    let root_before = *tree.root_key().unwrap();
    let height_before = tree.height();

    assert_eq!(tree.remove(&100), Err(AvlgTreeError::KeyNotFound));

    let keys_after: Vec<i32> = tree.keys().copied().collect();
    assert_eq!(keys_before, keys_after);
    assert_eq!(tree.root_key(), Ok(&root_before));
    assert_eq!(tree.height(), height_before);
    assert_eq!(tree.len(), 5);
}

#[test]
fn test_clear_after_inserts() {
    let mut tree = AvlgTree::new(3).unwrap();
    for key in 0..200 {
        tree.insert(key);
    }
    tree.clear();

    assert!(tree.is_empty());
    assert_eq!(tree.height(), -1);
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.root_key(), Err(AvlgTreeError::EmptyTree));
}

#[test]
fn test_empty_tree_operations_fail_with_empty_tree() {
    let mut tree = AvlgTree::<i32>::new(1).unwrap();
    assert_eq!(tree.search(&1), Err(AvlgTreeError::EmptyTree));
    assert_eq!(tree.remove(&1), Err(AvlgTreeError::EmptyTree));
    assert_eq!(tree.root_key(), Err(AvlgTreeError::EmptyTree));
}

#[test]
fn test_invalid_balance_never_creates_a_tree() {
    assert!(AvlgTree::<i32>::new(0).unwrap_err().is_balance_error());
    assert!(AvlgTree::<i32>::new(-1).unwrap_err().is_balance_error());
    assert!(AvlgTree::<i32>::new(1).is_ok());
}

#[test]
fn test_count_tracks_successful_edits_only() {
    let mut tree = AvlgTree::new(2).unwrap();
    tree.insert(1);
    tree.insert(2);
    tree.insert(2); // duplicate: no-op
    assert_eq!(tree.len(), 2);

    assert_eq!(tree.remove(&2), Ok(2));
    assert_eq!(tree.remove(&2), Err(AvlgTreeError::KeyNotFound));
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_string_keys() {
    let mut tree = AvlgTree::new(1).unwrap();
    for word in ["pear", "apple", "quince", "banana", "fig"] {
        tree.insert(word.to_string());
    }
    assert_eq!(tree.search(&"fig".to_string()), Ok(Some(&"fig".to_string())));
    assert_eq!(tree.first(), Some(&"apple".to_string()));
    assert_eq!(tree.last(), Some(&"quince".to_string()));
    assert!(tree.is_bst());
    assert!(tree.is_avlg_balanced());
}
