//! # Self-Balancing Ordered-Key Store
//!
//! This library implements an AVL tree: a binary search tree that keeps its
//! height logarithmic by storing a balance factor per node and rotating after
//! every insertion or deletion that would push a factor outside `{-1, 0, 1}`.
//!
//! ## Core Algorithm
//!
//! 1. **Recursive descent**: insert/delete walk down by key comparison
//! 2. **Height-changed signal**: each level reports whether its subtree grew or shrank
//! 3. **Balance-factor transitions**: parents absorb the signal or pass it upward
//! 4. **Rotations**: single or double rotations repair a factor of ±2 in O(1)
//!
//! Result: height ≤ ~1.44 · log2(n + 2), so every operation is O(log n)
//!
//! ## Usage Example
//!
//! ```
//! use avl_store::{AvlTree, TreeError};
//!
//! let mut tree = AvlTree::new();
//! for key in [30, 20, 10] {
//!     tree.insert(key)?;
//! }
//! assert_eq!(tree.pre_order(), vec![&20, &10, &30]);
//! assert_eq!(tree.insert(20), Err(TreeError::DuplicateKey));
//! # Ok::<(), TreeError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

// Core modules
pub mod avl;        // Balanced tree, rotations, rebalancer
pub mod bst;        // Unbalanced reference tree
pub mod traversal;  // Order producers shared by both trees
pub mod workload;   // Key generation, height reports, scripted operations

// Re-exports for convenience
pub use avl::{AvlTree, Node};
pub use bst::UnbalancedTree;
pub use traversal::BinaryNode;
pub use workload::{HeightReport, KeyOrder, WorkloadConfig, WorkloadError};

use thiserror::Error;

/// Errors returned by tree operations
///
/// Every error leaves the tree exactly as it was before the call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// Insert of a key that is already present
    #[error("key is already present in the tree")]
    DuplicateKey,

    /// Delete or clear attempted on a tree with zero nodes
    #[error("the tree is empty")]
    EmptyTree,

    /// Search, minimum or maximum could not locate a key
    #[error("key not found")]
    NotFound,
}

/// Common surface of the ordered-key trees in this crate
///
/// Lets callers (height comparisons, benches) drive the balanced and the
/// unbalanced tree through the same code path.
pub trait SearchTree<K: Ord> {
    /// Insert a new key, rejecting duplicates
    fn insert(&mut self, key: K) -> Result<(), TreeError>;

    /// Look up a key
    fn search(&self, key: &K) -> Result<&K, TreeError>;

    /// Remove a key; absent keys are a no-op, an empty tree is an error
    fn delete(&mut self, key: &K) -> Result<(), TreeError>;

    /// Whether the tree holds no keys
    fn is_empty(&self) -> bool;

    /// Number of keys
    fn len(&self) -> usize;

    /// Height in edges, `-1` when empty
    fn height(&self) -> i32;

    /// Keys in ascending order
    fn in_order(&self) -> Vec<&K>;
}
