//! Height-balanced search tree
//!
//! Every node stores `balance = height(right) - height(left)`. Inserts and
//! deletes maintain the factor incrementally on the way back up and rotate
//! when it reaches ±2, so after each public call every factor is in
//! `{-1, 0, 1}` and the height stays below ~1.44 · log2(n + 2).

mod engine;
mod node;
mod rotation;

pub use node::Node;

use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use crate::traversal::{self, render_sideways};
use crate::{SearchTree, TreeError};
use node::Link;

/// AVL tree over totally ordered, unique keys
///
/// The tree exclusively owns its nodes; rotations hand subtrees from one
/// slot to another and never copy them.
#[derive(Debug, Clone)]
pub struct AvlTree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<K: Ord> AvlTree<K> {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key
    ///
    /// Fails with [`TreeError::DuplicateKey`] if the key is present; the tree,
    /// balance factors included, is then left untouched.
    pub fn insert(&mut self, key: K) -> Result<(), TreeError> {
        engine::insert(&mut self.root, key)?;
        self.len += 1;
        Ok(())
    }

    /// Delete a key
    ///
    /// Deleting an absent key from a non-empty tree is a no-op.
    pub fn delete(&mut self, key: &K) -> Result<(), TreeError> {
        self.remove(key).map(|_| ())
    }

    /// Delete a key, handing back the stored key if it was present
    pub fn remove(&mut self, key: &K) -> Result<Option<K>, TreeError> {
        if self.is_empty() {
            return Err(TreeError::EmptyTree);
        }

        match engine::delete(&mut self.root, key) {
            Some(removed) => {
                self.len -= 1;
                Ok(Some(removed.key))
            }
            None => {
                debug!(len = self.len, "delete of absent key ignored");
                Ok(None)
            }
        }
    }

    /// Look up a key
    pub fn search(&self, key: &K) -> Result<&K, TreeError> {
        let mut current = self.root.as_deref();

        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Equal => return Ok(&node.key),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }

        Err(TreeError::NotFound)
    }

    /// Check whether a key is present
    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_ok()
    }

    /// Smallest key
    pub fn find_min(&self) -> Result<&K, TreeError> {
        let mut node = self.root.as_deref().ok_or(TreeError::NotFound)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.key)
    }

    /// Largest key
    pub fn find_max(&self) -> Result<&K, TreeError> {
        let mut node = self.root.as_deref().ok_or(TreeError::NotFound)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.key)
    }
}

impl<K> AvlTree<K> {
    /// Check if the tree holds no keys
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.len
    }

    /// Height in edges (`-1` when empty, `0` for a single node)
    ///
    /// Follows the taller child at every level using the stored balance
    /// factors, so this is O(log n) rather than a full walk.
    pub fn height(&self) -> i32 {
        let mut height = -1;
        let mut current = self.root.as_deref();

        while let Some(node) = current {
            height += 1;
            current = if node.balance < 0 {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }

        height
    }

    /// Theoretical worst-case height for the current key count
    pub fn height_bound(&self) -> i32 {
        height_bound(self.len)
    }

    /// Drop every node
    ///
    /// Fails with [`TreeError::EmptyTree`] if there is nothing to drop.
    pub fn clear(&mut self) -> Result<(), TreeError> {
        if self.root.take().is_none() {
            return Err(TreeError::EmptyTree);
        }
        self.len = 0;
        Ok(())
    }

    /// Root node, for read-only inspection of the shape
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Keys in ascending order
    pub fn in_order(&self) -> Vec<&K> {
        traversal::in_order(self.root())
    }

    /// Keys in node, left, right order
    pub fn pre_order(&self) -> Vec<&K> {
        traversal::pre_order(self.root())
    }

    /// Keys in left, right, node order
    pub fn post_order(&self) -> Vec<&K> {
        traversal::post_order(self.root())
    }

    /// Keys grouped by level, root level first
    pub fn breadth_first(&self) -> Vec<Vec<&K>> {
        traversal::breadth_first(self.root())
    }
}

impl<K: fmt::Display> AvlTree<K> {
    /// Pre-order listing with each node's balance factor, e.g. `20 (bf=0) 10 (bf=0)`
    pub fn pre_order_annotated(&self) -> String {
        let mut entries = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<K>> = self.root().into_iter().collect();

        while let Some(node) = stack.pop() {
            entries.push(node.to_string());
            stack.extend(node.right());
            stack.extend(node.left());
        }

        entries.join(" ")
    }
}

impl<K: Ord + fmt::Debug> AvlTree<K> {
    /// Assert every structural invariant, panicking with a description of
    /// the first violation found
    ///
    /// Checks strict key ordering, that each stored balance factor equals the
    /// measured height difference, that every factor is in `{-1, 0, 1}`,
    /// and that `len` matches the node count. O(n).
    #[track_caller]
    pub fn assert_valid(&self) {
        let (count, _) = Self::assert_valid_inner(self.root(), None, None);
        assert_eq!(count, self.len, "length mismatch: counted {count} nodes, tree reports {}", self.len);
    }

    /// Returns `(node count, height)` of the subtree
    #[track_caller]
    fn assert_valid_inner(node: Option<&Node<K>>, lower: Option<&K>, upper: Option<&K>) -> (usize, i32) {
        let Some(node) = node else {
            return (0, -1);
        };

        if let Some(lower) = lower {
            assert!(lower < &node.key, "Ordering violation: {:?} must be greater than {:?}", node.key, lower);
        }
        if let Some(upper) = upper {
            assert!(&node.key < upper, "Ordering violation: {:?} must be less than {:?}", node.key, upper);
        }

        let (left_count, left_height) = Self::assert_valid_inner(node.left(), lower, Some(&node.key));
        let (right_count, right_height) = Self::assert_valid_inner(node.right(), Some(&node.key), upper);

        let measured = right_height - left_height;
        assert_eq!(
            i32::from(node.balance),
            measured,
            "balance factor of {:?} is stored as {} but measures {}",
            node.key,
            node.balance,
            measured,
        );
        assert!(
            (-1..=1).contains(&node.balance),
            "AVL violation: balance factor of {:?} is {}",
            node.key,
            node.balance,
        );

        (left_count + right_count + 1, 1 + left_height.max(right_height))
    }
}

/// Sideways rendering: right subtree above, four spaces per level
impl<K: fmt::Display> fmt::Display for AvlTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_sideways(self.root(), f)
    }
}

impl<K: Ord> SearchTree<K> for AvlTree<K> {
    fn insert(&mut self, key: K) -> Result<(), TreeError> {
        AvlTree::insert(self, key)
    }

    fn search(&self, key: &K) -> Result<&K, TreeError> {
        AvlTree::search(self, key)
    }

    fn delete(&mut self, key: &K) -> Result<(), TreeError> {
        AvlTree::delete(self, key)
    }

    fn is_empty(&self) -> bool {
        AvlTree::is_empty(self)
    }

    fn len(&self) -> usize {
        AvlTree::len(self)
    }

    fn height(&self) -> i32 {
        AvlTree::height(self)
    }

    fn in_order(&self) -> Vec<&K> {
        AvlTree::in_order(self)
    }
}

/// Largest height an AVL tree with `len` keys can reach
///
/// From the minimal-node recurrence N(h) = N(h-1) + N(h-2) + 1:
/// levels < 1.4405 · log2(n + 2) - 0.3277, height = levels - 1.
pub fn height_bound(len: usize) -> i32 {
    let levels = 1.4405 * ((len + 2) as f64).log2() - 0.3277;
    (levels.floor() as i32 - 1).max(0)
}
