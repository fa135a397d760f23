//! Unbalanced reference tree
//!
//! Plain binary search tree with no rebalancing, kept as a baseline: on
//! sorted input its height grows to n - 1 while the AVL tree stays
//! logarithmic. Descent is iterative and drop is explicit, so list-shaped
//! trees of any size are safe to build and tear down.

use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use crate::traversal::{self, render_sideways, BinaryNode};
use crate::{SearchTree, TreeError};

type BstLink<K> = Option<Box<BstNode<K>>>;

/// Vertex of the unbalanced tree
#[derive(Debug)]
pub struct BstNode<K> {
    key: K,
    left: BstLink<K>,
    right: BstLink<K>,
}

impl<K> BinaryNode for BstNode<K> {
    type Key = K;

    fn key(&self) -> &K {
        &self.key
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

/// Binary search tree without balancing
pub struct UnbalancedTree<K> {
    root: BstLink<K>,
    len: usize,
}

impl<K> Default for UnbalancedTree<K> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<K: Ord> UnbalancedTree<K> {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key, rejecting duplicates
    pub fn insert(&mut self, key: K) -> Result<(), TreeError> {
        let slot = locate(&mut self.root, &key);
        if slot.is_some() {
            return Err(TreeError::DuplicateKey);
        }

        *slot = Some(Box::new(BstNode {
            key,
            left: None,
            right: None,
        }));
        self.len += 1;
        Ok(())
    }

    /// Delete a key
    ///
    /// Two-children nodes take over their in-order successor's key and the
    /// successor node is spliced out. Absent keys are a no-op.
    pub fn delete(&mut self, key: &K) -> Result<(), TreeError> {
        if self.is_empty() {
            return Err(TreeError::EmptyTree);
        }

        let slot = locate(&mut self.root, key);
        let Some(mut node) = slot.take() else {
            debug!(len = self.len, "delete of absent key ignored");
            return Ok(());
        };

        if node.left.is_some() && node.right.is_some() {
            if let Some(successor) = take_min(&mut node.right) {
                node.key = successor;
            }
            *slot = Some(node);
        } else {
            *slot = node.left.take().or_else(|| node.right.take());
        }

        self.len -= 1;
        Ok(())
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

impl<K> UnbalancedTree<K> {
    /// Check if the tree holds no keys
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.len
    }

    /// Height in edges, measured level by level (`-1` when empty)
    pub fn height(&self) -> i32 {
        traversal::measure_height(self.root.as_deref())
    }

    /// Drop every node, failing with [`TreeError::EmptyTree`] if there are none
    pub fn clear(&mut self) -> Result<(), TreeError> {
        if self.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        self.drop_nodes();
        self.len = 0;
        Ok(())
    }

    /// Keys in ascending order
    pub fn in_order(&self) -> Vec<&K> {
        traversal::in_order(self.root.as_deref())
    }

    /// Keys in node, left, right order
    pub fn pre_order(&self) -> Vec<&K> {
        traversal::pre_order(self.root.as_deref())
    }

    /// Keys in left, right, node order
    pub fn post_order(&self) -> Vec<&K> {
        traversal::post_order(self.root.as_deref())
    }

    /// Keys grouped by level, root level first
    pub fn breadth_first(&self) -> Vec<Vec<&K>> {
        traversal::breadth_first(self.root.as_deref())
    }

    fn drop_nodes(&mut self) {
        // Unlink children first so no drop recurses down a long spine
        let mut pending: Vec<Box<BstNode<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// Slot holding `key`, or the empty slot where it would be inserted
fn locate<'a, K: Ord>(mut slot: &'a mut BstLink<K>, key: &K) -> &'a mut BstLink<K> {
    loop {
        let ordering = slot.as_deref().map(|node| key.cmp(&node.key));
        slot = match (ordering, slot) {
            (Some(Ordering::Less), Some(node)) => &mut node.left,
            (Some(Ordering::Greater), Some(node)) => &mut node.right,
            (_, slot) => return slot,
        };
    }
}

/// Unlink the leftmost node below `slot`, returning its key
fn take_min<K>(mut slot: &mut BstLink<K>) -> Option<K> {
    loop {
        let descend = slot.as_deref().map(|node| node.left.is_some());
        slot = match (descend, slot) {
            (Some(true), Some(node)) => &mut node.left,
            (_, slot) => {
                let node = slot.take()?;
                let BstNode { key, right, .. } = *node;
                *slot = right;
                return Some(key);
            }
        };
    }
}

impl<K> Drop for UnbalancedTree<K> {
    fn drop(&mut self) {
        self.drop_nodes();
    }
}

impl<K> fmt::Debug for UnbalancedTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnbalancedTree")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

/// Sideways rendering, same layout as the balanced tree
impl<K: fmt::Display> fmt::Display for UnbalancedTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_sideways(self.root.as_deref(), f)
    }
}

impl<K: Ord> SearchTree<K> for UnbalancedTree<K> {
    fn insert(&mut self, key: K) -> Result<(), TreeError> {
        UnbalancedTree::insert(self, key)
    }

    fn search(&self, key: &K) -> Result<&K, TreeError> {
        UnbalancedTree::search(self, key)
    }

    fn delete(&mut self, key: &K) -> Result<(), TreeError> {
        UnbalancedTree::delete(self, key)
    }

    fn is_empty(&self) -> bool {
        UnbalancedTree::is_empty(self)
    }

    fn len(&self) -> usize {
        UnbalancedTree::len(self)
    }

    fn height(&self) -> i32 {
        UnbalancedTree::height(self)
    }

    fn in_order(&self) -> Vec<&K> {
        UnbalancedTree::in_order(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(keys: &[i32]) -> UnbalancedTree<i32> {
        let mut tree = UnbalancedTree::new();
        for &key in keys {
            tree.insert(key).unwrap();
        }
        tree
    }

    #[test]
    fn test_sorted_input_degenerates() {
        let keys: Vec<i32> = (1..=100).collect();
        let tree = tree(&keys);
        assert_eq!(tree.height(), 99);
        assert_eq!(tree.len(), 100);
    }

    #[test]
    fn test_delete_cases() {
        //      50
        //    30   70
        //   20   60 80
        let mut tree = tree(&[50, 30, 70, 20, 60, 80]);

        // Leaf
        tree.delete(&20).unwrap();
        // One child
        tree.insert(65).unwrap();
        tree.delete(&60).unwrap();
        assert_eq!(tree.pre_order(), vec![&50, &30, &70, &65, &80]);

        // Two children: successor 65 moves up
        tree.delete(&50).unwrap();
        assert_eq!(tree.pre_order(), vec![&65, &30, &70, &80]);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_errors() {
        let mut tree = tree(&[2, 1]);
        assert_eq!(tree.insert(2), Err(TreeError::DuplicateKey));
        assert_eq!(tree.search(&7), Err(TreeError::NotFound));
        assert_eq!(tree.delete(&7), Ok(()));
        assert_eq!(tree.len(), 2);

        tree.clear().unwrap();
        assert_eq!(tree.delete(&1), Err(TreeError::EmptyTree));
        assert_eq!(tree.clear(), Err(TreeError::EmptyTree));
        assert_eq!(tree.find_min(), Err(TreeError::NotFound));
    }

    #[test]
    fn test_long_spine_drops() {
        // Ascending keys build a right spine as deep as the tree is large
        let mut tree = UnbalancedTree::new();
        for key in 0..5_000u32 {
            tree.insert(key).unwrap();
        }
        assert_eq!(tree.height(), 4_999);
        assert_eq!(tree.in_order().len(), 5_000);
        drop(tree);
    }

    /// Counts output instead of storing it; a deep spine renders gigabytes of indent
    #[derive(Default)]
    struct Tally {
        bytes: usize,
        lines: usize,
        first_line: Option<String>,
        pending: String,
    }

    impl fmt::Write for Tally {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            self.bytes += s.len();
            // Keys and indent never hold a newline; each line ends with its own write
            if s.ends_with('\n') {
                self.lines += 1;
            }
            if self.first_line.is_none() {
                self.pending.push_str(s);
                if let Some(end) = self.pending.find('\n') {
                    self.first_line = Some(self.pending[..end].to_string());
                    self.pending = String::new();
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_display_of_deep_spine() {
        // Built by hand: inserting sorted keys one by one is quadratic
        const KEYS: u32 = 60_000;
        let mut root: BstLink<u32> = None;
        for key in (0..KEYS).rev() {
            root = Some(Box::new(BstNode {
                key,
                left: None,
                right: root,
            }));
        }
        let tree = UnbalancedTree {
            root,
            len: KEYS as usize,
        };
        assert_eq!(tree.height(), KEYS as i32 - 1);

        let mut tally = Tally::default();
        fmt::Write::write_fmt(&mut tally, format_args!("{tree}")).unwrap();

        // Deepest key first, indented once per level
        let deepest = KEYS - 1;
        let expected_first = format!("{}{}", "    ".repeat(deepest as usize), deepest);
        assert_eq!(tally.first_line.as_deref(), Some(expected_first.as_str()));
        assert_eq!(tally.lines, KEYS as usize);

        let expected_bytes: usize = (0..KEYS as usize)
            .map(|level| 4 * level + level.to_string().len() + 1)
            .sum();
        assert_eq!(tally.bytes, expected_bytes);
    }

    #[test]
    fn test_display_small_spine() {
        let tree = tree(&[1, 2, 3]);
        assert_eq!(tree.to_string(), "        3\n    2\n1\n");
    }
}
