//! Traversal layer
//!
//! Finite, restartable sequence producers over any binary node:
//!   In-order: ascending keys (the primary correctness oracle)
//!   Pre-order / post-order: shape-revealing orders
//!   Breadth-first: one `Vec` per level, the level boundary is the `Vec` edge
//!
//! All producers walk with an explicit stack or queue, so degenerate
//! (list-shaped) unbalanced trees cannot exhaust the call stack.

mod render;

pub use render::{render_levels, render_sideways};

use std::collections::VecDeque;

/// Read-only view of a binary tree vertex
///
/// Implemented by the node types of both trees so they share one
/// traversal implementation.
pub trait BinaryNode {
    /// Ordered key stored in the node
    type Key;

    /// Key held by this node
    fn key(&self) -> &Self::Key;

    /// Left child, if any
    fn left(&self) -> Option<&Self>;

    /// Right child, if any
    fn right(&self) -> Option<&Self>;
}

/// Keys in ascending order
pub fn in_order<N: BinaryNode>(root: Option<&N>) -> Vec<&N::Key> {
    let mut keys = Vec::new();
    let mut stack = Vec::new();
    let mut current = root;

    while current.is_some() || !stack.is_empty() {
        // Slide down the left spine, remembering the path
        while let Some(node) = current {
            stack.push(node);
            current = node.left();
        }

        if let Some(node) = stack.pop() {
            keys.push(node.key());
            current = node.right();
        }
    }

    keys
}

/// Keys in node, left, right order
pub fn pre_order<N: BinaryNode>(root: Option<&N>) -> Vec<&N::Key> {
    let mut keys = Vec::new();
    let mut stack: Vec<&N> = root.into_iter().collect();

    while let Some(node) = stack.pop() {
        keys.push(node.key());
        // Right first so the left subtree is popped first
        stack.extend(node.right());
        stack.extend(node.left());
    }

    keys
}

/// Keys in left, right, node order
pub fn post_order<N: BinaryNode>(root: Option<&N>) -> Vec<&N::Key> {
    // Node, right, left reversed is left, right, node
    let mut keys = Vec::new();
    let mut stack: Vec<&N> = root.into_iter().collect();

    while let Some(node) = stack.pop() {
        keys.push(node.key());
        stack.extend(node.left());
        stack.extend(node.right());
    }

    keys.reverse();
    keys
}

/// Keys level by level, left to right within a level
pub fn breadth_first<N: BinaryNode>(root: Option<&N>) -> Vec<Vec<&N::Key>> {
    let mut levels = Vec::new();
    let mut queue: VecDeque<&N> = root.into_iter().collect();

    while !queue.is_empty() {
        let level_size = queue.len();
        let mut level = Vec::with_capacity(level_size);

        for _ in 0..level_size {
            if let Some(node) = queue.pop_front() {
                level.push(node.key());
                queue.extend(node.left());
                queue.extend(node.right());
            }
        }

        levels.push(level);
    }

    levels
}

/// Height measured by visiting every level
///
/// `-1` for an absent subtree, `0` for a leaf. O(n): the balanced tree only
/// uses this for validation, never on the insert/delete path.
pub fn measure_height<N: BinaryNode>(root: Option<&N>) -> i32 {
    let mut height = -1;
    let mut queue: VecDeque<&N> = root.into_iter().collect();

    while !queue.is_empty() {
        height += 1;
        for _ in 0..queue.len() {
            if let Some(node) = queue.pop_front() {
                queue.extend(node.left());
                queue.extend(node.right());
            }
        }
    }

    height
}
