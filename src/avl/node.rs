//! AVL tree node
//!
//! Node = key + two exclusively owned child slots + balance factor
//!   balance = height(right) - height(left)
//!   height(absent) = -1, height(leaf) = 0

use std::fmt;

use crate::traversal::BinaryNode;

/// Owned child slot
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// Tree vertex holding a key and its balance factor
///
/// Nodes are only reachable through shared borrows of their tree; all
/// mutation goes through [`AvlTree`](super::AvlTree).
#[derive(Debug, Clone)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
    pub(crate) balance: i8,
}

impl<K> Node<K> {
    /// Fresh leaf, balanced by definition
    pub(crate) fn leaf(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            balance: 0,
        }
    }

    /// Key stored in this node
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Left subtree (keys strictly less than this one)
    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    /// Right subtree (keys strictly greater than this one)
    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    /// Stored `height(right) - height(left)`
    #[inline]
    pub fn balance_factor(&self) -> i8 {
        self.balance
    }

    /// Check if both child slots are empty
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<K> BinaryNode for Node<K> {
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

impl<K: fmt::Display> fmt::Display for Node<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (bf={})", self.key, self.balance)
    }
}
