//! Insert/delete engine
//!
//! Recursive descent over owned slots. Each call reports upward whether the
//! subtree it was handed changed height:
//!   insert: `true` = the subtree grew by one level
//!   delete: `true` = the subtree shrank by one level
//! A parent folds the report into its balance factor and either absorbs it
//! or passes it on. Recursion depth is bounded by the tree height.

use std::cmp::Ordering;
use std::mem;

use super::node::{Link, Node};
use super::rotation::{rebalance_left_heavy, rebalance_right_heavy};
use crate::TreeError;

/// Key removed from a subtree plus the shrink signal
#[derive(Debug)]
pub(crate) struct Removed<K> {
    pub(crate) key: K,
    pub(crate) shrank: bool,
}

/// Insert `key` below `slot`, returning whether the subtree grew
///
/// Fails with [`TreeError::DuplicateKey`] before anything is touched:
/// balance factors are only updated on the way back up from a successful
/// leaf creation.
pub(crate) fn insert<K: Ord>(slot: &mut Link<K>, key: K) -> Result<bool, TreeError> {
    match slot {
        None => {
            *slot = Some(Box::new(Node::leaf(key)));
            Ok(true)
        }
        Some(node) => match key.cmp(&node.key) {
            Ordering::Equal => Err(TreeError::DuplicateKey),
            Ordering::Less => {
                let grew = insert(&mut node.left, key)?;
                Ok(grew && grow_left(node))
            }
            Ordering::Greater => {
                let grew = insert(&mut node.right, key)?;
                Ok(grew && grow_right(node))
            }
        },
    }
}

/// Absorb a one-level growth of the left subtree
fn grow_left<K>(node: &mut Box<Node<K>>) -> bool {
    match node.balance {
        1 => {
            node.balance = 0;
            false
        }
        0 => {
            node.balance = -1;
            true
        }
        _ => {
            node.balance = -2;
            // Rotation restores the pre-insert height
            rebalance_left_heavy(node);
            false
        }
    }
}

/// Absorb a one-level growth of the right subtree
fn grow_right<K>(node: &mut Box<Node<K>>) -> bool {
    match node.balance {
        -1 => {
            node.balance = 0;
            false
        }
        0 => {
            node.balance = 1;
            true
        }
        _ => {
            node.balance = 2;
            rebalance_right_heavy(node);
            false
        }
    }
}

/// Remove `key` from below `slot`
///
/// `None` when the key is absent; the subtree is then untouched.
pub(crate) fn delete<K: Ord>(slot: &mut Link<K>, key: &K) -> Option<Removed<K>> {
    let node = slot.as_mut()?;

    match key.cmp(&node.key) {
        Ordering::Less => {
            let removed = delete(&mut node.left, key)?;
            let shrank = removed.shrank && shrink_left(node);
            Some(Removed { key: removed.key, shrank })
        }
        Ordering::Greater => {
            let removed = delete(&mut node.right, key)?;
            let shrank = removed.shrank && shrink_right(node);
            Some(Removed { key: removed.key, shrank })
        }
        Ordering::Equal if node.left.is_some() && node.right.is_some() => {
            // Successor (leftmost of the right subtree) takes this node's place
            let successor = remove_min(&mut node.right)?;
            let key = mem::replace(&mut node.key, successor.key);
            let shrank = successor.shrank && shrink_right(node);
            Some(Removed { key, shrank })
        }
        Ordering::Equal => splice(slot),
    }
}

/// Detach the leftmost node below `slot`
fn remove_min<K>(slot: &mut Link<K>) -> Option<Removed<K>> {
    let node = slot.as_mut()?;

    if node.left.is_some() {
        let removed = remove_min(&mut node.left)?;
        let shrank = removed.shrank && shrink_left(node);
        return Some(Removed { key: removed.key, shrank });
    }

    splice(slot)
}

/// Replace the node in `slot` (at most one child) by that child
fn splice<K>(slot: &mut Link<K>) -> Option<Removed<K>> {
    let node = slot.take()?;
    let Node { key, left, right, .. } = *node;
    debug_assert!(left.is_none() || right.is_none());
    *slot = left.or(right);
    Some(Removed { key, shrank: true })
}

/// Absorb a one-level shrink of the left subtree, returning whether this
/// subtree shrank too
fn shrink_left<K>(node: &mut Box<Node<K>>) -> bool {
    match node.balance {
        -1 => {
            node.balance = 0;
            true
        }
        0 => {
            node.balance = 1;
            false
        }
        _ => {
            node.balance = 2;
            rebalance_right_heavy(node)
        }
    }
}

/// Absorb a one-level shrink of the right subtree
fn shrink_right<K>(node: &mut Box<Node<K>>) -> bool {
    match node.balance {
        1 => {
            node.balance = 0;
            true
        }
        0 => {
            node.balance = -1;
            false
        }
        _ => {
            node.balance = -2;
            rebalance_left_heavy(node)
        }
    }
}
