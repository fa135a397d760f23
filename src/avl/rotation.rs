//! Rotation primitives and the rebalancer
//!
//! Rotations move ownership of subtrees between slots; nothing is copied.
//! Balance factors after a rotation are derived from the factors before it,
//! so every rotation is O(1) regardless of subtree size.
//!
//! Left rotation at `a` with right child `b`:
//!   a' = a - 1 - max(b, 0)
//!   b' = b - 1 + min(a', 0)
//! Right rotation at `a` with left child `b`:
//!   a' = a + 1 - min(b, 0)
//!   b' = b + 1 + max(a', 0)

use std::mem;

use tracing::trace;

use super::node::Node;

/// Promote the right child into `node`'s place
///
/// After the call `node` holds the former right child, and the former
/// root hangs off its left slot.
pub(crate) fn rotate_left<K>(node: &mut Box<Node<K>>) {
    let Some(mut pivot) = node.right.take() else {
        debug_assert!(false, "left rotation needs a right child");
        return;
    };

    node.right = pivot.left.take();

    let a = node.balance - 1 - pivot.balance.max(0);
    let b = pivot.balance - 1 + a.min(0);
    node.balance = a;
    pivot.balance = b;

    mem::swap(node, &mut pivot);
    node.left = Some(pivot);
}

/// Promote the left child into `node`'s place
pub(crate) fn rotate_right<K>(node: &mut Box<Node<K>>) {
    let Some(mut pivot) = node.left.take() else {
        debug_assert!(false, "right rotation needs a left child");
        return;
    };

    node.left = pivot.right.take();

    let a = node.balance + 1 - pivot.balance.min(0);
    let b = pivot.balance + 1 + a.max(0);
    node.balance = a;
    pivot.balance = b;

    mem::swap(node, &mut pivot);
    node.right = Some(pivot);
}

/// Post-rotation factors for a right-left double rotation
///
/// Keyed on the grandchild `g = node.right.left`; returns
/// `(node.bf, node.right.bf)`. The grandchild always ends balanced.
fn right_left_factors(grandchild: i8) -> (i8, i8) {
    match grandchild {
        -1 => (0, 1),
        1 => (-1, 0),
        _ => (0, 0),
    }
}

/// Post-rotation factors for a left-right double rotation
///
/// Keyed on `g = node.left.right`; returns `(node.bf, node.left.bf)`.
fn left_right_factors(grandchild: i8) -> (i8, i8) {
    match grandchild {
        1 => (0, -1),
        -1 => (1, 0),
        _ => (0, 0),
    }
}

/// Repair a node whose balance factor is +2
///
/// Returns whether the subtree ended up one level shorter than it was while
/// unbalanced. Insertion never cares (the rotation undoes its growth);
/// deletion propagates the answer upward.
pub(crate) fn rebalance_right_heavy<K>(node: &mut Box<Node<K>>) -> bool {
    debug_assert_eq!(node.balance, 2);

    let Some(right) = node.right.as_deref() else {
        debug_assert!(false, "right-heavy node without a right child");
        return false;
    };

    if right.balance >= 0 {
        // A level right child only occurs on deletion and keeps the height
        let shrinks = right.balance > 0;
        trace!(child_balance = right.balance, "single left rotation");
        rotate_left(node);
        return shrinks;
    }

    let grandchild = right.left.as_ref().map_or(0, |g| g.balance);
    let (node_bf, right_bf) = right_left_factors(grandchild);
    trace!(grandchild, "double right-left rotation");

    if let Some(right) = node.right.as_mut() {
        rotate_right(right);
    }
    rotate_left(node);

    node.balance = 0;
    if let Some(left) = node.left.as_mut() {
        left.balance = node_bf;
    }
    if let Some(right) = node.right.as_mut() {
        right.balance = right_bf;
    }
    true
}

/// Repair a node whose balance factor is -2
///
/// Mirror image of [`rebalance_right_heavy`].
pub(crate) fn rebalance_left_heavy<K>(node: &mut Box<Node<K>>) -> bool {
    debug_assert_eq!(node.balance, -2);

    let Some(left) = node.left.as_deref() else {
        debug_assert!(false, "left-heavy node without a left child");
        return false;
    };

    if left.balance <= 0 {
        let shrinks = left.balance < 0;
        trace!(child_balance = left.balance, "single right rotation");
        rotate_right(node);
        return shrinks;
    }

    let grandchild = left.right.as_ref().map_or(0, |g| g.balance);
    let (node_bf, left_bf) = left_right_factors(grandchild);
    trace!(grandchild, "double left-right rotation");

    if let Some(left) = node.left.as_mut() {
        rotate_left(left);
    }
    rotate_right(node);

    node.balance = 0;
    if let Some(right) = node.right.as_mut() {
        right.balance = node_bf;
    }
    if let Some(left) = node.left.as_mut() {
        left.balance = left_bf;
    }
    true
}
