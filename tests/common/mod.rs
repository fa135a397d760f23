#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use avl_store::{AvlTree, Node};

fn snapshot_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
}

pub fn assert_snapshot(name: &str, actual: &str) {
    let path = snapshot_root().join(name);
    if std::env::var("AVL_STORE_UPDATE_SNAPSHOTS").is_ok() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create snapshot directory");
        }
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected =
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("snapshot {:?} not found", path));
    if normalize(&expected) != normalize(actual) {
        panic!(
            "Snapshot mismatch for {:?}. Set AVL_STORE_UPDATE_SNAPSHOTS=1 to regenerate.\nExpected:\n{}\nActual:\n{}",
            path,
            expected,
            actual
        );
    }
}

fn normalize(input: &str) -> String {
    input.replace("\r\n", "\n")
}

/// Build a tree by inserting `keys` in order
pub fn avl_from(keys: &[i64]) -> AvlTree<i64> {
    let mut tree = AvlTree::new();
    for &key in keys {
        tree.insert(key).expect("keys are distinct");
    }
    tree
}

/// Recompute every height from scratch and compare with the stored factors
///
/// Independent of `AvlTree::assert_valid` so a bug in one cannot hide in the other.
pub fn check_balance(tree: &AvlTree<i64>) {
    fn height(node: Option<&Node<i64>>) -> i32 {
        match node {
            None => -1,
            Some(node) => {
                let left = height(node.left());
                let right = height(node.right());

                let measured = right - left;
                assert_eq!(
                    i32::from(node.balance_factor()),
                    measured,
                    "stored factor of {} disagrees with measured heights",
                    node.key()
                );
                assert!(measured.abs() <= 1, "node {} is out of balance ({})", node.key(), measured);

                1 + left.max(right)
            }
        }
    }

    let measured = height(tree.root());
    assert_eq!(tree.height(), measured, "height() disagrees with the measured height");
}

/// In-order keys as owned values
pub fn keys(tree: &AvlTree<i64>) -> Vec<i64> {
    tree.in_order().into_iter().copied().collect()
}
