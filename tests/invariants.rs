//! Randomized invariant checks
//!
//! Every insert and delete is followed by a full recount of heights, so a
//! height-changed signal that stops one level too early shows up as a
//! stored factor that disagrees with the measured one.

mod common;
use common::*;

use std::collections::BTreeSet;

use avl_store::{AvlTree, TreeError};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Step {
    Insert(i64),
    Delete(i64),
}

fn steps() -> impl Strategy<Value = Vec<Step>> {
    proptest::collection::vec(
        prop_oneof![
            (0i64..64).prop_map(Step::Insert),
            (0i64..64).prop_map(Step::Delete),
        ],
        1..200,
    )
}

proptest! {
    #[test]
    fn balance_holds_after_every_operation(ops in steps()) {
        let mut tree = AvlTree::new();
        let mut model = BTreeSet::new();

        for step in ops {
            match step {
                Step::Insert(key) => {
                    let result = tree.insert(key);
                    if model.insert(key) {
                        prop_assert_eq!(result, Ok(()));
                    } else {
                        prop_assert_eq!(result, Err(TreeError::DuplicateKey));
                    }
                }
                Step::Delete(key) => {
                    let result = tree.delete(&key);
                    if model.is_empty() {
                        prop_assert_eq!(result, Err(TreeError::EmptyTree));
                    } else {
                        prop_assert_eq!(result, Ok(()));
                        model.remove(&key);
                    }
                }
            }

            check_balance(&tree);
            tree.assert_valid();
            prop_assert_eq!(keys(&tree), model.iter().copied().collect::<Vec<_>>());
            prop_assert_eq!(tree.len(), model.len());
        }
    }

    #[test]
    fn insert_all_then_delete_all(keys in proptest::collection::hash_set(-1000i64..1000, 1..150), seed in any::<u64>()) {
        let inserted: Vec<i64> = keys.into_iter().collect();
        let mut tree = AvlTree::new();
        for &key in &inserted {
            tree.insert(key).unwrap();
            check_balance(&tree);
        }
        prop_assert!(tree.height() <= tree.height_bound());

        // Delete in a different order than insertion
        let mut doomed = inserted.clone();
        let len = doomed.len();
        doomed.rotate_left((seed as usize) % len);
        doomed.reverse();

        for key in doomed {
            tree.delete(&key).unwrap();
            check_balance(&tree);
            prop_assert!(!tree.contains(&key));
        }

        prop_assert!(tree.is_empty());
        prop_assert_eq!(tree.height(), -1);
        prop_assert_eq!(tree.delete(&0), Err(TreeError::EmptyTree));
    }

    #[test]
    fn traversals_agree_on_contents(keys in proptest::collection::vec(any::<i64>(), 0..100)) {
        let mut tree = AvlTree::new();
        for key in keys {
            let _ = tree.insert(key);
        }

        let mut in_order = keys_of(tree.in_order());
        let mut pre_order = keys_of(tree.pre_order());
        let mut post_order = keys_of(tree.post_order());
        let mut levels: Vec<i64> = tree.breadth_first().into_iter().flatten().copied().collect();

        prop_assert!(in_order.windows(2).all(|pair| pair[0] < pair[1]), "in-order must be strictly ascending");
        prop_assert_eq!(tree.breadth_first().len() as i32, tree.height() + 1);

        pre_order.sort_unstable();
        post_order.sort_unstable();
        levels.sort_unstable();
        in_order.sort_unstable();
        prop_assert_eq!(&pre_order, &in_order);
        prop_assert_eq!(&post_order, &in_order);
        prop_assert_eq!(&levels, &in_order);

        // Pre-order starts and post-order ends at the root
        if let Some(root) = tree.root() {
            prop_assert_eq!(tree.pre_order().first().copied(), Some(root.key()));
            prop_assert_eq!(tree.post_order().last().copied(), Some(root.key()));
        }
    }
}

fn keys_of(keys: Vec<&i64>) -> Vec<i64> {
    keys.into_iter().copied().collect()
}
