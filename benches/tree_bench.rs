//! Insertion and deletion throughput, balanced vs unbalanced

use avl_store::{AvlTree, SearchTree, UnbalancedTree};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const KEYS: i64 = 10_000;
const SPINE_KEYS: i64 = 2_000;

fn shuffled_keys() -> Vec<i64> {
    let mut keys: Vec<i64> = (0..KEYS).collect();
    keys.shuffle(&mut StdRng::seed_from_u64(0xbe7c));
    keys
}

fn fill<T: SearchTree<i64> + Default>(keys: &[i64]) -> T {
    let mut tree = T::default();
    for &key in keys {
        tree.insert(key).unwrap();
    }
    tree
}

fn benchmark_inserts(c: &mut Criterion) {
    let sorted: Vec<i64> = (0..KEYS).collect();
    let shuffled = shuffled_keys();

    c.bench_function("avl_insert_sorted_10k", |b| {
        b.iter(|| black_box(fill::<AvlTree<i64>>(&sorted)));
    });
    c.bench_function("avl_insert_shuffled_10k", |b| {
        b.iter(|| black_box(fill::<AvlTree<i64>>(&shuffled)));
    });
    c.bench_function("bst_insert_shuffled_10k", |b| {
        b.iter(|| black_box(fill::<UnbalancedTree<i64>>(&shuffled)));
    });

    // Sorted input turns the unbalanced tree into a list: quadratic, so fewer keys
    let spine: Vec<i64> = (0..SPINE_KEYS).collect();
    c.bench_function("bst_insert_sorted_2k", |b| {
        b.iter(|| black_box(fill::<UnbalancedTree<i64>>(&spine)));
    });
    c.bench_function("avl_insert_sorted_2k", |b| {
        b.iter(|| black_box(fill::<AvlTree<i64>>(&spine)));
    });
}

fn benchmark_deletes(c: &mut Criterion) {
    let keys = shuffled_keys();
    let mut doomed = keys.clone();
    doomed.reverse();

    c.bench_function("avl_insert_then_delete_10k", |b| {
        b.iter_batched(
            || fill::<AvlTree<i64>>(&keys),
            |mut tree| {
                for key in &doomed {
                    tree.delete(key).unwrap();
                }
                black_box(tree)
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, benchmark_inserts, benchmark_deletes);
criterion_main!(benches);
