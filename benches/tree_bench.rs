use criterion::{Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rb_index::RbTree;
use std::hint::black_box;

const N: usize = 10_000;

fn shuffled_keys(n: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(1);
    let mut keys: Vec<i32> = (0..n as i32).collect();
    for i in (1..keys.len()).rev() {
        keys.swap(i, rng.gen_range(0..=i));
    }
    keys
}

fn bench_insert(c: &mut Criterion) {
    let keys = shuffled_keys(N);

    c.bench_function("insert_10k_shuffled", |b| {
        b.iter(|| {
            let mut tree = RbTree::new();
            for &key in &keys {
                tree.insert(black_box(key));
            }
            tree
        })
    });

    c.bench_function("insert_10k_ascending", |b| {
        b.iter(|| {
            let mut tree = RbTree::new();
            for key in 0..N as i32 {
                tree.insert(black_box(key));
            }
            tree
        })
    });
}

fn bench_find(c: &mut Criterion) {
    let keys = shuffled_keys(N);
    let tree: RbTree = keys.iter().copied().collect();

    c.bench_function("find_hit", |b| {
        let mut i = 0;
        b.iter(|| {
            let key = keys[i % keys.len()];
            i += 1;
            black_box(tree.find(black_box(key)))
        })
    });

    c.bench_function("find_miss", |b| {
        b.iter(|| black_box(tree.find(black_box(-1))))
    });
}

fn bench_erase(c: &mut Criterion) {
    let keys = shuffled_keys(N);

    c.bench_function("fill_then_drain_10k", |b| {
        b.iter(|| {
            let mut tree = RbTree::new();
            let handles: Vec<_> = keys.iter().map(|&k| tree.insert(k)).collect();
            for id in handles {
                tree.erase(id).unwrap();
            }
            tree
        })
    });
}

fn bench_export(c: &mut Criterion) {
    let tree: RbTree = shuffled_keys(N).into_iter().collect();
    let mut buf = vec![0; N];

    c.bench_function("to_array_10k", |b| {
        b.iter(|| black_box(tree.to_array(black_box(&mut buf))))
    });
}

criterion_group!(benches, bench_insert, bench_find, bench_erase, bench_export);
criterion_main!(benches);
