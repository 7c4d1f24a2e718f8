// Property soak: random insert/erase interleavings against a sorted-vec
// model, verifying the red-black structure after every mutation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rb_index::tree::check::verify;
use rb_index::{Key, RbTree};

fn model_remove(model: &mut Vec<Key>, key: Key) -> bool {
    match model.binary_search(&key) {
        Ok(pos) => {
            model.remove(pos);
            true
        }
        Err(_) => false,
    }
}

#[test]
fn random_ops_match_sorted_model() {
    let mut rng = StdRng::seed_from_u64(0xB1AC4);
    let mut tree = RbTree::new();
    let mut model: Vec<Key> = Vec::new();

    for step in 0..2_000 {
        let key = rng.gen_range(0..256);
        // Bias toward inserts so the tree actually grows.
        if rng.gen_ratio(3, 5) {
            tree.insert(key);
            let pos = model.partition_point(|&k| k <= key);
            model.insert(pos, key);
        } else if let Some(id) = tree.find(key) {
            assert_eq!(tree.erase(id), Ok(key));
            assert!(model_remove(&mut model, key));
        } else {
            assert!(!model.contains(&key));
        }

        verify(&tree).unwrap_or_else(|e| panic!("step {step}: {e}"));
        assert_eq!(tree.len(), model.len());
    }

    let keys: Vec<_> = tree.iter().collect();
    assert_eq!(keys, model);
}

#[test]
fn drain_after_random_fill() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut tree = RbTree::new();
    let mut keys: Vec<Key> = (0..500).map(|_| rng.gen_range(-1000..1000)).collect();
    for &key in &keys {
        tree.insert(key);
    }

    // Erase in a shuffled order, re-verifying as the tree shrinks.
    for i in (1..keys.len()).rev() {
        keys.swap(i, rng.gen_range(0..=i));
    }
    for key in keys {
        let id = tree.find(key).expect("inserted key must be findable");
        assert_eq!(tree.erase(id), Ok(key));
        verify(&tree).unwrap();
    }
    assert!(tree.is_empty());
    assert_eq!(tree.iter().count(), 0);
}

#[test]
fn export_stays_sorted_under_churn() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut tree = RbTree::new();
    let mut buf = vec![0; 512];

    for _ in 0..1_000 {
        tree.insert(rng.gen_range(0..64));
        if tree.len() > 256 {
            let key = rng.gen_range(0..64);
            if let Some(id) = tree.find(key) {
                tree.erase(id).unwrap();
            }
        }

        let n = tree.to_array(&mut buf);
        assert_eq!(n, tree.len().min(buf.len()));
        assert!(buf[..n].is_sorted());
    }
}
