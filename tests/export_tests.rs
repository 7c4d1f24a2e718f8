// In-order export: ordering, truncation, and the iterator.

use rb_index::RbTree;

#[test]
fn export_empty_tree_writes_nothing() {
    let tree = RbTree::new();
    let mut keys = [7; 4];
    assert_eq!(tree.to_array(&mut keys), 0);
    // Untouched buffer.
    assert_eq!(keys, [7; 4]);

    let mut empty: [i32; 0] = [];
    assert_eq!(tree.to_array(&mut empty), 0);
}

#[test]
fn export_is_ascending_regardless_of_insert_order() {
    let tree: RbTree = [9, 1, 8, 2, 7, 3, 6, 4, 5].into_iter().collect();
    let mut keys = [0; 9];
    assert_eq!(tree.to_array(&mut keys), 9);
    assert_eq!(keys, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn export_truncates_at_capacity() {
    let tree: RbTree = [5, 3, 8, 1, 4].into_iter().collect();

    // Capacity smaller than the tree: the smallest keys win, silently.
    let mut keys = [0; 3];
    assert_eq!(tree.to_array(&mut keys), 3);
    assert_eq!(keys, [1, 3, 4]);
}

#[test]
fn export_with_excess_capacity_reports_true_count() {
    let tree: RbTree = [2, 1, 3].into_iter().collect();
    let mut keys = [0; 10];
    assert_eq!(tree.to_array(&mut keys), 3);
    assert_eq!(&keys[..3], &[1, 2, 3]);
}

#[test]
fn iterator_matches_export() {
    let tree: RbTree = (0..100).rev().collect();

    let from_iter: Vec<_> = tree.iter().collect();
    let mut buf = vec![0; 100];
    let n = tree.to_array(&mut buf);
    assert_eq!(from_iter, &buf[..n]);

    let iter = tree.iter();
    assert_eq!(iter.len(), 100);
}

#[test]
fn iterator_covers_duplicates() {
    let tree: RbTree = [3, 1, 3, 2, 3].into_iter().collect();
    let keys: Vec<_> = (&tree).into_iter().collect();
    assert_eq!(keys, vec![1, 2, 3, 3, 3]);
}
