//! Structural verification. Walks the whole tree and reports the first
//! red-black property that fails. Normal operations never call this; the
//! property tests run it after every mutation, and it is handy when
//! debugging a bad rebalancing sequence.

use super::RbTree;
use super::arena::NodeId;
use crate::error::{Error, Result};
use crate::types::Color;

/// Verify every structural invariant of the tree:
/// root blackness, no red node with a red child, equal black count on every
/// root-to-absence path, non-decreasing in-order key sequence, parent links
/// mirroring child links, and `len` matching the number of reachable nodes.
pub fn verify(tree: &RbTree) -> Result<()> {
    let Some(root) = tree.root() else {
        if tree.len() != 0 {
            return Err(violation(format!(
                "empty root but len is {}",
                tree.len()
            )));
        }
        return Ok(());
    };

    if tree.arena.node(root).color != Color::Black {
        return Err(violation("root is red".to_string()));
    }
    if tree.arena.node(root).parent.is_some() {
        return Err(violation("root has a parent".to_string()));
    }

    let mut count = 0;
    walk(tree, root, &mut count)?;
    if count != tree.len() {
        return Err(violation(format!(
            "len is {} but {} nodes are reachable",
            tree.len(),
            count
        )));
    }

    let keys: Vec<_> = tree.iter().collect();
    if !keys.is_sorted() {
        return Err(violation("in-order keys are not sorted".to_string()));
    }

    Ok(())
}

/// Recursive sweep. Returns the black height of the subtree at `id`
/// (absent children count as height zero).
fn walk(tree: &RbTree, id: NodeId, count: &mut usize) -> Result<usize> {
    *count += 1;
    let node = tree.arena.node(id);

    for child in [node.left, node.right] {
        let Some(c) = child else { continue };
        if tree.arena.node(c).parent != Some(id) {
            return Err(violation(format!(
                "child of key {} has a mismatched parent link",
                node.key
            )));
        }
        if node.color == Color::Red && tree.arena.node(c).color == Color::Red {
            return Err(violation(format!("red-red edge at key {}", node.key)));
        }
    }

    let left_height = match node.left {
        Some(l) => walk(tree, l, count)?,
        None => 0,
    };
    let right_height = match node.right {
        Some(r) => walk(tree, r, count)?,
        None => 0,
    };
    if left_height != right_height {
        return Err(violation(format!(
            "black height differs under key {}: {} vs {}",
            node.key, left_height, right_height
        )));
    }

    let own = if node.color == Color::Black { 1 } else { 0 };
    Ok(left_height + own)
}

fn violation(msg: String) -> Error {
    Error::InvariantViolation(msg)
}
