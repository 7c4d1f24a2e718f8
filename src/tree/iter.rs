use super::RbTree;
use super::arena::NodeId;
use crate::types::Key;
use std::iter::FusedIterator;

/// In-order iterator over the keys of an [`RbTree`], ascending.
///
/// Keeps an explicit stack of the left spine instead of recursing, so
/// iteration is O(n) total with O(log n) transient space.
pub struct Keys<'a> {
    tree: &'a RbTree,
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a> Keys<'a> {
    pub(super) fn new(tree: &'a RbTree) -> Self {
        let mut iter = Keys {
            tree,
            stack: Vec::new(),
            remaining: tree.len(),
        };
        iter.push_left_spine(tree.root());
        iter
    }

    fn push_left_spine(&mut self, mut cur: Option<NodeId>) {
        while let Some(id) = cur {
            self.stack.push(id);
            cur = self.tree.arena.node(id).left;
        }
    }
}

impl Iterator for Keys<'_> {
    type Item = Key;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.arena.node(id);
        self.push_left_spine(node.right);
        self.remaining -= 1;
        Some(node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Keys<'_> {}

impl FusedIterator for Keys<'_> {}
