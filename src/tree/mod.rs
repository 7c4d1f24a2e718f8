pub mod arena;
mod balance;
pub mod check;
pub mod iter;

use crate::error::{Error, Result};
use crate::types::{Color, Key, Side};
use arena::{Arena, Node, NodeId};
use iter::Keys;

/// An ordered container keyed by a scalar, backed by a red-black tree.
///
/// Nodes live in an index arena and relate to each other through
/// `Option<NodeId>` links, so the rebalancing code never touches raw
/// pointers or a shared nil sentinel. Duplicate keys are allowed and kept
/// as distinct nodes: an equal key always descends to the right, so a
/// later duplicate appears after an earlier one in traversal order.
///
/// Handles returned by [`insert`](RbTree::insert) and
/// [`find`](RbTree::find) stay valid until the node is erased. Erasing
/// bumps the slot's generation, so a held handle to an erased node is
/// detected rather than resolving to an unrelated node.
pub struct RbTree {
    arena: Arena,
    root: Option<NodeId>,
}

impl RbTree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        RbTree {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Number of live nodes in the tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.arena.len() == 0
    }

    /// Handle of the root node, if any.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Key stored at a handle. `None` if the handle is stale.
    pub fn key(&self, id: NodeId) -> Option<Key> {
        self.arena.get(id).map(|n| n.key)
    }

    /// Color of the node at a handle. `None` if the handle is stale.
    pub fn color(&self, id: NodeId) -> Option<Color> {
        self.arena.get(id).map(|n| n.color)
    }

    /// Insert a key, keeping duplicates as separate nodes.
    ///
    /// The new node goes in as a red leaf found by plain BST descent (equal
    /// keys descend right), then the insert fixup restores the red-black
    /// properties. Returns a handle to the new node.
    pub fn insert(&mut self, key: Key) -> NodeId {
        let mut parent = None;
        let mut side = Side::Left;
        let mut cur = self.root;
        while let Some(id) = cur {
            parent = cur;
            side = if key < self.arena.node(id).key {
                Side::Left
            } else {
                Side::Right
            };
            cur = self.arena.node(id).child(side);
        }

        let id = self.arena.alloc(Node {
            key,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        });
        match parent {
            None => self.root = Some(id),
            Some(p) => self.arena.node_mut(p).set_child(side, Some(id)),
        }

        self.insert_fixup(id);
        id
    }

    /// Look up a key. Returns the topmost node holding it, or `None`.
    pub fn find(&self, key: Key) -> Option<NodeId> {
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = self.arena.node(id);
            cur = match key.cmp(&node.key) {
                std::cmp::Ordering::Less => node.left,
                std::cmp::Ordering::Equal => return Some(id),
                std::cmp::Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Node holding the smallest key. `None` on an empty tree.
    pub fn min(&self) -> Option<NodeId> {
        self.root.map(|root| self.min_node(root))
    }

    /// Node holding the largest key. `None` on an empty tree.
    pub fn max(&self) -> Option<NodeId> {
        let mut id = self.root?;
        while let Some(right) = self.arena.node(id).right {
            id = right;
        }
        Some(id)
    }

    /// Detach and reclaim the node at `id`, restoring the red-black
    /// properties. Returns the erased key.
    ///
    /// A handle whose node was already erased yields [`Error::StaleHandle`].
    /// A handle minted by a *different* tree is a caller contract violation:
    /// it is usually caught by the generation check, but one that happens to
    /// match a live slot here names an arbitrary node of this tree.
    pub fn erase(&mut self, id: NodeId) -> Result<Key> {
        let target = self.arena.get(id).ok_or(Error::StaleHandle)?;
        let (target_left, target_right) = (target.left, target.right);
        let target_parent = target.parent;

        // Which node structurally vacates its position, the child that takes
        // that position, and the parent the fixup should repair under.
        let removed_color;
        let splice;
        let splice_parent;

        match (target_left, target_right) {
            (None, _) => {
                removed_color = self.arena.node(id).color;
                splice = target_right;
                splice_parent = target_parent;
                self.transplant(id, target_right);
            }
            (_, None) => {
                removed_color = self.arena.node(id).color;
                splice = target_left;
                splice_parent = target_parent;
                self.transplant(id, target_left);
            }
            (Some(left), Some(right)) => {
                // Two children: the successor (leftmost of the right subtree)
                // moves into the target's position and inherits its color, so
                // the color that actually leaves the tree is the successor's.
                let successor = self.min_node(right);
                removed_color = self.arena.node(successor).color;
                splice = self.arena.node(successor).right;

                if self.arena.node(successor).parent == Some(id) {
                    // Successor is the target's direct right child; its own
                    // right subtree already hangs where the fixup expects it.
                    splice_parent = Some(successor);
                } else {
                    splice_parent = self.arena.node(successor).parent;
                    let successor_right = self.arena.node(successor).right;
                    self.transplant(successor, successor_right);
                    self.arena.node_mut(successor).right = Some(right);
                    self.arena.node_mut(right).parent = Some(successor);
                }

                self.transplant(id, Some(successor));
                self.arena.node_mut(successor).left = Some(left);
                self.arena.node_mut(left).parent = Some(successor);
                let target_color = self.arena.node(id).color;
                self.arena.node_mut(successor).color = target_color;
            }
        }

        let node = self.arena.free(id);

        // Removing a red node changes no black count; removing a black one
        // leaves the splice position one black short.
        if removed_color == Color::Black {
            self.erase_fixup(splice, splice_parent);
        }
        Ok(node.key)
    }

    /// Write the keys in ascending order into `out`, stopping when the
    /// buffer is full. Returns the number of keys written.
    pub fn to_array(&self, out: &mut [Key]) -> usize {
        let mut written = 0;
        self.fill_in_order(self.root, out, &mut written);
        written
    }

    /// Iterator over the keys in ascending order.
    pub fn iter(&self) -> Keys<'_> {
        Keys::new(self)
    }

    fn fill_in_order(&self, cur: Option<NodeId>, out: &mut [Key], written: &mut usize) {
        let Some(id) = cur else { return };
        if *written >= out.len() {
            return;
        }
        let node = self.arena.node(id);
        self.fill_in_order(node.left, out, written);
        if *written < out.len() {
            out[*written] = node.key;
            *written += 1;
        }
        self.fill_in_order(node.right, out, written);
    }

    /// Leftmost descendant of `from` (the successor primitive).
    fn min_node(&self, from: NodeId) -> NodeId {
        let mut id = from;
        while let Some(left) = self.arena.node(id).left {
            id = left;
        }
        id
    }
}

impl Default for RbTree {
    fn default() -> Self {
        RbTree::new()
    }
}

impl<'a> IntoIterator for &'a RbTree {
    type Item = Key;
    type IntoIter = Keys<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Key> for RbTree {
    fn from_iter<T: IntoIterator<Item = Key>>(iter: T) -> Self {
        let mut tree = RbTree::new();
        for key in iter {
            tree.insert(key);
        }
        tree
    }
}

impl std::fmt::Debug for RbTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
