//! Rebalancing internals: rotation, transplant, and the insert/erase fixup
//! loops. The mirrored left/right cases of the classic algorithm share one
//! code path through the [`Side`] parameter.

use super::RbTree;
use super::arena::NodeId;
use crate::types::{Color, Side};

impl RbTree {
    /// Rotate the subtree at `pivot` in direction `dir`: the pivot's child
    /// on the opposite side comes up, and the pivot becomes that child's
    /// `dir`-side child. In-order key sequence is unchanged.
    ///
    /// Re-links three parents: the moved middle subtree's, the pivot's, and
    /// the raised child's (including the root slot when the pivot was root).
    /// The caller must ensure the opposite-side child exists.
    pub(super) fn rotate(&mut self, pivot: NodeId, dir: Side) {
        let parent = self.arena.node(pivot).parent;
        let Some(up) = self.arena.node(pivot).child(dir.opposite()) else {
            debug_assert!(false, "rotation pivot has no child to raise");
            return;
        };
        let middle = self.arena.node(up).child(dir);

        self.arena.node_mut(pivot).set_child(dir.opposite(), middle);
        if let Some(m) = middle {
            self.arena.node_mut(m).parent = Some(pivot);
        }

        self.arena.node_mut(up).set_child(dir, Some(pivot));
        self.arena.node_mut(pivot).parent = Some(up);
        self.arena.node_mut(up).parent = parent;

        match parent {
            Some(p) => {
                let side = if self.arena.node(p).left == Some(pivot) {
                    Side::Left
                } else {
                    Side::Right
                };
                self.arena.node_mut(p).set_child(side, Some(up));
            }
            None => self.root = Some(up),
        }
    }

    /// Replace the subtree rooted at `origin`, as seen from its parent (or
    /// the root slot), with `replacement`. `origin`'s own links are left
    /// untouched for the caller to read afterwards.
    pub(super) fn transplant(&mut self, origin: NodeId, replacement: Option<NodeId>) {
        let parent = self.arena.node(origin).parent;
        match parent {
            None => self.root = replacement,
            Some(p) => {
                let side = if self.arena.node(p).left == Some(origin) {
                    Side::Left
                } else {
                    Side::Right
                };
                self.arena.node_mut(p).set_child(side, replacement);
            }
        }
        if let Some(r) = replacement {
            self.arena.node_mut(r).parent = parent;
        }
    }

    /// Restore the red-black properties after linking a red leaf at `cur`.
    ///
    /// The only possible violation on entry is a red parent. Each iteration
    /// either recolors and moves the violation two levels up (red uncle), or
    /// rotates it away and terminates (black uncle, one or two rotations
    /// depending on whether `cur` is the inner or outer grandchild).
    pub(super) fn insert_fixup(&mut self, mut cur: NodeId) {
        loop {
            let Some(mut parent) = self.arena.node(cur).parent else {
                break;
            };
            if self.arena.node(parent).color == Color::Black {
                break;
            }
            // A red parent is never the root, so the grandparent exists.
            let Some(grand) = self.arena.node(parent).parent else {
                break;
            };
            let side = if self.arena.node(grand).left == Some(parent) {
                Side::Left
            } else {
                Side::Right
            };
            let uncle = self.arena.node(grand).child(side.opposite());

            match uncle {
                Some(u) if self.arena.node(u).color == Color::Red => {
                    // Red uncle: push the blackness down from the grandparent
                    // and repeat from there.
                    self.arena.node_mut(parent).color = Color::Black;
                    self.arena.node_mut(u).color = Color::Black;
                    self.arena.node_mut(grand).color = Color::Red;
                    cur = grand;
                }
                _ => {
                    if self.arena.node(parent).child(side.opposite()) == Some(cur) {
                        // Inner grandchild: rotate the parent down so the
                        // chain cur-parent-grand becomes a straight line.
                        self.rotate(parent, side);
                        parent = cur;
                    }
                    self.arena.node_mut(parent).color = Color::Black;
                    self.arena.node_mut(grand).color = Color::Red;
                    self.rotate(grand, side.opposite());
                    // The repaired node's parent is now black.
                    break;
                }
            }
        }
        if let Some(root) = self.root {
            self.arena.node_mut(root).color = Color::Black;
        }
    }

    /// Restore the red-black properties after splicing out a black node.
    ///
    /// `cur` is the child that took the vacated position and now carries an
    /// extra black; it may be absent, which is why its parent is passed
    /// separately. The loop pushes the extra black up (black sibling with
    /// black children) or resolves it with at most two rotations.
    pub(super) fn erase_fixup(&mut self, mut cur: Option<NodeId>, mut parent: Option<NodeId>) {
        while let Some(p) = parent {
            if cur.is_some_and(|n| self.arena.node(n).color == Color::Red) {
                // A red node absorbs the extra black.
                break;
            }
            let side = if self.arena.node(p).left == cur {
                Side::Left
            } else {
                Side::Right
            };
            // A black deficit on one side means the other side's subtree has
            // positive black height, so the sibling exists on a valid tree.
            let Some(mut sibling) = self.arena.node(p).child(side.opposite()) else {
                debug_assert!(false, "black deficit without a sibling");
                break;
            };

            if self.arena.node(sibling).color == Color::Red {
                // Red sibling: rotate it up so the new sibling is black.
                self.arena.node_mut(sibling).color = Color::Black;
                self.arena.node_mut(p).color = Color::Red;
                self.rotate(p, side);
                let Some(s) = self.arena.node(p).child(side.opposite()) else {
                    debug_assert!(false, "red sibling had no inner child");
                    break;
                };
                sibling = s;
            }

            let near = self.arena.node(sibling).child(side);
            let far = self.arena.node(sibling).child(side.opposite());
            let near_black = !near.is_some_and(|n| self.arena.node(n).color == Color::Red);
            let far_black = !far.is_some_and(|n| self.arena.node(n).color == Color::Red);

            if near_black && far_black {
                // The sibling can give up one black; the deficit moves up.
                self.arena.node_mut(sibling).color = Color::Red;
                cur = Some(p);
                parent = self.arena.node(p).parent;
                continue;
            }

            if far_black {
                // Near child is red: rotate it over the sibling so the red
                // ends up on the far side.
                if let Some(n) = near {
                    self.arena.node_mut(n).color = Color::Black;
                }
                self.arena.node_mut(sibling).color = Color::Red;
                self.rotate(sibling, side.opposite());
                let Some(s) = self.arena.node(p).child(side.opposite()) else {
                    debug_assert!(false, "rotation lost the sibling");
                    break;
                };
                sibling = s;
            }

            // Far child is red: one rotation at the parent settles the
            // deficit for good.
            let parent_color = self.arena.node(p).color;
            self.arena.node_mut(sibling).color = parent_color;
            self.arena.node_mut(p).color = Color::Black;
            if let Some(f) = self.arena.node(sibling).child(side.opposite()) {
                self.arena.node_mut(f).color = Color::Black;
            }
            self.rotate(p, side);
            cur = self.root;
            parent = None;
        }
        if let Some(n) = cur {
            self.arena.node_mut(n).color = Color::Black;
        }
    }
}
