use crate::types::{Color, Key, Side};

/// Handle to a node in the arena.
///
/// A handle is an index plus the generation of the slot it was minted for.
/// Erasing a node bumps its slot's generation, so any handle to the erased
/// node stops matching and is rejected instead of silently naming whatever
/// node reuses the slot later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

/// A single tree node.
///
/// All three relations are `Option<NodeId>`: `None` is "no child" / "no
/// parent". There is no shared nil sentinel to mutate by accident — absence
/// is a value, not a node.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) key: Key,
    pub(crate) color: Color,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl Node {
    pub(crate) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }
}

enum Entry {
    Occupied(Node),
    /// Free-list link to the next vacant slot.
    Vacant(Option<u32>),
}

struct Slot {
    generation: u32,
    entry: Entry,
}

/// Index-based node storage. The arena exclusively owns every node of one
/// tree; erased slots go on a free list and are reused by later inserts.
/// Dropping the arena frees everything at once — no traversal needed.
pub(crate) struct Arena {
    slots: Vec<Slot>,
    free_head: Option<u32>,
    live: usize,
}

impl Arena {
    pub(crate) fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free_head: None,
            live: 0,
        }
    }

    /// Number of live nodes.
    pub(crate) fn len(&self) -> usize {
        self.live
    }

    /// Store a node, reusing a vacant slot if one is available.
    pub(crate) fn alloc(&mut self, node: Node) -> NodeId {
        self.live += 1;
        match self.free_head {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                let Entry::Vacant(next) = slot.entry else {
                    unreachable!("free list points at an occupied slot");
                };
                self.free_head = next;
                slot.entry = Entry::Occupied(node);
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    entry: Entry::Occupied(node),
                });
                NodeId {
                    index,
                    generation: 0,
                }
            }
        }
    }

    /// Release a slot: bump its generation (invalidating outstanding handles)
    /// and push it on the free list. Returns the stored node.
    pub(crate) fn free(&mut self, id: NodeId) -> Node {
        let slot = &mut self.slots[id.index as usize];
        debug_assert_eq!(slot.generation, id.generation);
        let entry = std::mem::replace(&mut slot.entry, Entry::Vacant(self.free_head));
        let Entry::Occupied(node) = entry else {
            unreachable!("freeing a vacant slot");
        };
        slot.generation = slot.generation.wrapping_add(1);
        self.free_head = Some(id.index);
        self.live -= 1;
        node
    }

    /// Checked lookup: `None` for out-of-range, vacant, or stale handles.
    pub(crate) fn get(&self, id: NodeId) -> Option<&Node> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        match &slot.entry {
            Entry::Occupied(node) => Some(node),
            Entry::Vacant(_) => None,
        }
    }

    /// Borrow a node known to be live. Internal traversal code only ever
    /// holds handles reachable from the root, which are live by construction.
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        match self.get(id) {
            Some(node) => node,
            None => panic!("internal handle is not live"),
        }
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        let slot = &mut self.slots[id.index as usize];
        debug_assert_eq!(slot.generation, id.generation);
        match &mut slot.entry {
            Entry::Occupied(node) => node,
            Entry::Vacant(_) => panic!("internal handle is not live"),
        }
    }
}
