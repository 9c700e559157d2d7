//! Node store.
//!
//! The store owns every node of a tree. Links between nodes are node IDs, so
//! the store is the only owner and no node refers to another by pointer.

use core::fmt;
use core::num::NonZeroU32;

use alloc::vec::Vec;

use crate::id::NodeId;

/// Generation of a newly pushed slot.
const FIRST_GENERATION: NonZeroU32 = match NonZeroU32::new(1) {
    Some(v) => v,
    None => panic!("[validity] 1 is not zero"),
};

/// A node with its links and metrics.
#[derive(Clone)]
pub(crate) struct NodeRecord<T> {
    /// Payload.
    pub(crate) data: T,
    /// Parent.
    pub(crate) parent: Option<NodeId>,
    /// Previous sibling.
    pub(crate) prev_sibling: Option<NodeId>,
    /// Next sibling.
    pub(crate) next_sibling: Option<NodeId>,
    /// First child.
    pub(crate) first_child: Option<NodeId>,
    /// Last child.
    pub(crate) last_child: Option<NodeId>,
    /// Number of children.
    pub(crate) degree: usize,
    /// Distance from the root.
    pub(crate) depth: usize,
    /// Length of the longest downward path to a leaf.
    pub(crate) height: usize,
    /// Number of nodes in the subtree, including the node itself.
    pub(crate) size: usize,
}

impl<T> NodeRecord<T> {
    /// Creates a new leaf node record.
    #[must_use]
    pub(crate) fn new(
        data: T,
        parent: Option<NodeId>,
        prev_sibling: Option<NodeId>,
        next_sibling: Option<NodeId>,
        depth: usize,
    ) -> Self {
        Self {
            data,
            parent,
            prev_sibling,
            next_sibling,
            first_child: None,
            last_child: None,
            degree: 0,
            depth,
            height: 0,
            size: 1,
        }
    }
}

// Payload is omitted since `T` may not implement `Debug`.
impl<T> fmt::Debug for NodeRecord<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRecord")
            .field("parent", &self.parent)
            .field("prev_sibling", &self.prev_sibling)
            .field("next_sibling", &self.next_sibling)
            .field("first_child", &self.first_child)
            .field("last_child", &self.last_child)
            .field("degree", &self.degree)
            .field("depth", &self.depth)
            .field("height", &self.height)
            .field("size", &self.size)
            .finish()
    }
}

/// Arena slot.
#[derive(Debug, Clone)]
struct Slot<T> {
    /// Current generation of the slot.
    generation: NonZeroU32,
    /// Node record.
    ///
    /// `None` for vacant slots.
    record: Option<NodeRecord<T>>,
}

/// Generational arena of node records.
#[derive(Debug, Clone)]
pub(crate) struct Store<T> {
    /// Slots.
    slots: Vec<Slot<T>>,
    /// Indices of vacant and reusable slots.
    free: Vec<usize>,
    /// Number of live nodes.
    len: usize,
}

impl<T> Store<T> {
    /// Creates an empty store.
    #[inline]
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Returns the number of live nodes.
    #[inline]
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Stores the record and returns the ID of the new node.
    ///
    /// # Panics
    ///
    /// Panics if the node ID overflows.
    pub(crate) fn alloc(&mut self, record: NodeRecord<T>) -> NodeId {
        let id = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                debug_assert!(
                    slot.record.is_none(),
                    "[consistency] slots in the free list must be vacant"
                );
                slot.record = Some(record);
                NodeId::new(index, slot.generation)
                    .expect("[consistency] reused slot index must fit in the node ID")
            }
            None => {
                let id = NodeId::new(self.slots.len(), FIRST_GENERATION).expect(
                    "[precondition] node ID overflowed presumably due to too many node creations",
                );
                self.slots.push(Slot {
                    generation: FIRST_GENERATION,
                    record: Some(record),
                });
                id
            }
        };
        self.len += 1;

        id
    }

    /// Returns a reference to the node record if the node is alive.
    #[must_use]
    pub(crate) fn get(&self, id: NodeId) -> Option<&NodeRecord<T>> {
        self.slots
            .get(id.index())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.record.as_ref())
    }

    /// Returns a mutable reference to the node record if the node is alive.
    #[must_use]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeRecord<T>> {
        self.slots
            .get_mut(id.index())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.record.as_mut())
    }

    /// Removes a single node record from the store.
    ///
    /// Links of other nodes are not touched. It is caller's responsibility to
    /// keep the hierarchy consistent.
    fn release(&mut self, id: NodeId) -> Option<NodeRecord<T>> {
        let slot = self
            .slots
            .get_mut(id.index())
            .filter(|slot| slot.generation == id.generation())?;
        let record = slot.record.take()?;
        // A slot whose generation is exhausted is retired and never reused.
        if let Some(next_gen) = slot.generation.get().checked_add(1) {
            slot.generation =
                NonZeroU32::new(next_gen).expect("[validity] incremented value is not zero");
            self.free.push(id.index());
        }
        self.len -= 1;

        Some(record)
    }

    /// Releases the node and all of its descendants.
    ///
    /// Descendants are released before their ancestors (post-order), and the
    /// payload of each node is dropped exactly once. Links from the parent
    /// and siblings of `id` are not touched.
    ///
    /// Returns the number of released nodes.
    pub(crate) fn release_subtree(&mut self, id: NodeId) -> usize {
        let mut released = 0;
        // `(node, children_pushed)`.
        let mut stack = alloc::vec![(id, false)];
        while let Some((node, children_pushed)) = stack.pop() {
            if children_pushed {
                drop(self.release(node));
                released += 1;
                continue;
            }
            let record = match self.get(node) {
                Some(v) => v,
                None => continue,
            };
            stack.push((node, true));
            let mut child = record.first_child;
            while let Some(child_id) = child {
                stack.push((child_id, false));
                child = self
                    .get(child_id)
                    .expect("[consistency] children of a live node must be alive")
                    .next_sibling;
            }
        }

        released
    }
}

impl<T> Default for Store<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
