//! General tree.

pub mod builder;
pub mod cursor;
pub mod debug_print;
pub mod traverse;

use alloc::vec::Vec;

use crate::error::PreconditionError;
use crate::id::NodeId;
use crate::store::{NodeRecord, Store};

use self::cursor::Cursor;
use self::debug_print::DebugPrint;
use self::traverse::{BreadthFirstTraverse, DepthFirstTraverse};

/// General tree.
///
/// A tree always has exactly one root node, which is created together with
/// the tree and lives as long as the tree.
///
/// Every node knows its degree, depth, height, and subtree size. These
/// metrics are kept up to date by [`insert`][`Self::insert`] and
/// [`remove`][`Self::remove`] without rescanning the whole tree.
#[derive(Debug, Clone)]
pub struct Tree<T> {
    /// Node storage.
    store: Store<T>,
    /// Root node.
    root: NodeId,
}

impl<T> Tree<T> {
    /// Creates a new tree with only the root node.
    ///
    /// # Examples
    ///
    /// ```
    /// use gentree::Tree;
    ///
    /// let tree = Tree::new("root");
    /// assert_eq!(tree.size(), 1);
    /// assert_eq!(tree.height(), 0);
    /// assert_eq!(tree.get(tree.root_id()).copied(), Some("root"));
    /// ```
    #[must_use]
    pub fn new(root_data: T) -> Self {
        let mut store = Store::new();
        let root = store.alloc(NodeRecord::new(root_data, None, None, None, 0));
        Self { store, root }
    }

    /// Returns the node ID of the root node.
    #[inline]
    #[must_use]
    pub fn root_id(&self) -> NodeId {
        self.root
    }

    /// Returns the number of nodes in the tree.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.root_record().size
    }

    /// Returns the height of the tree, i.e. the height of the root node.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.root_record().height
    }

    /// Returns `false`, since a tree always has the root node.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the number of live nodes in the storage.
    ///
    /// This is always equal to [`size`][`Self::size`].
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.store.len()
    }

    /// Returns true if the node is alive in this tree.
    #[inline]
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.store.get(id).is_some()
    }

    /// Returns a reference to the data associated to the node.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.store.get(id).map(|rec| &rec.data)
    }

    /// Returns a mutable reference to the data associated to the node.
    ///
    /// # Examples
    ///
    /// ```
    /// use gentree::Tree;
    ///
    /// let mut tree = Tree::new(42);
    /// let root = tree.root_id();
    /// *tree.get_mut(root).expect("should never fail: the root is alive") = 314;
    /// assert_eq!(tree.get(root).copied(), Some(314));
    /// ```
    #[inline]
    #[must_use]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.store.get_mut(id).map(|rec| &mut rec.data)
    }

    /// Returns the record of the node if the node is alive.
    #[inline]
    #[must_use]
    pub(crate) fn record(&self, id: NodeId) -> Option<&NodeRecord<T>> {
        self.store.get(id)
    }

    /// Returns the record of the root node.
    #[must_use]
    fn root_record(&self) -> &NodeRecord<T> {
        self.store
            .get(self.root)
            .expect("[consistency] the root node must be alive")
    }

    /// Returns a cursor to the root node.
    #[inline]
    #[must_use]
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, Some(self.root))
    }

    /// Returns a cursor which denotes no node.
    ///
    /// This is equal to the cursor returned by [`Cursor::end`].
    #[inline]
    #[must_use]
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, None)
    }

    /// Returns a cursor to the given node.
    ///
    /// If the node is not alive, the returned cursor denotes no node.
    #[inline]
    #[must_use]
    pub fn cursor(&self, id: NodeId) -> Cursor<'_, T> {
        Cursor::new(self, Some(id).filter(|&id| self.contains(id)))
    }

    /// Returns a depth-first (pre-order) traverser starting from the root.
    #[inline]
    #[must_use]
    pub fn begin_depth(&self) -> DepthFirstTraverse<'_, T> {
        DepthFirstTraverse::with_toplevel(self, self.root)
    }

    /// Returns a finished depth-first traverser.
    #[inline]
    #[must_use]
    pub fn end_depth(&self) -> DepthFirstTraverse<'_, T> {
        DepthFirstTraverse::finished(self)
    }

    /// Returns a breadth-first (level order) traverser starting from the root.
    #[inline]
    #[must_use]
    pub fn begin_breadth(&self) -> BreadthFirstTraverse<'_, T> {
        BreadthFirstTraverse::with_toplevel(self, self.root)
    }

    /// Returns a finished breadth-first traverser.
    #[inline]
    #[must_use]
    pub fn end_breadth(&self) -> BreadthFirstTraverse<'_, T> {
        BreadthFirstTraverse::finished(self)
    }

    /// Returns a depth-first traverser of the subtree rooted at the given node.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError::NoNode`] if the node is not alive.
    pub fn depth_first(&self, id: NodeId) -> Result<DepthFirstTraverse<'_, T>, PreconditionError> {
        if !self.contains(id) {
            return Err(PreconditionError::NoNode);
        }
        Ok(DepthFirstTraverse::with_toplevel(self, id))
    }

    /// Returns a breadth-first traverser of the subtree rooted at the given node.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError::NoNode`] if the node is not alive.
    pub fn breadth_first(
        &self,
        id: NodeId,
    ) -> Result<BreadthFirstTraverse<'_, T>, PreconditionError> {
        if !self.contains(id) {
            return Err(PreconditionError::NoNode);
        }
        Ok(BreadthFirstTraverse::with_toplevel(self, id))
    }

    /// Returns a printable object of the subtree rooted at the given node.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError::NoNode`] if the node is not alive.
    pub fn debug_print(&self, id: NodeId) -> Result<DebugPrint<'_, T>, PreconditionError> {
        if !self.contains(id) {
            return Err(PreconditionError::NoNode);
        }
        Ok(DebugPrint::new(self, id))
    }

    /// Creates a node as the last child of `parent`.
    ///
    /// Returns the node ID of the newly created node.
    ///
    /// Degree of the parent, and sizes and heights of the parent and its
    /// ancestors are updated in `O(depth)` time.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError::NoNode`] if `parent` is not alive.
    /// In that case, `data` is dropped and the tree is not modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use gentree::Tree;
    ///
    /// let mut tree = Tree::new("root");
    /// let child = tree.insert(tree.root_id(), "child")?;
    /// let grandchild = tree.insert(child, "grandchild")?;
    ///
    /// assert_eq!(tree.size(), 3);
    /// assert_eq!(tree.height(), 2);
    /// assert_eq!(tree.cursor(grandchild).depth(), Ok(2));
    /// # Ok::<_, gentree::PreconditionError>(())
    /// ```
    pub fn insert(&mut self, parent: NodeId, data: T) -> Result<NodeId, PreconditionError> {
        let parent_rec = self.store.get(parent).ok_or(PreconditionError::NoNode)?;
        let was_leaf = parent_rec.degree == 0;
        let prev_sibling = parent_rec.last_child;
        let depth = parent_rec.depth + 1;

        let new_id = self
            .store
            .alloc(NodeRecord::new(data, Some(parent), prev_sibling, None, depth));

        // Link the new node as the last child.
        if let Some(prev_sibling) = prev_sibling {
            self.record_mut(prev_sibling).next_sibling = Some(new_id);
        }
        let parent_rec = self.record_mut(parent);
        if parent_rec.first_child.is_none() {
            parent_rec.first_child = Some(new_id);
        }
        parent_rec.last_child = Some(new_id);
        parent_rec.degree += 1;

        // A new leaf can only make an ancestor taller when it is the first
        // child of its parent.
        if was_leaf {
            parent_rec.height = 1;
            self.propagate_height_increase(parent);
        }
        self.adjust_sizes(Some(parent), |size| size + 1);

        log::trace!(
            "inserted node {:?} under {:?} (depth {}, tree size {})",
            new_id,
            parent,
            depth,
            self.size()
        );

        Ok(new_id)
    }

    /// Clears the tree except for the root node.
    ///
    /// The root node becomes a leaf. All other nodes are released.
    pub fn clear(&mut self) {
        let mut child = self.root_record().first_child;
        while let Some(child_id) = child {
            child = self.record_mut(child_id).next_sibling;
            self.store.release_subtree(child_id);
        }

        let root = self.root;
        let root_rec = self.record_mut(root);
        root_rec.first_child = None;
        root_rec.last_child = None;
        root_rec.degree = 0;
        root_rec.height = 0;
        root_rec.size = 1;
        debug_assert_eq!(
            self.store.len(),
            1,
            "[consistency] only the root should remain"
        );

        log::trace!("cleared the tree");
    }

    /// Returns a mutable reference to the record of a node which must be alive.
    ///
    /// # Panics
    ///
    /// Panics if the node is not alive.
    #[must_use]
    fn record_mut(&mut self, id: NodeId) -> &mut NodeRecord<T> {
        self.store
            .get_mut(id)
            .expect("[consistency] linked nodes must be alive")
    }

    /// Applies `f` to the sizes of `start` and all of its ancestors.
    fn adjust_sizes<F>(&mut self, start: Option<NodeId>, f: F)
    where
        F: Fn(usize) -> usize,
    {
        let mut current = start;
        while let Some(id) = current {
            let rec = self.record_mut(id);
            rec.size = f(rec.size);
            current = rec.parent;
        }
    }

    /// Raises heights of the strict ancestors of `start` where needed.
    ///
    /// The height of `start` itself must already be up to date.
    fn propagate_height_increase(&mut self, start: NodeId) {
        let start_rec = self.record_mut(start);
        let mut child_height = start_rec.height;
        let mut current = start_rec.parent;
        while let Some(id) = current {
            let rec = self.record_mut(id);
            if rec.height > child_height {
                // Heights of this node and its ancestors are not affected.
                break;
            }
            rec.height = child_height + 1;
            child_height = rec.height;
            current = rec.parent;
        }
    }

    /// Recomputes heights of `start` and its ancestors from their children.
    ///
    /// Stops at the first node whose height does not change.
    fn recompute_heights(&mut self, start: NodeId) {
        let mut current = Some(start);
        while let Some(id) = current {
            let height = self.height_from_children(id);
            let rec = self.record_mut(id);
            if rec.height == height {
                break;
            }
            rec.height = height;
            current = rec.parent;
        }
    }

    /// Computes the height of the node from the heights of all its children.
    #[must_use]
    fn height_from_children(&self, id: NodeId) -> usize {
        let mut max_child_height = None;
        let mut child = self
            .record(id)
            .expect("[consistency] linked nodes must be alive")
            .first_child;
        while let Some(child_id) = child {
            let child_rec = self
                .record(child_id)
                .expect("[consistency] children of a live node must be alive");
            max_child_height = max_child_height.max(Some(child_rec.height));
            child = child_rec.next_sibling;
        }

        max_child_height.map_or(0, |h| h + 1)
    }

    /// Unlinks the non-root node from its parent and releases its subtree.
    ///
    /// Returns the number of released nodes.
    fn detach_and_release(&mut self, id: NodeId) -> usize {
        let rec = self
            .record(id)
            .expect("[precondition] the node to remove must be alive");
        let parent = rec
            .parent
            .expect("[precondition] the root node cannot be removed");
        let prev_sibling = rec.prev_sibling;
        let next_sibling = rec.next_sibling;
        let subtree_size = rec.size;

        // Connect the siblings before and after the node.
        match prev_sibling {
            Some(prev) => self.record_mut(prev).next_sibling = next_sibling,
            None => self.record_mut(parent).first_child = next_sibling,
        }
        match next_sibling {
            Some(next) => self.record_mut(next).prev_sibling = prev_sibling,
            None => self.record_mut(parent).last_child = prev_sibling,
        }
        self.record_mut(parent).degree -= 1;

        self.adjust_sizes(Some(parent), |size| size - subtree_size);
        self.recompute_heights(parent);

        let released = self.store.release_subtree(id);
        debug_assert_eq!(
            released, subtree_size,
            "[consistency] subtree size must match the number of released nodes"
        );

        released
    }

    /// Returns the nodes in the subtree in post-order (children before parents).
    #[must_use]
    fn post_order(&self, toplevel: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        // `(node, children_pushed)`.
        let mut stack = alloc::vec![(toplevel, false)];
        while let Some((id, children_pushed)) = stack.pop() {
            if children_pushed {
                order.push(id);
                continue;
            }
            stack.push((id, true));
            // Push children in reverse order so that the first child is visited first.
            let mut child = self
                .record(id)
                .expect("[consistency] nodes in the subtree must be alive")
                .last_child;
            while let Some(child_id) = child {
                stack.push((child_id, false));
                child = self
                    .record(child_id)
                    .expect("[consistency] children of a live node must be alive")
                    .prev_sibling;
            }
        }

        order
    }
}

impl<T: PartialEq> Tree<T> {
    /// Removes every node in the subtree whose data equals `value`, together
    /// with all of its descendants.
    ///
    /// Nodes are tested in post-order of the subtree as it was when the call
    /// started: children are tested (and possibly removed) before their
    /// parent. The root of the tree is never removed, even if it matches.
    ///
    /// Returns the number of released nodes, which is `0` if no node matched.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError::NoNode`] if `subtree` is not alive.
    ///
    /// # Examples
    ///
    /// ```
    /// use gentree::Tree;
    ///
    /// let mut tree = Tree::new(0);
    /// let root = tree.root_id();
    /// let a = tree.insert(root, 1)?;
    /// tree.insert(a, 2)?;
    /// tree.insert(root, 3)?;
    ///
    /// assert_eq!(tree.remove(&1, root)?, 2);
    /// assert_eq!(tree.size(), 2);
    /// assert_eq!(tree.height(), 1);
    /// assert_eq!(tree.remove(&42, root)?, 0);
    /// # Ok::<_, gentree::PreconditionError>(())
    /// ```
    pub fn remove(&mut self, value: &T, subtree: NodeId) -> Result<usize, PreconditionError> {
        if !self.contains(subtree) {
            return Err(PreconditionError::NoNode);
        }

        let mut released = 0;
        for id in self.post_order(subtree) {
            let rec = self
                .record(id)
                .expect("[consistency] descendants of unmatched nodes must still be alive");
            if rec.parent.is_none() || rec.data != *value {
                continue;
            }
            let count = self.detach_and_release(id);
            log::trace!("removed subtree {:?} of {} node(s)", id, count);
            released += count;
        }

        Ok(released)
    }
}
