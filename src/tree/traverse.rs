//! Tree traversal.

use core::iter;
use core::ptr;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::id::NodeId;
use crate::tree::cursor::Cursor;
use crate::tree::Tree;

/// Depth-first (pre-order) tree traverser.
///
/// This holds pending node IDs on a stack, and takes the tree on each step.
/// The top of the stack is the current node.
///
/// The default value is a finished traverser.
/// Cloning a traverser copies the whole pending stack, so the clone proceeds
/// independently.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DepthFirstTraverser {
    /// Pending nodes.
    ///
    /// The last element is the top.
    stack: Vec<NodeId>,
}

impl DepthFirstTraverser {
    /// Creates a traverser from a toplevel node.
    ///
    /// The toplevel does not need to be the root of a tree.
    #[inline]
    #[must_use]
    pub fn with_toplevel(id: NodeId) -> Self {
        Self {
            stack: alloc::vec![id],
        }
    }

    /// Returns the current node without advancing the traverser.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<NodeId> {
        self.stack.last().copied()
    }

    /// Returns true if all nodes have been traversed.
    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.stack.is_empty()
    }

    /// Returns the number of pending nodes.
    ///
    /// This is a lower bound of the number of nodes yet to be traversed.
    #[inline]
    #[must_use]
    pub fn pending(&self) -> usize {
        self.stack.len()
    }

    /// Returns the current node and advances the traverser.
    ///
    /// Children of the returned node are pushed in reverse order so that the
    /// first child becomes the next node.
    ///
    /// # Panics
    ///
    /// Panics if a pending node has been removed from the tree.
    pub fn next<T>(&mut self, tree: &Tree<T>) -> Option<NodeId> {
        let current = self.stack.pop()?;
        let mut child = tree
            .record(current)
            .expect("[precondition] the node being traversed must be alive")
            .last_child;
        while let Some(child_id) = child {
            self.stack.push(child_id);
            child = tree
                .record(child_id)
                .expect("[consistency] children of a live node must be alive")
                .prev_sibling;
        }

        Some(current)
    }
}

/// Breadth-first (level order) tree traverser.
///
/// This holds pending node IDs in a queue, and takes the tree on each step.
/// The front of the queue is the current node.
///
/// The default value is a finished traverser.
/// Cloning a traverser copies the whole pending queue, so the clone proceeds
/// independently.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BreadthFirstTraverser {
    /// Pending nodes.
    queue: VecDeque<NodeId>,
}

impl BreadthFirstTraverser {
    /// Creates a traverser from a toplevel node.
    ///
    /// The toplevel does not need to be the root of a tree.
    #[must_use]
    pub fn with_toplevel(id: NodeId) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(id);
        Self { queue }
    }

    /// Returns the current node without advancing the traverser.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<NodeId> {
        self.queue.front().copied()
    }

    /// Returns true if all nodes have been traversed.
    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of pending nodes.
    ///
    /// This is a lower bound of the number of nodes yet to be traversed.
    #[inline]
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Returns the current node and advances the traverser.
    ///
    /// Children of the returned node are enqueued from the first to the last.
    ///
    /// # Panics
    ///
    /// Panics if a pending node has been removed from the tree.
    pub fn next<T>(&mut self, tree: &Tree<T>) -> Option<NodeId> {
        let current = self.queue.pop_front()?;
        let mut child = tree
            .record(current)
            .expect("[precondition] the node being traversed must be alive")
            .first_child;
        while let Some(child_id) = child {
            self.queue.push_back(child_id);
            child = tree
                .record(child_id)
                .expect("[consistency] children of a live node must be alive")
                .next_sibling;
        }

        Some(current)
    }
}

/// Iterator for depth-first (pre-order) traversal.
///
/// A finished iterator is equal to [`Tree::end_depth`] of the same tree.
#[derive(Debug)]
pub struct DepthFirstTraverse<'a, T> {
    /// Tree.
    tree: &'a Tree<T>,
    /// Traverser.
    traverser: DepthFirstTraverser,
}

impl<'a, T> DepthFirstTraverse<'a, T> {
    /// Creates a new iterator.
    #[inline]
    #[must_use]
    pub(crate) fn with_toplevel(tree: &'a Tree<T>, id: NodeId) -> Self {
        Self {
            tree,
            traverser: DepthFirstTraverser::with_toplevel(id),
        }
    }

    /// Creates a finished iterator.
    #[inline]
    #[must_use]
    pub(crate) fn finished(tree: &'a Tree<T>) -> Self {
        Self {
            tree,
            traverser: DepthFirstTraverser::default(),
        }
    }

    /// Returns a cursor to the current node without advancing the iterator.
    #[must_use]
    pub fn peek(&self) -> Option<Cursor<'a, T>> {
        self.traverser
            .peek()
            .map(|id| Cursor::new(self.tree, Some(id)))
    }

    /// Returns the internal traverser.
    #[inline]
    #[must_use]
    pub fn traverser(&self) -> &DepthFirstTraverser {
        &self.traverser
    }
}

impl<T> Clone for DepthFirstTraverse<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            traverser: self.traverser.clone(),
        }
    }
}

impl<T> PartialEq for DepthFirstTraverse<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.traverser == other.traverser
    }
}

impl<T> Eq for DepthFirstTraverse<'_, T> {}

impl<'a, T> Iterator for DepthFirstTraverse<'a, T> {
    type Item = Cursor<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.traverser.next(self.tree)?;
        Some(Cursor::new(self.tree, Some(id)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.traverser.pending(), None)
    }
}

impl<T> iter::FusedIterator for DepthFirstTraverse<'_, T> {}

/// Iterator for breadth-first (level order) traversal.
///
/// A finished iterator is equal to [`Tree::end_breadth`] of the same tree.
#[derive(Debug)]
pub struct BreadthFirstTraverse<'a, T> {
    /// Tree.
    tree: &'a Tree<T>,
    /// Traverser.
    traverser: BreadthFirstTraverser,
}

impl<'a, T> BreadthFirstTraverse<'a, T> {
    /// Creates a new iterator.
    #[inline]
    #[must_use]
    pub(crate) fn with_toplevel(tree: &'a Tree<T>, id: NodeId) -> Self {
        Self {
            tree,
            traverser: BreadthFirstTraverser::with_toplevel(id),
        }
    }

    /// Creates a finished iterator.
    #[inline]
    #[must_use]
    pub(crate) fn finished(tree: &'a Tree<T>) -> Self {
        Self {
            tree,
            traverser: BreadthFirstTraverser::default(),
        }
    }

    /// Returns a cursor to the current node without advancing the iterator.
    #[must_use]
    pub fn peek(&self) -> Option<Cursor<'a, T>> {
        self.traverser
            .peek()
            .map(|id| Cursor::new(self.tree, Some(id)))
    }

    /// Returns the internal traverser.
    #[inline]
    #[must_use]
    pub fn traverser(&self) -> &BreadthFirstTraverser {
        &self.traverser
    }
}

impl<T> Clone for BreadthFirstTraverse<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            traverser: self.traverser.clone(),
        }
    }
}

impl<T> PartialEq for BreadthFirstTraverse<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.traverser == other.traverser
    }
}

impl<T> Eq for BreadthFirstTraverse<'_, T> {}

impl<'a, T> Iterator for BreadthFirstTraverse<'a, T> {
    type Item = Cursor<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.traverser.next(self.tree)?;
        Some(Cursor::new(self.tree, Some(id)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.traverser.pending(), None)
    }
}

impl<T> iter::FusedIterator for BreadthFirstTraverse<'_, T> {}

/// Double-ended iterator for children of a node.
#[derive(Debug)]
pub struct Children<'a, T> {
    /// Tree.
    tree: &'a Tree<T>,
    /// Next node to emit forward and backward.
    next: Option<(NodeId, NodeId)>,
}

impl<'a, T> Children<'a, T> {
    /// Creates a new iterator from the first and the last child.
    #[inline]
    #[must_use]
    pub(crate) fn new(tree: &'a Tree<T>, first_last: Option<(NodeId, NodeId)>) -> Self {
        Self {
            tree,
            next: first_last,
        }
    }
}

impl<T> Clone for Children<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            next: self.next,
        }
    }
}

impl<'a, T> Iterator for Children<'a, T> {
    type Item = Cursor<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (next, next_back) = self.next?;
        self.next = if next == next_back {
            None
        } else {
            let next_of_next = self
                .tree
                .record(next)
                .expect("[consistency] the node being traversed must be alive")
                .next_sibling
                .expect("[consistency] a non-last sibling must have the next sibling");
            Some((next_of_next, next_back))
        };

        Some(Cursor::new(self.tree, Some(next)))
    }
}

impl<'a, T> DoubleEndedIterator for Children<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (next, next_back) = self.next?;
        self.next = if next == next_back {
            None
        } else {
            let prev_of_next_back = self
                .tree
                .record(next_back)
                .expect("[consistency] the node being traversed must be alive")
                .prev_sibling
                .expect("[consistency] a non-first sibling must have the previous sibling");
            Some((next, prev_of_next_back))
        };

        Some(Cursor::new(self.tree, Some(next_back)))
    }
}

impl<T> iter::FusedIterator for Children<'_, T> {}
