//! Tree builder.

use crate::id::NodeId;
use crate::tree::Tree;

/// Tree builder.
///
/// `TreeBuilder` remembers "the current node".
///
/// * [`TreeBuilder::child()`][`TreeBuilder::child`] creates a new child node
///   (as the last child) to the current node.
/// * [`TreeBuilder::sibling()`][`TreeBuilder::sibling`] creates a new next
///   sibling of the current node. Since nodes are always appended, the
///   current node must be the last child of its parent.
/// * [`TreeBuilder::parent()`][`TreeBuilder::parent`] makes the parent the new current node.
///
/// # Examples
///
/// ```
/// use gentree::{Tree, TreeBuilder};
///
/// let mut tree = Tree::new("root");
/// TreeBuilder::new(&mut tree)
///     .child("0")
///     .child("0-0")
///     .sibling("0-1")
///     .parent()
///     .sibling("1")
///     .child("1-0");
///
/// // Tree:
/// //  root
/// //  |-- 0
/// //  |   |-- 0-0
/// //  |   `-- 0-1
/// //  `-- 1
/// //      `-- 1-0
/// assert_eq!(tree.size(), 6);
/// assert_eq!(tree.height(), 2);
/// assert_eq!(
///     tree.begin_depth()
///         .map(|node| *node.data().expect("should never fail: node is alive"))
///         .collect::<Vec<_>>(),
///     &["root", "0", "0-0", "0-1", "1", "1-0"]
/// );
/// ```
#[derive(Debug)]
pub struct TreeBuilder<'a, T> {
    /// Target tree.
    tree: &'a mut Tree<T>,
    /// Current node.
    current: NodeId,
}

impl<'a, T> TreeBuilder<'a, T> {
    /// Creates a tree builder whose current node is the root.
    #[inline]
    pub fn new(tree: &'a mut Tree<T>) -> Self {
        let current = tree.root_id();
        Self { tree, current }
    }

    /// Creates a tree builder whose current node is the given node.
    ///
    /// Returns `None` if the node is not alive.
    #[must_use]
    pub fn with_current(tree: &'a mut Tree<T>, current: NodeId) -> Option<Self> {
        if !tree.contains(current) {
            return None;
        }
        Some(Self { tree, current })
    }

    /// Returns a reference to the tree.
    #[inline]
    #[must_use]
    pub fn tree(&self) -> &Tree<T> {
        self.tree
    }

    /// Returns the node ID of the root node.
    #[inline]
    #[must_use]
    pub fn root_id(&self) -> NodeId {
        self.tree.root_id()
    }

    /// Returns the node ID of the current node.
    #[inline]
    #[must_use]
    pub fn current_id(&self) -> NodeId {
        self.current
    }

    /// Appends a child node to the current node, and changes the current node to it.
    pub fn child(&mut self, data: T) -> &mut Self {
        self.current = self
            .tree
            .insert(self.current, data)
            .expect("[consistency] the current node must be alive");
        self
    }

    /// Appends a sibling node after the current node, and changes the current node to it.
    ///
    /// # Panics
    ///
    /// * Panics if the current node is the root of the tree.
    /// * Panics if the current node is not the last child of its parent.
    pub fn sibling(&mut self, data: T) -> &mut Self {
        let rec = self
            .tree
            .record(self.current)
            .expect("[consistency] the current node must be alive");
        let parent = rec
            .parent
            .expect("[precondition] the root node cannot have siblings");
        assert!(
            rec.next_sibling.is_none(),
            "[precondition] the current node should be the last child"
        );
        self.current = self
            .tree
            .insert(parent, data)
            .expect("[consistency] the parent of a live node must be alive");
        self
    }

    /// Tries to change the current node to the parent of the current node.
    pub fn try_parent(&mut self) -> Option<&mut Self> {
        let parent = self
            .tree
            .record(self.current)
            .expect("[consistency] the current node must be alive")
            .parent?;
        self.current = parent;
        Some(self)
    }

    /// Changes the current node to the parent of the current node.
    ///
    /// # Panics
    ///
    /// Panics if the current node is the root of a tree.
    pub fn parent(&mut self) -> &mut Self {
        self.try_parent()
            .expect("[precondition] the current node should not be the root")
    }
}
