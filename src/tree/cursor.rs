//! Cursor.

use core::fmt;
use core::ptr;

use crate::error::PreconditionError;
use crate::id::NodeId;
use crate::store::NodeRecord;
use crate::tree::traverse::Children;
use crate::tree::Tree;

/// Read-only cursor which navigates the tree explicitly.
///
/// A cursor either denotes a node of the tree, or denotes no node. A cursor
/// denoting no node is used as the end of children: [`begin`][`Self::begin`]
/// of a leaf and [`end`][`Self::end`] of any node return it.
///
/// Two cursors are equal if they refer to the same tree and denote the same
/// node, or both denote no node.
///
/// Queries on a cursor denoting no node fail with
/// [`PreconditionError::NoNode`].
///
/// # Examples
///
/// ```
/// use gentree::Tree;
///
/// let mut tree = Tree::new("root");
/// let root = tree.root_id();
/// tree.insert(root, "0")?;
/// tree.insert(root, "1")?;
///
/// let parent = tree.begin();
/// let mut child = parent.begin();
/// let mut visited = Vec::new();
/// while child != parent.end() {
///     visited.push(*child.data()?);
///     child.advance();
/// }
/// assert_eq!(visited, &["0", "1"]);
/// # Ok::<_, gentree::PreconditionError>(())
/// ```
pub struct Cursor<'a, T> {
    /// Tree.
    tree: &'a Tree<T>,
    /// Current node.
    current: Option<NodeId>,
}

impl<'a, T> Cursor<'a, T> {
    /// Creates a new cursor.
    ///
    /// `current` must be alive if it is `Some(_)`.
    #[inline]
    #[must_use]
    pub(crate) fn new(tree: &'a Tree<T>, current: Option<NodeId>) -> Self {
        debug_assert!(
            current.map_or(true, |id| tree.contains(id)),
            "[precondition] the node must be alive"
        );
        Self { tree, current }
    }

    /// Returns the record of the current node.
    fn record(&self) -> Result<&'a NodeRecord<T>, PreconditionError> {
        let id = self.current.ok_or(PreconditionError::NoNode)?;
        let tree: &'a Tree<T> = self.tree;
        tree.record(id).ok_or(PreconditionError::NoNode)
    }

    /// Returns the tree the cursor belongs to.
    #[inline]
    #[must_use]
    pub fn tree(&self) -> &'a Tree<T> {
        self.tree
    }

    /// Returns the node ID of the current node, if available.
    #[inline]
    #[must_use]
    pub fn id(&self) -> Option<NodeId> {
        self.current
    }

    /// Returns true if the cursor denotes no node.
    #[inline]
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Returns a reference to the data associated to the node.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError::NoNode`] if the cursor denotes no node.
    #[inline]
    pub fn data(&self) -> Result<&'a T, PreconditionError> {
        self.record().map(|rec| &rec.data)
    }

    /// Returns the number of children.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError::NoNode`] if the cursor denotes no node.
    #[inline]
    pub fn degree(&self) -> Result<usize, PreconditionError> {
        self.record().map(|rec| rec.degree)
    }

    /// Returns the depth, i.e. the distance from the root.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError::NoNode`] if the cursor denotes no node.
    #[inline]
    pub fn depth(&self) -> Result<usize, PreconditionError> {
        self.record().map(|rec| rec.depth)
    }

    /// Returns the height of the subtree rooted at the node.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError::NoNode`] if the cursor denotes no node.
    #[inline]
    pub fn height(&self) -> Result<usize, PreconditionError> {
        self.record().map(|rec| rec.height)
    }

    /// Returns the number of nodes in the subtree rooted at the node.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError::NoNode`] if the cursor denotes no node.
    #[inline]
    pub fn size(&self) -> Result<usize, PreconditionError> {
        self.record().map(|rec| rec.size)
    }

    /// Returns true if the node has no children.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError::NoNode`] if the cursor denotes no node.
    #[inline]
    pub fn is_leaf(&self) -> Result<bool, PreconditionError> {
        self.record().map(|rec| rec.degree == 0)
    }

    /// Returns true if the node is the root of the tree.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError::NoNode`] if the cursor denotes no node.
    #[inline]
    pub fn is_root(&self) -> Result<bool, PreconditionError> {
        self.record().map(|rec| rec.parent.is_none())
    }

    /// Returns a cursor to the parent.
    ///
    /// # Errors
    ///
    /// * [`PreconditionError::NoNode`] if the cursor denotes no node.
    /// * [`PreconditionError::RootHasNoParent`] if the node is the root.
    pub fn parent(&self) -> Result<Self, PreconditionError> {
        let parent = self
            .record()?
            .parent
            .ok_or(PreconditionError::RootHasNoParent)?;
        Ok(Self::new(self.tree, Some(parent)))
    }

    /// Returns a cursor to the first child.
    ///
    /// Returns a cursor denoting no node if the node is a leaf or the cursor
    /// itself denotes no node.
    #[must_use]
    pub fn begin(&self) -> Self {
        let first_child = self.record().ok().and_then(|rec| rec.first_child);
        Self::new(self.tree, first_child)
    }

    /// Returns a cursor denoting no node, which is the end of children.
    #[inline]
    #[must_use]
    pub fn end(&self) -> Self {
        Self::new(self.tree, None)
    }

    /// Moves the cursor to the next sibling.
    ///
    /// After the last sibling, the cursor denotes no node.
    /// This is no-op if the cursor already denotes no node.
    pub fn advance(&mut self) {
        if let Ok(rec) = self.record() {
            self.current = rec.next_sibling;
        }
    }

    /// Returns an iterator of the children.
    #[inline]
    #[must_use]
    pub fn children(&self) -> Children<'a, T> {
        let first_last = self
            .record()
            .ok()
            .and_then(|rec| rec.first_child.zip(rec.last_child));
        Children::new(self.tree, first_last)
    }
}

impl<T> Clone for Cursor<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.current == other.current
    }
}

impl<T> Eq for Cursor<'_, T> {}

// Tree is omitted since it would print all nodes.
impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("current", &self.current)
            .finish()
    }
}
