//! Errors.

use core::fmt;

/// Precondition violation of a cursor or tree operation.
///
/// A failed operation never modifies the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreconditionError {
    /// The cursor or node ID does not denote a live node.
    ///
    /// This is the case for end-of-children cursors and for IDs of nodes
    /// that have already been removed.
    NoNode,
    /// Attempt to get the parent of the root node.
    RootHasNoParent,
}

impl fmt::Display for PreconditionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match *self {
            Self::NoNode => "the cursor does not denote a live node",
            Self::RootHasNoParent => "attempt to get the parent of the root node",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PreconditionError {}
