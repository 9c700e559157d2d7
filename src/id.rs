//! Node ID.

use core::fmt;
use core::num::NonZeroU32;

/// Node ID.
///
/// A node ID is a slot index in the arena of a tree, paired with the
/// generation of the slot at the time the node was created. Once the node is
/// removed, the ID never resolves again even if the slot is reused by a newly
/// created node.
///
/// The ordering (`PartialOrd` and `Ord`) for node IDs are only provided for
/// use with some containers who wants ordered key types (such as `BTreeSet`).
/// Note that it is **not** guaranteed that the ordering of a key has some
/// relation to the order the node is created.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId {
    /// Slot index.
    index: u32,
    /// Generation of the slot.
    generation: NonZeroU32,
}

impl NodeId {
    /// Creates a node ID from the slot index and the generation.
    ///
    /// Returns `None` if the index does not fit in the ID.
    #[inline]
    #[must_use]
    pub(crate) fn new(index: usize, generation: NonZeroU32) -> Option<Self> {
        let index = u32::try_from(index).ok()?;
        Some(Self { index, generation })
    }

    /// Returns the slot index as `usize`.
    #[inline]
    #[must_use]
    pub(crate) fn index(self) -> usize {
        self.index as usize
    }

    /// Returns the generation.
    #[inline]
    #[must_use]
    pub(crate) fn generation(self) -> NonZeroU32 {
        self.generation
    }
}

// Prevent `{:#?}` from printing the value in redundant 4 lines.
impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}@{})", self.index, self.generation)
    }
}
