//! General tree with incrementally maintained node metrics.
//!
//! # Concepts
//!
//! ## Tree
//!
//! A [`Tree`] always has exactly one root node. Every node may have an
//! arbitrary number of ordered children. Nodes are stored in an arena owned
//! by the tree and are referred to by copyable [`NodeId`]s.
//!
//! ## Metrics
//!
//! Each node knows its degree (number of children), its depth (distance from
//! the root), its height (longest downward path to a leaf), and the size of
//! the subtree rooted at it. These are maintained on every insertion and
//! removal in `O(depth)` time, so querying them is always `O(1)`.
//!
//! ## Cursors and traversers
//!
//! * [`Cursor`] is a read-only navigator which can move to the first child,
//!   to the next sibling, and to the parent.
//! * [`DepthFirstTraverse`] yields every node once in pre-order.
//! * [`BreadthFirstTraverse`] yields every node once in level order.
//!
//! Structural edits are done through [`Tree::insert`] and [`Tree::remove`],
//! which take `&mut Tree`. Cursors and traversers borrow the tree, so the
//! borrow checker forbids editing the tree while they are alive.
//!
//! ```
//! use gentree::Tree;
//!
//! let mut tree = Tree::new(1);
//! let root = tree.root_id();
//! let n11 = tree.insert(root, 11)?;
//! tree.insert(root, 21)?;
//! tree.insert(root, 31)?;
//! tree.insert(n11, 1000)?;
//! tree.insert(n11, 2000)?;
//! //  1
//! //  |-- 11
//! //  |   |-- 1000
//! //  |   `-- 2000
//! //  |-- 21
//! //  `-- 31
//!
//! assert_eq!(tree.size(), 6);
//! assert_eq!(tree.height(), 2);
//! assert_eq!(
//!     tree.begin_depth().map(|node| *node.data().unwrap()).collect::<Vec<_>>(),
//!     &[1, 11, 1000, 2000, 21, 31]
//! );
//! assert_eq!(
//!     tree.begin_breadth().map(|node| *node.data().unwrap()).collect::<Vec<_>>(),
//!     &[1, 11, 21, 31, 1000, 2000]
//! );
//! # Ok::<_, gentree::PreconditionError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
// `clippy::missing_docs_in_private_items` implies `missing_docs`.
#![warn(clippy::missing_docs_in_private_items)]
#![warn(clippy::must_use_candidate)]

extern crate alloc;

mod error;
mod id;
mod store;
pub mod tree;

pub use self::error::PreconditionError;
pub use self::id::NodeId;
pub use self::tree::builder::TreeBuilder;
pub use self::tree::cursor::Cursor;
pub use self::tree::debug_print::DebugPrint;
pub use self::tree::traverse::{
    BreadthFirstTraverse, BreadthFirstTraverser, Children, DepthFirstTraverse, DepthFirstTraverser,
};
pub use self::tree::Tree;
