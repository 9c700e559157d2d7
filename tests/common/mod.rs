//! Helpers shared among integration tests.

#![allow(dead_code)]

use gentree::{Cursor, Tree};

/// Metrics of a node recomputed from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub degree: usize,
    pub depth: usize,
    pub height: usize,
    pub size: usize,
}

/// Recomputes metrics of every node in the subtree by walking the child
/// lists, and asserts they are equal to the maintained ones.
///
/// Also checks the sibling links of every child list.
///
/// Returns the recomputed metrics of `node`.
pub fn assert_consistent<T>(node: Cursor<'_, T>, depth: usize) -> Metrics {
    let mut degree = 0;
    let mut size = 1;
    let mut max_child_height = None;

    let mut prev = node.end();
    let mut child = node.begin();
    while child != node.end() {
        assert_eq!(
            child.parent().expect("child must have a parent"),
            node,
            "parent link must point back"
        );
        let child_metrics = assert_consistent(child, depth + 1);
        degree += 1;
        size += child_metrics.size;
        max_child_height = max_child_height.max(Some(child_metrics.height));
        prev = child;
        child.advance();
    }
    // `prev` is the last child (or end for leaves), and the reverse walk must
    // agree with the forward walk.
    assert_eq!(node.children().next_back(), Some(prev).filter(|c| !c.is_end()));
    assert_eq!(node.children().rev().count(), degree);

    let expected = Metrics {
        degree,
        depth,
        height: max_child_height.map_or(0, |h| h + 1),
        size,
    };
    let actual = Metrics {
        degree: node.degree().expect("node must be alive"),
        depth: node.depth().expect("node must be alive"),
        height: node.height().expect("node must be alive"),
        size: node.size().expect("node must be alive"),
    };
    assert_eq!(actual, expected, "metrics of {:?}", node);
    assert_eq!(node.is_leaf(), Ok(degree == 0));

    expected
}

/// Asserts that every node of the tree has consistent metrics and links.
pub fn assert_tree_consistent<T>(tree: &Tree<T>) {
    let root = tree.begin();
    assert_eq!(root.is_root(), Ok(true));
    let metrics = assert_consistent(root, 0);
    assert_eq!(tree.size(), metrics.size);
    assert_eq!(tree.height(), metrics.height);
    assert_eq!(tree.node_count(), metrics.size, "no node should leak");
    assert_eq!(
        tree.begin_depth()
            .filter(|node| node.is_root() == Ok(true))
            .count(),
        1,
        "there must be exactly one root"
    );
}

/// Collects the data in depth-first order.
pub fn dft_data<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    tree.begin_depth()
        .map(|node| node.data().expect("traversed node must be alive").clone())
        .collect()
}

/// Collects the data in breadth-first order.
pub fn bft_data<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    tree.begin_breadth()
        .map(|node| node.data().expect("traversed node must be alive").clone())
        .collect()
}
