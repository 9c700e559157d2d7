//! Tests to ensure nodes are released exactly once.

use std::rc::{Rc, Weak};

use gentree::Tree;

/// Depth of the deep tree.
// Building a path is quadratic since every insertion updates all ancestors,
// so keep this moderate.
const DEEP_TREE_DEPTH: usize = 10_000;

#[must_use]
fn create_counter<T>(v: T) -> (Weak<T>, Rc<T>) {
    let rc = Rc::new(v);
    let weak = Rc::downgrade(&rc);
    (weak, rc)
}

#[test]
fn drop_single_node_tree() {
    let (counter, root_data) = create_counter(());
    let tree = Tree::new(root_data);
    assert_eq!(counter.strong_count(), 1, "only the root node exists");

    drop(tree);
    assert_eq!(counter.strong_count(), 0, "the tree should not leak");
}

#[test]
fn drop_nested_node_tree() {
    let (counter, node_data) = create_counter(());
    let mut tree = Tree::new(node_data.clone());
    let root = tree.root_id();
    let child0 = tree.insert(root, node_data.clone()).unwrap();
    tree.insert(root, node_data.clone()).unwrap();
    tree.insert(child0, node_data).unwrap();
    //  root
    //  |-- child0
    //  |   `-- child0_0
    //  `-- child1

    assert_eq!(counter.strong_count(), 4, "there are four nodes");
    drop(tree);
    assert_eq!(counter.strong_count(), 0, "the tree should not leak");
}

#[test]
fn remove_releases_subtree() {
    let (counter, node_data) = create_counter(());
    let mut tree = Tree::new((0, node_data.clone()));
    let root = tree.root_id();
    let a = tree.insert(root, (1, node_data.clone())).unwrap();
    tree.insert(a, (2, node_data.clone())).unwrap();
    tree.insert(a, (3, node_data.clone())).unwrap();
    tree.insert(root, (4, node_data.clone())).unwrap();
    drop(node_data);
    assert_eq!(counter.strong_count(), 5);

    // `Rc<()>` values are always equal, so only the integer decides.
    let (_, probe) = create_counter(());
    assert_eq!(tree.remove(&(1, probe), root), Ok(3));
    assert_eq!(counter.strong_count(), 2, "removed nodes should be released");

    drop(tree);
    assert_eq!(counter.strong_count(), 0, "the tree should not leak");
}

#[test]
fn clear_releases_all_but_root() {
    let (counter, node_data) = create_counter(());
    let mut tree = Tree::new(node_data.clone());
    let root = tree.root_id();
    let a = tree.insert(root, node_data.clone()).unwrap();
    tree.insert(a, node_data.clone()).unwrap();
    tree.insert(root, node_data.clone()).unwrap();
    drop(node_data);
    assert_eq!(counter.strong_count(), 4);

    tree.clear();
    assert_eq!(counter.strong_count(), 1, "only the root should remain");
    assert_eq!(tree.size(), 1);
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.node_count(), 1);
    assert_eq!(tree.begin().degree(), Ok(0));
    assert!(!tree.contains(a));

    // The tree is still usable after clearing.
    tree.insert(root, Rc::new(())).unwrap();
    assert_eq!(tree.size(), 2);
    assert_eq!(tree.height(), 1);

    drop(tree);
    assert_eq!(counter.strong_count(), 0, "the tree should not leak");
}

#[test]
fn deep_tree_teardown() {
    let (counter, node_data) = create_counter(());
    let mut tree = Tree::new((0, node_data.clone()));
    let mut current = tree.root_id();
    for i in 1..DEEP_TREE_DEPTH {
        current = tree.insert(current, (i, node_data.clone())).unwrap();
    }
    drop(node_data);
    assert_eq!(counter.strong_count(), DEEP_TREE_DEPTH);
    assert_eq!(tree.height(), DEEP_TREE_DEPTH - 1);

    let (_, probe) = create_counter(());
    assert_eq!(tree.remove(&(1, probe), tree.root_id()), Ok(DEEP_TREE_DEPTH - 1));
    assert_eq!(counter.strong_count(), 1);
    assert_eq!(tree.height(), 0);

    drop(tree);
    assert_eq!(counter.strong_count(), 0, "the tree should not leak");
}
