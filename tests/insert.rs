//! Tests for node insertion and metrics maintenance.

mod common;

use gentree::{PreconditionError, Tree, TreeBuilder};

#[test]
fn new_tree_has_only_root() {
    let tree = Tree::new("root");
    let root = tree.begin();
    assert!(!tree.is_empty());
    assert_eq!(tree.size(), 1);
    assert_eq!(tree.height(), 0);
    assert_eq!(root.depth(), Ok(0));
    assert_eq!(root.degree(), Ok(0));
    assert_eq!(root.is_leaf(), Ok(true));
    assert_eq!(root.is_root(), Ok(true));
    assert_eq!(root.parent(), Err(PreconditionError::RootHasNoParent));
    assert_eq!(root.begin(), tree.end());
    common::assert_tree_consistent(&tree);
}

#[test]
fn first_child_raises_heights_of_ancestors() {
    let mut tree = Tree::new(0);
    let root = tree.root_id();
    let a = tree.insert(root, 1).unwrap();
    let b = tree.insert(a, 2).unwrap();
    assert_eq!(tree.height(), 2);

    // `c` is the first child of `b`, so every ancestor grows.
    let c = tree.insert(b, 3).unwrap();
    assert_eq!(tree.cursor(b).height(), Ok(1));
    assert_eq!(tree.cursor(a).height(), Ok(2));
    assert_eq!(tree.height(), 3);
    assert_eq!(tree.cursor(c).depth(), Ok(3));
    common::assert_tree_consistent(&tree);
}

#[test]
fn first_child_of_shallow_branch_keeps_root_height() {
    //  0
    //  |-- 1
    //  |   `-- 2
    //  |       `-- 3
    //  `-- 4
    let mut tree = Tree::new(0);
    TreeBuilder::new(&mut tree)
        .child(1)
        .child(2)
        .child(3)
        .parent()
        .parent()
        .sibling(4);
    let shallow = tree
        .begin()
        .children()
        .next_back()
        .and_then(|node| node.id())
        .unwrap();
    assert_eq!(tree.height(), 3);

    tree.insert(shallow, 5).unwrap();
    assert_eq!(tree.cursor(shallow).height(), Ok(1));
    assert_eq!(tree.height(), 3);
    common::assert_tree_consistent(&tree);
}

#[test]
fn appending_sibling_leaf_keeps_height() {
    let mut tree = Tree::new(0);
    let root = tree.root_id();
    tree.insert(root, 1).unwrap();
    assert_eq!(tree.height(), 1);
    tree.insert(root, 2).unwrap();
    tree.insert(root, 3).unwrap();
    assert_eq!(tree.height(), 1);
    assert_eq!(tree.begin().degree(), Ok(3));
    assert_eq!(tree.size(), 4);
    common::assert_tree_consistent(&tree);
}

#[test]
fn insert_increments_size_by_one() {
    let mut tree = Tree::new(0);
    let mut parent = tree.root_id();
    for i in 1..50 {
        let before = tree.size();
        let id = tree.insert(parent, i).unwrap();
        assert_eq!(tree.size(), before + 1);
        if i % 3 == 0 {
            parent = id;
        }
    }
    common::assert_tree_consistent(&tree);
}

#[test]
fn data_access() {
    let mut tree = Tree::new(String::from("root"));
    let root = tree.root_id();
    let child = tree.insert(root, String::from("child")).unwrap();

    tree.get_mut(child).unwrap().push_str("!");
    assert_eq!(tree.get(child).map(String::as_str), Some("child!"));
    assert_eq!(tree.cursor(child).data().map(String::as_str), Ok("child!"));
}

#[test]
fn builder_with_current() {
    let mut tree = Tree::new("root");
    let root = tree.root_id();
    let a = tree.insert(root, "a").unwrap();
    tree.insert(root, "b").unwrap();

    let mut builder = TreeBuilder::with_current(&mut tree, a).unwrap();
    builder.child("a-0").sibling("a-1");
    assert_eq!(builder.root_id(), root);
    assert_eq!(builder.try_parent().map(|b| b.current_id()), Some(a));
    assert_eq!(builder.tree().size(), 5);
    assert_eq!(
        common::dft_data(&tree),
        &["root", "a", "a-0", "a-1", "b"]
    );
}

#[test]
fn builder_try_parent_of_root() {
    let mut tree = Tree::new("root");
    let mut builder = TreeBuilder::new(&mut tree);
    assert!(builder.try_parent().is_none());
}

#[test]
#[should_panic]
fn builder_parent_of_root() {
    let mut tree = Tree::new("root");
    TreeBuilder::new(&mut tree).parent();
}

#[test]
#[should_panic]
fn builder_sibling_of_root() {
    let mut tree = Tree::new("root");
    TreeBuilder::new(&mut tree).sibling("sibling");
}

#[test]
#[should_panic]
fn builder_sibling_of_non_last_child() {
    let mut tree = Tree::new("root");
    let root = tree.root_id();
    let a = tree.insert(root, "a").unwrap();
    tree.insert(root, "b").unwrap();
    TreeBuilder::with_current(&mut tree, a)
        .unwrap()
        .sibling("c");
}
