//! Tests for pre-order and breadth-first traversal

use std::collections::{HashMap, HashSet};

use rstest::rstest;

use dectree::iter::TraversalOrder;
use dectree::loader::sample_tree;
use dectree::node::{Node, NodeId};
use dectree::util::testing;

// root
// ├── a
// │   ├── a1
// │   │   └── a1x
// │   └── a2
// ├── b
// └── c
//     └── c1
fn deep_tree() -> Node {
    testing::init_test_setup();
    let mut a1 = Node::decision("a1");
    a1.add(Node::leaf("a1x")).unwrap();
    let mut a = Node::decision("a");
    a.add(a1).unwrap();
    a.add(Node::leaf("a2")).unwrap();
    let mut c = Node::decision("c");
    c.add(Node::leaf("c1")).unwrap();

    let mut root = Node::decision("root");
    root.add(a).unwrap();
    root.add(Node::leaf("b")).unwrap();
    root.add(c).unwrap();
    root
}

fn visited(root: &Node, order: TraversalOrder) -> Vec<(String, usize)> {
    root.traverse(order)
        .map(|(n, d)| (n.name().to_string(), d))
        .collect()
}

/// Maps every node id to the ids of all its descendants.
fn descendants(node: &Node, acc: &mut HashMap<NodeId, HashSet<NodeId>>) -> HashSet<NodeId> {
    let mut mine = HashSet::new();
    for child in node.children() {
        mine.insert(child.id());
        mine.extend(descendants(child, acc));
    }
    acc.insert(node.id(), mine.clone());
    mine
}

#[test]
fn given_deep_tree_when_preorder_then_matches_expected_sequence() {
    let root = deep_tree();
    let expected = [
        ("root", 0),
        ("a", 1),
        ("a1", 2),
        ("a1x", 3),
        ("a2", 2),
        ("b", 1),
        ("c", 1),
        ("c1", 2),
    ];
    let expected: Vec<_> = expected.iter().map(|(n, d)| (n.to_string(), *d)).collect();
    assert_eq!(visited(&root, TraversalOrder::Pre), expected);
}

#[test]
fn given_deep_tree_when_bfs_then_matches_expected_sequence() {
    let root = deep_tree();
    let expected = [
        ("root", 0),
        ("a", 1),
        ("b", 1),
        ("c", 1),
        ("a1", 2),
        ("a2", 2),
        ("c1", 2),
        ("a1x", 3),
    ];
    let expected: Vec<_> = expected.iter().map(|(n, d)| (n.to_string(), *d)).collect();
    assert_eq!(visited(&root, TraversalOrder::Bfs), expected);
}

#[rstest]
#[case::sample(sample_tree())]
#[case::deep(deep_tree())]
#[case::single_leaf(Node::leaf("solo"))]
#[case::empty_decision(Node::decision("empty"))]
fn given_tree_when_preorder_then_node_precedes_descendants(#[case] root: Node) {
    let mut desc = HashMap::new();
    descendants(&root, &mut desc);

    let position: HashMap<NodeId, usize> = root
        .iter_preorder()
        .enumerate()
        .map(|(i, (n, _))| (n.id(), i))
        .collect();

    for (id, below) in &desc {
        for d in below {
            assert!(position[id] < position[d]);
        }
    }
}

#[rstest]
#[case::sample(sample_tree())]
#[case::deep(deep_tree())]
#[case::single_leaf(Node::leaf("solo"))]
fn given_tree_when_bfs_then_depths_never_decrease(#[case] root: Node) {
    let depths: Vec<usize> = root.iter_bfs().map(|(_, d)| d).collect();
    assert!(depths.windows(2).all(|w| w[0] <= w[1]));
}

#[rstest]
#[case::sample_pre(sample_tree(), TraversalOrder::Pre, 4)]
#[case::sample_bfs(sample_tree(), TraversalOrder::Bfs, 4)]
#[case::deep_pre(deep_tree(), TraversalOrder::Pre, 8)]
#[case::deep_bfs(deep_tree(), TraversalOrder::Bfs, 8)]
#[case::leaf_pre(Node::leaf("solo"), TraversalOrder::Pre, 1)]
fn given_tree_when_traversed_then_each_node_appears_exactly_once(
    #[case] root: Node,
    #[case] order: TraversalOrder,
    #[case] total: usize,
) {
    let ids: Vec<NodeId> = root.traverse(order).map(|(n, _)| n.id()).collect();
    let unique: HashSet<NodeId> = ids.iter().copied().collect();

    assert_eq!(ids.len(), total);
    assert_eq!(unique.len(), total);
}

#[test]
fn given_partially_consumed_iterator_when_dropped_then_tree_is_intact() {
    let mut root = deep_tree();
    {
        let mut it = root.iter_preorder();
        it.next();
        it.next();
    }

    // Tree still mutable and whole after the iterator is gone
    assert_eq!(root.count(), 8);
    root.add(Node::leaf("d")).unwrap();
    assert_eq!(root.iter_bfs().count(), 9);
}

#[test]
fn given_subtree_when_iterated_then_depth_is_relative_to_start() {
    let root = deep_tree();
    let a = root.find("a").unwrap();

    let got: Vec<_> = a.iter_preorder().map(|(n, d)| (n.name(), d)).collect();

    assert_eq!(got, vec![("a", 0), ("a1", 1), ("a1x", 2), ("a2", 1)]);
}
