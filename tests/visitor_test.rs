//! Tests for visitor dispatch and the accumulating visitors

use dectree::node::{DecisionNode, LeafNode, Node};
use dectree::visitor::{trace_visit_leaf, CountLeavesVisitor, DepthVisitor, Visitor};

/// Records every hook call in order.
#[derive(Default)]
struct Recorder {
    calls: Vec<String>,
}

impl Visitor for Recorder {
    fn visit_node(&mut self, node: &Node) {
        self.calls.push(format!("node:{}", node.name()));
    }

    fn visit_decision(&mut self, node: &DecisionNode) {
        self.calls.push(format!("decision:{}", node.name()));
    }

    fn visit_leaf(&mut self, node: &LeafNode) {
        trace_visit_leaf(node);
        self.calls.push(format!("leaf:{}", node.name()));
    }
}

#[test]
fn given_decision_node_when_accepting_then_generic_hook_runs_before_decision_hook() {
    let mut recorder = Recorder::default();

    Node::decision("root").accept(&mut recorder);

    assert_eq!(recorder.calls, vec!["node:root", "decision:root"]);
}

#[test]
fn given_leaf_node_when_accepting_then_generic_hook_runs_before_leaf_hook() {
    let mut recorder = Recorder::default();

    Node::leaf("B").accept(&mut recorder);

    assert_eq!(recorder.calls, vec!["node:B", "leaf:B"]);
}

#[test]
fn given_node_with_children_when_accepting_then_children_are_not_visited() {
    let mut root = Node::decision("root");
    root.add(Node::leaf("x")).unwrap();
    let mut recorder = Recorder::default();

    root.accept(&mut recorder);

    assert_eq!(recorder.calls.len(), 2);
}

#[test]
fn given_mixed_nodes_when_counting_leaves_then_only_leaves_count() {
    let nodes = [
        Node::leaf("a"),
        Node::decision("b"),
        Node::leaf("c"),
        Node::leaf("d"),
    ];
    let mut counter = CountLeavesVisitor::new();

    for node in &nodes {
        node.accept(&mut counter);
    }

    assert_eq!(counter.finish(), 3);
}

#[test]
fn given_default_hooks_when_accepting_then_visitor_works_through_trait_object() {
    struct Silent;
    impl Visitor for Silent {}

    let mut silent = Silent;
    let visitor: &mut dyn Visitor = &mut silent;
    Node::leaf("x").accept(visitor);
    Node::decision("y").accept(visitor);
}

#[test]
fn given_depth_visitor_when_accepting_nodes_then_depth_comes_only_from_note_depth() {
    let mut depth = DepthVisitor::new();

    Node::leaf("a").accept(&mut depth);
    assert_eq!(depth.max_depth(), None);

    depth.note_depth(4);
    Node::leaf("b").accept(&mut depth);
    assert_eq!(depth.finish(), Some(4));
}
