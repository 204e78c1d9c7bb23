//! Visitors over single nodes.
//!
//! A visitor is a pure accumulator: it sees one node per `accept` call and
//! knows nothing about tree shape or traversal order. Whoever drives the
//! traversal decides which nodes it sees and feeds it anything else it needs,
//! such as depth.

use tracing::{info, trace};

use crate::node::{DecisionNode, LeafNode, Node};

pub fn trace_visit_node(node: &Node) {
    trace!("visit_node: {}", node);
}

pub fn trace_visit_decision(node: &DecisionNode) {
    trace!("visit_decision: {}", node);
}

pub fn trace_visit_leaf(node: &LeafNode) {
    trace!("visit_leaf: {}", node);
}

/// Hooks invoked by [`Node::accept`].
///
/// `visit_node` runs for every node, then exactly one of the variant hooks.
/// Every hook defaults to emitting a trace event; implementations that
/// override a hook can call the matching `trace_visit_*` function to keep it.
pub trait Visitor {
    fn visit_node(&mut self, node: &Node) {
        trace_visit_node(node);
    }

    fn visit_decision(&mut self, node: &DecisionNode) {
        trace_visit_decision(node);
    }

    fn visit_leaf(&mut self, node: &LeafNode) {
        trace_visit_leaf(node);
    }
}

/// Counts the leaves it is shown.
#[derive(Debug, Default)]
pub struct CountLeavesVisitor {
    count: usize,
}

impl CountLeavesVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn finish(&self) -> usize {
        info!("leaves: {}", self.count);
        self.count
    }
}

impl Visitor for CountLeavesVisitor {
    fn visit_leaf(&mut self, node: &LeafNode) {
        trace_visit_leaf(node);
        self.count += 1;
        trace!("counting leaf '{}': now {}", node.name(), self.count);
    }
}

/// Tracks the maximum depth reported through [`DepthVisitor::note_depth`].
#[derive(Debug, Default)]
pub struct DepthVisitor {
    max_depth: Option<usize>,
}

impl DepthVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn note_depth(&mut self, depth: usize) {
        let max = self.max_depth.map_or(depth, |m| m.max(depth));
        self.max_depth = Some(max);
        trace!("noting depth = {}: max = {}", depth, max);
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// `None` when no depth was ever noted.
    pub fn finish(&self) -> Option<usize> {
        info!("max depth: {:?}", self.max_depth);
        self.max_depth
    }
}

impl Visitor for DepthVisitor {}
