//! Node, leaf and depth figures gathered by driving visitors over a traversal.

use serde::Serialize;
use tracing::instrument;

use crate::iter::TraversalOrder;
use crate::node::Node;
use crate::visitor::{CountLeavesVisitor, DepthVisitor};

/// Figures gathered by one visitor-driven traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub nodes: usize,
    pub leaves: usize,
    pub max_depth: usize,
}

/// Walks `root` in `order`, bridging each yielded depth into a [`DepthVisitor`]
/// and letting both visitors accept every node.
#[instrument(level = "debug", skip(root), fields(root = %root))]
pub fn collect_stats(root: &Node, order: TraversalOrder) -> TreeStats {
    let mut depth_visitor = DepthVisitor::new();
    let mut leaves_visitor = CountLeavesVisitor::new();
    let mut nodes = 0;

    for (node, depth) in root.traverse(order) {
        depth_visitor.note_depth(depth);
        node.accept(&mut depth_visitor);
        node.accept(&mut leaves_visitor);
        nodes += 1;
    }

    TreeStats {
        nodes,
        leaves: leaves_visitor.finish(),
        // a traversal always yields at least the root
        max_depth: depth_visitor.finish().unwrap_or(0),
    }
}
