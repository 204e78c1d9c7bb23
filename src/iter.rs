//! Pre-order and breadth-first traversal yielding `(node, depth)`.
//!
//! Both iterators borrow the tree for their whole lifetime, so the tree cannot
//! be mutated while one of them is still alive. Depth is the number of edges
//! from the node the iterator was started on.

use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

use crate::node::Node;

/// Traversal order selectable from config and the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TraversalOrder {
    /// Depth-first, parent before children
    #[default]
    #[serde(alias = "preorder")]
    #[value(alias = "preorder")]
    Pre,
    /// Level by level, left to right
    #[serde(alias = "breadth-first")]
    #[value(alias = "breadth-first")]
    Bfs,
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalOrder::Pre => write!(f, "pre-order"),
            TraversalOrder::Bfs => write!(f, "breadth-first"),
        }
    }
}

impl Node {
    pub fn iter_preorder(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self)
    }

    pub fn iter_bfs(&self) -> BreadthFirstIter<'_> {
        BreadthFirstIter::new(self)
    }

    /// Boxed iterator for the given order, yielding `(node, depth)`.
    pub fn traverse(&self, order: TraversalOrder) -> Box<dyn Iterator<Item = (&Node, usize)> + '_> {
        match order {
            TraversalOrder::Pre => Box::new(self.iter_preorder()),
            TraversalOrder::Bfs => Box::new(self.iter_bfs()),
        }
    }
}

/// Depth-first pre-order traversal with depth.
pub struct PreOrderIter<'a> {
    stack: Vec<(&'a Node, usize)>,
}

impl<'a> PreOrderIter<'a> {
    #[instrument(level = "trace", skip(root), fields(root = %root))]
    fn new(root: &'a Node) -> Self {
        Self {
            stack: vec![(root, 0)],
        }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = (&'a Node, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (current, depth) = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        for child in current.child_slice().iter().rev() {
            self.stack.push((child, depth + 1));
        }
        trace!("visiting (pre-order): {} (depth={})", current, depth);
        Some((current, depth))
    }
}

impl FusedIterator for PreOrderIter<'_> {}

/// Breadth-first traversal with depth.
pub struct BreadthFirstIter<'a> {
    queue: VecDeque<(&'a Node, usize)>,
}

impl<'a> BreadthFirstIter<'a> {
    #[instrument(level = "trace", skip(root), fields(root = %root))]
    fn new(root: &'a Node) -> Self {
        Self {
            queue: VecDeque::from([(root, 0)]),
        }
    }
}

impl<'a> Iterator for BreadthFirstIter<'a> {
    type Item = (&'a Node, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (current, depth) = self.queue.pop_front()?;
        for child in current.child_slice() {
            self.queue.push_back((child, depth + 1));
        }
        trace!("visiting (breadth-first): {} (depth={})", current, depth);
        Some((current, depth))
    }
}

impl FusedIterator for BreadthFirstIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(it: impl Iterator<Item = (&'a Node, usize)>) -> Vec<(String, usize)> {
        it.map(|(n, d)| (n.name().to_string(), d)).collect()
    }

    #[test]
    fn given_single_leaf_when_iterating_then_yields_only_root_at_depth_zero() {
        let leaf = Node::leaf("solo");
        assert_eq!(names(leaf.iter_preorder()), vec![("solo".to_string(), 0)]);
        assert_eq!(names(leaf.iter_bfs()), vec![("solo".to_string(), 0)]);
    }

    #[test]
    fn given_exhausted_iterator_when_advanced_again_then_stays_empty() {
        let leaf = Node::leaf("solo");
        let mut it = leaf.iter_bfs();
        assert!(it.next().is_some());
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn given_wide_tree_when_preorder_then_siblings_keep_insertion_order() {
        let mut root = Node::decision("r");
        for name in ["a", "b", "c", "d"] {
            root.add(Node::leaf(name)).unwrap();
        }
        let order: Vec<_> = root.iter_preorder().map(|(n, _)| n.name().to_string()).collect();
        assert_eq!(order, vec!["r", "a", "b", "c", "d"]);
    }
}
