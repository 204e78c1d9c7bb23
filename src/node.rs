//! Composite node hierarchy: decision nodes own children, leaves never do.

use std::fmt;

use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::errors::{TreeError, TreeResult};
use crate::visitor::Visitor;

/// Identity of a node.
///
/// Fresh for every constructed node; clones keep the id of their original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(Uuid);

impl NodeId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Internal node of the decision tree.
#[derive(Debug, Clone)]
pub struct DecisionNode {
    id: NodeId,
    name: String,
    children: Vec<Node>,
}

impl DecisionNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(),
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends `child` after the existing children.
    #[instrument(level = "debug", skip_all, fields(parent = %self.name))]
    pub fn add(&mut self, child: impl Into<Node>) {
        let child = child.into();
        debug!("adding {} to {}", child, self);
        self.children.push(child);
    }

    /// Removes the first child with identity `id` and hands it back.
    ///
    /// A missing child is not an error: `None` is returned and a warning logged.
    #[instrument(level = "debug", skip(self), fields(parent = %self.name))]
    pub fn remove(&mut self, id: NodeId) -> Option<Node> {
        match self.children.iter().position(|c| c.id() == id) {
            Some(pos) => {
                let removed = self.children.remove(pos);
                debug!("removed {} from {}", removed, self);
                Some(removed)
            }
            None => {
                warn!("child {} not found in '{}'", id, self.name);
                None
            }
        }
    }

    /// Children in insertion order, collected into a new vector.
    pub fn children(&self) -> Vec<&Node> {
        self.children.iter().collect()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn last_child_id(&self) -> Option<NodeId> {
        self.children.last().map(Node::id)
    }

    pub(crate) fn child_slice(&self) -> &[Node] {
        &self.children
    }

    pub(crate) fn child_slice_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }
}

impl fmt::Display for DecisionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecisionNode<{}>", self.name)
    }
}

/// Terminal node. Has no child storage at all.
#[derive(Debug, Clone)]
pub struct LeafNode {
    id: NodeId,
    name: String,
}

impl LeafNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for LeafNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LeafNode<{}>", self.name)
    }
}

/// A node of either kind, handled uniformly.
#[derive(Debug, Clone)]
pub enum Node {
    Decision(DecisionNode),
    Leaf(LeafNode),
}

impl Node {
    pub fn decision(name: impl Into<String>) -> Self {
        Node::Decision(DecisionNode::new(name))
    }

    pub fn leaf(name: impl Into<String>) -> Self {
        Node::Leaf(LeafNode::new(name))
    }

    pub fn id(&self) -> NodeId {
        match self {
            Node::Decision(n) => n.id(),
            Node::Leaf(n) => n.id(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Decision(n) => n.name(),
            Node::Leaf(n) => n.name(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn as_decision_mut(&mut self) -> Option<&mut DecisionNode> {
        match self {
            Node::Decision(n) => Some(n),
            Node::Leaf(_) => None,
        }
    }

    /// Fails with `UnsupportedOperation` on a leaf.
    pub fn add(&mut self, child: impl Into<Node>) -> TreeResult<()> {
        match self {
            Node::Decision(n) => {
                n.add(child);
                Ok(())
            }
            Node::Leaf(n) => Err(TreeError::unsupported("add a child", n.name())),
        }
    }

    /// Fails with `UnsupportedOperation` on a leaf, whatever the id.
    pub fn remove(&mut self, id: NodeId) -> TreeResult<Option<Node>> {
        match self {
            Node::Decision(n) => Ok(n.remove(id)),
            Node::Leaf(n) => Err(TreeError::unsupported("remove a child", n.name())),
        }
    }

    /// Children in insertion order; always empty for a leaf.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Decision(n) => n.children(),
            Node::Leaf(_) => Vec::new(),
        }
    }

    pub(crate) fn child_slice(&self) -> &[Node] {
        match self {
            Node::Decision(n) => n.child_slice(),
            Node::Leaf(_) => &[],
        }
    }

    /// Generic hook first, then the variant hook. Each exactly once.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_node(self);
        match self {
            Node::Decision(n) => visitor.visit_decision(n),
            Node::Leaf(n) => visitor.visit_leaf(n),
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        self.iter_preorder().count()
    }

    /// First node named `name` in pre-order.
    pub fn find(&self, name: &str) -> Option<&Node> {
        self.iter_preorder()
            .map(|(node, _)| node)
            .find(|node| node.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Node> {
        if self.name() == name {
            return Some(self);
        }
        match self {
            Node::Decision(n) => n
                .child_slice_mut()
                .iter_mut()
                .find_map(|child| child.find_mut(name)),
            Node::Leaf(_) => None,
        }
    }
}

impl From<DecisionNode> for Node {
    fn from(node: DecisionNode) -> Self {
        Node::Decision(node)
    }
}

impl From<LeafNode> for Node {
    fn from(node: LeafNode) -> Self {
        Node::Leaf(node)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Decision(n) => fmt::Display::fmt(n, f),
            Node::Leaf(n) => fmt::Display::fmt(n, f),
        }
    }
}
