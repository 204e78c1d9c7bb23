//! Tree definitions: the built-in sample tree and TOML tree files.
//!
//! A tree file describes the root table; children nest as `[[children]]`:
//!
//! ```toml
//! name = "root"
//!
//! [[children]]
//! name = "A"
//!
//! [[children.children]]
//! name = "C"
//!
//! [[children]]
//! name = "B"
//! ```
//!
//! `kind` is optional: nodes with children default to `decision`, the rest
//! to `leaf`. A `decision` without children is allowed.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::errors::{TreeError, TreeResult};
use crate::node::{DecisionNode, LeafNode, Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Decision,
    Leaf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<NodeKind>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeDef>,
}

impl TreeDef {
    pub fn effective_kind(&self) -> NodeKind {
        self.kind.unwrap_or(if self.children.is_empty() {
            NodeKind::Leaf
        } else {
            NodeKind::Decision
        })
    }

    /// Builds the node hierarchy. A leaf with children fails the same way
    /// adding to a leaf does.
    pub fn into_node(self) -> TreeResult<Node> {
        let mut node = match self.effective_kind() {
            NodeKind::Decision => Node::from(DecisionNode::new(self.name)),
            NodeKind::Leaf => Node::from(LeafNode::new(self.name)),
        };
        for child in self.children {
            node.add(child.into_node()?)?;
        }
        Ok(node)
    }
}

/// root(A(C), B)
pub fn sample_tree() -> Node {
    let mut root = DecisionNode::new("root");
    let mut a = DecisionNode::new("A");
    a.add(LeafNode::new("C"));
    root.add(a);
    root.add(LeafNode::new("B"));
    root.into()
}

/// Parses a TOML tree definition. `origin` only labels errors.
pub fn parse_tree(content: &str, origin: &Path) -> TreeResult<Node> {
    let def: TreeDef = toml::from_str(content).map_err(|e| TreeError::InvalidDefinition {
        path: origin.to_path_buf(),
        reason: e.to_string(),
    })?;
    def.into_node().map_err(|e| TreeError::InvalidDefinition {
        path: origin.to_path_buf(),
        reason: e.to_string(),
    })
}

#[instrument(level = "debug")]
pub fn load_tree(path: &Path) -> TreeResult<Node> {
    let content = std::fs::read_to_string(path).map_err(|source| TreeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let root = parse_tree(&content, path)?;
    debug!("loaded {} nodes from {}", root.count(), path.display());
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_def_without_kind_when_resolved_then_infers_from_children() {
        let leaf = TreeDef {
            name: "l".into(),
            kind: None,
            children: vec![],
        };
        let inner = TreeDef {
            name: "i".into(),
            kind: None,
            children: vec![leaf.clone()],
        };
        assert_eq!(leaf.effective_kind(), NodeKind::Leaf);
        assert_eq!(inner.effective_kind(), NodeKind::Decision);
    }

    #[test]
    fn given_sample_tree_when_built_then_has_four_nodes() {
        let root = sample_tree();
        assert_eq!(root.count(), 4);
        assert_eq!(root.children().len(), 2);
    }
}
