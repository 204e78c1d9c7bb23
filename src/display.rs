use termtree::Tree;
use tracing::instrument;

use crate::node::Node;

pub trait TreeDisplay {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeDisplay for Node {
    #[instrument(level = "trace", skip(self), fields(node = %self))]
    fn to_tree_string(&self) -> Tree<String> {
        // Only `children()` and the display name are needed here
        let leaves: Vec<_> = self
            .children()
            .into_iter()
            .map(|c| c.to_tree_string())
            .collect();

        Tree::new(self.to_string()).with_leaves(leaves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_nested_tree_when_rendered_then_contains_every_node_in_order() {
        let mut root = Node::decision("root");
        let mut a = Node::decision("A");
        a.add(Node::leaf("C")).unwrap();
        root.add(a).unwrap();
        root.add(Node::leaf("B")).unwrap();

        let rendered = root.to_tree_string().to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "DecisionNode<root>");
        assert!(lines[1].ends_with("DecisionNode<A>"));
        assert!(lines[2].ends_with("LeafNode<C>"));
        assert!(lines[3].ends_with("LeafNode<B>"));
    }
}
