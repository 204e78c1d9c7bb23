//! Decision tree skeleton built with four classic patterns:
//! composite nodes ([`node`]), traversal iterators ([`iter`]),
//! visitors ([`visitor`]) and a staged builder ([`state`]).

pub mod cli;
pub mod config;
pub mod display;
pub mod errors;
pub mod exitcode;
pub mod iter;
pub mod loader;
pub mod node;
pub mod state;
pub mod stats;
pub mod util;
pub mod visitor;

pub use errors::{TreeError, TreeResult};
pub use iter::{BreadthFirstIter, PreOrderIter, TraversalOrder};
pub use node::{DecisionNode, LeafNode, Node, NodeId};
pub use state::{BuilderState, TreeBuilder};
pub use stats::{collect_stats, TreeStats};
pub use visitor::{CountLeavesVisitor, DepthVisitor, Visitor};
