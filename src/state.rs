//! Staged tree construction: Splitting -> Stopping -> Pruning -> Done.

use std::fmt;

use tracing::{debug, info, instrument, warn};

use crate::node::Node;

/// Stage of a [`TreeBuilder`]. `Done` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    Splitting,
    Stopping,
    Pruning,
    Done,
}

impl BuilderState {
    /// Successor in the fixed stage graph. `Done` maps onto itself.
    pub fn next(self) -> Self {
        match self {
            BuilderState::Splitting => BuilderState::Stopping,
            BuilderState::Stopping => BuilderState::Pruning,
            BuilderState::Pruning | BuilderState::Done => BuilderState::Done,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == BuilderState::Done
    }

    /// Runs this stage's work on `builder` and moves it to the next stage.
    fn handle(self, builder: &mut TreeBuilder<'_>) {
        match self {
            BuilderState::Splitting => {
                info!("Splitting: dividing nodes");
                debug!("split criteria are simulated, tree left unchanged");
            }
            BuilderState::Stopping => {
                info!("Stopping: stop condition reached");
            }
            BuilderState::Pruning => {
                info!("Pruning: pruning root");
                builder.prune_last_child();
            }
            BuilderState::Done => return,
        }
        builder.set_state(self.next());
    }
}

impl fmt::Display for BuilderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BuilderState::Splitting => "Splitting",
            BuilderState::Stopping => "Stopping",
            BuilderState::Pruning => "Pruning",
            BuilderState::Done => "Done",
        };
        f.write_str(name)
    }
}

/// Drives a tree through the construction stages.
///
/// The builder borrows the root mutably for its whole lifetime. Without a root
/// every stage still runs, but none of them touches anything.
pub struct TreeBuilder<'a> {
    state: BuilderState,
    root: Option<&'a mut Node>,
    pruned: Vec<Node>,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(root: Option<&'a mut Node>) -> Self {
        Self {
            state: BuilderState::Splitting,
            root,
            pruned: Vec::new(),
        }
    }

    pub fn state(&self) -> BuilderState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Nodes removed by the pruning stage, in removal order.
    pub fn pruned(&self) -> &[Node] {
        &self.pruned
    }

    pub fn into_pruned(self) -> Vec<Node> {
        self.pruned
    }

    /// Overwrites the current stage. No legality check.
    pub fn set_state(&mut self, state: BuilderState) {
        debug!("transition: {} -> {}", self.state, state);
        self.state = state;
    }

    /// Runs one stage. Returns `false` without doing anything once done.
    #[instrument(level = "debug", skip(self), fields(state = %self.state))]
    pub fn advance(&mut self) -> bool {
        if self.state.is_terminal() {
            info!("no more states");
            return false;
        }
        match self.root.as_deref() {
            Some(root) => debug!("working on root '{}'", root.name()),
            None => warn!("no root attached, nothing to do"),
        }
        let state = self.state;
        state.handle(self);
        true
    }

    /// Advances until done and returns the number of stages run.
    #[instrument(level = "debug", skip(self))]
    pub fn run(&mut self) -> usize {
        let mut steps = 0;
        while self.advance() {
            steps += 1;
        }
        steps
    }

    fn prune_last_child(&mut self) {
        let Some(decision) = self.root.as_deref_mut().and_then(Node::as_decision_mut) else {
            debug!("root is absent or a leaf, nothing to prune");
            return;
        };
        let Some(last) = decision.last_child_id() else {
            debug!("root has no children, nothing to prune");
            return;
        };
        if let Some(removed) = decision.remove(last) {
            info!(
                "pruned '{}' from root, {} children left",
                removed.name(),
                decision.child_count()
            );
            self.pruned.push(removed);
        }
    }
}
