//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::iter::TraversalOrder;

/// Decision tree skeleton: composite nodes, traversal iterators, visitors and a staged builder
#[derive(Parser, Debug)]
#[command(name = "dectree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Tree definition file (TOML), default: configured file or the sample tree
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub tree: Option<PathBuf>,

    /// Extra config file, applied over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Show author and version
    #[arg(long)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the tree
    Show,

    /// Traverse the tree and print every node with its depth
    Walk {
        /// Traversal order (default: from config)
        #[arg(short, long, value_enum)]
        order: Option<TraversalOrder>,
    },

    /// Count nodes and leaves, measure depth
    Stats {
        /// Traversal order (default: from config)
        #[arg(short, long, value_enum)]
        order: Option<TraversalOrder>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the staged builder (splitting, stopping, pruning)
    Build {
        /// Number of stages to advance (default: run to completion)
        #[arg(short, long)]
        steps: Option<usize>,
    },

    /// Show, build, walk and measure the tree in one go
    Demo,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings as TOML
    Show,
    /// Print a config template
    Template,
}
