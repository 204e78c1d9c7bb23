use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::display::TreeDisplay;
use crate::iter::TraversalOrder;
use crate::loader::{load_tree, sample_tree};
use crate::node::Node;
use crate::state::TreeBuilder;
use crate::stats::collect_stats;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);

    match &cli.command {
        Some(Commands::Show) => _show(&load_root(cli, &settings)?),
        Some(Commands::Walk { order }) => {
            _walk(&load_root(cli, &settings)?, order.unwrap_or(settings.order))
        }
        Some(Commands::Stats { order, json }) => _stats(
            &load_root(cli, &settings)?,
            order.unwrap_or(settings.order),
            *json,
        ),
        Some(Commands::Build { steps }) => {
            let outcome = _build(&mut load_root(cli, &settings)?, *steps)?;
            debug!(
                "build ran {} stages, pruned {}, exhausted: {}",
                outcome.stages,
                outcome.pruned.len(),
                outcome.exhausted
            );
            Ok(())
        }
        Some(Commands::Demo) => _demo(load_root(cli, &settings)?),
        Some(Commands::Config { command }) => _config(command, &settings),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

/// `--tree` beats the configured file, which beats the sample tree.
fn load_root(cli: &Cli, settings: &Settings) -> CliResult<Node> {
    match cli.tree.as_ref().or(settings.tree_file.as_ref()) {
        Some(path) => Ok(load_tree(path)?),
        None => Ok(sample_tree()),
    }
}

#[instrument(skip(root))]
fn _show(root: &Node) -> CliResult<()> {
    output::info(&root.to_tree_string());
    Ok(())
}

#[instrument(skip(root))]
fn _walk(root: &Node, order: TraversalOrder) -> CliResult<()> {
    output::header(&format!("{order} traversal"));
    for (node, depth) in root.traverse(order) {
        output::detail(&format!("{}{} (depth={})", "  ".repeat(depth), node, depth));
    }
    let names = root.traverse(order).map(|(n, _)| n.name()).join(" -> ");
    output::action("order", &names);
    Ok(())
}

#[instrument(skip(root))]
fn _stats(root: &Node, order: TraversalOrder, json: bool) -> CliResult<()> {
    let stats = collect_stats(root, order);
    if json {
        let rendered = serde_json::to_string_pretty(&stats)
            .map_err(|e| CliError::Usage(format!("cannot render stats: {e}")))?;
        output::info(&rendered);
    } else {
        output::action("nodes", &stats.nodes);
        output::action("leaves", &stats.leaves);
        output::action("max depth", &stats.max_depth);
    }
    Ok(())
}

/// What one `build` invocation did to the tree.
#[derive(Debug)]
struct BuildOutcome {
    stages: usize,
    exhausted: bool,
    pruned: Vec<Node>,
}

#[instrument(skip(root))]
fn _build(root: &mut Node, steps: Option<usize>) -> CliResult<BuildOutcome> {
    if steps == Some(0) {
        return Err(CliError::InvalidArgs("--steps must be at least 1".into()));
    }
    let mut builder = TreeBuilder::new(Some(&mut *root));
    output::header("Building");
    let mut stages = 0;
    let mut exhausted = false;
    match steps {
        Some(n) => {
            for _ in 0..n {
                let from = builder.state();
                if !builder.advance() {
                    output::warning("no more states");
                    exhausted = true;
                    break;
                }
                stages += 1;
                output::detail(&format!("{} -> {}", from, builder.state()));
            }
        }
        None => {
            stages = builder.run();
            output::detail(&format!("{} stages, now {}", stages, builder.state()));
        }
    }
    let pruned = builder.into_pruned();
    for node in &pruned {
        output::removed(node);
    }
    _show(root)?;
    Ok(BuildOutcome {
        stages,
        exhausted,
        pruned,
    })
}

#[instrument(skip(root))]
fn _demo(mut root: Node) -> CliResult<()> {
    output::header("[1] Initial structure");
    _show(&root)?;

    output::header("[2] Staged construction");
    _build(&mut root, None)?;

    output::header("[3] Traversals");
    _walk(&root, TraversalOrder::Pre)?;
    _walk(&root, TraversalOrder::Bfs)?;

    output::header("[4] Visitors");
    _stats(&root, TraversalOrder::Pre, false)
}

fn _config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}
