//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/dectree/dectree.toml`
//! 3. Explicit config file passed by the caller
//! 4. Environment variables: `DECTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::errors::{TreeError, TreeResult};
use crate::iter::TraversalOrder;

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub order: Option<TraversalOrder>,
    pub tree_file: Option<PathBuf>,
}

/// Unified configuration for dectree.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Traversal order used by `walk` and `stats` (default: pre)
    pub order: TraversalOrder,
    /// Tree definition to load instead of the built-in sample tree
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree_file: Option<PathBuf>,
}

/// Get the XDG config directory for dectree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "dectree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("dectree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> TreeResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|source| TreeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content)
        .map_err(|e| TreeError::Config(format!("parse {}: {}", path.display(), e)))
}

impl Settings {
    /// Expand `~`, `$VAR` and `${VAR}` in path-like fields.
    fn expand_paths(&mut self) {
        if let Some(path) = self.tree_file.take() {
            let raw = path.to_string_lossy().into_owned();
            let expanded = shellexpand::full(&raw)
                .map(|s| s.into_owned())
                .unwrap_or(raw);
            self.tree_file = Some(PathBuf::from(expanded));
        }
    }

    /// Overlay wins wherever it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            order: overlay.order.unwrap_or(self.order),
            tree_file: overlay
                .tree_file
                .clone()
                .or_else(|| self.tree_file.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file, applied over the global one.
    ///   It must exist when given.
    pub fn load(config_file: Option<&Path>) -> TreeResult<Self> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = config_file {
            current = current.merge_with(&load_raw_settings(path)?);
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply DECTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> TreeResult<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("DECTREE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("order") {
            settings.order = parse_order(&val)?;
        }
        if let Ok(val) = config.get_string("tree_file") {
            settings.tree_file = Some(PathBuf::from(val));
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> TreeResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| TreeError::Config(format!("serialize config: {e}")))
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# dectree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/dectree/dectree.toml
#   Local:  file passed with --config
#   Env:    DECTREE_* environment variables (DECTREE_ORDER, DECTREE_TREE_FILE)

# Traversal order for walk/stats: "pre" or "bfs"
# order = "pre"

# Tree definition to use instead of the built-in sample tree
# tree_file = "~/trees/decision.toml"
"#
        .to_string()
    }
}

fn parse_order(val: &str) -> TreeResult<TraversalOrder> {
    match val.to_ascii_lowercase().as_str() {
        "pre" | "preorder" => Ok(TraversalOrder::Pre),
        "bfs" | "breadth-first" => Ok(TraversalOrder::Bfs),
        other => Err(TreeError::Config(format!("unknown traversal order: {other}"))),
    }
}

fn config_err(e: ConfigError) -> TreeError {
    TreeError::Config(e.to_string())
}
