use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Unsupported operation: cannot {operation} on leaf '{node}'")]
    UnsupportedOperation {
        operation: &'static str,
        node: String,
    },

    #[error("Invalid tree definition in {path}: {reason}")]
    InvalidDefinition {
        path: PathBuf,
        reason: String,
    },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),
}

impl TreeError {
    pub fn unsupported(operation: &'static str, node: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            operation,
            node: node.into(),
        }
    }
}

pub type TreeResult<T> = Result<T, TreeError>;
