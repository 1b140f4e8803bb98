//! Error types for dockguard.
//!
//! Parsing and validation never fail: syntax problems and rule violations are
//! returned as data. The variants below belong to the collaborators around
//! the core (reading rule configuration, resolving rule ids, writing output).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The rule configuration file could not be read.
    #[error("Failed to read rule configuration {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rule configuration is not valid YAML or has the wrong shape.
    #[error("Failed to parse rule configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// A configured rule id has no entry in the catalog.
    #[error("Unknown rule id '{0}' (run `dockguard rules` to list the catalog)")]
    UnknownRule(String),

    /// The same rule is configured more than once.
    #[error("Rule '{0}' is configured more than once")]
    DuplicateRule(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for dockguard operations.
pub type Result<T> = std::result::Result<T, Error>;
