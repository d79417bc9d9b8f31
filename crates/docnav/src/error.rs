//! CLI error types.

use std::path::PathBuf;

use docnav_config::ConfigError;
use docnav_tree::NavError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Nav(#[from] NavError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Navigation in {} is out of date", .0.display())]
    OutOfDate(PathBuf),

    #[error("Cannot read {}: {source}", path.display())]
    ReadOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}
