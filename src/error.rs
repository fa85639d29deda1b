//! Error types for quest discovery and bundling.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a bundling run.
#[derive(Debug, Error)]
pub enum BundleError {
    /// A requested quest name matched no file under the root.
    #[error("quest file not found: {0}")]
    QuestNotFound(String),

    /// A requested directory name matched no directory under the root.
    #[error("directory not found: {0}")]
    DirectoryNotFound(String),

    /// The quests root itself does not exist or is not a directory.
    #[error("quests root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("directory traversal failed: {0}")]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, BundleError>;
