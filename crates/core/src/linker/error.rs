//! Error types for the linker module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while creating or pruning symlinks.
#[derive(Debug, Error)]
pub enum LinkerError {
    /// Source file not found.
    #[error("Source file not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Failed to create destination directory.
    #[error("Failed to create directory: {path}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create the symlink itself.
    #[error("Failed to create symlink at {target}")]
    SymlinkFailed {
        target: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
