use std::path::{Path, PathBuf};
use thiserror::Error;

/// Typed errors for sweep operations.
/// We use `anyhow` at the top level for CLI error handling,
/// but these typed errors allow the engine to be precise about failures.
#[derive(Debug, Error)]
pub enum SweepError {
    /// Listing a directory failed (missing path, permissions)
    #[error("failed to list directory '{path}': {source}")]
    List {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading file metadata failed
    #[error("failed to read metadata for '{path}': {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Deleting a file failed
    #[error("failed to remove file '{path}': {source}")]
    RemoveFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Deleting a directory failed. `remove_dir` is non-recursive, so this
    /// also fires when a directory was repopulated between the emptiness
    /// check and the delete call.
    #[error("failed to remove directory '{path}': {source}")]
    RemoveDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file does not exist
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Config file exists but cannot be read or parsed
    #[error("invalid config '{path}': {message}")]
    ConfigInvalid { path: PathBuf, message: String },
}

impl SweepError {
    pub fn list(path: &Path, source: std::io::Error) -> Self {
        SweepError::List {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn metadata(path: &Path, source: std::io::Error) -> Self {
        SweepError::Metadata {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn remove_file(path: &Path, source: std::io::Error) -> Self {
        SweepError::RemoveFile {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn remove_dir(path: &Path, source: std::io::Error) -> Self {
        SweepError::RemoveDir {
            path: path.to_path_buf(),
            source,
        }
    }
}
