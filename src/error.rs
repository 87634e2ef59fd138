//! Error types for tree rendering

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while walking a directory or writing its tree.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("cannot access '{}': No such file or directory", .0.display())]
    PathNotFound(PathBuf),

    #[error("cannot open '{}': Permission denied", .0.display())]
    PermissionDenied(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("symlink cycle detected at '{}'", .0.display())]
    CyclicStructure(PathBuf),

    #[error("cannot write output file '{}': {source}", .path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error at path '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output sink failed; the caller knows which file it was.
    #[error("error writing output: {0}")]
    Write(#[source] io::Error),
}

impl TreeError {
    /// Classify a filesystem error raised while reading `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => TreeError::PathNotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => TreeError::PermissionDenied(path.to_path_buf()),
            io::ErrorKind::NotADirectory => TreeError::NotADirectory(path.to_path_buf()),
            _ => TreeError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// Attach the output path to a sink failure.
    pub fn with_output_path(self, path: &Path) -> Self {
        match self {
            TreeError::Write(source) => TreeError::OutputWriteFailure {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TreeError>;
