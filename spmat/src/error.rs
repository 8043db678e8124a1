//! Errors raised while loading a matrix source

use std::io;
use std::path::PathBuf;

use spmat_core::SpmatError;
use thiserror::Error;

/// Failure to turn a file into a [`SparseMatrix`](spmat_core::SparseMatrix)
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be opened or read
    #[error("Unable to open file '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The source was read but its contents are malformed
    #[error("Invalid matrix file '{}'", .path.display())]
    Matrix {
        path: PathBuf,
        #[source]
        source: SpmatError,
    },
}

impl LoadError {
    /// Core error kind, for callers that match on the error category
    pub fn kind(&self) -> SpmatError {
        match self {
            LoadError::Io { .. } => SpmatError::Io,
            LoadError::Matrix { source, .. } => *source,
        }
    }

    /// Path of the source that failed to load
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Io { path, .. } | LoadError::Matrix { path, .. } => path,
        }
    }
}
