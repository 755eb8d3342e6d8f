use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A path that could not be followed through the tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("cannot access '{path}': No such file or directory")]
    NotFound { path: String },
}

/// Failure to obtain the tree from its backing file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Error: The file {} does not exist.", .path.display())]
    Missing { path: PathBuf },

    #[error("Error: Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error: The file does not contain valid JSON.")]
    InvalidJson(#[source] serde_json::Error),
}

/// Anything that stops a listing from being produced.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
