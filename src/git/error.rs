use std::path::PathBuf;
use thiserror::Error;

/// Error type for backend repository operations
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Already a git repository: {0:?}")]
    AlreadyRepository(PathBuf),
    #[error("Nothing staged to commit")]
    NothingToCommit,
    #[error("Tag already exists: {0}")]
    TagExists(String),
    #[error("Invalid reference name: {0}")]
    InvalidReferenceName(String),
    #[error("Invalid identity: {0}")]
    InvalidIdentity(String),
    #[error("Branch already exists: {0}")]
    BranchExists(String),
    #[error("Branch not found: {name}: {source}")]
    BranchNotFound {
        name: String,
        #[source]
        source: git2::Error,
    },
    #[error("Tag not found: {name}: {source}")]
    TagNotFound {
        name: String,
        #[source]
        source: git2::Error,
    },
}

/// Alias for Result using BackendError
pub type BackendResult<T> = Result<T, BackendError>;
