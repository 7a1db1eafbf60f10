use thiserror::Error;

use crate::git::BackendError;

/// Error type for simulation operations
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Repository not initialized; run an Initialize operation first")]
    NotInitialized,
    #[error("No commit has been made yet; a tag needs a commit to point at")]
    NoCommitYet,
    #[error("Invalid repository path: {0}")]
    InvalidPath(String),
    #[error("Operation #{index} ({operation}) failed: {source}")]
    Step {
        index: usize,
        operation: &'static str,
        #[source]
        source: Box<SimulationError>,
    },
    #[error("Scenario parse error: {0}")]
    Scenario(#[from] serde_yaml::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Alias for Result using SimulationError
pub type SimulationResult<T> = Result<T, SimulationError>;
