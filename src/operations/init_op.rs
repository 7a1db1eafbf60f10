use std::time::Duration;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::RepoOperation;
use super::serde_helpers::secs;
use crate::error::{SimulationError, SimulationResult};
use crate::git::GitRepository;
use crate::state::RepoState;

/// Create the repository at the state's path with `branch` as its initial HEAD
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Initialize {
    pub branch: String,
    #[serde(default, rename = "advance_secs", with = "secs::option", skip_serializing_if = "Option::is_none")]
    pub advance_by: Option<Duration>,
}

impl Initialize {
    pub fn new(branch: impl Into<String>) -> Self {
        Self { branch: branch.into(), advance_by: None }
    }

    pub fn advance_by(mut self, by: Duration) -> Self {
        self.advance_by = Some(by);
        self
    }
}

impl RepoOperation for Initialize {
    fn name(&self) -> &'static str {
        "initialize"
    }

    fn apply(&self, state: &mut RepoState) -> SimulationResult<()> {
        if state.path().as_os_str().is_empty() {
            return Err(SimulationError::InvalidPath("repository path is empty".to_string()));
        }

        info!("Initializing repository at {:?} on branch {}", state.path(), self.branch);
        let repository = GitRepository::init(state.path(), &self.branch)?;

        state.attach_repository(repository);
        state.set_default_branch(&self.branch);
        state.advance_after_operation(self.advance_by);
        Ok(())
    }
}
