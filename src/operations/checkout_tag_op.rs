use serde::{Deserialize, Serialize};
use tracing::info;

use super::RepoOperation;
use crate::error::SimulationResult;
use crate::git::GitRepository;
use crate::state::RepoState;

/// Detach HEAD at the commit a tag points to. Leaves the logical clock alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchToTag {
    pub name: String,
}

impl SwitchToTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl RepoOperation for SwitchToTag {
    fn name(&self) -> &'static str {
        "switch_to_tag"
    }

    fn apply(&self, state: &mut RepoState) -> SimulationResult<()> {
        // Works on a fresh handle read from disk; the state's handle stays as it is
        let reopened = GitRepository::open(state.path())?;
        let target = reopened.read_tag(&self.name)?;

        info!("Switching to tag {} at {}", self.name, target);
        reopened.checkout_commit(target)?;
        Ok(())
    }
}
