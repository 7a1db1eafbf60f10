use std::time::Duration;
use serde::{Deserialize, Serialize};

use super::RepoOperation;
use super::serde_helpers::secs;
use crate::error::SimulationResult;
use crate::state::RepoState;

/// Repoint the symbolic HEAD at `branch` without a checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetDefaultBranch {
    pub branch: String,
    #[serde(default, rename = "advance_secs", with = "secs::option", skip_serializing_if = "Option::is_none")]
    pub advance_by: Option<Duration>,
}

impl SetDefaultBranch {
    pub fn new(branch: impl Into<String>) -> Self {
        Self { branch: branch.into(), advance_by: None }
    }

    pub fn advance_by(mut self, by: Duration) -> Self {
        self.advance_by = Some(by);
        self
    }
}

impl RepoOperation for SetDefaultBranch {
    fn name(&self) -> &'static str {
        "set_default_branch"
    }

    fn apply(&self, state: &mut RepoState) -> SimulationResult<()> {
        state.repository()?.set_head_symbolic(&self.branch)?;
        state.set_default_branch(&self.branch);
        state.advance_after_operation(self.advance_by);
        Ok(())
    }
}
