use std::time::Duration;
use serde::{Deserialize, Serialize};

use super::RepoOperation;
use super::serde_helpers::secs;
use crate::error::SimulationResult;
use crate::state::RepoState;

/// Create `name` at the current HEAD and switch to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBranchAndSwitch {
    pub name: String,
    #[serde(default, rename = "advance_secs", with = "secs::option", skip_serializing_if = "Option::is_none")]
    pub advance_by: Option<Duration>,
}

impl CreateBranchAndSwitch {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), advance_by: None }
    }

    pub fn advance_by(mut self, by: Duration) -> Self {
        self.advance_by = Some(by);
        self
    }
}

impl RepoOperation for CreateBranchAndSwitch {
    fn name(&self) -> &'static str {
        "create_branch_and_switch"
    }

    fn apply(&self, state: &mut RepoState) -> SimulationResult<()> {
        state.repository()?.checkout_branch(&self.name, true)?;
        state.advance_after_operation(self.advance_by);
        Ok(())
    }
}

/// Switch to an existing branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchBranch {
    pub name: String,
    #[serde(default, rename = "advance_secs", with = "secs::option", skip_serializing_if = "Option::is_none")]
    pub advance_by: Option<Duration>,
}

impl SwitchBranch {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), advance_by: None }
    }

    pub fn advance_by(mut self, by: Duration) -> Self {
        self.advance_by = Some(by);
        self
    }
}

impl RepoOperation for SwitchBranch {
    fn name(&self) -> &'static str {
        "switch_branch"
    }

    fn apply(&self, state: &mut RepoState) -> SimulationResult<()> {
        state.repository()?.checkout_branch(&self.name, false)?;
        state.advance_after_operation(self.advance_by);
        Ok(())
    }
}
