use std::time::Duration;
use serde::{Deserialize, Serialize};

use super::RepoOperation;
use super::serde_helpers::secs;
use crate::error::SimulationResult;
use crate::state::RepoState;

/// Move the logical clock forward by exactly `by`. Never touches the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvanceClock {
    #[serde(rename = "secs", with = "secs")]
    pub by: Duration,
}

impl AdvanceClock {
    pub fn new(by: Duration) -> Self {
        Self { by }
    }

    pub fn secs(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }
}

impl RepoOperation for AdvanceClock {
    fn name(&self) -> &'static str {
        "advance_clock"
    }

    fn apply(&self, state: &mut RepoState) -> SimulationResult<()> {
        state.advance_clock(self.by);
        Ok(())
    }
}
