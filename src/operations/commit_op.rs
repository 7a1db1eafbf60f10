use std::time::Duration;
use serde::{Deserialize, Serialize};

use super::RepoOperation;
use super::serde_helpers::secs;
use crate::author::Author;
use crate::error::SimulationResult;
use crate::state::RepoState;

/// Commit whatever is staged.
///
/// The author's timestamp is always replaced with the logical clock; without
/// an explicit author the state's default identity is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    #[serde(default, rename = "advance_secs", with = "secs::option", skip_serializing_if = "Option::is_none")]
    pub advance_by: Option<Duration>,
}

impl Commit {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            author: None,
            advance_by: None,
        }
    }

    pub fn author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    pub fn advance_by(mut self, by: Duration) -> Self {
        self.advance_by = Some(by);
        self
    }

    fn resolve_author(&self, state: &RepoState) -> Author {
        self.author
            .as_ref()
            .unwrap_or(state.default_author())
            .stamped(state.now())
    }
}

impl RepoOperation for Commit {
    fn name(&self) -> &'static str {
        "commit"
    }

    fn apply(&self, state: &mut RepoState) -> SimulationResult<()> {
        let author = self.resolve_author(state);
        let oid = state.repository()?.commit(&self.message, &author)?;

        state.record_commit(oid);
        state.advance_after_operation(self.advance_by);
        Ok(())
    }
}
