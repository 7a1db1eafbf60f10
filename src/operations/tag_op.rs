use std::time::Duration;
use git2::Oid;
use serde::{Deserialize, Serialize};

use super::RepoOperation;
use super::serde_helpers::{oid_hex, secs};
use crate::author::Author;
use crate::error::SimulationResult;
use crate::state::RepoState;

/// Commit a tag points at
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagTarget {
    /// Whatever the most recent Commit operation produced; fails if there was none
    #[default]
    LastCommit,
    Commit(#[serde(with = "oid_hex")] Oid),
}

impl TagTarget {
    pub fn resolve(&self, state: &RepoState) -> SimulationResult<Oid> {
        match self {
            TagTarget::LastCommit => state.last_commit(),
            TagTarget::Commit(oid) => Ok(*oid),
        }
    }
}

/// Lightweight tag: a bare reference, no message or tagger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub target: TagTarget,
    #[serde(default, rename = "advance_secs", with = "secs::option", skip_serializing_if = "Option::is_none")]
    pub advance_by: Option<Duration>,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: TagTarget::LastCommit,
            advance_by: None,
        }
    }

    pub fn target(mut self, target: TagTarget) -> Self {
        self.target = target;
        self
    }

    pub fn advance_by(mut self, by: Duration) -> Self {
        self.advance_by = Some(by);
        self
    }
}

impl RepoOperation for Tag {
    fn name(&self) -> &'static str {
        "tag"
    }

    fn apply(&self, state: &mut RepoState) -> SimulationResult<()> {
        let target = self.target.resolve(state)?;
        state.repository()?.create_tag(&self.name, target, None)?;

        state.advance_after_operation(self.advance_by);
        Ok(())
    }
}

/// Annotated tag: a tag object with a message and a tagger stamped by the logical clock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagAnnotated {
    pub name: String,
    pub message: String,
    pub author: Author,
    #[serde(default)]
    pub target: TagTarget,
    #[serde(default, rename = "advance_secs", with = "secs::option", skip_serializing_if = "Option::is_none")]
    pub advance_by: Option<Duration>,
}

impl TagAnnotated {
    pub fn new(name: impl Into<String>, message: impl Into<String>, author: Author) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            author,
            target: TagTarget::LastCommit,
            advance_by: None,
        }
    }

    pub fn target(mut self, target: TagTarget) -> Self {
        self.target = target;
        self
    }

    pub fn advance_by(mut self, by: Duration) -> Self {
        self.advance_by = Some(by);
        self
    }
}

impl RepoOperation for TagAnnotated {
    fn name(&self) -> &'static str {
        "tag_annotated"
    }

    fn apply(&self, state: &mut RepoState) -> SimulationResult<()> {
        let target = self.target.resolve(state)?;
        let tagger = self.author.stamped(state.now());
        state
            .repository()?
            .create_tag(&self.name, target, Some((self.message.as_str(), &tagger)))?;

        state.advance_after_operation(self.advance_by);
        Ok(())
    }
}
