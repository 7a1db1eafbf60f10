use std::path::{Path, PathBuf};
use std::time::Duration;
use chrono::{DateTime, Utc};
use git2::Oid;
use tracing::debug;

use crate::author::Author;
use crate::clock::LogicalClock;
use crate::config::SimulatorConfig;
use crate::error::{SimulationError, SimulationResult};
use crate::git::GitRepository;

/// Mutable context threaded through every operation of one simulation run
#[derive(Debug, Default)]
pub struct RepoState {
    path: PathBuf,
    repository: Option<GitRepository>,
    last_commit: Option<Oid>,
    clock: LogicalClock,

    default_author: Author,
    default_branch: String,
    default_advance: Duration,
}

impl RepoState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure a state for `path` with every default taken from `config`
    pub fn from_config<P: AsRef<Path>>(path: P, config: &SimulatorConfig) -> Self {
        Self::new()
            .with_path(path)
            .with_now(config.start_time)
            .with_default_author(&config.author_name, &config.author_email)
            .with_default_branch(&config.default_branch)
            .with_default_advance(config.default_advance())
    }

    pub fn with_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.clock = LogicalClock::starting_at(now);
        self
    }

    /// Default author, stamped with the clock value at the time of this call
    pub fn with_default_author(mut self, name: &str, email: &str) -> Self {
        self.default_author = Author::new(name, email).stamped(self.clock.now());
        self
    }

    pub fn with_default_branch(mut self, name: &str) -> Self {
        self.default_branch = name.to_string();
        self
    }

    pub fn with_default_advance(mut self, duration: Duration) -> Self {
        self.default_advance = duration;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn default_author(&self) -> &Author {
        &self.default_author
    }

    pub fn default_branch(&self) -> &str {
        &self.default_branch
    }

    pub fn default_advance(&self) -> Duration {
        self.default_advance
    }

    pub fn is_initialized(&self) -> bool {
        self.repository.is_some()
    }

    /// The open repository, or `NotInitialized` before an Initialize operation ran
    pub fn repository(&self) -> SimulationResult<&GitRepository> {
        self.repository.as_ref().ok_or(SimulationError::NotInitialized)
    }

    /// The most recent commit, or `NoCommitYet` before any Commit operation ran
    pub fn last_commit(&self) -> SimulationResult<Oid> {
        self.last_commit.ok_or(SimulationError::NoCommitYet)
    }

    pub(crate) fn attach_repository(&mut self, repository: GitRepository) {
        self.repository = Some(repository);
    }

    pub(crate) fn record_commit(&mut self, oid: Oid) {
        self.last_commit = Some(oid);
    }

    pub(crate) fn set_default_branch(&mut self, name: &str) {
        self.default_branch = name.to_string();
    }

    /// Move the clock by an explicit duration
    pub fn advance_clock(&mut self, by: Duration) {
        self.clock.advance(by);
    }

    /// Move the clock by the per-operation override, falling back to the default increment
    pub fn advance_after_operation(&mut self, advance_by: Option<Duration>) {
        let by = advance_by.unwrap_or(self.default_advance);
        debug!("Advancing clock after operation (override: {:?})", advance_by);
        self.clock.advance(by);
    }
}
