//! Common test utilities for repo-simulator integration tests

#![allow(dead_code)]

use std::time::Duration;
use chrono::{DateTime, TimeZone, Utc};
use git2::Repository;
use tempfile::TempDir;

use repo_simulator::{Operation, RepoState, SimulationResult, apply_all, logging};

/// Start time shared by every fixture, so golden commit ids stay stable
pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 7, 1, 49, 0).unwrap()
}

/// A state configured the same way for every test, pointing at a fresh temporary directory
pub fn test_state(temp_dir: &TempDir) -> RepoState {
    RepoState::new()
        .with_path(temp_dir.path())
        .with_default_author("John Doe", "jd@example.com")
        .with_now(start_time())
        .with_default_advance(Duration::from_secs(5))
}

/// Run `ops` against a fresh repository, returning the directory and the final state
pub fn try_setup_repo(ops: Vec<Operation>) -> (TempDir, SimulationResult<RepoState>) {
    logging::init_tracing(false);
    let temp_dir = TempDir::new().unwrap();
    let mut state = test_state(&temp_dir);
    let result = apply_all(&mut state, &ops).map(|_| state);
    (temp_dir, result)
}

/// Run `ops` against a fresh repository, panicking if any operation fails
pub fn setup_repo(ops: Vec<Operation>) -> (TempDir, RepoState) {
    let (temp_dir, result) = try_setup_repo(ops);
    (temp_dir, result.unwrap())
}

/// Open the produced repository independently of the simulator's handle
pub fn open(temp_dir: &TempDir) -> Repository {
    Repository::open(temp_dir.path()).unwrap()
}

/// First seven hex digits of an object id
pub fn short(oid: git2::Oid) -> String {
    oid.to_string()[..7].to_string()
}
