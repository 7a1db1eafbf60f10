pub mod repository_tests;
pub mod tag_ops_tests;
pub mod checkout_ops_tests;

use chrono::{TimeZone, Utc};
use tempfile::TempDir;
use crate::author::Author;
use crate::git::GitRepository;

/// Helper function to create a test author at a fixed time
pub fn test_author(offset_secs: i64) -> Author {
    let start = Utc.with_ymd_and_hms(2025, 6, 7, 1, 49, 0).unwrap();
    Author::new("test-user", "test@example.com").stamped(start + chrono::TimeDelta::seconds(offset_secs))
}

/// Helper function to create a repository on `main` in a fresh temporary directory
pub fn create_test_repo() -> (TempDir, GitRepository) {
    let temp_dir = tempfile::tempdir().unwrap();
    let repo = GitRepository::init(temp_dir.path(), "main").unwrap();
    (temp_dir, repo)
}

/// Helper function to write, stage and commit a single file
pub fn commit_file(repo: &GitRepository, path: &str, content: &str, message: &str, offset_secs: i64) -> git2::Oid {
    repo.write_file(path, content.as_bytes()).unwrap();
    repo.stage(path).unwrap();
    repo.commit(message, &test_author(offset_secs)).unwrap()
}
