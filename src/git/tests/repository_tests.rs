use super::*;
use crate::git::BackendError;

#[test]
fn test_init_sets_initial_branch() {
    let (temp_dir, repo) = create_test_repo();

    assert!(temp_dir.path().join(".git").exists());
    assert_eq!(repo.work_dir(), temp_dir.path());
    assert_eq!(repo.head_branch().unwrap(), Some("main".to_string()));
    assert_eq!(repo.head_commit_id().unwrap(), None);
    assert!(!repo.is_head_detached().unwrap());
}

#[test]
fn test_init_creates_missing_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested = temp_dir.path().join("a").join("b");

    let repo = GitRepository::init(&nested, "trunk").unwrap();
    assert!(nested.join(".git").exists());
    assert_eq!(repo.head_branch().unwrap(), Some("trunk".to_string()));
}

#[test]
fn test_init_refuses_existing_repository() {
    let (temp_dir, _repo) = create_test_repo();

    let result = GitRepository::init(temp_dir.path(), "main");
    assert!(matches!(result, Err(BackendError::AlreadyRepository(_))));
}

#[test]
fn test_open_existing_repository() {
    let (temp_dir, repo) = create_test_repo();
    let oid = commit_file(&repo, "file1.txt", "content1", "commit1", 0);

    let reopened = GitRepository::open(temp_dir.path()).unwrap();
    assert_eq!(reopened.head_commit_id().unwrap(), Some(oid));
}

#[test]
fn test_open_missing_repository() {
    let temp_dir = tempfile::tempdir().unwrap();
    assert!(GitRepository::open(temp_dir.path().join("nope")).is_err());
}

#[test]
fn test_write_file_creates_parent_directories() {
    let (temp_dir, repo) = create_test_repo();

    repo.write_file("dir/sub/file.txt", b"nested").unwrap();
    repo.stage("dir/sub/file.txt").unwrap();

    let content = std::fs::read(temp_dir.path().join("dir/sub/file.txt")).unwrap();
    assert_eq!(content, b"nested");

    let index = repo.repo().index().unwrap();
    assert!(index.get_path(std::path::Path::new("dir/sub/file.txt"), 0).is_some());
}

#[test]
fn test_stage_missing_file_fails() {
    let (_temp_dir, repo) = create_test_repo();
    assert!(repo.stage("missing.txt").is_err());
}
