use super::*;
use crate::git::BackendError;

#[test]
fn test_create_branch_and_checkout() {
    let (_temp_dir, repo) = create_test_repo();
    let first = commit_file(&repo, "file1.txt", "content1", "commit1", 0);

    repo.checkout_branch("branch1", true).unwrap();
    assert_eq!(repo.head_branch().unwrap(), Some("branch1".to_string()));
    assert_eq!(repo.head_commit_id().unwrap(), Some(first));
}

#[test]
fn test_create_existing_branch_fails() {
    let (_temp_dir, repo) = create_test_repo();
    commit_file(&repo, "file1.txt", "content1", "commit1", 0);

    let result = repo.checkout_branch("main", true);
    assert!(matches!(result, Err(BackendError::BranchExists(_))));
}

#[test]
fn test_checkout_missing_branch_fails() {
    let (_temp_dir, repo) = create_test_repo();
    commit_file(&repo, "file1.txt", "content1", "commit1", 0);

    let result = repo.checkout_branch("nope", false);
    assert!(matches!(result, Err(BackendError::BranchNotFound { .. })));
}

#[test]
fn test_checkout_branch_updates_working_tree() {
    let (temp_dir, repo) = create_test_repo();
    commit_file(&repo, "file1.txt", "content1", "commit1", 0);
    repo.checkout_branch("branch1", true).unwrap();
    commit_file(&repo, "file2.txt", "content2", "commit2", 5);
    assert!(temp_dir.path().join("file2.txt").exists());

    repo.checkout_branch("main", false).unwrap();
    assert_eq!(repo.head_branch().unwrap(), Some("main".to_string()));
    assert!(!temp_dir.path().join("file2.txt").exists());
    assert!(temp_dir.path().join("file1.txt").exists());
}

#[test]
fn test_checkout_commit_detaches_head() {
    let (temp_dir, repo) = create_test_repo();
    let first = commit_file(&repo, "file1.txt", "content1", "commit1", 0);
    commit_file(&repo, "file1.txt", "changed", "commit2", 5);

    repo.checkout_commit(first).unwrap();
    assert!(repo.is_head_detached().unwrap());
    assert_eq!(repo.head_branch().unwrap(), None);
    assert_eq!(repo.head_commit_id().unwrap(), Some(first));
    assert_eq!(std::fs::read_to_string(temp_dir.path().join("file1.txt")).unwrap(), "content1");
}

#[test]
fn test_set_head_symbolic_leaves_working_tree() {
    let (temp_dir, repo) = create_test_repo();
    commit_file(&repo, "file1.txt", "content1", "commit1", 0);

    repo.set_head_symbolic("unborn").unwrap();
    assert_eq!(repo.head_branch().unwrap(), Some("unborn".to_string()));
    assert_eq!(repo.head_commit_id().unwrap(), None);
    assert!(temp_dir.path().join("file1.txt").exists());
    assert!(repo.repo().find_branch("unborn", git2::BranchType::Local).is_err());
}
