use super::*;

#[test]
fn test_lightweight_tag() {
    let (_temp_dir, repo) = create_test_repo();
    let oid = commit_file(&repo, "file1.txt", "content1", "commit1", 0);

    repo.create_tag("v1.0.0", oid, None).unwrap();

    let reference = repo.repo().find_reference("refs/tags/v1.0.0").unwrap();
    assert_eq!(reference.target(), Some(oid));
    assert_eq!(repo.read_tag("v1.0.0").unwrap(), oid);
}

#[test]
fn test_annotated_tag() {
    let (_temp_dir, repo) = create_test_repo();
    let oid = commit_file(&repo, "file1.txt", "content1", "commit1", 0);
    let tagger = test_author(5);

    repo.create_tag("v1.0.0", oid, Some(("message1", &tagger))).unwrap();

    let reference = repo.repo().find_reference("refs/tags/v1.0.0").unwrap();
    let tag = reference.peel_to_tag().unwrap();
    assert_eq!(tag.target_id(), oid);
    assert_eq!(tag.message(), Some("message1\n"));
    let signature = tag.tagger().unwrap();
    assert_eq!(signature.name(), Some("test-user"));
    assert_eq!(signature.when().seconds(), tagger.when.timestamp());

    // Reading the tag peels through the tag object
    assert_eq!(repo.read_tag("v1.0.0").unwrap(), oid);
}

#[test]
fn test_annotated_tag_with_empty_tagger() {
    let (_temp_dir, repo) = create_test_repo();
    let oid = commit_file(&repo, "file1.txt", "content1", "commit1", 0);
    let tagger = Author::new("", "");

    repo.create_tag("v1.0.0", oid, Some(("message1\n", &tagger))).unwrap();

    let reference = repo.repo().find_reference("refs/tags/v1.0.0").unwrap();
    let tag = reference.peel_to_tag().unwrap();
    assert_eq!(tag.message(), Some("message1\n"));
    assert_eq!(tag.tagger().unwrap().name(), Some(""));
    assert_eq!(repo.read_tag("v1.0.0").unwrap(), oid);
}

#[test]
fn test_duplicate_annotated_tag_fails() {
    let (_temp_dir, repo) = create_test_repo();
    let oid = commit_file(&repo, "file1.txt", "content1", "commit1", 0);
    let tagger = test_author(5);

    repo.create_tag("v1.0.0", oid, None).unwrap();
    let result = repo.create_tag("v1.0.0", oid, Some(("message1", &tagger)));
    assert!(matches!(result, Err(crate::git::BackendError::TagExists(_))));
}

#[test]
fn test_duplicate_tag_fails() {
    let (_temp_dir, repo) = create_test_repo();
    let oid = commit_file(&repo, "file1.txt", "content1", "commit1", 0);

    repo.create_tag("v1.0.0", oid, None).unwrap();
    assert!(repo.create_tag("v1.0.0", oid, None).is_err());
}

#[test]
fn test_read_missing_tag() {
    let (_temp_dir, repo) = create_test_repo();
    commit_file(&repo, "file1.txt", "content1", "commit1", 0);

    let result = repo.read_tag("nope");
    assert!(matches!(result, Err(crate::git::BackendError::TagNotFound { .. })));
}
