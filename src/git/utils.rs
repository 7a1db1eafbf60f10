use git2::{Oid, Repository, Signature, Time};

use crate::author::Author;
use crate::git::error::{BackendError, BackendResult};

/// Utility functions for git operations
pub struct GitUtils;

impl GitUtils {
    /// Create a signature pinned to the author's timestamp, always in UTC
    pub fn create_signature(author: &Author) -> BackendResult<Signature<'static>> {
        let when = Time::new(author.when.timestamp(), 0);
        Ok(Signature::new(&author.name, &author.email, &when)?)
    }

    /// Raw `name <email> seconds +0000` line as stored in tag objects; empty parts are kept
    pub fn format_identity(author: &Author) -> BackendResult<String> {
        let forbidden = |s: &str| s.contains(['<', '>', '\n']);
        if forbidden(&author.name) || forbidden(&author.email) {
            return Err(BackendError::InvalidIdentity(format!("{} <{}>", author.name, author.email)));
        }
        Ok(format!("{} <{}> {} +0000", author.name, author.email, author.when.timestamp()))
    }

    /// Full reference name for a local branch
    pub fn branch_ref(name: &str) -> String {
        format!("refs/heads/{}", name)
    }

    /// Full reference name for a tag
    pub fn tag_ref(name: &str) -> String {
        format!("refs/tags/{}", name)
    }

    /// Get the commit HEAD points at, or None while HEAD is unborn
    pub fn head_commit_id(repo: &Repository) -> BackendResult<Option<Oid>> {
        match repo.head() {
            Ok(head) => Ok(head.target()),
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => Ok(None),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_create_signature_uses_author_time() {
        let when = Utc.with_ymd_and_hms(2025, 6, 7, 1, 49, 0).unwrap();
        let author = Author::new("John Doe", "jd@example.com").stamped(when);

        let sig = GitUtils::create_signature(&author).unwrap();
        assert_eq!(sig.name(), Some("John Doe"));
        assert_eq!(sig.email(), Some("jd@example.com"));
        assert_eq!(sig.when().seconds(), when.timestamp());
        assert_eq!(sig.when().offset_minutes(), 0);
    }

    #[test]
    fn test_create_signature_rejects_empty_name() {
        let author = Author::new("", "jd@example.com");
        assert!(GitUtils::create_signature(&author).is_err());
    }

    #[test]
    fn test_format_identity() {
        let when = Utc.with_ymd_and_hms(2025, 6, 7, 1, 49, 15).unwrap();
        let author = Author::new("", "").stamped(when);
        assert_eq!(GitUtils::format_identity(&author).unwrap(), format!(" <> {} +0000", when.timestamp()));

        let author = Author::new("Bad <name>", "x@example.com");
        assert!(matches!(GitUtils::format_identity(&author), Err(BackendError::InvalidIdentity(_))));
    }

    #[test]
    fn test_ref_names() {
        assert_eq!(GitUtils::branch_ref("main"), "refs/heads/main");
        assert_eq!(GitUtils::tag_ref("v1.0.0"), "refs/tags/v1.0.0");
    }
}
