use tracing::info;
use git2::{Oid, Repository};

use crate::author::Author;
use crate::git::error::{BackendError, BackendResult};
use crate::git::utils::GitUtils;

/// Commit operations for git repositories
pub struct CommitOps;

impl CommitOps {
    /// Commit the current index on top of HEAD, with the author also used as committer
    pub fn create_commit(repo: &Repository, message: &str, author: &Author) -> BackendResult<Oid> {
        let signature = GitUtils::create_signature(author)?;

        let mut index = repo.index()?;
        index.read(false)?;
        let tree_id = index.write_tree()?;
        let tree = repo.find_tree(tree_id)?;

        let parent_commit = match GitUtils::head_commit_id(repo)? {
            Some(oid) => Some(repo.find_commit(oid)?),
            None => None,
        };

        // Refuse empty commits, the same way a plain `git commit` would
        match &parent_commit {
            Some(parent) if parent.tree_id() == tree_id => return Err(BackendError::NothingToCommit),
            None if index.is_empty() => return Err(BackendError::NothingToCommit),
            _ => {}
        }

        let commit_id = repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parent_commit.iter().collect::<Vec<_>>(),
        )?;

        info!("Created commit: {}", commit_id);
        Ok(commit_id)
    }
}
