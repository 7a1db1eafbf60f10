use tracing::info;
use git2::build::CheckoutBuilder;
use git2::{BranchType, ObjectType, Oid, Repository};

use crate::git::error::{BackendError, BackendResult};
use crate::git::utils::GitUtils;

/// Branch and checkout operations for git repositories
pub struct CheckoutOps;

impl CheckoutOps {
    /// Create a local branch at the current HEAD commit
    pub fn create_branch(repo: &Repository, name: &str) -> BackendResult<()> {
        if repo.find_branch(name, BranchType::Local).is_ok() {
            return Err(BackendError::BranchExists(name.to_string()));
        }

        let head_commit = repo.head()?.peel_to_commit()?;
        repo.branch(name, &head_commit, false)?;

        info!("Created branch {} at {}", name, head_commit.id());
        Ok(())
    }

    /// Switch the working tree and HEAD to an existing local branch
    pub fn checkout_branch(repo: &Repository, name: &str) -> BackendResult<()> {
        let branch = repo
            .find_branch(name, BranchType::Local)
            .map_err(|source| BackendError::BranchNotFound { name: name.to_string(), source })?;
        let target = branch.get().peel(ObjectType::Commit)?;

        // Safe checkout refuses to clobber conflicting uncommitted changes
        repo.checkout_tree(&target, Some(CheckoutBuilder::new().safe()))?;
        repo.set_head(&GitUtils::branch_ref(name))?;

        info!("Checked out branch {}", name);
        Ok(())
    }

    /// Check out an exact commit, leaving HEAD detached
    pub fn checkout_commit(repo: &Repository, oid: Oid) -> BackendResult<()> {
        let commit = repo.find_commit(oid)?;

        repo.checkout_tree(commit.as_object(), Some(CheckoutBuilder::new().safe()))?;
        repo.set_head_detached(oid)?;

        info!("Checked out commit {} (detached HEAD)", oid);
        Ok(())
    }

    /// Point the symbolic HEAD at `refs/heads/<name>` without touching the working tree
    pub fn set_head_symbolic(repo: &Repository, name: &str) -> BackendResult<()> {
        let target = GitUtils::branch_ref(name);
        repo.reference_symbolic("HEAD", &target, true, "set default branch")?;

        info!("HEAD now points at {}", target);
        Ok(())
    }
}
