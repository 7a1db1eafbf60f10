use std::path::{Path, PathBuf};
use tracing::info;
use git2::{Oid, Repository};

use crate::author::Author;

use super::error::BackendResult;
use super::utils::GitUtils;
use super::operations::*;

/// Git repository wrapper owning both the repository and its working tree location
pub struct GitRepository {
    repo: Repository,
    work_dir: PathBuf,
}

impl std::fmt::Debug for GitRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitRepository")
            .field("work_dir", &self.work_dir)
            .finish()
    }
}

impl GitRepository {
    /// Initialize a new git repository in the given directory
    pub fn init<P: AsRef<Path>>(path: P, initial_branch: &str) -> BackendResult<Self> {
        let work_dir = path.as_ref().to_path_buf();
        let repo = InitOps::init_repository(&work_dir, initial_branch)?;
        Ok(Self { repo, work_dir })
    }

    /// Open an existing git repository
    pub fn open<P: AsRef<Path>>(path: P) -> BackendResult<Self> {
        let work_dir = path.as_ref().to_path_buf();
        let repo = InitOps::open_repository(&work_dir)?;
        info!("GitRepository::open: Opened repository at {:?}", work_dir);
        Ok(Self { repo, work_dir })
    }

    /// Get the working directory path
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Get the underlying git2 repository
    pub fn repo(&self) -> &Repository {
        &self.repo
    }

    // File operations
    pub fn write_file<P: AsRef<Path>>(&self, path: P, content: &[u8]) -> BackendResult<()> {
        FileOps::write_file(&self.work_dir, path.as_ref(), content)
    }

    pub fn stage<P: AsRef<Path>>(&self, path: P) -> BackendResult<()> {
        FileOps::stage_path(&self.repo, path.as_ref())
    }

    // Commit operations
    pub fn commit(&self, message: &str, author: &Author) -> BackendResult<Oid> {
        CommitOps::create_commit(&self.repo, message, author)
    }

    // Tag operations
    pub fn create_tag(&self, name: &str, target: Oid, annotation: Option<(&str, &Author)>) -> BackendResult<()> {
        match annotation {
            Some((message, tagger)) => {
                TagOps::create_annotated_tag(&self.repo, name, target, message, tagger).map(|_| ())
            }
            None => TagOps::create_lightweight_tag(&self.repo, name, target),
        }
    }

    pub fn read_tag(&self, name: &str) -> BackendResult<Oid> {
        TagOps::resolve_tag(&self.repo, name)
    }

    // Branch and checkout operations
    pub fn checkout_branch(&self, name: &str, create: bool) -> BackendResult<()> {
        if create {
            CheckoutOps::create_branch(&self.repo, name)?;
        }
        CheckoutOps::checkout_branch(&self.repo, name)
    }

    pub fn checkout_commit(&self, oid: Oid) -> BackendResult<()> {
        CheckoutOps::checkout_commit(&self.repo, oid)
    }

    pub fn set_head_symbolic(&self, branch: &str) -> BackendResult<()> {
        CheckoutOps::set_head_symbolic(&self.repo, branch)
    }

    // Read helpers
    /// Short name of the branch HEAD follows, None when detached
    pub fn head_branch(&self) -> BackendResult<Option<String>> {
        if self.repo.head_detached()? {
            return Ok(None);
        }
        let head = self.repo.find_reference("HEAD")?;
        Ok(head
            .symbolic_target()
            .map(|target| target.trim_start_matches("refs/heads/").to_string()))
    }

    pub fn head_commit_id(&self) -> BackendResult<Option<Oid>> {
        GitUtils::head_commit_id(&self.repo)
    }

    pub fn is_head_detached(&self) -> BackendResult<bool> {
        Ok(self.repo.head_detached()?)
    }
}
