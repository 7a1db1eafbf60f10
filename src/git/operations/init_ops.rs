use std::fs;
use std::path::Path;
use tracing::info;
use git2::{Repository, RepositoryInitOptions};

use crate::git::error::{BackendError, BackendResult};

/// Repository initialization operations
pub struct InitOps;

impl InitOps {
    /// Initialize a non-bare repository whose unborn HEAD points at `initial_branch`
    pub fn init_repository(path: &Path, initial_branch: &str) -> BackendResult<Repository> {
        info!("InitOps: Initializing repository at {:?} on branch {}", path, initial_branch);

        if path.join(".git").exists() {
            return Err(BackendError::AlreadyRepository(path.to_path_buf()));
        }

        // Create directory if it doesn't exist
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let mut opts = RepositoryInitOptions::new();
        opts.bare(false)
            .no_reinit(true)
            .mkpath(true)
            .initial_head(initial_branch);

        let repo = Repository::init_opts(path, &opts)?;
        info!("InitOps: Initialized git repository at {:?}", path);
        Ok(repo)
    }

    /// Open an existing repository from disk
    pub fn open_repository(path: &Path) -> BackendResult<Repository> {
        info!("InitOps: Opening repository at {:?}", path);
        let repo = Repository::open(path)?;
        Ok(repo)
    }
}
