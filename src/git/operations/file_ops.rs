use std::fs;
use std::path::Path;
use tracing::info;
use git2::Repository;

use crate::git::error::BackendResult;

/// File operations for git repositories
pub struct FileOps;

impl FileOps {
    /// Write raw bytes to a path relative to the work directory, creating parent directories
    pub fn write_file(work_dir: &Path, rel_path: &Path, content: &[u8]) -> BackendResult<()> {
        let full_path = work_dir.join(rel_path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, content)?;
        info!("Wrote {} bytes to {:?}", content.len(), rel_path);
        Ok(())
    }

    /// Add a path (relative to the work directory) to the git index
    pub fn stage_path(repo: &Repository, rel_path: &Path) -> BackendResult<()> {
        let mut index = repo.index()?;
        // Pick up index changes made through other handles
        index.read(false)?;
        index.add_path(rel_path)?;
        index.write()?;

        info!("Added file to git index: {:?}", rel_path);
        Ok(())
    }
}
