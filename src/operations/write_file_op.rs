use std::path::{Component, Path, PathBuf};
use std::time::Duration;
use serde::{Deserialize, Serialize};

use super::RepoOperation;
use super::serde_helpers::{secs, text_bytes};
use crate::error::{SimulationError, SimulationResult};
use crate::state::RepoState;

/// Write `content` to `path` (relative to the repository root) and stage it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteFile {
    pub path: PathBuf,
    #[serde(with = "text_bytes")]
    pub content: Vec<u8>,
    #[serde(default, rename = "advance_secs", with = "secs::option", skip_serializing_if = "Option::is_none")]
    pub advance_by: Option<Duration>,
}

impl WriteFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            advance_by: None,
        }
    }

    pub fn advance_by(mut self, by: Duration) -> Self {
        self.advance_by = Some(by);
        self
    }
}

/// Only plain relative paths stay inside the working tree; `.` components are dropped.
/// Nothing may be written under a `.git` directory, in any letter case.
fn normalize_relative(path: &Path) -> SimulationResult<PathBuf> {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) if part.eq_ignore_ascii_case(".git") => {
                return Err(SimulationError::InvalidPath(path.display().to_string()));
            }
            Component::Normal(part) => normalized.push(part),
            Component::CurDir => {}
            _ => return Err(SimulationError::InvalidPath(path.display().to_string())),
        }
    }
    if normalized.as_os_str().is_empty() {
        return Err(SimulationError::InvalidPath(path.display().to_string()));
    }
    Ok(normalized)
}

impl RepoOperation for WriteFile {
    fn name(&self) -> &'static str {
        "write_file"
    }

    fn apply(&self, state: &mut RepoState) -> SimulationResult<()> {
        let path = normalize_relative(&self.path)?;

        let repository = state.repository()?;
        repository.write_file(&path, &self.content)?;
        repository.stage(&path)?;

        state.advance_after_operation(self.advance_by);
        Ok(())
    }
}
