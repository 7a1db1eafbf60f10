use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::SimulatorConfig;
use crate::error::SimulationResult;
use crate::logging;
use crate::operations::Operation;
use crate::simulation;
use crate::state::RepoState;

/// A fixture written as data: optional defaults plus the ordered operations.
///
/// ```yaml
/// config:
///   author_name: John Doe
///   advance_secs: 5
/// operations:
///   - op: initialize
///     branch: main
///   - op: write_file
///     path: file1.txt
///     content: content1
///   - op: commit
///     message: commit1
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<SimulatorConfig>,
    pub operations: Vec<Operation>,
}

impl Scenario {
    pub fn new(operations: Vec<Operation>) -> Self {
        Self { config: None, operations }
    }

    pub fn from_yaml_str(yaml: &str) -> SimulationResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> SimulationResult<Self> {
        let path = path.as_ref();
        info!("Loading scenario from {:?}", path);
        let yaml = fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    pub fn to_yaml_string(&self) -> SimulationResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Build the repository at `path`.
    ///
    /// Without an embedded config the built-in defaults apply, so the same
    /// scenario yields the same commit ids on every machine.
    pub fn build<P: AsRef<Path>>(&self, path: P) -> SimulationResult<RepoState> {
        let config = self.config.clone().unwrap_or_default();
        self.build_with(path, &config)
    }

    /// Like [`Scenario::build`], but a missing config is read from `REPO_SIM_*` variables
    pub fn build_from_env<P: AsRef<Path>>(&self, path: P) -> SimulationResult<RepoState> {
        let config = match &self.config {
            Some(config) => config.clone(),
            None => SimulatorConfig::from_env(),
        };
        self.build_with(path, &config)
    }

    fn build_with<P: AsRef<Path>>(&self, path: P, config: &SimulatorConfig) -> SimulationResult<RepoState> {
        logging::init_tracing(config.debug);
        let state = RepoState::from_config(path, config);
        simulation::run(state, &self.operations)
    }
}
