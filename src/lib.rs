//! Deterministic git repository fixtures.
//!
//! Build a [`RepoState`], then apply an ordered list of [`Operation`]s to it.
//! Authorship timestamps come from a logical clock, so commit ids are the same
//! on every run and every machine.

pub mod author;
pub mod clock;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod operations;
pub mod scenario;
pub mod simulation;
pub mod state;

// Re-export commonly used types for convenience
pub use author::Author;
pub use config::SimulatorConfig;
pub use error::{SimulationError, SimulationResult};
pub use git::{BackendError, GitRepository};
pub use operations::{
    AdvanceClock, Commit, CreateBranchAndSwitch, Initialize, Operation, RepoOperation, SetDefaultBranch,
    SwitchBranch, SwitchToTag, Tag, TagAnnotated, TagTarget, WriteFile,
};
pub use scenario::Scenario;
pub use simulation::{apply_all, run};
pub use state::RepoState;
