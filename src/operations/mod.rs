mod serde_helpers;
mod init_op;
mod write_file_op;
mod commit_op;
mod tag_op;
mod branch_op;
mod clock_op;
mod default_branch_op;
mod checkout_tag_op;

pub use init_op::Initialize;
pub use write_file_op::WriteFile;
pub use commit_op::Commit;
pub use tag_op::{Tag, TagAnnotated, TagTarget};
pub use branch_op::{CreateBranchAndSwitch, SwitchBranch};
pub use clock_op::AdvanceClock;
pub use default_branch_op::SetDefaultBranch;
pub use checkout_tag_op::SwitchToTag;

use serde::{Deserialize, Serialize};

use crate::error::SimulationResult;
use crate::state::RepoState;

/// A single step of a simulation
pub trait RepoOperation {
    /// Short, stable name used in logs and error context
    fn name(&self) -> &'static str;

    /// Perform the effect against the repository, then advance the logical clock
    fn apply(&self, state: &mut RepoState) -> SimulationResult<()>;
}

/// Every operation kind a simulation can run.
///
/// Scenario files select the variant with an `op` key, e.g. `op: write_file`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Initialize(Initialize),
    WriteFile(WriteFile),
    Commit(Commit),
    Tag(Tag),
    TagAnnotated(TagAnnotated),
    CreateBranchAndSwitch(CreateBranchAndSwitch),
    SwitchBranch(SwitchBranch),
    AdvanceClock(AdvanceClock),
    SetDefaultBranch(SetDefaultBranch),
    SwitchToTag(SwitchToTag),
}

impl RepoOperation for Operation {
    fn name(&self) -> &'static str {
        match self {
            Operation::Initialize(op) => op.name(),
            Operation::WriteFile(op) => op.name(),
            Operation::Commit(op) => op.name(),
            Operation::Tag(op) => op.name(),
            Operation::TagAnnotated(op) => op.name(),
            Operation::CreateBranchAndSwitch(op) => op.name(),
            Operation::SwitchBranch(op) => op.name(),
            Operation::AdvanceClock(op) => op.name(),
            Operation::SetDefaultBranch(op) => op.name(),
            Operation::SwitchToTag(op) => op.name(),
        }
    }

    fn apply(&self, state: &mut RepoState) -> SimulationResult<()> {
        match self {
            Operation::Initialize(op) => op.apply(state),
            Operation::WriteFile(op) => op.apply(state),
            Operation::Commit(op) => op.apply(state),
            Operation::Tag(op) => op.apply(state),
            Operation::TagAnnotated(op) => op.apply(state),
            Operation::CreateBranchAndSwitch(op) => op.apply(state),
            Operation::SwitchBranch(op) => op.apply(state),
            Operation::AdvanceClock(op) => op.apply(state),
            Operation::SetDefaultBranch(op) => op.apply(state),
            Operation::SwitchToTag(op) => op.apply(state),
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Operation {
                fn from(op: $variant) -> Self {
                    Operation::$variant(op)
                }
            }
        )*
    };
}

impl_from_variant!(
    Initialize,
    WriteFile,
    Commit,
    Tag,
    TagAnnotated,
    CreateBranchAndSwitch,
    SwitchBranch,
    AdvanceClock,
    SetDefaultBranch,
    SwitchToTag,
);
