use tracing::{error, info, info_span};

use crate::error::{SimulationError, SimulationResult};
use crate::operations::RepoOperation;
use crate::state::RepoState;

/// Apply `operations` in order to `state`, stopping at the first failure.
///
/// A failure is wrapped in `SimulationError::Step` naming the operation and its
/// position, so callers can decide whether to halt the surrounding test.
pub fn apply_all<O: RepoOperation>(state: &mut RepoState, operations: &[O]) -> SimulationResult<()> {
    let _span = info_span!("simulation", path = %state.path().display()).entered();
    info!("Applying {} operations", operations.len());

    for (index, operation) in operations.iter().enumerate() {
        let name = operation.name();
        if let Err(e) = operation.apply(state) {
            error!("Operation #{} ({}) failed: {}", index, name, e);
            return Err(SimulationError::Step {
                index,
                operation: name,
                source: Box::new(e),
            });
        }
        info!("Applied operation #{} ({}), clock now {}", index, name, state.now());
    }

    Ok(())
}

/// Configure-then-run convenience: consumes a configured state and hands it back after every operation ran
pub fn run<O: RepoOperation>(mut state: RepoState, operations: &[O]) -> SimulationResult<RepoState> {
    apply_all(&mut state, operations)?;
    Ok(state)
}
