//! The step pointer stays inside the history.

use super::super::GameState;
use super::Invariant;

/// Invariant: `step < history.len()`.
pub struct StepInRangeInvariant;

impl Invariant<GameState> for StepInRangeInvariant {
    fn holds(state: &GameState) -> bool {
        state.step() < state.history().len()
    }

    fn description() -> &'static str {
        "Step points at an existing snapshot"
    }
}
