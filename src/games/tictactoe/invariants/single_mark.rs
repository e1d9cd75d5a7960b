//! Each snapshot adds exactly one mark, alternating X, O, X, ...

use super::super::{GameState, Player, Square};
use super::Invariant;

/// Invariant: consecutive snapshots differ in one cell.
///
/// The cell goes from empty to the mark of the player who moved at the
/// previous step: entry `k` holds the mark placed by X when `k` is odd
/// and by O when `k` is even.
pub struct SingleMarkInvariant;

impl Invariant<GameState> for SingleMarkInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                let [before, after] = pair else {
                    return false;
                };
                match before.diff(after).as_slice() {
                    [pos] => {
                        before.get(*pos) == Square::Empty
                            && after.get(*pos) == Square::Occupied(Player::for_step(step))
                    }
                    _ => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds one mark for the player to move"
    }
}
