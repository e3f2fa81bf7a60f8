//! No moves are recorded after a decided snapshot.

use super::super::GameState;
use super::Invariant;

/// Invariant: Only the last snapshot in the history may be won or drawn.
pub struct NoMovesAfterFinishInvariant;

impl Invariant<GameState> for NoMovesAfterFinishInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        history
            .iter()
            .take(history.len().saturating_sub(1))
            .all(|snapshot| !snapshot.outcome().is_finished())
    }

    fn description() -> &'static str {
        "No snapshot follows a won or drawn board"
    }
}
