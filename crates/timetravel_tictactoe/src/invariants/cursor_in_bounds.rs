//! Cursor bounds invariant.

use super::super::GameState;
use super::Invariant;

/// Invariant: The cursor indexes an existing snapshot.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.cursor < game.history.len()
    }

    fn description() -> &'static str {
        "Cursor points inside the history"
    }
}
