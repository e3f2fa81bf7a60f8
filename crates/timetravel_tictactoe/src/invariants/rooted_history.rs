//! Rooted history invariant: the history opens on the empty board.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: History is non-empty and its first snapshot is the empty
/// board with no recorded move.
pub struct RootedHistoryInvariant;

impl Invariant<GameState> for RootedHistoryInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .first()
            .is_some_and(|root| root.last_move().is_none() && *root.board() == Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board and no move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(RootedHistoryInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut game = GameState::new();
        game.history.clear();
        assert!(!RootedHistoryInvariant::holds(&game));
    }
}
