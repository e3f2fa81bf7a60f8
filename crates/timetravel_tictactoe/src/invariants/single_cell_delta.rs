//! Single-cell delta invariant: each snapshot adds exactly one mark.

use super::super::{GameState, Player, Position, Square};
use super::Invariant;

/// Invariant: Consecutive snapshots differ in exactly one square.
///
/// That square was empty before, holds the mark of the player whose turn
/// it was, and is the position recorded in the later snapshot's move.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameState> for SingleCellDeltaInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .windows(2)
            .enumerate()
            .all(|(move_number, pair)| {
                let (before, after) = (pair[0].board(), pair[1].board());
                let expected = Player::to_move_at(move_number);

                let Some(action) = pair[1].last_move() else {
                    return false;
                };

                let changed: Vec<Position> = Position::ALL
                    .into_iter()
                    .filter(|pos| before.get(*pos) != after.get(*pos))
                    .collect();

                action.player == expected
                    && changed == [action.position]
                    && before.get(action.position) == Square::Empty
                    && after.get(action.position) == Square::Occupied(expected)
            })
    }

    fn description() -> &'static str {
        "Each move fills one empty square with the mark of the player to move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Snapshot};

    #[test]
    fn test_sequence_holds() {
        let game = GameState::replay(&[Position::Center, Position::TopLeft, Position::BottomRight])
            .expect("legal replay");
        assert!(SingleCellDeltaInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_mark_violates() {
        let mut game = GameState::new();
        let board = game.board().with_mark(Position::Center, Player::O);
        game.history
            .push(Snapshot::after(board, Move::new(Player::O, Position::Center)));
        assert!(!SingleCellDeltaInvariant::holds(&game));
    }

    #[test]
    fn test_mismatched_recorded_move_violates() {
        let mut game = GameState::new();
        let board = game.board().with_mark(Position::Center, Player::X);
        game.history
            .push(Snapshot::after(board, Move::new(Player::X, Position::TopLeft)));
        assert!(!SingleCellDeltaInvariant::holds(&game));
    }

    #[test]
    fn test_two_new_marks_violate() {
        let mut game = GameState::new();
        let board = game
            .board()
            .with_mark(Position::Center, Player::X)
            .with_mark(Position::TopLeft, Player::X);
        game.history
            .push(Snapshot::after(board, Move::new(Player::X, Position::Center)));
        assert!(!SingleCellDeltaInvariant::holds(&game));
    }
}
