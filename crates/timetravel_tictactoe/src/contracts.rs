//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::game::GameState;
use super::invariants::{InvariantSet, TimeTravelInvariants};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The snapshot at the cursor must still be in progress.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves on a won or drawn snapshot.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        let outcome = game.status();
        if outcome.is_finished() {
            Err(MoveError::GameOver(outcome))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto an occupied square.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if !game.board().is_empty(mov.position) {
            Err(MoveError::SquareOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the player's turn.
///
/// [`GameState::try_move`] always builds its `Move` for the player to move,
/// so this only rejects moves that callers assemble themselves and pass to
/// [`LegalMove::check`] or [`MoveContract::pre`].
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves by the player who is not to move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if mov.player != game.turn() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition for a legal move.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        SquareIsEmpty::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game at the cursor is not over
/// - Square must be empty
/// - Must be player's turn
///
/// Postconditions:
/// - History was cut at the old cursor and grew by exactly one snapshot
/// - Cursor sits on the new snapshot
/// - All history invariants hold
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        let expected_len = before.cursor() + 2;
        if after.len() != expected_len {
            warn!(expected_len, actual = after.len(), "History length postcondition failed");
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: history has {} snapshots, expected {}",
                after.len(),
                expected_len
            )));
        }

        if after.cursor() != after.len() - 1 {
            warn!(cursor = after.cursor(), "Cursor postcondition failed");
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: cursor is not on the newest snapshot".to_string(),
            ));
        }

        if after.history()[..=before.cursor()] != before.history()[..=before.cursor()] {
            warn!("Prefix postcondition failed");
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history before the cursor changed".to_string(),
            ));
        }

        TimeTravelInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    #[test]
    fn test_precondition_empty_square() {
        let game = GameState::new();
        let action = Move::new(Player::X, Position::Center);
        assert!(MoveContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let game = GameState::new().make_move(4).expect("on board");
        let action = Move::new(Player::O, Position::Center);
        assert!(matches!(
            MoveContract::pre(&game, &action),
            Err(MoveError::SquareOccupied(Position::Center))
        ));
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = GameState::new();
        let action = Move::new(Player::O, Position::Center);
        assert!(matches!(
            MoveContract::pre(&game, &action),
            Err(MoveError::WrongPlayer(Player::O))
        ));
    }

    #[test]
    fn test_players_turn_only_guards_hand_built_moves() {
        let game = GameState::new()
            .try_move(Position::TopLeft)
            .expect("opening move");

        let stale = Move::new(Player::X, Position::Center);
        assert_eq!(
            PlayersTurn::check(&stale, &game),
            Err(MoveError::WrongPlayer(Player::X))
        );

        let next = game.try_move(Position::Center).expect("O to move");
        assert_eq!(
            next.history()[2].last_move(),
            Some(Move::new(Player::O, Position::Center))
        );
    }

    #[test]
    fn test_postcondition_holds_after_branching_move() {
        let game = GameState::replay(&[Position::TopLeft, Position::Center, Position::TopRight])
            .expect("legal replay")
            .jump_to(1)
            .expect("in range");
        let after = game.try_move(Position::BottomRight).expect("legal move");
        assert!(MoveContract::post(&game, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_lost_truncation() {
        let before = GameState::new();
        let mut after = before.try_move(Position::Center).expect("legal move");
        after.history.push(after.history[1].clone());
        after.cursor = 2;
        assert!(MoveContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameState::new();
        let mut after = before.try_move(Position::Center).expect("legal move");
        let mut board = after.history[1].board().clone();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        after.history[1] = crate::Snapshot::after(board, Move::new(Player::X, Position::Center));
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
