//! Immutable board snapshots recorded in the game history.

use super::Board;
use super::action::Move;
use super::outcome::{Outcome, evaluate};
use serde::{Deserialize, Serialize};

/// One board state in the history, plus the move that produced it.
///
/// The opening snapshot has no move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    last_move: Option<Move>,
}

impl Snapshot {
    /// The empty opening snapshot.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Snapshot reached by playing `action` on the previous board.
    pub(crate) fn after(board: Board, action: Move) -> Self {
        Self {
            board,
            last_move: Some(action),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move that produced this snapshot.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Zero-based `(row, col)` of the move that produced this snapshot.
    pub fn row_col(&self) -> Option<(usize, usize)> {
        self.last_move.map(|m| (m.row(), m.col()))
    }

    /// Evaluates this snapshot's board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }
}
