//! Outcome evaluation for a single board.

use super::rules::{self, Line};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Verdict for a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and at least one square is empty.
    InProgress,
    /// A player completed a line.
    Win {
        /// The player owning the line.
        winner: Player,
        /// The completed line.
        line: Line,
    },
    /// Every square is filled and no line is complete.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { winner, .. } => Some(*winner),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true if `pos` belongs to the winning line.
    pub fn highlights(&self, pos: Position) -> bool {
        self.winning_line().is_some_and(|line| line.contains(&pos))
    }

    /// Returns true once the board is won or drawn.
    pub fn is_finished(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win { winner, .. } => write!(f, "Player {} wins", winner),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Evaluates a board.
///
/// Lines are checked in [`rules::LINES`] order and the first complete one
/// decides the win. A full board without a line is a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((winner, line)) = rules::check_winner(board) {
        return Outcome::Win { winner, line };
    }

    if rules::is_full(board) {
        return Outcome::Draw;
    }

    Outcome::InProgress
}
