//! Game state model: a branching history of snapshots and a cursor.
//!
//! Every operation takes `&self` and returns a new state, so a caller can
//! keep the previous value around (for undo, diffing, or tests) without
//! any shared mutation.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::error::GameError;
use super::invariants::{InvariantSet, TimeTravelInvariants};
use super::outcome::Outcome;
use super::snapshot::Snapshot;
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// History of snapshots plus the cursor selecting the current one.
///
/// Invariants:
/// - `history` is never empty and starts with the empty board
/// - `cursor < history.len()`
/// - whose turn it is follows from the cursor, not from stored state
///
/// Deserialization checks [`TimeTravelInvariants`] and rejects any state
/// that breaks them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    pub(crate) history: Vec<Snapshot>,
    pub(crate) cursor: usize,
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    history: Vec<Snapshot>,
    cursor: usize,
}

impl TryFrom<RawGameState> for GameState {
    type Error = GameError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = Self {
            history: raw.history,
            cursor: raw.cursor,
        };

        TimeTravelInvariants::check_all(&state).map_err(|violations| {
            let message = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%message, "Rejected deserialized game state");
            GameError::InvariantViolation(message)
        })?;

        Ok(state)
    }
}

impl GameState {
    /// Creates a new game with only the empty opening snapshot.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Snapshot::initial()],
            cursor: 0,
        }
    }

    /// Plays the cell at `cell` (0-8) for whoever is to move.
    ///
    /// An occupied cell or a finished game leaves the state unchanged;
    /// those are ordinary clicks, not failures.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CellOutOfRange`] if `cell` is not on the board.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.history.len()))]
    pub fn make_move(&self, cell: usize) -> Result<Self, GameError> {
        let position = Position::from_index(cell).ok_or(GameError::CellOutOfRange { cell })?;

        match self.try_move(position) {
            Ok(next) => Ok(next),
            Err(MoveError::InvariantViolation(message)) => {
                Err(GameError::InvariantViolation(message))
            }
            Err(rejected) => {
                debug!(%rejected, "Ignoring move");
                Ok(self.clone())
            }
        }
    }

    /// Plays `position` for whoever is to move, reporting why a move is refused.
    ///
    /// Discards every snapshot after the cursor, appends the new snapshot
    /// and moves the cursor onto it.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn try_move(&self, position: Position) -> Result<Self, MoveError> {
        let action = Move::new(self.turn(), position);

        MoveContract::pre(self, &action)?;

        let board = self.board().with_mark(position, action.player);
        let mut history = self.history[..=self.cursor].to_vec();
        history.push(Snapshot::after(board, action));

        let next = Self {
            cursor: history.len() - 1,
            history,
        };

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        debug!(
            %action,
            cursor = next.cursor,
            board = %next.board().display(),
            "Move applied"
        );
        Ok(next)
    }

    /// Moves the cursor to `move_number` without touching the history.
    ///
    /// The recorded future is only discarded by the next move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::MoveOutOfRange`] past the last snapshot.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&self, move_number: usize) -> Result<Self, GameError> {
        if move_number >= self.history.len() {
            return Err(GameError::MoveOutOfRange {
                requested: move_number,
                len: self.history.len(),
            });
        }

        Ok(Self {
            history: self.history.clone(),
            cursor: move_number,
        })
    }

    /// Replays moves from a new game, failing on the first refused move.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Result<Self, MoveError> {
        moves
            .iter()
            .try_fold(Self::new(), |state, pos| state.try_move(*pos))
    }

    /// Outcome of the snapshot at the cursor.
    pub fn status(&self) -> Outcome {
        self.current().outcome()
    }

    /// Player to move from the cursor.
    ///
    /// Only meaningful while [`status`](Self::status) is in progress.
    pub fn turn(&self) -> Player {
        Player::to_move_at(self.cursor)
    }

    /// Positions still open at the cursor; empty once the game is decided.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status().is_finished() {
            return Vec::new();
        }
        Position::valid_moves(self.board())
    }

    /// Returns the full history in chronological order.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Returns the cursor (current move number).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false; the opening snapshot is never removed.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Returns the snapshot at the cursor.
    pub fn current(&self) -> &Snapshot {
        &self.history[self.cursor]
    }

    /// Returns the board at the cursor.
    pub fn board(&self) -> &Board {
        self.current().board()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
