//! Tic-tac-toe with a time-travel move history.
//!
//! The crate has two pieces:
//!
//! - **Outcome evaluation**: [`evaluate`] turns a [`Board`] into an
//!   [`Outcome`] (in progress, win with its line, or draw).
//! - **Game state**: [`GameState`] keeps every [`Snapshot`] played so far
//!   and a cursor into them. Jumping back and playing a different move
//!   discards the old future.
//!
//! # Example
//!
//! ```
//! use timetravel_tictactoe::{GameState, Outcome, Player};
//!
//! # fn main() -> Result<(), timetravel_tictactoe::GameError> {
//! let game = GameState::new()
//!     .make_move(0)?
//!     .make_move(4)?
//!     .make_move(1)?
//!     .make_move(3)?
//!     .make_move(2)?;
//! assert_eq!(game.status().winner(), Some(Player::X));
//!
//! // Rewind two moves and branch.
//! let branched = game.jump_to(3)?.make_move(8)?;
//! assert_eq!(branched.len(), 5);
//! assert_eq!(branched.status(), Outcome::InProgress);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod error;
mod game;
mod invariants;
mod outcome;
mod position;
mod rules;
mod snapshot;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{Contract, GameNotOver, LegalMove, MoveContract, PlayersTurn, SquareIsEmpty};
pub use error::GameError;
pub use game::GameState;
pub use invariants::{
    CursorInBoundsInvariant, Invariant, InvariantSet, InvariantViolation,
    NoMovesAfterFinishInvariant, RootedHistoryInvariant, SingleCellDeltaInvariant,
    TimeTravelInvariants,
};
pub use outcome::{Outcome, evaluate};
pub use position::Position;
pub use rules::{LINES, Line, check_winner, is_full};
pub use snapshot::Snapshot;
pub use types::{Board, Player, Square};
