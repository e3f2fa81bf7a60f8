//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board. They know nothing about history
//! or whose turn it is, which keeps them usable from contracts and
//! invariants as well as from the outcome evaluator.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Line, check_winner};
