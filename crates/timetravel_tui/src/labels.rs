//! Display text derived from the game state.

use timetravel_tictactoe::{GameState, Outcome, Snapshot};

/// Status line: whose turn it is, who won, or a draw.
pub fn status_text(game: &GameState) -> String {
    match game.status() {
        Outcome::InProgress => format!("Next player: {}", game.turn()),
        Outcome::Win { winner, .. } => format!("Winner: {}", winner),
        Outcome::Draw => "Draw".to_string(),
    }
}

/// Move-list entry for the snapshot at `move_number`.
///
/// Coordinates are shown one-based as `(col, row)`.
pub fn move_label(move_number: usize, snapshot: &Snapshot, is_current: bool) -> String {
    match (is_current, snapshot.last_move()) {
        (true, None) => "You are at game start".to_string(),
        (true, Some(_)) => format!("You are at move #{}", move_number),
        (false, None) => "Go to game start".to_string(),
        (false, Some(action)) => format!(
            "Go to move #{} ({}, {})",
            move_number,
            action.col() + 1,
            action.row() + 1
        ),
    }
}
