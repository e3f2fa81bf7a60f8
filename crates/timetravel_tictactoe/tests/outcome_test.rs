//! Tests for board outcome evaluation.

use timetravel_tictactoe::{Board, LINES, Outcome, Player, Position, Square, evaluate};

const E: Square = Square::Empty;
const X: Square = Square::Occupied(Player::X);
const O: Square = Square::Occupied(Player::O);

#[test]
fn test_empty_board_in_progress() {
    assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
}

#[test]
fn test_top_row_win() {
    let board = Board::from_squares([X, X, X, E, E, E, E, E, E]);
    assert_eq!(
        evaluate(&board),
        Outcome::Win {
            winner: Player::X,
            line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
        }
    );
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board = Board::from_squares([X, O, X, O, X, O, O, X, O]);
    assert_eq!(evaluate(&board), Outcome::Draw);
}

#[test]
fn test_win_on_full_board_beats_draw() {
    // Last X completes the left column on the ninth move.
    let board = Board::from_squares([X, O, X, X, O, O, X, X, O]);
    assert_eq!(evaluate(&board).winner(), Some(Player::X));
    assert_eq!(evaluate(&board).winning_line(), Some(LINES[3]));
}

#[test]
fn test_every_line_detected_for_o() {
    for line in LINES {
        let mut board = Board::new();
        for pos in line {
            board.set(pos, O);
        }
        assert_eq!(
            evaluate(&board),
            Outcome::Win {
                winner: Player::O,
                line
            }
        );
    }
}

#[test]
fn test_evaluate_is_deterministic() {
    let board = Board::from_squares([X, O, E, E, X, E, O, E, E]);
    let first = evaluate(&board);
    for _ in 0..10 {
        assert_eq!(evaluate(&board), first);
    }
    assert_eq!(first, Outcome::InProgress);
}

#[test]
fn test_earliest_line_in_priority_order() {
    // X holds the top row, the middle column and the anti-diagonal.
    let board = Board::from_squares([X, X, X, O, X, O, X, X, O]);
    assert_eq!(evaluate(&board).winning_line(), Some(LINES[0]));

    let board = Board::from_squares([X, X, O, O, X, O, X, X, X]);
    assert_eq!(evaluate(&board).winning_line(), Some(LINES[2]));
}
