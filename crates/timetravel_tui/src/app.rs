//! Application state and key handling.

use crate::input::{digit_cell, move_cursor};
use crossterm::event::KeyCode;
use timetravel_tictactoe::{GameState, Position};
use tracing::{debug, info, instrument, warn};

/// Which pane receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrows move the board selection.
    Board,
    /// Arrows move through the move list.
    History,
}

/// Main application state.
///
/// Owns the game state; every key replaces it with the value returned
/// by the model.
#[derive(Debug)]
pub struct App {
    game: GameState,
    selected: Position,
    focus: Focus,
    list_selected: usize,
    ascending: bool,
    quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(ascending: bool) -> Self {
        Self {
            game: GameState::new(),
            selected: Position::Center,
            focus: Focus::Board,
            list_selected: 0,
            ascending,
            quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board square under the keyboard selection.
    pub fn selected(&self) -> Position {
        self.selected
    }

    /// Pane that currently has focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Move number highlighted in the move list.
    pub fn list_selected(&self) -> usize {
        self.list_selected
    }

    /// Whether the move list is shown oldest first.
    pub fn ascending(&self) -> bool {
        self.ascending
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Move numbers in display order.
    pub fn move_numbers(&self) -> Vec<usize> {
        let numbers = 0..self.game.len();
        if self.ascending {
            numbers.collect()
        } else {
            numbers.rev().collect()
        }
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus, cursor = self.game.cursor()))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.quit = true;
            }
            KeyCode::Char('s') => self.toggle_sort(),
            KeyCode::Char('n') => self.restart(),
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
            }
            key if digit_cell(key).is_some() => {
                if let Some(cell) = digit_cell(key) {
                    self.play(cell);
                }
            }
            key => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::History => self.handle_history_key(key),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.selected.to_index()),
            other => self.selected = move_cursor(self.selected, other),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        let order = self.move_numbers();
        let index = order
            .iter()
            .position(|n| *n == self.list_selected)
            .unwrap_or(0);

        match key {
            KeyCode::Up => self.list_selected = order[index.saturating_sub(1)],
            KeyCode::Down => self.list_selected = order[(index + 1).min(order.len() - 1)],
            KeyCode::Enter => self.jump(self.list_selected),
            _ => {}
        }
    }

    fn play(&mut self, cell: usize) {
        match self.game.make_move(cell) {
            Ok(next) => {
                if next != self.game {
                    debug!(cell, cursor = next.cursor(), "Move applied to UI state");
                }
                self.game = next;
                self.list_selected = self.game.cursor();
            }
            Err(e) => warn!(error = %e, "Move failed"),
        }
    }

    fn jump(&mut self, move_number: usize) {
        match self.game.jump_to(move_number) {
            Ok(next) => {
                debug!(move_number, "Jumped in history");
                self.game = next;
            }
            Err(e) => warn!(error = %e, "Jump failed"),
        }
    }

    fn toggle_sort(&mut self) {
        self.ascending = !self.ascending;
        debug!(ascending = self.ascending, "Toggled move order");
    }

    /// Starts a new game, keeping the sort order.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game = GameState::new();
        self.list_selected = 0;
        self.selected = Position::Center;
    }
}
