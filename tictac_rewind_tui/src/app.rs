//! Application state and input handling.

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tictac_rewind::{Game, GameStatus, Position};
use tracing::debug;

use crate::input;
use crate::ui;

/// Main application state.
pub struct App {
    game: Game,
    cursor: Position,
    status_message: String,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            status_message: "Click a cell or press 1-9 to play.".to_string(),
        }
    }

    /// The current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The board cell the keyboard cursor is on.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The last action's outcome, shown under the status line.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// The status line above the board.
    pub fn status_line(&self) -> String {
        match self.game.status() {
            GameStatus::InProgress => format!("Next player: {}", self.game.to_move()),
            GameStatus::Won(player) => format!("Winner: {player}"),
            GameStatus::Draw => "Draw".to_string(),
        }
    }

    /// Handles a key press. Returns false when the app should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.play_at(self.cursor),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(pos) = Position::from_index(c as usize - '1' as usize) {
                    self.play_at(pos);
                }
            }
            KeyCode::Char('[') => self.jump_to(self.game.step().saturating_sub(1)),
            KeyCode::Char(']') => self.jump_to(self.game.step() + 1),
            KeyCode::Home => self.jump_to(0),
            code => self.cursor = input::move_cursor(self.cursor, code),
        }
        true
    }

    /// Handles a mouse event against the screen layout for `area`.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        match ui::hit_test(area, mouse.column, mouse.row) {
            Some(ui::Hit::Cell(pos)) => {
                self.cursor = pos;
                self.play_at(pos);
            }
            Some(ui::Hit::HistoryRow(step)) => self.jump_to(step),
            None => {}
        }
    }

    /// Plays at a position; a rejected move only updates the message.
    pub fn play_at(&mut self, pos: Position) {
        match self.game.play(pos) {
            Ok(mv) => {
                debug!(%mv, "move played");
                self.status_message = format!("Move #{}: {mv}", self.game.step());
            }
            Err(e) => {
                debug!(error = %e, "move ignored");
                self.status_message = format!("Ignored: {e}.");
            }
        }
    }

    /// Jumps to a history step; clicks past the end are ignored.
    pub fn jump_to(&mut self, step: usize) {
        if self.game.jump_to(step).is_ok() {
            self.status_message = if step == 0 {
                "Rewound to game start.".to_string()
            } else {
                format!("Rewound to move #{step}.")
            };
        }
    }

    /// Starts a fresh game.
    pub fn restart(&mut self) {
        debug!("restarting game");
        self.game = Game::new();
        self.status_message = "New game. Click a cell or press 1-9 to play.".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_follows_game() {
        let mut app = App::new();
        assert_eq!(app.status_line(), "Next player: X");

        app.play_at(Position::Center);
        assert_eq!(app.status_line(), "Next player: O");

        // X collects the top row while O wanders the left column.
        app.play_at(Position::MiddleLeft);
        app.play_at(Position::TopLeft);
        app.play_at(Position::BottomLeft);
        app.play_at(Position::TopCenter);
        app.play_at(Position::BottomCenter);
        app.play_at(Position::TopRight);
        assert_eq!(app.status_line(), "Winner: X");
    }

    #[test]
    fn test_rejected_click_is_a_no_op() {
        let mut app = App::new();
        app.play_at(Position::Center);
        app.play_at(Position::Center);
        assert_eq!(app.game().steps(), 2);
        assert!(app.status_message().starts_with("Ignored:"));
    }

    #[test]
    fn test_bracket_keys_step_through_history() {
        let mut app = App::new();
        app.play_at(Position::Center);
        app.play_at(Position::TopLeft);

        app.handle_key(KeyCode::Char('['));
        assert_eq!(app.game().step(), 1);
        app.handle_key(KeyCode::Char(']'));
        assert_eq!(app.game().step(), 2);

        // Stepping past the end is ignored.
        app.handle_key(KeyCode::Char(']'));
        assert_eq!(app.game().step(), 2);

        app.handle_key(KeyCode::Home);
        assert_eq!(app.game().step(), 0);
    }

    #[test]
    fn test_digit_keys_map_to_cells() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(
            app.game().board().get(Position::Center),
            tictac_rewind::Square::Occupied(tictac_rewind::Player::X)
        );
    }

    #[test]
    fn test_restart_clears_history() {
        let mut app = App::new();
        app.play_at(Position::Center);
        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.game().steps(), 1);
        assert_eq!(app.status_line(), "Next player: X");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new();
        assert!(app.handle_key(KeyCode::Char('x')));
        assert!(!app.handle_key(KeyCode::Char('q')));
        assert!(!app.handle_key(KeyCode::Esc));
    }
}
