//! Keyboard cursor for mouse-less play.
//!
//! Arrow keys (or hjkl / wasd) move a highlight over the grid; Space or
//! Enter clicks the highlighted card. The cursor wraps at the edges.

use crossterm::event::KeyCode;

use crate::types::{GameAction, GRID_COLS, GRID_ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorHandler {
    row: u8,
    col: u8,
}

impl Default for CursorHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorHandler {
    pub fn new() -> Self {
        Self { row: 0, col: 0 }
    }

    /// Current (row, col)
    pub fn position(&self) -> (u8, u8) {
        (self.row, self.col)
    }

    /// Move the cursor to where the pointer last clicked.
    pub fn follow(&mut self, action: GameAction) {
        if let GameAction::Click { row, col } = action {
            if row < GRID_ROWS && col < GRID_COLS {
                self.row = row;
                self.col = col;
            }
        }
    }

    /// Handle a key press; returns a click when the cursor is activated.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        match code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') | KeyCode::Char('A') => {
                self.col = (self.col + GRID_COLS - 1) % GRID_COLS;
                None
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') | KeyCode::Char('D') => {
                self.col = (self.col + 1) % GRID_COLS;
                None
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') | KeyCode::Char('W') => {
                self.row = (self.row + GRID_ROWS - 1) % GRID_ROWS;
                None
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') | KeyCode::Char('S') => {
                self.row = (self.row + 1) % GRID_ROWS;
                None
            }
            KeyCode::Char(' ') | KeyCode::Enter => Some(GameAction::Click {
                row: self.row,
                col: self.col,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_top_left() {
        assert_eq!(CursorHandler::new().position(), (0, 0));
    }

    #[test]
    fn moves_and_wraps() {
        let mut c = CursorHandler::new();
        assert_eq!(c.handle_key_press(KeyCode::Left), None);
        assert_eq!(c.position(), (0, 12));
        c.handle_key_press(KeyCode::Right);
        assert_eq!(c.position(), (0, 0));
        c.handle_key_press(KeyCode::Up);
        assert_eq!(c.position(), (3, 0));
        c.handle_key_press(KeyCode::Char('j'));
        assert_eq!(c.position(), (0, 0));
        c.handle_key_press(KeyCode::Char('l'));
        c.handle_key_press(KeyCode::Char('s'));
        assert_eq!(c.position(), (1, 1));
    }

    #[test]
    fn space_and_enter_click() {
        let mut c = CursorHandler::new();
        c.handle_key_press(KeyCode::Right);
        c.handle_key_press(KeyCode::Down);
        assert_eq!(
            c.handle_key_press(KeyCode::Char(' ')),
            Some(GameAction::Click { row: 1, col: 1 })
        );
        assert_eq!(
            c.handle_key_press(KeyCode::Enter),
            Some(GameAction::Click { row: 1, col: 1 })
        );
    }

    #[test]
    fn follows_pointer_clicks() {
        let mut c = CursorHandler::new();
        c.follow(GameAction::Click { row: 2, col: 9 });
        assert_eq!(c.position(), (2, 9));
        c.follow(GameAction::Click { row: 7, col: 9 });
        assert_eq!(c.position(), (2, 9));
        c.follow(GameAction::Reset);
        assert_eq!(c.position(), (2, 9));
    }

    #[test]
    fn reset_key_is_not_a_cursor_key() {
        let mut c = CursorHandler::new();
        assert_eq!(c.handle_key_press(KeyCode::Char('r')), None);
        assert_eq!(c.position(), (0, 0));
    }
}
