//! Event mapping from terminal events to game actions.

use crate::types::{CellGeometry, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map keyboard input to game actions.
///
/// Cursor movement and cursor clicks live in [`crate::CursorHandler`].
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Reset),
        _ => None,
    }
}

/// Map a mouse event to a click on the board.
///
/// Only left-button presses count. Presses outside the card grid map to
/// nothing; the core re-validates coordinates regardless.
pub fn handle_mouse_event(mouse: MouseEvent, geometry: &CellGeometry) -> Option<GameAction> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => geometry
            .cell_at(mouse.column, mouse.row)
            .map(|(row, col)| GameAction::Click { row, col }),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
