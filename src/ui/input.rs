//! Key bindings
//!
//! Arrow keys, vim keys (hjkl) and wasd move; q or Esc leaves the dungeon.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Intent;

/// Map a key press to an intent, `None` for unbound keys
pub fn intent_for_key(key: KeyEvent) -> Option<Intent> {
    // Ctrl+C behaves like quit since raw mode swallows SIGINT
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Intent::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(Intent::MoveUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(Intent::MoveDown),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(Intent::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(Intent::MoveRight),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Intent::Quit),
        _ => None,
    }
}
