//! Key mapping from terminal events to game actions.
//!
//! | Keys | Action |
//! |------|--------|
//! | ← h a | move left |
//! | → l d | move right |
//! | ↓ j s | soft drop |
//! | ↑ space | hard drop |
//! | q z | rotate counter-clockwise |
//! | w x k | rotate clockwise |
//! | r | restart |
//! | Esc, Ctrl-C | quit |

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    let code = match key.code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };

    match code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(GameAction::SoftDrop),
        KeyCode::Up | KeyCode::Char(' ') => Some(GameAction::HardDrop),

        KeyCode::Char('q') | KeyCode::Char('z') => Some(GameAction::RotateCcw),
        KeyCode::Char('w') | KeyCode::Char('x') | KeyCode::Char('k') => Some(GameAction::RotateCw),

        KeyCode::Char('r') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
