//! Key mapping from terminal events to game actions.
//!
//! Home-row bindings: `s`/`f` shift, `j`/`k` rotate, `d` drops, `q` quits.
//! Arrow keys and a few common alternates are bound as well.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(GameAction::Stop);
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('f') | KeyCode::Char('F') => Some(GameAction::MoveRight),

        // Rotation
        KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('z') | KeyCode::Char('Z') => {
            Some(GameAction::RotateLeft)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(GameAction::RotateRight),

        // Descent
        KeyCode::Down | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char(' ') => {
            Some(GameAction::HardDrop)
        }

        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameAction::Stop),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    handle_key_event(key) == Some(GameAction::Stop)
}
