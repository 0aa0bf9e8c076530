//! Key mapping from terminal events to movement keys.

use crate::types::MoveKey;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key code to the movement key it drives.
pub fn move_key(code: KeyCode) -> Option<MoveKey> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(MoveKey::Forward),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(MoveKey::Backward),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(MoveKey::TurnLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(MoveKey::TurnRight),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_wasd_keys() {
        assert_eq!(move_key(KeyCode::Char('w')), Some(MoveKey::Forward));
        assert_eq!(move_key(KeyCode::Char('s')), Some(MoveKey::Backward));
        assert_eq!(move_key(KeyCode::Char('a')), Some(MoveKey::TurnLeft));
        assert_eq!(move_key(KeyCode::Char('d')), Some(MoveKey::TurnRight));

        assert_eq!(move_key(KeyCode::Char('W')), Some(MoveKey::Forward));
        assert_eq!(move_key(KeyCode::Char('D')), Some(MoveKey::TurnRight));
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(move_key(KeyCode::Up), Some(MoveKey::Forward));
        assert_eq!(move_key(KeyCode::Down), Some(MoveKey::Backward));
        assert_eq!(move_key(KeyCode::Left), Some(MoveKey::TurnLeft));
        assert_eq!(move_key(KeyCode::Right), Some(MoveKey::TurnRight));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(move_key(KeyCode::Char('x')), None);
        assert_eq!(move_key(KeyCode::Char(' ')), None);
        assert_eq!(move_key(KeyCode::Enter), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('w'))));
    }
}
