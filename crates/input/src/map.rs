//! Key mapping from terminal events to input actions.

use crate::types::{Direction, InputAction};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map any terminal event to an input action.
///
/// Key releases and auto-repeats are dropped so one physical press is one
/// move. Mouse, focus, and paste events are ignored.
pub fn map_event(event: &Event) -> Option<InputAction> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(handle_key_event(*key)),
        Event::Resize(w, h) => Some(InputAction::Resize(*w, *h)),
        _ => None,
    }
}

/// Map keyboard input to input actions.
///
/// Every key produces something: unknown keys become [`InputAction::Other`],
/// which is still enough to dismiss the intro splash.
pub fn handle_key_event(key: KeyEvent) -> InputAction {
    if should_quit(key) {
        return InputAction::Quit;
    }

    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            InputAction::Move(Direction::Up)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            InputAction::Move(Direction::Down)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            InputAction::Move(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            InputAction::Move(Direction::Right)
        }

        // Help paging
        KeyCode::PageUp => InputAction::HelpPageUp,
        KeyCode::PageDown | KeyCode::Char(' ') => InputAction::HelpPageDown,

        // Actions
        KeyCode::Char('r') | KeyCode::Char('R') => InputAction::Restart,
        KeyCode::Char('?') | KeyCode::F(1) => InputAction::ToggleHelp,

        _ => InputAction::Other,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> InputAction {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(press(KeyCode::Up), InputAction::Move(Direction::Up));
        assert_eq!(press(KeyCode::Down), InputAction::Move(Direction::Down));
        assert_eq!(press(KeyCode::Left), InputAction::Move(Direction::Left));
        assert_eq!(press(KeyCode::Right), InputAction::Move(Direction::Right));

        assert_eq!(press(KeyCode::Char('k')), InputAction::Move(Direction::Up));
        assert_eq!(press(KeyCode::Char('J')), InputAction::Move(Direction::Down));
        assert_eq!(press(KeyCode::Char('a')), InputAction::Move(Direction::Left));
        assert_eq!(press(KeyCode::Char('D')), InputAction::Move(Direction::Right));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(press(KeyCode::Char('r')), InputAction::Restart);
        assert_eq!(press(KeyCode::Char('?')), InputAction::ToggleHelp);
        assert_eq!(press(KeyCode::F(1)), InputAction::ToggleHelp);
        assert_eq!(press(KeyCode::PageUp), InputAction::HelpPageUp);
        assert_eq!(press(KeyCode::PageDown), InputAction::HelpPageDown);
        assert_eq!(press(KeyCode::Char('x')), InputAction::Other);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            InputAction::Quit
        );
    }

    #[test]
    fn test_event_filtering() {
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_event(&Event::Key(release)), None);
        assert_eq!(
            map_event(&Event::Key(KeyEvent::from(KeyCode::Left))),
            Some(InputAction::Move(Direction::Left))
        );
        assert_eq!(
            map_event(&Event::Resize(100, 40)),
            Some(InputAction::Resize(100, 40))
        );
        assert_eq!(map_event(&Event::FocusGained), None);
    }
}
